//! Window and Event Loop Management
//!
//! The host-interaction shim: creates the fixed-size window, translates
//! winit events into [`InputEvent`]s for the control state, and runs the
//! per-iteration render step. With `ControlFlow::Poll`, winit dispatches
//! all pending events and then calls `about_to_wait`, so every event
//! queued before a render step is applied before that step runs.

use crate::renderer::{Renderer, COLOR_WHITE};
use crate::state::{Direction, Effect, InputEvent, RuntimeStatus};
use crate::App;
use std::time::Duration;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const WINDOW_TITLE: &str = "My Little Blackboard";
const WINDOW_XPOS: i32 = 50;
const WINDOW_YPOS: i32 = 50;
const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

/// Point diameter set at init, in pixels
const POINT_SIZE: f32 = 5.0;

/// Sleep while no input is active, to avoid busy-spinning
const IDLE_SLEEP: Duration = Duration::from_millis(10);
/// Sleep after each active frame, to bound the frame rate
const FRAME_SLEEP: Duration = Duration::from_millis(1);

/// Wrapper for the application window and state
pub struct AppWrapper {
    pub window: Option<std::sync::Arc<Window>>,
    pub renderer: Option<Renderer>,
    pub app: Option<App>,
}

impl AppWrapper {
    /// Create a new empty app wrapper
    pub fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            app: None,
        }
    }

    /// Apply a translated input event and run any resulting effect
    fn route_input(&mut self, event_loop: &ActiveEventLoop, event: InputEvent) {
        let Some(app) = &mut self.app else { return };

        match app.handle_input(event) {
            Some(Effect::ClearScreen) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.clear_screen();
                }
            }
            Some(Effect::Exit) => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }
            None => {}
        }
    }
}

impl Default for AppWrapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a physical key to the input event it produces, if any
fn map_key(code: KeyCode, state: ElementState) -> Option<InputEvent> {
    let direction = match code {
        KeyCode::ArrowUp => Some(Direction::Up),
        KeyCode::ArrowDown => Some(Direction::Down),
        KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::ArrowRight => Some(Direction::Right),
        _ => None,
    };

    if let Some(direction) = direction {
        return Some(match state {
            ElementState::Pressed => InputEvent::Pressed(direction),
            ElementState::Released => InputEvent::Released(direction),
        });
    }

    match (code, state) {
        (KeyCode::Escape | KeyCode::Backspace, ElementState::Pressed) => {
            Some(InputEvent::ClearPressed)
        }
        _ => None,
    }
}

impl ApplicationHandler for AppWrapper {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            // Created hidden; the one-time Init step makes it visible.
            let window_attributes = Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_position(winit::dpi::PhysicalPosition::new(WINDOW_XPOS, WINDOW_YPOS))
                .with_resizable(false)
                .with_visible(false);

            let window = event_loop
                .create_window(window_attributes)
                .expect("Failed to create window");

            log::info!("Window created: {:?}", window.inner_size());

            let initial_size = winit::dpi::PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT);
            let window_arc = std::sync::Arc::new(window);

            let renderer = pollster::block_on(Renderer::new(window_arc.clone(), initial_size));
            let app = App::new();

            self.window = Some(window_arc);
            self.renderer = Some(renderer);
            self.app = Some(app);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.route_input(event_loop, InputEvent::CloseRequested);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(input) = map_key(code, event.state) {
                        self.route_input(event_loop, input);
                    }
                }
            }
            WindowEvent::Resized(physical_size) => {
                if physical_size.width == 0 || physical_size.height == 0 {
                    log::warn!("Ignoring resize to zero size: {:?}", physical_size);
                    return;
                }
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let (Some(app), Some(renderer)) = (&mut self.app, &mut self.renderer) else {
            return;
        };

        match app.status() {
            RuntimeStatus::Idle => {
                std::thread::sleep(IDLE_SLEEP);
            }
            RuntimeStatus::Init => {
                if let Some(window) = &self.window {
                    window.set_visible(true);
                }
                renderer.clear_screen();
                renderer.set_point_size(POINT_SIZE);
                renderer.set_draw_color(COLOR_WHITE);
                app.finish_init();
                log::info!("Init complete, blackboard ready");
            }
            RuntimeStatus::UpdatingGraph => {
                app.render_frame(renderer);
                std::thread::sleep(FRAME_SLEEP);
            }
        }
    }
}
