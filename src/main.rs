//! Blackboard Desktop Application
//!
//! Use the arrow keys to draw on the blackboard.
//! Use Escape or Backspace to clear it.

use blackboard::AppWrapper;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() {
    env_logger::init();

    log::info!("Starting blackboard");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    // Poll: the render stepper runs every loop iteration and paces itself
    // with its own bounded sleeps.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app_wrapper = AppWrapper::new();

    event_loop.run_app(&mut app_wrapper).expect("Event loop error");
}
