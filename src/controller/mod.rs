/// Controller subsystem - Navigation state and input handling
///
/// Input events flow through `KeyHandler` into `ViewController` transitions;
/// `App` drives that loop against an injected input source.

pub mod app;
pub mod input;
pub mod key_handler;
pub mod navigation;
pub mod view_controller;

// Re-export public interface
pub use app::App;
pub use view_controller::ViewController;
