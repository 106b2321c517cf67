/// View subsystem - Layout and terminal rendering
///
/// `tile_layout` turns navigation state into a pure `Frame`; `renderer`
/// is the only code that writes to the terminal.

pub mod renderer;
pub mod tile_layout;

// Re-export public interface
pub use renderer::View;
pub use tile_layout::{Frame, Hit, ViewOptions};
