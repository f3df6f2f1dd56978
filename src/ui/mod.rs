pub mod renderer;
pub mod surface;

pub use renderer::ui;
pub use surface::{CellFrame, Surface};
