pub mod handler;
pub mod intent;

pub use handler::{handle_input, intent_for};
pub use intent::Intent;
