//! Falling-block puzzle engine with a terminal front end.
//!
//! [`game::Game`] owns the board and the falling piece and exposes two entry
//! points: `update` for a gravity tick and `draw` to paint onto a
//! [`ui::Surface`]. Key events reach it through [`input::handle_input`].

pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod ui;
