use crossterm::event::{KeyCode, KeyEventKind};
use rand::Rng;

use crate::game::{Game, Step};
use crate::input::intent::Intent;

pub fn intent_for(key_code: KeyCode) -> Option<Intent> {
    match key_code {
        KeyCode::Left | KeyCode::Char('h') => Some(Intent::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Intent::MoveRight),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::SoftDrop),
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::Rotate),
        _ => None,
    }
}

/// Applies a key event to the game. Releases and unmapped keys are ignored.
pub fn handle_input<R: Rng>(game: &mut Game<R>, key_code: KeyCode, kind: KeyEventKind) -> Option<Step> {
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => intent_for(key_code).map(|intent| game.apply(intent)),
        KeyEventKind::Release => None,
    }
}
