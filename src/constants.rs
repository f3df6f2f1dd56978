pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Frame interval for the terminal loop (in milliseconds)
pub const DEFAULT_FRAME_MS: u64 = 500;
