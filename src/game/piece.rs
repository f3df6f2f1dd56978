#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I, O, T, S, Z, J, L
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I, PieceKind::O, PieceKind::T,
        PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

/// Top-left corner of a piece's bounding box, in board cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The falling piece: a geometry and its color. Where it sits on the board is
/// tracked separately as a [`Position`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Vec<Vec<bool>>,
    pub color: PieceColor,
}

impl Piece {
    pub fn new(kind: PieceKind) -> Self {
        let (rows, color): (&[&[u8]], PieceColor) = match kind {
            PieceKind::I => (&[&[1, 1, 1, 1]], PieceColor::Cyan),
            PieceKind::O => (&[&[1, 1], &[1, 1]], PieceColor::Yellow),
            PieceKind::T => (&[&[1, 1, 1], &[0, 1, 0]], PieceColor::Purple),
            PieceKind::S => (&[&[1, 1, 0], &[0, 1, 1]], PieceColor::Green),
            PieceKind::Z => (&[&[0, 1, 1], &[1, 1, 0]], PieceColor::Red),
            PieceKind::J => (&[&[1, 1, 1], &[0, 0, 1]], PieceColor::Blue),
            PieceKind::L => (&[&[1, 1, 1], &[1, 0, 0]], PieceColor::Orange),
        };

        Self {
            kind,
            shape: rows
                .iter()
                .map(|row| row.iter().map(|&c| c == 1).collect())
                .collect(),
            color,
        }
    }

    pub fn width(&self) -> usize {
        self.shape.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.shape.len()
    }

    /// Filled cells relative to the bounding box, as `(row, col)`.
    pub fn filled(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell)
                .map(move |(c, _)| (r as i32, c as i32))
        })
    }

    /// Absolute board cells covered when the bounding box sits at `position`.
    pub fn cells_at(&self, position: Position) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.filled()
            .map(move |(r, c)| (position.y + r, position.x + c))
    }
}
