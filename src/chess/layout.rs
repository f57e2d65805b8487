use std::fmt;

/// Piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Starts on rows 0 and 1.
    White,
    /// Starts on rows 6 and 7.
    Black,
}

/// Piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Pawn.
    Pawn,
    /// Rook.
    Rook,
    /// Knight.
    Knight,
    /// Bishop.
    Bishop,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "White",
            Self::Black => "Black",
        })
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pawn => "Pawn",
            Self::Rook => "Rook",
            Self::Knight => "Knight",
            Self::Bishop => "Bishop",
            Self::Queen => "Queen",
            Self::King => "King",
        })
    }
}

/// One piece of the starting position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSpec {
    /// Color.
    pub side: Side,
    /// Type.
    pub kind: PieceKind,
    /// Board row.
    pub row: usize,
    /// Board column.
    pub col: usize,
    /// Unique node name, e.g. `White-Pawn-3` or `Black-Queen`.
    pub name: String,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

fn rank(side: Side, row: usize, kinds: &[PieceKind]) -> Vec<PieceSpec> {
    let mut seen = Vec::<PieceKind>::new();
    kinds
        .iter()
        .enumerate()
        .map(|(col, &kind)| {
            let index = seen.iter().filter(|&&k| k == kind).count();
            seen.push(kind);
            let name = match kind {
                PieceKind::Queen | PieceKind::King => format!("{side}-{kind}"),
                _ => format!("{side}-{kind}-{index}"),
            };
            PieceSpec {
                side,
                kind,
                row,
                col,
                name,
            }
        })
        .collect()
}

/// The 32 pieces of a standard starting position.
#[must_use]
pub fn initial_layout() -> Vec<PieceSpec> {
    let pawns = [PieceKind::Pawn; 8];
    let mut pieces = rank(Side::White, 1, &pawns);
    pieces.extend(rank(Side::White, 0, &BACK_RANK));
    pieces.extend(rank(Side::Black, 6, &pawns));
    pieces.extend(rank(Side::Black, 7, &BACK_RANK));
    pieces
}
