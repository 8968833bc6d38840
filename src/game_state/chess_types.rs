//! Core value types shared by every subsystem: colors, piece kinds, the
//! packed piece tag stored on the board, squares, and castling rights.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Board square index (`0..=63`, `a1 == 0`, `h8 == 63`).
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Tag bits stored above the piece-kind bits of a `Piece`.
    #[inline]
    const fn tag(self) -> u8 {
        match self {
            Color::Light => 1 << 3,
            Color::Dark => 2 << 3,
        }
    }

    /// Rank (`0..=7`) on which this color's pawns start.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    /// Rank (`0..=7`) on which this color's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

/// Piece kind. Discriminants are the 3-bit type codes stored in a `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King = 1,
    Queen = 2,
    Rook = 3,
    Bishop = 4,
    Knight = 5,
    Pawn = 6,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::King),
            2 => Some(PieceKind::Queen),
            3 => Some(PieceKind::Rook),
            4 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Knight),
            6 => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// Packed piece tag: kind in bits 0..3, color in bits 3..5. Zero is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

const KIND_MASK: u8 = 0b0_0111;
const COLOR_MASK: u8 = 0b1_1000;

impl Piece {
    pub const EMPTY: Piece = Piece(0);

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece(color.tag() | kind.code())
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_code(self.0 & KIND_MASK)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self.0 & COLOR_MASK {
            0b0_1000 => Some(Color::Light),
            0b1_0000 => Some(Color::Dark),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        (self.0 & COLOR_MASK) == color.tag()
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self == Piece::new(color, kind)
    }

    /// Raw tag value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Castling wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

/// Four independent castling flags packed into a bitmask.
///
/// Rights are only ever revoked during play; the only way to set a flag is to
/// build the value from decoded position text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

pub const CASTLE_LIGHT_KINGSIDE: u8 = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: u8 = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: u8 = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: u8 = 1 << 3;

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(
        CASTLE_LIGHT_KINGSIDE
            | CASTLE_LIGHT_QUEENSIDE
            | CASTLE_DARK_KINGSIDE
            | CASTLE_DARK_QUEENSIDE,
    );

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        CastlingRights(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn flag(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::Light, CastlingSide::KingSide) => CASTLE_LIGHT_KINGSIDE,
            (Color::Light, CastlingSide::QueenSide) => CASTLE_LIGHT_QUEENSIDE,
            (Color::Dark, CastlingSide::KingSide) => CASTLE_DARK_KINGSIDE,
            (Color::Dark, CastlingSide::QueenSide) => CASTLE_DARK_QUEENSIDE,
        }
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastlingSide) {
        self.0 &= !Self::flag(color, side);
    }

    #[inline]
    pub fn revoke_color(&mut self, color: Color) {
        self.revoke(color, CastlingSide::KingSide);
        self.revoke(color, CastlingSide::QueenSide);
    }

    /// True when every flag set in `self` is also set in `earlier`.
    #[inline]
    pub const fn is_subset_of(self, earlier: CastlingRights) -> bool {
        (self.0 & !earlier.0) == 0
    }
}
