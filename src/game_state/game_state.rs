//! Mailbox board state.
//!
//! `GameState` holds the 64-square piece array together with the side to
//! move, castling rights, en-passant target, clocks and cached king squares.
//! It is fully described by its FEN text; the engine treats it as derived
//! data that can always be rebuilt from a history snapshot.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: [Piece; 64],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // Indexed by `Color::index()`.
    pub king_squares: [Square; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [Piece::EMPTY; 64],
            side_to_move: Color::Light,
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_squares: [0; 2],
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Piece {
        self.board[square as usize]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Rescan the board for both kings. Returns the number found per color.
    pub fn refresh_king_squares(&mut self) -> [usize; 2] {
        let mut found = [0usize; 2];
        for (square, piece) in self.board.iter().enumerate() {
            if piece.kind() != Some(PieceKind::King) {
                continue;
            }
            if let Some(color) = piece.color() {
                self.king_squares[color.index()] = square as Square;
                found[color.index()] += 1;
            }
        }
        found
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Piece) {
        self.board[square as usize] = piece;
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, square: Square) -> Piece {
        std::mem::take(&mut self.board[square as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind};

    #[test]
    fn new_game_places_both_kings_and_all_rights() {
        let game = GameState::new_game();

        assert_eq!(game.king_square(Color::Light), 4);
        assert_eq!(game.king_square(Color::Dark), 60);
        assert_eq!(game.castling_rights, CastlingRights::ALL);
        assert_eq!(game.piece_on(0), Piece::new(Color::Light, PieceKind::Rook));
        assert_eq!(game.piece_on(59), Piece::new(Color::Dark, PieceKind::Queen));
        assert!(game.piece_on(27).is_empty());
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn refresh_king_squares_counts_kings() {
        let mut game = GameState::new_empty();
        game.set_piece(10, Piece::new(Color::Light, PieceKind::King));
        game.set_piece(50, Piece::new(Color::Dark, PieceKind::King));

        assert_eq!(game.refresh_king_squares(), [1, 1]);
        assert_eq!(game.king_squares, [10, 50]);
    }
}
