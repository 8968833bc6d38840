//! FEN-to-GameState parser.
//!
//! Builds a fully-populated mailbox state from a Forsyth-Edwards Notation
//! string, including rights, en-passant target, clocks and king squares.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

fn malformed(message: impl Into<String>) -> ChessErrors {
    ChessErrors::MalformedPosition(message.into())
}

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let [board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        fields[..]
    else {
        return Err(malformed(format!(
            "expected 6 space-separated fields, found {}",
            fields.len()
        )));
    };

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part, &game_state)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| malformed(format!("invalid halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| malformed(format!("invalid fullmove number: {fullmove_part}")))?;

    let kings = game_state.refresh_king_squares();
    if kings != [1, 1] {
        return Err(malformed(format!(
            "expected one king per color, found {} light and {} dark",
            kings[0], kings[1]
        )));
    }

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(malformed("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(malformed(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                if file > 8 {
                    return Err(malformed(format!("rank {} exceeds 8 files", board_rank + 1)));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| malformed(format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(malformed(format!("rank {} exceeds 8 files", board_rank + 1)));
            }
            if piece.kind() == Some(PieceKind::Pawn) && (board_rank == 0 || board_rank == 7) {
                return Err(malformed(format!("pawn on back rank {}", board_rank + 1)));
            }

            game_state.board[board_rank * 8 + file] = piece;
            file += 1;
        }

        if file != 8 {
            return Err(malformed(format!(
                "rank {} does not sum to 8 files",
                board_rank + 1
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(malformed(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = 0u8;
    for ch in castling_part.chars() {
        let flag = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(malformed(format!("invalid castling rights character: {ch}"))),
        };
        rights |= flag;
    }

    Ok(CastlingRights::from_bits(rights))
}

fn parse_en_passant_square(
    en_passant_part: &str,
    game_state: &GameState,
) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| malformed(format!("invalid en-passant square: {en_passant_part}")))?;

    // The target sits behind a pawn the opponent just pushed two ranks.
    let expected_rank = match game_state.side_to_move {
        Color::Light => 5,
        Color::Dark => 2,
    };
    if square / 8 != expected_rank {
        return Err(malformed(format!(
            "en-passant square {en_passant_part} is not on the skipped rank"
        )));
    }
    if !game_state.piece_on(square).is_empty() {
        return Err(malformed(format!("en-passant square {en_passant_part} is occupied")));
    }

    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
