// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::Tile;
use super::board::{Board, PlaceResult, Placement};
use super::error;
use super::matrix::{Direction, Position};
use super::movegen::Move;
use super::rack::Rack;
use super::trie::Lexicon;

pub static USAGE: &str = "\
commands:
  PASS
  EXCHANGE <tiles>             e.g. EXCHANGE QV?
  PLACE <direction> <row> <col> <tiles>
                               direction is - (across) or | (down),
                               row and col count from 1,
                               ?x plays a wildcard as x, e.g. PLACE - 8 8 C?AT";

// tiles come off a copy of the rack, so asking for more than are held fails.
fn read_tiles(text: &str, rack: &Rack) -> error::Returns<Vec<Tile>> {
    let mut available = rack.clone();
    let mut tiles = Vec::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        let face = c.to_ascii_uppercase();
        let Some(mut tile) = available.take(face) else {
            return_error!(Rack, format!("tile {} is not on the rack", face));
        };
        if tile.is_blank() {
            if let Some(letter) = chars.next() {
                tile.assign(letter)?;
            }
        }
        tiles.push(tile);
    }
    if tiles.is_empty() {
        return_error!(Command, "no tiles given".into());
    }
    Ok(tiles)
}

fn read_coordinate(text: &str, what: &str) -> error::Returns<i8> {
    match text.parse::<i8>() {
        Ok(v) => Ok(v.saturating_sub(1)),
        Err(_) => {
            return_error!(Command, format!("{} must be a number, not {:?}", what, text));
        }
    }
}

// EXCHANGE tiles stay unassigned, PLACE wildcards must say what they are.
pub fn parse_move(input: &str, rack: &Rack) -> error::Returns<Move> {
    let args = match shell_words::split(input) {
        Ok(args) => args,
        Err(err) => {
            return_error!(Command, format!("cannot parse {:?}: {}", input, err));
        }
    };
    let Some(command) = args.first() else {
        return_error!(Command, "empty command".into());
    };
    match (command.to_ascii_uppercase().as_str(), args.len()) {
        ("PASS", 1) => Ok(Move::Pass),
        ("EXCHANGE", 2) => {
            let mut available = rack.clone();
            let mut tiles = Vec::new();
            for c in args[1].chars() {
                let face = c.to_ascii_uppercase();
                match available.take(face) {
                    Some(tile) => tiles.push(tile),
                    None => {
                        return_error!(Rack, format!("tile {} is not on the rack", face));
                    }
                }
            }
            if tiles.is_empty() {
                return_error!(Command, "no tiles given".into());
            }
            Ok(Move::Exchange { tiles })
        }
        ("PLACE", 5) => {
            let direction = match args[1].as_str() {
                "-" => Direction::Across,
                "|" => Direction::Down,
                other => {
                    return_error!(
                        Command,
                        format!("direction must be - or |, not {:?}", other)
                    );
                }
            };
            let row = read_coordinate(&args[2], "row")?;
            let col = read_coordinate(&args[3], "col")?;
            let tiles = read_tiles(&args[4], rack)?;
            if let Some(tile) = tiles.iter().find(|t| t.effective_letter().is_none()) {
                return_error!(
                    Command,
                    format!("wildcard {} must be followed by its letter", tile.letter())
                );
            }
            Ok(Move::Place(Placement {
                position: Position::new(row, col),
                direction,
                tiles,
            }))
        }
        _ => {
            return_error!(Command, format!("unknown command {:?}\n{}", input, USAGE));
        }
    }
}

// the placement as the board would score it, provided every word it forms is known.
pub fn check_placement<L: Lexicon>(
    board: &Board,
    lexicon: &L,
    placement: &Placement,
) -> error::Returns<PlaceResult> {
    let result = board.test_place(placement);
    match &result {
        PlaceResult::Invalid { reason } => {
            return_error!(Command, format!("invalid placement: {}", reason));
        }
        PlaceResult::Valid { words, .. } => {
            if let Some(word) = words.iter().find(|word| !lexicon.is_word(word)) {
                return_error!(Lexical, format!("{} is not a word", word));
            }
        }
    }
    Ok(result)
}

// parses, and for a placement also checks it against the board and dictionary.
pub fn read_move<L: Lexicon>(
    input: &str,
    board: &Board,
    lexicon: &L,
    rack: &Rack,
) -> error::Returns<Move> {
    let the_move = parse_move(input, rack)?;
    if let Move::Place(placement) = &the_move {
        check_placement(board, lexicon, placement)?;
    }
    Ok(the_move)
}
