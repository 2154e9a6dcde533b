// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, board_layout, error, matrix, movegen, rack, trie};

// board: one string per row, '.' or ' ' for empty, A-Z for tiles, a-z for wildcards.
// rack: letters, '?' for a wildcard.
// layout: path of a board layout file, the standard board when absent.
#[derive(serde::Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub dictionary: String,
    pub rack: String,
    pub board: Vec<String>,
    #[serde(default)]
    pub layout: Option<String>,
}

// row and col count from 1, tiles read like the PLACE command (?x is a wildcard as x).
#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "action")]
pub enum Answer {
    #[serde(rename = "pass")]
    Pass,
    #[serde(rename = "exchange")]
    Exchange { tiles: String },
    #[serde(rename = "place")]
    Place {
        row: i8,
        col: i8,
        down: bool,
        tiles: String,
        words: Vec<String>,
        score: u32,
    },
}

impl Question {
    pub fn parse(text: &str) -> error::Returns<Question> {
        match serde_json::from_str::<Question>(text) {
            Ok(question) => Ok(question),
            Err(err) => {
                return_error!(Format, format!("invalid question: {}", err));
            }
        }
    }
}

pub fn rack_from_letters(letters: &str) -> error::Returns<rack::Rack> {
    let mut tiles = Vec::with_capacity(letters.len());
    for c in letters.chars() {
        match alphabet::english_tile(c) {
            Some(tile) => tiles.push(tile),
            None => {
                return_error!(Format, format!("rack has invalid tile {:?}", c));
            }
        }
    }
    Ok(rack::Rack::from_tiles(tiles))
}

pub fn board_from_rows(
    layout: &board_layout::BoardLayout,
    rows: &[String],
) -> error::Returns<board::Board> {
    let dim = layout.dim();
    if rows.len() != dim.rows as usize {
        return_error!(
            Format,
            format!("board: need {} rows, found {} rows", dim.rows, rows.len())
        );
    }
    let mut board = board::Board::new(layout);
    for (row_num, row) in (0..).zip(rows.iter()) {
        if row.chars().count() != dim.cols as usize {
            return_error!(
                Format,
                format!(
                    "board row {}: need {} cols, found {} cols",
                    row_num + 1,
                    dim.cols,
                    row.chars().count()
                )
            );
        }
        for (col_num, c) in (0..).zip(row.chars()) {
            let position = matrix::Position::new(row_num, col_num);
            if c == '.' || c == ' ' {
                continue;
            }
            let tile = if c.is_lowercase() {
                let mut tile = alphabet::Tile::blank();
                tile.assign(c)?;
                tile
            } else {
                match alphabet::english_tile(c) {
                    Some(tile) if !tile.is_blank() => tile,
                    _ => {
                        return_error!(
                            Format,
                            format!(
                                "board row {} col {}: invalid tile {:?}",
                                row_num + 1,
                                col_num + 1,
                                c
                            )
                        );
                    }
                }
            };
            board.put_tile(position, tile);
        }
    }
    Ok(board)
}

fn tiles_as_letters(tiles: &[alphabet::Tile]) -> String {
    let mut s = String::with_capacity(tiles.len() * 2);
    for tile in tiles {
        s.push(tile.letter());
        if let (true, Some(letter)) = (tile.is_blank(), tile.assigned()) {
            s.push(letter);
        }
    }
    s
}

impl Answer {
    pub fn new(the_move: &movegen::Move, board: &board::Board) -> Self {
        match the_move {
            movegen::Move::Pass => Answer::Pass,
            movegen::Move::Exchange { tiles } => Answer::Exchange {
                tiles: tiles_as_letters(tiles),
            },
            movegen::Move::Place(placement) => {
                let result = board.test_place(placement);
                Answer::Place {
                    row: placement.position.row + 1,
                    col: placement.position.col + 1,
                    down: placement.direction == matrix::Direction::Down,
                    tiles: tiles_as_letters(&placement.tiles),
                    words: result.words().to_vec(),
                    score: result.points(),
                }
            }
        }
    }
}

pub struct Kibitzer {
    pub move_generator: movegen::MoveGenerator,
}

impl Kibitzer {
    pub fn new() -> Self {
        Self {
            move_generator: movegen::MoveGenerator::new(),
        }
    }

    pub fn answer<L: trie::Lexicon>(
        &mut self,
        lexicon: &L,
        layout: &board_layout::BoardLayout,
        question: &Question,
    ) -> error::Returns<Answer> {
        let board = board_from_rows(layout, &question.board)?;
        let rack = rack_from_letters(&question.rack)?;
        let best = self.move_generator.get_move(&board, lexicon, &rack);
        Ok(Answer::new(&best, &board))
    }
}

impl Default for Kibitzer {
    fn default() -> Self {
        Self::new()
    }
}
