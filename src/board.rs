// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::Tile;
use super::board_layout::{BoardLayout, Premium};
use super::error;
use super::matrix::{Dim, Direction, Position};

#[derive(Clone, Debug)]
pub struct Square {
    pub letter_multiplier: u8,
    pub word_multiplier: u8,
    tile: Option<Tile>,
}

impl Square {
    fn new(premium: Premium) -> Self {
        Self {
            letter_multiplier: premium.letter_multiplier,
            word_multiplier: premium.word_multiplier,
            tile: None,
        }
    }

    #[inline(always)]
    pub fn has_tile(&self) -> bool {
        self.tile.is_some()
    }

    #[inline(always)]
    pub fn tile(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub direction: Direction,
    pub tiles: Vec<Tile>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub position: Position,
    pub direction: Direction,
    pub limit: i8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceResult {
    Invalid { reason: &'static str },
    Valid { words: Vec<String>, points: u32 },
}

impl PlaceResult {
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        matches!(self, PlaceResult::Valid { .. })
    }

    #[inline(always)]
    pub fn points(&self) -> u32 {
        match self {
            PlaceResult::Valid { points, .. } => *points,
            PlaceResult::Invalid { .. } => 0,
        }
    }

    #[inline(always)]
    pub fn words(&self) -> &[String] {
        match self {
            PlaceResult::Valid { words, .. } => words,
            PlaceResult::Invalid { .. } => &[],
        }
    }
}

// letters, face value sum and word multiplier of one word being read off the board.
struct WordTally {
    word: String,
    points: u32,
    multiplier: u32,
}

impl WordTally {
    fn new() -> Self {
        Self {
            word: String::new(),
            points: 0,
            multiplier: 1,
        }
    }

    // premiums only count for newly placed tiles.
    #[inline(always)]
    fn add(&mut self, square: &Square, letter: char, tile: &Tile, newly_placed: bool) {
        self.word.push(letter);
        if newly_placed {
            self.points += tile.points() * square.letter_multiplier as u32;
            self.multiplier *= square.word_multiplier as u32;
        } else {
            self.points += tile.points();
        }
    }

    #[inline(always)]
    fn score(&self) -> u32 {
        self.points * self.multiplier
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.word.chars().count()
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    squares: Box<[Square]>,
    dim: Dim,
    start: Position,
    num_tiles: usize,
}

impl Board {
    pub fn new(layout: &BoardLayout) -> Self {
        Self {
            squares: layout.premiums().iter().map(|&p| Square::new(p)).collect(),
            dim: layout.dim(),
            start: layout.start(),
            num_tiles: 0,
        }
    }

    pub fn read(path: &str) -> error::Returns<Board> {
        Ok(Self::new(&BoardLayout::read(path)?))
    }

    #[inline(always)]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    #[inline(always)]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> usize {
        self.num_tiles
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        !self.at(self.start).has_tile()
    }

    #[inline(always)]
    pub fn is_in_bounds(&self, position: Position) -> bool {
        self.dim.contains(position)
    }

    // panics when out of bounds.
    #[inline(always)]
    pub fn at(&self, position: Position) -> &Square {
        assert!(self.is_in_bounds(position), "{:?} is off the board", position);
        &self.squares[self.dim.at(position)]
    }

    #[inline(always)]
    pub fn has_tile_at(&self, position: Position) -> bool {
        self.is_in_bounds(position) && self.at(position).has_tile()
    }

    // the letter a tile spells, which for a blank is its assigned letter.
    #[inline(always)]
    pub fn letter_at(&self, position: Position) -> Option<char> {
        if self.is_in_bounds(position) {
            self.at(position).tile().and_then(|t| t.effective_letter())
        } else {
            None
        }
    }

    pub fn test_place(&self, placement: &Placement) -> PlaceResult {
        let direction = placement.direction;
        let mut cursor = placement.position;

        if !self.is_in_bounds(cursor) {
            return PlaceResult::Invalid {
                reason: "given starting placement must be in bounds",
            };
        }
        if self.at(cursor).has_tile() {
            return PlaceResult::Invalid {
                reason: "cannot start a word on an already-placed tile",
            };
        }
        if placement
            .tiles
            .iter()
            .any(|t| t.effective_letter().is_none())
        {
            return PlaceResult::Invalid {
                reason: "wildcard tiles must be assigned a letter",
            };
        }

        // go to start of word
        while self.has_tile_at(cursor.translate(direction, -1)) {
            cursor = cursor.translate(direction, -1);
        }

        let mut start_or_neighboring_tile = false;
        let mut main_word = WordTally::new();
        let mut cross_words = Vec::new();
        let mut total_points = 0;
        let mut remaining = placement.tiles.iter();
        let mut next_tile = remaining.next();

        loop {
            let occupied = self.has_tile_at(cursor);
            if next_tile.is_none() && !occupied {
                break;
            }
            if !self.is_in_bounds(cursor) {
                return PlaceResult::Invalid {
                    reason: "word placement goes out of bounds",
                };
            }
            let square = self.at(cursor);
            start_or_neighboring_tile |= occupied || cursor == self.start;

            let (tile, newly_placed) = match square.tile() {
                Some(tile) => (tile, false),
                None => match next_tile {
                    Some(tile) => {
                        next_tile = remaining.next();
                        (tile, true)
                    }
                    None => break,
                },
            };
            let Some(letter) = tile.effective_letter() else {
                break;
            };
            main_word.add(square, letter, tile, newly_placed);

            if newly_placed {
                let perpendicular = !direction;
                let mut cross_cursor = cursor;
                while self.has_tile_at(cross_cursor.translate(perpendicular, -1)) {
                    cross_cursor = cross_cursor.translate(perpendicular, -1);
                }
                if cross_cursor != cursor || self.has_tile_at(cursor.translate(perpendicular, 1))
                {
                    start_or_neighboring_tile = true;
                    let mut cross_word = WordTally::new();
                    while cross_cursor == cursor || self.has_tile_at(cross_cursor) {
                        let cross_square = self.at(cross_cursor);
                        match cross_square.tile() {
                            Some(existing) => cross_word.add(
                                cross_square,
                                existing.effective_letter().unwrap_or(existing.letter()),
                                existing,
                                false,
                            ),
                            None => cross_word.add(cross_square, letter, tile, true),
                        }
                        cross_cursor = cross_cursor.translate(perpendicular, 1);
                    }
                    total_points += cross_word.score();
                    cross_words.push(cross_word.word);
                }
            }

            cursor = cursor.translate(direction, 1);
        }

        let mut words = Vec::with_capacity(cross_words.len() + 1);
        if main_word.len() > 1 {
            total_points += main_word.score();
            words.push(main_word.word);
        }
        words.extend(cross_words);

        if words.is_empty() {
            return PlaceResult::Invalid {
                reason: "no words formed",
            };
        }
        if !start_or_neighboring_tile {
            return PlaceResult::Invalid {
                reason: "words must neighbor placed tile or contain start square",
            };
        }
        PlaceResult::Valid {
            words,
            points: total_points,
        }
    }

    pub fn place(&mut self, placement: &Placement) -> PlaceResult {
        let result = self.test_place(placement);
        if result.is_valid() {
            let mut cursor = placement.position;
            for tile in placement.tiles.iter() {
                while self.at(cursor).has_tile() {
                    cursor = cursor.translate(placement.direction, 1);
                }
                let idx = self.dim.at(cursor);
                self.squares[idx].tile = Some(*tile);
                self.num_tiles += 1;
                cursor = cursor.translate(placement.direction, 1);
            }
        }
        result
    }

    // sets up a position without validation. panics when out of bounds.
    pub fn put_tile(&mut self, position: Position, tile: Tile) {
        assert!(self.is_in_bounds(position), "{:?} is off the board", position);
        let idx = self.dim.at(position);
        if self.squares[idx].tile.replace(tile).is_none() {
            self.num_tiles += 1;
        }
    }

    fn is_anchor_spot(&self, position: Position) -> bool {
        self.is_in_bounds(position)
            && !self.at(position).has_tile()
            && position.neighbors().iter().any(|&p| self.has_tile_at(p))
    }

    // empty non-anchor squares before the position, stopping at a tile, another anchor or the edge.
    fn limit_before(&self, position: Position, direction: Direction) -> i8 {
        let mut limit = 0;
        let mut cursor = position.translate(direction, -1);
        while self.is_in_bounds(cursor)
            && !self.at(cursor).has_tile()
            && !self.is_anchor_spot(cursor)
        {
            limit += 1;
            cursor = cursor.translate(direction, -1);
        }
        limit
    }

    pub fn get_anchors(&self) -> Vec<Anchor> {
        if self.is_empty() {
            return vec![
                Anchor {
                    position: self.start,
                    direction: Direction::Across,
                    limit: self.start.col,
                },
                Anchor {
                    position: self.start,
                    direction: Direction::Down,
                    limit: self.start.row,
                },
            ];
        }

        let mut anchors = Vec::new();
        for position in self.dim.positions() {
            if self.is_anchor_spot(position) {
                for direction in [Direction::Across, Direction::Down] {
                    anchors.push(Anchor {
                        position,
                        direction,
                        limit: self.limit_before(position, direction),
                    });
                }
            }
        }
        anchors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::english_tile;
    use crate::board_layout::make_standard_board_layout;

    fn tiles(s: &str) -> Vec<Tile> {
        s.chars()
            .map(|c| {
                if c.is_ascii_lowercase() {
                    let mut t = Tile::blank();
                    t.assign(c).unwrap();
                    t
                } else {
                    english_tile(c).unwrap()
                }
            })
            .collect()
    }

    fn placement(row: i8, col: i8, direction: Direction, s: &str) -> Placement {
        Placement {
            position: Position::new(row, col),
            direction,
            tiles: tiles(s),
        }
    }

    fn board_with_cat() -> Board {
        let mut board = Board::new(&make_standard_board_layout());
        assert!(board.place(&placement(7, 7, Direction::Across, "CAT")).is_valid());
        board
    }

    #[test]
    fn first_word_doubles_on_start_square() {
        let board = Board::new(&make_standard_board_layout());
        let result = board.test_place(&placement(7, 7, Direction::Across, "CAT"));
        assert_eq!(
            result,
            PlaceResult::Valid {
                words: vec!["CAT".into()],
                points: (3 + 1 + 1) * 2,
            }
        );
    }

    #[test]
    fn first_word_must_cover_start_square() {
        let board = Board::new(&make_standard_board_layout());
        assert_eq!(
            board.test_place(&placement(2, 2, Direction::Across, "CAT")),
            PlaceResult::Invalid {
                reason: "words must neighbor placed tile or contain start square"
            }
        );
        assert_eq!(
            board.test_place(&placement(2, 2, Direction::Across, "C")),
            PlaceResult::Invalid {
                reason: "no words formed"
            }
        );
    }

    #[test]
    fn off_grid_and_overflowing_placements() {
        let board = board_with_cat();
        assert_eq!(
            board.test_place(&placement(15, 0, Direction::Across, "AT")),
            PlaceResult::Invalid {
                reason: "given starting placement must be in bounds"
            }
        );
        assert_eq!(
            board.test_place(&placement(-1, 3, Direction::Down, "AT")),
            PlaceResult::Invalid {
                reason: "given starting placement must be in bounds"
            }
        );
        assert_eq!(
            board.test_place(&placement(7, 13, Direction::Across, "ATE")),
            PlaceResult::Invalid {
                reason: "word placement goes out of bounds"
            }
        );
    }

    #[test]
    fn replaying_a_committed_move_is_rejected() {
        let mut board = Board::new(&make_standard_board_layout());
        let cat = placement(7, 7, Direction::Across, "CAT");
        assert!(board.place(&cat).is_valid());
        assert_eq!(board.num_tiles(), 3);
        assert_eq!(
            board.test_place(&cat),
            PlaceResult::Invalid {
                reason: "cannot start a word on an already-placed tile"
            }
        );
        assert!(!board.place(&cat).is_valid());
        assert_eq!(board.num_tiles(), 3);
    }

    #[test]
    fn invalid_placement_leaves_board_untouched() {
        let mut board = board_with_cat();
        let result = board.place(&placement(0, 0, Direction::Across, "DOG"));
        assert!(!result.is_valid());
        assert_eq!(board.num_tiles(), 3);
        assert!(!board.has_tile_at(Position::new(0, 0)));
    }

    #[test]
    fn extending_through_existing_tiles() {
        let board = board_with_cat();
        // S after CAT: existing letters count at face value, S sits on a plain square.
        let result = board.test_place(&placement(7, 10, Direction::Across, "S"));
        assert_eq!(
            result,
            PlaceResult::Valid {
                words: vec!["CATS".into()],
                points: 3 + 1 + 1 + 1,
            }
        );
        // new tiles run straight into CAT.
        let result = board.test_place(&placement(7, 5, Direction::Across, "SC"));
        assert_eq!(result.words(), ["SCCAT"]);
    }

    #[test]
    fn cross_word_is_formed_and_scored() {
        let board = board_with_cat();
        // S under C forms CS down, S on (8,7) is a plain square.
        let result = board.test_place(&placement(8, 7, Direction::Down, "S"));
        assert_eq!(
            result,
            PlaceResult::Valid {
                words: vec!["CS".into()],
                points: 3 + 1,
            }
        );
        // AT under AT (8,8)-(8,9): main word AT plus cross words AA and TT.
        // (8,8) is a double letter square.
        let result = board.test_place(&placement(8, 8, Direction::Across, "AT"));
        assert_eq!(
            result,
            PlaceResult::Valid {
                words: vec!["AT".into(), "AA".into(), "TT".into()],
                points: (1 * 2 + 1) + (1 + 1 * 2) + (1 + 1),
            }
        );
    }

    #[test]
    fn multipliers_are_shared_by_main_and_cross_words() {
        let mut board = Board::new(&make_standard_board_layout());
        assert!(board.place(&placement(7, 6, Direction::Across, "AT")).is_valid());
        // X lands on the double letter square (6,6) above A, doubling in AX and XA.
        let result = board.test_place(&placement(6, 5, Direction::Across, "AX"));
        assert_eq!(
            result,
            PlaceResult::Valid {
                words: vec!["AX".into(), "XA".into()],
                points: (1 + 16) + (16 + 1),
            }
        );
    }

    #[test]
    fn premium_is_spent_once_placed() {
        let mut board = Board::new(&make_standard_board_layout());
        assert!(board.place(&placement(7, 7, Direction::Across, "CAT")).is_valid());
        // CATS re-reads the start square at face value.
        let result = board.test_place(&placement(7, 10, Direction::Across, "S"));
        assert_eq!(result.points(), 6);
    }

    #[test]
    fn wildcard_scores_nothing_anywhere() {
        let board = Board::new(&make_standard_board_layout());
        let result = board.test_place(&placement(7, 7, Direction::Across, "qI"));
        assert_eq!(
            result,
            PlaceResult::Valid {
                words: vec!["QI".into()],
                points: (0 + 1) * 2,
            }
        );
        let mut unassigned = placement(7, 7, Direction::Across, "QI");
        unassigned.tiles[0] = Tile::blank();
        assert_eq!(
            board.test_place(&unassigned),
            PlaceResult::Invalid {
                reason: "wildcard tiles must be assigned a letter"
            }
        );
    }

    #[test]
    fn wildcard_in_cross_word_is_zero_too() {
        let mut board = Board::new(&make_standard_board_layout());
        assert!(board.place(&placement(7, 7, Direction::Across, "qI")).is_valid());
        assert_eq!(board.letter_at(Position::new(7, 7)), Some('Q'));
        // S under the blank Q: QS worth only S.
        let result = board.test_place(&placement(8, 7, Direction::Down, "S"));
        assert_eq!(result.words(), ["QS"]);
        assert_eq!(result.points(), 1);
    }

    #[test]
    fn anchors_on_empty_board() {
        let board = Board::new(&make_standard_board_layout());
        let anchors = board.get_anchors();
        assert_eq!(
            anchors,
            [
                Anchor {
                    position: Position::new(7, 7),
                    direction: Direction::Across,
                    limit: 7,
                },
                Anchor {
                    position: Position::new(7, 7),
                    direction: Direction::Down,
                    limit: 7,
                },
            ]
        );
    }

    #[test]
    fn anchors_around_a_word() {
        let board = board_with_cat();
        let anchors = board.get_anchors();
        // 3 above, 3 below, 1 left, 1 right; two directions each.
        assert_eq!(anchors.len(), 16);
        let find = |row, col, direction| {
            anchors
                .iter()
                .find(|a| a.position == Position::new(row, col) && a.direction == direction)
                .copied()
        };
        // left of C: 6 free squares to the edge.
        assert_eq!(find(7, 6, Direction::Across).unwrap().limit, 6);
        // right of T: tile immediately before.
        assert_eq!(find(7, 10, Direction::Across).unwrap().limit, 0);
        // above A: the square to its left is an anchor too.
        assert_eq!(find(6, 8, Direction::Across).unwrap().limit, 0);
        assert_eq!(find(6, 7, Direction::Across).unwrap().limit, 7);
        assert_eq!(find(6, 8, Direction::Down).unwrap().limit, 6);
        // below C: the tile is directly above.
        assert_eq!(find(8, 7, Direction::Down).unwrap().limit, 0);
        assert_eq!(find(7, 8, Direction::Across), None);
        // row-major, across before down.
        assert_eq!(anchors[0].position, Position::new(6, 7));
        assert_eq!(anchors[0].direction, Direction::Across);
        assert_eq!(anchors[1].direction, Direction::Down);
    }
}
