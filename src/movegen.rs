// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{BLANK_LETTER, Tile};
use super::board::{Board, PlaceResult, Placement};
use super::matrix::{Direction, Position};
use super::rack::Rack;
use super::trie::Lexicon;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Pass,
    Exchange { tiles: Vec<Tile> },
    Place(Placement),
}

struct Env<'a, L: Lexicon> {
    board: &'a Board,
    lexicon: &'a L,
    rack: Rack,
    direction: Direction,
    anchor: Position,
    // leftmost new tile, the anchor until a left part is grown.
    start: Position,
    word: String,
    tiles: Vec<Tile>,
    candidates: &'a mut Vec<Placement>,
}

impl<L: Lexicon> Env<'_, L> {
    // a wildcard taken this way already stands for the letter.
    fn take_as(&mut self, face: char, letter: char) -> Option<Tile> {
        let mut tile = self.rack.take(face)?;
        if tile.is_blank() && tile.assign(letter).is_err() {
            self.rack.add(tile);
            return None;
        }
        Some(tile)
    }

    fn record(&mut self) {
        self.candidates.push(Placement {
            position: self.start,
            direction: self.direction,
            tiles: self.tiles.clone(),
        });
    }
}

fn extend_right<L: Lexicon>(env: &mut Env<'_, L>, position: Position, node: L::Node) {
    let lexicon = env.lexicon;
    let occupied = env.board.has_tile_at(position);
    if !occupied && !env.tiles.is_empty() && lexicon.accepts(node) {
        env.record();
    }
    if !env.board.is_in_bounds(position) {
        return;
    }
    let next_position = position.translate(env.direction, 1);
    if let Some(letter) = env.board.letter_at(position) {
        if let Some(next) = lexicon.advance(node, letter) {
            env.word.push(letter);
            extend_right(env, next_position, next);
            env.word.pop();
        }
        return;
    }
    for &(letter, next) in lexicon.arcs(node) {
        // concrete tile first, then a wildcard
        for face in [letter, BLANK_LETTER] {
            let Some(tile) = env.take_as(face, letter) else {
                continue;
            };
            env.word.push(letter);
            env.tiles.push(tile);
            extend_right(env, next_position, next);
            env.tiles.pop();
            env.word.pop();
            env.rack.add(tile);
        }
    }
}

fn left_part<L: Lexicon>(env: &mut Env<'_, L>, node: L::Node, limit: i8) {
    extend_right(env, env.anchor, node);
    if limit <= 0 {
        return;
    }
    let lexicon = env.lexicon;
    let mut prefix = String::with_capacity(env.word.len() + 1);
    for &(letter, _) in lexicon.arcs(lexicon.root()) {
        if !env.rack.has(letter) && !env.rack.has(BLANK_LETTER) {
            continue;
        }
        prefix.clear();
        prefix.push(letter);
        prefix.push_str(&env.word);
        let Some(next) = lexicon.find_prefix(&prefix) else {
            continue;
        };
        for face in [letter, BLANK_LETTER] {
            let Some(tile) = env.take_as(face, letter) else {
                continue;
            };
            env.word.insert(0, letter);
            env.tiles.insert(0, tile);
            env.start = env.start.translate(env.direction, -1);
            left_part(env, next, limit - 1);
            env.start = env.start.translate(env.direction, 1);
            env.tiles.remove(0);
            env.word.remove(0);
            env.rack.add(tile);
        }
    }
}

// the run of tiles right before the position, in reading order.
fn prefix_before(board: &Board, position: Position, direction: Direction) -> String {
    let mut letters = Vec::new();
    let mut cursor = position.translate(direction, -1);
    while let Some(letter) = board.letter_at(cursor) {
        letters.push(letter);
        cursor = cursor.translate(direction, -1);
    }
    letters.iter().rev().collect()
}

#[derive(Default)]
pub struct MoveGenerator {
    pub candidates: Vec<Placement>,
}

impl MoveGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    // every placement the rack may spell, not yet checked against cross words.
    pub fn gen_moves<L: Lexicon>(&mut self, board: &Board, lexicon: &L, rack: &Rack) {
        self.candidates.clear();
        let anchors = board.get_anchors();
        let mut env = Env {
            board,
            lexicon,
            rack: rack.clone(),
            direction: Direction::Across,
            anchor: board.start(),
            start: board.start(),
            word: String::new(),
            tiles: Vec::new(),
            candidates: &mut self.candidates,
        };

        let board_is_empty = board.is_empty();
        for anchor in anchors.iter() {
            env.direction = anchor.direction;
            env.anchor = anchor.position;
            env.start = anchor.position;
            if board_is_empty {
                extend_right(&mut env, anchor.position, lexicon.root());
            } else if anchor.limit == 0 {
                let prefix = prefix_before(board, anchor.position, anchor.direction);
                let Some(node) = lexicon.find_prefix(&prefix) else {
                    continue;
                };
                env.word.push_str(&prefix);
                extend_right(&mut env, anchor.position, node);
                env.word.clear();
            } else {
                left_part(&mut env, lexicon.root(), anchor.limit);
            }
            debug_assert!(env.word.is_empty() && env.tiles.is_empty());
        }
        debug_assert_eq!(env.rack, *rack);

        log::debug!(
            "{} anchors, {} candidates for rack {}",
            anchors.len(),
            self.candidates.len(),
            rack.letters()
        );
    }

    pub fn get_move<L: Lexicon>(&mut self, board: &Board, lexicon: &L, rack: &Rack) -> Move {
        self.gen_moves(board, lexicon, rack);
        get_best_move(&self.candidates, board, lexicon)
    }
}

pub fn get_best_move<L: Lexicon>(candidates: &[Placement], board: &Board, lexicon: &L) -> Move {
    let mut best: Option<(&Placement, u32)> = None;
    let mut num_valid = 0;
    for candidate in candidates {
        let PlaceResult::Valid { words, points } = board.test_place(candidate) else {
            continue;
        };
        if !words.iter().all(|word| lexicon.is_word(word)) {
            continue;
        }
        num_valid += 1;
        if best.is_none_or(|(_, best_points)| points > best_points) {
            best = Some((candidate, points));
        }
    }
    log::debug!(
        "{} of {} candidates are playable",
        num_valid,
        candidates.len()
    );
    match best {
        Some((placement, _)) => Move::Place(placement.clone()),
        None => Move::Pass,
    }
}
