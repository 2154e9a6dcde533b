// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, game_state, matrix, movegen, rack};
use std::fmt::Write;

#[inline(always)]
pub fn empty_label(board: &board::Board, position: matrix::Position) -> &'static str {
    if position == board.start() {
        return "*";
    }
    let square = board.at(position);
    match (square.word_multiplier, square.letter_multiplier) {
        (3, _) => "=",
        (2, _) => "-",
        (_, 3) => "\"",
        (_, 2) => "'",
        _ => ".",
    }
}

// wildcards show in lowercase.
#[inline(always)]
pub fn board_label(board: &board::Board, position: matrix::Position) -> String {
    match board.at(position).tile() {
        Some(tile) => match tile.effective_letter() {
            Some(letter) if tile.is_blank() => letter.to_lowercase().to_string(),
            Some(letter) => letter.to_string(),
            None => tile.letter().to_string(),
        },
        None => empty_label(board, position).to_string(),
    }
}

fn write_column_header(out: &mut String, cols: i8) -> std::fmt::Result {
    write!(out, "    ")?;
    for c in 0..cols {
        write!(out, "{:>3}", c + 1)?;
    }
    writeln!(out)
}

fn write_border(out: &mut String, cols: i8) -> std::fmt::Result {
    write!(out, "    +")?;
    for _ in 0..cols {
        write!(out, "---")?;
    }
    writeln!(out, "-+")
}

// rows and columns numbered from 1, as PLACE expects them.
pub fn render_board(board: &board::Board) -> Result<String, std::fmt::Error> {
    let dim = board.dim();
    let mut out = String::new();
    write_column_header(&mut out, dim.cols)?;
    write_border(&mut out, dim.cols)?;
    for r in 0..dim.rows {
        write!(out, "{:>3} |", r + 1)?;
        for c in 0..dim.cols {
            write!(out, "{:>3}", board_label(board, matrix::Position::new(r, c)))?;
        }
        writeln!(out, " | {}", r + 1)?;
    }
    write_border(&mut out, dim.cols)?;
    write_column_header(&mut out, dim.cols)?;
    Ok(out)
}

pub fn print_board(board: &board::Board) {
    match render_board(board) {
        Ok(s) => print!("{}", s),
        Err(err) => log::warn!("cannot render board: {}", err),
    }
}

pub fn format_rack(rack: &rack::Rack) -> String {
    rack.letters()
}

// read off the board before the move is played.
pub fn describe_move(the_move: &movegen::Move, board: &board::Board) -> String {
    match the_move {
        movegen::Move::Pass => "passes".into(),
        movegen::Move::Exchange { tiles } => format!(
            "exchanges {}",
            tiles.iter().map(|tile| tile.letter()).collect::<String>()
        ),
        movegen::Move::Place(placement) => format!(
            "plays {} at {},{} {}",
            board.test_place(placement).words().join(", "),
            placement.position.row + 1,
            placement.position.col + 1,
            match placement.direction {
                matrix::Direction::Across => "across",
                matrix::Direction::Down => "down",
            }
        ),
    }
}

pub fn print_game_state(game_state: &game_state::GameState<'_>) {
    print_board(&game_state.board);
    for (i, player) in game_state.players.iter().enumerate() {
        println!(
            "{} {:<12} {:>4} {}",
            if i == game_state.turn as usize { '>' } else { ' ' },
            player.name,
            player.score,
            format_rack(&player.rack)
        );
    }
    println!("{} tiles in bag", game_state.bag.len());
}
