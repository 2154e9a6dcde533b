// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod board;
pub mod board_layout;
pub mod display;
pub mod game_config;
pub mod game_state;
pub mod kibitzer;
pub mod matrix;
pub mod move_reader;
pub mod movegen;
pub mod rack;
pub mod rlhelper;
pub mod trie;
