// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bag, board, error, game_config, movegen, rack};
use rand::prelude::*;

pub const MAX_PLAYERS: usize = 8;

#[derive(Clone, Debug)]
pub struct GamePlayer {
    pub name: String,
    pub score: u32,
    pub rack: rack::Rack,
    pub is_computer: bool,
}

#[derive(Clone)]
pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig,
    pub players: Box<[GamePlayer]>,
    pub board: board::Board,
    pub bag: bag::Bag,
    pub turn: u8,
    pub num_consecutive_passes: u8,
}

impl<'a> GameState<'a> {
    // players are (name, is_computer). the bag is shuffled and every rack filled.
    pub fn new(
        game_config: &'a game_config::GameConfig,
        board: board::Board,
        mut bag: bag::Bag,
        players: Vec<(String, bool)>,
        rng: &mut dyn RngCore,
    ) -> error::Returns<Self> {
        if players.is_empty() || players.len() > MAX_PLAYERS {
            return_error!(
                Command,
                format!(
                    "need 1 to {} players, not {}",
                    MAX_PLAYERS,
                    players.len()
                )
            );
        }
        bag.shuffle(rng);
        let players = players
            .into_iter()
            .map(|(name, is_computer)| {
                let mut rack = rack::Rack::new();
                bag.replenish(&mut *rng, &mut rack, game_config.rack_size);
                GamePlayer {
                    name,
                    score: 0,
                    rack,
                    is_computer,
                }
            })
            .collect();
        Ok(Self {
            game_config,
            players,
            board,
            bag,
            turn: 0,
            num_consecutive_passes: 0,
        })
    }

    #[inline(always)]
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    // points scored by the move. nothing changes on error.
    pub fn play(&mut self, rng: &mut dyn RngCore, the_move: &movegen::Move) -> error::Returns<u32> {
        let rack_size = self.game_config.rack_size;
        let current_player = &mut self.players[self.turn as usize];
        match the_move {
            movegen::Move::Pass => {
                self.num_consecutive_passes += 1;
                log::info!("{} passes", current_player.name);
                Ok(0)
            }
            movegen::Move::Exchange { tiles } => {
                if tiles.len() > self.bag.len() {
                    return_error!(
                        Command,
                        format!(
                            "cannot exchange {} tiles, bag has {}",
                            tiles.len(),
                            self.bag.len()
                        )
                    );
                }
                current_player.rack.remove_all(tiles)?;
                self.bag.replenish(rng, &mut current_player.rack, rack_size);
                self.bag.put_back(rng, tiles);
                self.num_consecutive_passes = 0;
                log::info!("{} exchanges {} tiles", current_player.name, tiles.len());
                Ok(0)
            }
            movegen::Move::Place(placement) => {
                let mut remaining = current_player.rack.clone();
                remaining.remove_all(&placement.tiles)?;
                let points = match self.board.place(placement) {
                    board::PlaceResult::Valid { words, points } => {
                        let bonus = if placement.tiles.len() == rack_size {
                            self.game_config.full_rack_bonus
                        } else {
                            0
                        };
                        log::info!(
                            "{} plays {} for {} points",
                            current_player.name,
                            words.join(", "),
                            points + bonus
                        );
                        points + bonus
                    }
                    board::PlaceResult::Invalid { reason } => {
                        return_error!(Command, format!("invalid placement: {}", reason));
                    }
                };
                current_player.rack = remaining;
                current_player.score += points;
                self.bag.replenish(rng, &mut current_player.rack, rack_size);
                self.num_consecutive_passes = 0;
                Ok(points)
            }
        }
    }

    pub fn next_turn(&mut self) {
        self.turn += 1;
        if self.turn as usize >= self.players.len() {
            self.turn = 0;
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.num_consecutive_passes as usize >= self.players.len()
            || self.players.iter().any(|player| player.rack.is_empty())
    }

    // rack values are subtracted, and whoever went out collects them all.
    pub fn finish(&mut self) {
        let total_left = self
            .players
            .iter()
            .map(|player| player.rack.total_points())
            .sum::<u32>();
        for player in self.players.iter_mut() {
            if player.rack.is_empty() {
                player.score += total_left;
            } else {
                player.score = player.score.saturating_sub(player.rack.total_points());
            }
        }
        log::info!(
            "game over: {}",
            self.players
                .iter()
                .map(|player| format!("{} {}", player.name, player.score))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    // indexes of everyone tied for the top score.
    pub fn winners(&self) -> Vec<usize> {
        let best = self.players.iter().map(|player| player.score).max();
        (0..self.players.len())
            .filter(|&i| Some(self.players[i].score) == best)
            .collect()
    }
}
