// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{self, Tile};
use super::error;
use super::rack::Rack;
use rand::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct Bag(pub Vec<Tile>);

impl Bag {
    // the standard english distribution, unshuffled.
    pub fn new() -> Bag {
        let mut bag = Vec::with_capacity(
            alphabet::ENGLISH_ALPHABET
                .iter()
                .map(|info| info.freq as usize)
                .sum(),
        );
        for info in alphabet::ENGLISH_ALPHABET {
            for _ in 0..info.freq {
                bag.push(Tile::new(info.letter, info.score as u32));
            }
        }
        Bag(bag)
    }

    // one line per kind of tile: <letter> <points> <count>
    pub fn parse(text: &str) -> error::Returns<Bag> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b' ')
            .flexible(true)
            .from_reader(text.as_bytes());
        let mut bag = Vec::new();
        for (line_number, result) in csv_reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    return_error!(Format, format!("invalid bag file: {}", err));
                }
            };
            let malformed = || {
                error::new(
                    error::ErrorKind::Format,
                    format!(
                        "invalid bag file: line {} should be <letter> <points> <count>, not {:?}",
                        line_number + 1,
                        record.iter().collect::<Vec<_>>().join(" ")
                    ),
                )
            };
            if record.len() != 3 {
                return Err(malformed().into());
            }
            let mut letters = record[0].chars();
            let letter = match (letters.next(), letters.next()) {
                (Some(c), None) if c.is_alphabetic() || c == alphabet::BLANK_LETTER => c,
                _ => return Err(malformed().into()),
            };
            let (Ok(points), Ok(count)) = (record[1].parse::<u32>(), record[2].parse::<u32>())
            else {
                return Err(malformed().into());
            };
            for _ in 0..count {
                bag.push(Tile::new(letter, points));
            }
        }
        Ok(Bag(bag))
    }

    pub fn read(path: &str) -> error::Returns<Bag> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) => {
                return_error!(Format, format!("cannot open bag file {}: {}", path, err));
            }
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shuffle(&mut self, mut rng: &mut dyn RngCore) {
        self.0.shuffle(&mut rng);
    }

    // at most what is left.
    pub fn remove_random_tiles(&mut self, rng: &mut dyn RngCore, amount: usize) -> Vec<Tile> {
        let amount = amount.min(self.0.len());
        let mut drawn = Vec::with_capacity(amount);
        for _ in 0..amount {
            let i = rng.random_range(0..self.0.len());
            drawn.push(self.0.swap_remove(i));
        }
        drawn
    }

    pub fn replenish(&mut self, rng: &mut dyn RngCore, rack: &mut Rack, rack_size: usize) {
        let wanted = rack_size.saturating_sub(rack.count());
        for tile in self.remove_random_tiles(rng, wanted) {
            rack.add(tile);
        }
    }

    // each tile goes back at a random position, unassigned.
    pub fn put_back(&mut self, rng: &mut dyn RngCore, tiles: &[Tile]) {
        self.0.reserve(tiles.len());
        for tile in tiles {
            let i = rng.random_range(0..=self.0.len());
            self.0.insert(i, tile.unassigned());
        }
    }
}
