// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bag, board, board_layout, error, trie};
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

fn default_rack_size() -> usize {
    7
}

fn default_full_rack_bonus() -> u32 {
    50
}

// paths are as given, relative to wherever the binary runs.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    pub dictionary: String,
    #[serde(default)]
    pub board: Option<String>,
    #[serde(default)]
    pub bag: Option<String>,
    #[serde(default = "default_rack_size")]
    pub rack_size: usize,
    #[serde(default = "default_full_rack_bonus")]
    pub full_rack_bonus: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn parse(text: &str) -> error::Returns<GameConfig> {
        let game_config = match serde_json::from_str::<GameConfig>(text) {
            Ok(game_config) => game_config,
            Err(err) => {
                return_error!(Format, format!("invalid config: {}", err));
            }
        };
        if game_config.rack_size == 0 {
            return_error!(Format, "invalid config: rack_size must be positive".into());
        }
        Ok(game_config)
    }

    pub fn read(path: &str) -> error::Returns<GameConfig> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) => {
                return_error!(Format, format!("cannot open config file {}: {}", path, err));
            }
        }
    }

    pub fn load_board(&self) -> error::Returns<board::Board> {
        Ok(match &self.board {
            Some(path) => board::Board::read(path)?,
            None => board::Board::new(&board_layout::make_standard_board_layout()),
        })
    }

    pub fn load_bag(&self) -> error::Returns<bag::Bag> {
        Ok(match &self.bag {
            Some(path) => bag::Bag::read(path)?,
            None => bag::Bag::new(),
        })
    }

    pub fn load_dictionary(&self) -> error::Returns<trie::Trie> {
        trie::Trie::read(&self.dictionary)
    }

    pub fn make_rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply() {
        let game_config = GameConfig::parse(r#"{ "dictionary": "words.txt" }"#).unwrap();
        assert_eq!(
            game_config,
            GameConfig {
                dictionary: "words.txt".into(),
                board: None,
                bag: None,
                rack_size: 7,
                full_rack_bonus: 50,
                seed: None,
            }
        );
        assert_eq!(game_config.load_bag().unwrap().len(), 100);
        assert_eq!(game_config.load_board().unwrap().dim().rows, 15);
    }

    #[test]
    fn rejects_bad_configs() {
        for text in [
            "{}",
            r#"{ "dictionary": "words.txt", "colour": "blue" }"#,
            r#"{ "dictionary": "words.txt", "rack_size": 0 }"#,
            r#"{ "dictionary": "words.txt", "seed": -1 }"#,
            "not json",
        ] {
            let err = GameConfig::parse(text).unwrap_err();
            assert_eq!(
                error::kind_of(&err),
                Some(error::ErrorKind::Format),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn seeded_rng_repeats() {
        let game_config =
            GameConfig::parse(r#"{ "dictionary": "words.txt", "seed": 12345 }"#).unwrap();
        let a = game_config.make_rng().next_u64();
        let b = game_config.make_rng().next_u64();
        assert_eq!(a, b);
    }

    #[test]
    fn loads_files_named_in_config() {
        let dir = tempfile::tempdir().unwrap();
        let dictionary_path = dir.path().join("words.txt");
        let bag_path = dir.path().join("bag.txt");
        std::fs::File::create(&dictionary_path)
            .unwrap()
            .write_all(b"QI\nZA\n")
            .unwrap();
        std::fs::write(&bag_path, "Q 10 1\nI 1 1\n").unwrap();
        let game_config = GameConfig {
            dictionary: dictionary_path.to_string_lossy().into_owned(),
            board: None,
            bag: Some(bag_path.to_string_lossy().into_owned()),
            rack_size: 2,
            full_rack_bonus: 50,
            seed: Some(1),
        };
        assert_eq!(game_config.load_dictionary().unwrap().num_words(), 2);
        assert_eq!(game_config.load_bag().unwrap().len(), 2);

        let missing = GameConfig {
            board: Some(dir.path().join("nope.txt").to_string_lossy().into_owned()),
            ..game_config
        };
        let err = missing.load_board().unwrap_err();
        assert_eq!(error::kind_of(&err), Some(error::ErrorKind::Format));
    }
}
