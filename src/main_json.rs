// Copyright (C) 2020-2026 Andy Kurnia.

use scrabble::{board_layout, error, kibitzer, trie};
use std::io::Read;

// reads the question from the file named on the command line, or from stdin.
// {
//   "dictionary": "config/dictionary.txt",
//   "rack": "CAT?SXZ",
//   "board": [ "...............", ... 15 rows ... ],
//   "layout": "config/board.txt"
// }
fn main() -> error::Returns<()> {
    env_logger::init();
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let question = kibitzer::Question::parse(&text)?;
    let lexicon = trie::Trie::read(&question.dictionary)?;
    let layout = match &question.layout {
        Some(path) => board_layout::BoardLayout::read(path)?,
        None => board_layout::make_standard_board_layout(),
    };
    let answer = kibitzer::Kibitzer::new().answer(&lexicon, &layout, &question)?;
    println!("{}", serde_json::to_string_pretty(&answer)?);
    Ok(())
}
