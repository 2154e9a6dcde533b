// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

pub const BLANK_LETTER: char = '?';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    letter: char,
    points: u32,
    assigned: Option<char>,
}

impl Tile {
    // letters are uppercased, blanks are always worth zero.
    pub fn new(letter: char, points: u32) -> Self {
        let letter = letter.to_ascii_uppercase();
        Self {
            letter,
            points: if letter == BLANK_LETTER { 0 } else { points },
            assigned: None,
        }
    }

    #[inline(always)]
    pub fn blank() -> Self {
        Self::new(BLANK_LETTER, 0)
    }

    #[inline(always)]
    pub fn letter(&self) -> char {
        self.letter
    }

    #[inline(always)]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.letter == BLANK_LETTER
    }

    #[inline(always)]
    pub fn assigned(&self) -> Option<char> {
        self.assigned
    }

    // the letter it spells on the board. None for an unassigned blank.
    #[inline(always)]
    pub fn effective_letter(&self) -> Option<char> {
        if self.is_blank() {
            self.assigned
        } else {
            Some(self.letter)
        }
    }

    pub fn assign(&mut self, letter: char) -> error::Returns<()> {
        if !self.is_blank() {
            return_error!(Command, format!("tile {} is not a wildcard", self.letter));
        }
        if !letter.is_alphabetic() {
            return_error!(
                Command,
                format!("wildcard cannot stand for {:?}", letter)
            );
        }
        self.assigned = Some(letter.to_ascii_uppercase());
        Ok(())
    }

    // as it goes back to the rack.
    #[inline(always)]
    pub fn unassigned(self) -> Self {
        Self {
            assigned: None,
            ..self
        }
    }
}

pub struct LetterInfo {
    pub letter: char,
    pub freq: u8,
    pub score: u8,
}

pub static ENGLISH_ALPHABET: &[LetterInfo] = &[
    LetterInfo { letter: '?', freq: 2, score: 0 },
    LetterInfo { letter: 'A', freq: 9, score: 1 },
    LetterInfo { letter: 'B', freq: 2, score: 3 },
    LetterInfo { letter: 'C', freq: 2, score: 3 },
    LetterInfo { letter: 'D', freq: 4, score: 2 },
    LetterInfo { letter: 'E', freq: 12, score: 1 },
    LetterInfo { letter: 'F', freq: 2, score: 4 },
    LetterInfo { letter: 'G', freq: 3, score: 2 },
    LetterInfo { letter: 'H', freq: 2, score: 4 },
    LetterInfo { letter: 'I', freq: 9, score: 1 },
    LetterInfo { letter: 'J', freq: 1, score: 8 },
    LetterInfo { letter: 'K', freq: 1, score: 5 },
    LetterInfo { letter: 'L', freq: 4, score: 1 },
    LetterInfo { letter: 'M', freq: 2, score: 3 },
    LetterInfo { letter: 'N', freq: 6, score: 1 },
    LetterInfo { letter: 'O', freq: 8, score: 1 },
    LetterInfo { letter: 'P', freq: 2, score: 3 },
    LetterInfo { letter: 'Q', freq: 1, score: 10 },
    LetterInfo { letter: 'R', freq: 6, score: 1 },
    LetterInfo { letter: 'S', freq: 4, score: 1 },
    LetterInfo { letter: 'T', freq: 6, score: 1 },
    LetterInfo { letter: 'U', freq: 4, score: 1 },
    LetterInfo { letter: 'V', freq: 2, score: 4 },
    LetterInfo { letter: 'W', freq: 2, score: 4 },
    LetterInfo { letter: 'X', freq: 1, score: 8 },
    LetterInfo { letter: 'Y', freq: 2, score: 4 },
    LetterInfo { letter: 'Z', freq: 1, score: 10 },
];

// tile with the standard english score, or None for a non-letter.
pub fn english_tile(letter: char) -> Option<Tile> {
    let letter = letter.to_ascii_uppercase();
    ENGLISH_ALPHABET
        .iter()
        .find(|info| info.letter == letter)
        .map(|info| Tile::new(info.letter, info.score as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_worth_zero_whatever_it_stands_for() {
        let mut tile = Tile::new('?', 10);
        assert_eq!(tile.points(), 0);
        assert_eq!(tile.effective_letter(), None);
        tile.assign('q').unwrap();
        assert_eq!(tile.effective_letter(), Some('Q'));
        assert_eq!(tile.points(), 0);
        assert_eq!(tile.letter(), BLANK_LETTER);
        assert_eq!(tile.unassigned(), Tile::blank());
    }

    #[test]
    fn only_blanks_take_letters() {
        assert!(english_tile('a').unwrap().assign('B').is_err());
        assert!(Tile::blank().assign('?').is_err());
    }

    #[test]
    fn english_distribution() {
        assert_eq!(ENGLISH_ALPHABET.iter().map(|x| x.freq as u32).sum::<u32>(), 100);
        assert_eq!(english_tile('z').unwrap().points(), 10);
        assert_eq!(english_tile('!'), None);
    }
}
