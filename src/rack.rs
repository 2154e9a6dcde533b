// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::Tile;
use super::error;
use std::collections::BTreeMap;

// tiles grouped by face letter, so a wildcard is only ever found under '?'.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: BTreeMap<char, Vec<Tile>>,
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut rack = Self::new();
        for tile in tiles {
            rack.add(tile);
        }
        rack
    }

    #[inline(always)]
    pub fn lookup(&self, letter: char) -> Option<Tile> {
        self.tiles.get(&letter).and_then(|v| v.last()).copied()
    }

    #[inline(always)]
    pub fn has(&self, letter: char) -> bool {
        self.tiles.contains_key(&letter)
    }

    pub fn take(&mut self, letter: char) -> Option<Tile> {
        let v = self.tiles.get_mut(&letter)?;
        let tile = v.pop();
        if v.is_empty() {
            self.tiles.remove(&letter);
        }
        tile
    }

    pub fn remove(&mut self, tile: &Tile) -> error::Returns<()> {
        match self.take(tile.letter()) {
            Some(_) => Ok(()),
            None => {
                return_error!(Rack, format!("tile {} is not on the rack", tile.letter()));
            }
        }
    }

    #[inline(always)]
    pub fn add(&mut self, tile: Tile) {
        self.tiles
            .entry(tile.letter())
            .or_default()
            .push(tile.unassigned());
    }

    pub fn count(&self) -> usize {
        self.tiles.values().map(|v| v.len()).sum()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn total_points(&self) -> u32 {
        self.tiles.values().flatten().map(|t| t.points()).sum()
    }

    // in letter order, '?' first.
    pub fn tiles(&self) -> Vec<Tile> {
        self.tiles.values().flatten().copied().collect()
    }

    pub fn letters(&self) -> String {
        self.tiles.values().flatten().map(|t| t.letter()).collect()
    }

    // checks the whole multiset before taking anything.
    pub fn remove_all(&mut self, tiles: &[Tile]) -> error::Returns<()> {
        let mut trial = self.clone();
        for tile in tiles {
            trial.remove(tile)?;
        }
        *self = trial;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::english_tile;

    fn rack(s: &str) -> Rack {
        Rack::from_tiles(s.chars().map(|c| english_tile(c).unwrap()))
    }

    #[test]
    fn take_then_add_restores() {
        let original = rack("AAB?");
        let mut r = original.clone();
        let a = r.take('A').unwrap();
        assert_eq!(r.count(), 3);
        r.add(a);
        assert_eq!(r, original);

        let mut blank = r.take('?').unwrap();
        assert_eq!(r.lookup('?'), None);
        blank.assign('Z').unwrap();
        r.add(blank);
        assert_eq!(r, original);
    }

    #[test]
    fn wildcards_only_answer_to_their_face() {
        let mut r = rack("?");
        assert_eq!(r.lookup('A'), None);
        assert_eq!(r.take('A'), None);
        assert!(r.take('?').unwrap().is_blank());
        assert!(r.is_empty());
    }

    #[test]
    fn remove_reports_missing_tiles() {
        let mut r = rack("QI");
        r.remove(&english_tile('Q').unwrap()).unwrap();
        let err = r.remove(&english_tile('Q').unwrap()).unwrap_err();
        assert_eq!(error::kind_of(&err), Some(error::ErrorKind::Rack));
        assert_eq!(r.letters(), "I");
    }

    #[test]
    fn remove_all_is_all_or_nothing() {
        let mut r = rack("EEX");
        let two_x = [english_tile('X').unwrap(), english_tile('X').unwrap()];
        assert!(r.remove_all(&two_x).is_err());
        assert_eq!(r.count(), 3);
        r.remove_all(&[english_tile('E').unwrap(), english_tile('X').unwrap()])
            .unwrap();
        assert_eq!(r.letters(), "E");
    }

    #[test]
    fn totals_in_letter_order() {
        let r = rack("ZA?Q");
        assert_eq!(r.total_points(), 21);
        assert_eq!(r.letters(), "?AQZ");
        assert_eq!(r.tiles().len(), 4);
    }
}
