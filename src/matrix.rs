// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Across,
    Down,
}

impl std::ops::Not for Direction {
    type Output = Direction;

    #[inline(always)]
    fn not(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

// may point off the grid; check with Dim::contains before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline(always)]
    pub fn translate(self, direction: Direction, distance: i8) -> Self {
        match direction {
            Direction::Across => Self {
                row: self.row,
                col: self.col.saturating_add(distance),
            },
            Direction::Down => Self {
                row: self.row.saturating_add(distance),
                col: self.col,
            },
        }
    }

    #[inline(always)]
    pub fn neighbors(self) -> [Self; 4] {
        [
            self.translate(Direction::Across, -1),
            self.translate(Direction::Across, 1),
            self.translate(Direction::Down, -1),
            self.translate(Direction::Down, 1),
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0 && position.row < self.rows && position.col >= 0 && position.col < self.cols
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn at(&self, position: Position) -> usize {
        self.at_row_col(position.row, position.col)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // row-major
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let Dim { rows, cols } = *self;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Position { row, col }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_can_leave_the_grid() {
        let dim = Dim { rows: 3, cols: 4 };
        let p = Position::new(0, 3);
        assert!(!dim.contains(p.translate(Direction::Down, -1)));
        assert!(!dim.contains(p.translate(Direction::Across, 1)));
        assert!(dim.contains(p.translate(Direction::Across, -3)));
        assert_eq!(dim.at(Position::new(2, 1)), 9);
    }

    #[test]
    fn positions_are_row_major() {
        let dim = Dim { rows: 2, cols: 2 };
        let v = dim.positions().collect::<Vec<_>>();
        assert_eq!(
            v,
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
        assert_eq!(!Direction::Across, Direction::Down);
    }
}
