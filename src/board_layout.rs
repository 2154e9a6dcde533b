// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: u8,
    pub letter_multiplier: u8,
}

static TWS: Premium = Premium {
    word_multiplier: 3,
    letter_multiplier: 1,
};
static DWS: Premium = Premium {
    word_multiplier: 2,
    letter_multiplier: 1,
};
static TLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 3,
};
static DLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 2,
};
static FVS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 1,
};

#[derive(Clone, Debug)]
pub struct BoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    start: matrix::Position,
}

impl BoardLayout {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn start(&self) -> matrix::Position {
        self.start
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        &self.premiums
    }

    #[inline(always)]
    pub fn premium_at(&self, position: matrix::Position) -> Premium {
        self.premiums[self.dim.at(position)]
    }

    // rows cols start_row start_col (start is 1-based), then one line per row.
    pub fn parse(text: &str) -> error::Returns<BoardLayout> {
        let mut lines = text.lines();
        let mut header = Vec::with_capacity(4);
        while header.len() < 4 {
            let Some(line) = lines.next() else {
                return_error!(Format, "invalid board file: header is incomplete".into());
            };
            for token in line.split_whitespace() {
                if header.len() == 4 {
                    return_error!(
                        Format,
                        format!("invalid board file: unexpected {:?} in header", token)
                    );
                }
                match token.parse::<i8>() {
                    Ok(v) if v > 0 => header.push(v),
                    _ => {
                        return_error!(
                            Format,
                            format!("invalid board file: bad header value {:?}", token)
                        );
                    }
                }
            }
        }
        let dim = matrix::Dim {
            rows: header[0],
            cols: header[1],
        };
        let start = matrix::Position::new(header[2] - 1, header[3] - 1);
        if !dim.contains(start) {
            return_error!(
                Format,
                format!(
                    "invalid board file: start square {},{} is outside {}x{}",
                    header[2], header[3], dim.rows, dim.cols
                )
            );
        }

        let mut premiums = Vec::with_capacity(dim.len());
        for row in 0..dim.rows {
            let Some(line) = lines.next() else {
                return_error!(
                    Format,
                    format!("invalid board file: expected {} rows, found {}", dim.rows, row)
                );
            };
            let line = line.trim_end();
            if line.chars().count() != dim.cols as usize {
                return_error!(
                    Format,
                    format!(
                        "invalid board file: row {} has {} squares, expected {}",
                        row + 1,
                        line.chars().count(),
                        dim.cols
                    )
                );
            }
            for (col, code) in line.chars().enumerate() {
                premiums.push(match code {
                    '.' => FVS,
                    '2' => DLS,
                    '3' => TLS,
                    'd' => DWS,
                    't' => TWS,
                    _ => {
                        return_error!(
                            Format,
                            format!(
                                "invalid board file: unknown square {:?} at row {} column {}",
                                code,
                                row + 1,
                                col + 1
                            )
                        );
                    }
                });
            }
        }

        Ok(BoardLayout {
            premiums: premiums.into_boxed_slice(),
            dim,
            start,
        })
    }

    pub fn read(path: &str) -> error::Returns<BoardLayout> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) => {
                return_error!(Format, format!("cannot open board file {}: {}", path, err));
            }
        }
    }
}

pub static STANDARD_BOARD_LAYOUT: &str = "\
15 15
8 8
t..2...t...2..t
.d...3...3...d.
..d...2.2...d..
2..d...2...d..2
....d.....d....
.3...3...3...3.
..2...2.2...2..
t..2...d...2..t
..2...2.2...2..
.3...3...3...3.
....d.....d....
2..d...2...d..2
..d...2.2...d..
.d...3...3...d.
t..2...t...2..t
";

pub fn make_standard_board_layout() -> BoardLayout {
    let dim = matrix::Dim { rows: 15, cols: 15 };
    let rows = STANDARD_BOARD_LAYOUT.lines().skip(2);
    let premiums = rows
        .flat_map(|line| line.chars())
        .map(|code| match code {
            '2' => DLS,
            '3' => TLS,
            'd' => DWS,
            't' => TWS,
            _ => FVS,
        })
        .collect::<Box<[Premium]>>();
    debug_assert_eq!(premiums.len(), dim.len());
    BoardLayout {
        premiums,
        dim,
        start: matrix::Position::new(7, 7),
    }
}
