// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    // malformed board, dictionary, bag or config data
    Format,
    // requested tile is not on the rack
    Rack,
    // a formed word is not in the dictionary
    Lexical,
    // unusable interactive input, including rejected placements
    Command,
}

pub struct MyError {
    kind: ErrorKind,
    s: String,
}

impl MyError {
    #[inline(always)]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: ", self.kind)?;
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(kind: ErrorKind, s: String) -> MyError {
    MyError { kind, s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

// None for errors that did not originate here (io, json, csv).
pub fn kind_of(err: &BoxAnyError) -> Option<ErrorKind> {
    err.downcast_ref::<MyError>().map(|e| e.kind())
}

#[macro_export]
macro_rules! return_error {
    ($kind:ident, $error:expr) => {
        return Err($crate::error::new($crate::error::ErrorKind::$kind, $error).into());
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails() -> Returns<()> {
        return_error!(Rack, "no such tile".into());
    }

    #[test]
    fn kind_survives_boxing() {
        let err = fails().unwrap_err();
        assert_eq!(kind_of(&err), Some(ErrorKind::Rack));
        assert_eq!(err.to_string(), "no such tile");
    }

    #[test]
    fn foreign_errors_have_no_kind() {
        let err: BoxAnyError = "12x".parse::<u32>().unwrap_err().into();
        assert_eq!(kind_of(&err), None);
    }
}
