// Copyright (C) 2020-2026 Andy Kurnia.

// https://github.com/kkawakam/rustyline/blob/master/examples/example.rs

pub static COMMANDS: &[&str] = &["EXCHANGE", "EXIT", "HELP", "PASS", "PLACE"];

#[derive(
    rustyline_derive::Helper, rustyline_derive::Highlighter, rustyline_derive::Validator,
)]
pub struct MyHelper {
    hinter: rustyline::hint::HistoryHinter,
}

// only the first word of a line is completed.
fn complete_command(line: &str, pos: usize) -> (usize, Vec<rustyline::completion::Pair>) {
    let typed = &line[..pos];
    if typed.contains(char::is_whitespace) {
        return (pos, Vec::new());
    }
    let typed = typed.to_ascii_uppercase();
    let candidates = COMMANDS
        .iter()
        .filter(|command| command.starts_with(&typed))
        .map(|command| rustyline::completion::Pair {
            display: command.to_string(),
            replacement: format!("{} ", command),
        })
        .collect();
    (0, candidates)
}

impl rustyline::completion::Completer for MyHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<rustyline::completion::Pair>)> {
        Ok(complete_command(line, pos))
    }
}

impl rustyline::hint::Hinter for MyHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

pub type RlEditor = rustyline::Editor<MyHelper, rustyline::history::DefaultHistory>;

pub fn new_rl_editor() -> rustyline::Result<RlEditor> {
    let mut rl = RlEditor::new()?;
    rl.set_helper(Some(MyHelper {
        hinter: rustyline::hint::HistoryHinter::new(),
    }));
    Ok(rl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_command_words() {
        let (start, pairs) = complete_command("pl", 2);
        assert_eq!(start, 0);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "PLACE ");
        let (_, pairs) = complete_command("ex", 2);
        assert_eq!(pairs.len(), 2);
        let (_, pairs) = complete_command("PLACE - 8", 9);
        assert!(pairs.is_empty());
    }
}
