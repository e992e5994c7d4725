//! Output sink and line input used by player commands

use std::io::{BufRead, Write};

/// Receives the lines a command prints
pub trait Output {
    fn emit(&mut self, line: &str);

    /// Show an input prompt; sinks that only record output ignore it
    fn prompt(&mut self, _text: &str) {}
}

/// Prints every line to stdout
#[derive(Debug, Default)]
pub struct Console;

impl Output for Console {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }

    fn prompt(&mut self, text: &str) {
        print!("{}", text);
        if let Err(e) = std::io::stdout().flush() {
            log::warn!("Failed to flush prompt: {}", e);
        }
    }
}

/// Collects lines in memory (used by tests and scripted runs)
impl Output for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Supplies a single line of user input, e.g. the answer to a search prompt
pub trait LineInput {
    /// Read the next line without its line terminator; `None` at end of input
    fn next_line(&mut self) -> Option<String>;
}

impl<R: BufRead> LineInput for R {
    fn next_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match self.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::warn!("Failed to read input line: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_line_strips_terminators() {
        let mut input: &[u8] = b"first\r\nsecond\nthird";
        assert_eq!(input.next_line().as_deref(), Some("first"));
        assert_eq!(input.next_line().as_deref(), Some("second"));
        assert_eq!(input.next_line().as_deref(), Some("third"));
        assert_eq!(input.next_line(), None);
    }

    #[test]
    fn test_vec_output_collects() {
        let mut out: Vec<String> = Vec::new();
        out.emit("a");
        out.emit("b");
        assert_eq!(out, vec!["a", "b"]);
    }
}
