//! Plain terminal selector
//!
//! Minimal stand-in for a fuzzy-finder UI: numbered candidates on
//! stdout, a 1-based index read from stdin. Anything that is not a valid
//! index counts as a dismissal.

use std::io::{self, BufRead, Write};
use taskpick_core::{Result, Selector};

pub struct TerminalSelector;

impl TerminalSelector {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for TerminalSelector {
    fn choose(&self, title: &str, labels: &[String]) -> Result<Option<usize>> {
        if labels.is_empty() {
            return Ok(None);
        }

        println!("{title}:");
        for (i, label) in labels.iter().enumerate() {
            println!("  {}. {}", i + 1, label);
        }
        print!("> ");
        io::stdout().flush()?;

        let input = self.read_line()?;
        let choice = input
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=labels.len()).contains(n))
            .map(|n| n - 1);
        Ok(choice)
    }

    fn prompt_args(&self, label: &str) -> Result<Option<String>> {
        print!("Extra arguments for {label} (empty for none): ");
        io::stdout().flush()?;

        let input = self.read_line()?;
        if input.is_empty() {
            Ok(None)
        } else {
            Ok(Some(input))
        }
    }
}
