//! # Command Line
//!
//! Argument parsing and the non-interactive subcommands. Without a
//! subcommand `main` starts the TUI instead.
//!
//! Items are numbered from 1 here, matching what `list` prints; the
//! `Editor` itself is 0-based.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::CliOverrides;
use crate::core::editor::{Editor, EditorError};

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "A tiny todo list for your terminal")]
pub struct Args {
    /// Todo file to use instead of ~/.tally/todo.json
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file to use instead of ~/.tally/config.toml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            data_file: self.file.clone(),
            verbose: self.verbose,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print all items, numbered
    List,
    /// Append an item
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Replace the text of item N
    Edit {
        number: usize,
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },
    /// Delete item N
    Remove { number: usize },
    /// Print the full text of item N
    Show { number: usize },
}

#[derive(Debug)]
pub enum CliError {
    /// Item numbers start at 1.
    InvalidNumber(usize),
    Editor(EditorError),
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidNumber(n) => write!(f, "invalid item number {n} (items start at 1)"),
            CliError::Editor(EditorError::IndexOutOfRange { index, len }) => {
                write!(f, "no item #{} (the list has {len})", index + 1)
            }
            CliError::Editor(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "output error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Editor(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::InvalidNumber(_) => None,
        }
    }
}

impl From<EditorError> for CliError {
    fn from(e: EditorError) -> Self {
        CliError::Editor(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

fn to_index(number: usize) -> Result<usize, CliError> {
    number.checked_sub(1).ok_or(CliError::InvalidNumber(number))
}

/// Execute one subcommand against `editor`, writing human output to `out`.
pub fn run_command(
    command: Command,
    editor: &mut Editor,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::List => {
            if editor.is_empty() {
                writeln!(out, "Nothing to do.")?;
            }
            let width = editor.len().to_string().len();
            for (i, item) in editor.items().iter().enumerate() {
                writeln!(out, "{:>width$}. {item}", i + 1)?;
            }
        }
        Command::Add { text } => {
            editor.append(text.join(" "))?;
            writeln!(out, "Added #{}", editor.len())?;
        }
        Command::Edit { number, text } => {
            editor.update_at(to_index(number)?, text.join(" "))?;
            writeln!(out, "Updated #{number}")?;
        }
        Command::Remove { number } => {
            let removed = editor.remove_at(to_index(number)?)?;
            writeln!(out, "Removed #{number}: {removed}")?;
        }
        Command::Show { number } => {
            let index = to_index(number)?;
            let item = editor.get(index).ok_or(EditorError::IndexOutOfRange {
                index,
                len: editor.len(),
            })?;
            writeln!(out, "{item}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    fn editor(items: &[&str]) -> Editor {
        Editor::open(Box::new(MemoryStore::with_items(items))).unwrap()
    }

    fn run(command: Command, editor: &mut Editor) -> Result<String, CliError> {
        let mut out = Vec::new();
        run_command(command, editor, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_subcommands() {
        let args = Args::parse_from(["tally", "add", "Buy", "milk"]);
        assert_eq!(
            args.command,
            Some(Command::Add {
                text: vec!["Buy".into(), "milk".into()]
            })
        );

        let args = Args::parse_from(["tally", "--file", "/tmp/t.json", "remove", "2"]);
        assert_eq!(args.file, Some(PathBuf::from("/tmp/t.json")));
        assert_eq!(args.command, Some(Command::Remove { number: 2 }));

        let args = Args::parse_from(["tally", "-v"]);
        assert!(args.verbose);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_add_requires_text() {
        assert!(Args::try_parse_from(["tally", "add"]).is_err());
    }

    #[test]
    fn test_list_numbers_from_one() {
        let mut ed = editor(&["Buy milk", "Walk dog"]);
        assert_eq!(run(Command::List, &mut ed).unwrap(), "1. Buy milk\n2. Walk dog\n");
        assert_eq!(run(Command::List, &mut editor(&[])).unwrap(), "Nothing to do.\n");
    }

    #[test]
    fn test_add_joins_words() {
        let mut ed = editor(&[]);
        let out = run(
            Command::Add {
                text: vec!["Buy".into(), "milk".into()],
            },
            &mut ed,
        )
        .unwrap();
        assert_eq!(out, "Added #1\n");
        assert_eq!(ed.items(), ["Buy milk".to_string()].as_slice());
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let mut ed = editor(&[]);
        let err = run(
            Command::Add {
                text: vec!["  ".into()],
            },
            &mut ed,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Editor(EditorError::EmptyItem)));
    }

    #[test]
    fn test_edit_and_remove_use_one_based_numbers() {
        let mut ed = editor(&["a", "b", "c"]);
        run(
            Command::Edit {
                number: 1,
                text: vec!["A".into()],
            },
            &mut ed,
        )
        .unwrap();
        let out = run(Command::Remove { number: 3 }, &mut ed).unwrap();
        assert_eq!(out, "Removed #3: c\n");
        assert_eq!(ed.items(), ["A".to_string(), "b".to_string()].as_slice());
    }

    #[test]
    fn test_number_zero_and_out_of_range() {
        let mut ed = editor(&["a"]);
        assert!(matches!(
            run(Command::Remove { number: 0 }, &mut ed),
            Err(CliError::InvalidNumber(0))
        ));
        let err = run(Command::Show { number: 5 }, &mut ed).unwrap_err();
        assert_eq!(err.to_string(), "no item #5 (the list has 1)");
    }

    #[test]
    fn test_show_prints_full_text() {
        let mut ed = editor(&["first", "a much longer second item"]);
        assert_eq!(
            run(Command::Show { number: 2 }, &mut ed).unwrap(),
            "a much longer second item\n"
        );
    }
}
