//! Parsing for the interactive prompt.
//!
//! One typed line maps to one [`UiCommand`]. Mutation commands exist here
//! unconditionally; whether they are *offered* is the shell's decision based
//! on the access gate.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Help,
    List,
    /// Set (or clear, when empty) the free-text search term.
    Search(String),
    /// Set the category selector ("all" is the sentinel).
    Category(String),
    View(usize),
    Login(String),
    Logout,
    New,
    Edit(usize),
    Delete(usize),
    Seed,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Command(UiCommand),
    /// Blank line: nothing to do.
    Empty,
    Unknown(String),
}

pub fn parse(line: &str) -> ParseOutcome {
    let line = line.trim();
    if line.is_empty() {
        return ParseOutcome::Empty;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "help" | "?" => UiCommand::Help,
        "list" | "ls" => UiCommand::List,
        "search" => UiCommand::Search(rest.to_string()),
        "category" | "cat" => {
            if rest.is_empty() {
                return ParseOutcome::Unknown("category needs a name or 'all'".to_string());
            }
            UiCommand::Category(rest.to_string())
        }
        "view" | "show" => match parse_position(rest) {
            Some(n) => UiCommand::View(n),
            None => return ParseOutcome::Unknown("view needs a listing number".to_string()),
        },
        "login" => UiCommand::Login(rest.to_string()),
        "logout" => UiCommand::Logout,
        "new" => UiCommand::New,
        "edit" => match parse_position(rest) {
            Some(n) => UiCommand::Edit(n),
            None => return ParseOutcome::Unknown("edit needs a listing number".to_string()),
        },
        "delete" | "del" => match parse_position(rest) {
            Some(n) => UiCommand::Delete(n),
            None => return ParseOutcome::Unknown("delete needs a listing number".to_string()),
        },
        "seed" => UiCommand::Seed,
        "quit" | "exit" | "q" => UiCommand::Quit,
        other => return ParseOutcome::Unknown(format!("Unknown command: {}", other)),
    };

    ParseOutcome::Command(command)
}

fn parse_position(rest: &str) -> Option<usize> {
    rest.parse::<usize>().ok().filter(|n| *n >= 1)
}
