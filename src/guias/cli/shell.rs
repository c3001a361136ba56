//! The interactive session.
//!
//! One loop, one typed command at a time. The shell owns only view state:
//! the filter inputs, the listing positions shown last, and the transient
//! notice. Every mutation goes through the API facade; the gate is consulted
//! here only to decide which commands are offered.

use std::io::{BufRead, Write};
use std::time::Instant;

use colored::Colorize;
use guias::api::CatalogApi;
use guias::auth::FixedSecret;
use guias::commands::{CmdMessage, CmdResult};
use guias::filter::CatalogFilter;
use guias::model::{optional_url, Category, CategoryFilter, NewTutorial, Tutorial};
use guias::notice::NoticeBoard;
use guias::store::memory::InMemoryStore;
use guias::tags::TagEditor;

use super::commands::{parse, ParseOutcome, UiCommand};
use super::print;

pub struct Shell {
    api: CatalogApi<InMemoryStore, FixedSecret>,
    filter: CatalogFilter,
    board: NoticeBoard,
    // Listing positions from the last render, as record ids
    visible: Vec<String>,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self {
            api: CatalogApi::new(InMemoryStore::new(), FixedSecret::default()),
            filter: CatalogFilter::default(),
            board: NoticeBoard::new(),
            visible: Vec::new(),
        }
    }

    /// `--seeded`: load the example catalog before the first prompt.
    pub fn preseed(&mut self) {
        match self.api.seed(true) {
            Ok(result) => self.finish_action(result),
            Err(e) => print::print_messages(&[CmdMessage::error(e.to_string())]),
        }
    }

    pub fn run<R: BufRead>(&mut self, input: &mut R) {
        println!("guias — tutorial catalog (type 'help')");

        loop {
            self.board.tick(Instant::now());
            self.prompt();

            let Some(line) = read_line(input) else {
                break;
            };

            match parse(&line) {
                ParseOutcome::Empty => {}
                ParseOutcome::Unknown(reason) => {
                    print::print_messages(&[CmdMessage::warning(reason)]);
                }
                ParseOutcome::Command(UiCommand::Quit) => break,
                ParseOutcome::Command(command) => self.dispatch(command, input),
            }
        }
    }

    fn dispatch<R: BufRead>(&mut self, command: UiCommand, input: &mut R) {
        if self.is_admin_command(&command) && !self.api.is_privileged() {
            print::print_messages(&[CmdMessage::info(
                "Admin commands are hidden. Use 'login <password>' to manage the catalog.",
            )]);
            return;
        }

        match command {
            UiCommand::Help => self.help(),
            UiCommand::List => self.render_listing(),
            UiCommand::Search(term) => {
                if term.is_empty() {
                    print::print_messages(&[CmdMessage::info("Search cleared")]);
                }
                self.filter.search = term;
                self.render_listing();
            }
            UiCommand::Category(name) => match CategoryFilter::parse(&name) {
                Some(selection) => {
                    self.filter.category = selection;
                    self.render_listing();
                }
                None => {
                    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
                    print::print_messages(&[CmdMessage::error(format!(
                        "Unknown category: {} (expected all, {})",
                        name,
                        labels.join(", ")
                    ))]);
                }
            },
            UiCommand::View(position) => {
                let Some(id) = self.resolve(position) else {
                    return;
                };
                match self.api.get(&id) {
                    Ok(record) => print::print_detail(&record),
                    Err(e) => print::print_messages(&[CmdMessage::error(e.to_string())]),
                }
            }
            UiCommand::Login(password) => {
                let password = if password.is_empty() {
                    field_prompt("Password");
                    read_line(input).unwrap_or_default()
                } else {
                    password
                };
                let result = self.api.login(&password);
                self.finish_action(result);
            }
            UiCommand::Logout => {
                let result = self.api.logout();
                self.finish_action(result);
            }
            UiCommand::New => {
                let Some(draft) = read_draft(input, None) else {
                    return;
                };
                match self.api.create(draft) {
                    Ok(result) => {
                        self.finish_action(result);
                        self.render_listing();
                    }
                    Err(e) => print::print_messages(&[CmdMessage::error(e.to_string())]),
                }
            }
            UiCommand::Edit(position) => {
                let Some(id) = self.resolve(position) else {
                    return;
                };
                let current = match self.api.get(&id) {
                    Ok(record) => record,
                    Err(e) => {
                        print::print_messages(&[CmdMessage::error(e.to_string())]);
                        return;
                    }
                };
                let Some(draft) = read_draft(input, Some(&current)) else {
                    return;
                };
                match self.api.update(&id, draft) {
                    Ok(result) => {
                        self.finish_action(result);
                        self.render_listing();
                    }
                    Err(e) => print::print_messages(&[CmdMessage::error(e.to_string())]),
                }
            }
            UiCommand::Delete(position) => {
                let Some(id) = self.resolve(position) else {
                    return;
                };
                let title = match self.api.get(&id) {
                    Ok(record) => record.title,
                    Err(e) => {
                        print::print_messages(&[CmdMessage::error(e.to_string())]);
                        return;
                    }
                };
                let confirmed = confirm(input, &format!("Delete '{}'?", title));
                match self.api.delete(&id, confirmed) {
                    Ok(result) => {
                        // A declined confirmation is a silent no-op
                        if !result.messages.is_empty() {
                            self.finish_action(result);
                            self.render_listing();
                        }
                    }
                    Err(e) => print::print_messages(&[CmdMessage::error(e.to_string())]),
                }
            }
            UiCommand::Seed => {
                let confirmed = confirm(input, "Load the example tutorials?");
                match self.api.seed(confirmed) {
                    Ok(result) => {
                        if !result.messages.is_empty() {
                            self.finish_action(result);
                            self.render_listing();
                        }
                    }
                    Err(e) => print::print_messages(&[CmdMessage::error(e.to_string())]),
                }
            }
            UiCommand::Quit => unreachable!("quit is handled by the run loop"),
        }
    }

    fn is_admin_command(&self, command: &UiCommand) -> bool {
        matches!(
            command,
            UiCommand::New | UiCommand::Edit(_) | UiCommand::Delete(_) | UiCommand::Seed
        )
    }

    /// Prints the action's messages and keeps the last one as the transient
    /// notice shown on the prompt until it expires.
    fn finish_action(&mut self, result: CmdResult) {
        print::print_messages(&result.messages);
        if let Some(message) = result.messages.last() {
            self.board.post(message.clone(), Instant::now());
        }
    }

    fn render_listing(&mut self) {
        let term = self.filter.term();
        if !term.is_empty() {
            println!("Search: {}", term);
        } else if self.filter.category != CategoryFilter::All {
            println!("Category: {}", self.filter.category);
        }

        match self.api.list(&self.filter) {
            Ok(result) => {
                self.visible = result.listed.iter().map(|r| r.id.clone()).collect();
                print::print_tutorials(&result.listed);
            }
            Err(e) => print::print_messages(&[CmdMessage::error(e.to_string())]),
        }
    }

    fn resolve(&self, position: usize) -> Option<String> {
        match self.visible.get(position - 1) {
            Some(id) => Some(id.clone()),
            None => {
                print::print_messages(&[CmdMessage::warning(format!(
                    "Nothing at {}. Run 'list' first",
                    position
                ))]);
                None
            }
        }
    }

    fn help(&self) {
        println!("Commands:");
        println!("  list                 show the catalog");
        println!("  search <term>        filter by text (empty clears)");
        println!("  category <name|all>  filter by category");
        println!("  view <n>             show one tutorial in full");
        println!("  login <password>     enable admin mode");
        println!("  logout               disable admin mode");
        if self.api.is_privileged() {
            println!("  new                  create a tutorial");
            println!("  edit <n>             edit a tutorial");
            println!("  delete <n>           delete a tutorial");
            println!("  seed                 load the example catalog");
        }
        println!("  quit                 leave");
    }

    fn prompt(&self) {
        if let Some(notice) = self.board.current(Instant::now()) {
            print!("{} ", format!("[{}]", notice.content).dimmed());
        }
        print!("guias> ");
        let _ = std::io::stdout().flush();
    }
}

/// Runs the record form. `current` switches between "new" mode (title
/// required, everything else optional) and "edit" mode (empty input keeps
/// the current value, '-' clears a link).
fn read_draft<R: BufRead>(input: &mut R, current: Option<&Tutorial>) -> Option<NewTutorial> {
    let title = {
        match current {
            Some(record) => field_prompt(&format!("Title [{}]", record.title)),
            None => field_prompt("Title"),
        }
        let typed = read_line(input)?;
        let typed = typed.trim().to_string();
        match (typed.is_empty(), current) {
            (false, _) => typed,
            (true, Some(record)) => record.title.clone(),
            (true, None) => {
                print::print_messages(&[CmdMessage::error("Title cannot be empty")]);
                return None;
            }
        }
    };

    let description = {
        match current {
            Some(record) if !record.description.is_empty() => {
                field_prompt(&format!("Description [{}]", record.description))
            }
            _ => field_prompt("Description"),
        }
        let typed = read_line(input)?;
        let typed = typed.trim().to_string();
        if typed.is_empty() {
            current.map(|r| r.description.clone()).unwrap_or_default()
        } else {
            typed
        }
    };

    let category = {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        let fallback = current.map(|r| r.category).unwrap_or_default();
        field_prompt(&format!(
            "Category [{}] ({})",
            fallback.label(),
            labels.join(", ")
        ));
        let typed = read_line(input)?;
        if typed.trim().is_empty() {
            fallback
        } else {
            match Category::parse(&typed) {
                Some(category) => category,
                None => {
                    print::print_messages(&[CmdMessage::warning(format!(
                        "Unknown category, keeping {}",
                        fallback.label()
                    ))]);
                    fallback
                }
            }
        }
    };

    let video_url = read_link(input, "Video URL", current.and_then(|r| r.video_url.clone()))?;
    let pdf_url = read_link(input, "PDF URL", current.and_then(|r| r.pdf_url.clone()))?;
    let image_url = read_link(input, "Image URL", current.and_then(|r| r.image_url.clone()))?;

    let tags = read_tags(input, current)?;

    Some(NewTutorial {
        title,
        description,
        category,
        video_url,
        pdf_url,
        image_url,
        tags,
    })
}

fn read_link<R: BufRead>(
    input: &mut R,
    label: &str,
    current: Option<String>,
) -> Option<Option<String>> {
    match &current {
        Some(url) => field_prompt(&format!("{} [{}] ('-' clears)", label, url)),
        None => field_prompt(label),
    }
    let typed = read_line(input)?;
    let typed = typed.trim();
    Some(if typed.is_empty() {
        current
    } else if typed == "-" {
        None
    } else {
        optional_url(typed)
    })
}

fn read_tags<R: BufRead>(input: &mut R, current: Option<&Tutorial>) -> Option<Vec<String>> {
    let mut editor = match current {
        Some(record) => TagEditor::with_tags(record.tags.iter()),
        None => TagEditor::new(),
    };

    println!("Tags: comma or Enter commits, '-tag' removes, blank line finishes");
    loop {
        if editor.committed().is_empty() {
            field_prompt("  tag");
        } else {
            field_prompt(&format!("  tag [{}]", editor.committed().join(", ")));
        }
        let line = read_line(input)?;
        let line = line.trim_end();
        if line.trim().is_empty() {
            break;
        }
        if let Some(victim) = line.strip_prefix('-') {
            editor.remove(victim);
        } else {
            editor.feed_line(line);
        }
    }

    Some(editor.finish())
}

fn field_prompt(label: &str) {
    print!("{}: ", label);
    let _ = std::io::stdout().flush();
}

fn confirm<R: BufRead>(input: &mut R, question: &str) -> bool {
    print!("{} [y/N] ", question);
    let _ = std::io::stdout().flush();
    match read_line(input) {
        Some(answer) => {
            let answer = answer.trim().to_lowercase();
            answer == "y" || answer == "yes" || answer == "s" || answer == "sim"
        }
        None => false,
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
        Err(_) => None,
    }
}
