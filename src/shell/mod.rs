//! Interactive line-oriented front end.
//!
//! Each input line is split into words and parsed as one [`ShellCommand`].
//! The shell owns the [`AppState`] and is the only place user input turns
//! into store calls. Reader and writer are generic so tests can drive a
//! whole session from a string.

pub mod render;

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::app::{AppState, Screen};
use crate::config::AppConfig;
use crate::confirm::DestructiveAction;
use crate::models::{CourseFilter, CreateMenuItemInput};

const PROMPT: &str = "kitchen> ";

#[derive(Parser, Debug)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Show the full menu with per-course averages
    #[command(alias = "home")]
    Menu,
    /// Add a dish: add <name> <course> <price> [description...]
    Add {
        name: Option<String>,
        course: Option<String>,
        #[arg(allow_hyphen_values = true)]
        price: Option<String>,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },
    /// List dishes of one course (all, starters, mains, dessert)
    Filter { course: Option<String> },
    /// Show the average price of each course
    Averages,
    /// Delete a dish by id or id prefix
    Delete { id: String },
    /// Delete the most recently added dish
    DeleteLast,
    /// Remove every dish
    Clear,
    /// Confirm the pending action
    #[command(alias = "y")]
    Yes,
    /// Cancel the pending action
    #[command(alias = "n")]
    No,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    state: AppState,
    config: AppConfig,
}

impl Shell {
    pub fn new(state: AppState, config: AppConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        output.write_all(render::render_screen(&self.state, self.currency()).as_bytes())?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            if self.execute_line(&line?, &mut output)? == Flow::Quit {
                break;
            }
        }

        tracing::info!(items = self.state.store.len(), "session ended");
        Ok(())
    }

    /// Runs a single command line, writing any response to `output`.
    pub fn execute_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<Flow> {
        let words = match split_words(line) {
            Ok(words) => words,
            Err(msg) => {
                writeln!(output, "{}", msg)?;
                return Ok(Flow::Continue);
            }
        };
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                tracing::debug!(line, "unparsed command");
                write!(output, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        tracing::debug!(?command, "shell command");
        self.execute(command, output)
    }

    fn execute<W: Write>(&mut self, command: ShellCommand, output: &mut W) -> Result<Flow> {
        match command {
            ShellCommand::Menu => {
                self.state.navigate(Screen::Home);
                self.show_screen(output)?;
            }
            ShellCommand::Add { name: None, .. } => {
                self.state.navigate(Screen::AddItem);
                self.show_screen(output)?;
            }
            ShellCommand::Add {
                name: Some(name),
                course,
                price,
                description,
            } => {
                self.state.navigate(Screen::AddItem);
                let input = CreateMenuItemInput::new(
                    name,
                    description.join(" "),
                    course.unwrap_or_default(),
                    price.unwrap_or_default(),
                );
                match self.state.store.add_item(input) {
                    Ok(item) => writeln!(
                        output,
                        "Added \"{}\" ({}, {}) [{}]",
                        item.name,
                        item.course,
                        render::format_price(item.price, self.currency()),
                        render::short_id(&item.id)
                    )?,
                    Err(e) => writeln!(output, "Could not add item: {}", e.reason)?,
                }
            }
            ShellCommand::Filter { course } => {
                let selector = course.as_deref().unwrap_or("all");
                match CourseFilter::from_str(selector) {
                    Some(filter) => {
                        self.state.navigate(Screen::Filter(filter));
                        self.show_screen(output)?;
                    }
                    None => writeln!(
                        output,
                        "Unknown course filter '{}'. Use all, starters, mains or dessert.",
                        selector
                    )?,
                }
            }
            ShellCommand::Averages => {
                let averages = self.state.store.average_price_by_course();
                output.write_all(render::render_averages(&averages, self.currency()).as_bytes())?;
            }
            ShellCommand::Delete { id } => match self.resolve_id(&id) {
                Some(id) => self.dispatch(DestructiveAction::DeleteItem(id), output)?,
                None => writeln!(output, "No single item matches '{}'.", id)?,
            },
            ShellCommand::DeleteLast => self.dispatch(DestructiveAction::DeleteLast, output)?,
            ShellCommand::Clear => self.dispatch(DestructiveAction::ClearAll, output)?,
            ShellCommand::Yes => match self.state.confirm() {
                Some(outcome) => output.write_all(render::render_outcome(&outcome).as_bytes())?,
                None => writeln!(output, "Nothing to confirm.")?,
            },
            ShellCommand::No => {
                if self.state.cancel() {
                    writeln!(output, "Cancelled.")?;
                } else {
                    writeln!(output, "Nothing to cancel.")?;
                }
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Asks for confirmation, or commits straight away when confirmation is off.
    fn dispatch<W: Write>(&mut self, action: DestructiveAction, output: &mut W) -> Result<()> {
        if self.config.confirm_destructive {
            let prompt = self.state.request(action);
            output.write_all(render::render_prompt(prompt).as_bytes())?;
        } else {
            let outcome = self.state.store.commit(action);
            output.write_all(render::render_outcome(&outcome).as_bytes())?;
        }
        Ok(())
    }

    fn resolve_id(&self, raw: &str) -> Option<Uuid> {
        if let Ok(id) = Uuid::parse_str(raw.trim()) {
            return self.state.store.get(id).map(|item| item.id);
        }
        self.state.store.find_by_id_prefix(raw).map(|item| item.id)
    }

    fn show_screen<W: Write>(&self, output: &mut W) -> Result<()> {
        output.write_all(render::render_screen(&self.state, self.currency()).as_bytes())?;
        Ok(())
    }

    fn currency(&self) -> &str {
        &self.config.currency_symbol
    }
}

/// Splits a line into words, honoring single and double quotes.
fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unclosed {} quote.", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
