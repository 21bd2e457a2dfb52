//! # CLI Layer
//!
//! One possible UI client for usrmgr: an interactive session on stdin/stdout.
//! This is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Parses text into typed commands (clap)
//! - Formats output for humans
//!
//! ## Session
//!
//! Each input line is parsed as a [`SessionLine`] and dispatched to the
//! [`Screen`]. After an action the affected part of the screen is printed again:
//! the table after data changes, the dialog after dialog changes. Errors are
//! reported and the session goes on. A failed submit is not an error to the
//! user: the dialog is shown again with the messages next to each field.
//!
//! Delete confirmations read their answer from the same input as commands, so a
//! piped script answers with a `y` or `n` line right after `delete`.

use super::prompt::LinePrompt;
use super::render::{render_config, render_dialog, render_messages, render_panel, render_table};
use super::setup::{config_dir, init_logging, Cli, FieldArg, SessionCommand, SessionLine};
use clap::Parser;
use colored::Colorize;
use std::io::{BufRead, IsTerminal, Write};
use usrmgr::api::CmdResult;
use usrmgr::config::UsrmgrConfig;
use usrmgr::error::{Result, UsrmgrError};
use usrmgr::screen::{FixedAnswer, Screen};

enum Flow {
    Continue,
    Quit,
}

struct Session {
    screen: Screen,
    config: UsrmgrConfig,
    skip_confirm: bool,
    interactive: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config();
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let stdin = std::io::stdin();
    let mut session = Session {
        screen: Screen::seeded(),
        config,
        skip_confirm: cli.yes,
        interactive: stdin.is_terminal(),
    };
    tracing::info!(interactive = session.interactive, "session started");

    session.print_screen();
    session.run_lines(&mut stdin.lock())
}

fn load_config() -> UsrmgrConfig {
    let Some(dir) = config_dir() else {
        return UsrmgrConfig::default();
    };
    UsrmgrConfig::load(&dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, dir = %dir.display(), "could not load config, using defaults");
        UsrmgrConfig::default()
    })
}

impl Session {
    fn run_lines<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        loop {
            if self.interactive {
                print!("usrmgr> ");
                std::io::stdout().flush()?;
            }

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match SessionLine::try_parse_from(line.split_whitespace()) {
                Ok(parsed) => match self.execute(parsed.command, input) {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => self.report(e),
                },
                // Help goes to stdout, usage errors to stderr.
                Err(e) => {
                    let _ = e.print();
                }
            }
        }
        tracing::info!("session ended");
        Ok(())
    }

    fn execute<R: BufRead>(&mut self, command: SessionCommand, input: &mut R) -> Result<Flow> {
        match command {
            SessionCommand::List => self.print_screen(),
            SessionCommand::Search {
                name,
                sex,
                age,
                created,
            } => {
                let result = self.screen.search_with(|panel| {
                    if let Some(name) = name {
                        panel.set_name(Some(name).filter(|n| !n.is_empty()));
                    }
                    if let Some(sex) = sex {
                        panel.set_sex(sex.into_option());
                    }
                    if let Some(age) = age {
                        panel.set_age(age.into_option())?;
                    }
                    if let Some(range) = created {
                        panel.set_created_range(range.into_option())?;
                    }
                    Ok(())
                })?;
                self.print_result(&result);
                self.print_screen();
            }
            SessionCommand::Reset => {
                let result = self.screen.reset()?;
                self.print_result(&result);
                self.print_screen();
            }
            SessionCommand::Toggle => {
                self.screen.panel_mut().toggle();
                print!(
                    "{}",
                    render_panel(self.screen.panel(), &self.config.datetime_format)
                );
            }
            SessionCommand::Sort { column } => {
                self.screen.toggle_sort(column.into())?;
                self.print_table();
            }
            SessionCommand::Create => {
                self.screen.open_create()?;
                self.print_dialog();
            }
            SessionCommand::View { row } => {
                self.screen.open_view(row)?;
                self.print_dialog();
            }
            SessionCommand::Edit { row } => {
                self.screen.open_edit(row)?;
                self.print_dialog();
            }
            SessionCommand::Delete { row } => {
                let result = if self.skip_confirm || !self.config.confirm_delete {
                    self.screen.delete_row(row, &mut FixedAnswer(true))?
                } else {
                    self.screen.delete_row(row, &mut LinePrompt::new(input))?
                };
                self.print_result(&result);
                self.print_table();
            }
            SessionCommand::Set { field } => {
                let dialog = self.screen.dialog_mut();
                match field {
                    FieldArg::Name { words } => dialog.set_name(words.join(" "))?,
                    FieldArg::Sex { value } => dialog.set_sex(value.into_option())?,
                    FieldArg::Age { value } => dialog.set_age(value.into_option())?,
                }
                self.print_dialog();
            }
            SessionCommand::Submit => {
                let result = self.screen.submit()?;
                self.print_result(&result);
                self.print_table();
            }
            SessionCommand::Cancel => {
                self.screen.dialog_mut().cancel()?;
                self.print_table();
            }
            SessionCommand::Dismiss => {
                self.screen.dialog_mut().dismiss()?;
                self.print_table();
            }
            SessionCommand::Config => print!("{}", render_config(&self.config)),
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn report(&self, error: UsrmgrError) {
        match error {
            UsrmgrError::Validation(_) if self.screen.dialog().is_open() => self.print_dialog(),
            other => eprintln!("{} {}", "Error:".red(), other),
        }
    }

    fn print_screen(&self) {
        print!(
            "{}",
            render_panel(self.screen.panel(), &self.config.datetime_format)
        );
        self.print_table();
    }

    fn print_table(&self) {
        print!(
            "{}",
            render_table(
                &self.screen.rows(),
                self.screen.sort(),
                &self.config.datetime_format
            )
        );
    }

    fn print_dialog(&self) {
        print!(
            "{}",
            render_dialog(self.screen.dialog(), &self.config.datetime_format)
        );
    }

    fn print_result(&self, result: &CmdResult) {
        print!("{}", render_messages(&result.messages));
    }
}
