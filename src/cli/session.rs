/// Interactive session loop
///
/// This module implements the command loop that:
/// 1. Prints the habit list (and the help text when asked)
/// 2. Reads one command token
/// 3. Runs the matching command and reports errors without stopping

use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::cli::Prompter;
use crate::commands::{self, Command, HELP_TEXT};
use crate::storage::HabitStorage;
use crate::store::HabitStore;
use crate::AppError;

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<'a, S: HabitStorage, R, W> {
    store: &'a HabitStore<S>,
    prompter: Prompter<R, W>,
    show_help: bool,
}

impl<'a, S: HabitStorage, R: BufRead, W: Write> Session<'a, S, R, W> {
    pub fn new(store: &'a HabitStore<S>, prompter: Prompter<R, W>) -> Self {
        Self {
            store,
            prompter,
            show_help: true,
        }
    }

    /// Run until `done`, end of input, or a storage failure
    pub fn run(&mut self) -> Result<(), AppError> {
        info!("Starting interactive session");

        loop {
            self.draw()?;

            let Some(token) = self.prompter.ask("What?: ")? else {
                info!("Input closed, ending session");
                break;
            };

            if self.dispatch(Command::parse(&token))? == Flow::Exit {
                break;
            }
        }

        self.prompter.say("Goodbye!")?;
        Ok(())
    }

    /// Hand back the writer (useful for testing)
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn draw(&mut self) -> Result<(), AppError> {
        let out = self.prompter.output();
        writeln!(out)?;
        if self.show_help {
            writeln!(out, "{}", HELP_TEXT)?;
            writeln!(out)?;
            self.show_help = false;
        }
        commands::print_habits(self.store, out)
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow, AppError> {
        debug!("Dispatching {:?}", command);

        let result = match command {
            Command::Done => return Ok(Flow::Exit),
            Command::Empty => Ok(()),
            Command::Help => {
                self.show_help = true;
                Ok(())
            }
            Command::CheckIn(id) => commands::check_in(self.store, &mut self.prompter, id).map(|_| ()),
            Command::Add => commands::create_habit(self.store, &mut self.prompter).map(|_| ()),
            Command::Delete => commands::delete_habit(self.store, &mut self.prompter),
            Command::Zero => commands::zero_habit(self.store, &mut self.prompter),
            Command::ClearRecord => commands::clear_record(self.store, &mut self.prompter),
            Command::Edit => commands::edit_habit(self.store, &mut self.prompter),
            Command::Purge => commands::purge_habits(self.store, &mut self.prompter),
            Command::Unknown(token) => {
                self.prompter.say(format!("Unknown command '{}'. Type 'help' for the list.", token))?;
                Ok(())
            }
        };

        match result {
            Ok(()) => Ok(Flow::Continue),
            Err(e) if e.is_recoverable() => {
                warn!("Command rejected: {}", e);
                self.prompter.say(format!("Error: {}", e))?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }
}
