use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::data::export::{self, ExportOutcome};
use crate::data::filter::{FilterField, RangeFilter};
use crate::data::loader;
use crate::error::{ExportError, LoadError};
use crate::state::AppState;
use crate::ui::prompt::{is_quit, is_yes, Prompter};
use crate::ui::table;

const WELCOME: &str = "\nWelcome to the meteorite filtering program!\n\
                       Filters meteorite landings by mass or year.\n";
const GOODBYE: &str = "\nExiting program. Peace!";
const SKIPPED: &str = "Excel export skipped.";

// ---------------------------------------------------------------------------
// Interactive driver
// ---------------------------------------------------------------------------

/// One interactive session: load, filter, summarise, optionally export.
///
/// Every recoverable failure is reported on `output` and ends the session
/// normally; only terminal I/O errors are returned.
pub struct MeteorApp<R, W> {
    prompter: Prompter<R, W>,
    pub state: AppState,
}

impl<R: BufRead, W: Write> MeteorApp<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            state: AppState::default(),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run the session. `path` skips the file-name prompt and `field` the
    /// filter menu when given.
    pub fn run(&mut self, path: Option<PathBuf>, field: Option<FilterField>) -> Result<()> {
        self.say(WELCOME)?;

        let Some(path) = self.input_path(path)? else {
            return self.say(GOODBYE);
        };

        match loader::load_file(&path) {
            Ok(dataset) => self.state.set_dataset(dataset),
            Err(LoadError::NotFound(_)) => return self.say("\nFile not found. Exiting..."),
            Err(err) => {
                log::error!("{err}");
                return self.say(&format!("\nCould not read the file ({err}). Exiting..."));
            }
        }

        let Some(filter) = self.ask_filter(field)? else {
            return self.say(GOODBYE);
        };

        self.state.apply_filter(filter);
        table::write_summary(self.prompter.output(), &self.state.filtered)
            .context("writing summary")?;

        self.offer_export()
    }

    fn input_path(&mut self, given: Option<PathBuf>) -> Result<Option<PathBuf>> {
        if given.is_some() {
            return Ok(given);
        }
        let answer = self.ask("\nEnter a valid file name (ex. 'file_name.txt') or 'q' to quit: ")?;
        Ok(answer
            .filter(|a| !is_quit(a, 'q'))
            .map(|a| PathBuf::from(a.trim())))
    }

    /// Menu (unless `field` is preset) plus both bounds. `None` means the
    /// user quit.
    fn ask_filter(&mut self, field: Option<FilterField>) -> Result<Option<RangeFilter>> {
        let field = match field {
            Some(field) => field,
            None => {
                self.say("\nFilter by:\n1. Mass (g)\n2. Year\n3. Quit")?;
                let Some(choice) = self.ask(">> ")? else {
                    return Ok(None);
                };
                let Some(field) = FilterField::from_menu_choice(&choice) else {
                    return Ok(None);
                };
                field
            }
        };

        let filter = match field {
            FilterField::Mass => {
                let Some(lower) = self.ask_bound::<f64>(field, "LOWER")? else {
                    return Ok(None);
                };
                let Some(upper) = self.ask_bound::<f64>(field, "UPPER")? else {
                    return Ok(None);
                };
                RangeFilter::Mass { lower, upper }
            }
            FilterField::Year => {
                let Some(lower) = self.ask_bound::<i64>(field, "LOWER")? else {
                    return Ok(None);
                };
                let Some(upper) = self.ask_bound::<i64>(field, "UPPER")? else {
                    return Ok(None);
                };
                RangeFilter::Year { lower, upper }
            }
        };

        log::debug!("Filter: {filter:?}");
        Ok(Some(filter))
    }

    /// Ask until the answer parses or the user quits with `Q`.
    fn ask_bound<T: FromStr>(&mut self, field: FilterField, which: &str) -> Result<Option<T>> {
        let message = format!("Enter {which} {} ('Q' to quit): ", field.label());
        loop {
            let Some(answer) = self.ask(&message)? else {
                return Ok(None);
            };
            if is_quit(&answer, 'q') {
                return Ok(None);
            }
            match answer.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(&format!("'{answer}' is not a valid {field} bound, try again."))?,
            }
        }
    }

    fn offer_export(&mut self) -> Result<()> {
        let answer = self.ask("\nSave filtered data to Excel? (Y/N): ")?;
        if !answer.is_some_and(|a| is_yes(&a)) {
            return self.say(SKIPPED);
        }

        loop {
            let Some(name) = self.ask("Enter filename (leave blank for auto-generated): ")? else {
                return self.say(SKIPPED);
            };

            match export::export_records(&self.state.filtered, Some(name.as_str())) {
                Ok(ExportOutcome::Saved(path)) => {
                    return self.say(&format!("\nFiltered data saved to '{}'", path.display()));
                }
                Ok(ExportOutcome::NothingToSave) => return self.say("No data to save."),
                Err(err) => {
                    log::error!("Export failed: {err}");
                    self.say(&format!("Error: {err}"))?;
                    if matches!(err, ExportError::Unavailable) {
                        return Ok(());
                    }
                    let retry = self.ask("Try a different filename? (Y/N): ")?;
                    if !retry.is_some_and(|a| is_yes(&a)) {
                        return self.say(SKIPPED);
                    }
                }
            }
        }
    }

    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        self.prompter.ask(message).context("reading from terminal")
    }

    fn say(&mut self, message: &str) -> Result<()> {
        self.prompter.say(message).context("writing to terminal")
    }
}
