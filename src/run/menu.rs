use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::info;

use crate::input::Prompter;
use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::summary::render_report;
use crate::ui::chart;

const ADD_DATE_PROMPT: &str =
    "Enter the date of the transaction (dd-mm-yyyy) [press ENTER if today]: ";
const START_DATE_PROMPT: &str = "Enter the start date (dd-mm-yyyy): ";
const END_DATE_PROMPT: &str = "Enter the end date (dd-mm-yyyy): ";
const PLOT_PROMPT: &str = "Do you want to see a plot? (y/n) ";

pub(crate) fn as_menu(ledger: &Ledger) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    run_menu(ledger, &mut prompter, chart::show)
}

/// Numbered menu loop. Returns when the user picks "Exit"; ledger corruption
/// and I/O failures end the loop with an error.
pub(crate) fn run_menu<R: BufRead, W: Write>(
    ledger: &Ledger,
    prompter: &mut Prompter<R, W>,
    mut plot: impl FnMut(&[Transaction]) -> Result<()>,
) -> Result<()> {
    ledger.initialize()?;
    info!(path = %ledger.path().display(), "ledger ready");

    loop {
        prompter.say("")?;
        prompter.say("1. Add a new transaction.")?;
        prompter.say("2. View transactions and summary within a date range.")?;
        prompter.say("3. Exit")?;
        let choice = prompter.get_line("Enter your choice (1-3): ")?;

        match choice.trim() {
            "1" => add_transaction(ledger, prompter)?,
            "2" => {
                let records = view_range(ledger, prompter)?;
                if prompter.confirm(PLOT_PROMPT)? {
                    prompter.flush()?;
                    plot(&records)?;
                }
            }
            "3" => {
                prompter.say("Exiting...")?;
                prompter.flush()?;
                return Ok(());
            }
            _ => prompter.say("Invalid choice. Enter 1, 2, or 3.")?,
        }
    }
}

fn add_transaction<R: BufRead, W: Write>(
    ledger: &Ledger,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let date = prompter.get_date(ADD_DATE_PROMPT, true)?;
    let amount = prompter.get_amount()?;
    let category = prompter.get_category()?;
    let description = prompter.get_description()?;

    ledger.append(&Transaction::new(date, amount, category, description))?;
    prompter.say("Entry added successfully.")
}

fn view_range<R: BufRead, W: Write>(
    ledger: &Ledger,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<Transaction>> {
    let start = prompter.get_date(START_DATE_PROMPT, false)?;
    let end = prompter.get_date(END_DATE_PROMPT, false)?;
    let records = ledger.query(start, end)?;
    prompter.say("")?;
    prompter.say(render_report(start, end, &records).trim_end())?;
    Ok(records)
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
