//! Interactive shell
//!
//! The shell is the caller side of the controller boundary: it parses one
//! command per input line with clap (multicall mode), asks the controller
//! to perform the operation, and renders the result. It never touches the
//! store directly.

use std::fmt;
use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};

use crate::controller::ExpenseController;
use crate::display::{format_register, format_transaction_short};
use crate::error::SpendlogError;
use crate::filter::{AmountFilter, CategoryFilter};
use crate::models::{Amount, Category};

/// One shell command, parsed from a single input line
#[derive(Parser)]
#[command(multicall = true)]
struct ShellCommand {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record an expense
    Add {
        /// Amount, e.g. "50", "12.50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category: food, travel, bills, entertainment, other
        category: String,
    },

    /// Remove the expense at the given list position
    Remove {
        /// Zero-based index into the list
        index: usize,
    },

    /// List expenses through the active filter
    List {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Manage the active filter
    #[command(subcommand)]
    Filter(FilterCommands),

    /// Show the total cost of all recorded expenses
    Total,

    /// Exit the shell
    #[command(alias = "exit")]
    Quit,
}

/// Filter subcommands
#[derive(Subcommand)]
enum FilterCommands {
    /// Only show expenses with this exact amount
    Amount {
        /// Amount to match
        amount: String,
    },
    /// Only show expenses in this category
    Category {
        /// Category to match
        category: String,
    },
    /// Remove the active filter
    Clear,
    /// Show the active filter
    Show,
}

/// What the active filter matches, remembered for `filter show`
enum ActiveCriterion {
    Amount(Amount),
    Category(Category),
}

impl fmt::Display for ActiveCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "amount = {}", amount),
            Self::Category(category) => write!(f, "category = {}", category),
        }
    }
}

/// Shell session state
struct Shell {
    controller: ExpenseController,
    criterion: Option<ActiveCriterion>,
}

impl Shell {
    fn new() -> Self {
        Self {
            controller: ExpenseController::new(),
            criterion: None,
        }
    }

    /// Handle one parsed command. Returns false when the session ends.
    fn handle(&mut self, command: Command, out: &mut impl Write) -> std::io::Result<bool> {
        match command {
            Command::Add { amount, category } => {
                let amount = match Amount::parse(&amount) {
                    Ok(amount) => amount,
                    Err(err) => {
                        writeln!(out, "{}", SpendlogError::from(err))?;
                        return Ok(true);
                    }
                };
                match self.controller.try_add_transaction(amount, &category) {
                    Ok(txn) => writeln!(out, "Added: {}", format_transaction_short(txn))?,
                    Err(err) => writeln!(out, "{}", err)?,
                }
            }

            Command::Remove { index } => {
                match self.controller.remove_selected_transaction(index) {
                    Ok(txn) => writeln!(out, "Removed: {}", format_transaction_short(&txn))?,
                    Err(err) => writeln!(out, "{}", err)?,
                }
            }

            Command::List { json } => {
                let transactions = self.controller.filtered_transactions();
                if json {
                    match serde_json::to_string_pretty(&transactions) {
                        Ok(rendered) => writeln!(out, "{}", rendered)?,
                        Err(err) => writeln!(out, "JSON error: {}", err)?,
                    }
                } else {
                    write!(out, "{}", format_register(&transactions))?;
                }
            }

            Command::Filter(cmd) => self.handle_filter(cmd, out)?,

            Command::Total => {
                writeln!(out, "Total: {}", self.controller.total_cost())?;
            }

            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn handle_filter(&mut self, cmd: FilterCommands, out: &mut impl Write) -> std::io::Result<()> {
        match cmd {
            FilterCommands::Amount { amount } => match Amount::parse(&amount) {
                Ok(amount) => {
                    self.controller.set_filter(Box::new(AmountFilter::new(amount)));
                    self.criterion = Some(ActiveCriterion::Amount(amount));
                    writeln!(out, "Filter set: amount = {}", amount)?;
                }
                Err(err) => writeln!(out, "{}", SpendlogError::from(err))?,
            },

            FilterCommands::Category { category } => match category.parse::<Category>() {
                Ok(category) => {
                    self.controller
                        .set_filter(Box::new(CategoryFilter::new(category)));
                    self.criterion = Some(ActiveCriterion::Category(category));
                    writeln!(out, "Filter set: category = {}", category)?;
                }
                Err(err) => writeln!(out, "{}", SpendlogError::from(err))?,
            },

            FilterCommands::Clear => {
                self.controller.clear_filter();
                self.criterion = None;
                writeln!(out, "Filter cleared")?;
            }

            FilterCommands::Show => match &self.criterion {
                Some(criterion) => writeln!(out, "Active filter: {}", criterion)?,
                None => writeln!(out, "No active filter")?,
            },
        }

        Ok(())
    }
}

/// Run the interactive shell until `quit` or end of input
pub fn run_shell(input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
    let mut shell = Shell::new();

    write!(output, "spendlog> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if !tokens.is_empty() {
            match ShellCommand::try_parse_from(tokens.iter().copied()) {
                Ok(shell_command) => {
                    if !shell.handle(shell_command.command, &mut output)? {
                        return Ok(());
                    }
                }
                Err(err) => {
                    writeln!(output, "{}", err)?;
                }
            }
        }

        write!(output, "spendlog> ")?;
        output.flush()?;
    }

    Ok(())
}
