use std::io;

use anyhow::Result;
use clap::Parser;

use spendlog::cli::run_shell;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Personal expense tracker with an interactive shell",
    long_about = "spendlog records expenses (amount + category), lists and \
                  filters them, and supports removing individual entries. \
                  Commands are read one per line; run 'help' inside the \
                  shell for the full list."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    println!("spendlog - personal expense tracker");
    println!("Type 'help' for commands, 'quit' to exit.");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(stdin.lock(), stdout.lock())?;

    Ok(())
}
