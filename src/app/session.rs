//! The interactive command loop.
//!
//! Each line is parsed into a [`Command`], fully executed (including any disambiguation
//! prompt) and answered before the next line is read. Per-command errors are printed and
//! the loop carries on.

use crate::domain::{AppError, Command, StockOperation};
use crate::ports::{ComponentStore, Console, Operator};

use super::AppContext;
use super::commands::{change, find, prune, stock};
use super::render;

/// Whether the loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Print the banner and run commands until `exit` or end of input.
///
/// Only failures to read input or write output end the session with an error.
pub fn run<S, O, C>(ctx: &mut AppContext<S, O, C>) -> Result<(), AppError>
where
    S: ComponentStore,
    O: Operator,
    C: Console,
{
    print(&mut ctx.console, render::banner())?;

    while let Some(line) = ctx.operator.read_command(render::PROMPT)? {
        match dispatch(ctx, &line) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => {
                tracing::debug!(error = %err, input_error = err.is_input_error(), "command failed");
                ctx.console.write_line(&format!("Error: {err}"))?;
            }
        }
    }

    tracing::debug!("session ended");
    Ok(())
}

/// Execute a single input line.
pub fn dispatch<S, O, C>(ctx: &mut AppContext<S, O, C>, line: &str) -> Result<Flow, AppError>
where
    S: ComponentStore,
    O: Operator,
    C: Console,
{
    let command = Command::parse(line);
    tracing::debug!(?command, "dispatching");

    let lines = match command {
        Command::Exit => return Ok(Flow::Exit),
        Command::Help => render::help(),
        Command::Stock => render::stock_report(&stock::execute(&ctx.store)),
        Command::Find { words } => render::find_outcome(&find::execute(&ctx.store, &words)),
        Command::Format => render::prune_outcome(&prune::execute(&ctx.store)?),
        Command::Clear => {
            ctx.console.clear()?;
            render::banner()
        }
        Command::Add { quantity, name } => {
            apply_change(ctx, StockOperation::Add, quantity, &name)?
        }
        Command::Remove { quantity, name } => {
            apply_change(ctx, StockOperation::Remove, quantity, &name)?
        }
        Command::Invalid(failure) => return Err(failure.into()),
    };

    print(&mut ctx.console, lines)?;
    Ok(Flow::Continue)
}

fn apply_change<S, O, C>(
    ctx: &mut AppContext<S, O, C>,
    operation: StockOperation,
    quantity: u64,
    name: &str,
) -> Result<Vec<String>, AppError>
where
    S: ComponentStore,
    O: Operator,
    C: Console,
{
    let outcome = change::execute(&ctx.store, &mut ctx.operator, operation, quantity, name)?;
    Ok(render::stock_change(&outcome))
}

fn print<C: Console>(console: &mut C, lines: Vec<String>) -> Result<(), AppError> {
    for line in &lines {
        console.write_line(line)?;
    }
    Ok(())
}
