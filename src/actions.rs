// actions.rs

use std::io;

use itertools::Itertools;
use log::debug;
use rustyline::DefaultEditor;

use crate::error::CalcError;
use crate::history::History;
use crate::operation::{parse_number, Operation, Operator};
use crate::util::writeln_ignore_broken_pipe;

pub fn operate(rl: &mut DefaultEditor, history: &mut History) -> rustyline::Result<()> {
    // Do not prompt when the history is full; push re-checks on its own.
    if history.is_full() {
        println!("Error: {}", CalcError::HistoryFull);
        return Ok(());
    }

    let line = rl.readline("Insert the first number: ")?;
    let operand1 = match parse_number(&line) {
        Ok(n) => n,
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        }
    };

    let line = rl.readline("Insert the second number: ")?;
    let operand2 = match parse_number(&line) {
        Ok(n) => n,
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        }
    };

    let line = rl.readline("Select the operation (+ - * /): ")?;
    let operation = line
        .parse::<Operator>()
        .and_then(|operator| Operation::evaluate(operator, operand1, operand2));
    let operation = match operation {
        Ok(op) => op,
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        }
    };

    println!("{operation}");
    match history.push(operation) {
        Ok(()) => debug!("recorded {operation}"),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

pub fn show_all(history: &History) {
    if history.is_empty() {
        println!("There is no history to show.");
        return;
    }
    println!("Stored operations:");
    let listing = history
        .iter_recent()
        .map(|op| op.to_string())
        .join("\n-----\n");
    let _ = writeln_ignore_broken_pipe(io::stdout(), &listing);
}

pub fn undo(history: &mut History) {
    match history.pop() {
        Ok(op) => {
            debug!("undid {op}");
            println!("Last operation undone: {op}");
        }
        Err(_) => println!("There are no operations to undo."),
    }
}

pub fn clear_all(history: &mut History) {
    history.clear();
    debug!("history cleared");
    println!("All cleared.");
}
