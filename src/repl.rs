// repl.rs

use anyhow::Result;
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::actions;
use crate::history::History;

fn print_menu() {
    println!("----- Main menu -----");
    println!("1. Operate");
    println!("2. Show all operations.");
    println!("3. Undo last operation.");
    println!("4. Clear all.");
    println!("5. Exit");
}

pub fn start_repl() -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut history = History::new();
    debug!("session started, history capacity {}", history.capacity());

    loop {
        print_menu();
        let line = match rl.readline("Select an option: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let choice = line.trim();
        if choice.is_empty() {
            continue;
        }
        match choice.parse::<u32>() {
            Ok(1) => match actions::operate(&mut rl, &mut history) {
                Ok(()) => {}
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            },
            Ok(2) => actions::show_all(&history),
            Ok(3) => actions::undo(&mut history),
            Ok(4) => actions::clear_all(&mut history),
            Ok(5) => {
                println!("Thank you. Have a nice day.");
                break;
            }
            _ => println!("Invalid option."),
        }
    }
    Ok(())
}
