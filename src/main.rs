// main.rs

mod actions;
mod error;
mod history;
mod operation;
mod repl;
mod util;

use anyhow::Result;

fn main() -> Result<()> {
    util::init_logger();
    repl::start_repl()
}
