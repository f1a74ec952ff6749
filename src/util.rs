// util.rs

use std::io::Write;

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> std::io::Result<()> {
    match writeln!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
