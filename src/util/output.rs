use std::io::{self, Write};

use console::style;

pub fn warn(message: &str) {
    let _ = writeln!(io::stderr(), "{}", style(message).yellow());
}

pub fn error(message: &str) {
    let _ = writeln!(io::stderr(), "{}", style(message).red());
}

/// Writes the rendered result; an empty result prints nothing.
pub fn result(rendered: &str) -> io::Result<()> {
    if rendered.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    stdout.flush()
}
