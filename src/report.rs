use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};

/// Status output for a repair run: one `Fixed:` line per written file and a
/// closing message after a blank line.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        let out = io::stdout();
        let color = out.is_terminal();
        Self { out, color }
    }
}

impl<W: Write> Console<W> {
    pub fn plain(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn fixed(&mut self, path: &str) -> Result<()> {
        if self.color {
            writeln!(self.out, "{} {}", "Fixed:".bold().green(), path)?;
        } else {
            writeln!(self.out, "Fixed: {path}")?;
        }
        Ok(())
    }

    pub fn finish(&mut self, message: &str) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
