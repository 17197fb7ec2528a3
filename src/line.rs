use crate::fsio;
use crate::report::Console;
use anyhow::{Context, Result};
use regex::Regex;
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").expect("valid regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("line {line} is out of range; file has {count} lines")]
    OutOfRange { line: usize, count: usize },
}

/// Overwrite one line and optionally drop the split-off remainder that
/// follows it.
#[derive(Debug, Clone)]
pub struct LineEdit {
    /// 1-based.
    pub line: usize,
    pub replacement: String,
    pub drop_continuation: Option<String>,
}

impl LineEdit {
    /// Rejoins the edited lines with CRLF.
    pub fn apply(&self, text: &str) -> Result<String, LineError> {
        let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
        if self.line == 0 || self.line > lines.len() {
            return Err(LineError::OutOfRange {
                line: self.line,
                count: lines.len(),
            });
        }
        let idx = self.line - 1;
        lines[idx] = self.replacement.trim_end();
        if let Some(prefix) = &self.drop_continuation {
            if lines
                .get(idx + 1)
                .is_some_and(|next| next.trim().starts_with(prefix.as_str()))
            {
                lines.remove(idx + 1);
            }
        }
        Ok(lines.join("\r\n"))
    }
}

pub fn replace_line_in_file(path: &Path, edit: &LineEdit) -> Result<()> {
    let text = fsio::read_text(path)?;
    let fixed = edit
        .apply(&text)
        .with_context(|| format!("editing {}", path.display()))?;
    fsio::write_atomic(path, fixed.as_bytes())
}

pub fn run_replace_line<W: Write>(
    files: &[String],
    edit: &LineEdit,
    console: &mut Console<W>,
) -> Result<()> {
    for file in files {
        replace_line_in_file(&crate::targets::host_path(file), edit)?;
        console.fixed(file)?;
    }
    console.finish("All files fixed!")
}
