use crate::collapse::{self, CollapseMode};
use crate::report::Console;
use crate::{eol, fsio, targets};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct FixOptions {
    pub collapse: CollapseMode,
    /// Write the file even when repair leaves it byte-identical.
    pub write_unchanged: bool,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            collapse: CollapseMode::SinglePass,
            write_unchanged: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Rewritten,
    Unchanged,
}

/// Working form, attribute collapse, then CRLF output form.
pub fn fix_content(text: &str, mode: CollapseMode) -> String {
    let working = eol::to_working_form(text);
    let collapsed = collapse::collapse(&working, mode);
    eol::to_crlf(&collapsed)
}

pub fn fix_file(path: &Path, opts: &FixOptions) -> Result<FileOutcome> {
    let original = fsio::read_text(path)?;
    let fixed = fix_content(&original, opts.collapse);
    if !opts.write_unchanged && fixed == original {
        return Ok(FileOutcome::Unchanged);
    }
    fsio::write_atomic(path, fixed.as_bytes())?;
    Ok(FileOutcome::Rewritten)
}

/// Repairs each target in order and stops at the first failure, leaving the
/// remaining targets untouched.
pub fn fix_paths<W: Write>(
    paths: &[String],
    opts: &FixOptions,
    console: &mut Console<W>,
) -> Result<Vec<FileOutcome>> {
    let mut outcomes = Vec::with_capacity(paths.len());
    for target in paths {
        let outcome = fix_file(&targets::host_path(target), opts)?;
        if outcome == FileOutcome::Rewritten {
            console.fixed(target)?;
        }
        outcomes.push(outcome);
    }
    console.finish("Done!")?;
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn plain_lf_text_only_gains_carriage_returns() {
        let text = "import x from 'y'\n\nexport default x\n";
        assert_eq!(
            fix_content(text, CollapseMode::SinglePass),
            "import x from 'y'\r\n\r\nexport default x\r\n"
        );
    }

    #[test]
    fn split_attribute_is_joined_with_surroundings_kept() {
        let text = "  <div className=\"foo\r\n  bar\">\r\n    hi\r\n";
        assert_eq!(
            fix_content(text, CollapseMode::SinglePass),
            "  <div className=\"foo bar\">\r\n    hi\r\n"
        );
    }

    #[test]
    fn stray_carriage_return_turns_into_space() {
        assert_eq!(fix_content("A\rB", CollapseMode::SinglePass), "A B");
    }

    #[test]
    fn second_run_is_byte_identical() {
        let text = "<main className=\"min-h-screen\n  bg-white\">\r\n</main>\n";
        let once = fix_content(text, CollapseMode::SinglePass);
        let twice = fix_content(&once, CollapseMode::SinglePass);
        assert_eq!(once, twice);
    }

    #[test]
    fn unchanged_file_is_skipped_when_asked() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.tsx");
        fs::write(&path, "ok\r\n").unwrap();
        let opts = FixOptions {
            write_unchanged: false,
            ..FixOptions::default()
        };
        assert_eq!(fix_file(&path, &opts).unwrap(), FileOutcome::Unchanged);
        assert_eq!(
            fix_file(&path, &FixOptions::default()).unwrap(),
            FileOutcome::Rewritten
        );
    }

    #[test]
    fn run_stops_at_first_missing_file() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("one.tsx");
        let missing = dir.path().join("missing.tsx");
        let third = dir.path().join("three.tsx");
        fs::write(&first, "a\n").unwrap();
        fs::write(&third, "c\n").unwrap();
        let paths: Vec<String> = [&first, &missing, &third]
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();

        let mut console = Console::plain(Vec::new());
        let err = fix_paths(&paths, &FixOptions::default(), &mut console).unwrap_err();
        assert!(format!("{err:#}").contains("missing.tsx"));

        assert_eq!(fs::read(&first).unwrap(), b"a\r\n");
        assert_eq!(fs::read(&third).unwrap(), b"c\n");
        let out = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(out, format!("Fixed: {}\n", paths[0]));
    }

    #[cfg(unix)]
    #[test]
    fn read_only_page_fails_and_stays_untouched() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.tsx");
        fs::write(&path, "a\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();
        if fs::OpenOptions::new().write(true).open(&path).is_ok() {
            // root ignores permission bits
            return;
        }
        assert!(fix_file(&path, &FixOptions::default()).is_err());
        assert_eq!(fs::read(&path).unwrap(), b"a\n");
    }
}
