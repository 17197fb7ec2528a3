use crate::collapse::CollapseMode;
use crate::fixer::{self, FileOutcome, FixOptions};
use crate::report::Console;
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct ScanArgs<'a> {
    pub root: &'a Path,
    pub file_name: &'a str,
    pub skip_dirs: &'a [String],
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub fixed: Vec<PathBuf>,
    pub total: usize,
}

/// Every file named `file_name` under `root`, in file-name order, without
/// descending into skipped directories.
pub fn find_files(args: &ScanArgs<'_>) -> Result<Vec<PathBuf>> {
    if !args.root.is_dir() {
        bail!("scan root {} is not a directory", args.root.display());
    }
    let mut found = Vec::new();
    let walker = WalkDir::new(args.root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !args
                    .skip_dirs
                    .iter()
                    .any(|skip| e.file_name() == skip.as_str())
        });
    for entry in walker {
        let entry = entry.with_context(|| format!("walking {}", args.root.display()))?;
        if entry.file_type().is_file() && entry.file_name() == args.file_name {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

/// Repairs every discovered file, rewriting only those whose bytes change.
pub fn run_scan<W: Write>(args: &ScanArgs<'_>, console: &mut Console<W>) -> Result<ScanReport> {
    let files = find_files(args)?;
    let opts = FixOptions {
        collapse: CollapseMode::UntilStable,
        write_unchanged: false,
    };
    let mut report = ScanReport {
        total: files.len(),
        ..ScanReport::default()
    };
    for path in files {
        if fixer::fix_file(&path, &opts)? == FileOutcome::Rewritten {
            console.fixed(&path.display().to_string())?;
            report.fixed.push(path);
        }
    }
    console.finish(&format!(
        "Total files fixed: {}/{}",
        report.fixed.len(),
        report.total
    ))?;
    Ok(report)
}
