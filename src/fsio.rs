use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub fn read_text(path: &Path) -> Result<String> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    String::from_utf8(data).with_context(|| format!("decoding {} as UTF-8", path.display()))
}

/// Replaces `path` with `contents` byte for byte.
///
/// Data goes to a sibling temp file that is renamed over the target, so a
/// crash mid-write leaves the original in place. Symlinks are written
/// through, a target that cannot be opened for writing fails as a direct
/// write would, and its permissions are carried over. Files with more than
/// one hard link are rewritten in place so every link sees the new bytes.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(real) => real,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(e).with_context(|| format!("resolving {}", path.display())),
    };
    let existing = match fs::metadata(&target) {
        Ok(meta) => Some(meta),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    if let Some(meta) = &existing {
        let mut file = OpenOptions::new()
            .write(true)
            .open(&target)
            .with_context(|| format!("writing {}", path.display()))?;
        if has_other_links(meta) {
            file.set_len(0)
                .and_then(|_| file.write_all(contents))
                .and_then(|_| file.sync_all())
                .with_context(|| format!("writing {}", path.display()))?;
            return Ok(());
        }
    }

    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("create temp file next to {}", path.display()))?;
    tmp.write_all(contents)
        .with_context(|| format!("writing {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("flushing {}", path.display()))?;
    if let Some(meta) = existing {
        fs::set_permissions(tmp.path(), meta.permissions())
            .with_context(|| format!("copy permissions of {}", path.display()))?;
    }
    tmp.persist(&target)
        .map_err(|e| e.error)
        .with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}

#[cfg(unix)]
fn has_other_links(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    meta.nlink() > 1
}

#[cfg(not(unix))]
fn has_other_links(_meta: &fs::Metadata) -> bool {
    false
}
