// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reading existing translations and writing pipeline output.
//!
//! ```text
//! read_text(path)       bytes --> decode_bytes (BOM aware)
//! write_output(path)    create_dir_all(parent)
//!                       NamedTempFile in parent --> persist over path
//! ```
//!
//! A write either replaces the destination completely or leaves it alone.
//! A replaced file keeps its permissions; a new one gets the umask default.

use std::fs::Permissions;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use tracing::{debug, info};

use super::encoding::{OutputEncoding, decode_bytes, encode_text};
use crate::error::{FsError, TxResult};

/// Reads a text file, decoding it according to its byte-order mark.
///
/// # Errors
///
/// Returns an `FsError` if the file cannot be read.
pub fn read_text(path: &Path) -> TxResult<String> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    Ok(decode_bytes(&bytes).into_owned())
}

/// Options for [`write_output`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOptions {
    /// Target encoding.
    pub encoding: OutputEncoding,
    /// Prefix the file with a byte-order mark.
    pub bom: bool,
    /// Log instead of writing.
    pub dry_run: bool,
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
const fn new_file_permissions() -> Option<Permissions> {
    None
}

/// Creates the temp file that will replace `path`, with the permissions the
/// destination has or would get from a plain create.
fn replacement_file(parent: &Path, path: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    let existing = std::fs::metadata(path).ok().map(|m| m.permissions());
    if existing.is_none()
        && let Some(permissions) = new_file_permissions()
    {
        builder.permissions(permissions);
    }
    let file = builder.tempfile_in(parent)?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }
    Ok(file)
}

/// Writes `content` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an `FsError` if the directory cannot be created or the file cannot
/// be written or moved into place.
pub fn write_output(path: &Path, content: &str, options: WriteOptions) -> TxResult<()> {
    if options.dry_run {
        info!(
            path = %path.display(),
            bytes = content.len(),
            encoding = %options.encoding,
            bom = options.bom,
            "[DRY-RUN] would write file"
        );
        return Ok(());
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;

    let bytes = encode_text(content, options.encoding, options.bom);

    let mut file = replacement_file(parent, path).map_err(|e| FsError::from_io(parent, e))?;
    if let Err(e) = file.write_all(&bytes).and_then(|()| file.flush()) {
        return Err(FsError::from_io(file.path(), e).into());
    }
    file.persist(path)
        .map_err(|e| FsError::from_io(path, e.error))?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}
