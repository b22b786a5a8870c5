//! Size-rotated trace file.
//!
//! Lines are appended to `<path>`. Once the file grows past its size limit
//! it is shifted to `<path>.1`, the previous `<path>.1` to `<path>.2` and so
//! on; the oldest backup beyond the retention count is dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default rotation threshold (5 MB).
const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Default number of rotated files kept next to the live one.
const DEFAULT_BACKUPS: usize = 3;

/// Append-only line writer with numbered backups.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    /// Open handle and the number of bytes in the live file.
    state: Mutex<Option<(File, u64)>>,
}

impl RotatingFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            state: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened, rotated or written, or if a
    /// previous writer panicked while holding the lock.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "trace file lock poisoned"))?;

        let written = state.as_ref().map_or_else(|| file_len(&self.path), |(_, len)| *len);
        if written > self.max_bytes {
            *state = None;
            self.shift_backups()?;
        }

        if state.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            *state = Some((file, file_len(&self.path)));
        }

        if let Some((file, len)) = state.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
            *len += line.len() as u64 + 1;
        }
        Ok(())
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn shift_backups(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

fn file_len(path: &Path) -> u64 {
    fs::metadata(path).map_or(0, |m| m.len())
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}
