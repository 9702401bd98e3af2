//! Backing-file storage for the task list.
//!
//! One task per line, newline-terminated, fields separated by `" | "`:
//!
//! - `T | <0|1> | <description>`
//! - `D | <0|1> | <description> | <YYYY-MM-DD>`
//! - `E | <0|1> | <description> | <YYYY-MM-DD>`
//!
//! The file is read in full on load and rewritten in full on save. The
//! command loop saves after every mutation, which keeps the in-memory list
//! and the file in lock-step. There is no temp-file-and-rename step; a
//! crash mid-save can leave a partially written file.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::task::{Task, SEPARATOR};

/// Message for dates that are not ISO-8601 calendar dates. Shared with the
/// command parser so the user sees one phrasing everywhere.
pub const DATE_FORMAT_MSG: &str = "Please key in the date in the format YYYY-MM-DD";

/// Storage errors.
#[derive(Debug)]
pub enum StorageError {
    /// I/O failure opening, creating, or writing the backing file.
    Io(String),
    /// A line in the backing file could not be decoded.
    Parse(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "{}", msg),
            Self::Parse(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// File-backed store for the task list. A plain value holding the path;
/// it retains nothing between calls.
#[derive(Debug, Clone)]
pub struct TaskFileStore {
    path: PathBuf,
}

impl TaskFileStore {
    /// Create a store over the given backing-file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing-file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list from the backing file, preserving line order.
    ///
    /// If the file does not exist it is created empty and an empty list is
    /// returned. Any line that fails to decode aborts the whole load; no
    /// partial list is ever returned.
    pub fn load(&self) -> Result<Vec<Task>, StorageError> {
        let io_err = |e: std::io::Error| StorageError::Io(format!("file not found: {}", e));

        if !self.path.exists() {
            File::create(&self.path).map_err(io_err)?;
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(io_err)?;
        let reader = BufReader::new(file);

        let mut tasks = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(io_err)?;
            tasks.push(decode_line(&line)?);
        }
        Ok(tasks)
    }

    /// Overwrite the backing file with the given tasks, one line each, in
    /// the given order.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let io_err = |e: std::io::Error| StorageError::Io(format!("failed to save changes: {}", e));

        let mut file = File::create(&self.path).map_err(io_err)?;
        for task in tasks {
            writeln!(file, "{}", task.to_line()).map_err(io_err)?;
        }
        Ok(())
    }
}

/// Decode one backing-file line into a task.
///
/// Fields are tokenized by the separator: the first is the type tag, the
/// second the done flag (`1` means done, anything else not done), the rest
/// is the description. For deadline/event lines the date is everything
/// after the LAST separator occurrence, so descriptions containing the
/// separator still decode.
fn decode_line(line: &str) -> Result<Task, StorageError> {
    let malformed = || StorageError::Parse(format!("malformed task line: {:?}", line));

    let mut fields = line.splitn(3, SEPARATOR);
    let tag = fields.next().unwrap_or("");
    let done = fields.next().ok_or_else(malformed)?;
    let rest = fields.next().ok_or_else(malformed)?;

    let mut task = match tag {
        "T" => Task::todo(rest),
        "D" | "E" => {
            let (description, date_str) = rest.rsplit_once(SEPARATOR).ok_or_else(malformed)?;
            let date: NaiveDate = date_str
                .parse()
                .map_err(|_| StorageError::Parse(DATE_FORMAT_MSG.to_string()))?;
            if tag == "D" {
                Task::deadline(description, date)
            } else {
                Task::event(description, date)
            }
        }
        _ => return Err(StorageError::Parse(format!("unknown task: {:?}", line))),
    };

    if done == "1" {
        task.mark_done();
    }
    Ok(task)
}
