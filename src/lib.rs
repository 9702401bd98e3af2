//! taskmate: a personal task-tracking assistant.
//!
//! Keeps an ordered list of tasks (plain to-dos, deadlines, events) in
//! memory, drives it from an interactive command loop on stdin, and
//! persists it to a flat text file after every mutating command:
//!
//! - `tasks.txt` - one task per line, pipe-delimited (see [`storage`])
//!
//! The binary in `main.rs` wires the pieces together; the logic lives here
//! so tests can drive it directly.

pub mod color;
pub mod command;
pub mod config;
pub mod storage;
pub mod task;
