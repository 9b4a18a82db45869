pub mod about;
pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod questions;
pub mod show;

use std::io::BufRead;

/// Read one line, trimmed. `None` at end of input.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
