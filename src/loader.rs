//! Reads `.ls8` program images: one binary literal per line, `#` starts a comment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::memory::{Memory, MEMORY_SIZE};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read program: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {literal} does not fit in a byte")]
    ValueOutOfRange { line: usize, literal: String },
    #[error("line {line}: program does not fit in {MEMORY_SIZE} bytes")]
    ProgramTooLarge { line: usize },
}

/// Lines that are not a binary literal (blank, comment-only, junk) are skipped
/// without consuming an address.
pub fn parse(source: &str) -> Result<Memory, LoadError> {
    let mut memory = Memory::new();
    let mut address = 0;
    for (index, line) in source.lines().enumerate() {
        let code = line.split('#').next().unwrap_or_default().trim();
        let Some(literal) = binary_literal(code) else {
            continue;
        };
        let line = index + 1;
        let byte = literal.ok_or_else(|| LoadError::ValueOutOfRange {
            line,
            literal: code.to_owned(),
        })?;
        memory
            .write(address, byte)
            .map_err(|_| LoadError::ProgramTooLarge { line })?;
        address += 1;
    }
    Ok(memory)
}

/// `None` if `code` is not a base-2 integer, `Some(None)` if it is one but
/// falls outside `0..=255`.
fn binary_literal(code: &str) -> Option<Option<u8>> {
    let (negative, digits) = match code.as_bytes().first()? {
        b'-' => (true, &code[1..]),
        b'+' => (false, &code[1..]),
        _ => (false, code),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(Some(0));
    }
    if negative || significant.len() > 8 {
        return Some(None);
    }
    Some(u8::from_str_radix(significant, 2).ok())
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Memory, LoadError> {
    parse(&fs::read_to_string(path)?)
}
