// src/db/reader.rs
//! Bounds-checked primitives for the mandoc.db encoding.
//!
//! * Number: a 32-bit integer in big endian byte order.
//! * String: a NUL-terminated array of bytes.
//! * Strings list: strings terminated by a second NUL after the final entry.
use anyhow::{Context as _, Result, bail};
use std::str;

pub const NUMBER_LEN: usize = 4;

/// Reads the number stored at `offset`.
///
/// # Errors
///
/// Returns an error if the file ends before the four bytes at `offset`.
pub fn read_number(bytes: &[u8], offset: usize) -> Result<usize> {
    let raw: [u8; NUMBER_LEN] = offset
        .checked_add(NUMBER_LEN)
        .and_then(|end| bytes.get(offset..end))
        .and_then(|slice| slice.try_into().ok())
        .with_context(|| format!("Truncated database: no number at offset {offset}"))?;
    usize::try_from(u32::from_be_bytes(raw)).context("Number does not fit in usize")
}

/// Everything from `offset` to the end of the file.
///
/// # Errors
///
/// Returns an error if `offset` is past the end of the file.
pub fn tail(bytes: &[u8], offset: usize) -> Result<&[u8]> {
    bytes
        .get(offset..)
        .with_context(|| format!("Offset {offset} is past the end of the database"))
}

/// The raw bytes of the NUL-terminated string at `offset`, without the NUL.
///
/// # Errors
///
/// Returns an error if `offset` is out of range or no NUL follows it.
pub fn read_raw_string(bytes: &[u8], offset: usize) -> Result<&[u8]> {
    let rest = tail(bytes, offset)?;
    let Some(end) = rest.iter().position(|b| *b == 0) else {
        bail!("Unterminated string at offset {offset}");
    };
    let (raw, _) = rest.split_at(end);
    Ok(raw)
}

/// Reads the NUL-terminated UTF-8 string at `offset`.
///
/// # Errors
///
/// Returns an error if the string is unterminated, out of range or not UTF-8.
pub fn read_string(bytes: &[u8], offset: usize) -> Result<&str> {
    let raw = read_raw_string(bytes, offset)?;
    str::from_utf8(raw).with_context(|| format!("Invalid UTF-8 in string at offset {offset}"))
}

/// Reads the strings list at `offset`.
///
/// # Errors
///
/// Returns an error if any entry is malformed or the list is unterminated.
pub fn read_string_list(bytes: &[u8], offset: usize) -> Result<Vec<&str>> {
    let mut list = Vec::new();
    let mut cursor = offset;

    loop {
        let item = read_string(bytes, cursor)?;
        // An empty string is the second NUL closing the list.
        if item.is_empty() {
            return Ok(list);
        }
        cursor = next_offset(cursor, item.len())?;
        list.push(item);
    }
}

/// Offset right after a string of `len` bytes and its NUL.
pub(crate) fn next_offset(cursor: usize, len: usize) -> Result<usize> {
    cursor
        .checked_add(len)
        .and_then(|end| end.checked_add(1))
        .context("String offset overflows")
}
