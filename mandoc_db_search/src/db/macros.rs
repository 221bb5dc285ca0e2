// src/db/macros.rs
use anyhow::{Context as _, Result, bail};

use crate::db::pages::Pages;
use crate::db::reader::{NUMBER_LEN, read_number, read_string};

/// Number of macro tables a version 1 database holds.
pub const MACRO_TABLE_COUNT: usize = 36;

/// Each macro value entry is two numbers.
const MACRO_VALUE_LEN: usize = 8;

/// The macros table: a count followed by the offset of every macro table.
#[derive(Debug, Clone, Default)]
pub struct Macros<'a> {
    pub tables: Vec<MacroTable<'a>>,
}

impl<'a> Macros<'a> {
    /// Parses the macros table at `offset`, resolving page references
    /// against `pages`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table does not hold exactly
    /// [`MACRO_TABLE_COUNT`] tables or any table is malformed.
    pub fn parse(bytes: &'a [u8], offset: usize, pages: &Pages<'_>) -> Result<Self> {
        let count = read_number(bytes, offset)?;
        if count != MACRO_TABLE_COUNT {
            bail!("Expected {MACRO_TABLE_COUNT} macro tables, found {count}");
        }

        let tables = (0..count)
            .map(|index| {
                let slot = offset.saturating_add(NUMBER_LEN * (index + 1));
                let table_offset = read_number(bytes, slot)?;
                MacroTable::parse(bytes, table_offset, pages)
                    .with_context(|| format!("Failed to parse macro table {index}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tables })
    }

    #[must_use]
    pub fn value_count(&self) -> usize {
        self.tables.iter().map(|table| table.values.len()).sum()
    }
}

/// One macro table: a count followed by that many macro values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroTable<'a> {
    pub values: Vec<MacroValue<'a>>,
}

impl<'a> MacroTable<'a> {
    fn parse(bytes: &'a [u8], offset: usize, pages: &Pages<'_>) -> Result<Self> {
        let count = read_number(bytes, offset)?;
        let mut values = Vec::new();

        for index in 0..count {
            let entry = index
                .checked_mul(MACRO_VALUE_LEN)
                .and_then(|relative| relative.checked_add(offset.saturating_add(NUMBER_LEN)))
                .context("Macro value offset overflows")?;
            values.push(MacroValue::parse(bytes, entry, pages)?);
        }

        Ok(Self { values })
    }
}

/// A macro argument and the pages using it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroValue<'a> {
    pub value: &'a str,
    /// Indexes into the pages table.
    pub pages: Vec<usize>,
}

impl<'a> MacroValue<'a> {
    /// The entry holds the offset of the value string and the offset of a
    /// zero-terminated list of page entry offsets.
    fn parse(bytes: &'a [u8], entry: usize, pages: &Pages<'_>) -> Result<Self> {
        let value = read_string(bytes, read_number(bytes, entry)?)?;

        let mut cursor = read_number(bytes, entry.saturating_add(NUMBER_LEN))?;
        let mut page_indexes = Vec::new();
        loop {
            let page_offset = read_number(bytes, cursor)?;
            if page_offset == 0 {
                break;
            }
            let index = pages.index_of_entry(page_offset).with_context(|| {
                format!("Macro value {value:?} refers to no page entry at offset {page_offset}")
            })?;
            page_indexes.push(index);
            cursor = cursor.saturating_add(NUMBER_LEN);
        }

        Ok(Self {
            value,
            pages: page_indexes,
        })
    }
}
