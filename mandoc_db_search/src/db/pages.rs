// src/db/pages.rs
use anyhow::{Context as _, Result, bail};
use std::fmt;
use std::str;

use crate::db::reader::{next_offset, read_number, read_raw_string, read_string, read_string_list};

/// Offset of the total number of page entries.
pub const PAGES_COUNT_OFFSET: usize = 16;

/// Offset of the first page entry.
pub const PAGES_TABLE_OFFSET: usize = 20;

/// Each page entry is five numbers.
pub const PAGE_ENTRY_LEN: usize = 20;

/// One name of a page together with its name sources byte.
///
/// The bits of `source` tell where the name appears:
///
/// * `0b0000_0001` - a SYNOPSIS section `.Nm` block
/// * `0b0000_0010` - any NAME section `.Nm` macro
/// * `0b0000_0100` - the first NAME section `.Nm` macro
/// * `0b0000_1000` - a header line (`.Dt` or `.TH`)
/// * `0b0001_0000` - a file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Name<'a> {
    pub value: &'a str,
    pub source: u8,
}

impl fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

impl<'a> Name<'a> {
    /// Parses a names list: strings whose first byte is the sources byte.
    fn parse_list(bytes: &'a [u8], offset: usize) -> Result<Vec<Self>> {
        let mut names = Vec::new();
        let mut cursor = offset;

        loop {
            let raw = read_raw_string(bytes, cursor)?;
            let Some((&source, name_bytes)) = raw.split_first() else {
                return Ok(names);
            };
            if !matches!(source, 1..=31) {
                bail!("Invalid name source byte 0x{source:02x} at offset {cursor}");
            }
            let value = str::from_utf8(name_bytes)
                .with_context(|| format!("Invalid UTF-8 in page name at offset {cursor}"))?;
            names.push(Self { value, source });
            cursor = next_offset(cursor, raw.len())?;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    /// Written in mdoc(7) or man(7).
    MdocMan,
    /// Preformatted (catman) page.
    Preformatted,
}

impl TryFrom<u8> for PageFormat {
    type Error = anyhow::Error;

    fn try_from(byte: u8) -> Result<Self> {
        match byte {
            1 => Ok(Self::MdocMan),
            2 => Ok(Self::Preformatted),
            other => bail!("Unknown page format byte 0x{other:02x}"),
        }
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MdocMan => f.write_str("man(7) or mdoc(7)"),
            Self::Preformatted => f.write_str("preformatted"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub names: Vec<Name<'a>>,
    pub sections: Vec<&'a str>,
    /// `None` for machine-independent pages.
    pub archs: Option<Vec<&'a str>>,
    pub description: &'a str,
    pub files: Vec<&'a str>,
    pub format: PageFormat,
}

impl<'a> Page<'a> {
    /// Parses the page entry at `offset`.
    ///
    /// The entry holds, in order, the offsets of the names list, the sections
    /// list, the architectures list (0 when machine-independent), the
    /// description string, and the files list. The files list is preceded by
    /// one byte holding the page format.
    ///
    /// # Errors
    ///
    /// Returns an error if any offset is out of range or a list is malformed.
    pub fn parse(bytes: &'a [u8], offset: usize) -> Result<Self> {
        let field = |index: usize| read_number(bytes, offset.saturating_add(index * 4));

        let names = Name::parse_list(bytes, field(0)?)?;
        let sections = read_string_list(bytes, field(1)?)?;
        let archs = match field(2)? {
            0 => None,
            archs_offset => Some(read_string_list(bytes, archs_offset)?),
        };
        let description = read_string(bytes, field(3)?)?;

        let files_offset = field(4)?;
        let format_byte = *bytes
            .get(files_offset)
            .with_context(|| format!("Truncated database: no page format at {files_offset}"))?;
        let format = PageFormat::try_from(format_byte)?;
        let files = read_string_list(bytes, next_offset(files_offset, 0)?)?;

        Ok(Self {
            names,
            sections,
            archs,
            description,
            files,
            format,
        })
    }

    /// Whether any name of the page equals `query`, ignoring ASCII case.
    #[must_use]
    pub fn has_name(&self, query: &str) -> bool {
        self.names.iter().any(|name| name.value.eq_ignore_ascii_case(query))
    }

    #[must_use]
    pub fn joined_names(&self) -> String {
        join(self.names.iter().map(|name| name.value))
    }
}

fn join<'s>(items: impl Iterator<Item = &'s str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "* Names: {}", self.joined_names())?;
        writeln!(f, "* Sections: {}", join(self.sections.iter().copied()))?;
        match &self.archs {
            None => writeln!(f, "* Architectures: machine-independent")?,
            Some(archs) => writeln!(f, "* Architectures: {}", join(archs.iter().copied()))?,
        }
        writeln!(f, "* Description: {}", self.description)?;
        writeln!(f, "* Files: {}", join(self.files.iter().copied()))?;
        write!(f, "* Format: {}", self.format)
    }
}

/// The pages table: a count followed by that many page entries.
#[derive(Debug, Clone, Default)]
pub struct Pages<'a> {
    pub entries: Vec<Page<'a>>,
}

impl<'a> Pages<'a> {
    /// # Errors
    ///
    /// Returns an error if the table does not fit in the file or any entry
    /// fails to parse.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let count = read_number(bytes, PAGES_COUNT_OFFSET)?;
        let table_end = count
            .checked_mul(PAGE_ENTRY_LEN)
            .and_then(|len| len.checked_add(PAGES_TABLE_OFFSET))
            .context("Page count overflows")?;
        if table_end > bytes.len() {
            bail!("Truncated database: {count} page entries do not fit in the file");
        }

        let entries = (0..count)
            .map(|index| Page::parse(bytes, PAGES_TABLE_OFFSET + index * PAGE_ENTRY_LEN))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Index of the page whose entry starts at `offset`.
    #[must_use]
    pub fn index_of_entry(&self, offset: usize) -> Option<usize> {
        let relative = offset.checked_sub(PAGES_TABLE_OFFSET)?;
        let index = relative / PAGE_ENTRY_LEN;
        (relative % PAGE_ENTRY_LEN == 0 && index < self.entries.len()).then_some(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page<'a>> {
        self.entries.iter()
    }
}
