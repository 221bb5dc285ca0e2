// src/db.rs
use anyhow::{Context as _, Result, bail};
use std::io::{self, Write};
use tracing::debug;

pub mod macros;
pub mod pages;
pub mod reader;


use macros::Macros;
use pages::{Page, PageFormat, Pages};
use reader::read_number;

/// First and last four bytes of every mandoc.db file.
pub const DB_MAGIC: usize = 0x3a7d_0cdb;

pub const DB_VERSION: usize = 1;

/// How many non-man(7)/mdoc(7) pages the intro lists by name.
const INTRO_LISTED_PAGES: usize = 5;

/// A parsed mandoc.db file.
///
/// The file consists of, in order: the magic number, the version number, the
/// offset of the macros table, the offset of the trailing magic number, the
/// pages table, the macros table and the magic number again. Strings borrow
/// from the file contents.
#[derive(Debug, Clone)]
pub struct Database<'a> {
    pub pages: Pages<'a>,
    pub macros: Macros<'a>,
}

impl<'a> Database<'a> {
    /// # Errors
    ///
    /// Returns an error if either magic number or the version is wrong, or
    /// if the file is truncated or otherwise malformed.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let magic = read_number(bytes, 0).context("Not a mandoc.db file")?;
        let end_offset = read_number(bytes, 12).context("Not a mandoc.db file")?;
        let end_magic = read_number(bytes, end_offset).context("Truncated database")?;
        if magic != DB_MAGIC || end_magic != DB_MAGIC {
            bail!("Invalid file format: bad magic number");
        }

        let version = read_number(bytes, 4)?;
        if version != DB_VERSION {
            bail!("Unsupported database version {version} (expected {DB_VERSION})");
        }

        let pages = Pages::parse(bytes).context("Failed to parse the pages table")?;
        let macros_offset = read_number(bytes, 8)?;
        let macros = Macros::parse(bytes, macros_offset, &pages)
            .context("Failed to parse the macros table")?;

        debug!(
            pages = pages.len(),
            macro_values = macros.value_count(),
            "parsed mandoc.db"
        );
        Ok(Self { pages, macros })
    }

    /// First page with a name equal to `query`, ignoring ASCII case.
    #[must_use]
    pub fn search(&self, query: &str) -> Option<&Page<'a>> {
        self.pages.iter().find(|page| page.has_name(query))
    }

    /// Pages that are not written in man(7) or mdoc(7).
    pub fn preformatted_pages(&self) -> impl Iterator<Item = &Page<'a>> {
        self.pages
            .iter()
            .filter(|page| page.format == PageFormat::Preformatted)
    }

    /// Writes the summary shown before the first prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_intro<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let count = self.pages.len();
        writeln!(out, "[MANDOC.DB]")?;
        writeln!(
            out,
            "* Contains {count} man page {}.",
            if count == 1 { "entry" } else { "entries" }
        )?;

        let preformatted: Vec<&Page<'a>> = self.preformatted_pages().collect();
        match preformatted.len() {
            0 => writeln!(out, "* All pages use man(7) or mdoc(7).")?,
            1 => writeln!(out, "* One page does not use man(7) or mdoc(7).")?,
            num => writeln!(out, "* {num} pages do not use man(7) or mdoc(7).")?,
        }
        for page in preformatted.iter().take(INTRO_LISTED_PAGES) {
            writeln!(out, "    - {}", page.joined_names())?;
        }
        if preformatted.len() > INTRO_LISTED_PAGES {
            writeln!(out, "    - ...")?;
        }

        writeln!(out, "* Type \"quit\" to exit.")?;
        writeln!(out)
    }

    /// Writes the matching page, or a no-results line, followed by a blank line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_search<W: Write>(&self, query: &str, out: &mut W) -> io::Result<()> {
        match self.search(query) {
            Some(page) => writeln!(out, "{page}\n"),
            None => writeln!(out, "No results for \"{query}\".\n"),
        }
    }
}
