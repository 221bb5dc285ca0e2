// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// A fake filesystem with `<tmp>/home` as the home directory.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        fs::create_dir_all(dir.path().join("home"))?;
        Ok(Self { dir })
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    /// Root paths exactly as the tool spells them.
    pub fn base_root(&self) -> PathBuf {
        self.home().join("..").join("usr/share/man")
    }

    pub fn fish_root(&self) -> PathBuf {
        self.home().join("..").join("usr/share/fish/man")
    }

    pub fn add_base_page(&self, name: &str) -> Result<()> {
        create_test_file(&self.dir.path().join("usr/share/man"), name, ".TH PAGE 1")
    }

    pub fn add_fish_page(&self, name: &str) -> Result<()> {
        create_test_file(&self.dir.path().join("usr/share/fish/man"), name, ".TH PAGE 1")
    }

    pub fn create_empty_fish_root(&self) -> Result<()> {
        fs::create_dir_all(self.dir.path().join("usr/share/fish/man"))?;
        Ok(())
    }
}

/// The scenario fixture: `man1/{a.1,b.1}` and `man3/c.3` under the base root.
pub fn setup_base_fixture() -> Result<Fixture> {
    let fixture = Fixture::new()?;
    fixture.add_base_page("man1/a.1")?;
    fixture.add_base_page("man1/b.1")?;
    fixture.add_base_page("man3/c.3")?;
    Ok(fixture)
}

pub fn sorted_lines(output: &[u8]) -> Result<Vec<String>> {
    let mut lines: Vec<String> = std::str::from_utf8(output)?
        .lines()
        .map(str::to_owned)
        .collect();
    lines.sort();
    Ok(lines)
}
