use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// A man root with `man1/{a.1,b.1}` and `man3/c.3`.
pub fn setup_man_tree() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "man1/a.1", ".TH A 1")?;
    create_test_file(&dir, "man1/b.1", ".TH B 1")?;
    create_test_file(&dir, "man3/c.3", ".TH C 3")?;

    Ok(dir)
}
