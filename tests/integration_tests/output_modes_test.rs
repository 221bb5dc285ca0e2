// tests/integration_tests/output_modes_test.rs
use super::common::{Fixture, setup_base_fixture, sorted_lines};
use anyhow::Result;
use man_files::{Args, run_in};
use std::path::Path;

fn run_to_vec(args: &Args, home: &Path) -> Result<Vec<u8>> {
    let mut out: Vec<u8> = Vec::new();
    run_in(args, home, &mut out)?;
    Ok(out)
}

const fn args(count: bool, fishpath: bool, names: bool) -> Args {
    Args {
        count,
        fishpath,
        names,
    }
}

#[test]
fn test_count_mode_scenario() -> Result<()> {
    let fixture = setup_base_fixture()?;

    let out = run_to_vec(&args(true, false, false), &fixture.home())?;

    assert_eq!(
        String::from_utf8(out)?,
        format!("{} contains 3 files.\n", fixture.base_root().display())
    );
    Ok(())
}

#[test]
fn test_name_mode_scenario() -> Result<()> {
    let fixture = setup_base_fixture()?;

    let out = run_to_vec(&args(false, false, true), &fixture.home())?;

    assert_eq!(sorted_lines(&out)?, vec!["a.1", "b.1", "c.3"]);
    Ok(())
}

#[test]
fn test_path_mode_scenario() -> Result<()> {
    let fixture = setup_base_fixture()?;

    let out = run_to_vec(&args(false, false, false), &fixture.home())?;

    let lines = sorted_lines(&out)?;
    let base = fixture.base_root();
    assert_eq!(
        lines,
        vec![
            base.join("man1/a.1").display().to_string(),
            base.join("man1/b.1").display().to_string(),
            base.join("man3/c.3").display().to_string(),
        ]
    );
    for line in &lines {
        assert!(Path::new(line).is_file(), "{line} should be an existing file");
    }
    Ok(())
}

#[test]
fn test_count_wins_over_names() -> Result<()> {
    let fixture = setup_base_fixture()?;

    let both = run_to_vec(&args(true, false, true), &fixture.home())?;
    let count_only = run_to_vec(&args(true, false, false), &fixture.home())?;

    assert_eq!(both, count_only);
    Ok(())
}

#[test]
fn test_names_match_paths_and_counts() -> Result<()> {
    let fixture = setup_base_fixture()?;
    fixture.add_base_page("man5/passwd.5")?;
    fixture.add_base_page("man8/passwd.8")?;
    fixture.add_fish_page("man1/fish.1")?;
    fixture.add_fish_page("man1/a.1")?;

    for fishpath in [false, true] {
        let paths = sorted_lines(&run_to_vec(&args(false, fishpath, false), &fixture.home())?)?;
        let names = sorted_lines(&run_to_vec(&args(false, fishpath, true), &fixture.home())?)?;

        let mut names_from_paths: Vec<String> = paths
            .iter()
            .filter_map(|p| Path::new(p).file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        names_from_paths.sort();
        assert_eq!(names, names_from_paths, "fishpath={fishpath}");

        let mut counted: Vec<u8> = Vec::new();
        let counts = run_in(&args(true, fishpath, false), &fixture.home(), &mut counted)?;
        let total: u64 = counts.iter().map(|c| c.files).sum();
        assert_eq!(usize::try_from(total)?, paths.len(), "fishpath={fishpath}");
    }
    Ok(())
}

#[test]
fn test_per_root_counts_match_path_lines() -> Result<()> {
    let fixture = setup_base_fixture()?;
    fixture.add_fish_page("man1/fish.1")?;
    fixture.add_fish_page("man1/fish_config.1")?;

    let paths = sorted_lines(&run_to_vec(&args(false, true, false), &fixture.home())?)?;
    let fish_prefix = fixture.fish_root().display().to_string();
    let fish_lines = paths.iter().filter(|p| p.starts_with(&fish_prefix)).count();

    let out = run_to_vec(&args(true, true, false), &fixture.home())?;
    assert_eq!(
        String::from_utf8(out)?,
        format!(
            "{} contains {} files.\n{} contains {} files.\n",
            fixture.base_root().display(),
            paths.len() - fish_lines,
            fixture.fish_root().display(),
            fish_lines
        )
    );
    Ok(())
}

#[test]
fn test_empty_fish_root_reports_zero() -> Result<()> {
    let fixture = setup_base_fixture()?;
    fixture.create_empty_fish_root()?;

    let out = run_to_vec(&args(true, true, false), &fixture.home())?;

    assert_eq!(
        String::from_utf8(out)?,
        format!(
            "{} contains 3 files.\n{} contains 0 files.\n",
            fixture.base_root().display(),
            fixture.fish_root().display()
        )
    );
    Ok(())
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let fixture = setup_base_fixture()?;
    fixture.add_fish_page("man1/fish.1")?;

    for flags in [(false, true, false), (false, true, true), (true, true, false)] {
        let (count, fishpath, names) = flags;
        let first = sorted_lines(&run_to_vec(&args(count, fishpath, names), &fixture.home())?)?;
        let second = sorted_lines(&run_to_vec(&args(count, fishpath, names), &fixture.home())?)?;
        assert_eq!(first, second, "flags {flags:?}");
    }
    Ok(())
}

#[test]
fn test_missing_roots_print_nothing() -> Result<()> {
    let fixture = Fixture::new()?;

    assert!(run_to_vec(&args(false, true, false), &fixture.home())?.is_empty());
    assert!(run_to_vec(&args(false, true, true), &fixture.home())?.is_empty());
    Ok(())
}
