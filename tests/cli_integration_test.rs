use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_movie-count"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn workspace_with(content: &str) -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("movies.json"), content)?;
    Ok(temp_dir)
}

fn assert_failed_without_count(output: &Output) {
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Number of movies"), "stdout: {}", stdout);
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_counts_three_movies() -> Result<()> {
    let temp_dir = workspace_with(r#"[{"title":"A"},{"title":"B"},{"title":"C"}]"#)?;

    let output = run_in(temp_dir.path(), &[])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Number of movies in movies.json: 3\n"
    );
    Ok(())
}

#[test]
fn test_empty_array_counts_zero() -> Result<()> {
    let temp_dir = workspace_with("[]")?;

    let output = run_in(temp_dir.path(), &[])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Number of movies in movies.json: 0\n"
    );
    Ok(())
}

#[test]
fn test_counts_arbitrary_lengths() -> Result<()> {
    for n in [1usize, 7, 250] {
        let records: Vec<serde_json::Value> = (0..n)
            .map(|i| serde_json::json!({"title": format!("Movie {}", i), "year": 2000 + i}))
            .collect();
        let temp_dir = workspace_with(&serde_json::to_string_pretty(&records)?)?;

        let output = run_in(temp_dir.path(), &[])?;

        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout)?,
            format!("Number of movies in movies.json: {}\n", n)
        );
    }
    Ok(())
}

#[test]
fn test_out_of_range_numbers_in_records_still_count() -> Result<()> {
    let temp_dir = workspace_with(r#"[{"gross":1e400},{}]"#)?;

    let output = run_in(temp_dir.path(), &[])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Number of movies in movies.json: 2\n"
    );
    Ok(())
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let temp_dir = workspace_with(r#"[{"title":"A"},{"title":"B"}]"#)?;

    let first = run_in(temp_dir.path(), &[])?;
    let second = run_in(temp_dir.path(), &[])?;

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
    Ok(())
}

#[test]
fn test_missing_file_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_in(temp_dir.path(), &[])?;

    assert_failed_without_count(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("movies.json"));
    Ok(())
}

#[test]
fn test_malformed_json_fails() -> Result<()> {
    let temp_dir = workspace_with("{invalid}")?;

    let output = run_in(temp_dir.path(), &[])?;

    assert_failed_without_count(&output);
    Ok(())
}

#[test]
fn test_object_is_rejected_not_counted_by_keys() -> Result<()> {
    let temp_dir = workspace_with(r#"{"a":1,"b":2}"#)?;

    let output = run_in(temp_dir.path(), &[])?;

    assert_failed_without_count(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("object"));
    Ok(())
}

#[test]
fn test_input_flag_overrides_default_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("catalog.json"), "[1, 2]")?;

    let output = run_in(temp_dir.path(), &["--input", "catalog.json"])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Number of movies in catalog.json: 2\n"
    );
    Ok(())
}

#[test]
fn test_config_file_sets_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir(temp_dir.path().join("data"))?;
    std::fs::write(temp_dir.path().join("data").join("films.json"), "[{}, {}, {}, {}]")?;
    std::fs::write(
        temp_dir.path().join("movie-count.toml"),
        r#"
[input]
path = "films.json"
base_path = "data"
"#,
    )?;

    let output = run_in(temp_dir.path(), &["--config", "movie-count.toml"])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Number of movies in films.json: 4\n"
    );
    Ok(())
}

#[test]
fn test_config_base_path_is_relative_to_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = temp_dir.path().join("settings");
    std::fs::create_dir_all(settings.join("data"))?;
    std::fs::write(settings.join("data").join("movies.json"), "[{}, {}]")?;
    std::fs::write(
        settings.join("movie-count.toml"),
        "[input]\nbase_path = \"data\"\n",
    )?;

    let output = run_in(temp_dir.path(), &["--config", "settings/movie-count.toml"])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Number of movies in movies.json: 2\n"
    );
    Ok(())
}

#[test]
fn test_invalid_config_file_fails() -> Result<()> {
    let temp_dir = workspace_with("[]")?;
    std::fs::write(
        temp_dir.path().join("movie-count.toml"),
        "[monitoring]\nlog_level = \"chatty\"\n",
    )?;

    let output = run_in(temp_dir.path(), &["--config", "movie-count.toml"])?;

    assert_failed_without_count(&output);
    Ok(())
}

#[test]
fn test_verbose_logs_stay_off_stdout() -> Result<()> {
    let temp_dir = workspace_with("[1]")?;

    let output = run_in(temp_dir.path(), &["--verbose", "--monitor"])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Number of movies in movies.json: 1\n"
    );
    Ok(())
}
