#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Parser;
use scourgify::{CliConfig, CommitMode, ScourgifyEngine};
use tempfile::TempDir;

fn cli(args: &[&str]) -> CliConfig {
    CliConfig::try_parse_from(std::iter::once("scourgify").chain(args.iter().copied()))
        .expect("arguments parse")
}

#[test]
fn test_gates_create_no_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("before.txt");
    std::fs::write(&input, "name,house\n\"Abbott, Hannah\",Hufflepuff\n")?;
    let output = temp_dir.path().join("after.csv");
    let input_arg = input.to_string_lossy().into_owned();
    let output_arg = output.to_string_lossy().into_owned();

    let cases: Vec<(Vec<&str>, String)> = vec![
        (vec![input_arg.as_str()], "Too few command-line arguments".to_string()),
        (
            vec![input_arg.as_str(), output_arg.as_str(), "x.csv", "y.csv"],
            "Too many command-line arguments".to_string(),
        ),
        (
            vec![input_arg.as_str(), output_arg.as_str()],
            format!("Not a CSV file: {}", input_arg),
        ),
    ];

    for (args, expected) in cases {
        let err = cli(&args).resolve().unwrap_err();
        assert_eq!(err.user_friendly_message(), expected);
        assert_eq!(err.exit_code(), 2);
        assert!(!output.exists());
    }
    Ok(())
}

#[test]
fn test_config_file_and_flags_combine() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("before.csv");
    std::fs::write(&input, "name\thouse\nWeasley, Ginny\tGryffindor\n")?;
    let output = temp_dir.path().join("after.csv");
    let settings = temp_dir.path().join("scourgify.toml");
    std::fs::write(&settings, "[input]\ndelimiter = \"\\t\"\n")?;

    let config = cli(&[
        "--config",
        &settings.to_string_lossy(),
        "--streaming",
        &input.to_string_lossy(),
        &output.to_string_lossy(),
    ])
    .resolve()?;
    assert_eq!(config.commit_mode, CommitMode::Streaming);

    let summary = ScourgifyEngine::new(config).run()?;

    assert_eq!(summary.rows_written, 1);
    assert_eq!(
        std::fs::read_to_string(&output)?,
        "first,last,house\nGinny,Weasley,Gryffindor\n"
    );
    Ok(())
}

#[test]
fn test_invalid_config_file_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = temp_dir.path().join("scourgify.toml");
    std::fs::write(&settings, "[output]\ndelimiter = \"ab\"\n")?;

    let err = cli(&[
        "--config",
        &settings.to_string_lossy(),
        "before.csv",
        "after.csv",
    ])
    .resolve()
    .unwrap_err();

    assert!(err.to_string().contains("output.delimiter"));
    assert_eq!(err.exit_code(), 2);
    Ok(())
}
