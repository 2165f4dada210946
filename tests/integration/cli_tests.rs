/*!
 * Tests that run the compiled blockpress binary
 */

use anyhow::Result;
use std::path::PathBuf;
use std::process::{Command, Output};
use crate::common;

// Path to the binary built for this test run
fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_blockpress"))
}

fn run(args: &[&str]) -> Result<Output> {
    Ok(Command::new(binary()).args(args).output()?)
}

/// Default invocation prints exactly the original generator's output
#[test]
fn test_cli_withNoArguments_shouldPrintGoldenOutput() -> Result<()> {
    let output = run(&[])?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, common::expected_output()?);
    Ok(())
}

#[test]
fn test_cli_emitSubcommand_shouldMatchDefault() -> Result<()> {
    let default = run(&[])?;
    let emit = run(&["emit"])?;

    assert!(emit.status.success());
    assert_eq!(emit.stdout, default.stdout);
    Ok(())
}

/// Debug logging goes to stderr and leaves stdout untouched
#[test]
fn test_cli_withDebugLogging_shouldKeepStdoutClean() -> Result<()> {
    let output = run(&["--log-level", "debug"])?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, common::expected_output()?);
    assert!(String::from_utf8_lossy(&output.stderr).contains("json-escaped"));
    Ok(())
}

#[test]
fn test_cli_stagesSubcommand_shouldPrintEveryStage() -> Result<()> {
    let output = run(&["stages"])?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stdout.starts_with("== source ("));
    assert!(stdout.contains("== quote-escaped ("));
    assert!(stdout.contains("== flattened ("));
    assert!(stdout.contains("== json-escaped ("));
    assert!(stdout.ends_with(&common::expected_output()?));
    Ok(())
}

#[test]
fn test_cli_withConfigFile_shouldApplyLogLevel() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "blockpress.json",
        r#"{ "log_level": "error" }"#,
    )?;

    let output = run(&["--config", path.to_str().unwrap(), "--log-level", "debug"])?;
    assert!(output.status.success());
    assert!(!output.stderr.is_empty());

    let quiet = run(&["--config", path.to_str().unwrap()])?;
    assert!(quiet.status.success());
    assert!(quiet.stderr.is_empty());
    assert_eq!(String::from_utf8(quiet.stdout)?, common::expected_output()?);
    Ok(())
}

#[test]
fn test_cli_withMissingConfigFile_shouldFailWithoutOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("missing.json");

    let output = run(&["--config", path.to_str().unwrap()])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_cli_completions_shouldPrintScript() -> Result<()> {
    let output = run(&["completions", "bash"])?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("blockpress"));
    Ok(())
}
