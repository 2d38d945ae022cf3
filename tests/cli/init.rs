use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Created .sigilrc.json\n");
    assert!(test.root().join(".sigilrc.json").exists());

    let content = test.read_file(".sigilrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert!(parsed.get("ignores").is_some());
    assert!(parsed.get("extensions").is_some());
    assert!(
        parsed["magicComments"]
            .as_array()
            .is_some_and(|keys| keys.iter().any(|k| k == "frozen_string_literal"))
    );
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".sigilrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        crate::stderr(&output),
        "Error: .sigilrc.json already exists\n"
    );
    assert_eq!(test.read_file(".sigilrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("lib/a.rb", "# typed: true\n\nmodule A; end\n")?;

    let output = test.check_command().output()?;

    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        crate::stderr(&output)
    );
    Ok(())
}
