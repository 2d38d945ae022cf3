use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stdout};

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_file("app/a.rb", "# typed: true\n\nclass A\nend\n")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Checked 1 file - no issues found\n");
    Ok(())
}

#[test]
fn test_check_reports_missing_blank_line() -> Result<()> {
    let test = CliTest::with_file(
        "app/a.rb",
        "# frozen_string_literal: true\n# typed: strict\nclass A\nend\n",
    )?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "warning: Add an empty line after the type sigil.  empty-line-after-sigil\n\
         \x20 --> app/a.rb:3:1\n\
         \x20 |\n\
         3 | class A\n\
         \x20 | ^\n\
         \x20 = hint: run `sigil fix --apply` to correct it\n\
         \n\
         \u{2718} 1 problem (0 errors, 1 warning)\n"
    );
    Ok(())
}

#[test]
fn test_check_ignores_sigil_after_code() -> Result<()> {
    let test = CliTest::with_file("a.rb", "class A\nend\n# typed: true\nfoo\n")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_check_directive_below_sigil() -> Result<()> {
    let test = CliTest::with_file(
        "a.rb",
        "# typed: true\n# frozen_string_literal: true\nclass A\nend\n",
    )?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));
    Ok(())
}

#[test]
fn test_check_only_ruby_files() -> Result<()> {
    let test = CliTest::with_file("notes.txt", "# typed: true\nclass A\n")?;
    test.write_file("Gemfile", "# typed: false\nsource 'https://rubygems.org'\n")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("--> Gemfile:2:1"), "{}", text);
    assert!(!text.contains("notes.txt"), "{}", text);
    Ok(())
}

#[test]
fn test_check_explicit_path() -> Result<()> {
    let test = CliTest::with_file("a.rb", "# typed: true\nclass A\nend\n")?;
    test.write_file("b.rb", "# typed: true\nclass B\nend\n")?;

    let output = test.check_command().arg("b.rb").output()?;

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("b.rb:2:1"), "{}", text);
    assert!(!text.contains("a.rb"), "{}", text);
    Ok(())
}

#[test]
fn test_check_json_output() -> Result<()> {
    let test = CliTest::with_file("a.rb", "# typed: true\nclass A\nend\n")?;

    let output = test.check_command().args(["--format", "json"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["issues"][0]["file"], "a.rb");
    assert_eq!(value["issues"][0]["line"], 2);
    assert_eq!(value["issues"][0]["col"], 0);
    assert_eq!(value["issues"][0]["rule"], "empty-line-after-sigil");
    assert_eq!(value["summary"]["filesChecked"], 1);
    Ok(())
}

#[test]
fn test_check_latin1_encoded_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_bytes(
        "latin1.rb",
        b"# encoding: iso-8859-1\n# typed: true\nclass A\n  S = \"caf\xe9\"\nend\n",
    )?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("--> latin1.rb:3:1"), "{}", text);
    assert!(!text.contains("parse-error"), "{}", text);
    Ok(())
}

#[test]
fn test_check_custom_magic_comments() -> Result<()> {
    let test = CliTest::with_file(
        "a.rb",
        "# typed: true\n# rubocop_disable: true\nclass A\nend\n",
    )?;
    test.write_file(".sigilrc.json", r#"{ "magicComments": ["rubocop_disable"] }"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));
    Ok(())
}

#[test]
fn test_check_invalid_config() -> Result<()> {
    let test = CliTest::with_file("a.rb", "# typed: true\n\nclass A\n")?;
    test.write_file(".sigilrc.json", "{ not json")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(crate::stderr(&output).starts_with("Error:"));
    Ok(())
}
