use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const UNFIXED: &str = "# typed: true\nclass A\nend\n";
const FIXED: &str = "# typed: true\n\nclass A\nend\n";

#[test]
fn test_fix_dry_run_does_not_modify() -> Result<()> {
    let test = CliTest::with_file("a.rb", UNFIXED)?;

    let output = test.fix_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "  --> a.rb:2:1  [empty-line-after-sigil]\n\
         \x20  = insert empty line before line 2\n\
         Would insert 1 empty line in 1 file.\n\
         Run with --apply to rewrite these files.\n"
    );
    assert_eq!(test.read_file("a.rb")?, UNFIXED);
    Ok(())
}

#[test]
fn test_fix_apply_rewrites_file() -> Result<()> {
    let test = CliTest::with_file("a.rb", UNFIXED)?;
    test.write_file("b.rb", FIXED)?;

    let output = test.fix_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Inserted 1 empty line in 1 file.\n");
    assert_eq!(test.read_file("a.rb")?, FIXED);
    assert_eq!(test.read_file("b.rb")?, FIXED);
    Ok(())
}

#[test]
fn test_fix_apply_is_idempotent() -> Result<()> {
    let test = CliTest::with_file(
        "a.rb",
        "# frozen_string_literal: true\n# typed: strict\n# A model.\nclass A\nend\n",
    )?;

    test.fix_command().arg("--apply").output()?;
    let first = test.read_file("a.rb")?;
    let output = test.fix_command().arg("--apply").output()?;

    assert_eq!(
        first,
        "# frozen_string_literal: true\n# typed: strict\n\n# A model.\nclass A\nend\n"
    );
    assert_eq!(test.read_file("a.rb")?, first);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Checked 1 file - no issues found\n");

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_fix_keeps_crlf_content() -> Result<()> {
    let test = CliTest::with_file("a.rb", "# typed: true\r\nclass A\r\nend\r\n")?;

    let output = test.fix_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("a.rb")?,
        "# typed: true\r\n\nclass A\r\nend\r\n"
    );
    Ok(())
}

#[test]
fn test_fix_latin1_file_keeps_bytes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_bytes(
        "a.rb",
        b"# encoding: iso-8859-1\n# typed: true\nclass A\n  S = \"caf\xe9\"\nend\n",
    )?;

    let output = test.fix_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Inserted 1 empty line in 1 file.\n");
    assert_eq!(
        std::fs::read(test.root().join("a.rb"))?,
        b"# encoding: iso-8859-1\n# typed: true\n\nclass A\n  S = \"caf\xe9\"\nend\n"
    );
    Ok(())
}
