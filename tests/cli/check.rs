use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_missing_and_unnecessary_keys() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages.properties", "a=A\nb=B\n"),
        ("messages_fr.properties", "a=A\nc=C\n"),
    ])?;

    let mut cmd = test.check_command();
    cmd.arg("--no-java");

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 255
    ----- stdout -----
    error: missing keys  missing-key
      --> ./messages_fr.properties
       = b

    error: unnecessary keys  unnecessary-key
      --> ./messages_fr.properties
       = c

    ✘ 2 problems (2 keys)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_matching_translations_pass() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages.properties", "# Reference\na=A\nb=\"B\"\n"),
        ("messages_fr.properties", "b=B fr\na=A fr\n"),
        ("messages_de.properties", "a=A de\nb=B de\n"),
    ])?;

    let mut cmd = test.check_command();
    cmd.arg("--no-java");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 localized files, 0 source files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_old_mac_line_endings() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages.properties", "a=A\rb=B\r"),
        ("messages_fr.properties", "a=A\r\nb=B\r\n"),
    ])?;

    let mut cmd = test.check_command();
    cmd.arg("--no-java");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 localized file, 0 source files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_unused_keys_with_exempt_prefix() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages.properties", "a=A\nb=B\nenum.x=X\n"),
        (
            "src/main/java/App.java",
            r#"class App { String t = msg("a"); String u = msg("enum." + e.name()); }"#,
        ),
    ])?;

    let mut cmd = test.check_command();
    cmd.args(["--use", "enum"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 255
    ----- stdout -----
    error: unused keys (default)  unused-key
      --> messages.properties
       = b

    ✘ 1 problem (1 key)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_unused_keys_in_localized_file() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages.properties", "a=A\n"),
        ("messages_de.properties", "a=A\nold=O\n"),
        ("src/main/java/App.java", r#"msg("a");"#),
    ])?;

    let mut cmd = test.check_command();
    cmd.arg("--no-trans");

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 255
    ----- stdout -----
    error: unused keys (localized)  unused-key
      --> ./messages_de.properties
       = old

    ✘ 1 problem (1 key)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_all_checks_pass() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages.properties", "a=A\nb=B\n"),
        ("messages_fr.properties", "a=A\nb=B\n"),
        ("src/main/java/a/A.java", r#"msg("a");"#),
        ("src/main/java/b/B.java", r#"msg("b");"#),
        ("src/main/java/b/notes.txt", r#""unrelated""#),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 localized file, 2 source files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_custom_source_folder() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages.properties", "a=A\n"),
        ("app/src/Main.java", r#"msg("a");"#),
    ])?;

    let mut cmd = test.check_command();
    cmd.arg("--jfolder").arg(test.root().join("app/src"));

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 0 localized files, 1 source file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_files_are_checked() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages.properties", "a=A\nb=B\n"),
        ("shared/fr.txt", "a=A\n"),
        ("shared/Keys.txt", r#"msg("a"); msg("b");"#),
    ])?;
    let root = test.root();
    std::os::unix::fs::symlink(
        root.join("shared/fr.txt"),
        root.join("messages_fr.properties"),
    )?;
    std::fs::create_dir_all(root.join("src/main/java"))?;
    std::os::unix::fs::symlink(
        root.join("shared/Keys.txt"),
        root.join("src/main/java/Keys.java"),
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 255
    ----- stdout -----
    error: missing keys  missing-key
      --> ./messages_fr.properties
       = b

    ✘ 1 problem (1 key)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_source_folder_warns() -> Result<()> {
    let test = CliTest::with_files(&[("messages.properties", "a=A\n")])?;

    let mut cmd = test.check_command();
    cmd.args(["--jfolder", "nowhere"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 255
    ----- stdout -----
    error: unused keys (default)  unused-key
      --> messages.properties
       = a

    ✘ 1 problem (1 key)

    ----- stderr -----
    warning: Source folder does not exist: nowhere
    ");

    Ok(())
}

#[test]
fn test_both_checks_disabled() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages.properties", "a=A\n"),
        ("messages_fr.properties", "b=B\n"),
    ])?;

    let mut cmd = test.check_command();
    cmd.args(["--no-trans", "--no-java"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 localized file, 0 source files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_reference_in_subdirectory() -> Result<()> {
    let test = CliTest::with_files(&[
        ("res/labels.properties", "a=A\n"),
        ("res/i18n/labels_fr.properties", "a=A\nz=Z\n"),
    ])?;

    let mut cmd = test.command();
    cmd.args(["res/labels.properties", "--no-java"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 255
    ----- stdout -----
    error: unnecessary keys  unnecessary-key
      --> res/i18n/labels_fr.properties
       = z

    ✘ 1 problem (1 key)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_invalid_reference_name() -> Result<()> {
    let test = CliTest::with_files(&[("messages", "a=A\n")])?;

    let mut cmd = test.command();
    cmd.arg("messages");

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid file name: "messages"
    "#);

    Ok(())
}

#[test]
fn test_missing_reference_file() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to read property file: "messages.properties": No such file or directory (os error 2)
    "#);

    Ok(())
}

#[test]
fn test_reference_argument_required() -> Result<()> {
    let test = CliTest::new()?;

    // clap owns the usage text; only the status is ours.
    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(2));

    Ok(())
}
