use anyhow::Result;

use crate::CliTest;

const SIMPLE_STRINGS: &str = r#"
/* Simple sample table */
"done" = "Done";
"welcome" = "Hello %@";
"#;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_swift_to_stdout() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", SIMPLE_STRINGS)?;

    let output = test
        .command()
        .args(["--input", "Localizable.strings"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("public struct Localizations {"));
    assert!(stdout.contains(
        "public static var done: String = NSLocalizedString(\"done\", comment: \"\")"
    ));
    assert!(stdout.contains("public static func welcome(_ value: String) -> String"));
    // Nothing but generated code on stdout.
    assert!(stdout.starts_with("//\n"));

    Ok(())
}

#[test]
fn test_swift_to_file_prints_summary() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", SIMPLE_STRINGS)?;

    let output = test
        .command()
        .args(["-i", "Localizable.strings", "-o", "Generated.swift"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(test.has_file("Generated.swift"));

    let generated = test.read_file("Generated.swift")?;
    assert!(generated.contains("public struct Localizations {"));
    assert!(generated.contains("NSLocalizedString(\"welcome\", comment: \"\")"));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Generated.swift (2 keys)"));

    Ok(())
}

#[test]
fn test_objc_writes_header_next_to_output() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", SIMPLE_STRINGS)?;

    let output = test
        .command()
        .args(["-i", "Localizable.strings", "-o", "Strings.m", "-l", "objc"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(test.has_file("Strings.m"));
    assert!(test.has_file("Strings.h"));

    let implementation = test.read_file("Strings.m")?;
    assert!(implementation.contains("#import \"Strings.h\""));
    assert!(implementation.contains("@implementation _Localizations"));
    assert!(implementation.contains("+ (_Localizations *)sharedInstance {"));

    let header = test.read_file("Strings.h")?;
    assert!(header.contains("@import Foundation;"));
    assert!(header.contains("@interface _Localizations : NSObject"));
    assert!(header.contains("#define Localizations [_Localizations sharedInstance]"));

    Ok(())
}

#[test]
fn test_objc_to_stdout_prints_header_first() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", SIMPLE_STRINGS)?;

    let output = test
        .command()
        .args(["-i", "Localizable.strings", "-l", "objc"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    let interface = stdout.find("@interface _Localizations").unwrap();
    let implementation = stdout.find("@implementation _Localizations").unwrap();
    assert!(interface < implementation);

    Ok(())
}

#[test]
fn test_nested_json_input() -> Result<()> {
    let test = CliTest::with_file(
        "messages.json",
        r#"{"auth": {"login": {"title": "Login", "hint": "Hi %@"}}}"#,
    )?;

    let output = test.command().args(["-i", "messages.json"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("public struct auth {"));
    assert!(stdout.contains("public struct login {"));
    assert!(stdout.contains("NSLocalizedString(\"auth.login.title\", comment: \"\")"));
    assert!(stdout.contains("NSLocalizedString(\"auth.login.hint\", comment: \"\")"));

    Ok(())
}

#[test]
fn test_missing_input_exits_with_io_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["-i", "nope.strings"]).output()?;

    assert_eq!(output.status.code(), Some(74));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("nope.strings"));

    Ok(())
}

#[test]
fn test_malformed_input_exits_with_io_error() -> Result<()> {
    let test = CliTest::with_file("broken.strings", r#""key" = "no semicolon""#)?;

    let output = test.command().args(["-i", "broken.strings"]).output()?;

    assert_eq!(output.status.code(), Some(74));
    assert!(stderr_of(&output).contains("broken.strings"));

    Ok(())
}

#[test]
fn test_inference_error_exits_with_data_error_and_writes_nothing() -> Result<()> {
    let test = CliTest::with_file(
        "Localizable.strings",
        r#"
        "good" = "fine";
        "sparse" = "%1$@ %3$@";
        "#,
    )?;

    let output = test
        .command()
        .args(["-i", "Localizable.strings", "-o", "Generated.swift"])
        .output()?;

    assert_eq!(output.status.code(), Some(65));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("sparse"));
    // The whole run aborts before anything is written.
    assert!(!test.has_file("Generated.swift"));

    Ok(())
}

#[test]
fn test_mixed_arguments_exit_with_data_error() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", r#""bad" = "%@ and %1$d";"#)?;

    let output = test.command().args(["-i", "Localizable.strings"]).output()?;

    assert_eq!(output.status.code(), Some(65));
    assert!(stderr_of(&output).contains("bad"));

    Ok(())
}

#[test]
fn test_missing_required_flag_exits_with_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(64));
    assert!(stderr_of(&output).contains("--input"));

    Ok(())
}

#[test]
fn test_invalid_language_exits_with_usage_error() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", SIMPLE_STRINGS)?;

    let output = test
        .command()
        .args(["-i", "Localizable.strings", "-l", "kotlin"])
        .output()?;

    assert_eq!(output.status.code(), Some(64));

    Ok(())
}

#[test]
fn test_empty_delimiter_exits_with_usage_error() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", SIMPLE_STRINGS)?;

    let output = test
        .command()
        .args(["-i", "Localizable.strings", "-d", ""])
        .output()?;

    assert_eq!(output.status.code(), Some(64));
    assert!(stderr_of(&output).contains("delimiter"));

    Ok(())
}

#[test]
fn test_help_exits_successfully() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("--input"));

    Ok(())
}

#[test]
fn test_capitalize_flag() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", r#""login_screen.ok_button" = "OK";"#)?;

    let output = test
        .command()
        .args(["-i", "Localizable.strings", "-c"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("public struct LoginScreen {"));
    assert!(stdout.contains("public static var OkButton: String"));

    Ok(())
}

#[test]
fn test_custom_delimiter() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", r#""menu/file/open" = "Open";"#)?;

    let output = test
        .command()
        .args(["-i", "Localizable.strings", "-d", "/"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("public struct menu {"));
    assert!(stdout.contains("public struct file {"));
    assert!(stdout.contains("NSLocalizedString(\"menu/file/open\", comment: \"\")"));

    Ok(())
}

#[test]
fn test_config_file_supplies_defaults() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", SIMPLE_STRINGS)?;
    test.write_file(".locgenrc.json", r#"{ "baseClassName": "Strings" }"#)?;

    let output = test.command().args(["-i", "Localizable.strings"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("public struct Strings {"));

    Ok(())
}

#[test]
fn test_cli_flag_overrides_config_file() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", SIMPLE_STRINGS)?;
    test.write_file(".locgenrc.json", r#"{ "baseClassName": "Strings" }"#)?;

    let output = test
        .command()
        .args(["-i", "Localizable.strings", "-b", "Texts"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("public struct Texts {"));

    Ok(())
}

#[test]
fn test_invalid_config_file_exits_with_usage_error() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", SIMPLE_STRINGS)?;
    test.write_file(".locgenrc.json", "{ not json }")?;

    let output = test.command().args(["-i", "Localizable.strings"]).output()?;

    assert_eq!(output.status.code(), Some(64));
    assert!(stderr_of(&output).contains(".locgenrc.json"));

    Ok(())
}

#[test]
fn test_delimiter_only_key_warns_and_continues() -> Result<()> {
    let test = CliTest::with_file(
        "Localizable.strings",
        r#"
        "..." = "ignored";
        "kept" = "Kept";
        "#,
    )?;

    let output = test.command().args(["-i", "Localizable.strings"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stderr_of(&output).contains("warning:"));
    assert!(stdout_of(&output).contains("public static var kept"));
    assert!(!stdout_of(&output).contains("ignored"));

    Ok(())
}

#[test]
fn test_table_name_flag() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", SIMPLE_STRINGS)?;

    let output = test
        .command()
        .args(["-i", "Localizable.strings", "-t", "Main"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(
        stdout_of(&output)
            .contains("NSLocalizedString(\"done\", tableName: \"Main\", comment: \"\")")
    );

    Ok(())
}

#[test]
fn test_custom_superclass_flag() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", SIMPLE_STRINGS)?;

    let output = test
        .command()
        .args([
            "-i",
            "Localizable.strings",
            "-l",
            "objc",
            "-s",
            "TrackedObject",
        ])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("#import \"TrackedObject.h\""));
    assert!(stdout.contains("@interface _Localizations : TrackedObject"));

    Ok(())
}
