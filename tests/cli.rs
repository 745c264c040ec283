use assert_cmd::Command;

// ═══════════════════════════════════════════════════════════════════
//  End-to-end runs of the `convert` binary
// ═══════════════════════════════════════════════════════════════════

struct Run {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

fn convert(args: &[&str]) -> Run {
    let output = Command::cargo_bin("convert")
        .unwrap()
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap();
    Run {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

#[test]
fn km_to_miles() {
    let run = convert(&["-f", "km", "-t", "mi", "1"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    assert!(run.stdout.contains("From: km"), "{}", run.stdout);
    assert!(run.stdout.contains("To: mi"), "{}", run.stdout);
    assert!(run.stdout.contains("Value: 0.621"), "{}", run.stdout);
    assert!(run.stdout.trim_end().ends_with("mi"), "{}", run.stdout);
}

#[test]
fn aliases_on_the_command_line() {
    let run = convert(&["--from", "Fahrenheit", "--to", "celsius", "212"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Value: 100C"), "{}", run.stdout);
}

#[test]
fn negative_value() {
    let run = convert(&["-f", "C", "-t", "F", "-40"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Value: -40F"), "{}", run.stdout);

    let run = convert(&["-f", "C", "-t", "F", "-.5"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Value: 31.1F"), "{}", run.stdout);

    let run = convert(&["-.5e3", "-f", "C", "-t", "F"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Value: -868F"), "{}", run.stdout);
}

#[test]
fn incompatible_categories_exit_1() {
    let run = convert(&["-f", "km", "-t", "kg", "1"]);
    assert_eq!(run.code, Some(1));
    assert!(run.stderr.contains("Error:"), "{}", run.stderr);
    assert!(run.stderr.contains("Incompatible categories"), "{}", run.stderr);
    assert!(run.stdout.contains("Usage:"), "usage should be reprinted: {}", run.stdout);
}

#[test]
fn unknown_unit_exit_1() {
    let run = convert(&["-f", "bogus", "-t", "m", "5"]);
    assert_eq!(run.code, Some(1));
    assert!(run.stderr.contains("Category unknown"), "{}", run.stderr);
}

#[test]
fn argument_errors_exit_1() {
    for args in [
        &["-f", "m", "-t", "km"][..],
        &["-f", "m", "-t", "km", "ten"][..],
        &["-t", "km", "1", "-f"][..],
        &["-f", "", "-t", "km", "1"][..],
        &[][..],
    ] {
        let run = convert(args);
        assert_eq!(run.code, Some(1), "{args:?} should fail");
        assert!(run.stderr.contains("Error:"), "{args:?}: {}", run.stderr);
    }
}

#[test]
fn help_list_and_version_exit_0() {
    let help = convert(&["--help"]);
    assert_eq!(help.code, Some(0));
    assert!(help.stdout.contains("convert -f <from_unit> -t <to_unit> <value>"));
    assert!(help.stdout.contains("For a list of units"));

    let list = convert(&["--units"]);
    assert_eq!(list.code, Some(0));
    assert!(list.stdout.starts_with("Supported units:"));
    assert!(list.stdout.contains("Temperature:"));

    let version = convert(&["-v"]);
    assert_eq!(version.code, Some(0));
    assert!(version.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn informational_modes_ignore_missing_units() {
    let run = convert(&["-l", "-f", "m"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
}

#[test]
fn json_output() {
    let run = convert(&["--json", "-f", "cup", "-t", "tbsp", "1"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    let json: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();
    assert_eq!(json["from"], "cup");
    assert_eq!(json["category"], "volume");
    let result = json["result"].as_f64().unwrap();
    assert!((result - 0.24 / 0.0147868).abs() < 1e-9, "{result}");
}
