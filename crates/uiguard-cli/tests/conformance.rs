//! Conformance tests for uiguard.
//!
//! These tests validate:
//! 1. Every check ID and code has an explanation
//! 2. Every rule the scanner can emit is explainable
//! 3. JSON reports from both binaries validate against their schemas

use assert_cmd::Command;
use schemars::schema_for;
use serde_json::Value;
use uiguard_test_util::GuideFixture;
use uiguard_types::{A11yReport, AdviceReport, explain};

#[allow(deprecated)]
fn cmd(bin: &str) -> Command {
    Command::cargo_bin(bin).unwrap()
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("run binary");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

fn assert_valid(schema: Value, instance: &Value) {
    let validator = jsonschema::validator_for(&schema).expect("schema compiles");
    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect();
    assert!(errors.is_empty(), "schema violations: {:#?}", errors);
}

#[test]
fn all_check_ids_and_codes_have_explanations() {
    for id in explain::all_check_ids().iter().chain(explain::all_codes()) {
        let exp = explain::lookup_explanation(id)
            .unwrap_or_else(|| panic!("'{}' has no explanation", id));
        assert!(!exp.title.is_empty(), "'{}' has an empty title", id);
        assert!(!exp.remediation.is_empty(), "'{}' has no remediation", id);
        assert!(!exp.examples.before.is_empty());
        assert!(!exp.examples.after.is_empty());
    }
}

#[test]
fn every_emitted_finding_is_explainable() {
    let value = stdout_json(
        cmd("a11y-check")
            .args(["--format", "json"])
            .write_stdin(format!(
                "Image(\"a\") Button(\"b\") {{ }} .onTapGesture {{ }} background(Color.red) {}",
                "x".repeat(120)
            )),
    );

    let findings = value["issues"]
        .as_array()
        .into_iter()
        .chain(value["warnings"].as_array())
        .flatten();
    let mut seen = 0;
    for finding in findings {
        seen += 1;
        let check_id = finding["check_id"].as_str().expect("check_id");
        let code = finding["code"].as_str().expect("code");
        assert!(explain::all_check_ids().iter().any(|id| *id == check_id));
        assert!(explain::all_codes().iter().any(|c| *c == code));
    }
    assert!(seen >= 4);
}

#[test]
fn a11y_reports_match_schema() {
    let schema = serde_json::to_value(schema_for!(A11yReport)).expect("schema json");
    for input in ["", "Image(\"photo\")", "Button(\"Go\") .foregroundColor(.red)"] {
        let report = stdout_json(
            cmd("a11y-check")
                .args(["--format", "json"])
                .write_stdin(input),
        );
        assert_valid(schema.clone(), &report);
    }
}

#[test]
fn advice_reports_match_schema() {
    let schema = serde_json::to_value(schema_for!(AdviceReport)).expect("schema json");
    let fixture = GuideFixture::hig();
    for input in ["", "Button(\"Go\")", "NavigationStack { }"] {
        let report = stdout_json(
            cmd("hig-advisor")
                .args(["--root", fixture.path().as_str(), "--format", "json"])
                .write_stdin(input),
        );
        assert_valid(schema.clone(), &report);
    }
}
