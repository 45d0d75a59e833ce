//! Integration tests for the public checking API.
//!
//! Drives `EnvironmentCheck` end to end through the crate's public surface,
//! with scripted tool output instead of real subprocesses.

use envcheck::checks::{CheckRegistry, EnvironmentCheck, ScriptedRunner};
use envcheck::diagnostics::{DiagnosticSink, MemorySink, Severity};
use envcheck::version;
use semver::Version;
use std::fs;
use tempfile::TempDir;

fn project_with(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cdktf.json"), config).unwrap();
    temp
}

#[test]
fn coercion_is_stable_across_surrounding_tokens() {
    for (raw, expected) in [
        ("go version go1.18.1 darwin/amd64", Version::new(1, 18, 1)),
        ("v12.16.0", Version::new(12, 16, 0)),
        ("12.16.0", Version::new(12, 16, 0)),
        ("14", Version::new(14, 0, 0)),
    ] {
        assert_eq!(version::coerce(raw), Some(expected), "coercing {:?}", raw);
    }
}

#[test]
fn go_project_runs_go_check_before_node_check() {
    let temp = project_with(r#"{ "language": "go" }"#);
    let runner = ScriptedRunner::new()
        .with_output("go", "go version go1.18.1 linux/amd64\n")
        .with_output("node", "v16.0.0\n");
    let mut sink = MemorySink::new();

    EnvironmentCheck::new(&runner)
        .run("check", temp.path(), &mut sink)
        .unwrap();

    assert_eq!(runner.invocations(), vec!["go version", "node --version"]);
}

#[test]
fn typescript_project_runs_only_node_check() {
    let temp = project_with(r#"{ "language": "typescript" }"#);
    let runner = ScriptedRunner::new().with_output("node", "v16.0.0\n");
    let mut sink = MemorySink::new();

    EnvironmentCheck::new(&runner)
        .run("check", temp.path(), &mut sink)
        .unwrap();

    assert_eq!(runner.invocations(), vec!["node --version"]);
}

#[test]
fn old_go_fresh_node_reports_one_usage_finding_and_resolves() {
    let temp = project_with(r#"{ "language": "go" }"#);
    let runner = ScriptedRunner::new()
        .with_output("go", "go version go1.15.0 linux/amd64\n")
        .with_output("node", "v16.0.0\n");
    let mut sink = MemorySink::new();

    let result = EnvironmentCheck::new(&runner).run("check", temp.path(), &mut sink);

    assert!(result.is_ok());
    assert_eq!(sink.count_of(Severity::Usage), 1);
    assert_eq!(sink.count_of(Severity::Internal), 0);
    let finding = &sink.reported[0];
    assert!(finding.message.contains("Go"));
    assert!(finding.message.contains("1.15.0"));
    assert!(finding.message.contains("1.16.0"));
}

#[test]
fn missing_config_raises_before_any_probe() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().with_output("node", "v16.0.0\n");
    let mut sink = MemorySink::new();

    let err = EnvironmentCheck::new(&runner)
        .run("deploy", temp.path(), &mut sink)
        .unwrap_err();

    assert!(err.is_usage());
    assert!(err.to_string().contains("deploy"));
    assert!(err
        .to_string()
        .contains(&temp.path().join("cdktf.json").display().to_string()));
    assert!(runner.invocations().is_empty());
}

#[test]
fn failing_probe_raises_and_skips_later_checks() {
    let temp = project_with(r#"{ "language": "go" }"#);
    let runner = ScriptedRunner::new()
        .with_failure("go", "exited with status 126")
        .with_output("node", "v16.0.0\n");
    let mut sink = MemorySink::new();

    let err = EnvironmentCheck::new(&runner)
        .run("check", temp.path(), &mut sink)
        .unwrap_err();

    assert!(err.is_usage());
    assert!(err.to_string().contains("go"));
    assert!(err.to_string().contains("exited with status 126"));
    assert_eq!(runner.invocations(), vec!["go version"]);
}

#[test]
fn diagnostics_carry_the_invoking_command() {
    let temp = project_with(r#"{ "language": "typescript" }"#);
    let runner = ScriptedRunner::new().with_output("node", "v10.0.0\n");
    let mut sink = MemorySink::new();

    EnvironmentCheck::new(&runner)
        .run("synth", temp.path(), &mut sink)
        .unwrap();

    assert_eq!(sink.reported[0].command, "synth");
}

#[test]
fn custom_registry_drives_dispatch() {
    let temp = project_with(r#"{ "language": "go" }"#);
    let runner = ScriptedRunner::new()
        .with_output("go", "go version go1.18.1 linux/amd64\n")
        .with_output("node", "v16.0.0\n");
    let mut sink = MemorySink::new();

    let check = EnvironmentCheck::with_registry(CheckRegistry::new(), &runner);
    assert_eq!(check.registry().known_languages(), vec!["go"]);

    check.run("check", temp.path(), &mut sink).unwrap();
    assert_eq!(runner.invocations().len(), 2);
}

#[test]
fn extra_config_fields_do_not_affect_checks() {
    let temp = project_with(
        r#"{
            "language": "typescript",
            "app": "npx ts-node main.ts",
            "terraformProviders": ["aws@~> 4.0"],
            "context": { "excludeStackIdFromLogicalIds": "true" }
        }"#,
    );
    let runner = ScriptedRunner::new().with_output("node", "v16.0.0\n");
    let mut sink = MemorySink::new();

    EnvironmentCheck::new(&runner)
        .run("check", temp.path(), &mut sink)
        .unwrap();

    assert_eq!(sink.reported_count(), 0);
}
