mod common;

use common::TestEnv;

#[test]
fn test_meta_info_text() {
    let env = TestEnv::new();

    let result = env.run(&["meta", "info"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.starts_with("Name: ado\n"));
    assert!(result
        .stdout
        .contains(&format!("Version: {}\n", env!("CARGO_PKG_VERSION"))));
    assert!(result.stdout.contains("Platform: "));
}

#[test]
fn test_meta_info_json_fields() {
    let env = TestEnv::new();

    let result = env.run(&["meta", "info", "-o", "json"]);

    assert!(result.success);
    let json: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    for key in ["name", "version", "commit", "build_time", "rustc_version", "platform"] {
        assert!(json.get(key).is_some(), "missing {} in {}", key, result.stdout);
    }
}

#[test]
fn test_meta_env_reports_config_flag_and_variables() {
    let env = TestEnv::new();
    let path = env.write_work_file("custom.yaml", "version: 1\n");

    let result = env.run_with_env(
        &["meta", "env", "--config", path.to_str().unwrap()],
        &[("ADO_LOG_LEVEL", "warn")],
    );

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result
        .stdout
        .contains(&format!("ConfigPath: {}\n", path.display())));
    assert!(result.stdout.contains("  ADO_LOG_LEVEL=warn\n"));
}

#[test]
fn test_meta_env_nothing_resolved() {
    let env = TestEnv::new();

    let result = env.run(&["meta", "env", "-o", "json"]);

    assert!(result.success);
    let json: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(json["config_path"], "");
    assert_eq!(json["config_sources"].as_array().unwrap().len(), 2);
    assert_eq!(json["home_dir"], env.home_dir.path().display().to_string());
}

#[test]
fn test_meta_features_empty() {
    let env = TestEnv::new();

    let result = env.run(&["meta", "features"]);

    assert!(result.success);
    assert_eq!(result.stdout, "No experimental features enabled\n");
}

#[test]
fn test_no_subcommand_prints_help() {
    let env = TestEnv::new();

    let result = env.run(&[]);

    assert!(result.success);
    assert!(result.stdout.contains("Usage:"));
    assert!(result.stdout.contains("config"));
    assert!(result.stdout.contains("meta"));
}
