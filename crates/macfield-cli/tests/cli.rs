use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run_raw(db_path: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("macfield")
        .args(["--db-path", db_path.to_str().expect("db path")])
        .args(args)
        .output()
        .expect("run command")
}

fn run_cmd(db_path: &Path, args: &[&str]) -> String {
    let output = run_raw(db_path, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(db_path: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("macfield")
        .args(["--db-path", db_path.to_str().expect("db path"), "--json"])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn checkout_order(db_path: &Path, name: &str, mac: &str) -> String {
    let order = run_cmd_json(
        db_path,
        &["checkout", "--name", name, "--email", "ada@example.com", "--mac", mac],
    );
    order["id"].as_str().expect("id").to_string()
}

#[test]
fn checkout_normalizes_and_persists_mac() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");

    // Whitespace-ridden lowercase input is still a valid submission.
    let id = checkout_order(&db_path, "Ada Lovelace", "  aa bb cc dd ee ff  ");

    let detail = run_cmd_json(&db_path, &["show", &id]);
    assert_eq!(detail["meta"][0]["key"], "_mac_address");
    assert_eq!(detail["meta"][0]["value"], "AA:BB:CC:DD:EE:FF");
    assert_eq!(detail["detail_rows"][0][0], "Mac Address");
    assert_eq!(detail["detail_rows"][0][1], "AA:BB:CC:DD:EE:FF");
}

#[test]
fn checkout_accepts_mixed_separators() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");

    let id = checkout_order(&db_path, "Ada Lovelace", "AA:BB-CC:DD-EE:FF");
    let detail = run_cmd_json(&db_path, &["show", &id]);
    assert_eq!(detail["meta"][0]["value"], "AA:BB:CC:DD:EE:FF");
}

#[test]
fn checkout_rejects_invalid_mac_with_notice() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");

    let output = run_raw(
        &db_path,
        &["checkout", "--name", "Ada", "--mac", "not-a-mac"],
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Please enter a valid Mac Address (e.g. AA:BB:CC:DD:EE:FF)."));

    // Order creation was blocked.
    let list = run_cmd_json(&db_path, &["list"]);
    assert!(list.as_array().expect("array").is_empty());
}

#[test]
fn checkout_requires_mac_when_field_absent() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");

    let output = run_raw(&db_path, &["checkout", "--name", "Ada"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Mac Address is required."));
}

#[test]
fn admin_edit_normalizes_without_validating() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");

    let id = checkout_order(&db_path, "Ada Lovelace", "AA:BB:CC:DD:EE:FF");

    run_cmd(&db_path, &["admin", "edit", &id, "--mac", "11-22-33-44-55-66"]);
    let detail = run_cmd_json(&db_path, &["show", &id]);
    assert_eq!(detail["meta"][0]["value"], "11:22:33:44:55:66");

    // Malformed input is accepted on this path and stored best-effort.
    run_cmd(&db_path, &["admin", "edit", &id, "--mac", "not-a-mac"]);
    let detail = run_cmd_json(&db_path, &["show", &id]);
    assert_eq!(detail["meta"][0]["value"], "AAC");
}

#[test]
fn search_finds_order_by_mac_substring() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");

    let id = checkout_order(&db_path, "Ada Lovelace", "AA:BB:CC:DD:EE:FF");
    checkout_order(&db_path, "Grace Hopper", "11:22:33:44:55:66");

    let results = run_cmd_json(&db_path, &["search", "BB:CC"]);
    let items = results.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], Value::String(id));
    assert_eq!(items[0]["mac_address"], "AA:BB:CC:DD:EE:FF");
}

#[test]
fn email_preview_includes_mac_field() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");

    let id = checkout_order(&db_path, "Ada Lovelace", "aabbccddeeff");

    let preview = run_cmd_json(&db_path, &["email", &id]);
    assert_eq!(preview["subject"], "Order confirmation");
    assert_eq!(preview["to"], "ada@example.com");
    assert_eq!(preview["fields"][0]["label"], "Mac Address");
    assert_eq!(preview["fields"][0]["value"], "AA:BB:CC:DD:EE:FF");

    let text = run_cmd(&db_path, &["email", &id]);
    assert!(text.contains("Mac Address: AA:BB:CC:DD:EE:FF"));
}

#[test]
fn fields_renders_standalone_section_by_default() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");

    let form = run_cmd_json(&db_path, &["fields"]);
    let fields = form["fields"].as_array().expect("fields");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["section"], "Device Information");
    assert_eq!(fields[0]["label"], "Mac Address");
}

#[test]
fn fields_honors_billing_placement_from_config() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");
    let config_path = temp.path().join("config.toml");
    fs::write(&config_path, "[field]\nplacement = \"billing\"\n").expect("write config");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&config_path, fs::Permissions::from_mode(0o600)).expect("chmod");
    }

    let output = cargo_bin_cmd!("macfield")
        .args([
            "--db-path",
            db_path.to_str().expect("db path"),
            "--config",
            config_path.to_str().expect("config path"),
            "--json",
            "fields",
        ])
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    let form: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert!(form["fields"][0]["section"].is_null());
}

#[test]
fn backup_writes_snapshot() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");
    let backup_path = temp.path().join("backup.sqlite3");

    checkout_order(&db_path, "Ada Lovelace", "AA:BB:CC:DD:EE:FF");
    run_cmd(&db_path, &["backup", backup_path.to_str().expect("path")]);
    assert!(backup_path.exists());
}
