//! End-to-end tests for the `archforge` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary sandboxed in `dir`: config lookups land under `dir/.config`.
fn archforge(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("archforge");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("ARCHFORGE_DEFAULTS__MODULE");
    cmd
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_commands() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["generate", "--language", "go"])
        .assert()
        .code(2);
}

#[test]
fn no_color_accepts_any_set_value() {
    let tmp = TempDir::new().unwrap();
    for value in ["1", "true", "yes"] {
        archforge(tmp.path())
            .env("NO_COLOR", value)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("flat"));
    }
}

// ── list / preview ────────────────────────────────────────────────────────────

#[test]
fn list_shows_every_architecture() {
    let tmp = TempDir::new().unwrap();
    let assert = archforge(tmp.path()).arg("list").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    for name in [
        "flat", "ddd", "clean", "feature", "hexagonal", "modular", "monorepo", "cqrs", "onion",
        "common", "layered",
    ] {
        assert!(stdout.contains(name), "missing {name}");
    }
}

#[test]
fn list_as_json() {
    let tmp = TempDir::new().unwrap();
    let assert = archforge(tmp.path())
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 11);
    assert_eq!(entries[0]["name"], "flat");
    assert_eq!(entries[0]["project_dir"], "project_flat");
}

#[test]
fn list_names_only() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("flat\nddd\nclean\n"));
}

#[test]
fn preview_prints_tree_without_writing() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["preview", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("project_clean/\n"))
        .stdout(predicate::str::contains("go.mod"));

    assert!(!tmp.path().join("project_clean").exists());
}

#[test]
fn preview_is_case_sensitive() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["preview", "Clean"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported architecture 'Clean'"));
}

// ── generate (flags) ──────────────────────────────────────────────────────────

#[test]
fn generate_with_flags_writes_project() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["generate", "-a", "flat", "-m", "github.com/acme/tool"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project generated successfully!"))
        .stdout(predicate::str::contains("cd project_flat"));

    let go_mod = fs::read_to_string(tmp.path().join("project_flat/go.mod")).unwrap();
    assert!(go_mod.starts_with("module github.com/acme/tool\n"));
    assert!(tmp.path().join("project_flat/main.go").is_file());
}

#[test]
fn generate_rejects_invalid_module() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["generate", "-a", "flat", "-m", "1bad"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid module name format"));

    assert!(!tmp.path().join("project_flat").exists());
}

#[test]
fn generate_rejects_unknown_architecture() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["generate", "-a", "mvc", "-m", "github.com/acme/tool"])
        .assert()
        .code(3);
}

#[test]
fn generate_twice_conflicts_unless_forced() {
    let tmp = TempDir::new().unwrap();
    let args = ["generate", "-a", "ddd", "-m", "github.com/acme/shop"];

    archforge(tmp.path()).args(args).assert().success();

    archforge(tmp.path())
        .args(args)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    archforge(tmp.path())
        .args(args)
        .arg("--force")
        .assert()
        .success();
    assert!(tmp.path().join("project_ddd/cmd/app/main.go").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["generate", "-a", "hexagonal", "-m", "github.com/acme/hex", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project_hexagonal/"))
        .stdout(predicate::str::contains("Dry run"));

    assert!(!tmp.path().join("project_hexagonal").exists());
}

#[test]
fn staged_generation_leaves_no_staging_directory() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["generate", "-a", "cqrs", "-m", "github.com/acme/cq", "--staged"])
        .assert()
        .success();

    let entries: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec!["project_cqrs".to_string()]);
}

#[test]
fn generate_json_summary() {
    let tmp = TempDir::new().unwrap();
    let assert = archforge(tmp.path())
        .args([
            "--output-format",
            "json",
            "generate",
            "-a",
            "onion",
            "-m",
            "github.com/acme/onion",
        ])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["architecture"], "onion");
    assert_eq!(value["module"], "github.com/acme/onion");
    assert_eq!(value["dry_run"], false);
}

// ── generate (interactive) ────────────────────────────────────────────────────

#[test]
fn interactive_numeric_menu_with_defaults() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["generate", "--no-fuzzy"])
        .write_stdin("3\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 3) clean"))
        .stdout(predicate::str::contains("Select architecture by number: "))
        .stdout(predicate::str::contains("Go module name [github.com/user/project]: "))
        .stdout(predicate::str::contains("Generate project? [Y/n]: "));

    let go_mod = fs::read_to_string(tmp.path().join("project_clean/go.mod")).unwrap();
    assert!(go_mod.starts_with("module github.com/user/project\n"));
}

#[test]
fn interactive_menu_reprompts_on_bad_input() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["generate", "--no-fuzzy", "-m", "github.com/acme/app", "-y"])
        .write_stdin("\n42\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a number: "))
        .stdout(predicate::str::contains("Invalid selection. Enter 1-11: "));

    assert!(tmp.path().join("project_flat/go.mod").is_file());
}

#[test]
fn interactive_decline_creates_nothing() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["generate", "--no-fuzzy"])
        .write_stdin("1\n\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generation cancelled."));

    assert!(!tmp.path().join("project_flat").exists());
}

#[test]
fn interactive_menu_at_end_of_input_fails() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["generate", "--no-fuzzy"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error selecting architecture"));
}

#[test]
fn interactive_overwrite_declined() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("project_flat")).unwrap();

    archforge(tmp.path())
        .args(["generate", "--no-fuzzy", "-a", "flat"])
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Do you want to overwrite the existing directory? [y/N]: ",
        ))
        .stdout(predicate::str::contains("Generation cancelled."));

    assert!(!tmp.path().join("project_flat/go.mod").exists());
}

// ── init / config ─────────────────────────────────────────────────────────────

#[test]
fn init_then_config_get() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("archforge.toml");

    archforge(tmp.path())
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success();
    assert!(fs::read_to_string(&config).unwrap().contains("[defaults]"));

    archforge(tmp.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "generate.fuzzy"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn init_keeps_existing_config_without_force() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("archforge.toml");
    fs::write(&config, "[defaults]\nmodule = \"example.com/keep\"\n").unwrap();

    archforge(tmp.path())
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert!(fs::read_to_string(&config).unwrap().contains("example.com/keep"));
}

#[test]
fn config_file_supplies_module_default() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("archforge.toml");
    fs::write(&config, "[defaults]\nmodule = \"gitlab.com/team/svc\"\n").unwrap();

    archforge(tmp.path())
        .arg("--config")
        .arg(&config)
        .args(["generate", "-a", "layered", "-y"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Go module name [gitlab.com/team/svc]: "));

    let go_mod = fs::read_to_string(tmp.path().join("project_layered/go.mod")).unwrap();
    assert!(go_mod.starts_with("module gitlab.com/team/svc\n"));
}

#[test]
fn environment_overrides_config() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .env("ARCHFORGE_DEFAULTS__MODULE", "example.com/env")
        .args(["config", "get", "defaults.module"])
        .assert()
        .success()
        .stdout("example.com/env\n");
}

#[test]
fn config_unknown_key_is_a_configuration_error() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4);
}

#[test]
fn malformed_config_file_exits_with_configuration_code() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("archforge.toml");
    fs::write(&config, "[generate]\nfuzzy = \"sometimes\"\n").unwrap();

    archforge(tmp.path())
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .code(4);
}

#[test]
fn config_path_honours_flag() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("custom.toml");
    archforge(tmp.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn bash_completions() {
    let tmp = TempDir::new().unwrap();
    archforge(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("archforge"));
}
