//! End-to-end tests running the `mr` binary against scratch projects

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

const ENV_LOCAL: &str =
    "NEXT_PUBLIC_SUPABASE_URL=https://abc.supabase.co\nSUPABASE_SERVICE_ROLE_KEY=service-role\n";

/// Command for the built binary with every input variable cleared
fn mr() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mr"));
    for var in [
        "NEXT_PUBLIC_SUPABASE_URL",
        "SUPABASE_SERVICE_ROLE_KEY",
        "MR_PROJECT_DIR",
        "MR_ENV_FILE",
        "MR_MIGRATIONS_DIR",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn run_in(root: &Path) -> Output {
    mr().arg("--project-dir").arg(root).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// Project with `.env.local` and the given migrations
fn project(migrations: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env.local"), ENV_LOCAL).unwrap();
    let migrations_dir = dir.path().join("supabase").join("migrations");
    fs::create_dir_all(&migrations_dir).unwrap();
    for (name, sql) in migrations {
        fs::write(migrations_dir.join(name), sql).unwrap();
    }
    (dir, migrations_dir)
}

#[test]
fn test_lists_migrations_and_succeeds() {
    let (dir, _) = project(&[
        ("002_rewards.sql", "alter table rewards add column note text;"),
        ("001_members.sql", "create table members (id uuid primary key);"),
    ]);

    let output = run_in(dir.path());
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.starts_with("Found 2 migration(s):\n  - 001_members.sql\n  - 002_rewards.sql\n"));
    assert!(out.contains(
        "--- START SQL (001_members.sql) ---\ncreate table members (id uuid primary key);\n--- END SQL ---"
    ));
    assert!(out.find("001_members.sql ---").unwrap() < out.find("002_rewards.sql ---").unwrap());
    assert!(out.contains("4. Or use supabase CLI: supabase db push"));
}

#[test]
fn test_missing_config_fails() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "Missing SUPABASE_URL or SERVICE_ROLE_KEY in .env.local\n"
    );
}

#[test]
fn test_unrelated_settings_lines_are_skipped() {
    let (dir, _) = project(&[("a.sql", "select 1;")]);
    fs::write(
        dir.path().join(".env.local"),
        format!("{}NEXT_PUBLIC_TITLE=My App\nFEATURE_FLAG\n", ENV_LOCAL),
    )
    .unwrap();

    let output = run_in(dir.path());

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Found 1 migration(s):\n  - a.sql\n"));
}

#[test]
fn test_process_environment_satisfies_config() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("supabase").join("migrations")).unwrap();

    let output = mr()
        .arg("--project-dir")
        .arg(dir.path())
        .env("NEXT_PUBLIC_SUPABASE_URL", "https://abc.supabase.co")
        .env("SUPABASE_SERVICE_ROLE_KEY", "service-role")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No migrations found\n");
}

#[test]
fn test_missing_migrations_directory_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env.local"), ENV_LOCAL).unwrap();
    let expected = dir.path().join("supabase").join("migrations");

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        format!("Migrations directory not found: {}\n", expected.display())
    );
}

#[test]
fn test_empty_migrations_directory_succeeds() {
    let (dir, _) = project(&[]);

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "No migrations found\n");
}

#[test]
fn test_invalid_file_aborts_remaining() {
    let (dir, migrations_dir) = project(&[("a.sql", "select 1;"), ("c.sql", "select 3;")]);
    fs::write(migrations_dir.join("b.sql"), [0xc3, 0x28]).unwrap();

    let output = run_in(dir.path());
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("--- START SQL (a.sql) ---"));
    assert!(out.contains("Applying migration: b.sql\nError processing b.sql:"));
    assert!(!out.contains("Applying migration: c.sql"));
    assert!(!out.contains("Instructions:"));
}

#[test]
fn test_invalid_service_url_fails() {
    let (dir, _) = project(&[("a.sql", "select 1;")]);
    fs::write(
        dir.path().join(".env.local"),
        "NEXT_PUBLIC_SUPABASE_URL=not-a-url\nSUPABASE_SERVICE_ROLE_KEY=service-role\n",
    )
    .unwrap();

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Invalid service URL 'not-a-url'"));
}

#[test]
fn test_path_overrides() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join("settings.env");
    fs::write(&env_file, ENV_LOCAL).unwrap();
    let sql_dir = dir.path().join("db");
    fs::create_dir_all(&sql_dir).unwrap();
    fs::write(sql_dir.join("001_init.sql"), "select 1;").unwrap();

    let output = mr()
        .arg("--project-dir")
        .arg(dir.path().join("elsewhere"))
        .arg("--env-file")
        .arg(&env_file)
        .arg("--migrations-dir")
        .arg(&sql_dir)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("--- START SQL (001_init.sql) ---\nselect 1;\n--- END SQL ---"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let (dir, _) = project(&[]);

    let output = mr()
        .arg("-v")
        .arg("--project-dir")
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No migrations found\n");
    assert!(!output.stderr.is_empty());
}
