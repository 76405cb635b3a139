//! Runs the built `tsdom` binary against temporary projects.

use std::{fs, path::Path, process::Command};

const MANIFEST: &str = r#"
[client]
name = "HeroesClient"

[[operations]]
name = "GetHeroAsync"
method = "GET"
path = "api/Heroes/{id}"
response = { name = "Hero" }
parameters = [{ name = "id", type = { name = "long" } }]
"#;

fn tsdom(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tsdom"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_generate_dry_run_prints_client() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tsdom.toml"), MANIFEST).unwrap();

    let output = tsdom(dir.path(), &["generate", "--dry-run"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("export class HeroesClient {\n"));
    assert!(stdout.contains("    getHero(id: number): Promise<Hero>{\n"));
    assert!(!dir.path().join("client.ts").exists());
}

#[test]
fn test_generate_strict_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tsdom.toml"), MANIFEST).unwrap();

    let output = tsdom(dir.path(), &["generate", "--strict", "--dry-run"]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("getHero(id: number)"));
}

#[test]
fn test_generate_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tsdom.toml"), MANIFEST).unwrap();

    let output = tsdom(dir.path(), &["generate", "-o", "out/heroes.ts"]);
    assert!(output.status.success());

    let written = fs::read_to_string(dir.path().join("out/heroes.ts")).unwrap();
    assert!(written.contains("this.http.get(this.baseUri + 'api/Heroes/'+id)"));
}

#[test]
fn test_check_reports_invalid_manifest() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("tsdom.toml"),
        MANIFEST.replace("{ name = \"id\", type = { name = \"long\" } }", ""),
    )
    .unwrap();

    let output = tsdom(dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown_uri_variable"));
}

#[test]
fn test_render_json_tree() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("tree.json"),
        r#"{"kind": "class", "name": "Empty"}"#,
    )
    .unwrap();

    let output = tsdom(dir.path(), &["render", "tree.json"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "export class Empty {\n}\n"
    );
}
