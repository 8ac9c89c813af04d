//! End-to-end tests for the `cddf-site` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn cddf_site() -> Command {
    let mut cmd = cargo_bin_cmd!("cddf-site");
    cmd.env_remove("CDDF_REPO_URL").env_remove("CDDF_LOGO_SRC");
    cmd
}

#[test]
fn shows_help() {
    cddf_site()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--repo-url"))
        .stdout(predicate::str::contains("--stdout"));
}

#[test]
fn shows_version() {
    cddf_site()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn prints_page_to_stdout() {
    let temp = TempDir::new().expect("temp dir");
    cddf_site()
        .current_dir(temp.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("https://github.com/h3ml0ck/cddf"));
}

#[test]
fn writes_page_into_new_directory() {
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("public/site/index.html");

    cddf_site()
        .current_dir(temp.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("not found"));

    let html = std::fs::read_to_string(&out).expect("read output");
    assert!(html.contains("id=\"software\""));
}

#[test]
fn no_logo_warning_when_asset_present() {
    let temp = TempDir::new().expect("temp dir");
    std::fs::write(temp.path().join("logo.png"), b"png").expect("write logo");

    cddf_site()
        .current_dir(temp.path())
        .args(["--out", "index.html"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not found").not());
}

#[test]
fn flag_overrides_env_and_config() {
    let temp = TempDir::new().expect("temp dir");
    std::fs::write(
        temp.path().join("cddf-site.toml"),
        "repo_url = \"https://config.example/cddf\"\nlogo_src = \"/poster.png\"\n",
    )
    .expect("write config");

    cddf_site()
        .current_dir(temp.path())
        .env("CDDF_REPO_URL", "https://env.example/cddf")
        .args(["--stdout", "--repo-url", "https://flag.example/cddf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://flag.example/cddf"))
        .stdout(predicate::str::contains("https://env.example/cddf").not())
        .stdout(predicate::str::contains("/poster.png"));
}

#[test]
fn env_overrides_config_file() {
    let temp = TempDir::new().expect("temp dir");
    std::fs::write(
        temp.path().join("cddf-site.toml"),
        "repo_url = \"https://config.example/cddf\"\n",
    )
    .expect("write config");

    cddf_site()
        .current_dir(temp.path())
        .env("CDDF_REPO_URL", "https://env.example/cddf")
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://env.example/cddf"))
        .stdout(predicate::str::contains("https://config.example/cddf").not());
}

#[test]
fn invalid_config_fails_with_path() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("broken.toml");
    std::fs::write(&config, "repo_url = [").expect("write config");

    cddf_site()
        .current_dir(temp.path())
        .arg("--stdout")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("[cddf-site] Error"))
        .stderr(predicate::str::contains("broken.toml"));
}
