use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::{rti_again, rti_isolated};

#[test]
fn init_creates_local_storage() {
    let (mut cmd, db) = rti_isolated("cli_init");

    cmd.args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied"))
        .stdout(contains("Local storage initialized"));

    assert!(Path::new(&db).exists());

    // migrations are not applied twice
    rti_again("cli_init", &db)
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied").not());
}

#[test]
fn theme_is_persisted_and_toggled() {
    let (mut cmd, db) = rti_isolated("cli_theme");

    cmd.args(["theme", "dark"])
        .assert()
        .success()
        .stdout(contains("Theme set to dark"));

    rti_again("cli_theme", &db)
        .args(["theme", "--show"])
        .assert()
        .success()
        .stdout(contains("Current theme: dark"));

    rti_again("cli_theme", &db)
        .arg("theme")
        .assert()
        .success()
        .stdout(contains("Theme set to light"));

    rti_again("cli_theme", &db)
        .args(["log", "--print", "--operation", "theme"])
        .assert()
        .success()
        .stdout(contains("dark"))
        .stdout(contains("light"));
}

#[test]
fn logout_clears_preferences() {
    let (mut cmd, db) = rti_isolated("cli_logout");

    cmd.args(["theme", "dark"]).assert().success();

    rti_again("cli_logout", &db)
        .arg("logout")
        .assert()
        .success()
        .stdout(contains("No active session."));

    rti_again("cli_logout", &db)
        .args(["theme", "--show"])
        .assert()
        .success()
        .stdout(contains("Current theme: light"));
}

#[test]
fn networked_commands_need_a_session() {
    for args in [
        vec!["sheet"],
        vec!["projects"],
        vec!["send", "--all"],
        vec!["review", "7"],
        vec!["fill", "--dry-run"],
    ] {
        let (mut cmd, _db) = rti_isolated("cli_no_session");
        cmd.args(&args)
            .assert()
            .failure()
            .stderr(contains("Authorization token is missing"));
    }
}

#[test]
fn invalid_hour_spec_is_rejected() {
    let (mut cmd, _db) = rti_isolated("cli_fill_hour");
    cmd.args(["fill", "2026-10-16", "--hour", "9:1:1"])
        .assert()
        .failure()
        .stderr(contains("Invalid hour: 9"));

    let (mut cmd, _db) = rti_isolated("cli_fill_spec");
    cmd.args(["fill", "2026-10-16", "--hour", "1:atlas:2"])
        .assert()
        .failure()
        .stderr(contains("Invalid hour entry"));
}

#[test]
fn invalid_dates_are_rejected() {
    let (mut cmd, _db) = rti_isolated("cli_bad_date");
    cmd.args(["delete", "16/10/2026", "--force"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn bulk_options_go_together() {
    let (mut cmd, _db) = rti_isolated("cli_bulk_args");
    cmd.args(["fill", "--project", "1"]).assert().failure();

    let (mut cmd, _db) = rti_isolated("cli_accept_args");
    cmd.args(["accept", "7", "2026-10-01", "--all"])
        .assert()
        .failure();
}

#[test]
fn login_help_warns_about_echoed_prompt() {
    let (mut cmd, _db) = rti_isolated("cli_login_help");
    cmd.args(["login", "--help"])
        .assert()
        .success()
        .stdout(contains("RTIMESHEET_PASSWORD"))
        .stdout(contains("echoed prompt"));
}

#[test]
fn config_print_shows_overrides() {
    let (mut cmd, _db) = rti_isolated("cli_config");
    cmd.args(["--api", "https://ts.example.com/", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("api_url: https://ts.example.com/"))
        .stdout(contains("separator_char"));
}

#[test]
fn config_check_without_file_warns() {
    let (mut cmd, _db) = rti_isolated("cli_config_check");
    cmd.args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file not found"));
}

#[test]
fn unreachable_server_fails_login_cleanly() {
    let (mut cmd, db) = rti_isolated("cli_login_offline");
    cmd.args([
        "--api",
        "http://127.0.0.1:9/",
        "login",
        "mario.rossi",
        "--password",
        "secret",
    ])
    .assert()
    .failure()
    .stderr(contains("Error:"));

    rti_again("cli_login_offline", &db)
        .args(["sheet"])
        .assert()
        .failure()
        .stderr(contains("Authorization token is missing"));
}
