#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const TEAM_CSV: &str = "name,weekday_blocks,date_blocks,fewer_shifts
alice,,,NO
bob,4;5,'2025-01-14,NO
carol,,,YES
";

fn cli() -> Command {
    Command::cargo_bin("roulement-cli").unwrap()
}

#[test]
fn workdays_skips_exclusions() {
    cli()
        .args(["workdays", "--year", "2025", "--month", "1", "--exclude", "2025-01-14,2025-02-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-01 Wednesday"))
        .stdout(predicate::str::contains("2025-01-14").not())
        .stdout(predicate::str::contains("2025-01-03").not())
        .stderr(predicate::str::contains("2025-02-02 is not in 01/2025"));
}

#[test]
fn plan_prints_roster_and_exports() {
    let dir = tempdir().unwrap();
    let team = dir.path().join("team.csv");
    let out_csv = dir.path().join("out.csv");
    let out_json = dir.path().join("out.json");
    fs::write(&team, TEAM_CSV).unwrap();

    cli()
        .args(["plan", "--year", "2025", "--month", "1", "--check"])
        .arg("--team")
        .arg(&team)
        .arg("--out-csv")
        .arg(&out_csv)
        .arg("--out-json")
        .arg(&out_json)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shift schedule for 01/2025"))
        .stdout(predicate::str::contains("2025-01-01 (Wednesday, week 00): alice"))
        .stdout(predicate::str::contains("OK: no conflicts"));

    assert!(fs::read_to_string(&out_csv).unwrap().starts_with("date,weekday,assigned"));
    assert!(fs::read_to_string(&out_json).unwrap().contains("\"assignments\""));
}

#[test]
fn strict_plan_with_gaps_exits_with_warning_code() {
    let dir = tempdir().unwrap();
    let team = dir.path().join("solo.csv");
    fs::write(&team, "name,weekday_blocks,date_blocks,fewer_shifts\nsolo,,,NO\n").unwrap();

    cli()
        .args(["plan", "--year", "2025", "--month", "1", "--strict"])
        .arg("--team")
        .arg(&team)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Days that could not be assigned:"));
}

#[test]
fn plan_warns_about_fully_blocked_days() {
    let dir = tempdir().unwrap();
    let team = dir.path().join("team.csv");
    fs::write(
        &team,
        "name,weekday_blocks,date_blocks,fewer_shifts\na,1,,NO\nb,,'2025-01-14,NO\n",
    )
    .unwrap();

    cli()
        .args(["plan", "--year", "2025", "--month", "1"])
        .arg("--team")
        .arg(&team)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "2025-01-14 (Tuesday): all participants are blocked",
        ));
}

#[test]
fn invalid_month_fails() {
    let dir = tempdir().unwrap();
    let team = dir.path().join("team.csv");
    fs::write(&team, TEAM_CSV).unwrap();

    cli()
        .args(["plan", "--year", "2025", "--month", "13"])
        .arg("--team")
        .arg(&team)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid calendar input"));
}

#[test]
fn duplicate_names_fail_validation() {
    let dir = tempdir().unwrap();
    let team = dir.path().join("team.csv");
    fs::write(&team, "name,weekday_blocks,date_blocks,fewer_shifts\na,,,NO\na,,,NO\n").unwrap();

    cli()
        .args(["show-team"])
        .arg("--team")
        .arg(&team)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate participant name"));
}

#[test]
fn convert_to_json_and_show_team() {
    let dir = tempdir().unwrap();
    let team = dir.path().join("team.csv");
    let json = dir.path().join("team.json");
    fs::write(&team, TEAM_CSV).unwrap();

    cli()
        .args(["convert"])
        .arg("--team")
        .arg(&team)
        .arg("--out-json")
        .arg(&json)
        .assert()
        .success();

    cli()
        .args(["show-team"])
        .arg("--team")
        .arg(&json)
        .assert()
        .success()
        .stdout(predicate::str::contains("Participants: alice, bob, carol"))
        .stdout(predicate::str::contains("bob: weekdays: Fri, Sat | dates: 2025-01-14"))
        .stdout(predicate::str::contains("alice: no constraints"))
        .stdout(predicate::str::contains("Participants with fewer shifts: carol"));
}

#[test]
fn convert_from_json_to_csv() {
    let dir = tempdir().unwrap();
    let team = dir.path().join("team.csv");
    // extension volontairement neutre : --from-json force la lecture JSON
    let json = dir.path().join("team.backup");
    let back = dir.path().join("back.csv");
    fs::write(&team, TEAM_CSV).unwrap();

    cli()
        .args(["convert"])
        .arg("--team")
        .arg(&team)
        .arg("--out-json")
        .arg(&json)
        .assert()
        .success();

    cli()
        .args(["convert"])
        .arg("--from-json")
        .arg(&json)
        .arg("--out-csv")
        .arg(&back)
        .assert()
        .success();

    let raw = fs::read_to_string(&back).unwrap();
    assert!(raw.starts_with("name,weekday_blocks,date_blocks,fewer_shifts"));
    assert!(raw.contains("bob,4;5,'2025-01-14,NO"));
    assert!(raw.contains("carol,,,YES"));
}

#[test]
fn convert_needs_exactly_one_source() {
    cli()
        .args(["convert", "--out-csv", "unused.csv"])
        .assert()
        .failure();

    cli()
        .args(["convert", "--team", "a.csv", "--from-json", "a.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
