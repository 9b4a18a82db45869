#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn teamhub(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("teamhub").unwrap();
    cmd.current_dir(dir.path())
        .env("TEAMHUB_ROOT", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn init(dir: &TempDir) {
    teamhub(dir).arg("init").assert().success();
}

const ANSWERS: &str = "\
name: Platform
industry: Fintech
companySize: 51–200
teamSize: 4–7
workLocation: Remote
slowsDown:
  - Too many approvals
  - Burnout
leadershipStyle: Coaching
";

/// Create a team from `yaml` and return its id.
fn create_from(dir: &TempDir, yaml: &str) -> String {
    let file = dir.path().join("answers.yaml");
    std::fs::write(&file, yaml).unwrap();
    let out = teamhub(dir)
        .args(["--json", "create", "--from"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let team: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    team["id"].as_str().unwrap().to_string()
}

fn stored_teams(dir: &TempDir) -> Vec<serde_json::Value> {
    let data = std::fs::read_to_string(dir.path().join(".teamhub/teams.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&data).unwrap();
    doc["teams"].as_array().unwrap().clone()
}

// ---------------------------------------------------------------------------
// teamhub init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_config_and_store() {
    let dir = TempDir::new().unwrap();
    teamhub(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("created: .teamhub/config.yaml"));

    assert!(dir.path().join(".teamhub/config.yaml").exists());
    assert!(stored_teams(&dir).is_empty());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = create_from(&dir, ANSWERS);
    teamhub(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists:  .teamhub/teams.json"));

    let teams = stored_teams(&dir);
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["id"], id.as_str());
}

// ---------------------------------------------------------------------------
// teamhub list
// ---------------------------------------------------------------------------

#[test]
fn list_empty_points_at_create() {
    let dir = TempDir::new().unwrap();
    teamhub(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No teams yet."))
        .stdout(predicate::str::contains("teamhub create"));
}

#[test]
fn list_shows_newest_first_with_summary() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    create_from(&dir, ANSWERS);
    std::thread::sleep(std::time::Duration::from_millis(20));
    create_from(&dir, "name: Growth\nteamSize: 1–3\nworkLocation: Hybrid\n");

    let out = teamhub(&dir).arg("list").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let growth = stdout.find("Growth").unwrap();
    let platform = stdout.find("Platform").unwrap();
    assert!(growth < platform);
    assert!(stdout.contains("4–7 people | Remote"));
    assert!(stdout.contains("1–3 people | Hybrid"));
}

#[test]
fn malformed_store_lists_as_empty() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    std::fs::write(dir.path().join(".teamhub/teams.json"), "{ not json").unwrap();

    teamhub(&dir)
        .args(["--json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn legacy_bare_array_store_is_read() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let legacy = r#"[{"id":"legacy-1","name":"Old Team","teamSize":"8–15","workLocation":"Onsite","createdAt":"2024-03-01T10:00:00Z"}]"#;
    std::fs::write(dir.path().join(".teamhub/teams.json"), legacy).unwrap();

    teamhub(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Old Team"))
        .stdout(predicate::str::contains("8–15 people | Onsite"));
}

// ---------------------------------------------------------------------------
// teamhub create
// ---------------------------------------------------------------------------

#[test]
fn create_from_file_stores_answers() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = create_from(&dir, ANSWERS);

    let teams = stored_teams(&dir);
    assert_eq!(teams.len(), 1);
    let team = &teams[0];
    assert_eq!(team["id"], id.as_str());
    assert_eq!(team["name"], "Platform");
    assert_eq!(team["industry"], "Fintech");
    assert_eq!(team["mainGoal"], "");
    assert_eq!(
        team["slowsDown"],
        serde_json::json!(["Too many approvals", "Burnout"])
    );
    assert_eq!(team["motivatesMost"], serde_json::json!([]));
    assert!(team["createdAt"].is_string());
}

#[test]
fn create_name_flag_overrides_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("answers.yaml");
    std::fs::write(&file, ANSWERS).unwrap();

    teamhub(&dir)
        .args(["create", "--name", "  Core  ", "--from"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created team: Core"));
}

#[test]
fn create_without_name_fails() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let file = dir.path().join("answers.yaml");
    std::fs::write(&file, "industry: Retail\n").unwrap();

    teamhub(&dir)
        .args(["create", "--from"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("the team needs a name"));
    assert!(stored_teams(&dir).is_empty());
}

#[test]
fn create_rejects_unknown_option() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let file = dir.path().join("answers.yaml");
    std::fs::write(&file, "name: X\nworkLocation: Moon\n").unwrap();

    teamhub(&dir)
        .args(["create", "--from"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Moon' is not one of the options"));
}

#[test]
fn create_interactively_from_stdin() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    // Step 1 answered, the other 18 skipped, then the name.
    let mut script = String::from("Healthcare\n");
    script.push_str(&":skip\n".repeat(18));
    script.push_str("Care Team\n");

    teamhub(&dir)
        .arg("create")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 19"))
        .stdout(predicate::str::contains("Final Step"))
        .stdout(predicate::str::contains("Created team: Care Team"));

    let teams = stored_teams(&dir);
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["industry"], "Healthcare");
}

#[test]
fn create_refuses_store_file_outside_data_dir() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("home");
    std::fs::create_dir_all(root.join(".teamhub")).unwrap();
    std::fs::write(
        root.join(".teamhub/config.yaml"),
        "store:\n  file: ../../escaped.json\n",
    )
    .unwrap();
    let file = dir.path().join("answers.yaml");
    std::fs::write(&file, ANSWERS).unwrap();

    teamhub(&dir)
        .env("TEAMHUB_ROOT", &root)
        .args(["create", "--from"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"))
        .stderr(predicate::str::contains("must be a plain file name"));
    assert!(!dir.path().join("escaped.json").exists());

    teamhub(&dir)
        .env("TEAMHUB_ROOT", &root)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn interactive_create_with_json_prints_only_json() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let mut script = String::from("Healthcare\n");
    script.push_str(&":skip\n".repeat(18));
    script.push_str("Care Team\n");

    let out = teamhub(&dir)
        .args(["--json", "create"])
        .write_stdin(script)
        .output()
        .unwrap();
    assert!(out.status.success());
    let team: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(team["name"], "Care Team");
    assert!(String::from_utf8_lossy(&out.stderr).contains("Step 1 of 19"));
}

#[test]
fn create_cancelled_on_quit() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    teamhub(&dir)
        .arg("create")
        .write_stdin(":quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cancelled"));
    assert!(stored_teams(&dir).is_empty());
}

// ---------------------------------------------------------------------------
// teamhub show / edit / delete
// ---------------------------------------------------------------------------

#[test]
fn show_groups_fields_and_fills_blanks() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = create_from(&dir, ANSWERS);

    teamhub(&dir)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform"))
        .stdout(predicate::str::contains("Company Context"))
        .stdout(predicate::str::contains("Too many approvals, Burnout"))
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    teamhub(&dir)
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("team not found: nope"));
}

#[test]
fn edit_sets_and_toggles_fields() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = create_from(&dir, ANSWERS);
    let before = stored_teams(&dir)[0].clone();

    teamhub(&dir)
        .args([
            "edit",
            &id,
            "--set",
            "workLocation=Hybrid",
            "--set",
            "motivatesMost=Growth, Meaning",
            "--add",
            "slowsDown=Low motivation",
            "--remove",
            "slowsDown=Burnout",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved team: Platform"));

    let after = stored_teams(&dir)[0].clone();
    assert_eq!(after["workLocation"], "Hybrid");
    assert_eq!(after["motivatesMost"], serde_json::json!(["Growth", "Meaning"]));
    assert_eq!(
        after["slowsDown"],
        serde_json::json!(["Too many approvals", "Low motivation"])
    );
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["createdAt"], before["createdAt"]);
    assert_eq!(after["industry"], before["industry"]);
}

#[test]
fn edit_rejects_unknown_field() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = create_from(&dir, ANSWERS);

    teamhub(&dir)
        .args(["edit", &id, "--set", "favoriteColor=blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("favoriteColor"));
}

#[test]
fn delete_with_yes_removes_only_that_team() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let keep = create_from(&dir, ANSWERS);
    let gone = create_from(&dir, "name: Temp\n");

    teamhub(&dir)
        .args(["delete", &gone, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted team: Temp"));

    let teams = stored_teams(&dir);
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["id"], keep.as_str());
}

#[test]
fn delete_declined_keeps_team() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = create_from(&dir, ANSWERS);

    teamhub(&dir)
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("This action cannot be undone"))
        .stdout(predicate::str::contains("Cancelled."));
    assert_eq!(stored_teams(&dir).len(), 1);
}

#[test]
fn delete_prompt_with_json_keeps_stdout_parseable() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = create_from(&dir, ANSWERS);

    let out = teamhub(&dir)
        .args(["--json", "delete", &id])
        .write_stdin("y\n")
        .output()
        .unwrap();
    assert!(out.status.success());
    let result: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(result["deleted"], true);
    assert!(String::from_utf8_lossy(&out.stderr).contains("[y/N]"));
    assert!(stored_teams(&dir).is_empty());
}

#[test]
fn one_unreadable_record_does_not_hide_the_rest() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    create_from(&dir, ANSWERS);
    let path = dir.path().join(".teamhub/teams.json");
    let mut doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    doc["teams"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({ "id": "bad", "name": "Broken", "createdAt": "soon" }));
    std::fs::write(&path, doc.to_string()).unwrap();

    teamhub(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform"))
        .stdout(predicate::str::contains("Broken").not());

    create_from(&dir, "name: Growth\n");
    let names: Vec<String> = stored_teams(&dir)
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Platform", "Growth"]);
}

// ---------------------------------------------------------------------------
// teamhub questions / about / config
// ---------------------------------------------------------------------------

#[test]
fn questions_lists_catalog() {
    let dir = TempDir::new().unwrap();
    let out = teamhub(&dir).args(["--json", "questions"]).output().unwrap();
    assert!(out.status.success());
    let questions: Vec<serde_json::Value> = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(questions.len(), 19);
    assert_eq!(questions[0]["key"], "industry");
    assert_eq!(questions[18]["key"], "decisionSpeed");
}

#[test]
fn about_prints_pillars() {
    let dir = TempDir::new().unwrap();
    teamhub(&dir)
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("Massalati"))
        .stdout(predicate::str::contains("THE SIX PILLARS"));
}

#[test]
fn config_validate_reports_errors() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    teamhub(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config OK"));

    std::fs::write(
        dir.path().join(".teamhub/config.yaml"),
        "store:\n  file: ../teams.json\n",
    )
    .unwrap();
    teamhub(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("must be a plain file name"));
}

#[test]
fn custom_store_file_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".teamhub")).unwrap();
    std::fs::write(
        dir.path().join(".teamhub/config.yaml"),
        "store:\n  file: squads.json\n",
    )
    .unwrap();
    init(&dir);
    create_from(&dir, ANSWERS);

    assert!(dir.path().join(".teamhub/squads.json").exists());
    assert!(!dir.path().join(".teamhub/teams.json").exists());
}
