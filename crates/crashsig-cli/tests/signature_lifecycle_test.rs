mod common;
use common::{SIGNATURE, TestFixture};
use predicates::prelude::*;

/// Test: malformed signatures are rejected before anything is stored
#[test]
fn test_invalid_signature_rejected() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args([
            "signature",
            "new",
            "--signature",
            r#"{"symptoms":[{"type":"bogus"}]}"#,
            "--short-description",
            "bad",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown symptom type: bogus"));

    fixture
        .command()
        .args([
            "signature",
            "new",
            "--signature",
            "not json",
            "--short-description",
            "bad",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    let result = fixture.json(&["signature", "list", "--all"]);
    assert_eq!(result["content"]["total"], 0);
}

/// Test: signatures can be read from a file with the @path form
#[test]
fn test_signature_from_file() {
    let fixture = TestFixture::new();
    let path = fixture.data_dir().with_extension("json");
    std::fs::write(&path, SIGNATURE).unwrap();

    let result = fixture.json(&[
        "signature",
        "new",
        "--signature",
        &format!("@{}", path.display()),
        "--short-description",
        "from file",
    ]);
    assert_eq!(result["content"]["action"], "created");

    let id = result["content"]["id"].as_i64().unwrap();
    let detail = fixture.json(&["signature", "show", &id.to_string()]);
    assert!(
        detail["content"]["signature"]
            .as_str()
            .unwrap()
            .contains("AddressSanitizer")
    );
}

/// Test: edit, optimize and show reflect each other
#[test]
fn test_edit_and_optimize() {
    let fixture = TestFixture::new();
    let id = fixture.create_signature("before").to_string();

    fixture.json(&["signature", "edit", &id, "--short-description", "after"]);
    fixture.json(&["signature", "optimize", &id, "--signature", SIGNATURE]);

    let result = fixture.json(&["signature", "list"]);
    let row = &result["content"]["signatures"][0];
    assert_eq!(row["short_description"], "after");
    assert_eq!(
        row["optimization_url"],
        format!("/crashmanager/signatures/{}/optimize/", id)
    );

    fixture.json(&["signature", "optimize", &id, "--clear"]);
    let result = fixture.json(&["signature", "list"]);
    assert!(result["content"]["signatures"][0]["optimization_url"].is_null());
}

/// Test: deleting a signature leaves its crashes unbucketed
#[test]
fn test_delete_keeps_crashes() {
    let fixture = TestFixture::new();
    let id = fixture.create_signature("doomed");
    fixture.add_crash(Some(id), None);
    fixture.add_crash(Some(id), Some(1));

    let before = fixture.json(&["crash", "list"]);
    assert_eq!(before["content"]["total"], 0);

    let result = fixture.json(&["signature", "delete", &id.to_string()]);
    assert_eq!(result["content"]["action"], "deleted");

    let after = fixture.json(&["crash", "list"]);
    assert_eq!(after["content"]["total"], 2);

    fixture
        .command()
        .args(["signature", "show", &id.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

/// Test: crashes can be moved into and out of a signature
#[test]
fn test_crash_assign() {
    let fixture = TestFixture::new();
    let id = fixture.create_signature("target");
    let crash = fixture.add_crash(None, None);

    let result = fixture.json(&["crash", "list"]);
    assert_eq!(result["content"]["crashes"][0]["id"], crash);

    fixture.json(&[
        "crash",
        "assign",
        &crash.to_string(),
        "--bucket",
        &id.to_string(),
    ]);

    let result = fixture.json(&["crash", "list"]);
    assert_eq!(result["content"]["total"], 0);

    let detail = fixture.json(&["signature", "show", &id.to_string()]);
    assert_eq!(detail["content"]["crash_count"], 1);
}

/// Test: linking requires a registered provider
#[test]
fn test_link_bug_unknown_provider() {
    let fixture = TestFixture::new();
    let id = fixture.create_signature("orphan");

    fixture
        .command()
        .args([
            "signature",
            "link-bug",
            &id.to_string(),
            "--provider",
            "nowhere.example.com",
            "--external-id",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown bug provider"));
}

/// Test: a provider template without %s degrades to plain bug ids
#[test]
fn test_broken_template_keeps_listing() {
    let fixture = TestFixture::new();
    fixture.add_provider("tracker.example.com", "https://tracker.example.com/");
    let id = fixture.create_signature("broken tracker").to_string();

    fixture.json(&[
        "signature",
        "link-bug",
        &id,
        "--provider",
        "tracker.example.com",
        "--external-id",
        "<77>",
    ]);

    let result = fixture.json(&["signature", "list", "--all"]);
    let bug = &result["content"]["signatures"][0]["bug"];
    assert_eq!(bug["external_id"], "<77>");
    assert!(bug["url"].is_null());

    fixture
        .command()
        .args(["--format", "html", "signature", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<td>&lt;77&gt;</td>"));
}

/// Test: a linked bug can be marked fixed and reopened
#[test]
fn test_close_and_reopen_bug() {
    let fixture = TestFixture::new();
    fixture.add_provider(
        "bugzilla.example.com",
        "https://bugzilla.example.com/show_bug.cgi?id=%s",
    );
    let id = fixture.create_signature("tracked").to_string();

    fixture.json(&[
        "signature",
        "link-bug",
        &id,
        "--provider",
        "bugzilla.example.com",
        "--external-id",
        "50%2F",
    ]);

    let bug_of = |fixture: &TestFixture| {
        let result = fixture.json(&["signature", "list", "--all"]);
        result["content"]["signatures"][0]["bug"].clone()
    };

    let bug = bug_of(&fixture);
    assert_eq!(bug["external_id"], "50%2F");
    assert_eq!(
        bug["url"],
        "https://bugzilla.example.com/show_bug.cgi?id=50%252F"
    );
    assert_eq!(bug["closed"], false);

    let result = fixture.json(&["signature", "close-bug", &id]);
    assert_eq!(result["content"]["action"], "bug_closed");
    assert_eq!(bug_of(&fixture)["closed"], true);

    let result = fixture.json(&["signature", "close-bug", &id, "--reopen"]);
    assert_eq!(result["content"]["action"], "bug_reopened");
    assert_eq!(bug_of(&fixture)["closed"], false);
}

/// Test: closing a bug needs a bug to close
#[test]
fn test_close_bug_without_bug() {
    let fixture = TestFixture::new();
    let id = fixture.create_signature("untracked");

    fixture
        .command()
        .args(["signature", "close-bug", &id.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no linked bug"));
}
