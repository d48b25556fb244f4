mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn doctor_reports_counts_for_a_valid_config() {
    let fixture = TestFixture::new();
    fixture.write_photos_config("");

    fixture
        .command()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Endpoints: 2"))
        .stdout(predicate::str::contains("Links: 1"))
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn doctor_fails_when_no_config_exists() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("doctor")
        .output()
        .expect("Failed to run doctor");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config not found (searched:"),
        "unexpected stderr: {stderr}"
    );
    assert!(
        stderr.contains("dsync init"),
        "expected an init hint: {stderr}"
    );
}

#[test]
fn doctor_lists_every_validation_issue() {
    let fixture = TestFixture::new();
    fixture.write_config(
        r#"
[endpoints.bad]
type = "local"
path = "/"

[links.l]
local = "bad"
remote = "nowhere"
"#,
    );

    let output = fixture
        .command()
        .arg("doctor")
        .output()
        .expect("Failed to run doctor");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config validation failed"),
        "unexpected stderr: {stderr}"
    );
    assert!(stderr.contains("must not be '/'"), "got: {stderr}");
    assert!(
        stderr.contains("references unknown endpoint \"nowhere\""),
        "got: {stderr}"
    );
}

#[test]
fn doctor_checks_named_endpoints_and_links() {
    let fixture = TestFixture::new();
    fixture.write_photos_config("");

    fixture
        .command()
        .args(["doctor", "--endpoint", "laptop", "--link", "photos"])
        .assert()
        .success();

    let output = fixture
        .command()
        .args(["doctor", "--link", "nope"])
        .output()
        .expect("Failed to run doctor");
    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("unknown link \"nope\""),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
