mod common;
use common::TestFixture;

#[test]
fn init_writes_the_starter_config() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("init")
        .output()
        .expect("Failed to run init");

    assert!(
        output.status.success(),
        "init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let config_path = fixture.config_path();
    assert!(
        config_path.exists(),
        "config should be created at {}",
        config_path.display()
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote "), "unexpected stdout: {stdout}");

    let contents = std::fs::read_to_string(&config_path).expect("read config");
    assert!(contents.contains("[endpoints.example_local]"));
    assert!(contents.contains("[links.photos]"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let fixture = TestFixture::new();

    fixture.command().arg("init").assert().success();

    let output = fixture
        .command()
        .arg("init")
        .output()
        .expect("Failed to run init");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config already exists"),
        "unexpected stderr: {stderr}"
    );
    assert!(
        stderr.contains("--force"),
        "expected a --force hint: {stderr}"
    );
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.write_config("# scribbles\n");

    fixture
        .command()
        .args(["init", "--force"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(fixture.config_path()).expect("read config");
    assert!(contents.contains("[endpoints.example_local]"));
}

#[test]
fn init_falls_back_to_home_config_dir_without_xdg() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .env_remove("XDG_CONFIG_HOME")
        .arg("init")
        .output()
        .expect("Failed to run init");
    assert!(output.status.success());

    let fallback = fixture
        .home_dir()
        .join(".config")
        .join("dsync")
        .join("config.toml");
    assert!(
        fallback.exists(),
        "expected fallback config at {}",
        fallback.display()
    );
}
