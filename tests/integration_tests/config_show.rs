//! Tests for `promptline config show` and `config path`.

use crate::common::{TestRepo, stderr, stdout};
use promptline::PromptConfig;
use rstest::rstest;

fn show(repo: &TestRepo) -> std::process::Output {
    repo.promptline()
        .args(["config", "show"])
        .output()
        .unwrap()
}

#[test]
fn test_show_defaults_without_file() {
    let repo = TestRepo::new();
    let output = show(&repo);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    // Round-trips to the built-in defaults
    let shown: PromptConfig = toml::from_str(&stdout(&output)).unwrap();
    assert_eq!(shown, PromptConfig::default());
    assert!(stderr(&output).contains("showing defaults"));
}

#[test]
fn test_show_merges_file_and_env() {
    let repo = TestRepo::new();
    repo.write_config(
        r##"
segments = ["cwd", "git"]
date_time_format = "%H:%M"

[palette]
moss = "#4a7a3a"
"##,
    );
    let output = repo
        .promptline()
        .args(["config", "show"])
        .env("PROMPTLINE_INDEX_ENABLED", "false")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let shown: PromptConfig = toml::from_str(&stdout(&output)).unwrap();
    assert_eq!(shown.segments.len(), 2);
    assert_eq!(shown.date_time_format, "%H:%M");
    assert!(!shown.index_enabled);
    assert_eq!(shown.palette.get("moss").map(String::as_str), Some("#4a7a3a"));
    assert!(!stderr(&output).contains("showing defaults"));
}

#[rstest]
#[case::flag_first(true)]
#[case::flag_last(false)]
fn test_config_flag_overrides_env_path(#[case] flag_first: bool) {
    let repo = TestRepo::new();
    let other = repo.home_path().join("other.toml");
    std::fs::write(&other, "date_time_enabled = true\n").unwrap();
    let flag = ["--config", other.to_str().unwrap()];

    let mut cmd = repo.promptline();
    if flag_first {
        cmd.args(flag).args(["config", "show"]);
    } else {
        cmd.args(["config", "show"]).args(flag);
    }
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let shown: PromptConfig = toml::from_str(&stdout(&output)).unwrap();
    assert!(shown.date_time_enabled);
}

#[test]
fn test_verbose_before_subcommand() {
    let repo = TestRepo::new();
    let output = repo
        .promptline()
        .args(["-v", "--color", "never", "config", "path"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[test]
fn test_show_rejects_bad_palette() {
    let repo = TestRepo::new();
    repo.write_config("[palette]\nbroken = \"#12\"\n");
    let output = show(&repo);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("broken"), "{}", stderr(&output));
}

#[test]
fn test_config_path() {
    let repo = TestRepo::new();
    let output = repo
        .promptline()
        .args(["config", "path"])
        .output()
        .unwrap();
    assert_eq!(
        stdout(&output).trim_end(),
        repo.config_path().display().to_string()
    );
}
