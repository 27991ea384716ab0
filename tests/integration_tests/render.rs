//! End-to-end tests for `promptline render`.

use crate::common::{ASCII_SYMBOLS, TestRepo, stderr, stdout};
use ansi_str::AnsiStr;
use rstest::rstest;

/// Snapshot a rendered prompt in its escaped form, so the trailing space after
/// the marker stays visible.
macro_rules! assert_prompt_snapshot {
    ($out:expr, @$snapshot:literal) => {
        insta::assert_snapshot!(format!("{:?}", $out), @$snapshot)
    };
}

/// Render with plain output and the ASCII symbol set
fn render_plain(repo: &TestRepo, extra_config: &str, args: &[&str]) -> String {
    repo.write_config(&format!("{ASCII_SYMBOLS}\n{extra_config}"));
    let output = repo
        .promptline()
        .args(["--color", "never"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    stdout(&output)
}

#[test]
fn test_clean_branch() {
    let repo = TestRepo::with_commit();
    assert_prompt_snapshot!(render_plain(&repo, "", &[]), @r#"" ~/repo > main >\n$ ""#);
}

#[test]
fn test_render_subcommand_matches_default() {
    let repo = TestRepo::with_commit();
    assert_eq!(
        render_plain(&repo, "", &["render"]),
        render_plain(&repo, "", &[])
    );
}

#[test]
fn test_detached_head_shows_short_hash() {
    let repo = TestRepo::with_commit();
    let sha = repo.git(&["rev-parse", "HEAD"]);
    repo.git(&["checkout", "--detach", "HEAD"]);

    let out = render_plain(&repo, r#"segments = ["git"]"#, &[]);
    assert_eq!(out, format!(" {} >\n$ ", &sha[..7]));
}

#[test]
fn test_merge_in_progress() {
    let repo = TestRepo::with_commit();
    repo.git(&["checkout", "-b", "feature"]);
    repo.write_file("other.txt", "feature work");
    repo.git(&["add", "other.txt"]);
    repo.git(&["commit", "-m", "Feature"]);
    repo.git(&["checkout", "main"]);
    repo.git(&["merge", "--no-ff", "--no-commit", "feature"]);

    let out = render_plain(&repo, r#"segments = ["git"]"#, &[]);
    assert_prompt_snapshot!(out, @r#"" main (merging feature) >\n$ ""#);
}

#[rstest]
#[case::upstream_only(&[], "main → origin")]
#[case::push_refspec(
    &[("remote.origin.push", "refs/heads/main:refs/heads/release")],
    "main → origin/release"
)]
#[case::push_default_named(&[("push.default", "deploy")], "main → origin/deploy")]
#[case::push_default_simple(&[("push.default", "simple")], "main → origin")]
fn test_remote_target(#[case] extra: &[(&str, &str)], #[case] expected: &str) {
    let repo = TestRepo::with_commit();
    repo.git(&["config", "branch.main.remote", "origin"]);
    for (key, value) in extra {
        repo.git(&["config", key, value]);
    }

    let out = render_plain(&repo, r#"segments = ["git"]"#, &[]);
    assert_eq!(out, format!(" {expected} >\n$ "));
}

#[test]
fn test_linked_worktree_reads_shared_config() {
    let repo = TestRepo::with_commit();
    repo.git(&["config", "branch.feature.remote", "origin"]);
    let worktree = repo.add_worktree("wt", "feature");

    repo.write_config(&format!("{ASCII_SYMBOLS}\nsegments = [\"cwd\", \"git\"]"));
    let output = repo
        .promptline_in(&worktree)
        .args(["--color", "never"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), " ~/wt > feature → origin >\n$ ");
}

#[test]
fn test_git_dir_override() {
    let repo = TestRepo::with_commit();
    repo.write_config(&format!("{ASCII_SYMBOLS}\nsegments = [\"git\"]"));

    // Rendered from outside the repository, found only through GIT_DIR
    let outside = repo.home_path();
    let output = repo
        .promptline_in(&outside)
        .args(["--color", "never"])
        .env("GIT_DIR", repo.root_path().join(".git"))
        .output()
        .unwrap();
    assert_prompt_snapshot!(stdout(&output), @r#"" main >\n$ ""#);
}

#[test]
fn test_relative_git_dir_resolves_against_process_cwd() {
    let repo = TestRepo::with_commit();
    repo.write_config(&format!("{ASCII_SYMBOLS}\nsegments = [\"git\"]"));
    let outside = repo.home_path().join("elsewhere");
    std::fs::create_dir(&outside).unwrap();

    let output = repo
        .promptline()
        .args(["--color", "never", "--cwd", outside.to_str().unwrap()])
        .env("GIT_DIR", ".git")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_prompt_snapshot!(stdout(&output), @r#"" main >\n$ ""#);
}

#[test]
fn test_staged_changes_color_dirty() {
    let repo = TestRepo::with_commit();
    repo.write_config(&format!("{ASCII_SYMBOLS}\nsegments = [\"git\"]"));

    let clean = stdout(&repo.promptline().output().unwrap());
    assert!(clean.contains("\u{1b}[42m"), "expected green: {clean:?}");

    repo.write_file("file.txt", "changed");
    repo.git(&["add", "file.txt"]);
    let dirty = stdout(&repo.promptline().output().unwrap());
    assert!(dirty.contains("\u{1b}[43m"), "expected yellow: {dirty:?}");
    assert_eq!(dirty.ansi_strip(), " main >\n$ ");

    // With the index check off, staged changes are not looked at
    repo.write_config(&format!(
        "{ASCII_SYMBOLS}\nsegments = [\"git\"]\nindex_enabled = false"
    ));
    let unchecked = stdout(&repo.promptline().output().unwrap());
    assert!(unchecked.contains("\u{1b}[42m"), "expected green: {unchecked:?}");
}

#[test]
fn test_package_segment() {
    let repo = TestRepo::with_commit();
    repo.write_file("package.json", r#"{"name": "web", "version": "2.0.1"}"#);
    let sub = repo.root_path().join("src");
    std::fs::create_dir(&sub).unwrap();

    repo.write_config(&format!("{ASCII_SYMBOLS}\nsegments = [\"package\", \"git\"]"));
    let output = repo
        .promptline_in(&sub)
        .args(["--color", "never"])
        .output()
        .unwrap();
    assert_prompt_snapshot!(stdout(&output), @r#"" web@2.0.1 > main >\n$ ""#);
}

#[test]
fn test_outside_any_repository() {
    let repo = TestRepo::new();
    let outside = repo.home_path().join("plain");
    std::fs::create_dir(&outside).unwrap();

    repo.write_config(ASCII_SYMBOLS);
    let output = repo
        .promptline_in(&outside)
        .args(["--color", "never"])
        .output()
        .unwrap();
    assert_prompt_snapshot!(stdout(&output), @r#"" ~/plain >\n$ ""#);
}

#[test]
fn test_cwd_flag() {
    let repo = TestRepo::with_commit();
    let outside = repo.home_path().join("elsewhere");
    std::fs::create_dir(&outside).unwrap();

    let out = render_plain(&repo, "", &["--cwd", outside.to_str().unwrap()]);
    assert_prompt_snapshot!(out, @r#"" ~/elsewhere >\n$ ""#);
}

#[test]
fn test_relative_cwd_flag() {
    let repo = TestRepo::with_commit();
    let sub = repo.root_path().join("src");
    std::fs::create_dir(&sub).unwrap();

    repo.write_config(&format!("{ASCII_SYMBOLS}\nsegments = [\"cwd\", \"git\"]"));
    let output = repo
        .promptline_in(&sub)
        .args(["--color", "never", "--cwd", "."])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_prompt_snapshot!(stdout(&output), @r#"" ~/repo/src > main >\n$ ""#);
}

#[test]
fn test_admin_segment() {
    let repo = TestRepo::with_commit();
    repo.write_config(&format!("{ASCII_SYMBOLS}\nsegments = [\"admin\", \"git\"]"));
    let output = repo
        .promptline()
        .args(["--color", "never"])
        .env("PROMPTLINE_IS_ADMIN", "1")
        .output()
        .unwrap();
    assert_prompt_snapshot!(stdout(&output), @r#"" ADMIN > main >\n$ ""#);
}

#[test]
fn test_previous_prompt_supplies_path_and_env() {
    let repo = TestRepo::with_commit();
    let out = render_plain(
        &repo,
        r#"segments = ["cwd"]"#,
        &["--previous-prompt", "(venv) /opt/project $ "],
    );
    assert_prompt_snapshot!(out, @r#"" /opt/project >\n$ (venv) ""#);
}

#[test]
fn test_empty_segments_prints_marker_only() {
    let repo = TestRepo::with_commit();
    assert_prompt_snapshot!(render_plain(&repo, "segments = []", &[]), @r#""$ ""#);
}

#[test]
fn test_date_time_right_aligned() {
    let repo = TestRepo::with_commit();
    let config = "segments = [\"git\"]\ndate_time_enabled = true";

    let out = render_plain(&repo, config, &["--width", "30"]);
    let bar = out.lines().next().unwrap();
    assert_eq!(bar, format!(" main >{}00:00:00", " ".repeat(30 - 7 - 8)));

    // Unknown width drops the clock
    assert_eq!(render_plain(&repo, config, &[]), " main >\n$ ");
    assert_eq!(
        render_plain(&repo, config, &["--width", "30", "--no-date-time"]),
        " main >\n$ "
    );
}

#[test]
fn test_columns_env_supplies_width() {
    let repo = TestRepo::with_commit();
    repo.write_config(&format!(
        "{ASCII_SYMBOLS}\nsegments = [\"git\"]\ndate_time_enabled = true\ndate_time_format = \"%Y\""
    ));
    let output = repo
        .promptline()
        .args(["--color", "never"])
        .env("COLUMNS", "20")
        .output()
        .unwrap();
    assert_eq!(stdout(&output), format!(" main >{}2024\n$ ", " ".repeat(20 - 7 - 4)));
}

#[test]
fn test_env_overrides_config_file() {
    let repo = TestRepo::with_commit();
    repo.write_config(ASCII_SYMBOLS);
    let output = repo
        .promptline()
        .args(["--color", "never"])
        .env("PROMPTLINE_SEGMENTS", "git")
        .env("PROMPTLINE_SYMBOLS__PROMPT", "%")
        .output()
        .unwrap();
    assert_prompt_snapshot!(stdout(&output), @r#"" main >\n% ""#);
}

#[test]
fn test_unknown_color_fails() {
    let repo = TestRepo::with_commit();
    repo.write_config(&format!(
        "{ASCII_SYMBOLS}\n[colors.git_clean]\nfg = \"black\"\nbg = \"chartreuse\""
    ));
    let output = repo
        .promptline()
        .args(["--color", "never"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("chartreuse"), "{}", stderr(&output));
}

#[test]
fn test_palette_entries() {
    let repo = TestRepo::with_commit();
    repo.write_config(&format!(
        "{ASCII_SYMBOLS}\nsegments = [\"git\"]\n[palette]\nmoss = \"#4a7a3a\"\n[colors.git_clean]\nfg = \"white\"\nbg = \"moss\""
    ));
    let out = stdout(&repo.promptline().output().unwrap());
    assert!(out.contains("\u{1b}[48;2;74;122;58m"), "{out:?}");
}

#[test]
fn test_invalid_config_file_fails() {
    let repo = TestRepo::with_commit();
    repo.write_config("segments = [\"nonsense\"]");
    let output = repo.promptline().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load config"));
}

#[test]
fn test_verbose_logs_git_commands() {
    let repo = TestRepo::with_commit();
    repo.write_config(&format!("{ASCII_SYMBOLS}\nsegments = [\"git\"]"));
    let output = repo
        .promptline()
        .args(["--color", "never", "-v"])
        .output()
        .unwrap();
    assert_eq!(stdout(&output), " main >\n$ ");
    assert!(stderr(&output).contains("diff-index"), "{}", stderr(&output));
}
