//! Switch scenarios against the `bunch-project` fixture tree
//!
//! The fixture is copied into a temporary git repository before each test,
//! so the checked-in tree is never modified.

use bunch_core::{ChangeKind, Error, GitRecorder, SwitchConfig, switch};
use bunch_fs::NormalizedPath;
use bunch_test_utils::git::{head_blob, head_contains, head_message};
use bunch_test_utils::repo::TestRepo;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../test-fixtures/repos/bunch-project");

fn copy_tree(from: &Path, to: &Path) {
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            fs::create_dir_all(&target).unwrap();
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Fixture copy with one commit holding the whole tree.
fn fixture_repo() -> (TestRepo, git2::Repository) {
    let repo = TestRepo::new();
    copy_tree(Path::new(FIXTURE), repo.root());
    let git = repo.init_git();
    (repo, git)
}

#[test]
fn test_switch_to_prod_through_history() {
    let (repo, git) = fixture_repo();

    let report = switch(&SwitchConfig::new(repo.root(), "prod"), &GitRecorder::new()).unwrap();

    // .bunch: current dev, stored rule prod_staging
    assert_eq!(report.rule.to_string(), "dev_staging_prod");

    // staging outranks prod
    assert_eq!(
        repo.read("src/app.conf"),
        "endpoint = \"https://staging.example.com\"\n"
    );
    assert_eq!(repo.read("src/app.conf.dev"), "endpoint = \"http://localhost:8080\"\n");

    // blank prod patch deletes the origin, keeping the dev copy
    repo.assert_file_not_exists("src/legacy.txt");
    assert_eq!(repo.read("src/legacy.txt.dev"), "debug helpers\n");

    // new file with no dev counterpart
    assert_eq!(repo.read("src/logging.toml"), "log_level = \"warn\"\n");
    repo.assert_file_not_exists("src/logging.toml.dev");

    // not part of the rule, and generated output is left alone
    repo.assert_file_not_exists("src/feature.toml");
    repo.assert_file_not_exists("build/resources/main/app.conf");

    let canonical = |rel: &str| NormalizedPath::new(repo.canonical(rel));
    let changes = &report.changes;
    assert_eq!(changes.len(), 5);
    assert!(changes.contains(ChangeKind::Modify, &canonical("src/app.conf")));
    assert!(changes.contains(ChangeKind::Add, &canonical("src/app.conf.dev")));
    assert!(changes.contains(ChangeKind::Remove, &canonical("src/legacy.txt")));
    assert!(changes.contains(ChangeKind::Add, &canonical("src/legacy.txt.dev")));
    assert!(changes.contains(ChangeKind::Add, &canonical("src/logging.toml")));

    assert_eq!(head_message(&git), "==== switch prod ====");
    assert!(!head_contains(&git, "src/legacy.txt"));
    assert!(head_contains(&git, "src/legacy.txt.dev"));
    assert_eq!(
        head_blob(&git, "src/app.conf"),
        "endpoint = \"https://staging.example.com\"\n"
    );
}

#[test]
fn test_switch_to_qa_single_suffix_rule() {
    let (repo, git) = fixture_repo();

    let report = switch(&SwitchConfig::new(repo.root(), "qa"), &GitRecorder::new()).unwrap();

    assert_eq!(report.rule.to_string(), "dev_qa");
    assert_eq!(repo.read("src/feature.toml"), "qa = true\n");
    assert_eq!(report.changes.len(), 1);
    assert_eq!(head_message(&git), "==== switch qa ====");
}

#[test]
fn test_repeat_switch_is_rejected_and_not_committed() {
    let (repo, git) = fixture_repo();
    let config = SwitchConfig::new(repo.root(), "dev_prod");

    switch(&config, &GitRecorder::new()).unwrap();
    let head = git.head().unwrap().peel_to_commit().unwrap().id();

    let err = switch(&config, &GitRecorder::new()).unwrap_err();
    assert!(matches!(err, Error::Collision { .. }));
    assert_eq!(git.head().unwrap().peel_to_commit().unwrap().id(), head);
}

#[test]
fn test_dry_run_matches_later_switch() {
    let (repo, _git) = fixture_repo();

    let dry = switch(
        &SwitchConfig::new(repo.root(), "prod").with_dry_run(true),
        &GitRecorder::new(),
    )
    .unwrap();
    let real = switch(&SwitchConfig::new(repo.root(), "prod"), &GitRecorder::new()).unwrap();

    assert_eq!(dry.origins, real.origins);
    let json = serde_json::to_value(&dry).unwrap();
    assert_eq!(json["changes"], serde_json::json!([]));
}
