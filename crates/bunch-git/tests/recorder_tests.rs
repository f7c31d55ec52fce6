//! Tests for committing change sets through git2

use bunch_fs::NormalizedPath;
use bunch_git::{ChangeKind, ChangeRecorder, ChangeSet, GitRecorder};
use bunch_test_utils::git::{head_blob, head_contains, head_message};
use bunch_test_utils::repo::TestRepo;
use pretty_assertions::assert_eq;
use std::fs;

fn norm(repo: &TestRepo, rel: &str) -> NormalizedPath {
    NormalizedPath::new(repo.canonical(rel))
}

#[test]
fn test_record_commits_add_modify_and_remove() {
    let repo = TestRepo::new();
    repo.write("keep.txt", "old");
    repo.write("drop.txt", "bye");
    let git = repo.init_git();

    repo.write("keep.txt", "new");
    repo.write("keep.txt.base", "old");
    fs::remove_file(repo.path("drop.txt")).unwrap();

    let mut changes = ChangeSet::new();
    changes.insert(ChangeKind::Modify, norm(&repo, "keep.txt"));
    changes.insert(ChangeKind::Add, norm(&repo, "keep.txt.base"));
    changes.insert(ChangeKind::Remove, norm(&repo, "drop.txt"));

    let root = NormalizedPath::new(repo.root());
    let id = GitRecorder::new()
        .record(&root, &changes, "==== switch dev ====")
        .unwrap();

    assert!(id.is_some());
    assert_eq!(head_message(&git), "==== switch dev ====");
    assert_eq!(head_blob(&git, "keep.txt"), "new");
    assert_eq!(head_blob(&git, "keep.txt.base"), "old");
    assert!(!head_contains(&git, "drop.txt"));
}

#[test]
fn test_record_parents_on_previous_head() {
    let repo = TestRepo::new();
    repo.write("a.txt", "a");
    let git = repo.init_git();
    let before = git.head().unwrap().peel_to_commit().unwrap().id();

    repo.write("b.txt", "b");
    let mut changes = ChangeSet::new();
    changes.insert(ChangeKind::Add, norm(&repo, "b.txt"));

    GitRecorder::new()
        .record(&NormalizedPath::new(repo.root()), &changes, "second")
        .unwrap();

    let head = git.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.parent_count(), 1);
    assert_eq!(head.parent_id(0).unwrap(), before);
}

#[test]
fn test_record_on_unborn_branch_creates_root_commit() {
    let repo = TestRepo::new();
    let git = bunch_test_utils::git::real_git_repo(repo.root());
    repo.write("first.txt", "1");

    let mut changes = ChangeSet::new();
    changes.insert(ChangeKind::Add, norm(&repo, "first.txt"));

    GitRecorder::new()
        .record(&NormalizedPath::new(repo.root()), &changes, "root")
        .unwrap();

    let head = git.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.parent_count(), 0);
    assert!(head_contains(&git, "first.txt"));
}

#[test]
fn test_record_empty_change_set_does_not_commit() {
    let repo = TestRepo::new();
    repo.write("a.txt", "a");
    let git = repo.init_git();
    let before = git.head().unwrap().peel_to_commit().unwrap().id();

    let id = GitRecorder::new()
        .record(&NormalizedPath::new(repo.root()), &ChangeSet::new(), "noop")
        .unwrap();

    assert!(id.is_none());
    assert_eq!(git.head().unwrap().peel_to_commit().unwrap().id(), before);
}

#[test]
fn test_record_outside_repository_fails() {
    let repo = TestRepo::new();
    let mut changes = ChangeSet::new();
    changes.insert(ChangeKind::Add, norm(&repo, "x.txt"));

    let result = GitRecorder::new().record(&NormalizedPath::new(repo.root()), &changes, "t");
    assert!(result.is_err());
}
