//! Tests for get-assignment: confirmation, clone-or-pull and failure isolation

mod support;

use classroom::commands::get::{FetchOutcome, fetch_repositories};
use classroom::commands::{Command, GetAssignmentCommand};
use classroom::error::{ClassroomError, classify};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use support::*;
use tempfile::TempDir;

fn classroom() -> FakeHosting {
    FakeHosting::new()
        .with_repository("2425-hw1-group01")
        .with_repository("2425-hw1-group02")
        .with_repository("2425-final-group01")
}

fn command(directory: &Path) -> GetAssignmentCommand {
    GetAssignmentCommand {
        classroom: "cs101".to_string(),
        prefix: "hw1".to_string(),
        directory: directory.to_path_buf(),
    }
}

#[tokio::test]
async fn test_clones_missing_and_pulls_existing() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("2425-hw1-group02")).unwrap();

    let hosting = Arc::new(classroom());
    let vcs = Arc::new(FakeVcs::new());
    let prompt = Arc::new(RecordingPrompt::new(true));

    command(temp_dir.path())
        .execute(&context(&hosting, &vcs, &prompt))
        .await
        .unwrap();

    assert_eq!(
        vcs.calls(),
        vec![
            VcsCall::Clone {
                full_name: "cs101/2425-hw1-group01".to_string(),
                target: temp_dir.path().join("2425-hw1-group01"),
            },
            VcsCall::Pull(temp_dir.path().join("2425-hw1-group02")),
        ]
    );
    assert_eq!(prompt.questions().len(), 1);
}

#[tokio::test]
async fn test_second_run_pulls_everything() {
    let temp_dir = TempDir::new().unwrap();
    let hosting = Arc::new(classroom());
    let vcs = Arc::new(FakeVcs::new());
    let prompt = Arc::new(RecordingPrompt::new(true));
    let context = context(&hosting, &vcs, &prompt);

    command(temp_dir.path()).execute(&context).await.unwrap();
    command(temp_dir.path()).execute(&context).await.unwrap();

    let pulls = vcs
        .calls()
        .into_iter()
        .filter(|call| matches!(call, VcsCall::Pull(_)))
        .count();
    assert_eq!(pulls, 2);
}

#[tokio::test]
async fn test_creates_missing_target_directory() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("submissions").join("hw1");

    let hosting = Arc::new(classroom());
    let vcs = Arc::new(FakeVcs::new());
    let prompt = Arc::new(RecordingPrompt::new(true));

    command(&target)
        .execute(&context(&hosting, &vcs, &prompt))
        .await
        .unwrap();

    assert!(target.is_dir());
    assert!(target.join("2425-hw1-group01").is_dir());
}

#[tokio::test]
async fn test_declined_does_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("hw1");

    let hosting = Arc::new(classroom());
    let vcs = Arc::new(FakeVcs::new());
    let prompt = Arc::new(RecordingPrompt::new(false));

    let error = command(&target)
        .execute(&context(&hosting, &vcs, &prompt))
        .await
        .unwrap_err();

    assert_eq!(classify(&error), Some(&ClassroomError::UserCancelled));
    assert!(vcs.calls().is_empty());
    assert!(!target.exists());
}

#[tokio::test]
async fn test_no_matching_repositories() {
    let temp_dir = TempDir::new().unwrap();
    let hosting = Arc::new(FakeHosting::new().with_repository("2425-final-group01"));
    let vcs = Arc::new(FakeVcs::new());
    let prompt = Arc::new(RecordingPrompt::new(true));

    command(temp_dir.path())
        .execute(&context(&hosting, &vcs, &prompt))
        .await
        .unwrap();

    assert!(prompt.questions().is_empty());
    assert!(vcs.calls().is_empty());
}

#[tokio::test]
async fn test_one_failure_does_not_stop_the_batch() {
    let temp_dir = TempDir::new().unwrap();
    let vcs = FakeVcs::new().with_failing("2425-hw1-group01");
    let names = vec![
        "2425-hw1-group01".to_string(),
        "2425-hw1-group02".to_string(),
    ];

    let outcomes = fetch_repositories(&vcs, "cs101", &names, temp_dir.path()).await;

    assert!(matches!(outcomes[0].1, FetchOutcome::Failed(_)));
    assert_eq!(outcomes[1].1, FetchOutcome::Cloned);
}

#[tokio::test]
async fn test_file_in_the_way_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("2425-hw1-group01"), "notes").unwrap();
    let vcs = FakeVcs::new();
    let names = vec![
        "2425-hw1-group01".to_string(),
        "2425-hw1-group02".to_string(),
    ];

    let outcomes = fetch_repositories(&vcs, "cs101", &names, temp_dir.path()).await;

    match &outcomes[0].1 {
        FetchOutcome::Failed(message) => {
            assert!(message.contains("exists and is not a directory"))
        }
        other => panic!("expected a failure, got {:?}", other),
    }
    assert_eq!(outcomes[1].1, FetchOutcome::Cloned);
    assert_eq!(
        vcs.calls(),
        vec![VcsCall::Clone {
            full_name: "cs101/2425-hw1-group02".to_string(),
            target: temp_dir.path().join("2425-hw1-group02"),
        }]
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("2425-hw1-group01")).unwrap(),
        "notes"
    );
}

#[tokio::test]
async fn test_partial_failure_still_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let hosting = Arc::new(classroom());
    let vcs = Arc::new(FakeVcs::new().with_failing("2425-hw1-group02"));
    let prompt = Arc::new(RecordingPrompt::new(true));

    let result = command(temp_dir.path())
        .execute(&context(&hosting, &vcs, &prompt))
        .await;

    assert!(result.is_ok());
    assert_eq!(vcs.calls().len(), 2);
}

#[tokio::test]
async fn test_all_failures_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let hosting = Arc::new(classroom());
    let vcs = Arc::new(
        FakeVcs::new()
            .with_failing("2425-hw1-group01")
            .with_failing("2425-hw1-group02"),
    );
    let prompt = Arc::new(RecordingPrompt::new(true));

    let error = command(temp_dir.path())
        .execute(&context(&hosting, &vcs, &prompt))
        .await
        .unwrap_err();

    assert!(error.to_string().contains("All fetch operations failed"));
}
