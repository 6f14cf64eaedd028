mod common;

use chrono::{DateTime, Duration, FixedOffset};
use common::{has_git, TestRepo, EMAIL, NOW};
use gitcal::calendar::Grid;
use gitcal::error::GitcalError;
use gitcal::git::GitRepo;
use gitcal::render::{Calendar, Shade, RESET};
use gitcal::stats::{collect_buckets, Collected};
use gitcal::util::Today;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn today() -> Today {
    Today::from_arg(Some(NOW)).unwrap()
}

fn days_ago(days: i64) -> String {
    let now: DateTime<FixedOffset> = DateTime::parse_from_rfc3339(NOW).unwrap();
    (now - Duration::days(days)).to_rfc3339()
}

fn collect(repos: Vec<PathBuf>, months: u32) -> Collected {
    collect_buckets(&repos, EMAIL, months, today()).unwrap()
}

fn render(collected: &Collected, months: u32) -> String {
    let grid = Grid::build(&collected.buckets);
    Calendar::new(&grid, months, today()).to_string()
}

/// Numbers shown in the grid cells, skipping the month header.
fn rendered_counts(out: &str) -> Vec<u32> {
    out.lines()
        .skip(1)
        .flat_map(|line| line.split(RESET))
        .filter_map(|cell| cell.rsplit('m').next())
        .filter_map(|glyph| glyph.trim().parse().ok())
        .collect()
}

#[test]
fn commit_made_today_lights_the_today_cell() {
    if !has_git() {
        return;
    }
    let repo = TestRepo::init();
    repo.commit(NOW);
    repo.commit_as("someone-else@example.com", NOW);

    let collected = collect(vec![repo.path().to_path_buf()], 6);
    assert!(collected.skipped.is_empty());
    assert_eq!(collected.buckets.total(), 1);
    // Wednesday: zero days back plus an alignment of four.
    assert_eq!(collected.buckets.get(4), Some(1));

    let out = render(&collected, 6);
    assert_eq!(out.matches(Shade::Today.escape()).count(), 1);
    assert!(out.contains(&format!("{} 1 {RESET}", Shade::Today.escape())));
    assert_eq!(rendered_counts(&out), vec![1]);
    assert_eq!(out.matches(Shade::Low.escape()).count(), 0);
}

#[test]
fn commits_past_the_window_are_excluded() {
    if !has_git() {
        return;
    }
    let repo = TestRepo::init();
    for days in [40, 40, 20, 20, 10, 10] {
        repo.commit(&days_ago(days));
    }

    let collected = collect(vec![repo.path().to_path_buf()], 1);
    let buckets = &collected.buckets;
    assert_eq!(buckets.max_days(), 30);
    assert_eq!(buckets.get(14), Some(2));
    assert_eq!(buckets.get(24), Some(2));
    assert_eq!(buckets.total(), 4);

    let grid = Grid::build(buckets);
    assert_eq!(grid.count(2, 0), 2);
    assert_eq!(grid.count(3, 3), 2);

    let out = render(&collected, 1);
    assert_eq!(rendered_counts(&out).iter().sum::<u32>(), 4);
    assert_eq!(out.matches(Shade::Low.escape()).count(), 2);
}

#[test]
fn shared_history_is_counted_once() {
    if !has_git() {
        return;
    }
    let repo = TestRepo::init();
    for _ in 0..5 {
        repo.commit(&days_ago(2));
    }
    repo.branch("feature");
    repo.commit(&days_ago(2));
    repo.commit(&days_ago(2));
    repo.checkout_previous();
    repo.commit(&days_ago(2));

    let collected = collect(vec![repo.path().to_path_buf()], 1);
    assert_eq!(collected.buckets.total(), 8);
    assert_eq!(collected.buckets.get(6), Some(8));
}

#[test]
fn missing_repository_is_skipped_and_reported() {
    if !has_git() {
        return;
    }
    let repo = TestRepo::init();
    repo.commit(&days_ago(3));
    let missing = repo.path().join("does-not-exist");

    let collected = collect(vec![missing.clone(), repo.path().to_path_buf()], 1);
    assert_eq!(collected.skipped.len(), 1);
    let (path, err) = &collected.skipped[0];
    assert_eq!(path, &missing);
    assert!(matches!(err, GitcalError::RepositoryOpen(_)));
    assert_eq!(collected.buckets.total(), 1);

    let out = render(&collected, 1);
    assert_eq!(out.lines().count(), 8);
}

#[test]
fn only_missing_repositories_render_an_empty_grid() {
    let collected = collect(vec![PathBuf::from("/definitely/not/a/repo")], 1);
    assert_eq!(collected.skipped.len(), 1);
    assert_eq!(collected.buckets.total(), 0);

    let out = render(&collected, 1);
    assert!(rendered_counts(&out).is_empty());
    assert_eq!(out.matches(Shade::Today.escape()).count(), 1);
}

#[test]
fn repeated_runs_render_identically() {
    if !has_git() {
        return;
    }
    let repo = TestRepo::init();
    for days in [0, 1, 1, 5, 33, 90] {
        repo.commit(&days_ago(days));
    }
    let repos = vec![repo.path().to_path_buf()];

    let first = render(&collect(repos.clone(), 3), 3);
    let second = render(&collect(repos, 3), 3);
    assert_eq!(first, second);
}

#[test]
fn unwalkable_branches_are_skipped() {
    if !has_git() {
        return;
    }
    let repo = TestRepo::init();
    repo.commit(NOW);
    repo.commit(NOW);
    let heads = repo.path().join(".git").join("refs").join("heads");
    fs::write(heads.join("broken"), "1234567890123456789012345678901234567890\n").unwrap();
    fs::write(heads.join("garbage"), "not a ref at all\n").unwrap();

    let collected = collect(vec![repo.path().to_path_buf()], 1);
    assert!(collected.skipped.is_empty());
    assert_eq!(collected.buckets.total(), 2);
}

#[test]
fn extractor_keeps_only_the_target_author() {
    if !has_git() {
        return;
    }
    let repo = TestRepo::init();
    repo.commit(&days_ago(1));
    repo.commit_as("other@example.com", &days_ago(1));
    repo.commit(&days_ago(4));

    let commits = GitRepo::open(repo.path())
        .unwrap()
        .authored_commits(EMAIL)
        .unwrap();
    assert_eq!(commits.len(), 2);
    assert!(commits.iter().all(|c| c.author_email == EMAIL));
    assert!(commits.iter().all(|c| c.id.len() == 40));
    assert_ne!(commits[0].id, commits[1].id);
}
