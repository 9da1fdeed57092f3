use dm_core::{DecisionHistory, DecisionResult, ResultMask};

/// Patrol failed early, then succeeded later.
fn patrol_history() -> DecisionHistory {
    let mut history = DecisionHistory::new();
    history.begin("Patrol", 1.0);
    history.finish(5.0, DecisionResult::Failed);
    history.begin("Patrol", 10.0);
    history.finish(15.0, DecisionResult::Succeeded);
    history
}

#[test]
fn records_are_most_recent_first() {
    let history = patrol_history();

    let results: Vec<DecisionResult> = history.records().map(|r| r.result).collect();
    assert_eq!(
        results,
        vec![DecisionResult::Succeeded, DecisionResult::Failed]
    );
    assert_eq!(history.len(), 2);
}

#[test]
fn time_since_started_finds_the_most_recent_match() {
    let history = patrol_history();
    let mask = ResultMask::SUCCEEDED | ResultMask::FAILED;

    assert_eq!(history.time_since_started(20.0, "Patrol", mask), 10.0);
}

#[test]
fn result_mask_filters_matches() {
    let history = patrol_history();

    // Only the failed attempt matches, so the older record wins.
    assert_eq!(
        history.time_since_started(20.0, "Patrol", ResultMask::FAILED),
        19.0
    );
    assert_eq!(
        history.time_since_ended(20.0, "Patrol", ResultMask::FAILED),
        15.0
    );
}

#[test]
fn current_record_is_checked_first_for_started() {
    let mut history = patrol_history();
    history.begin("Patrol", 18.0);

    assert_eq!(
        history.time_since_started(20.0, "Patrol", ResultMask::IN_PROGRESS),
        2.0
    );
    // The in-flight record does not match a succeeded query; the scan falls through to the log.
    assert_eq!(
        history.time_since_started(20.0, "Patrol", ResultMask::SUCCEEDED),
        10.0
    );
}

#[test]
fn time_since_ended_ignores_the_current_record() {
    let mut history = DecisionHistory::new();
    history.begin("Scout", 3.0);

    assert_eq!(
        history.time_since_ended(10.0, "Scout", ResultMask::IN_PROGRESS),
        -1.0
    );
}

#[test]
fn no_match_returns_the_sentinel() {
    let history = patrol_history();
    let mask = ResultMask::SUCCEEDED | ResultMask::FAILED;

    assert_eq!(history.time_since_started(20.0, "Flee", mask), -1.0);
    assert_eq!(
        history.time_since_started(20.0, "Patrol", ResultMask::NONE),
        -1.0
    );
    assert_eq!(history.time_since_ended(20.0, "Flee", mask), -1.0);
}

#[test]
fn finish_resets_the_current_record() {
    let mut history = DecisionHistory::new();
    history.begin("Patrol", 2.0);
    assert!(history.current().in_progress());

    history.finish(4.0, DecisionResult::Aborted);

    assert!(!history.current().in_progress());
    assert!(history.current().option_name.is_empty());
    let front = history.records().next().expect("one record");
    assert_eq!(front.option_name, "Patrol");
    assert_eq!(front.started, 2.0);
    assert_eq!(front.ended, 4.0);
    assert_eq!(front.result, DecisionResult::Aborted);
}

#[test]
fn record_log_is_bounded() {
    let mut history = DecisionHistory::with_max_records(2);
    for i in 0..4 {
        history.begin("Patrol", i as f32);
        history.finish(i as f32 + 0.5, DecisionResult::Succeeded);
    }

    assert_eq!(history.len(), 2);
    // Newest first, oldest records dropped.
    let started: Vec<f32> = history.records().map(|r| r.started).collect();
    assert_eq!(started, vec![3.0, 2.0]);
}

#[test]
fn result_flags_compose() {
    let mask = ResultMask::SUCCEEDED | ResultMask::ABORTED;

    assert!(mask.contains(DecisionResult::Succeeded));
    assert!(mask.contains(DecisionResult::Aborted));
    assert!(!mask.contains(DecisionResult::Failed));
    assert!(!mask.contains(DecisionResult::InProgress));

    let collected: ResultMask = [DecisionResult::Succeeded, DecisionResult::Aborted]
        .into_iter()
        .collect();
    assert_eq!(collected, mask);
}

#[test]
fn record_started_at_time_zero_counts_as_in_progress() {
    let mut history = DecisionHistory::new();
    history.begin("Patrol", 0.0);

    assert!(history.current().in_progress());
}
