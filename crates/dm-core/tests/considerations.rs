use dm_core::{
    map_range_clamped, score_option, Consideration, DecisionContext, DecisionHistory,
    DecisionHistoryConsideration, DecisionResult, HistoryQueryTime, ResultMask, UtilityOption,
};

struct World;

fn context<'a>(
    world: &'a World,
    history: &'a DecisionHistory,
    now: f32,
) -> DecisionContext<'a, World> {
    DecisionContext {
        world,
        history,
        current_option: None,
        now,
    }
}

fn cooldown(option: &str) -> DecisionHistoryConsideration {
    DecisionHistoryConsideration::new(
        option,
        HistoryQueryTime::Ended,
        ResultMask::SUCCEEDED | ResultMask::FAILED,
    )
    .with_time_range(0.0, 30.0)
    .with_multiplier_range(0.0, 1.0)
}

#[test]
fn never_run_option_maps_to_the_far_end() {
    let history = DecisionHistory::new();
    let world = World;

    let score = cooldown("Patrol").score(&context(&world, &history, 100.0));

    assert_eq!(score.multiplier, 1.0);
    assert_eq!(score.addend, 0.0);
}

#[test]
fn just_finished_option_is_vetoed() {
    let mut history = DecisionHistory::new();
    history.begin("Patrol", 0.0);
    history.finish(5.0, DecisionResult::Succeeded);
    let world = World;

    // Elapsed 0 since the end maps to the bottom of the multiplier range: a full veto.
    let score = cooldown("Patrol").score(&context(&world, &history, 5.0));
    assert_eq!(score.multiplier, 0.0);

    let option = UtilityOption::new("Patrol").with_consideration(cooldown("Patrol"));
    let weight = score_option(&option, &context(&world, &history, 5.0)).weight;
    assert_eq!(weight, 0.0);
}

#[test]
fn elapsed_time_maps_linearly_between_the_ends() {
    let mut history = DecisionHistory::new();
    history.begin("Patrol", 0.0);
    history.finish(5.0, DecisionResult::Succeeded);
    let world = World;

    let score = cooldown("Patrol").score(&context(&world, &history, 20.0));

    // 15 seconds into a 30 second window.
    assert_eq!(score.multiplier, 0.5);
}

#[test]
fn query_time_selects_which_timestamp_is_measured() {
    let mut history = DecisionHistory::new();
    history.begin("Patrol", 10.0);
    history.finish(15.0, DecisionResult::Succeeded);
    let world = World;

    let since_started = DecisionHistoryConsideration::new(
        "Patrol",
        HistoryQueryTime::Started,
        ResultMask::SUCCEEDED,
    )
    .with_time_range(0.0, 20.0)
    .with_multiplier_range(0.0, 1.0)
    .score(&context(&world, &history, 20.0));

    let since_ended =
        DecisionHistoryConsideration::new("Patrol", HistoryQueryTime::Ended, ResultMask::SUCCEEDED)
            .with_time_range(0.0, 20.0)
            .with_multiplier_range(0.0, 1.0)
            .score(&context(&world, &history, 20.0));

    assert_eq!(since_started.multiplier, 0.5);
    assert_eq!(since_ended.multiplier, 0.25);
}

#[test]
fn unmatched_results_count_as_never_run() {
    let mut history = DecisionHistory::new();
    history.begin("Patrol", 0.0);
    history.finish(5.0, DecisionResult::Aborted);
    let world = World;

    // Only succeeded/failed are queried, so the aborted attempt does not suppress anything.
    let score = cooldown("Patrol").score(&context(&world, &history, 5.0));
    assert_eq!(score.multiplier, 1.0);
}

#[test]
fn description_is_carried() {
    let consideration = cooldown("Patrol").with_description("patrol cooldown");
    assert_eq!(
        Consideration::<World>::description(&consideration),
        "patrol cooldown"
    );
}

#[test]
fn map_range_clamps_at_both_ends() {
    assert_eq!(map_range_clamped((0.0, 10.0), (0.0, 1.0), -5.0), 0.0);
    assert_eq!(map_range_clamped((0.0, 10.0), (0.0, 1.0), 5.0), 0.5);
    assert_eq!(map_range_clamped((0.0, 10.0), (0.0, 1.0), 50.0), 1.0);
    assert_eq!(
        map_range_clamped((0.0, 10.0), (0.0, 1.0), f32::INFINITY),
        1.0
    );
}

#[test]
fn map_range_supports_reversed_output() {
    // Recently-run maps high, long-ago maps low.
    assert_eq!(map_range_clamped((0.0, 10.0), (1.0, 0.0), 0.0), 1.0);
    assert_eq!(map_range_clamped((0.0, 10.0), (1.0, 0.0), 10.0), 0.0);
}

#[test]
fn map_range_handles_a_degenerate_input_range() {
    assert_eq!(map_range_clamped((5.0, 5.0), (0.0, 1.0), 4.0), 0.0);
    assert_eq!(map_range_clamped((5.0, 5.0), (0.0, 1.0), 5.0), 1.0);
    assert_eq!(map_range_clamped((5.0, 5.0), (0.0, 1.0), 6.0), 1.0);
}
