//! Integration tests for aggregation and projection
#![allow(clippy::float_cmp)]

use grade_projector::core::models::{
    AggregateRecord, DifficultyTier, Goal, GradeEntry, PastRecord, Strategy,
};
use grade_projector::core::numeric::mul4;
use grade_projector::core::{aggregate, project, GradingScale, ProjectionError, Projector};

const AVERAGES: [f64; 5] = [4.25, 5.0, 6.7, 8.5, 9.95];
const PAST_CREDITS: [f64; 4] = [12.0, 30.0, 48.0, 137.5];
const FUTURE_CREDITS: [f64; 4] = [3.0, 18.0, 24.0, 60.0];

/// Every (points, past credits, future credits) combination of the grid
fn grid() -> Vec<(f64, f64, f64)> {
    let mut cases = Vec::new();
    for average in AVERAGES {
        for past in PAST_CREDITS {
            for future in FUTURE_CREDITS {
                cases.push((mul4(average, past), past, future));
            }
        }
    }
    cases
}

#[test]
fn test_end_to_end_fixture() {
    let past = PastRecord::Itemized(vec![
        GradeEntry::new(8.0, 24.0),
        GradeEntry::new(9.0, 24.0),
    ]);
    let totals = aggregate(&past).expect("fixture aggregates");
    assert_eq!(totals.total_points, 408.0);
    assert_eq!(totals.total_credits, 48.0);

    let result = Projector::new()
        .project_totals(totals, &Strategy::next_term(24.0), Some(Goal::new(9.0)))
        .expect("fixture projects");

    assert_eq!(result.current_average, 8.5);
    assert_eq!(result.credits_to_earn, 24.0);
    assert_eq!(result.total_credits, 72.0);
    assert_eq!(result.required_average, Some(10.0));
    assert_eq!(result.difficulty_tier, Some(DifficultyTier::HardGrind));
    assert!(result.is_goal_reachable);
    assert_eq!(result.max_possible_average, 9.0);
}

#[test]
fn test_quick_and_detailed_modes_agree() {
    let detailed = aggregate(&PastRecord::Itemized(vec![
        GradeEntry::new(8.0, 24.0),
        GradeEntry::new(9.0, 24.0),
    ]))
    .unwrap();
    let quick = aggregate(&PastRecord::Aggregate(AggregateRecord::new(8.5, 48.0))).unwrap();
    assert_eq!(detailed, quick);
}

#[test]
fn test_required_at_scale_max_is_not_impossible() {
    let result = project(408.0, 48.0, &Strategy::next_term(24.0), Some(Goal::new(9.0))).unwrap();
    assert_eq!(result.required_average, Some(10.0));
    assert_ne!(result.difficulty_tier, Some(DifficultyTier::Impossible));
}

#[test]
fn test_default_scenario_grid() {
    let result = project(408.0, 48.0, &Strategy::next_term(24.0), None).unwrap();
    assert_eq!(result.scenarios.len(), 31);
    assert_eq!(result.scenarios[0].assumed_average, 10.0);
    assert_eq!(result.scenarios[30].assumed_average, 4.0);
    assert!(result.scenarios.iter().any(|p| p.assumed_average == 9.6));
    assert!(result.scenarios.iter().any(|p| p.assumed_average == 7.2));
}

#[test]
fn test_current_average_matches_ratio() {
    for (points, past, future) in grid() {
        let result = project(points, past, &Strategy::next_term(future), None).unwrap();
        assert!(
            (result.current_average - points / past).abs() < 1e-4,
            "current {} vs {points}/{past}",
            result.current_average
        );
    }
}

#[test]
fn test_max_possible_is_at_least_current() {
    for (points, past, future) in grid() {
        let result = project(points, past, &Strategy::next_term(future), None).unwrap();
        assert!(result.max_possible_average >= result.current_average);
    }
}

#[test]
fn test_projected_average_is_monotone() {
    for (points, past, future) in grid() {
        let result = project(points, past, &Strategy::next_term(future), None).unwrap();
        // Scenarios run from the best assumed average down.
        for pair in result.scenarios.windows(2) {
            assert!(pair[0].assumed_average > pair[1].assumed_average);
            assert!(pair[0].projected_average >= pair[1].projected_average);
        }
    }
}

#[test]
fn test_projection_is_deterministic() {
    for (points, past, future) in grid() {
        let goal = Some(Goal::new(8.0));
        let first = project(points, past, &Strategy::to_completion(past + future), goal).unwrap();
        let second = project(points, past, &Strategy::to_completion(past + future), goal).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_strategies_share_a_horizon() {
    let next = project(408.0, 48.0, &Strategy::next_term(24.0), Some(Goal::new(8.8))).unwrap();
    let completion =
        project(408.0, 48.0, &Strategy::to_completion(72.0), Some(Goal::new(8.8))).unwrap();
    assert_eq!(next, completion);
}

#[test]
fn test_zero_past_credits_is_invalid() {
    assert_eq!(
        aggregate(&PastRecord::Aggregate(AggregateRecord::new(8.5, 0.0))),
        Err(ProjectionError::InvalidPastRecord)
    );
    assert_eq!(
        project(0.0, 0.0, &Strategy::next_term(24.0), None),
        Err(ProjectionError::InvalidPastRecord)
    );
}

#[test]
fn test_completion_below_past_credits_is_invalid() {
    assert_eq!(
        project(408.0, 48.0, &Strategy::to_completion(40.0), None),
        Err(ProjectionError::InvalidStrategyCredits {
            total_credits: 40.0,
            past_credits: 48.0,
        })
    );
}

#[test]
fn test_missing_future_credits_is_invalid() {
    let strategy = Strategy::NextTerm {
        future_credits: None,
    };
    assert_eq!(
        project(408.0, 48.0, &strategy, Some(Goal::new(9.0))),
        Err(ProjectionError::InvalidFutureCredits)
    );
}

#[test]
fn test_four_point_scale() {
    let scale = GradingScale::with_max(4.0);
    let result = Projector::with_scale(scale)
        .project(90.0, 30.0, &Strategy::next_term(15.0), Some(Goal::new(3.5)))
        .unwrap();
    // (3.5 * 45 - 90) / 15 = 4.5
    assert_eq!(result.required_average, Some(4.5));
    assert_eq!(result.difficulty_tier, Some(DifficultyTier::Impossible));
    assert!(!result.is_goal_reachable);
    // (90 + 60) / 45
    assert_eq!(result.max_possible_average, 3.3333);
    assert_eq!(result.scenarios[0].assumed_average, 4.0);
}
