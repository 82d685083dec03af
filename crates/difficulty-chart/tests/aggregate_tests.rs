//! Tests for weighted averages, labels and window selection.

use difficulty_chart::{
    format_average, label_for_average, select_window, taxonomy, weighted_average, VoteHistogram,
    Window,
};

fn mixed_votes() -> VoteHistogram {
    VoteHistogram::from([
        ("Easy", 2),
        ("Easy +", 5),
        ("Medium -", 8),
        ("Medium", 12),
        ("Medium +", 6),
        ("Hard -", 3),
        ("Hard", 1),
    ])
}

// ============================================================================
// weighted_average tests
// ============================================================================

#[test]
fn test_mixed_histogram_average() {
    let avg = weighted_average(&mixed_votes());
    assert!((avg - 114.44 / 37.0).abs() < 1e-9);
    assert_eq!(label_for_average(avg), "Medium");
    assert_eq!(format_average(avg), "3.09");
}

#[test]
fn test_single_hell_vote() {
    let avg = weighted_average(&VoteHistogram::from([("Hell", 1)]));
    assert!((avg - 9.71).abs() < 1e-9);
    assert_eq!(label_for_average(avg), "Hell");
}

#[test]
fn test_unknown_names_are_ignored_everywhere() {
    let mut votes = mixed_votes();
    votes.insert("Impossible", 500);
    votes.insert("medium", 40);

    assert_eq!(weighted_average(&votes), weighted_average(&mixed_votes()));
    assert_eq!(select_window(&votes), select_window(&mixed_votes()));
}

#[test]
fn test_average_lies_within_voted_midpoints() {
    let votes = VoteHistogram::from([("Easy +", 3), ("Extreme", 7)]);
    let avg = weighted_average(&votes);
    assert!(avg > 2.06 && avg < 8.53);
}

#[test]
fn test_midpoint_average_labels_its_own_level() {
    for level in taxonomy::levels() {
        let votes = VoteHistogram::from([(level.name, 4)]);
        assert_eq!(label_for_average(weighted_average(&votes)), level.name);
    }
}

// ============================================================================
// select_window tests
// ============================================================================

#[test]
fn test_window_table() {
    let cases: Vec<(VoteHistogram, Window)> = vec![
        (
            VoteHistogram::from([("Medium", 5), ("Medium +", 3), ("Hard -", 2)]),
            Window::new(3, 7),
        ),
        (VoteHistogram::from([("Medium", 1)]), Window::new(2, 6)),
        (VoteHistogram::from([("Easy -", 1)]), Window::new(0, 4)),
        (VoteHistogram::from([("Hell", 1)]), Window::new(11, 15)),
        (
            VoteHistogram::from([("Easy -", 1), ("Extreme +", 1)]),
            Window::new(0, 15),
        ),
        (mixed_votes(), Window::new(0, 8)),
        (VoteHistogram::new(), Window::new(0, 4)),
    ];

    for (votes, expected) in cases {
        assert_eq!(select_window(&votes), expected, "votes: {:?}", votes);
    }
}

#[test]
fn test_window_always_covers_votes_and_minimum_size() {
    let levels = taxonomy::levels();
    for lo in 0..levels.len() {
        for hi in lo..levels.len() {
            let votes = VoteHistogram::from([(levels[lo].name, 1), (levels[hi].name, 2)]);
            let window = select_window(&votes);

            assert!(window.width() >= 5, "window {:?} too narrow", window);
            assert!(window.contains(lo) && window.contains(hi));
            assert!(window.max < levels.len());
        }
    }
}
