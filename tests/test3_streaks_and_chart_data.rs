use approx::assert_relative_eq;
use crazy_golf::controller::score::{
    bounce_back, box_plot_stats, cumulative_scores, longest_streaks, quartiles, score_frequency,
    segment_averages,
};

#[test]
fn test3_longest_streaks() {
    let record = longest_streaks("A", &[1, 1, 4, 4, 4, 3, 2, 2, 2, 2]);
    assert_eq!(record.longest_good_streak, 4);
    assert_eq!(record.longest_bad_streak, 3);

    let neutral = longest_streaks("B", &[3, 3, 3]);
    assert_eq!(neutral.longest_good_streak, 0);
    assert_eq!(neutral.longest_bad_streak, 0);
}

#[test]
fn test3_bounce_back() {
    let bounce = bounce_back("A", &[5, 2, 5, 1]);
    assert_relative_eq!(bounce.after_bad.expect("two bad holes are followed"), 1.5);
    assert_relative_eq!(bounce.after_good.expect("one good hole is followed"), 5.0);

    // the last hole has nothing after it
    let last_only = bounce_back("B", &[3, 3, 6]);
    assert_eq!(last_only.after_bad, None);
    assert_eq!(last_only.after_good, None);
    assert_relative_eq!(last_only.after_bad_or_zero(), 0.0);
}

#[test]
fn test3_frequency_buckets() {
    let frequency = score_frequency("A", &[1, 2, 2, 7, 9]);
    assert_eq!(frequency.counts, [1, 2, 0, 0, 0, 0, 2]);

    let six = score_frequency("B", &[6, 0, -1]);
    assert_eq!(six.counts, [0, 0, 0, 0, 0, 1, 0]);
}

#[test]
fn test3_cumulative_totals() {
    let cumulative = cumulative_scores("A", &[2, 3, 1, 4]);
    assert_eq!(cumulative.running_totals, vec![2, 5, 6, 10]);
}

#[test]
fn test3_segment_averages() {
    let full: Vec<i32> = (1..=18).collect();
    let segments = segment_averages("A", &full).segments;
    assert_relative_eq!(segments[0].expect("holes 1-6"), 3.5);
    assert_relative_eq!(segments[1].expect("holes 7-12"), 9.5);
    assert_relative_eq!(segments[2].expect("holes 13-18"), 15.5);

    let short = segment_averages("B", &[2; 10]).segments;
    assert!(short[1].is_some());
    assert_eq!(short[2], None);
}

#[test]
fn test3_quartiles_and_outliers() {
    let q = quartiles(&[5, 1, 3, 2, 4]).expect("non-empty");
    assert_relative_eq!(q.min, 1.0);
    assert_relative_eq!(q.q1, 2.0);
    assert_relative_eq!(q.median, 3.0);
    assert_relative_eq!(q.q3, 4.0);
    assert_relative_eq!(q.max, 5.0);

    let even = quartiles(&[1, 2, 3, 4]).expect("non-empty");
    assert_relative_eq!(even.median, 2.5);

    let stats = box_plot_stats("A", &[1, 2, 3, 4, 20]).expect("non-empty");
    assert_eq!(stats.outliers, vec![20.0]);
    assert_relative_eq!(stats.whisker_high, 4.0);
    assert_relative_eq!(stats.whisker_low, 1.0);

    assert!(quartiles(&[]).is_none());
}
