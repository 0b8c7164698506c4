use super::*;

// =============================================================
// clamped_percent
// =============================================================

#[test]
fn percent_of_zero_total_is_zero() {
    assert_eq!(clamped_percent(5, 0), 0.0);
    assert_eq!(clamped_percent(5, -1), 0.0);
}

#[test]
fn percent_of_half_is_fifty() {
    assert_eq!(clamped_percent(6, 12), 50.0);
}

#[test]
fn percent_clamps_overshoot_to_hundred() {
    // The stats API can briefly report more completions than the quest pool
    // after a pool shrink.
    assert_eq!(clamped_percent(15, 12), 100.0);
}

#[test]
fn percent_clamps_negative_completed_to_zero() {
    assert_eq!(clamped_percent(-3, 12), 0.0);
}

// =============================================================
// bar_width_style
// =============================================================

#[test]
fn bar_width_style_rounds_to_whole_percent() {
    assert_eq!(bar_width_style(41.7), "width: 42%");
    assert_eq!(bar_width_style(0.0), "width: 0%");
    assert_eq!(bar_width_style(100.0), "width: 100%");
}

// =============================================================
// format_points
// =============================================================

#[test]
fn format_points_small_numbers_unchanged() {
    assert_eq!(format_points(0), "0");
    assert_eq!(format_points(999), "999");
}

#[test]
fn format_points_groups_thousands() {
    assert_eq!(format_points(1000), "1,000");
    assert_eq!(format_points(123_456), "123,456");
    assert_eq!(format_points(1_234_567), "1,234,567");
}

#[test]
fn format_points_handles_negative_totals() {
    assert_eq!(format_points(-1234), "-1,234");
}

// =============================================================
// rank_label
// =============================================================

#[test]
fn rank_label_prefixes_hash() {
    assert_eq!(rank_label(1), "#1");
    assert_eq!(rank_label(42), "#42");
}
