// File: crates/heatmap-core/tests/color_buckets.rs
// Purpose: Validate the variance color partition and its legend mirror.

use heatmap_core::legend::entries;
use heatmap_core::palette::{bucket_index, color_for, BUCKETS};

#[test]
fn boundary_values() {
    assert_eq!(color_for(-2.25).to_hex(), "#550000");
    assert_eq!(color_for(-2.2499).to_hex(), "#0500FF");
    assert_eq!(color_for(2.25).to_hex(), "#FF0000");
    assert_eq!(color_for(2.2501).to_hex(), "#FF00D0");
    assert_eq!(color_for(0.0).to_hex(), "#17FF00");
    assert_eq!(color_for(-0.25).to_hex(), "#00FF83");
    assert_eq!(color_for(-0.2499).to_hex(), "#17FF00");
}

#[test]
fn every_value_lands_in_exactly_one_bucket() {
    let mut v = -5.0;
    while v <= 5.0 {
        let i = bucket_index(v);
        let lower_ok = i == 0 || v > BUCKETS[i - 1].upper;
        let upper_ok = v <= BUCKETS[i].upper;
        assert!(lower_ok && upper_ok, "variance {v} mapped to bucket {i}");
        let matches = BUCKETS
            .iter()
            .enumerate()
            .filter(|(j, b)| v <= b.upper && (*j == 0 || v > BUCKETS[j - 1].upper))
            .count();
        assert_eq!(matches, 1);
        v += 0.0137;
    }
}

#[test]
fn colors_are_distinct_and_ordered_like_the_table() {
    let hex: Vec<_> = BUCKETS.iter().map(|b| b.color.to_hex()).collect();
    assert_eq!(
        hex,
        [
            "#550000", "#0500FF", "#00B4FF", "#00FFF4", "#00FF83", "#17FF00", "#D7FF00", "#FFFA00",
            "#FFBE00", "#FF0000", "#FF00D0"
        ]
    );
}

#[test]
fn legend_mirrors_bucket_colors() {
    let legend = entries(8.66);
    let legend_colors: Vec<_> = legend.iter().map(|e| e.color).collect();
    let bucket_colors: Vec<_> = BUCKETS.iter().map(|b| b.color).collect();
    assert_eq!(legend_colors, bucket_colors);
}
