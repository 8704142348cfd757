//! Unit tests for confidence tiers, ring geometry, and history accuracy

use crate::history;
use crate::metrics::*;

// ============================================================================
// CONFIDENCE TIERS
// ============================================================================

#[test]
fn test_tier_boundaries() {
    // boundaries are inclusive at 80 and 60
    assert_eq!(confidence_tier(80), ConfidenceTier::High);
    assert_eq!(confidence_tier(79), ConfidenceTier::Medium);
    assert_eq!(confidence_tier(60), ConfidenceTier::Medium);
    assert_eq!(confidence_tier(59), ConfidenceTier::Low);
}

#[test]
fn test_tier_extremes() {
    assert_eq!(confidence_tier(100), ConfidenceTier::High);
    assert_eq!(confidence_tier(0), ConfidenceTier::Low);
}

// ============================================================================
// RING GEOMETRY
// ============================================================================

#[test]
fn test_ring_circumference_is_radius_20() {
    let ring = ring_geometry(100);
    assert!((ring.circumference - 125.663_706).abs() < 1e-3);
}

#[test]
fn test_ring_proportion_is_linear() {
    assert!((ring_geometry(0).proportion() - 0.0).abs() < 1e-9);
    assert!((ring_geometry(50).proportion() - 0.5).abs() < 1e-9);
    assert!((ring_geometry(100).proportion() - 1.0).abs() < 1e-9);
}

#[test]
fn test_ring_dash_half_at_50() {
    let ring = ring_geometry(50);
    assert!((ring.dash - ring.circumference / 2.0).abs() < 1e-9);
}

#[test]
fn test_ring_clamps_out_of_range_confidence() {
    let ring = ring_geometry(200);
    assert!(ring.proportion() <= 1.0);
}

// ============================================================================
// HISTORY ACCURACY
// ============================================================================

#[test]
fn test_accuracy_rate_rounds_to_nearest_integer() {
    // fixture: 4 correct of 6 => 66.67 => 67
    let entries = history::entries();
    assert_eq!(entries.len(), 6);
    assert_eq!(entries.iter().filter(|e| e.correct).count(), 4);
    assert_eq!(history::accuracy_rate(&entries), 67);
}

#[test]
fn test_accuracy_rate_empty_window() {
    assert_eq!(history::accuracy_rate(&[]), 0);
}

#[test]
fn test_accuracy_rate_all_correct() {
    let entries: Vec<_> = history::entries()
        .into_iter()
        .map(|mut e| {
            e.correct = true;
            e
        })
        .collect();
    assert_eq!(history::accuracy_rate(&entries), 100);
}

#[test]
fn test_accuracy_window_caps_at_30() {
    // 40 entries, only the first 30 counted: 30 incorrect first means 0%
    let template = history::entries();
    let mut entries = Vec::new();
    for i in 0..40 {
        let mut e = template[0].clone();
        e.correct = i >= 30;
        entries.push(e);
    }
    assert_eq!(history::accuracy_rate(&entries), 0);
}

// ============================================================================
// FORMATTING
// ============================================================================

#[test]
fn test_format_volume_millions() {
    assert_eq!(format_volume(52_847_392), "52.8M");
    assert_eq!(format_volume(18_472_935), "18.5M");
}

#[test]
fn test_format_change_signs() {
    assert_eq!(format_change(2.34, 1.35), "+2.34 (+1.35%)");
    assert_eq!(format_change(-8.21, -3.33), "-8.21 (-3.33%)");
}
