// File: crates/heatmap-core/src/grid.rs
// Summary: Tick spacing helpers.

/// Round step (1, 2 or 5 times a power of ten) giving roughly `target` ticks over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let target = target.max(1) as f64;
    let raw = (span.abs() / target).max(f64::MIN_POSITIVE);
    let power = 10f64.powi(raw.log10().floor() as i32);
    let err = raw / power;
    let mult = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    mult * power
}

/// Integer multiples of `step` within `[lo, hi]`; `step` is clamped to at least 1.
pub fn integer_ticks(lo: i32, hi: i32, step: i32) -> Vec<i32> {
    let step = step.max(1);
    let first = lo + (step - lo.rem_euclid(step)) % step;
    (first..=hi).step_by(step as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(263.0, 10), 20.0);
        assert_eq!(nice_step(10.0, 10), 1.0);
        assert_eq!(nice_step(45.0, 10), 5.0);
        assert_eq!(nice_step(1000.0, 10), 100.0);
    }

    #[test]
    fn integer_ticks_align_to_multiples() {
        assert_eq!(integer_ticks(1753, 1815, 20), vec![1760, 1780, 1800]);
        assert_eq!(integer_ticks(2000, 2000, 1), vec![2000]);
        assert_eq!(integer_ticks(-5, 5, 5), vec![-5, 0, 5]);
        assert!(integer_ticks(2001, 2009, 10).is_empty());
    }
}
