//! Maximum-BPM filtering applied before aggregation.

use super::sample::Sample;

/// Keep only samples at or below `max_bpm`.
///
/// The bound is inclusive; `None` disables filtering entirely rather than
/// filtering everything out. Input order is preserved.
pub fn apply_max_bpm(samples: Vec<Sample>, max_bpm: Option<f64>) -> Vec<Sample> {
    match max_bpm {
        Some(max) => samples.into_iter().filter(|s| s.bpm <= max).collect(),
        None => samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(bpms: &[f64]) -> Vec<Sample> {
        bpms.iter()
            .enumerate()
            .map(|(i, &bpm)| Sample::from_epoch_millis(1_704_096_000_000 + i as i64 * 60_000, bpm).unwrap())
            .collect()
    }

    #[test]
    fn test_no_threshold_passes_everything() {
        let input = samples(&[60.0, 150.0, 80.0]);
        let output = apply_max_bpm(input.clone(), None);
        assert_eq!(output, input);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let output = apply_max_bpm(samples(&[99.0, 100.0, 101.0]), Some(100.0));
        let bpms: Vec<f64> = output.iter().map(|s| s.bpm).collect();
        assert_eq!(bpms, vec![99.0, 100.0]);
    }

    #[test]
    fn test_order_preserved() {
        let output = apply_max_bpm(samples(&[80.0, 150.0, 60.0, 70.0]), Some(100.0));
        let bpms: Vec<f64> = output.iter().map(|s| s.bpm).collect();
        assert_eq!(bpms, vec![80.0, 60.0, 70.0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(apply_max_bpm(Vec::new(), Some(100.0)).is_empty());
    }
}
