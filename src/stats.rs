use crate::harness::DurationSample;

/// Decimal places kept for reported microsecond values.
pub const REPORT_DECIMALS: i32 = 3;

/// Reduced view of one [`DurationSample`], in nanoseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_ns: f64,
    pub min_ns: u64,
    pub max_ns: u64,
    /// Population standard deviation.
    pub std_dev_ns: f64,
}

impl Summary {
    pub fn from_sample(sample: &DurationSample) -> Self {
        let nanos = sample.as_nanos();
        if nanos.is_empty() {
            return Self {
                count: 0,
                mean_ns: 0.0,
                min_ns: 0,
                max_ns: 0,
                std_dev_ns: 0.0,
            };
        }

        let count = nanos.len();
        let total: u128 = nanos.iter().map(|&ns| u128::from(ns)).sum();
        let mean_ns = total as f64 / count as f64;

        let variance = nanos
            .iter()
            .map(|&ns| {
                let d = ns as f64 - mean_ns;
                d * d
            })
            .sum::<f64>()
            / count as f64;

        Self {
            count,
            mean_ns,
            min_ns: nanos.iter().copied().min().unwrap_or(0),
            max_ns: nanos.iter().copied().max().unwrap_or(0),
            std_dev_ns: variance.sqrt(),
        }
    }

    /// Mean time per iteration in microseconds, rounded for reporting.
    pub fn mean_us(&self) -> f64 {
        round_to(self.mean_ns / 1_000.0, REPORT_DECIMALS)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(nanos: &[u64]) -> Summary {
        Summary::from_sample(&DurationSample::from_nanos(nanos.to_vec()))
    }

    #[test]
    fn mean_is_arithmetic_mean() {
        let s = summary(&[1_000, 2_000, 3_000, 6_000]);
        assert_eq!(s.count, 4);
        assert_eq!(s.mean_ns, 3_000.0);
        assert_eq!(s.mean_us(), 3.0);
        assert_eq!(s.min_ns, 1_000);
        assert_eq!(s.max_ns, 6_000);
    }

    #[test]
    fn single_duration_is_its_own_mean() {
        let s = summary(&[4_321]);
        assert_eq!(s.mean_ns, 4_321.0);
        assert_eq!(s.mean_us(), 4.321);
        assert_eq!(s.std_dev_ns, 0.0);
    }

    #[test]
    fn rounds_to_three_decimals() {
        // 1234.56775 us
        let s = summary(&[1_234_567, 1_234_568, 1_234_569, 1_234_567]);
        assert_eq!(s.mean_us(), 1_234.568);

        let s = summary(&[1_100, 1_200]);
        assert_eq!(s.mean_us(), 1.15);
    }

    #[test]
    fn is_deterministic() {
        let nanos = [913, 17, 40_000, 5, 5, 77_777];
        assert_eq!(summary(&nanos), summary(&nanos));
        assert_eq!(summary(&nanos).mean_us(), summary(&nanos).mean_us());
    }

    #[test]
    fn std_dev_of_spread_sample() {
        let s = summary(&[2, 4, 4, 4, 5, 5, 7, 9]);
        assert_eq!(s.mean_ns, 5.0);
        assert_eq!(s.std_dev_ns, 2.0);
    }

    #[test]
    fn empty_sample_is_zeroed() {
        let s = summary(&[]);
        assert_eq!(s.count, 0);
        assert_eq!(s.mean_us(), 0.0);
    }
}
