pub struct StatsHelper;

impl StatsHelper {
    /// Linearly maps `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
    ///
    /// Values outside the source range are extrapolated, not clamped.
    pub fn linear_map(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
        let span = from_max - from_min;
        if span == 0.0 {
            return to_min;
        }
        to_min + (value - from_min) / span * (to_max - to_min)
    }

    /// Smallest and largest finite value, or `None` for an empty input.
    pub fn min_max<I>(values: I) -> Option<(f64, f64)>
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Position of `value` inside `[min, max]` as a 0..1 fraction.
    pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
        Self::linear_map(value, min, max, 0.0, 1.0).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_map_hits_endpoints() {
        assert_eq!(StatsHelper::linear_map(0.0, 0.0, 5000.0, 5.0, 45.0), 5.0);
        assert_eq!(StatsHelper::linear_map(5000.0, 0.0, 5000.0, 5.0, 45.0), 45.0);
        assert_eq!(StatsHelper::linear_map(2500.0, 0.0, 5000.0, 5.0, 45.0), 25.0);
    }

    #[test]
    fn linear_map_extrapolates() {
        assert_eq!(StatsHelper::linear_map(10000.0, 0.0, 5000.0, 5.0, 45.0), 85.0);
    }

    #[test]
    fn min_max_skips_non_finite() {
        assert_eq!(StatsHelper::min_max(Vec::<f64>::new()), None);
        assert_eq!(
            StatsHelper::min_max(vec![3.0, f64::NAN, -1.0, 7.5]),
            Some((-1.0, 7.5))
        );
    }

    #[test]
    fn normalize_handles_flat_range() {
        assert_eq!(StatsHelper::normalize(4.0, 4.0, 4.0), 0.0);
        assert_eq!(StatsHelper::normalize(150.0, 100.0, 200.0), 0.5);
        assert_eq!(StatsHelper::normalize(250.0, 100.0, 200.0), 1.0);
    }
}
