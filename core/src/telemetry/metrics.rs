use std::fmt;

/// Per-run counters for the radius filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterMetrics {
    pub seen: usize,
    pub missing_position: usize,
    pub out_of_range: usize,
    pub kept: usize,
    pub on_ground: usize,
    pub airborne: usize,
}

impl FilterMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_seen(&mut self) {
        self.seen += 1;
    }

    pub fn record_missing_position(&mut self) {
        self.missing_position += 1;
    }

    pub fn record_out_of_range(&mut self) {
        self.out_of_range += 1;
    }

    pub fn record_kept(&mut self, on_ground: bool) {
        self.kept += 1;
        if on_ground {
            self.on_ground += 1;
        } else {
            self.airborne += 1;
        }
    }
}

impl fmt::Display for FilterMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seen={} kept={} (in air {}, on ground {}) skipped: no position {}, out of range {}",
            self.seen,
            self.kept,
            self.airborne,
            self.on_ground,
            self.missing_position,
            self.out_of_range
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_add_up() {
        let mut metrics = FilterMetrics::new();
        for _ in 0..4 {
            metrics.record_seen();
        }
        metrics.record_missing_position();
        metrics.record_out_of_range();
        metrics.record_kept(true);
        metrics.record_kept(false);

        assert_eq!((metrics.seen, metrics.kept), (4, 2));
        assert_eq!(metrics.on_ground, 1);
        assert_eq!(metrics.airborne, 1);
        assert_eq!(
            metrics.seen,
            metrics.kept + metrics.missing_position + metrics.out_of_range
        );
    }

    #[test]
    fn display_is_one_line() {
        let text = FilterMetrics::new().to_string();
        assert!(text.starts_with("seen=0 kept=0"));
        assert!(!text.contains('\n'));
    }
}
