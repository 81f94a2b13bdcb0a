//! Running count of cleared cells
//!
//! Updated incrementally from erase results, so checking the threshold after
//! every pointer event costs nothing extra. `AlphaMask::count_cleared` is the
//! full-scan reference the running count must always agree with.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    cleared: usize,
    total: usize,
}

impl Coverage {
    pub fn new(total: usize) -> Self {
        Self { cleared: 0, total }
    }

    /// Add newly cleared cells (never decreases)
    pub fn record(&mut self, newly_cleared: usize) {
        self.cleared = (self.cleared + newly_cleared).min(self.total);
    }

    #[inline]
    pub fn cleared(&self) -> usize {
        self.cleared
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Cleared cells as a percentage in [0, 100]
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.cleared as f64 * 100.0 / self.total as f64) as f32
    }

    /// True once `cleared / total >= threshold_percent / 100`
    ///
    /// Compared without dividing so exact boundaries (e.g. 30000 of 60000 at
    /// 50%) are not lost to rounding.
    pub fn reached(&self, threshold_percent: f32) -> bool {
        self.cleared as f64 * 100.0 >= threshold_percent as f64 * self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        let mut cov = Coverage::new(200);
        assert_eq!(cov.percent(), 0.0);
        cov.record(50);
        assert_eq!(cov.percent(), 25.0);
        cov.record(150);
        assert_eq!(cov.percent(), 100.0);
    }

    #[test]
    fn test_record_saturates_at_total() {
        let mut cov = Coverage::new(10);
        cov.record(25);
        assert_eq!(cov.cleared(), 10);
    }

    #[test]
    fn test_reached_exact_boundary() {
        let mut cov = Coverage::new(60_000);
        cov.record(29_999);
        assert!(!cov.reached(50.0));
        cov.record(1);
        assert!(cov.reached(50.0));
    }

    #[test]
    fn test_reached_full_threshold() {
        let mut cov = Coverage::new(3);
        cov.record(2);
        assert!(!cov.reached(100.0));
        cov.record(1);
        assert!(cov.reached(100.0));
    }
}
