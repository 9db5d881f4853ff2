//! Per-run request ceiling.
//!
//! A plain counter: it never resets and never waits. Once the ceiling is
//! reached every further reservation is refused for the rest of the run.

#[derive(Debug, Clone)]
pub struct RateGovernor {
    used: u32,
    ceiling: u32,
}

impl RateGovernor {
    pub fn new(ceiling: u32) -> Self {
        Self { used: 0, ceiling }
    }

    /// Take one slot if any is left.
    pub fn try_reserve(&mut self) -> bool {
        self.try_reserve_many(1)
    }

    /// Take `n` slots, or none at all.
    pub fn try_reserve_many(&mut self, n: u32) -> bool {
        if self.remaining() < n {
            tracing::debug!(used = self.used, ceiling = self.ceiling, wanted = n, "Request refused");
            return false;
        }
        self.used += n;
        tracing::debug!(used = self.used, ceiling = self.ceiling, "Request reserved");
        true
    }

    pub fn is_exhausted(&self) -> bool {
        self.used >= self.ceiling
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    pub fn remaining(&self) -> u32 {
        self.ceiling.saturating_sub(self.used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_first_reservation_refused() {
        let mut governor = RateGovernor::new(60);

        for _ in 0..60 {
            assert!(governor.try_reserve());
        }

        assert!(governor.is_exhausted());
        assert!(!governor.try_reserve());
        assert_eq!(governor.used(), 60);
    }

    #[test]
    fn test_reserve_many_is_all_or_nothing() {
        let mut governor = RateGovernor::new(3);
        assert!(governor.try_reserve_many(2));

        assert!(!governor.try_reserve_many(2));
        assert_eq!(governor.used(), 2);
        assert_eq!(governor.remaining(), 1);

        assert!(governor.try_reserve());
        assert!(governor.is_exhausted());
    }
}
