//! Per-list buffer activity counters.
//!
//! [`ListMetrics`] records how often a list reallocated, reused its buffer
//! on assignment, and shifted elements for front operations. The counters
//! are cumulative from construction (or the last reset).

/// Cumulative buffer activity for a single list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListMetrics {
    /// Number of doubling reallocations triggered by a full buffer.
    pub grow_events: u64,
    /// Number of assignments that had to replace the buffer.
    pub assign_reallocations: u64,
    /// Number of assignments that copied into the existing buffer.
    pub assign_reuses: u64,
    /// Number of slot moves performed by `push_front` and `pop_front`.
    pub elements_shifted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = ListMetrics::default();
        assert_eq!(m.grow_events, 0);
        assert_eq!(m.assign_reallocations, 0);
        assert_eq!(m.assign_reuses, 0);
        assert_eq!(m.elements_shifted, 0);
    }
}
