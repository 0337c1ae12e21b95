//! Request sequencing for overlapping page fetches.
//!
//! Page fetches can overlap when the user paginates quickly, and they can
//! resolve in any order. Every request takes the next sequence number; only
//! the response carrying the latest issued number is current.

use crate::RequestSeq;

/// A monotonically increasing request counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    /// Sequence number of the most recently issued request (0 = none yet)
    pub latest: RequestSeq,
}

impl RequestSequence {
    /// Create a sequence with no requests issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next sequence number.
    pub fn tick(&mut self) -> RequestSeq {
        self.latest += 1;
        self.latest
    }

    /// Whether `seq` is the most recently issued request.
    pub fn is_current(&self, seq: RequestSeq) -> bool {
        seq != 0 && seq == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_increments() {
        let mut seq = RequestSequence::new();
        assert_eq!(seq.tick(), 1);
        assert_eq!(seq.tick(), 2);
        assert_eq!(seq.latest, 2);
    }

    #[test]
    fn only_latest_is_current() {
        let mut seq = RequestSequence::new();
        let first = seq.tick();
        let second = seq.tick();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn nothing_is_current_before_first_request() {
        let seq = RequestSequence::new();
        assert!(!seq.is_current(0));
    }
}
