// 🧾 Quote Board - last valid result per calculator
// A failed or superseded request never clears what is on screen

use crate::error::GalaxyError;
use tracing::debug;

/// Identifies one submitted request; later tickets supersede earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// New result is now current
    Applied,
    /// Error recorded; previous result kept
    Failed,
    /// A newer request was issued; outcome discarded
    Superseded,
}

#[derive(Debug)]
pub struct QuoteBoard<T> {
    current: Option<T>,
    last_error: Option<GalaxyError>,
    issued: u64,
    settled: u64,
}

impl<T> Default for QuoteBoard<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QuoteBoard<T> {
    pub fn new() -> Self {
        QuoteBoard {
            current: None,
            last_error: None,
            issued: 0,
            settled: 0,
        }
    }

    /// Register a new request. Any ticket issued before this one is now stale.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Apply the outcome of the request identified by `ticket`
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<T, GalaxyError>) -> Settled {
        if ticket.0 != self.issued {
            debug!(ticket = ticket.0, latest = self.issued, "discarding stale response");
            return Settled::Superseded;
        }
        self.settled = ticket.0;

        match outcome {
            Ok(value) => {
                self.current = Some(value);
                self.last_error = None;
                Settled::Applied
            }
            Err(err) => {
                debug!(ticket = ticket.0, error = %err, "request failed; keeping last result");
                self.last_error = Some(err);
                Settled::Failed
            }
        }
    }

    /// Last successful result, if any
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Error from the latest settled request, cleared by the next success
    pub fn last_error(&self) -> Option<&GalaxyError> {
        self.last_error.as_ref()
    }

    /// Consume the board, yielding the last result and the last error
    pub fn into_parts(self) -> (Option<T>, Option<GalaxyError>) {
        (self.current, self.last_error)
    }

    /// True while the latest issued request has not settled
    pub fn is_pending(&self) -> bool {
        self.settled != self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_then_failure_keeps_result() {
        let mut board: QuoteBoard<f64> = QuoteBoard::new();
        assert!(board.current().is_none());

        let t1 = board.begin();
        assert!(board.is_pending());
        assert_eq!(board.settle(t1, Ok(534.83)), Settled::Applied);
        assert!(!board.is_pending());

        let t2 = board.begin();
        let outcome = board.settle(t2, Err(GalaxyError::NetworkFailure("timeout".into())));
        assert_eq!(outcome, Settled::Failed);
        assert_eq!(board.current(), Some(&534.83));
        assert!(matches!(board.last_error(), Some(GalaxyError::NetworkFailure(_))));
    }

    #[test]
    fn test_success_clears_error() {
        let mut board: QuoteBoard<f64> = QuoteBoard::new();
        let t1 = board.begin();
        board.settle(t1, Err(GalaxyError::invalid("price", "is required")));
        assert_eq!(board.last_error().and_then(|e| e.field()), Some("price"));

        let t2 = board.begin();
        board.settle(t2, Ok(421.98));
        assert!(board.last_error().is_none());
        assert_eq!(board.current(), Some(&421.98));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut board: QuoteBoard<&str> = QuoteBoard::new();
        let slow = board.begin();
        let fast = board.begin();

        assert_eq!(board.settle(fast, Ok("fresh")), Settled::Applied);
        assert_eq!(board.settle(slow, Ok("stale")), Settled::Superseded);
        assert_eq!(board.current(), Some(&"fresh"));
        assert!(slow < fast);
    }

    #[test]
    fn test_stale_error_does_not_record() {
        let mut board: QuoteBoard<u32> = QuoteBoard::new();
        let old = board.begin();
        let new = board.begin();
        assert_eq!(
            board.settle(old, Err(GalaxyError::MalformedResponse("bad".into()))),
            Settled::Superseded
        );
        assert!(board.last_error().is_none());
        assert!(board.is_pending());
        board.settle(new, Ok(7));
        assert!(!board.is_pending());

        let (current, error) = board.into_parts();
        assert_eq!(current, Some(7));
        assert!(error.is_none());
    }
}
