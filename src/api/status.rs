use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle for one posted status message.
///
/// A timer armed with this ticket may clear the message only while no newer
/// message has been posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTicket {
    pub generation: u64,
    pub clear_after: Duration,
}

/// Transient message slot guarded by a generation counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBoard {
    message: Option<String>,
    generation: u64,
}

impl StatusBoard {
    pub fn post(&mut self, message: String, clear_after: Duration) -> StatusTicket {
        self.generation += 1;
        self.message = Some(message);
        StatusTicket {
            generation: self.generation,
            clear_after,
        }
    }

    /// Clears the message if `ticket` is still the newest one.
    pub fn expire(&mut self, ticket: StatusTicket) -> bool {
        if ticket.generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::StatusBoard;

    #[test]
    fn stale_ticket_does_not_clear_newer_message() {
        let mut board = StatusBoard::default();
        let first = board.post("first".to_owned(), Duration::from_secs(2));
        let second = board.post("second".to_owned(), Duration::from_secs(2));

        assert!(!board.expire(first));
        assert_eq!(board.message(), Some("second"));
        assert!(board.expire(second));
        assert_eq!(board.message(), None);
        assert!(!board.expire(second), "second expiry is a no-op");
    }
}
