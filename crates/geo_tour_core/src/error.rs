use thiserror::Error as ThisError;

use crate::session::SessionState;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("need at least {required} points to build a tour, got {found}")]
    InsufficientPoints { found: usize, required: usize },
    #[error("cannot {action} while the session is {state}")]
    InvalidTransition {
        action: &'static str,
        state: SessionState,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn insufficient_points(found: usize) -> Self {
        Self::InsufficientPoints {
            found,
            required: crate::constants::MIN_TOUR_POINTS,
        }
    }

    pub fn invalid_transition(action: &'static str, state: SessionState) -> Self {
        Self::InvalidTransition { action, state }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// True for errors the caller can fix by adding more points.
    pub fn is_insufficient_points(&self) -> bool {
        matches!(self, Self::InsufficientPoints { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::session::SessionState;

    #[test]
    fn insufficient_points_reports_counts() {
        let err = Error::insufficient_points(1);
        assert!(err.is_insufficient_points());
        assert_eq!(
            err.to_string(),
            "need at least 2 points to build a tour, got 1"
        );
    }

    #[test]
    fn invalid_transition_names_action_and_state() {
        let err = Error::invalid_transition("add a point", SessionState::Solved);
        assert!(!err.is_insufficient_points());
        assert_eq!(
            err.to_string(),
            "cannot add a point while the session is solved"
        );
    }
}
