use thiserror::Error;

/// Validation failures caught before any remote call is issued
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Starting lineup must have exactly 7 players")]
    LineupSize { found: usize },

    #[error("Cap number must be between 1 and 99, got {0}")]
    InvalidCapNumber(u8),

    #[error("Select a player first")]
    MissingSelection,
}

/// Check a cap number before adding a player to a roster
pub fn validate_cap_number(cap: u8) -> Result<u8, TrackerError> {
    if (1..=99).contains(&cap) {
        Ok(cap)
    } else {
        Err(TrackerError::InvalidCapNumber(cap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lineup_size_message_is_fixed() {
        let err = TrackerError::LineupSize { found: 5 };
        assert_eq!(err.to_string(), "Starting lineup must have exactly 7 players");
    }

    #[test]
    fn test_validate_cap_number() {
        assert_eq!(validate_cap_number(1), Ok(1));
        assert_eq!(validate_cap_number(99), Ok(99));
        assert_eq!(validate_cap_number(0), Err(TrackerError::InvalidCapNumber(0)));
        assert_eq!(validate_cap_number(120), Err(TrackerError::InvalidCapNumber(120)));
    }
}
