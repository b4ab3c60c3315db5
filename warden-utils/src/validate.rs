use std::ops::RangeInclusive;

use thiserror::Error;

/// Messages a single purge may delete.
pub const PURGE_AMOUNT_RANGE: RangeInclusive<i64> = 1..=100;
/// Timeout length in minutes (28 days at most).
pub const TIMEOUT_MINUTES_RANGE: RangeInclusive<i64> = 1..=40_320;
/// Days of message history a ban may delete.
pub const DELETE_MESSAGE_DAYS_RANGE: RangeInclusive<i64> = 0..=7;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be between 1-100!")]
    PurgeAmount(i64),

    #[error("Duration must be between 1 minute and 28 days (40320 minutes)!")]
    TimeoutMinutes(i64),

    #[error("Delete messages days must be between 0-7!")]
    DeleteMessageDays(i64),
}

pub fn purge_amount(raw: i64) -> Result<u8, ValidationError> {
    if !PURGE_AMOUNT_RANGE.contains(&raw) {
        return Err(ValidationError::PurgeAmount(raw));
    }
    u8::try_from(raw).map_err(|_| ValidationError::PurgeAmount(raw))
}

pub fn timeout_minutes(raw: i64) -> Result<u64, ValidationError> {
    if !TIMEOUT_MINUTES_RANGE.contains(&raw) {
        return Err(ValidationError::TimeoutMinutes(raw));
    }
    u64::try_from(raw).map_err(|_| ValidationError::TimeoutMinutes(raw))
}

pub fn delete_message_days(raw: i64) -> Result<u8, ValidationError> {
    if !DELETE_MESSAGE_DAYS_RANGE.contains(&raw) {
        return Err(ValidationError::DeleteMessageDays(raw));
    }
    u8::try_from(raw).map_err(|_| ValidationError::DeleteMessageDays(raw))
}

#[cfg(test)]
mod tests {
    use super::{ValidationError, delete_message_days, purge_amount, timeout_minutes};

    #[test]
    fn purge_amount_bounds() {
        assert_eq!(purge_amount(1), Ok(1));
        assert_eq!(purge_amount(100), Ok(100));
        assert_eq!(purge_amount(0), Err(ValidationError::PurgeAmount(0)));
        assert_eq!(purge_amount(101), Err(ValidationError::PurgeAmount(101)));
        assert!(purge_amount(-5).is_err());
    }

    #[test]
    fn timeout_minutes_bounds() {
        assert_eq!(timeout_minutes(1), Ok(1));
        assert_eq!(timeout_minutes(40_320), Ok(40_320));
        assert!(timeout_minutes(0).is_err());
        assert!(timeout_minutes(40_321).is_err());
    }

    #[test]
    fn delete_days_bounds() {
        assert_eq!(delete_message_days(0), Ok(0));
        assert_eq!(delete_message_days(7), Ok(7));
        assert!(delete_message_days(-1).is_err());
        assert!(delete_message_days(8).is_err());
    }

    #[test]
    fn messages_name_the_allowed_range() {
        assert_eq!(
            ValidationError::DeleteMessageDays(9).to_string(),
            "Delete messages days must be between 0-7!"
        );
        assert_eq!(
            ValidationError::PurgeAmount(0).to_string(),
            "Amount must be between 1-100!"
        );
    }
}
