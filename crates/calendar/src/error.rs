//! Error types for the abushakir-calendar crate.

/// Error type for all fallible operations in the abushakir-calendar crate.
///
/// Month-length and leap-dependent functions validate the month number
/// against the calendar they serve (Gregorian 1..=12, Ethiopic 1..=13).
/// The JDN-based conversion functions themselves never fail; see the
/// module docs for the permissive handling of out-of-range day values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range for its calendar.
    #[error("invalid month: {month} (must be 1..={max})")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
        /// The largest valid month number for the calendar in question.
        max: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_gregorian_month() {
        let err = CalendarError::InvalidMonth { month: 13, max: 12 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_ethiopic_month() {
        let err = CalendarError::InvalidMonth { month: 14, max: 13 };
        assert_eq!(err.to_string(), "invalid month: 14 (must be 1..=13)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone_and_eq() {
        let a = CalendarError::InvalidMonth { month: 0, max: 12 };
        let b = a.clone();
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 0, max: 13 };
        assert_ne!(a, c);
    }
}
