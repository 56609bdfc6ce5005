//! Common validation utilities.

use validator::ValidationError;

/// Earliest year accepted for an asthma event.
const MIN_EVENT_YEAR: i32 = 2000;

/// Latest year accepted for an asthma event.
const MAX_EVENT_YEAR: i32 = 2100;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates the year component of an event date (2000 to 2100).
pub fn validate_event_year(year: i32) -> Result<(), ValidationError> {
    if (MIN_EVENT_YEAR..=MAX_EVENT_YEAR).contains(&year) {
        Ok(())
    } else {
        let mut err = ValidationError::new("year_range");
        err.message = Some("Year must be between 2000 and 2100".into());
        Err(err)
    }
}

/// Validates the month component of an event date (1 to 12).
pub fn validate_event_month(month: i32) -> Result<(), ValidationError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        let mut err = ValidationError::new("month_range");
        err.message = Some("Month must be between 1 and 12".into());
        Err(err)
    }
}

/// Validates the day component of an event date (1 to 31).
///
/// Days are checked against the calendar-agnostic 1-31 range only; the
/// original client applied the same check.
pub fn validate_event_day(day: i32) -> Result<(), ValidationError> {
    if (1..=31).contains(&day) {
        Ok(())
    } else {
        let mut err = ValidationError::new("day_range");
        err.message = Some("Day must be between 1 and 31".into());
        Err(err)
    }
}

/// Validates the hour component of an event date (0 to 23).
pub fn validate_event_hour(hour: i32) -> Result<(), ValidationError> {
    if (0..=23).contains(&hour) {
        Ok(())
    } else {
        let mut err = ValidationError::new("hour_range");
        err.message = Some("Hour must be between 0 and 23".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Latitude tests
    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(0.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(-90.1).is_err());
    }

    #[test]
    fn test_validate_latitude_error_message() {
        let err = validate_latitude(100.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Latitude must be between -90 and 90"
        );
    }

    // Longitude tests
    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(0.0).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.1).is_err());
        assert!(validate_longitude(-180.1).is_err());
    }

    // Event date-part tests
    #[test]
    fn test_validate_event_year() {
        assert!(validate_event_year(2000).is_ok());
        assert!(validate_event_year(2100).is_ok());
        assert!(validate_event_year(2026).is_ok());
        assert!(validate_event_year(1999).is_err());
        assert!(validate_event_year(2101).is_err());
    }

    #[test]
    fn test_validate_event_month() {
        assert!(validate_event_month(1).is_ok());
        assert!(validate_event_month(12).is_ok());
        assert!(validate_event_month(0).is_err());
        assert!(validate_event_month(13).is_err());
    }

    #[test]
    fn test_validate_event_day() {
        assert!(validate_event_day(1).is_ok());
        assert!(validate_event_day(31).is_ok());
        assert!(validate_event_day(0).is_err());
        assert!(validate_event_day(32).is_err());
    }

    #[test]
    fn test_validate_event_hour() {
        assert!(validate_event_hour(0).is_ok());
        assert!(validate_event_hour(23).is_ok());
        assert!(validate_event_hour(-1).is_err());
        assert!(validate_event_hour(24).is_err());
    }
}
