//! Location safety classification.
//!
//! The risk formula is a fixed linear threshold over the reading fields.
//! It stands in for a trained model: keeping the arithmetic exact lets a
//! real model replace it later behind the same signature.

use crate::models::EnvironmentalReading;

/// Risk score at or above which a location is considered unsafe.
const SAFETY_THRESHOLD: f64 = 5.0;

/// Computes the weighted risk score for a reading.
///
/// Pollutant terms scale linearly; temperature, humidity and wind each
/// contribute a fixed penalty past their threshold. All comparisons are
/// strict, so boundary values (temperature 35, humidity 80, wind 5) add
/// nothing. Total over any finite input, including negative values.
pub fn risk_score(reading: &EnvironmentalReading) -> f64 {
    reading.pm25 / 10.0
        + reading.pm10 / 20.0
        + reading.no2 / 40.0
        + reading.co / 1000.0
        + if reading.temperature > 35.0 { 2.0 } else { 0.0 }
        + if reading.humidity > 80.0 { 1.0 } else { 0.0 }
        + if reading.wind_speed < 5.0 { 1.0 } else { 0.0 }
}

/// Classifies a reading as safe (`true`) or unsafe (`false`).
///
/// A risk score of exactly 5 classifies as unsafe.
pub fn classify(reading: &EnvironmentalReading) -> bool {
    risk_score(reading) < SAFETY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading() -> EnvironmentalReading {
        EnvironmentalReading {
            temperature: 0.0,
            humidity: 0.0,
            wind_speed: 10.0,
            pm25: 0.0,
            pm10: 0.0,
            no2: 0.0,
            co: 0.0,
        }
    }

    #[test]
    fn test_clean_air_is_safe() {
        let r = reading();
        assert_eq!(risk_score(&r), 0.0);
        assert!(classify(&r));
    }

    #[test]
    fn test_heat_penalty_alone_stays_safe() {
        let r = EnvironmentalReading {
            temperature: 36.0,
            ..reading()
        };
        assert_eq!(risk_score(&r), 2.0);
        assert!(classify(&r));
    }

    #[test]
    fn test_high_pm25_is_unsafe() {
        let r = EnvironmentalReading {
            pm25: 60.0,
            ..reading()
        };
        assert_eq!(risk_score(&r), 6.0);
        assert!(!classify(&r));
    }

    #[test]
    fn test_temperature_boundary_is_strict() {
        let at_boundary = EnvironmentalReading {
            temperature: 35.0,
            ..reading()
        };
        assert_eq!(risk_score(&at_boundary), 0.0);

        let past_boundary = EnvironmentalReading {
            temperature: 35.0001,
            ..reading()
        };
        assert_eq!(risk_score(&past_boundary), 2.0);
    }

    #[test]
    fn test_humidity_and_wind_boundaries_are_strict() {
        let r = EnvironmentalReading {
            humidity: 80.0,
            wind_speed: 5.0,
            ..reading()
        };
        assert_eq!(risk_score(&r), 0.0);

        let r = EnvironmentalReading {
            humidity: 80.1,
            wind_speed: 4.9,
            ..reading()
        };
        assert_eq!(risk_score(&r), 2.0);
    }

    #[test]
    fn test_score_of_exactly_five_is_unsafe() {
        let r = EnvironmentalReading {
            pm25: 50.0,
            ..reading()
        };
        assert_eq!(risk_score(&r), 5.0);
        assert!(!classify(&r));
    }

    #[test]
    fn test_negative_inputs_are_not_rejected() {
        let r = EnvironmentalReading {
            pm25: -50.0,
            ..reading()
        };
        assert_eq!(risk_score(&r), -5.0);
        assert!(classify(&r));
    }

    #[test]
    fn test_pollutant_terms_accumulate() {
        let r = EnvironmentalReading {
            pm25: 10.0,
            pm10: 20.0,
            no2: 40.0,
            co: 1000.0,
            ..reading()
        };
        assert_eq!(risk_score(&r), 4.0);
        assert!(classify(&r));
    }
}
