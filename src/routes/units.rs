use super::Error;

pub const METERS_PER_MILE: f64 = 1609.34;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Parses a Routes API duration string like "123.4s" into whole seconds.
///
/// Fractional seconds are truncated toward zero. An empty string, a missing
/// trailing unit, or a non-numeric value is an error rather than a zero
/// duration, so a degraded response never records a false ETA.
pub fn parse_duration_secs(raw: &str) -> Result<u64, Error> {
    let number = match raw.strip_suffix('s') {
        Some(n) if !n.is_empty() => n,
        _ => return Err(Error::duration_parse(raw)),
    };

    match number.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.is_finite() => Ok(v.trunc() as u64),
        _ => Err(Error::duration_parse(raw)),
    }
}

pub fn meters_to_miles(meters: f64) -> f64 {
    round_to(meters / METERS_PER_MILE, 2)
}

pub fn seconds_to_minutes(seconds: u64) -> f64 {
    round_to(seconds as f64 / SECONDS_PER_MINUTE, 1)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_secs() {
        assert_eq!(parse_duration_secs("123s").unwrap(), 123);
        assert_eq!(parse_duration_secs("123.4s").unwrap(), 123);
        assert_eq!(parse_duration_secs("0.9s").unwrap(), 0);
        assert_eq!(parse_duration_secs("0s").unwrap(), 0);
    }

    #[test]
    fn test_parse_duration_secs_malformed() {
        assert!(parse_duration_secs("").is_err());
        assert!(parse_duration_secs("123").is_err());
        assert!(parse_duration_secs("s").is_err());
        assert!(parse_duration_secs("abcs").is_err());
        assert!(parse_duration_secs("-1s").is_err());
    }

    #[test]
    fn test_meters_to_miles() {
        assert_eq!(meters_to_miles(0.0), 0.0);
        assert_eq!(meters_to_miles(1609.34), 1.0);
        assert_eq!(meters_to_miles(2414.01), 1.5);
        assert_eq!(meters_to_miles(16093.4), 10.0);
    }

    #[test]
    fn test_seconds_to_minutes() {
        assert_eq!(seconds_to_minutes(0), 0.0);
        assert_eq!(seconds_to_minutes(90), 1.5);
        assert_eq!(seconds_to_minutes(500), 8.3);
        assert_eq!(seconds_to_minutes(600), 10.0);
    }
}
