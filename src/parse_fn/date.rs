use crate::error::PicasaError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Album timestamps, e.g. `2019-05-01T10:00:00+02:00`.
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Byte layout of [`ISO_FORMAT`]: `d` is a digit, `+` either sign.
const ISO_SHAPE: &[u8] = b"dddd-dd-ddTdd:dd:dd+dd:dd";

/// Day zero of the serial date format: two days before 1900-01-01.
fn serial_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Decodes the folder `date` key: a decimal, possibly fractional, number of
/// days since 1899-12-30. The fraction is rounded to whole milliseconds.
pub fn decode_day_serial(raw: &str) -> Result<NaiveDateTime, PicasaError> {
    let days: f64 = raw
        .trim()
        .parse()
        .map_err(|source| PicasaError::InvalidDaySerial {
            value: raw.to_string(),
            source,
        })?;

    let out_of_range = || PicasaError::DaySerialOutOfRange {
        value: raw.to_string(),
    };
    let millis = (days * MILLIS_PER_DAY).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return Err(out_of_range());
    }
    let delta = TimeDelta::try_milliseconds(millis as i64).ok_or_else(out_of_range)?;

    serial_epoch()
        .checked_add_signed(delta)
        .ok_or_else(out_of_range)
}

/// Decodes an album `date` key in `yyyy-MM-ddTHH:mm:ss±HH:mm` form.
///
/// A trailing `Z` is read as `+00:00`. No other layout is accepted.
pub fn decode_iso_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, PicasaError> {
    let normalized = match raw.strip_suffix('Z') {
        Some(utc) if utc.len() + 6 == ISO_SHAPE.len() => format!("{utc}+00:00"),
        _ => raw.to_string(),
    };
    // chrono alone also takes single-digit fields, padding and `+hhmm`.
    if !has_iso_shape(&normalized) {
        return Err(PicasaError::MalformedTimestamp {
            value: raw.to_string(),
        });
    }
    DateTime::parse_from_str(&normalized, ISO_FORMAT).map_err(|source| {
        PicasaError::InvalidTimestamp {
            value: raw.to_string(),
            source,
        }
    })
}

fn has_iso_shape(s: &str) -> bool {
    s.len() == ISO_SHAPE.len()
        && s.bytes().zip(ISO_SHAPE).all(|(b, &expected)| match expected {
            b'd' => b.is_ascii_digit(),
            b'+' => b == b'+' || b == b'-',
            _ => b == expected,
        })
}
