use chrono::NaiveDate;
use regex::Regex;
use crate::ParseError;
use chrono::Utc;
use chrono::DateTime;

// Delimiter octets of the cookie-date grammar: HTAB, 0x20-0x2F, 0x3B-0x40,
// 0x5B-0x60 and 0x7B-0x7E.
const DATE_DELIMITERS: &str = "[\\x09\\x20-\\x2f\\x3b-\\x40\\x5b-\\x60\\x7b-\\x7e]+";

// Token shapes: hms-time, day-of-month and year allow trailing garbage as
// long as it starts with a non-digit.
const TIME_TOKEN: &str = "^([0-9]{1,2}):([0-9]{1,2}):([0-9]{1,2})(?:[^0-9].*)?$";
const DAY_OF_MONTH_TOKEN: &str = "^([0-9]{1,2})(?:[^0-9].*)?$";
const YEAR_TOKEN: &str = "^([0-9]{2,4})(?:[^0-9].*)?$";

/// Parses a cookie-date, as defined in
/// [RFC6265 Section 5.1.1](https://datatracker.ietf.org/doc/html/rfc6265#section-5.1.1).
///
/// This is the lenient browser grammar used for the `Expires` attribute, not
/// a general date parser: the value is split on the delimiter octet set and
/// each token is matched against the first still-missing component among
/// time, day of month, month and year.
///
/// For example, `Sun, 06 Nov 1994 08:49:37 GMT`, `06-Nov-94 08:49:37` and
/// `Sun Nov 6 08:49:37 1994` all parse to the same instant.
pub fn parse_cookie_date(date: &str) -> Result<DateTime<Utc>, ParseError> {
    lazy_static! {
        static ref DELIM: Regex = Regex::new(DATE_DELIMITERS).unwrap();
        static ref TIME: Regex = Regex::new(TIME_TOKEN).unwrap();
        static ref DAY_OF_MONTH: Regex = Regex::new(DAY_OF_MONTH_TOKEN).unwrap();
        static ref YEAR: Regex = Regex::new(YEAR_TOKEN).unwrap();
    }

    let mut time: Option<(u32, u32, u32)> = None;
    let mut day_of_month: Option<u32> = None;
    let mut month: Option<u32> = None;
    let mut year: Option<i32> = None;

    for token in DELIM.split(date) {
        if token.is_empty() {
            continue;
        }

        // Each token satisfies only the first component not yet filled.
        if time.is_none() {
            if let Some(captures) = TIME.captures(token) {
                let hour: u32 = captures.get(1).unwrap().as_str().parse().unwrap();
                let minute: u32 = captures.get(2).unwrap().as_str().parse().unwrap();
                let second: u32 = captures.get(3).unwrap().as_str().parse().unwrap();
                time = Some((hour, minute, second));
                continue;
            }
        }

        if day_of_month.is_none() {
            if let Some(captures) = DAY_OF_MONTH.captures(token) {
                day_of_month = Some(captures.get(1).unwrap().as_str().parse().unwrap());
                continue;
            }
        }

        if month.is_none() {
            if let Some(value) = parse_month(token) {
                month = Some(value);
                continue;
            }
        }

        if year.is_none() {
            if let Some(captures) = YEAR.captures(token) {
                let mut value: i32 = captures.get(1).unwrap().as_str().parse().unwrap();
                // Two-digit years: 70-99 live in the 1900s, 0-69 in the 2000s
                if (70..=99).contains(&value) {
                    value += 1900;
                } else if (0..=69).contains(&value) {
                    value += 2000;
                }
                year = Some(value);
            }
        }
    }

    let (hour, minute, second) = match time {
        Some(hms) => hms,
        None => return Err(ParseError::new("Invalid cookie date: no time")),
    };
    let day = match day_of_month {
        Some(day) => day,
        None => return Err(ParseError::new("Invalid cookie date: no day of month")),
    };
    let month = match month {
        Some(month) => month,
        None => return Err(ParseError::new("Invalid cookie date: no month")),
    };
    let year = match year {
        Some(year) => year,
        None => return Err(ParseError::new("Invalid cookie date: no year")),
    };

    if !(1..=31).contains(&day) || year < 1601 || hour > 23 || minute > 59 || second > 59 {
        return Err(ParseError::new("Invalid cookie date: component out of range"));
    }

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| ParseError::new("Invalid cookie date: no such calendar day"))?;

    Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

/// A month token matches when its first three characters are an ASCII
/// case-insensitive month name abbreviation.
fn parse_month(token: &str) -> Option<u32> {
    if token.len() < 3 || !token.is_char_boundary(3) {
        return None;
    }

    match token[..3].to_ascii_lowercase().as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}
