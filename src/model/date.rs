// File: src/model/date.rs
use crate::locale::LocaleProfile;

/// Parses a date line of the form `<MonthName> <DayNumber>` into a
/// (year, month, day) triple.
///
/// The entire trimmed line must match: the month name is an exact,
/// case-sensitive member of the locale's month table and the day is 1-2
/// ASCII digits with nothing after it. The source documents never carry a
/// year, so the caller threads the reference year through explicitly.
///
/// The day number is deliberately not range-checked here; document quality
/// is untrusted and "February 99" is real input. Callers that need a real
/// calendar day must validate the triple themselves.
pub fn parse_date_line(
    line: &str,
    locale: &LocaleProfile,
    year: i32,
) -> Option<(i32, u32, u32)> {
    let trimmed = line.trim();
    let (month_name, rest) = trimmed.split_once(char::is_whitespace)?;
    let month = locale.month_number(month_name)?;
    let day_digits = rest.trim_start();
    if day_digits.is_empty()
        || day_digits.len() > 2
        || !day_digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let day = day_digits.parse().ok()?;
    Some((year, month, day))
}

/// A line is a date line exactly when it parses.
pub fn is_date_line(line: &str, locale: &LocaleProfile, year: i32) -> bool {
    parse_date_line(line, locale, year).is_some()
}
