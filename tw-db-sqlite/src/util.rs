use anyhow::anyhow;
use time::{format_description::FormatItem, macros::format_description, Date};

// Calendar dates are stored as ISO 8601 text, e.g. "2025-06-01".
const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn parse_date(s: &str) -> anyhow::Result<Date> {
    Date::parse(s, DATE_FORMAT).map_err(|err| anyhow!("invalid date '{s}': {err}"))
}

pub fn to_date_string(date: Date) -> String {
    // A plain date always provides year, month and day.
    date.format(DATE_FORMAT).expect("date format")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parse_and_format_date() {
        assert_eq!(parse_date("2025-06-01").unwrap(), date!(2025 - 06 - 01));
        assert_eq!(to_date_string(date!(2025 - 06 - 01)), "2025-06-01");
        assert!(parse_date("01.06.2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }
}
