use chrono::{Datelike, NaiveDate};

/// Builds the display full name from its raw parts.
///
/// Blank parts are skipped entirely and a non-empty middle name is
/// abbreviated to its initial followed by a period, so the result never
/// contains a double space or a stray ". ".
pub fn full_name(
    first: Option<&str>,
    middle: Option<&str>,
    last: Option<&str>,
    suffix: Option<&str>,
) -> String {
    let initial = middle
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .and_then(|m| m.chars().next())
        .map(|c| format!("{}.", c));

    let parts = [
        non_blank(first),
        initial,
        non_blank(last),
        non_blank(suffix),
    ];

    parts.into_iter().flatten().collect::<Vec<_>>().join(" ")
}

fn non_blank(part: Option<&str>) -> Option<String> {
    part.map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
}

/// Renders the event date range for display.
///
/// When start and end fall in the same month and year the range collapses
/// to "Month DD-DD, YYYY"; otherwise both endpoints are spelled out and
/// joined with an en dash. Days are always zero-padded to two digits. Every
/// surface that shows an event date goes through this function.
pub fn format_event_date(start: NaiveDate, end: NaiveDate) -> String {
    if start.month() == end.month() && start.year() == end.year() {
        format!(
            "{} {:02}-{:02}, {}",
            start.format("%B"),
            start.day(),
            end.day(),
            start.year()
        )
    } else {
        format!(
            "{} {:02}, {} – {} {:02}, {}",
            start.format("%B"),
            start.day(),
            start.year(),
            end.format("%B"),
            end.day(),
            end.year()
        )
    }
}
