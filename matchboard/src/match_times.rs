//! Render match kickoff times in the viewer's time zone.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use pagedom::{Element, find_all_mut};
use tablesort::parse_date;

pub const MATCH_TIME_CLASS: &str = "match-time";
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a UTC timestamp string in `tz`. `None` if it does not parse.
pub fn localize<Tz>(utc: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let millis = parse_date(utc)?;
    let instant = DateTime::<Utc>::from_timestamp_millis(millis)?;
    Some(instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string())
}

/// Replace the text of every `.match-time` element that has a parseable
/// `data-utc` attribute. Returns how many were updated.
pub fn localize_match_times<Tz>(root: &mut Element, tz: &Tz) -> usize
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut updated = 0;
    for el in find_all_mut(root, &|el| el.has_class(MATCH_TIME_CLASS)) {
        let Some(local) = el.get_attr("data-utc").and_then(|utc| localize(utc, tz)) else {
            continue;
        };
        el.set_text(local);
        updated += 1;
    }
    log::trace!("[match-times] localized {}", updated);
    updated
}
