use crate::models::Event;

/// Order events by `"<date> <time>"`, ascending, as plain text.
///
/// The comparison is textual: it is chronological only for zero-padded
/// `YYYY-MM-DD` dates and `HH:MM` times. Equal keys keep their input order.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by_cached_key(Event::schedule_key);
}
