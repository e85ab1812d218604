//! ICS file generation.

use chrono::DateTime;
use chrono_tz::Tz;
use icalendar::{Calendar, Component, EventLike, Property};

use crate::error::SchedCalResult;
use crate::event::Event;

/// Generate .ics content for a snapshot of events.
///
/// One VEVENT per event, in snapshot order. Every property is derived from
/// the events themselves, so exporting an unchanged snapshot twice yields
/// byte-identical documents. Inputs are assumed valid; admission already
/// guaranteed non-empty titles and ordered instants.
pub fn generate_ics(events: &[Event]) -> SchedCalResult<String> {
    let mut cal = Calendar::new();

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.uid);
        ics_event.summary(&event.title);

        // DTSTAMP is required by RFC 5545; derive it from the event start
        // instead of the wall clock to keep repeated exports identical
        let dtstamp = event
            .start
            .with_timezone(&chrono::Utc)
            .format("%Y%m%dT%H%M%SZ")
            .to_string();
        ics_event.add_property("DTSTAMP", &dtstamp);

        add_zoned_property(&mut ics_event, "DTSTART", &event.start);
        add_zoned_property(&mut ics_event, "DTEND", &event.end);

        cal.push(ics_event.done());
    }

    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string()))
}

/// Write an instant as a local time with an explicit TZID parameter.
/// Floating (naive) times are never emitted; they are ambiguous on import.
fn add_zoned_property(ics_event: &mut icalendar::Event, name: &str, instant: &DateTime<Tz>) {
    let mut prop = Property::new(name, instant.format("%Y%m%dT%H%M%S").to_string());
    prop.add_parameter("TZID", instant.timezone().name());
    ics_event.append_property(prop);
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with SCHEDCAL (we post-process the output)
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:SCHEDCAL\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Europe::Stockholm;

    fn make_event(title: &str, start_hour: u32, end_hour: u32) -> Event {
        Event::new(
            title.to_string(),
            Stockholm
                .with_ymd_and_hms(2025, 3, 10, start_hour, 0, 0)
                .unwrap(),
            Stockholm
                .with_ymd_and_hms(2025, 3, 10, end_hour, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn one_vevent_per_event() {
        let events = vec![make_event("Gym", 7, 8), make_event("Write report", 9, 10)];
        let ics = generate_ics(&events).unwrap();

        let vevent_count = ics.lines().filter(|l| *l == "BEGIN:VEVENT").count();
        assert_eq!(vevent_count, 2, "Expected 2 VEVENTs. ICS:\n{}", ics);
        assert!(ics.contains("SUMMARY:Gym"));
        assert!(ics.contains("SUMMARY:Write report"));
    }

    #[test]
    fn instants_carry_explicit_timezone() {
        let ics = generate_ics(&[make_event("Gym", 7, 8)]).unwrap();

        assert!(
            ics.contains("DTSTART;TZID=Europe/Stockholm:20250310T070000"),
            "DTSTART should carry TZID. ICS:\n{}",
            ics
        );
        assert!(
            ics.contains("DTEND;TZID=Europe/Stockholm:20250310T080000"),
            "DTEND should carry TZID. ICS:\n{}",
            ics
        );
    }

    #[test]
    fn no_floating_times_emitted() {
        let ics = generate_ics(&[make_event("Gym", 7, 8)]).unwrap();

        for line in ics.lines() {
            if line.starts_with("DTSTART") || line.starts_with("DTEND") {
                assert!(
                    line.contains("TZID=") || line.ends_with('Z'),
                    "Floating time emitted: {}",
                    line
                );
            }
        }
    }

    #[test]
    fn export_is_deterministic_for_unchanged_snapshot() {
        let events = vec![make_event("Gym", 7, 8), make_event("Lunch", 12, 13)];

        let first = generate_ics(&events).unwrap();
        let second = generate_ics(&events).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn output_is_post_processed() {
        let ics = generate_ics(&[make_event("Gym", 7, 8)]).unwrap();

        assert!(ics.contains("PRODID:SCHEDCAL"));
        assert!(!ics.contains("CALSCALE"));
    }

    #[test]
    fn empty_snapshot_is_still_a_calendar() {
        let ics = generate_ics(&[]).unwrap();

        assert!(ics.starts_with("BEGIN:VCALENDAR"));
        assert!(ics.contains("END:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }
}
