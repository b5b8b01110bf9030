use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use chrono::{DateTime, Utc};

/// Whole minutes worked, summed over every checkin → checkout pair.
///
/// A checkin replaces any pending one (the earlier is never counted), a
/// checkout without a pending checkin is ignored and an open session counts
/// zero. Each pair truncates toward zero; a negative pair (clock going
/// backwards) is summed as-is.
pub fn compute_total_minutes(events: &[Event]) -> i64 {
    let mut pending: Option<DateTime<Utc>> = None;
    let mut total = 0;

    for ev in events {
        match ev.kind {
            EventKind::CheckIn => pending = Some(ev.timestamp),
            EventKind::CheckOut => {
                if let Some(start) = pending.take() {
                    total += (ev.timestamp - start).num_seconds() / 60;
                }
            }
            _ => {}
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 31, 9, 0, 0).unwrap()
    }

    fn ev(kind: EventKind, at: DateTime<Utc>) -> Event {
        Event::at(at, kind, "")
    }

    #[test]
    fn ninety_seconds_is_one_minute() {
        let events = [
            ev(EventKind::CheckIn, t0()),
            ev(EventKind::CheckOut, t0() + Duration::seconds(90)),
        ];
        assert_eq!(compute_total_minutes(&events), 1);
    }

    #[test]
    fn second_checkin_discards_the_first() {
        let t1 = t0() + Duration::minutes(30);
        let events = [
            ev(EventKind::CheckIn, t0()),
            ev(EventKind::CheckIn, t1),
            ev(EventKind::CheckOut, t1 + Duration::seconds(60)),
        ];
        assert_eq!(compute_total_minutes(&events), 1);
    }

    #[test]
    fn open_session_counts_zero() {
        assert_eq!(compute_total_minutes(&[ev(EventKind::CheckIn, t0())]), 0);
        assert_eq!(compute_total_minutes(&[]), 0);
    }

    #[test]
    fn stray_checkout_and_other_kinds_are_ignored() {
        let events = [
            ev(EventKind::Created, t0()),
            ev(EventKind::CheckOut, t0() + Duration::minutes(1)),
            ev(EventKind::CheckIn, t0() + Duration::minutes(2)),
            Event::at(t0() + Duration::minutes(3), EventKind::Comment, "note"),
            ev(EventKind::CheckOut, t0() + Duration::minutes(12)),
            ev(EventKind::CheckOut, t0() + Duration::minutes(40)),
            ev(EventKind::Finish, t0() + Duration::minutes(41)),
        ];
        assert_eq!(compute_total_minutes(&events), 10);
    }

    #[test]
    fn sums_several_sessions() {
        let events = [
            ev(EventKind::CheckIn, t0()),
            ev(EventKind::CheckOut, t0() + Duration::minutes(45)),
            ev(EventKind::CheckIn, t0() + Duration::hours(2)),
            ev(EventKind::CheckOut, t0() + Duration::hours(3) + Duration::seconds(59)),
        ];
        assert_eq!(compute_total_minutes(&events), 105);
    }

    #[test]
    fn clock_regression_is_summed_as_is() {
        let events = [
            ev(EventKind::CheckIn, t0()),
            ev(EventKind::CheckOut, t0() - Duration::seconds(150)),
        ];
        assert_eq!(compute_total_minutes(&events), -2);
    }
}
