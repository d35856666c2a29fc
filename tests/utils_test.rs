mod common;

use chrono::{FixedOffset, NaiveDate, Timelike, Utc};
use common::TransitionZone;
use moonphase::types::{MajorPhase, PhaseEvent};
use moonphase::utils::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2024-01-14"), Ok(date(2024, 1, 14)));
    assert_eq!(parse_date(" 2024-01-14\n"), Ok(date(2024, 1, 14)));
}

#[test]
fn test_parse_date_invalid_echoes_input() {
    let err = parse_date("2024-02-30").unwrap_err();
    assert_eq!(err, DateError::Invalid("2024-02-30".to_string()));
    assert_eq!(
        err.to_string(),
        "invalid date '2024-02-30', expected YYYY-MM-DD"
    );

    assert!(parse_date("01/14/2024").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn test_get_date_from_string() {
    // Explicit date
    let explicit = get_date_from_string(Some("2023-10-17"), &Utc).unwrap();
    assert_eq!(explicit, date(2023, 10, 17));

    // None resolves to today in the given zone
    let before = Utc::now().date_naive();
    let today_utc = get_date_from_string(None, &Utc).unwrap();
    let after = Utc::now().date_naive();
    assert!(today_utc == before || today_utc == after);

    // Invalid input is an error, not a silent fallback
    assert!(get_date_from_string(Some("invalid-date"), &Utc).is_err());
}

#[test]
fn test_local_midnight() {
    let east = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
    let midnight = local_midnight(&east, date(2024, 1, 14)).unwrap();

    assert_eq!(midnight.date_naive(), date(2024, 1, 14));
    assert_eq!(midnight.hour(), 0);
    assert_eq!(midnight.minute(), 0);
    assert_eq!(
        midnight.naive_utc(),
        date(2024, 1, 13).and_hms_opt(18, 30, 0).unwrap()
    );
}

#[test]
fn test_local_midnight_skipped_by_dst() {
    let zone = TransitionZone::sao_paulo_2018();

    // Clocks jumped from 00:00 to 01:00, so the day starts at 01:00 (-02:00)
    let start = local_midnight(&zone, date(2018, 11, 4)).unwrap();
    assert_eq!(start.date_naive(), date(2018, 11, 4));
    assert_eq!(start.hour(), 1);
    assert_eq!(
        start.naive_utc(),
        date(2018, 11, 4).and_hms_opt(3, 0, 0).unwrap()
    );

    // Neighbouring days keep a real midnight
    let before = local_midnight(&zone, date(2018, 11, 3)).unwrap();
    assert_eq!(before.hour(), 0);
    assert_eq!(
        before.naive_utc(),
        date(2018, 11, 3).and_hms_opt(3, 0, 0).unwrap()
    );
    let after = local_midnight(&zone, date(2018, 11, 5)).unwrap();
    assert_eq!(after.hour(), 0);
    assert_eq!(
        after.naive_utc(),
        date(2018, 11, 5).and_hms_opt(2, 0, 0).unwrap()
    );
}

#[test]
fn test_local_midnight_of_skipped_day() {
    let zone = TransitionZone::apia_2011();

    assert!(local_midnight(&zone, date(2011, 12, 30)).is_none());
    assert!(local_midnight(&zone, date(2011, 12, 29)).is_some());
    assert!(local_midnight(&zone, date(2011, 12, 31)).is_some());
}

#[test]
fn test_window_start() {
    assert_eq!(window_start(date(2024, 1, 14), 9), Ok(date(2024, 1, 5)));
    assert_eq!(window_start(date(2024, 3, 1), 7), Ok(date(2024, 2, 23)));
    assert_eq!(window_start(date(2024, 1, 14), 0), Ok(date(2024, 1, 14)));
}

#[test]
fn test_window_start_out_of_range() {
    // Huge lookback from an ordinary date
    let err = window_start(date(2024, 1, 14), u32::MAX).unwrap_err();
    assert_eq!(
        err,
        DateError::WindowOutOfRange {
            date: date(2024, 1, 14),
            lookback_days: u32::MAX,
        }
    );
    assert!(err.to_string().contains("2024-01-14"));

    // Default lookback from the earliest dates `parse_date` accepts
    let earliest = parse_date("-262143-01-03").unwrap();
    assert!(window_start(earliest, 9).is_err());
    assert_eq!(window_start(earliest, 2), Ok(NaiveDate::MIN));
    assert!(window_start(NaiveDate::MIN, 1).is_err());
}

#[test]
fn test_phase_event_rows() {
    let events = vec![
        PhaseEvent {
            date: date(2024, 1, 11),
            phase: MajorPhase::NewMoon,
            time: Some("11:57".to_string()),
        },
        PhaseEvent::new(date(2024, 1, 18), MajorPhase::FirstQuarter),
    ];

    let rows = phase_event_rows(&events);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2024-01-11");
    assert_eq!(rows[0].time, "11:57");
    assert_eq!(rows[0].phase, "New Moon");
    assert_eq!(rows[0].symbol, "🌑");
    assert_eq!(rows[1].time, "");
    assert_eq!(rows[1].phase, "First Quarter");
}
