#![allow(dead_code)]

use chrono::{
    Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
};

// Zone with a single offset change at `at` (UTC)
#[derive(Debug, Clone, Copy)]
pub struct TransitionZone {
    at: NaiveDateTime,
    before: FixedOffset,
    after: FixedOffset,
}

impl TransitionZone {
    /// America/Sao_Paulo in 2018: clocks jumped from 00:00 (-03:00) to
    /// 01:00 (-02:00) on 2018-11-04, so that day has no midnight.
    pub fn sao_paulo_2018() -> Self {
        Self {
            at: utc(2018, 11, 4, 3),
            before: FixedOffset::west_opt(3 * 3600).unwrap(),
            after: FixedOffset::west_opt(2 * 3600).unwrap(),
        }
    }

    /// Pacific/Apia in 2011: the zone moved from -10:00 to +14:00 at the end
    /// of 2011-12-29, skipping 2011-12-30 entirely.
    pub fn apia_2011() -> Self {
        Self {
            at: utc(2011, 12, 30, 10),
            before: FixedOffset::west_opt(10 * 3600).unwrap(),
            after: FixedOffset::east_opt(14 * 3600).unwrap(),
        }
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

// Carries its zone so `DateTime::timezone` rebuilds the same transition
#[derive(Debug, Clone, Copy)]
pub struct TransitionOffset {
    zone: TransitionZone,
    fixed: FixedOffset,
}

impl Offset for TransitionOffset {
    fn fix(&self) -> FixedOffset {
        self.fixed
    }
}

fn to_utc(local: &NaiveDateTime, offset: FixedOffset) -> NaiveDateTime {
    *local - Duration::seconds(offset.local_minus_utc() as i64)
}

impl TransitionZone {
    fn offset(&self, fixed: FixedOffset) -> TransitionOffset {
        TransitionOffset { zone: *self, fixed }
    }
}

impl TimeZone for TransitionZone {
    type Offset = TransitionOffset;

    fn from_offset(offset: &TransitionOffset) -> Self {
        offset.zone
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<TransitionOffset> {
        self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<TransitionOffset> {
        let as_before = to_utc(local, self.before) < self.at;
        let as_after = to_utc(local, self.after) >= self.at;

        match (as_before, as_after) {
            (true, true) => LocalResult::Ambiguous(self.offset(self.before), self.offset(self.after)),
            (true, false) => LocalResult::Single(self.offset(self.before)),
            (false, true) => LocalResult::Single(self.offset(self.after)),
            (false, false) => LocalResult::None,
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> TransitionOffset {
        self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> TransitionOffset {
        if *utc < self.at {
            self.offset(self.before)
        } else {
            self.offset(self.after)
        }
    }
}
