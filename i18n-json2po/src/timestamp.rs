// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Timestamps for the `POT-Creation-Date` header.

use std::cmp::Ordering;

use chrono::{DateTime, Offset, TimeZone};

/// Format `date` as `YYYY-MM-DD HH:MM` followed by its UTC offset.
///
/// The date and time are taken in the time zone of `date`. The offset
/// is written by [`timezone_suffix`].
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use i18n_json2po::format_timestamp;
///
/// let prague = FixedOffset::east_opt(2 * 3600).unwrap();
/// let date = prague.with_ymd_and_hms(2016, 4, 1, 5, 3, 0).unwrap();
/// assert_eq!(format_timestamp(&date), "2016-04-01 05:03+0200");
/// ```
pub fn format_timestamp<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    let offset = date.offset().fix().local_minus_utc();
    format!(
        "{}{}",
        date.naive_local().format("%Y-%m-%d %H:%M"),
        timezone_suffix(offset)
    )
}

/// Format a UTC offset given in seconds as `Z` or `+HH00`/`-HH00`.
///
/// Only whole hours are written: the offset is truncated toward zero,
/// so `+05:30` becomes `+0500`.
pub fn timezone_suffix(offset_seconds: i32) -> String {
    let hours = offset_seconds / 3600;
    match hours.cmp(&0) {
        Ordering::Equal => String::from("Z"),
        Ordering::Greater => format!("+{hours:02}00"),
        Ordering::Less => format!("-{:02}00", hours.abs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Local, Utc};
    use pretty_assertions::assert_eq;

    fn offset(hours: i32, minutes: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600 + minutes * 60).unwrap()
    }

    #[test]
    fn test_timezone_suffix() {
        assert_eq!(timezone_suffix(0), "Z");
        assert_eq!(timezone_suffix(7 * 3600), "+0700");
        assert_eq!(timezone_suffix(12 * 3600), "+1200");
        assert_eq!(timezone_suffix(-5 * 3600), "-0500");
        assert_eq!(timezone_suffix(-10 * 3600), "-1000");
    }

    #[test]
    fn test_timezone_suffix_truncates_minutes() {
        assert_eq!(timezone_suffix(5 * 3600 + 30 * 60), "+0500");
        assert_eq!(timezone_suffix(-(3 * 3600 + 30 * 60)), "-0300");
        assert_eq!(timezone_suffix(45 * 60), "Z");
    }

    #[test]
    fn test_format_timestamp() {
        let date = offset(7, 0).with_ymd_and_hms(2016, 4, 1, 5, 3, 0).unwrap();
        assert_eq!(format_timestamp(&date), "2016-04-01 05:03+0700");

        let date = offset(-10, 0)
            .with_ymd_and_hms(2016, 11, 14, 15, 13, 0)
            .unwrap();
        assert_eq!(format_timestamp(&date), "2016-11-14 15:13-1000");

        let date = offset(5, 30).with_ymd_and_hms(2016, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(&date), "2016-01-02 03:04+0500");
    }

    #[test]
    fn test_format_timestamp_utc() {
        let date = Utc.with_ymd_and_hms(2044, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_timestamp(&date), "2044-12-31 23:59Z");
    }

    #[test]
    fn test_format_timestamp_local() {
        let now = Local::now();
        let offset = now.offset().local_minus_utc();
        assert_eq!(
            format_timestamp(&now),
            format!("{}{}", now.format("%Y-%m-%d %H:%M"), timezone_suffix(offset))
        );
    }
}
