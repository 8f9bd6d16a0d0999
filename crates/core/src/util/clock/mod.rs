// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::{
    Zoned,
    civil::{Date, date},
    fmt::strtime,
};

use crate::FormatError;

/// Abbreviated month, zero-padded day and 4-digit year, e.g. `Jan 01, 2020`.
pub const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

/// Playlists are not expected to be older than this date.
pub const DEFAULT_VALID_SINCE: Date = date(2011, 1, 1);

/// The current date in the system time zone.
#[must_use]
pub fn today() -> Date {
    Zoned::now().date()
}

pub fn format_date(date: Date, pattern: &str) -> Result<String, FormatError> {
    strtime::format(pattern, date).map_err(|err| {
        log::debug!("Failed to format {date} with {pattern:?}: {err}");
        FormatError::DatePattern(pattern.to_owned())
    })
}

pub fn parse_date(input: &str, pattern: &str) -> Result<Date, FormatError> {
    Date::strptime(pattern, input).map_err(|err| {
        log::debug!("Failed to parse {input:?} with {pattern:?}: {err}");
        FormatError::Date {
            input: input.to_owned(),
            pattern: pattern.to_owned(),
        }
    })
}

/// Inclusive on both ends.
#[must_use]
pub fn is_date_between(date: Date, first: Date, last: Date) -> bool {
    first <= date && date <= last
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
