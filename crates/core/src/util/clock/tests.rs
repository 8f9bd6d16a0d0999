// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn format_default_pattern() {
    assert_eq!(
        "Jan 01, 2020",
        format_date(date(2020, 1, 1), DEFAULT_DATE_FORMAT).unwrap()
    );
    assert_eq!(
        "Dec 24, 1999",
        format_date(date(1999, 12, 24), DEFAULT_DATE_FORMAT).unwrap()
    );
}

#[test]
fn parse_default_pattern() {
    assert_eq!(
        date(2019, 2, 4),
        parse_date("Feb 04, 2019", DEFAULT_DATE_FORMAT).unwrap()
    );
}

#[test]
fn parse_mismatching_input() {
    assert_eq!(
        Err(FormatError::Date {
            input: "2019-02-04".to_owned(),
            pattern: DEFAULT_DATE_FORMAT.to_owned(),
        }),
        parse_date("2019-02-04", DEFAULT_DATE_FORMAT)
    );
    assert!(parse_date("Feb 30, 2019", DEFAULT_DATE_FORMAT).is_err());
    assert!(parse_date("", DEFAULT_DATE_FORMAT).is_err());
}

#[test]
fn formatted_today_parses_back() {
    let today = today();
    let formatted = format_date(today, DEFAULT_DATE_FORMAT).unwrap();
    assert_eq!(today, parse_date(&formatted, DEFAULT_DATE_FORMAT).unwrap());
}

#[test]
fn date_between_is_inclusive() {
    let first = date(2011, 1, 1);
    let last = date(2011, 12, 31);
    assert!(is_date_between(first, first, last));
    assert!(is_date_between(last, first, last));
    assert!(is_date_between(date(2011, 6, 15), first, last));
    assert!(!is_date_between(date(2010, 12, 31), first, last));
    assert!(!is_date_between(date(2012, 1, 1), first, last));
}
