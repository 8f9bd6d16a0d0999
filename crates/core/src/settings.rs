// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::civil::Date;

use crate::{
    playlist::DATE_RANGE_SEPARATOR,
    prelude::*,
    util::clock::{DEFAULT_DATE_FORMAT, DEFAULT_VALID_SINCE, format_date, parse_date},
};

/// Named constants of the text format and the date validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FormatSettings {
    /// `strftime`-style pattern for rendering and parsing dates.
    pub date_format: String,

    /// The earliest date that is considered a valid playlist date.
    pub valid_since: Date,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            valid_since: DEFAULT_VALID_SINCE,
        }
    }
}

impl FormatSettings {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        <Self as IsValid>::is_valid(self)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatSettingsInvalidity {
    DateFormatEmpty,
    DateFormatNotReversible,
    DateFormatLineBreak,
    DateFormatAmbiguousRange,
}

impl Validate for FormatSettings {
    type Invalidity = FormatSettingsInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            date_format,
            valid_since,
        } = self;
        if date_format.trim().is_empty() {
            return ValidationContext::new()
                .invalidate(Self::Invalidity::DateFormatEmpty)
                .into();
        }
        let Ok(formatted) = format_date(*valid_since, date_format) else {
            return ValidationContext::new()
                .invalidate(Self::Invalidity::DateFormatNotReversible)
                .into();
        };
        // Every rendered date must be parsed back into the same date.
        let reversible =
            parse_date(&formatted, date_format).is_ok_and(|parsed| parsed == *valid_since);
        // The date range line must split into both dates again.
        let date_range = format!("{formatted}{DATE_RANGE_SEPARATOR}{formatted}");
        let unambiguous = date_range
            .split_once(DATE_RANGE_SEPARATOR)
            .is_some_and(|(created, completed)| created == formatted && completed == formatted);
        ValidationContext::new()
            .invalidate_if(!reversible, Self::Invalidity::DateFormatNotReversible)
            .invalidate_if(
                formatted.contains(['\n', '\r']),
                Self::Invalidity::DateFormatLineBreak,
            )
            .invalidate_if(!unambiguous, Self::Invalidity::DateFormatAmbiguousRange)
            .into()
    }
}
