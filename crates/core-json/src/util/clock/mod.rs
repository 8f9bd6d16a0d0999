// SPDX-FileCopyrightText: Copyright (C) 2018-2023 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, result::Result as StdResult};

use serde::{
    Deserializer, Serializer,
    de::{self, Visitor as SerdeDeserializeVisitor},
};

use crate::prelude::*;

mod _core {
    pub(super) use jiff::civil::Date;
}

///////////////////////////////////////////////////////////////////////
// Date
///////////////////////////////////////////////////////////////////////

/// A calendar date, encoded as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Date(_core::Date);

impl From<_core::Date> for Date {
    fn from(from: _core::Date) -> Self {
        Self(from)
    }
}

impl From<Date> for _core::Date {
    fn from(from: Date) -> Self {
        let Date(inner) = from;
        inner
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

struct DateDeserializeVisitor;

impl SerdeDeserializeVisitor<'_> for DateDeserializeVisitor {
    type Value = Date;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string with a calendar date formatted as YYYY-MM-DD")
    }

    fn visit_str<E>(self, input: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        input
            .parse::<_core::Date>()
            .map(Date)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(input), &self))
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> StdResult<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DateDeserializeVisitor)
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
