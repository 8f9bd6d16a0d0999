// SPDX-FileCopyrightText: Copyright (C) 2018-2023 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::result::Result as StdResult;

use thiserror::Error;

pub mod prelude {
    pub(crate) use serde::{Deserialize, Serialize};

    pub(crate) use crate::util::clock::*;
    pub use crate::{Error, Result};
}

pub mod document;
pub use self::document::{Decoded, decode, decode_str, encode_any, encode_playlists};

pub mod playlist;
pub mod song;
pub mod util;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no JSON encoding for values of type {type_name}")]
    TypeMismatch { type_name: &'static str },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] songlist_core::Error),
}

pub type Result<T> = StdResult<T, Error>;
