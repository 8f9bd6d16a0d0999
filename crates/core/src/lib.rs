// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![warn(rustdoc::broken_intra_doc_links)]
// Importing all enum variants into a narrow, local scope is acceptable.
#![allow(clippy::enum_glob_use)]

use std::{io::Error as IoError, result::Result as StdResult};

use jiff::civil::Date;
use thiserror::Error;

pub mod playlist;
pub use self::playlist::{Cursor as PlaylistCursor, Playlist};

pub mod settings;
pub use self::settings::FormatSettings;

pub mod song;
pub use self::song::{Instrument, Song, SongKind, Tempo};

pub mod util;

/// Rejected input of the text format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected {expected} lines, found {found}")]
    LineCount { expected: usize, found: usize },

    #[error("malformed date range {0:?}")]
    DateRange(String),

    #[error("date {input:?} does not match the pattern {pattern:?}")]
    Date { input: String, pattern: String },

    #[error("unusable date pattern {0:?}")]
    DatePattern(String),

    #[error("empty song entry")]
    EmptySong,

    #[error("tag {0:?} without a preceding song")]
    DanglingTag(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("playlist creation date ({created}) after playlist completion date ({completed})")]
    PlaylistDate { created: Date, completed: Date },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Io(#[from] IoError),
}

pub type Result<T> = StdResult<T, Error>;

pub mod prelude {
    // Re-export trait methods from semval
    pub use semval::{IsValid, Validate as _};

    pub(crate) use semval::prelude::*;

    pub use crate::{Error, FormatError, Result};
}
