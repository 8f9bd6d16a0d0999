// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Songs, playlists and their text and JSON representations.
//!
//! Re-exports the core value model and, with the `json` feature, the
//! JSON codec. Adds loading and saving of format settings and files.

#![warn(rustdoc::broken_intra_doc_links)]

use std::{io::Error as IoError, result::Result as StdResult};

use thiserror::Error;

pub use songlist_core::{
    FormatSettings, Instrument, Playlist, PlaylistCursor, Song, SongKind, Tempo,
};

#[cfg(feature = "json")]
pub use songlist_core_json as json;

pub mod files;
pub mod settings;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] songlist_core::Error),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] songlist_core_json::Error),

    #[error(transparent)]
    Io(#[from] IoError),
}

pub type Result<T> = StdResult<T, Error>;
