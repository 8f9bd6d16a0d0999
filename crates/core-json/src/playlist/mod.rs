// SPDX-FileCopyrightText: Copyright (C) 2018-2023 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{prelude::*, song::Song};

mod _core {
    pub(super) use songlist_core::{Error, Playlist, Result, Song};
}

/// The contents of a playlist without the type tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Playlist {
    name: String,

    /// Always present, even if empty.
    songs: Vec<Song>,

    created: Date,

    completed: Date,
}

impl From<&_core::Playlist> for Playlist {
    fn from(from: &_core::Playlist) -> Self {
        Self {
            name: from.name().to_owned(),
            songs: from.songs().iter().map(Into::into).collect(),
            created: from.created().into(),
            completed: from.completed().into(),
        }
    }
}

impl From<_core::Playlist> for Playlist {
    fn from(from: _core::Playlist) -> Self {
        Self::from(&from)
    }
}

impl TryFrom<Playlist> for _core::Playlist {
    type Error = _core::Error;

    fn try_from(from: Playlist) -> _core::Result<Self> {
        let Playlist {
            name,
            songs,
            created,
            completed,
        } = from;
        let songs = songs
            .into_iter()
            .map(TryInto::try_into)
            .collect::<_core::Result<Vec<_core::Song>>>()?;
        Self::new(name, songs, created.into(), completed.into())
    }
}

/// A playlist, tagged with its type name.
///
/// ```json
/// {"Playlist": {"name": "My songs", "songs": [], "created": "2020-01-01", "completed": "2020-01-02"}}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaggedPlaylist {
    Playlist(Playlist),
}

impl From<&_core::Playlist> for TaggedPlaylist {
    fn from(from: &_core::Playlist) -> Self {
        Self::Playlist(from.into())
    }
}

impl TryFrom<TaggedPlaylist> for _core::Playlist {
    type Error = _core::Error;

    fn try_from(from: TaggedPlaylist) -> _core::Result<Self> {
        let TaggedPlaylist::Playlist(playlist) = from;
        playlist.try_into()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
