// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Encoding and decoding of tagged JSON documents.
//!
//! Every song or playlist is wrapped into an object with a single key,
//! the type tag. Values with unknown tags are passed through unchanged
//! when decoding, which allows other decoders to handle them.

use std::any::{Any, type_name};

use serde_json::Value;

use crate::{playlist::TaggedPlaylist, prelude::*, song::Song};

mod _core {
    pub(super) use songlist_core::{Playlist, Song, SongKind};
}

pub const PLAYLIST_TAG: &str = "Playlist";

/// The result of decoding a JSON value.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
    Song(_core::Song),
    Playlist(_core::Playlist),
    List(Vec<Decoded>),

    /// A value that is not tagged with any known type.
    Other(Value),
}

impl Decoded {
    #[must_use]
    pub fn into_song(self) -> Option<_core::Song> {
        match self {
            Self::Song(song) => Some(song),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_playlist(self) -> Option<_core::Playlist> {
        match self {
            Self::Playlist(playlist) => Some(playlist),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_list(self) -> Option<Vec<Decoded>> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Encoding
///////////////////////////////////////////////////////////////////////

pub fn encode_song(song: &_core::Song) -> Result<Value> {
    serde_json::to_value(Song::from(song)).map_err(Into::into)
}

pub fn encode_songs<'a>(songs: impl IntoIterator<Item = &'a _core::Song>) -> Result<Value> {
    let songs = songs.into_iter().map(Song::from).collect::<Vec<_>>();
    serde_json::to_value(songs).map_err(Into::into)
}

pub fn encode_playlist(playlist: &_core::Playlist) -> Result<Value> {
    serde_json::to_value(TaggedPlaylist::from(playlist)).map_err(Into::into)
}

pub fn encode_playlists<'a>(
    playlists: impl IntoIterator<Item = &'a _core::Playlist>,
) -> Result<Value> {
    let playlists = playlists
        .into_iter()
        .map(TaggedPlaylist::from)
        .collect::<Vec<_>>();
    serde_json::to_value(playlists).map_err(Into::into)
}

/// Encodes a value of any type that has a JSON encoding.
///
/// Supported are songs, playlists and vectors of either of them.
/// Values of all other types are rejected.
pub fn encode_any<T: Any>(value: &T) -> Result<Value> {
    let value = value as &dyn Any;
    if let Some(song) = value.downcast_ref::<_core::Song>() {
        return encode_song(song);
    }
    if let Some(playlist) = value.downcast_ref::<_core::Playlist>() {
        return encode_playlist(playlist);
    }
    if let Some(songs) = value.downcast_ref::<Vec<_core::Song>>() {
        return encode_songs(songs);
    }
    if let Some(playlists) = value.downcast_ref::<Vec<_core::Playlist>>() {
        return encode_playlists(playlists);
    }
    let type_name = type_name::<T>();
    log::warn!("Cannot encode value of type {type_name}");
    Err(Error::TypeMismatch { type_name })
}

///////////////////////////////////////////////////////////////////////
// Decoding
///////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tag {
    Song,
    Playlist,
}

fn known_tag(value: &Value) -> Option<Tag> {
    let Value::Object(object) = value else {
        return None;
    };
    if object.len() != 1 {
        return None;
    }
    let key = object.keys().next()?;
    if key == PLAYLIST_TAG {
        return Some(Tag::Playlist);
    }
    key.parse::<_core::SongKind>().ok().map(|_| Tag::Song)
}

/// Decodes a JSON value.
///
/// Arrays are decoded element-wise. Objects that are not tagged with a
/// known type and all other values are returned as [`Decoded::Other`].
pub fn decode(value: Value) -> Result<Decoded> {
    if let Value::Array(values) = value {
        return values
            .into_iter()
            .map(decode)
            .collect::<Result<Vec<_>>>()
            .map(Decoded::List);
    }
    match known_tag(&value) {
        Some(Tag::Song) => {
            let song = serde_json::from_value::<Song>(value)?;
            Ok(Decoded::Song(song.try_into()?))
        }
        Some(Tag::Playlist) => {
            let playlist = serde_json::from_value::<TaggedPlaylist>(value)?;
            Ok(Decoded::Playlist(playlist.try_into()?))
        }
        None => {
            log::debug!("Passing through untagged value");
            Ok(Decoded::Other(value))
        }
    }
}

pub fn decode_str(json: &str) -> Result<Decoded> {
    decode(serde_json::from_str(json)?)
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
