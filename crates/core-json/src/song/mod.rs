// SPDX-FileCopyrightText: Copyright (C) 2018-2023 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

mod _core {
    pub(super) use songlist_core::{
        Error, Result,
        song::{Instrument, Song, Tempo},
    };
}

///////////////////////////////////////////////////////////////////////
// Tempo
///////////////////////////////////////////////////////////////////////

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tempo {
    Slow,
    Moderate,
}

impl From<Tempo> for _core::Tempo {
    fn from(from: Tempo) -> Self {
        match from {
            Tempo::Slow => Self::Slow,
            Tempo::Moderate => Self::Moderate,
        }
    }
}

impl From<_core::Tempo> for Tempo {
    fn from(from: _core::Tempo) -> Self {
        use _core::Tempo::*;
        match from {
            Slow => Self::Slow,
            Moderate => Self::Moderate,
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Instrument
///////////////////////////////////////////////////////////////////////

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    #[default]
    Piano,
    Organ,
    Guitar,
}

impl From<Instrument> for _core::Instrument {
    fn from(from: Instrument) -> Self {
        match from {
            Instrument::Piano => Self::Piano,
            Instrument::Organ => Self::Organ,
            Instrument::Guitar => Self::Guitar,
        }
    }
}

impl From<_core::Instrument> for Instrument {
    fn from(from: _core::Instrument) -> Self {
        use _core::Instrument::*;
        match from {
            Piano => Self::Piano,
            Organ => Self::Organ,
            Guitar => Self::Guitar,
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Variant bodies
///////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlainSong {
    title: String,

    #[serde(default)]
    is_unplugged: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Ballad {
    title: String,

    #[serde(default)]
    is_unplugged: bool,

    tempo: Tempo,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PianoSong {
    title: String,

    #[serde(default)]
    is_unplugged: bool,

    #[serde(default)]
    instrument: Instrument,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PianoBallad {
    title: String,

    #[serde(default)]
    is_unplugged: bool,

    tempo: Tempo,

    #[serde(default)]
    instrument: Instrument,
}

///////////////////////////////////////////////////////////////////////
// Song
///////////////////////////////////////////////////////////////////////

/// A song, tagged with the name of its kind.
///
/// ```json
/// {"Ballad": {"title": "Patience", "isUnplugged": true, "tempo": "slow"}}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Song {
    Song(PlainSong),
    Ballad(Ballad),
    PianoSong(PianoSong),
    PianoBallad(PianoBallad),
}

impl From<&_core::Song> for Song {
    fn from(from: &_core::Song) -> Self {
        let title = from.title().to_owned();
        let is_unplugged = from.is_unplugged();
        match (from.tempo(), from.instrument()) {
            (None, None) => Self::Song(PlainSong {
                title,
                is_unplugged,
            }),
            (Some(tempo), None) => Self::Ballad(Ballad {
                title,
                is_unplugged,
                tempo: tempo.into(),
            }),
            (None, Some(instrument)) => Self::PianoSong(PianoSong {
                title,
                is_unplugged,
                instrument: instrument.into(),
            }),
            (Some(tempo), Some(instrument)) => Self::PianoBallad(PianoBallad {
                title,
                is_unplugged,
                tempo: tempo.into(),
                instrument: instrument.into(),
            }),
        }
    }
}

impl From<_core::Song> for Song {
    fn from(from: _core::Song) -> Self {
        Self::from(&from)
    }
}

impl TryFrom<Song> for _core::Song {
    type Error = _core::Error;

    fn try_from(from: Song) -> _core::Result<Self> {
        match from {
            Song::Song(PlainSong {
                title,
                is_unplugged,
            }) => Self::new(title, is_unplugged),
            Song::Ballad(Ballad {
                title,
                is_unplugged,
                tempo,
            }) => Self::ballad(title, is_unplugged, tempo.into()),
            Song::PianoSong(PianoSong {
                title,
                is_unplugged,
                instrument,
            }) => Self::piano_song(title, is_unplugged, instrument.into()),
            Song::PianoBallad(PianoBallad {
                title,
                is_unplugged,
                tempo,
                instrument,
            }) => Self::piano_ballad(title, is_unplugged, tempo.into(), instrument.into()),
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
