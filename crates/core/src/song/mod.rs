// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::prelude::*;

mod lines;
pub use self::lines::{read_song_lines, write_song_lines};

pub const UNPLUGGED_MARKER: &str = " (unplugged)";

/// Separates multiple songs as well as a song and its variant tags.
pub const SEPARATOR: &str = "; ";

pub const BALLAD_TAG: &str = "ballad";

pub const PIANO_SONG_TAG: &str = "piano song";

/// Denotes a playlist without any songs in the text format.
pub const EMPTY_MARKER: &str = "(empty)";

const BALLAD_SUFFIX: &str = "; ballad";

const PIANO_SONG_SUFFIX: &str = "; piano song";

///////////////////////////////////////////////////////////////////////
// Tempo
///////////////////////////////////////////////////////////////////////

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    FromRepr,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Tempo {
    #[default]
    Slow = 0,
    Moderate = 1,
}

impl Tempo {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

///////////////////////////////////////////////////////////////////////
// Instrument
///////////////////////////////////////////////////////////////////////

/// The dominating instrument of a song.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    FromRepr,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Instrument {
    #[default]
    Piano = 0,
    Organ = 1,
    Guitar = 2,
}

impl Instrument {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

///////////////////////////////////////////////////////////////////////
// SongKind
///////////////////////////////////////////////////////////////////////

/// The variant of a song, derived from its optional attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum SongKind {
    Song,
    Ballad,
    PianoSong,
    PianoBallad,
}

impl SongKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

///////////////////////////////////////////////////////////////////////
// Song
///////////////////////////////////////////////////////////////////////

/// A song is sufficiently described by its title and whether it is
/// an "unplugged" song or not.
///
/// A ballad additionally has a [`Tempo`], a piano song a dominating
/// [`Instrument`]. A piano ballad has both. Songs of different kinds
/// are never equal.
///
/// The text representation appends the variant tags in a fixed order:
///
/// ```text
/// <title>[ (unplugged)][; piano song][; ballad]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Song {
    title: String,
    is_unplugged: bool,
    tempo: Option<Tempo>,
    instrument: Option<Instrument>,
}

impl Song {
    pub fn new(title: impl Into<String>, is_unplugged: bool) -> Result<Self> {
        Self::with_attributes(title, is_unplugged, None, None)
    }

    pub fn ballad(title: impl Into<String>, is_unplugged: bool, tempo: Tempo) -> Result<Self> {
        Self::with_attributes(title, is_unplugged, Some(tempo), None)
    }

    pub fn piano_song(
        title: impl Into<String>,
        is_unplugged: bool,
        instrument: Instrument,
    ) -> Result<Self> {
        Self::with_attributes(title, is_unplugged, None, Some(instrument))
    }

    pub fn piano_ballad(
        title: impl Into<String>,
        is_unplugged: bool,
        tempo: Tempo,
        instrument: Instrument,
    ) -> Result<Self> {
        Self::with_attributes(title, is_unplugged, Some(tempo), Some(instrument))
    }

    pub fn with_attributes(
        title: impl Into<String>,
        is_unplugged: bool,
        tempo: Option<Tempo>,
        instrument: Option<Instrument>,
    ) -> Result<Self> {
        let song = Self {
            title: title.into(),
            is_unplugged,
            tempo,
            instrument,
        };
        song.validate().map_err(|err| {
            log::debug!("Rejecting song {:?}: {err:?}", song.title);
            Error::Validation(format!("song {:?}: {err:?}", song.title))
        })?;
        Ok(song)
    }

    #[must_use]
    pub fn with_tempo(mut self, tempo: Tempo) -> Self {
        self.tempo = Some(tempo);
        self
    }

    #[must_use]
    pub fn with_instrument(mut self, instrument: Instrument) -> Self {
        self.instrument = Some(instrument);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title, leaving the song unchanged if the new
    /// title is rejected.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        if let Some(invalidity) = title_invalidity(&title) {
            return Err(Error::Validation(format!(
                "title {title:?}: {invalidity:?}"
            )));
        }
        self.title = title;
        Ok(())
    }

    #[must_use]
    pub const fn is_unplugged(&self) -> bool {
        self.is_unplugged
    }

    #[must_use]
    pub const fn tempo(&self) -> Option<Tempo> {
        self.tempo
    }

    #[must_use]
    pub const fn instrument(&self) -> Option<Instrument> {
        self.instrument
    }

    #[must_use]
    pub const fn kind(&self) -> SongKind {
        match (self.tempo, self.instrument) {
            (None, None) => SongKind::Song,
            (Some(_), None) => SongKind::Ballad,
            (None, Some(_)) => SongKind::PianoSong,
            (Some(_), Some(_)) => SongKind::PianoBallad,
        }
    }

    /// A short remark about the dominating instrument, if any.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        let instrument = self.instrument?;
        Some(format!(
            "{} is a nice {} song :)",
            self.title,
            instrument.as_str()
        ))
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        <Self as IsValid>::is_valid(self)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            title,
            is_unplugged,
            tempo,
            instrument,
        } = self;
        f.write_str(title)?;
        if *is_unplugged {
            f.write_str(UNPLUGGED_MARKER)?;
        }
        if instrument.is_some() {
            f.write_str(PIANO_SONG_SUFFIX)?;
        }
        if tempo.is_some() {
            f.write_str(BALLAD_SUFFIX)?;
        }
        Ok(())
    }
}

/// Variant attributes that are recovered from their tags take
/// their default values.
impl FromStr for Song {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(FormatError::EmptySong.into());
        }
        let (rest, tempo) = match input.strip_suffix(BALLAD_SUFFIX) {
            Some(rest) => (rest, Some(Tempo::default())),
            None => (input, None),
        };
        let (rest, instrument) = match rest.strip_suffix(PIANO_SONG_SUFFIX) {
            Some(rest) => (rest, Some(Instrument::default())),
            None => (rest, None),
        };
        let (title, is_unplugged) = match rest.strip_suffix(UNPLUGGED_MARKER) {
            Some(title) => (title, true),
            None => (rest, false),
        };
        if title.is_empty() {
            return Err(FormatError::EmptySong.into());
        }
        Self::with_attributes(title, is_unplugged, tempo, instrument)
    }
}

///////////////////////////////////////////////////////////////////////
// Validation
///////////////////////////////////////////////////////////////////////

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TitleInvalidity {
    Empty,
    Untrimmed,
    LineBreak,
    Separator,
    TrailingSemicolon,
    UnpluggedMarker,
    Reserved,
}

/// Titles must survive a round trip through the text format.
#[must_use]
pub fn title_invalidity(title: &str) -> Option<TitleInvalidity> {
    if title.trim().is_empty() {
        return Some(TitleInvalidity::Empty);
    }
    if title.trim() != title {
        return Some(TitleInvalidity::Untrimmed);
    }
    if title.contains(['\n', '\r']) {
        return Some(TitleInvalidity::LineBreak);
    }
    if title.contains(SEPARATOR) {
        return Some(TitleInvalidity::Separator);
    }
    // Followed by a marker or a tag the semicolon turns into a separator.
    if title.ends_with(';') {
        return Some(TitleInvalidity::TrailingSemicolon);
    }
    if title.ends_with(UNPLUGGED_MARKER) {
        return Some(TitleInvalidity::UnpluggedMarker);
    }
    if title == EMPTY_MARKER || title == BALLAD_TAG || title == PIANO_SONG_TAG {
        return Some(TitleInvalidity::Reserved);
    }
    None
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SongInvalidity {
    Title(TitleInvalidity),
}

impl Validate for Song {
    type Invalidity = SongInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let context = ValidationContext::new();
        match title_invalidity(&self.title) {
            Some(invalidity) => context.invalidate(Self::Invalidity::Title(invalidity)),
            None => context,
        }
        .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
