// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use jiff::civil::Date;

use crate::{
    FormatSettings,
    prelude::*,
    song::{BALLAD_TAG, EMPTY_MARKER, PIANO_SONG_TAG, SEPARATOR, Song},
    util::clock::{self, DEFAULT_DATE_FORMAT, format_date, parse_date},
};

mod cursor;
pub use self::cursor::Cursor;

/// Separates the creation and the completion date.
pub const DATE_RANGE_SEPARATOR: &str = " - ";

/// The text format consists of the name, the songs and the dates.
pub const LINE_COUNT: usize = 3;

///////////////////////////////////////////////////////////////////////
// Playlist
///////////////////////////////////////////////////////////////////////

/// An ordered list of songs together with the dates when the
/// playlist was created and completed.
///
/// The creation date never succeeds the completion date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playlist {
    name: String,
    songs: Vec<Song>,
    created: Date,
    completed: Date,
}

impl Playlist {
    pub const PLAY_ME: &'static str = "Play me :)";

    pub fn new(
        name: impl Into<String>,
        songs: impl IntoIterator<Item = Song>,
        created: Date,
        completed: Date,
    ) -> Result<Self> {
        if created > completed {
            log::debug!("Rejecting playlist: created on {created}, completed on {completed}");
            return Err(Error::PlaylistDate { created, completed });
        }
        let playlist = Self {
            name: name.into(),
            songs: songs.into_iter().collect(),
            created,
            completed,
        };
        playlist
            .validate()
            .map_err(|err| Error::Validation(format!("playlist {:?}: {err:?}", playlist.name)))?;
        Ok(playlist)
    }

    /// Created and completed today.
    pub fn new_today(
        name: impl Into<String>,
        songs: impl IntoIterator<Item = Song>,
    ) -> Result<Self> {
        let today = clock::today();
        Self::new(name, songs, today, today)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    #[must_use]
    pub fn into_songs(self) -> Vec<Song> {
        self.songs
    }

    #[must_use]
    pub const fn created(&self) -> Date {
        self.created
    }

    #[must_use]
    pub const fn completed(&self) -> Date {
        self.completed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Starts a new traversal over all songs.
    ///
    /// Each cursor maintains its own position, independent of
    /// any other cursors.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.songs)
    }

    /// Checks if a date is suitable for a playlist, i.e. between
    /// Jan 01, 2011 and today.
    ///
    /// Not enforced when constructing a playlist.
    #[must_use]
    pub fn is_date_valid(date: Date) -> bool {
        Self::is_date_valid_at(date, clock::today(), &FormatSettings::default())
    }

    #[must_use]
    pub fn is_date_valid_at(date: Date, today: Date, settings: &FormatSettings) -> bool {
        clock::is_date_between(date, settings.valid_since, today)
    }

    /// Renders the text representation, see also [`fmt::Display`].
    pub fn render_with(&self, settings: &FormatSettings) -> Result<String> {
        let Self {
            name,
            songs,
            created,
            completed,
        } = self;
        let created = format_date(*created, &settings.date_format)?;
        let completed = format_date(*completed, &settings.date_format)?;
        Ok(format!(
            "{name}\n{songs}\n{created}{DATE_RANGE_SEPARATOR}{completed}",
            songs = SongsLine(songs),
        ))
    }

    pub fn parse_with(input: &str, settings: &FormatSettings) -> Result<Self> {
        Segments::parse_with(input, settings)?.try_into()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        <Self as IsValid>::is_valid(self)
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Song;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

struct SongsLine<'a>(&'a [Song]);

impl fmt::Display for SongsLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(songs) = self;
        let mut songs = songs.iter();
        let Some(first) = songs.next() else {
            return f.write_str(EMPTY_MARKER);
        };
        write!(f, "{first}")?;
        for song in songs {
            write!(f, "{SEPARATOR}{song}")?;
        }
        Ok(())
    }
}

/// Uses the default date pattern.
impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            name,
            songs,
            created,
            completed,
        } = self;
        write!(
            f,
            "{name}\n{songs}\n{created}{DATE_RANGE_SEPARATOR}{completed}",
            songs = SongsLine(songs),
            created = created.strftime(DEFAULT_DATE_FORMAT),
            completed = completed.strftime(DEFAULT_DATE_FORMAT),
        )
    }
}

impl FromStr for Playlist {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse_with(input, &FormatSettings::default())
    }
}

///////////////////////////////////////////////////////////////////////
// Segments
///////////////////////////////////////////////////////////////////////

/// The contents of the text representation, split into its
/// typical segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segments {
    pub name: String,
    pub songs: Vec<Song>,
    pub created: Date,
    pub completed: Date,
}

impl Segments {
    pub fn parse_with(input: &str, settings: &FormatSettings) -> Result<Self> {
        let lines = input.split('\n').collect::<Vec<_>>();
        let [name, songs, dates] = lines.as_slice() else {
            return Err(FormatError::LineCount {
                expected: LINE_COUNT,
                found: lines.len(),
            }
            .into());
        };
        let songs = parse_songs_line(songs)?;
        let Some((created, completed)) = dates.split_once(DATE_RANGE_SEPARATOR) else {
            return Err(FormatError::DateRange((*dates).to_owned()).into());
        };
        let created = parse_date(created, &settings.date_format)?;
        let completed = parse_date(completed, &settings.date_format)?;
        Ok(Self {
            name: (*name).to_owned(),
            songs,
            created,
            completed,
        })
    }
}

impl TryFrom<Segments> for Playlist {
    type Error = Error;

    fn try_from(from: Segments) -> Result<Self> {
        let Segments {
            name,
            songs,
            created,
            completed,
        } = from;
        Self::new(name, songs, created, completed)
    }
}

fn parse_songs_line(line: &str) -> Result<Vec<Song>> {
    if line == EMPTY_MARKER {
        return Ok(Vec::new());
    }
    // Variant tags are separated like songs and need to be
    // joined with their preceding song again.
    let mut entries: Vec<String> = Vec::new();
    for segment in line.split(SEPARATOR) {
        if segment == BALLAD_TAG || segment == PIANO_SONG_TAG {
            let Some(entry) = entries.last_mut() else {
                return Err(FormatError::DanglingTag(segment.to_owned()).into());
            };
            entry.push_str(SEPARATOR);
            entry.push_str(segment);
            continue;
        }
        entries.push(segment.to_owned());
    }
    entries.iter().map(|entry| entry.parse()).collect()
}

///////////////////////////////////////////////////////////////////////
// Validation
///////////////////////////////////////////////////////////////////////

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaylistInvalidity {
    NameLineBreak,
    CreatedAfterCompleted,
}

impl Validate for Playlist {
    type Invalidity = PlaylistInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            name,
            created,
            completed,
            ..
        } = self;
        ValidationContext::new()
            .invalidate_if(
                name.contains(['\n', '\r']),
                Self::Invalidity::NameLineBreak,
            )
            .invalidate_if(created > completed, Self::Invalidity::CreatedAfterCompleted)
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
