// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::iter::FusedIterator;

use crate::song::Song;

/// A single, non-restartable traversal over the songs of a playlist.
///
/// Once exhausted the cursor keeps returning `None`.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    songs: &'a [Song],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(super) const fn new(songs: &'a [Song]) -> Self {
        Self { songs, position: 0 }
    }

    /// The number of songs that have been yielded so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.position >= self.songs.len()
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        let song = self.songs.get(self.position)?;
        self.position += 1;
        Some(song)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.songs.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

impl FusedIterator for Cursor<'_> {}
