// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io::{BufRead, Write};

use super::Song;
use crate::Result;

/// Writes the text representation of each song on a separate line.
pub fn write_song_lines<'a, W>(
    writer: &mut W,
    songs: impl IntoIterator<Item = &'a Song>,
) -> Result<()>
where
    W: Write + ?Sized,
{
    for song in songs {
        writeln!(writer, "{song}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads songs line by line until the input ends or an empty line
/// is encountered.
pub fn read_song_lines<R>(reader: R) -> Result<Vec<Song>>
where
    R: BufRead,
{
    let mut songs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            break;
        }
        songs.push(line.parse()?);
    }
    log::debug!("Read {} song(s)", songs.len());
    Ok(songs)
}
