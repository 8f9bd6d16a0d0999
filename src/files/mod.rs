// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Reading and writing songs and playlists as files.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::Path,
};

use songlist_core::song::{read_song_lines, write_song_lines};

use crate::{FormatSettings, Playlist, Result, Song};

pub fn save_playlist_text(
    path: &Path,
    playlist: &Playlist,
    settings: &FormatSettings,
) -> Result<()> {
    let text = playlist.render_with(settings)?;
    log::debug!(
        "Writing playlist {:?} into {}",
        playlist.name(),
        path.display()
    );
    fs::write(path, text)?;
    Ok(())
}

pub fn load_playlist_text(path: &Path, settings: &FormatSettings) -> Result<Playlist> {
    log::debug!("Reading playlist from {}", path.display());
    let text = fs::read_to_string(path)?;
    // A single trailing line break is ignored.
    let text = text.strip_suffix('\n').unwrap_or(&text);
    Ok(Playlist::parse_with(text, settings)?)
}

pub fn save_song_lines<'a>(
    path: &Path,
    songs: impl IntoIterator<Item = &'a Song>,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_song_lines(&mut writer, songs)?;
    Ok(())
}

pub fn load_song_lines(path: &Path) -> Result<Vec<Song>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(read_song_lines(reader)?)
}

#[cfg(feature = "json")]
pub fn save_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    use std::io::Write as _;

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value).map_err(songlist_core_json::Error::from)?;
    writer.flush()?;
    Ok(())
}

#[cfg(feature = "json")]
pub fn load_json(path: &Path) -> Result<songlist_core_json::Decoded> {
    let text = fs::read_to_string(path)?;
    Ok(songlist_core_json::decode_str(&text)?)
}
