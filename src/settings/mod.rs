// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, bail};
use songlist_core::prelude::*;

use crate::FormatSettings;

pub const FILE_NAME: &str = "songlist_settings";

pub const FILE_SUFFIX: &str = "ron";

#[must_use]
pub fn new_settings_file_path(mut parent_dir: PathBuf) -> PathBuf {
    parent_dir.push(FILE_NAME);
    parent_dir.set_extension(FILE_SUFFIX);
    parent_dir
}

/// Loads the settings stored in `parent_dir`.
///
/// A missing file results in the default settings.
pub fn load(parent_dir: &Path) -> anyhow::Result<FormatSettings> {
    let file_path = new_settings_file_path(parent_dir.to_path_buf());
    log::info!("Loading settings from file: {}", file_path.display());
    let settings: FormatSettings = match fs::read(&file_path) {
        Ok(bytes) => ron::de::from_bytes(&bytes)
            .with_context(|| format!("malformed settings file {}", file_path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("No settings file found, using defaults");
            return Ok(FormatSettings::default());
        }
        Err(err) => return Err(err.into()),
    };
    if let Err(err) = settings.validate() {
        bail!("invalid settings: {err:?}");
    }
    Ok(settings)
}

/// Loads the settings stored in `parent_dir` or falls back to the defaults.
#[must_use]
pub fn restore_from_parent_dir(parent_dir: &Path) -> FormatSettings {
    load(parent_dir)
        .map_err(|err| {
            log::warn!("Failed to load saved settings: {err:#}");
        })
        .unwrap_or_default()
}

pub fn save(settings: &FormatSettings, parent_dir: &Path) -> anyhow::Result<()> {
    if !settings.is_valid() {
        bail!("refusing to save invalid settings");
    }
    let file_path = new_settings_file_path(parent_dir.to_path_buf());
    log::info!("Saving current settings into file: {}", file_path.display());
    let text = ron::ser::to_string_pretty(settings, ron::ser::PrettyConfig::default())?;
    if let Some(parent_path) = file_path.parent() {
        fs::create_dir_all(parent_path)?;
    }
    fs::write(&file_path, text)?;
    Ok(())
}
