// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::civil::date;

use super::*;
use crate::song::{Instrument, Tempo, title_invalidity};

fn song(title: &str) -> Song {
    Song::new(title, false).unwrap()
}

fn my_songs() -> Playlist {
    Playlist::new(
        "My songs",
        [
            song("Across the Universe"),
            Song::new("Imagine", true).unwrap(),
            song("Happiness Is a Warm Gun"),
            Song::piano_ballad("Hey Jude", false, Tempo::Slow, Instrument::Piano).unwrap(),
            Song::ballad("Patience", true, Tempo::Slow).unwrap(),
            song("Love"),
        ],
        date(2019, 2, 4),
        date(2020, 3, 1),
    )
    .unwrap()
}

#[test]
fn display_single_song() {
    let playlist = Playlist::new(
        "My songs",
        [Song::new("Imagine", true).unwrap()],
        date(2020, 1, 1),
        date(2020, 1, 2),
    )
    .unwrap();
    assert_eq!(
        "My songs\nImagine (unplugged)\nJan 01, 2020 - Jan 02, 2020",
        playlist.to_string()
    );
}

#[test]
fn display_empty() {
    let playlist = Playlist::new("Nothing", [], date(2021, 5, 6), date(2021, 5, 6)).unwrap();
    assert_eq!("Nothing\n(empty)\nMay 06, 2021 - May 06, 2021", playlist.to_string());
}

#[test]
fn display_multiple_songs() {
    assert_eq!(
        "My songs\n\
         Across the Universe; Imagine (unplugged); Happiness Is a Warm Gun; \
         Hey Jude; piano song; ballad; Patience (unplugged); ballad; Love\n\
         Feb 04, 2019 - Mar 01, 2020",
        my_songs().to_string()
    );
}

#[test]
fn parse_display_roundtrip() {
    let playlist = my_songs();
    assert_eq!(playlist, playlist.to_string().parse().unwrap());
    let empty = Playlist::new("", [], date(2011, 1, 1), date(2024, 2, 29)).unwrap();
    assert_eq!(empty, empty.to_string().parse().unwrap());
}

#[test]
fn parse_display_roundtrip_edge_case_titles() {
    let titles = [
        "Why",
        "Why ;not",
        ";Why",
        "Ob-La-Di;Ob-La-Da",
        "(unplugged)",
        "Unplugged(unplugged)",
        "(empty) spaces",
        "ballads",
        "piano songs",
        "Love - Hate",
        "1 - 2 - 3",
        "-",
        "Für Elise ♪",
    ];
    let mut songs = Vec::new();
    for title in titles {
        assert_eq!(None, title_invalidity(title), "{title:?}");
        for is_unplugged in [false, true] {
            songs.push(Song::new(title, is_unplugged).unwrap());
            songs.push(Song::ballad(title, is_unplugged, Tempo::default()).unwrap());
            songs.push(Song::piano_song(title, is_unplugged, Instrument::default()).unwrap());
            songs.push(
                Song::piano_ballad(title, is_unplugged, Tempo::default(), Instrument::default())
                    .unwrap(),
            );
        }
    }
    for song in &songs {
        let playlist =
            Playlist::new("Single", [song.clone()], date(2020, 1, 1), date(2020, 1, 1)).unwrap();
        assert_eq!(playlist, playlist.to_string().parse().unwrap(), "{song:?}");
    }
    let playlist = Playlist::new("All", songs, date(2020, 1, 1), date(2020, 1, 2)).unwrap();
    assert_eq!(playlist, playlist.to_string().parse().unwrap());
}

#[test]
fn reject_titles_that_break_the_songs_line() {
    assert!(matches!(Song::new("Why;", true), Err(Error::Validation(_))));
    assert!(matches!(Song::new("Why;", false), Err(Error::Validation(_))));
}

#[test]
fn render_and_parse_with_settings() {
    let settings = FormatSettings {
        date_format: "%Y-%m-%d".to_owned(),
        ..Default::default()
    };
    let playlist = my_songs();
    let rendered = playlist.render_with(&settings).unwrap();
    assert!(rendered.ends_with("\n2019-02-04 - 2020-03-01"));
    assert_eq!(playlist, Playlist::parse_with(&rendered, &settings).unwrap());
    assert_eq!(
        playlist.to_string(),
        playlist.render_with(&FormatSettings::default()).unwrap()
    );
}

#[test]
fn parse_segments() {
    let segments = Segments::parse_with(
        "Mix\nLove; Let It Be; piano song\nJan 02, 2020 - Jan 03, 2020",
        &FormatSettings::default(),
    )
    .unwrap();
    assert_eq!("Mix", segments.name);
    assert_eq!(
        vec![
            song("Love"),
            Song::piano_song("Let It Be", false, Instrument::Piano).unwrap(),
        ],
        segments.songs
    );
    assert_eq!(date(2020, 1, 2), segments.created);
    assert_eq!(date(2020, 1, 3), segments.completed);
}

#[test]
fn parse_wrong_line_count() {
    for (input, found) in [
        ("My songs", 1),
        ("My songs\nLove", 2),
        ("My songs\nLove\nJan 01, 2020 - Jan 02, 2020\n", 4),
    ] {
        let err = input.parse::<Playlist>().unwrap_err();
        assert!(
            matches!(
                err,
                Error::Format(FormatError::LineCount { expected: 3, found: actual }) if actual == found
            ),
            "{err}"
        );
    }
}

#[test]
fn parse_malformed_dates() {
    assert!(matches!(
        "My songs\nLove\nJan 01, 2020".parse::<Playlist>(),
        Err(Error::Format(FormatError::DateRange(_)))
    ));
    assert!(matches!(
        "My songs\nLove\n2020-01-01 - 2020-01-02".parse::<Playlist>(),
        Err(Error::Format(FormatError::Date { .. }))
    ));
}

#[test]
fn parse_malformed_songs() {
    assert!(matches!(
        "My songs\n\nJan 01, 2020 - Jan 02, 2020".parse::<Playlist>(),
        Err(Error::Format(FormatError::EmptySong))
    ));
    assert!(matches!(
        "My songs\nLove; ; Help\nJan 01, 2020 - Jan 02, 2020".parse::<Playlist>(),
        Err(Error::Format(FormatError::EmptySong))
    ));
    assert!(matches!(
        "My songs\nballad; Love\nJan 01, 2020 - Jan 02, 2020".parse::<Playlist>(),
        Err(Error::Format(FormatError::DanglingTag(_)))
    ));
}

#[test]
fn parse_reversed_dates() {
    assert!(matches!(
        "My songs\nLove\nJan 02, 2020 - Jan 01, 2020".parse::<Playlist>(),
        Err(Error::PlaylistDate { .. })
    ));
}

#[test]
fn reject_created_after_completed() {
    let Err(Error::PlaylistDate { created, completed }) =
        Playlist::new("My songs", [], date(2022, 1, 2), date(2022, 1, 1))
    else {
        panic!("expected a date error");
    };
    assert_eq!(date(2022, 1, 2), created);
    assert_eq!(date(2022, 1, 1), completed);
    assert_eq!(
        "playlist creation date (2022-01-02) after playlist completion date (2022-01-01)",
        Error::PlaylistDate { created, completed }.to_string()
    );
}

#[test]
fn reject_name_with_line_break() {
    assert!(matches!(
        Playlist::new_today("My\nsongs", []),
        Err(Error::Validation(_))
    ));
}

#[test]
fn new_today() {
    let playlist = Playlist::new_today("Today", [song("Love")]).unwrap();
    assert_eq!(playlist.created(), playlist.completed());
    assert!(Playlist::is_date_valid(playlist.created()));
    assert!(playlist.is_valid());
}

#[test]
fn equality_is_order_sensitive() {
    let created = date(2020, 1, 1);
    let forward = Playlist::new("P", [song("A"), song("B")], created, created).unwrap();
    let backward = Playlist::new("P", [song("B"), song("A")], created, created).unwrap();
    assert_ne!(forward, backward);
    assert_eq!(
        forward,
        Playlist::new("P", [song("A"), song("B")], created, created).unwrap()
    );
    assert_ne!(
        forward,
        Playlist::new("P", [song("A"), song("B")], created, date(2020, 1, 2)).unwrap()
    );
}

#[test]
fn date_validity() {
    let today = clock::today();
    assert!(Playlist::is_date_valid(date(2011, 1, 1)));
    assert!(!Playlist::is_date_valid(date(2010, 12, 31)));
    assert!(Playlist::is_date_valid(today));
    assert!(!Playlist::is_date_valid(today.tomorrow().unwrap()));
}

#[test]
fn date_validity_at() {
    let settings = FormatSettings {
        valid_since: date(2015, 6, 1),
        ..Default::default()
    };
    let today = date(2016, 1, 1);
    assert!(!Playlist::is_date_valid_at(date(2015, 5, 31), today, &settings));
    assert!(Playlist::is_date_valid_at(date(2015, 6, 1), today, &settings));
    assert!(Playlist::is_date_valid_at(today, today, &settings));
    assert!(!Playlist::is_date_valid_at(date(2016, 1, 2), today, &settings));
}

#[test]
fn cursor_yields_songs_in_order() {
    let created = date(2020, 1, 1);
    let playlist =
        Playlist::new("ABC", [song("A"), song("B"), song("C")], created, created).unwrap();
    fn titles(cursor: Cursor<'_>) -> Vec<&str> {
        cursor.map(Song::title).collect()
    }
    assert_eq!(vec!["A", "B", "C"], titles(playlist.cursor()));
    // A fresh cursor starts from the beginning.
    assert_eq!(vec!["A", "B", "C"], titles(playlist.cursor()));
}

#[test]
fn cursor_stays_exhausted() {
    let created = date(2020, 1, 1);
    let playlist =
        Playlist::new("ABC", [song("A"), song("B"), song("C")], created, created).unwrap();
    let mut cursor = playlist.cursor();
    assert_eq!(3, cursor.len());
    assert_eq!(Some("A"), cursor.next().map(Song::title));
    assert_eq!(Some("B"), cursor.next().map(Song::title));
    assert_eq!(Some("C"), cursor.next().map(Song::title));
    assert!(cursor.is_exhausted());
    assert_eq!(3, cursor.position());
    for _ in 0..3 {
        assert_eq!(None, cursor.next());
    }
    assert_eq!(0, cursor.len());
}

#[test]
fn independent_cursors() {
    let playlist = my_songs();
    let mut first = playlist.cursor();
    let mut second = playlist.cursor();
    first.next();
    first.next();
    assert_eq!(2, first.position());
    assert_eq!(0, second.position());
    assert_eq!(Some(&playlist.songs()[0]), second.next());
    assert_eq!(Some(&playlist.songs()[2]), first.next());
}

#[test]
fn iterate_by_reference() {
    let playlist = my_songs();
    let mut count = 0;
    for (index, song) in (&playlist).into_iter().enumerate() {
        assert_eq!(&playlist.songs()[index], song);
        count += 1;
    }
    assert_eq!(playlist.len(), count);
    assert!(Playlist::new_today("Empty", []).unwrap().cursor().is_exhausted());
}

#[test]
fn play_me() {
    assert_eq!("Play me :)", Playlist::PLAY_ME);
}
