//! Deterministic daily puzzle selection.
//!
//! Every installation must converge on the same puzzle for a given local
//! calendar day without a server round-trip, so selection is driven by a
//! seed derived from the date alone. The derivation chain is:
//!
//! ```text
//! local date -> "{year}-{month}-{day}" -> 32-bit rolling hash -> seed
//! seed -> sin-based pseudo-random float -> catalog index
//! ```
//!
//! The rolling hash uses explicit `i32` wrapping arithmetic so the seed is
//! bit-for-bit reproducible from the same date string. The float stage uses
//! the platform `f64::sin`, which makes determinism client-local: every
//! build of this crate agrees with itself on a given day.

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::melody::{Melody, MelodyCatalog};

/// Epoch for puzzle numbering: puzzle #1 is 2025-01-01.
const EPOCH: (i32, u32, u32) = (2025, 1, 1);

/// Offset added to the daily seed when picking a theme.
const THEME_SEED_OFFSET: i32 = 100;

/// Offset added to the daily seed when picking within a themed pool.
const POOL_SEED_OFFSET: i32 = 200;

/// How many previous days' picks the themed selector avoids repeating.
const RECENT_EXCLUSION_DAYS: u64 = 7;

/// Derives the deterministic seed for a calendar date.
///
/// The date is formatted as `"{year}-{month}-{day}"` with no zero padding
/// (e.g., `"2025-3-7"`), then hashed with the 32-bit rolling scheme
/// `hash = (hash << 5) - hash + byte`, wrapping at every step, and the
/// absolute value is taken at the end.
pub fn seed_for_date(date: NaiveDate) -> i32 {
    let key = format!("{}-{}-{}", date.year(), date.month(), date.day());
    let mut hash: i32 = 0;
    for byte in key.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(byte as i32);
    }
    hash.wrapping_abs()
}

/// Seed for the current local calendar day.
pub fn daily_seed() -> i32 {
    seed_for_date(Local::now().date_naive())
}

/// Deterministic pseudo-random float in `[0, 1)` for an integer seed.
///
/// `x = sin(seed) * 10000`, fractional part. Cheap and fully repeatable;
/// not random in any cryptographic sense, and nearby seeds produce
/// uncorrelated-looking values.
pub fn seeded_random(seed: i32) -> f64 {
    let x = f64::from(seed).sin() * 10000.0;
    x - x.floor()
}

/// Sequential puzzle number for a calendar date.
///
/// Whole-day distance from the 2025-01-01 epoch, plus one. The distance is
/// taken as an absolute value, so dates before the epoch count backwards
/// and still yield a positive number. Always >= 1.
pub fn puzzle_number_for_date(date: NaiveDate) -> u32 {
    let (y, m, d) = EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d).expect("valid epoch date");
    let days = (date - epoch).num_days().unsigned_abs();
    (days + 1) as u32
}

/// Puzzle number for the current local calendar day.
pub fn daily_puzzle_number() -> u32 {
    puzzle_number_for_date(Local::now().date_naive())
}

/// Maps a pseudo-random float in `[0, 1)` onto an index in `[0, len)`.
fn index_from(random: f64, len: usize) -> usize {
    ((random * len as f64) as usize).min(len - 1)
}

/// A thematic grouping of catalog melodies.
///
/// A melody belongs to a theme when its genre appears in the theme's genre
/// list, or its mood appears in the theme's mood list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Display name of the theme.
    pub name: &'static str,
    /// Genres mapped onto this theme.
    pub genres: &'static [&'static str],
    /// Moods matched directly.
    pub moods: &'static [&'static str],
}

impl Theme {
    /// Whether a melody belongs to this theme.
    pub fn matches(&self, melody: &Melody) -> bool {
        self.genres.contains(&melody.genre.as_str())
            || self.moods.contains(&melody.mood.as_str())
    }
}

/// The fixed theme table used by the themed daily selector.
pub const THEMES: &[Theme] = &[
    Theme {
        name: "Classical Masters",
        genres: &["classical", "opera", "waltz", "march"],
        moods: &[],
    },
    Theme {
        name: "Folk Traditions",
        genres: &["folk", "celtic", "spiritual", "blues", "tango"],
        moods: &[],
    },
    Theme {
        name: "Childhood Corner",
        genres: &["nursery", "lullaby", "practice"],
        moods: &["playful"],
    },
    Theme {
        name: "Festive Days",
        genres: &["holiday", "anthem", "celebration"],
        moods: &["festive"],
    },
    Theme {
        name: "Stage and Screen",
        genres: &["jazz", "ragtime", "pop", "film"],
        moods: &["dreamy"],
    },
    Theme {
        name: "Quiet Hours",
        genres: &["lullaby"],
        moods: &["calm", "melancholy"],
    },
];

/// A themed daily selection: the melody plus the theme that framed it.
#[derive(Debug, Clone, Copy)]
pub struct ThemedPick<'a> {
    /// The selected melody.
    pub melody: &'a Melody,
    /// The theme chosen for the day.
    pub theme: &'static Theme,
}

impl MelodyCatalog {
    /// The plain daily melody for a calendar date.
    ///
    /// Deterministic for the whole day; changes only when the date rolls
    /// over. The catalog is non-empty by construction, so the index is
    /// always in range.
    pub fn melody_for_date(&self, date: NaiveDate) -> &Melody {
        let index = index_from(seeded_random(seed_for_date(date)), self.len());
        self.get(index).expect("index bounded by catalog length")
    }

    /// The plain daily melody for the current local day.
    pub fn daily_melody(&self) -> &Melody {
        self.melody_for_date(Local::now().date_naive())
    }

    /// The themed daily melody for a calendar date.
    ///
    /// Layered on top of the plain selector:
    ///
    /// 1. pick a theme with `seed + 100`;
    /// 2. filter the catalog to that theme, falling back to the whole
    ///    catalog if the theme has no members;
    /// 3. drop melodies that were the plain daily pick on any of the 7
    ///    previous days, falling back to the unfiltered themed pool if
    ///    that empties it;
    /// 4. pick from the remainder with `seed + 200`.
    pub fn themed_melody_for_date(&self, date: NaiveDate) -> ThemedPick<'_> {
        let seed = seed_for_date(date);

        let theme_random = seeded_random(seed.wrapping_add(THEME_SEED_OFFSET));
        let theme = &THEMES[index_from(theme_random, THEMES.len())];

        let mut pool: Vec<&Melody> = self.iter().filter(|m| theme.matches(m)).collect();
        if pool.is_empty() {
            pool = self.iter().collect();
        }

        let recent: Vec<&str> = (1..=RECENT_EXCLUSION_DAYS)
            .filter_map(|back| date.checked_sub_days(Days::new(back)))
            .map(|prior| self.melody_for_date(prior).name.as_str())
            .collect();
        let fresh: Vec<&Melody> = pool
            .iter()
            .copied()
            .filter(|m| !recent.contains(&m.name.as_str()))
            .collect();
        let pool = if fresh.is_empty() { pool } else { fresh };

        let pick_random = seeded_random(seed.wrapping_add(POOL_SEED_OFFSET));
        ThemedPick {
            melody: pool[index_from(pick_random, pool.len())],
            theme,
        }
    }

    /// The themed daily melody for the current local day.
    pub fn themed_daily_melody(&self) -> ThemedPick<'_> {
        self.themed_melody_for_date(Local::now().date_naive())
    }
}
