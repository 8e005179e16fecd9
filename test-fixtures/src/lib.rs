//! Shared fixtures for anirec tests: small in-memory catalogs and CSV
//! files under `test-fixtures/catalogs/`.

use std::path::PathBuf;

use anirec_core::models::{Catalog, Item};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.file_name().is_some_and(|n| n == "test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Path of the ten-row anime CSV (one empty synopsis, one duplicate title).
pub fn anime_csv_path() -> PathBuf {
    fixture_path("catalogs/anime_small.csv")
}

/// The three-item catalog used throughout the ranking scenarios:
/// A and B share a description, C shares nothing with them.
pub fn scenario_catalog() -> Catalog {
    Catalog::new(vec![
        Item::new("A", "robots fight in space"),
        Item::new("B", "robots fight in space"),
        Item::new("C", "romance in school"),
    ])
}

/// A catalog whose second row repeats the first row's title.
pub fn duplicate_title_catalog() -> Catalog {
    Catalog::new(vec![
        Item::new("Dup", "robots fight in space"),
        Item::new("Dup", "romance in school"),
        Item::new("Space", "space robots"),
        Item::new("School", "school romance club"),
    ])
}

/// A mid-sized in-memory catalog with varied overlap.
pub fn anime_catalog() -> Catalog {
    let rows = [
        ("Mobile Suit Gundam", "A young pilot is drawn into a war between colonies in space when he boards a giant robot."),
        ("Neon Genesis Evangelion", "Teenage pilots control giant robots to defend a city from mysterious angels."),
        ("Cowboy Bebop", "A crew of bounty hunters travels through space aboard their ship chasing criminals."),
        ("Clannad", "A delinquent student meets a lonely girl at school and helps her revive the drama club."),
        ("Toradora!", "Two high school students team up to help each other confess their love."),
        ("Planetes", "Debris collectors work in orbit cleaning up space junk around the planet."),
        ("Kimi ni Todoke", "A shy school girl slowly makes friends and falls in love with a popular classmate."),
        ("Mystery Entry", ""),
        ("Code Geass", "An exiled prince gains a mysterious power and leads a rebellion with robots against an empire."),
    ];
    rows.iter().map(|(t, d)| Item::new(*t, *d)).collect()
}

/// Generate a synthetic catalog of `n` items drawn from a small vocabulary.
pub fn synthetic_catalog(n: usize) -> Catalog {
    const WORDS: &[&str] = &[
        "robot", "pilot", "space", "school", "romance", "ninja", "village", "war", "magic",
        "dragon", "detective", "murder", "idol", "music", "cooking", "sports", "volleyball",
        "demon", "sword", "samurai",
    ];
    (0..n)
        .map(|i| {
            let description: Vec<&str> = (0..6)
                .map(|k| WORDS[(i * 7 + k * 3 + i / 5) % WORDS.len()])
                .collect();
            Item::new(format!("Title {i}"), description.join(" "))
        })
        .collect()
}
