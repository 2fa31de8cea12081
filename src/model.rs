//! Core data types for Map Notes.
//! A note is the only persisted entity; everything else is derived from the list of notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Creation timestamp in milliseconds, doubling as the primary key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    /// Ids coming back from markup attributes are strings; compare them as numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(NoteId)
    }
}

impl From<i64> for NoteId {
    fn from(v: i64) -> Self {
        NoteId(v)
    }
}

/// Latitude/longitude pair. Persisted as a `[lat, lng]` array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// User supplied, normally `YYYY-MM-DD` from the date picker.
    pub date: String,
    /// Raw status code; unknown codes are kept and rendered with defaults.
    pub status: String,
    pub coords: Coords,
}

/// Form fields as entered, before an id and a location are attached.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub date: String,
    pub status: String,
}

impl NoteDraft {
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn into_note(self, id: NoteId, coords: Coords) -> Note {
        Note {
            id,
            title: self.title,
            date: self.date,
            status: self.status,
            coords,
        }
    }
}
