//! Artwork record and identifier

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Unique identifier of an artwork in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(u64);

impl ArtworkId {
    /// Creates an id from its raw value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ArtworkId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One catalog entry.
///
/// Only the id is interpreted by this crate. The display fields are carried
/// through exactly as the catalog returned them; any of them may be `null`
/// on the wire.
///
/// # Example
///
/// ```
/// use artic_lib::model::{Artwork, ArtworkId};
///
/// let artwork = Artwork::new(ArtworkId::new(27992)).title("A Sunday on La Grande Jatte");
/// assert_eq!(artwork.id.get(), 27992);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Catalog id.
    pub id: ArtworkId,
    /// Title of the work.
    #[serde(default)]
    pub title: Option<String>,
    /// Where the work was made.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist name with nationality and life dates, as displayed by the museum.
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscriptions on the work.
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Earliest year associated with the work.
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Latest year associated with the work.
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Creates an artwork with only its id set.
    pub fn new(id: ArtworkId) -> Self {
        Self {
            id,
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the place of origin.
    pub fn place_of_origin(mut self, place: impl Into<String>) -> Self {
        self.place_of_origin = Some(place.into());
        self
    }

    /// Sets the artist display string.
    pub fn artist_display(mut self, artist: impl Into<String>) -> Self {
        self.artist_display = Some(artist.into());
        self
    }

    /// Sets the inscriptions.
    pub fn inscriptions(mut self, inscriptions: impl Into<String>) -> Self {
        self.inscriptions = Some(inscriptions.into());
        self
    }

    /// Sets the date range.
    pub fn dates(mut self, start: i32, end: i32) -> Self {
        self.date_start = Some(start);
        self.date_end = Some(end);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_nulls() {
        let json = r#"{
            "id": 4,
            "title": "Priest and Boy",
            "place_of_origin": "Paris",
            "artist_display": "Lawrence Carmichael Earle\nAmerican, 1845-1921",
            "inscriptions": null,
            "date_start": 1880,
            "date_end": null
        }"#;

        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, ArtworkId::new(4));
        assert_eq!(artwork.title.as_deref(), Some("Priest and Boy"));
        assert_eq!(artwork.inscriptions, None);
        assert_eq!(artwork.date_start, Some(1880));
        assert_eq!(artwork.date_end, None);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let artwork: Artwork = serde_json::from_str(r#"{"id": 12}"#).unwrap();
        assert_eq!(artwork, Artwork::new(ArtworkId::new(12)));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ArtworkId::new(27992).to_string(), "27992");
    }
}
