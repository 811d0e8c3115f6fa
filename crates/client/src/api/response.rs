//! Typed API response models.
//!
//! Single resources decode directly; list endpoints wrap their results in
//! the paginated [`Page`] envelope. Cross-resource references (a character's
//! episodes, a location's residents) arrive as absolute URL strings and are
//! fed back through the request builder rather than resolved eagerly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Paginated response envelope for list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub info: PageInfo,
    pub results: Vec<T>,
}

/// Page metadata.
///
/// `next` and `prev`, when present, are fully-qualified URLs for the
/// adjacent pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

impl<T> Page<T> {
    /// URL of the next page, if any.
    pub fn next_url(&self) -> Option<&str> {
        self.info.next.as_deref()
    }

    /// Whether this is the final page of the collection.
    pub fn is_last(&self) -> bool {
        self.info.next.is_none()
    }
}

/// Life status of a character.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

/// Gender of a character.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CharacterGender {
    Female,
    Male,
    Genderless,
    #[serde(rename = "unknown")]
    Unknown,
}

/// Name/URL stub referencing a location from within a character.
///
/// `url` is empty when the location is unknown to the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationRef {
    pub name: String,
    pub url: String,
}

/// A character resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: CharacterGender,
    pub origin: LocationRef,
    pub location: LocationRef,
    pub image: String,
    /// URLs of the episodes this character appears in.
    pub episode: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

/// An episode resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    pub id: u32,
    pub name: String,
    pub air_date: String,
    /// Season/episode code, e.g. "S01E01".
    pub episode: String,
    /// URLs of the characters appearing in this episode.
    pub characters: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

/// A location resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub dimension: String,
    /// URLs of the characters last seen at this location.
    pub residents: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHARACTER_JSON: &str = r#"{
        "id": 1,
        "name": "Rick Sanchez",
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": {
            "name": "Earth (C-137)",
            "url": "https://api.example.com/location/1"
        },
        "location": {
            "name": "Citadel of Ricks",
            "url": "https://api.example.com/location/3"
        },
        "image": "https://cdn.example.com/character/avatar/1.jpeg",
        "episode": [
            "https://api.example.com/episode/1",
            "https://api.example.com/episode/2"
        ],
        "url": "https://api.example.com/character/1",
        "created": "2017-11-04T18:48:46.250Z"
    }"#;

    const EPISODE_JSON: &str = r#"{
        "id": 1,
        "name": "Pilot",
        "air_date": "December 2, 2013",
        "episode": "S01E01",
        "characters": [
            "https://api.example.com/character/1",
            "https://api.example.com/character/2"
        ],
        "url": "https://api.example.com/episode/1",
        "created": "2017-11-10T12:56:33.798Z"
    }"#;

    const LOCATION_JSON: &str = r#"{
        "id": 1,
        "name": "Earth (C-137)",
        "type": "Planet",
        "dimension": "Dimension C-137",
        "residents": [
            "https://api.example.com/character/38"
        ],
        "url": "https://api.example.com/location/1",
        "created": "2017-11-10T12:42:04.162Z"
    }"#;

    #[test]
    fn test_decode_character() {
        let character: Character = serde_json::from_str(CHARACTER_JSON).unwrap();
        assert_eq!(character.id, 1);
        assert_eq!(character.name, "Rick Sanchez");
        assert_eq!(character.status, CharacterStatus::Alive);
        assert_eq!(character.gender, CharacterGender::Male);
        assert_eq!(character.kind, "");
        assert_eq!(character.origin.name, "Earth (C-137)");
        assert_eq!(character.episode.len(), 2);
    }

    #[test]
    fn test_decode_episode() {
        let episode: Episode = serde_json::from_str(EPISODE_JSON).unwrap();
        assert_eq!(episode.name, "Pilot");
        assert_eq!(episode.episode, "S01E01");
        assert_eq!(episode.characters.len(), 2);
    }

    #[test]
    fn test_decode_location() {
        let location: Location = serde_json::from_str(LOCATION_JSON).unwrap();
        assert_eq!(location.kind, "Planet");
        assert_eq!(location.dimension, "Dimension C-137");
        assert_eq!(location.residents.len(), 1);
    }

    #[test]
    fn test_status_and_gender_wire_spellings() {
        let status: CharacterStatus = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(status, CharacterStatus::Unknown);

        let gender: CharacterGender = serde_json::from_str("\"Genderless\"").unwrap();
        assert_eq!(gender, CharacterGender::Genderless);

        assert!(serde_json::from_str::<CharacterStatus>("\"alive\"").is_err());
    }

    #[test]
    fn test_decode_page_with_next() {
        let json = format!(
            r#"{{
                "info": {{
                    "count": 826,
                    "pages": 42,
                    "next": "https://api.example.com/character?page=2",
                    "prev": null
                }},
                "results": [{CHARACTER_JSON}]
            }}"#
        );

        let page: Page<Character> = serde_json::from_str(&json).unwrap();
        assert_eq!(page.info.count, 826);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.next_url(), Some("https://api.example.com/character?page=2"));
        assert!(!page.is_last());
    }

    #[test]
    fn test_decode_final_page() {
        let json = r#"{
            "info": { "count": 3, "pages": 1, "next": null, "prev": null },
            "results": []
        }"#;

        let page: Page<Character> = serde_json::from_str(json).unwrap();
        assert!(page.is_last());
        assert_eq!(page.next_url(), None);
    }
}
