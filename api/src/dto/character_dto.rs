//! Character endpoint DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use lor_core::domain::entities::Character;
use lor_shared::Pagination;

/// Query string for the character listing
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CharacterListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
}

impl CharacterListQuery {
    /// Sanitized pagination derived from the query string
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page.unwrap_or(1),
            per_page: self.per_page.unwrap_or(20),
        }
        .validate()
    }
}

/// Public view of a character, keyed by the upstream identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse: Option<String>,
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self {
            id: character.external_id,
            name: character.name,
            wiki_url: character.wiki_url,
            race: character.race,
            birth: character.birth,
            gender: character.gender,
            death: character.death,
            hair: character.hair,
            height: character.height,
            realm: character.realm,
            spouse: character.spouse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn query_defaults_to_first_page() {
        let query = CharacterListQuery {
            page: None,
            per_page: None,
            name: None,
        };
        let pagination = query.pagination();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 20);
    }

    #[test]
    fn query_clamps_oversized_pages() {
        let query = CharacterListQuery {
            page: Some(0),
            per_page: Some(5000),
            name: None,
        };
        let pagination = query.pagination();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 100);
    }

    #[test]
    fn response_exposes_external_id_as_id() {
        let character = Character {
            id: Uuid::new_v4(),
            external_id: "5cd99d4bde30eff6ebccfbbe".to_string(),
            name: "Aragorn II Elessar".to_string(),
            wiki_url: None,
            race: Some("Human".to_string()),
            birth: None,
            gender: None,
            death: None,
            hair: None,
            height: None,
            realm: None,
            spouse: None,
            last_synced_at: Utc::now(),
        };

        let response = CharacterResponse::from(character);
        assert_eq!(response.id, "5cd99d4bde30eff6ebccfbbe");

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("wiki_url").is_none());
        assert_eq!(json["race"], "Human");
    }
}
