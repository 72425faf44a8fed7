//! PostgreSQL implementation of the CharacterRepository trait.
//!
//! Character rows are keyed by `external_id`; the upsert keeps the
//! existing internal id so favorites never dangle across syncs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use lor_core::domain::entities::Character;
use lor_core::errors::DomainError;
use lor_core::repositories::CharacterRepository;
use lor_shared::Pagination;

const CHARACTER_COLUMNS: &str = "id, external_id, name, wiki_url, race, birth, \
     gender, death, hair, height, realm, spouse, last_synced_at";

/// PostgreSQL implementation of CharacterRepository
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Character entity
    fn row_to_character(row: &sqlx::postgres::PgRow) -> Result<Character, DomainError> {
        Ok(Character {
            id: row.try_get("id").map_err(|e| column_error("id", e))?,
            external_id: row
                .try_get("external_id")
                .map_err(|e| column_error("external_id", e))?,
            name: row.try_get("name").map_err(|e| column_error("name", e))?,
            wiki_url: row
                .try_get("wiki_url")
                .map_err(|e| column_error("wiki_url", e))?,
            race: row.try_get("race").map_err(|e| column_error("race", e))?,
            birth: row.try_get("birth").map_err(|e| column_error("birth", e))?,
            gender: row
                .try_get("gender")
                .map_err(|e| column_error("gender", e))?,
            death: row.try_get("death").map_err(|e| column_error("death", e))?,
            hair: row.try_get("hair").map_err(|e| column_error("hair", e))?,
            height: row
                .try_get("height")
                .map_err(|e| column_error("height", e))?,
            realm: row.try_get("realm").map_err(|e| column_error("realm", e))?,
            spouse: row
                .try_get("spouse")
                .map_err(|e| column_error("spouse", e))?,
            last_synced_at: row
                .try_get::<DateTime<Utc>, _>("last_synced_at")
                .map_err(|e| column_error("last_synced_at", e))?,
        })
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    async fn upsert(&self, character: Character) -> Result<Character, DomainError> {
        // ON CONFLICT leaves the existing id in place; RETURNING reports
        // the row as persisted so callers see the stable internal id.
        let query = format!(
            r#"
            INSERT INTO characters (
                id, external_id, name, wiki_url, race, birth,
                gender, death, hair, height, realm, spouse, last_synced_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (external_id) DO UPDATE SET
                name = EXCLUDED.name,
                wiki_url = EXCLUDED.wiki_url,
                race = EXCLUDED.race,
                birth = EXCLUDED.birth,
                gender = EXCLUDED.gender,
                death = EXCLUDED.death,
                hair = EXCLUDED.hair,
                height = EXCLUDED.height,
                realm = EXCLUDED.realm,
                spouse = EXCLUDED.spouse,
                last_synced_at = EXCLUDED.last_synced_at
            RETURNING {}
        "#,
            CHARACTER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(character.id)
            .bind(&character.external_id)
            .bind(&character.name)
            .bind(&character.wiki_url)
            .bind(&character.race)
            .bind(&character.birth)
            .bind(&character.gender)
            .bind(&character.death)
            .bind(&character.hair)
            .bind(&character.height)
            .bind(&character.realm)
            .bind(&character.spouse)
            .bind(character.last_synced_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Failed to upsert character: {}", e),
            })?;

        Self::row_to_character(&row)
    }

    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<Character>, DomainError> {
        let query = format!(
            "SELECT {} FROM characters WHERE external_id = $1 LIMIT 1",
            CHARACTER_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_character(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        pagination: &Pagination,
        name_filter: Option<&str>,
    ) -> Result<Vec<Character>, DomainError> {
        let rows = match name_filter {
            Some(name) => {
                let query = format!(
                    r#"
                    SELECT {}
                    FROM characters
                    WHERE name ILIKE $1
                    ORDER BY name
                    LIMIT $2 OFFSET $3
                "#,
                    CHARACTER_COLUMNS
                );
                sqlx::query(&query)
                    .bind(format!("%{}%", name))
                    .bind(pagination.limit())
                    .bind(pagination.offset())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!(
                    r#"
                    SELECT {}
                    FROM characters
                    ORDER BY name
                    LIMIT $1 OFFSET $2
                "#,
                    CHARACTER_COLUMNS
                );
                sqlx::query(&query)
                    .bind(pagination.limit())
                    .bind(pagination.offset())
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::StoreUnavailable {
            message: format!("Failed to list characters: {}", e),
        })?;

        rows.iter().map(Self::row_to_character).collect()
    }

    async fn count(&self, name_filter: Option<&str>) -> Result<u64, DomainError> {
        let row = match name_filter {
            Some(name) => {
                sqlx::query("SELECT COUNT(*) as count FROM characters WHERE name ILIKE $1")
                    .bind(format!("%{}%", name))
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query("SELECT COUNT(*) as count FROM characters")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::StoreUnavailable {
            message: format!("Failed to count characters: {}", e),
        })?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| column_error("count", e))?;

        Ok(count as u64)
    }

    async fn add_favorite(
        &self,
        user_id: Uuid,
        character_id: Uuid,
    ) -> Result<bool, DomainError> {
        let query = r#"
            INSERT INTO favorites (user_id, character_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, character_id) DO NOTHING
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .bind(character_id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Failed to add favorite: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_favorite(
        &self,
        user_id: Uuid,
        character_id: Uuid,
    ) -> Result<bool, DomainError> {
        let result =
            sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND character_id = $2")
                .bind(user_id)
                .bind(character_id)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::StoreUnavailable {
                    message: format!("Failed to remove favorite: {}", e),
                })?;

        Ok(result.rows_affected() > 0)
    }

    async fn favorites(&self, user_id: Uuid) -> Result<Vec<Character>, DomainError> {
        let query = format!(
            r#"
            SELECT {}
            FROM characters c
            INNER JOIN favorites f ON f.character_id = c.id
            WHERE f.user_id = $1
            ORDER BY c.name
        "#,
            character_columns_qualified()
        );

        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Failed to list favorites: {}", e),
            })?;

        rows.iter().map(Self::row_to_character).collect()
    }
}

fn character_columns_qualified() -> String {
    CHARACTER_COLUMNS
        .split(',')
        .map(|c| format!("c.{}", c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn column_error(column: &str, error: sqlx::Error) -> DomainError {
    DomainError::StoreUnavailable {
        message: format!("Failed to read column '{}': {}", column, error),
    }
}
