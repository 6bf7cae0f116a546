//! Database operations for the `super_pacs` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use adwatch_core::{Funder, FundingOrganization};

use crate::DbError;

/// A row from the `super_pacs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SuperPacRow {
    pub id: i64,
    pub public_id: Uuid,
    pub name: String,
    pub funder: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SuperPacRow {
    /// Maps the row into the typed domain organization.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidRow`] if the stored funder token is not one
    /// of the enumerated values.
    pub fn into_organization(self) -> Result<FundingOrganization, DbError> {
        let funder: Funder = self
            .funder
            .parse()
            .map_err(|e| DbError::InvalidRow(format!("super pac {}: {e}", self.public_id)))?;
        Ok(FundingOrganization {
            id: self.public_id,
            name: self.name,
            funder,
            description: self.description,
        })
    }
}

/// Returns a single organization by public id, or `None` if not found.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn find_super_pac(pool: &PgPool, public_id: Uuid) -> Result<Option<SuperPacRow>, DbError> {
    let row = sqlx::query_as::<_, SuperPacRow>(
        "SELECT id, public_id, name, funder, description, created_at, updated_at \
         FROM super_pacs \
         WHERE public_id = $1",
    )
    .bind(public_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Returns all organizations, ordered by name.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_super_pacs(pool: &PgPool) -> Result<Vec<SuperPacRow>, DbError> {
    let rows = sqlx::query_as::<_, SuperPacRow>(
        "SELECT id, public_id, name, funder, description, created_at, updated_at \
         FROM super_pacs \
         ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn super_pac_row_maps_into_organization() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let row = SuperPacRow {
            id: 1,
            public_id: Uuid::new_v4(),
            name: "Leading the Future".to_string(),
            funder: "OpenAI+a16z".to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        };
        let org = row.into_organization().expect("map");
        assert_eq!(org.funder, Funder::OpenAiA16z);
        assert_eq!(org.name, "Leading the Future");
    }
}
