//! PostgreSQL implementation of TutorialRepository.
//!
//! Tutorials live in `tutorials`; their assets in `assets`, ordered by
//! `position`. Writes touching both tables run in one transaction.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::foundation::{CategoryId, DomainError, Repository, Timestamp, TutorialId};
use crate::domain::publishing::{AcmeAssetIdentifier, Asset, AssetType, PublishingStatus, Tutorial};
use crate::ports::TutorialRepository;

use super::{column, db_error};

const SELECT_TUTORIAL: &str = r#"
    SELECT id, title, summary, category_id, created_at, updated_at
    FROM tutorials
"#;

/// PostgreSQL implementation of TutorialRepository.
#[derive(Clone)]
pub struct PostgresTutorialRepository {
    pool: PgPool,
}

impl PostgresTutorialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads assets for the given rows and assembles the aggregates.
    async fn hydrate(&self, rows: Vec<PgRow>) -> Result<Vec<Tutorial>, DomainError> {
        let ids = rows
            .iter()
            .map(|row| column::<i64>(row, "id"))
            .collect::<Result<Vec<_>, _>>()?;
        let mut assets = self.load_assets(&ids).await?;

        rows.iter()
            .map(|row| {
                let id: i64 = column(row, "id")?;
                row_to_tutorial(row, assets.remove(&id).unwrap_or_default())
            })
            .collect()
    }

    async fn load_assets(&self, tutorial_ids: &[i64]) -> Result<HashMap<i64, Vec<Asset>>, DomainError> {
        let mut grouped: HashMap<i64, Vec<Asset>> = HashMap::new();
        if tutorial_ids.is_empty() {
            return Ok(grouped);
        }

        let rows = sqlx::query(
            r#"
            SELECT tutorial_id, identifier, asset_type, status, content
            FROM assets
            WHERE tutorial_id = ANY($1)
            ORDER BY tutorial_id, position
            "#,
        )
        .bind(tutorial_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to fetch assets"))?;

        for row in &rows {
            let tutorial_id: i64 = column(row, "tutorial_id")?;
            grouped.entry(tutorial_id).or_default().push(row_to_asset(row)?);
        }
        Ok(grouped)
    }
}

#[async_trait]
impl Repository<Tutorial, TutorialId> for PostgresTutorialRepository {
    async fn add(&self, tutorial: Tutorial) -> Result<Tutorial, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tutorials (title, summary, category_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(tutorial.title())
        .bind(tutorial.summary())
        .bind(tutorial.category_id().value())
        .bind(tutorial.created_at().as_datetime())
        .bind(tutorial.updated_at().as_datetime())
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to insert tutorial"))?;

        insert_assets(&mut tx, id, tutorial.assets()).await?;
        tx.commit()
            .await
            .map_err(db_error("Failed to commit tutorial"))?;

        Ok(tutorial.with_id(TutorialId::new(id)))
    }

    async fn find_by_id(&self, id: TutorialId) -> Result<Option<Tutorial>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_TUTORIAL))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch tutorial"))?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Tutorial>, DomainError> {
        let rows = sqlx::query(SELECT_TUTORIAL)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to fetch tutorials"))?;

        self.hydrate(rows).await
    }

    async fn update(&self, tutorial: &Tutorial) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let result = sqlx::query(
            r#"
            UPDATE tutorials SET
                title = $2, summary = $3, category_id = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(tutorial.id().value())
        .bind(tutorial.title())
        .bind(tutorial.summary())
        .bind(tutorial.category_id().value())
        .bind(tutorial.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to update tutorial"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::database(format!(
                "Tutorial not found: {}",
                tutorial.id()
            )));
        }

        insert_assets(&mut tx, tutorial.id().value(), tutorial.assets()).await?;
        tx.commit()
            .await
            .map_err(db_error("Failed to commit tutorial"))?;
        Ok(())
    }

    async fn exists(&self, id: TutorialId) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tutorials WHERE id = $1")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to check tutorial existence"))?;

        Ok(count > 0)
    }
}

#[async_trait]
impl TutorialRepository for PostgresTutorialRepository {
    async fn find_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Tutorial>, DomainError> {
        let rows = sqlx::query(&format!("{} WHERE category_id = $1", SELECT_TUTORIAL))
            .bind(category_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to fetch tutorials by category"))?;

        self.hydrate(rows).await
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Inserts assets not yet stored. Existing identifiers are left untouched.
async fn insert_assets(
    tx: &mut Transaction<'_, Postgres>,
    tutorial_id: i64,
    assets: &[Asset],
) -> Result<(), DomainError> {
    for (position, asset) in assets.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO assets (identifier, tutorial_id, position, asset_type, status, content)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (identifier) DO NOTHING
            "#,
        )
        .bind(asset.identifier().as_uuid())
        .bind(tutorial_id)
        .bind(position as i32)
        .bind(asset.asset_type().as_str())
        .bind(asset.status().as_str())
        .bind(asset.content())
        .execute(&mut **tx)
        .await
        .map_err(db_error("Failed to insert asset"))?;
    }
    Ok(())
}

fn row_to_tutorial(row: &PgRow, assets: Vec<Asset>) -> Result<Tutorial, DomainError> {
    Ok(Tutorial::reconstitute(
        TutorialId::new(column(row, "id")?),
        column(row, "title")?,
        column(row, "summary")?,
        CategoryId::new(column(row, "category_id")?),
        assets,
        Timestamp::from_datetime(column(row, "created_at")?),
        Timestamp::from_datetime(column(row, "updated_at")?),
    ))
}

fn row_to_asset(row: &PgRow) -> Result<Asset, DomainError> {
    let identifier: Uuid = column(row, "identifier")?;
    let asset_type: String = column(row, "asset_type")?;
    let status: String = column(row, "status")?;
    let content: String = column(row, "content")?;

    decode_asset(identifier, &asset_type, &status, &content)
}

fn decode_asset(
    identifier: Uuid,
    asset_type: &str,
    status: &str,
    content: &str,
) -> Result<Asset, DomainError> {
    let asset_type: AssetType = asset_type
        .parse()
        .map_err(db_error("Invalid stored asset type"))?;
    let status: PublishingStatus = status
        .parse()
        .map_err(db_error("Invalid stored publishing status"))?;

    Asset::reconstitute(
        AcmeAssetIdentifier::from_uuid(identifier),
        status,
        asset_type,
        content,
    )
    .map_err(db_error("Invalid stored asset"))
}
