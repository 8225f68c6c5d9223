//! PostgreSQL implementation of CategoryRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{CategoryId, DomainError, Repository, Timestamp};
use crate::domain::publishing::Category;
use crate::ports::CategoryRepository;

use super::{column, db_error};

/// PostgreSQL implementation of CategoryRepository.
#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Category, CategoryId> for PostgresCategoryRepository {
    async fn add(&self, category: Category) -> Result<Category, DomainError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO categories (name, created_at, updated_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(category.name())
        .bind(category.created_at().as_datetime())
        .bind(category.updated_at().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to insert category"))?;

        Ok(category.with_id(CategoryId::new(id)))
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, created_at, updated_at FROM categories WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to fetch category"))?;

        row.as_ref().map(row_to_category).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let rows = sqlx::query("SELECT id, name, created_at, updated_at FROM categories")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to fetch categories"))?;

        rows.iter().map(row_to_category).collect()
    }

    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE categories SET name = $2, updated_at = $3 WHERE id = $1")
            .bind(category.id().value())
            .bind(category.name())
            .bind(category.updated_at().as_datetime())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update category"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::database(format!(
                "Category not found: {}",
                category.id()
            )));
        }
        Ok(())
    }

    async fn exists(&self, id: CategoryId) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE id = $1")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to check category existence"))?;

        Ok(count > 0)
    }
}

impl CategoryRepository for PostgresCategoryRepository {}

fn row_to_category(row: &PgRow) -> Result<Category, DomainError> {
    Ok(Category::reconstitute(
        CategoryId::new(column(row, "id")?),
        column(row, "name")?,
        Timestamp::from_datetime(column(row, "created_at")?),
        Timestamp::from_datetime(column(row, "updated_at")?),
    ))
}
