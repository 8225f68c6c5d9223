//! PostgreSQL implementation of ProfileRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ProfileId, Repository, Timestamp};
use crate::domain::profiles::{EmailAddress, PersonName, Profile, StreetAddress};
use crate::ports::ProfileRepository;

use super::{column, db_error};

const SELECT_PROFILE: &str = r#"
    SELECT id, first_name, last_name, email, street, number, city,
           postal_code, country, created_at, updated_at
    FROM profiles
"#;

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Profile, ProfileId> for PostgresProfileRepository {
    async fn add(&self, profile: Profile) -> Result<Profile, DomainError> {
        let name = profile.name();
        let address = profile.address();
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO profiles (
                first_name, last_name, email, street, number, city,
                postal_code, country, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(name.first_name())
        .bind(name.last_name())
        .bind(profile.email_address())
        .bind(address.street())
        .bind(address.number())
        .bind(address.city())
        .bind(address.postal_code())
        .bind(address.country())
        .bind(profile.created_at().as_datetime())
        .bind(profile.updated_at().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to insert profile"))?;

        Ok(profile.with_id(ProfileId::new(id)))
    }

    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_PROFILE))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch profile"))?;

        row.as_ref().map(row_to_profile).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
        let rows = sqlx::query(SELECT_PROFILE)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to fetch profiles"))?;

        rows.iter().map(row_to_profile).collect()
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let name = profile.name();
        let address = profile.address();
        let result = sqlx::query(
            r#"
            UPDATE profiles SET
                first_name = $2, last_name = $3, email = $4, street = $5,
                number = $6, city = $7, postal_code = $8, country = $9,
                updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(profile.id().value())
        .bind(name.first_name())
        .bind(name.last_name())
        .bind(profile.email_address())
        .bind(address.street())
        .bind(address.number())
        .bind(address.city())
        .bind(address.postal_code())
        .bind(address.country())
        .bind(profile.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update profile"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::database(format!(
                "Profile not found: {}",
                profile.id()
            )));
        }
        Ok(())
    }

    async fn exists(&self, id: ProfileId) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE id = $1")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to check profile existence"))?;

        Ok(count > 0)
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query(&format!(
            "{} WHERE email = $1 ORDER BY id LIMIT 1",
            SELECT_PROFILE
        ))
        .bind(email.address())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to fetch profile by email"))?;

        row.as_ref().map(row_to_profile).transpose()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_profile(row: &PgRow) -> Result<Profile, DomainError> {
    let first_name: String = column(row, "first_name")?;
    let last_name: String = column(row, "last_name")?;
    let email: String = column(row, "email")?;
    let street: String = column(row, "street")?;
    let number: String = column(row, "number")?;
    let city: String = column(row, "city")?;
    let postal_code: String = column(row, "postal_code")?;
    let country: String = column(row, "country")?;

    Ok(Profile::reconstitute(
        ProfileId::new(column(row, "id")?),
        PersonName::new(&first_name, &last_name).map_err(db_error("Invalid stored name"))?,
        EmailAddress::new(&email).map_err(db_error("Invalid stored email"))?,
        StreetAddress::new(&street, &number, &city, &postal_code, &country)
            .map_err(db_error("Invalid stored address"))?,
        Timestamp::from_datetime(column(row, "created_at")?),
        Timestamp::from_datetime(column(row, "updated_at")?),
    ))
}
