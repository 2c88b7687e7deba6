use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::identity::errors::IdentityError;
use crate::identity::models::EmailAddress;
use crate::identity::models::Identity;
use crate::identity::models::IdentityId;
use crate::identity::models::NewIdentity;
use crate::identity::ports::IdentityRepository;

pub struct PostgresIdentityRepository {
    pool: PgPool,
}

impl PostgresIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct IdentityRow {
    id: i32,
    email: String,
    password_hash: String,
    full_name: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<IdentityRow> for Identity {
    type Error = IdentityError;

    fn try_from(row: IdentityRow) -> Result<Self, Self::Error> {
        Ok(Identity {
            id: IdentityId(row.id),
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            full_name: row.full_name,
            role: row.role.parse()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl IdentityRepository for PostgresIdentityRepository {
    async fn create(&self, identity: NewIdentity) -> Result<Identity, IdentityError> {
        let (id, created_at): (i32, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO users (email, password_hash, full_name, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at
            "#,
        )
        .bind(identity.email.as_str())
        .bind(&identity.password_hash)
        .bind(&identity.full_name)
        .bind(identity.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return IdentityError::EmailTaken(identity.email.to_string());
                }
            }
            IdentityError::StoreUnavailable(e.to_string())
        })?;

        Ok(Identity {
            id: IdentityId(id),
            email: identity.email,
            password_hash: identity.password_hash,
            full_name: identity.full_name,
            role: identity.role,
            created_at,
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError> {
        let row: Option<IdentityRow> = sqlx::query_as(
            r#"
            SELECT id, email, password_hash, full_name, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::StoreUnavailable(e.to_string()))?;

        row.map(Identity::try_from).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, IdentityError> {
        sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| IdentityError::StoreUnavailable(e.to_string()))
    }
}
