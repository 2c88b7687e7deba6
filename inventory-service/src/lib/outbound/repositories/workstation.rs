use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::workstation::errors::WorkstationError;
use crate::workstation::models::NewWorkstation;
use crate::workstation::models::Workstation;
use crate::workstation::models::WorkstationId;
use crate::workstation::models::WorkstationStatus;
use crate::workstation::ports::WorkstationRepository;

pub struct PostgresWorkstationRepository {
    pool: PgPool,
}

impl PostgresWorkstationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct WorkstationRow {
    id: i32,
    name: String,
    status: String,
    grid_x: i32,
    grid_y: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<WorkstationRow> for Workstation {
    type Error = WorkstationError;

    fn try_from(row: WorkstationRow) -> Result<Self, Self::Error> {
        Ok(Workstation {
            id: WorkstationId(row.id),
            name: row.name,
            status: row.status.parse()?,
            grid_x: row.grid_x,
            grid_y: row.grid_y,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl WorkstationRepository for PostgresWorkstationRepository {
    async fn create(&self, workstation: NewWorkstation) -> Result<Workstation, WorkstationError> {
        let (id, created_at): (i32, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO workstations (name, status, grid_x, grid_y)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at
            "#,
        )
        .bind(&workstation.name)
        .bind(workstation.status.as_str())
        .bind(workstation.grid_x)
        .bind(workstation.grid_y)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return WorkstationError::NameTaken(workstation.name.clone());
                }
            }
            WorkstationError::StoreUnavailable(e.to_string())
        })?;

        Ok(Workstation {
            id: WorkstationId(id),
            name: workstation.name,
            status: workstation.status,
            grid_x: workstation.grid_x,
            grid_y: workstation.grid_y,
            created_at,
        })
    }

    async fn find_by_id(
        &self,
        id: WorkstationId,
    ) -> Result<Option<Workstation>, WorkstationError> {
        let row: Option<WorkstationRow> = sqlx::query_as(
            r#"
            SELECT id, name, status, grid_x, grid_y, created_at
            FROM workstations
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| WorkstationError::StoreUnavailable(e.to_string()))?;

        row.map(Workstation::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Workstation>, WorkstationError> {
        let rows: Vec<WorkstationRow> = sqlx::query_as(
            r#"
            SELECT id, name, status, grid_x, grid_y, created_at
            FROM workstations
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| WorkstationError::StoreUnavailable(e.to_string()))?;

        rows.into_iter().map(Workstation::try_from).collect()
    }

    async fn update_status(
        &self,
        id: WorkstationId,
        status: WorkstationStatus,
    ) -> Result<Option<Workstation>, WorkstationError> {
        let row: Option<WorkstationRow> = sqlx::query_as(
            r#"
            UPDATE workstations
            SET status = $2
            WHERE id = $1
            RETURNING id, name, status, grid_x, grid_y, created_at
            "#,
        )
        .bind(id.0)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| WorkstationError::StoreUnavailable(e.to_string()))?;

        row.map(Workstation::try_from).transpose()
    }

    async fn delete(&self, id: WorkstationId) -> Result<bool, WorkstationError> {
        let result = sqlx::query(
            r#"
            DELETE FROM workstations
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| WorkstationError::StoreUnavailable(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
