use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::identity::models::IdentityId;
use crate::maintenance::errors::MaintenanceError;
use crate::maintenance::models::MaintenanceLog;
use crate::maintenance::models::MaintenanceLogId;
use crate::maintenance::models::NewMaintenanceLog;
use crate::maintenance::ports::MaintenanceRepository;
use crate::workstation::models::WorkstationId;

pub struct PostgresMaintenanceRepository {
    pool: PgPool,
}

impl PostgresMaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MaintenanceLogRow {
    id: i32,
    workstation_id: i32,
    maintenance_type: String,
    performed_by_user_id: Option<i32>,
    notes: Option<String>,
    performed_at: DateTime<Utc>,
}

impl From<MaintenanceLogRow> for MaintenanceLog {
    fn from(row: MaintenanceLogRow) -> Self {
        MaintenanceLog {
            id: MaintenanceLogId(row.id),
            workstation_id: WorkstationId(row.workstation_id),
            maintenance_type: row.maintenance_type,
            performed_by: row.performed_by_user_id.map(IdentityId),
            notes: row.notes,
            performed_at: row.performed_at,
        }
    }
}

#[async_trait]
impl MaintenanceRepository for PostgresMaintenanceRepository {
    async fn create(&self, log: NewMaintenanceLog) -> Result<MaintenanceLog, MaintenanceError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO maintenance_logs
                (workstation_id, maintenance_type, performed_by_user_id, notes, performed_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(log.workstation_id.0)
        .bind(&log.maintenance_type)
        .bind(log.performed_by.map(|id| id.0))
        .bind(&log.notes)
        .bind(log.performed_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation()
                    && db_err.constraint() == Some("maintenance_logs_workstation_id_fkey")
                {
                    return MaintenanceError::UnknownWorkstation(log.workstation_id.0);
                }
            }
            MaintenanceError::StoreUnavailable(e.to_string())
        })?;

        Ok(MaintenanceLog {
            id: MaintenanceLogId(id),
            workstation_id: log.workstation_id,
            maintenance_type: log.maintenance_type,
            performed_by: log.performed_by,
            notes: log.notes,
            performed_at: log.performed_at,
        })
    }

    async fn list_for_workstation(
        &self,
        workstation_id: WorkstationId,
    ) -> Result<Vec<MaintenanceLog>, MaintenanceError> {
        let rows: Vec<MaintenanceLogRow> = sqlx::query_as(
            r#"
            SELECT id, workstation_id, maintenance_type, performed_by_user_id,
                   notes, performed_at
            FROM maintenance_logs
            WHERE workstation_id = $1
            ORDER BY performed_at DESC
            "#,
        )
        .bind(workstation_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MaintenanceError::StoreUnavailable(e.to_string()))?;

        Ok(rows.into_iter().map(MaintenanceLog::from).collect())
    }

    async fn workstation_exists(
        &self,
        workstation_id: WorkstationId,
    ) -> Result<bool, MaintenanceError> {
        sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM workstations WHERE id = $1)
            "#,
        )
        .bind(workstation_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| MaintenanceError::StoreUnavailable(e.to_string()))
    }
}
