use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::PgPool;

use crate::component::errors::ComponentError;
use crate::component::models::Component;
use crate::component::models::ComponentId;
use crate::component::models::NewComponent;
use crate::component::ports::ComponentRepository;
use crate::workstation::models::WorkstationId;

pub struct PostgresComponentRepository {
    pool: PgPool,
}

impl PostgresComponentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ComponentRow {
    id: i32,
    name: String,
    serial_number: Option<String>,
    category: String,
    status: String,
    workstation_id: Option<i32>,
    purchase_date: Option<NaiveDate>,
    warranty_expiry: Option<NaiveDate>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ComponentRow> for Component {
    type Error = ComponentError;

    fn try_from(row: ComponentRow) -> Result<Self, Self::Error> {
        Ok(Component {
            id: ComponentId(row.id),
            name: row.name,
            serial_number: row.serial_number,
            category: row.category,
            status: row.status.parse()?,
            workstation_id: row.workstation_id.map(WorkstationId),
            purchase_date: row.purchase_date,
            warranty_expiry: row.warranty_expiry,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ComponentRepository for PostgresComponentRepository {
    async fn create(&self, component: NewComponent) -> Result<Component, ComponentError> {
        let (id, created_at): (i32, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO components
                (name, serial_number, category, status, workstation_id,
                 purchase_date, warranty_expiry, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, created_at
            "#,
        )
        .bind(&component.name)
        .bind(&component.serial_number)
        .bind(&component.category)
        .bind(component.status.as_str())
        .bind(component.workstation_id.map(|id| id.0))
        .bind(component.purchase_date)
        .bind(component.warranty_expiry)
        .bind(&component.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return ComponentError::SerialTaken(
                        component.serial_number.clone().unwrap_or_default(),
                    );
                }
                if db_err.is_foreign_key_violation() {
                    return ComponentError::UnknownWorkstation(
                        component.workstation_id.map(|id| id.0).unwrap_or_default(),
                    );
                }
            }
            ComponentError::StoreUnavailable(e.to_string())
        })?;

        Ok(Component {
            id: ComponentId(id),
            name: component.name,
            serial_number: component.serial_number,
            category: component.category,
            status: component.status,
            workstation_id: component.workstation_id,
            purchase_date: component.purchase_date,
            warranty_expiry: component.warranty_expiry,
            notes: component.notes,
            created_at,
        })
    }

    async fn find_by_id(&self, id: ComponentId) -> Result<Option<Component>, ComponentError> {
        let row: Option<ComponentRow> = sqlx::query_as(
            r#"
            SELECT id, name, serial_number, category, status, workstation_id,
                   purchase_date, warranty_expiry, notes, created_at
            FROM components
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ComponentError::StoreUnavailable(e.to_string()))?;

        row.map(Component::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Component>, ComponentError> {
        let rows: Vec<ComponentRow> = sqlx::query_as(
            r#"
            SELECT id, name, serial_number, category, status, workstation_id,
                   purchase_date, warranty_expiry, notes, created_at
            FROM components
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ComponentError::StoreUnavailable(e.to_string()))?;

        rows.into_iter().map(Component::try_from).collect()
    }
}
