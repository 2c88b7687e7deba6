use async_trait::async_trait;

use crate::maintenance::errors::MaintenanceError;
use crate::maintenance::models::MaintenanceLog;
use crate::maintenance::models::NewMaintenanceLog;
use crate::workstation::models::WorkstationId;

/// Port for maintenance-log operations.
#[async_trait]
pub trait MaintenanceServicePort: Send + Sync + 'static {
    /// Record a maintenance intervention against an existing workstation.
    ///
    /// # Errors
    /// * `UnknownWorkstation` - Workstation does not exist
    /// * `StoreUnavailable` - Store operation failed
    async fn record(&self, log: NewMaintenanceLog) -> Result<MaintenanceLog, MaintenanceError>;

    /// List the maintenance history of a workstation, newest first.
    ///
    /// # Errors
    /// * `UnknownWorkstation` - Workstation does not exist
    async fn list_for_workstation(
        &self,
        workstation_id: WorkstationId,
    ) -> Result<Vec<MaintenanceLog>, MaintenanceError>;
}

/// Persistence operations for maintenance logs.
#[async_trait]
pub trait MaintenanceRepository: Send + Sync + 'static {
    async fn create(&self, log: NewMaintenanceLog) -> Result<MaintenanceLog, MaintenanceError>;

    async fn list_for_workstation(
        &self,
        workstation_id: WorkstationId,
    ) -> Result<Vec<MaintenanceLog>, MaintenanceError>;

    async fn workstation_exists(
        &self,
        workstation_id: WorkstationId,
    ) -> Result<bool, MaintenanceError>;
}
