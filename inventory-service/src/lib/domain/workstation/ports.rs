use async_trait::async_trait;

use crate::workstation::errors::WorkstationError;
use crate::workstation::models::NewWorkstation;
use crate::workstation::models::Workstation;
use crate::workstation::models::WorkstationId;
use crate::workstation::models::WorkstationStatus;

/// Port for workstation operations.
#[async_trait]
pub trait WorkstationServicePort: Send + Sync + 'static {
    /// Create a new workstation.
    ///
    /// # Errors
    /// * `NameTaken` - A workstation with this name already exists
    /// * `StoreUnavailable` - Store operation failed
    async fn create(&self, workstation: NewWorkstation) -> Result<Workstation, WorkstationError>;

    /// List all workstations.
    async fn list(&self) -> Result<Vec<Workstation>, WorkstationError>;

    /// Retrieve a workstation by id.
    ///
    /// # Errors
    /// * `NotFound` - Workstation does not exist
    async fn get(&self, id: WorkstationId) -> Result<Workstation, WorkstationError>;

    /// Change a workstation's status.
    ///
    /// # Errors
    /// * `NotFound` - Workstation does not exist
    async fn set_status(
        &self,
        id: WorkstationId,
        status: WorkstationStatus,
    ) -> Result<Workstation, WorkstationError>;

    /// Remove a workstation.
    ///
    /// # Errors
    /// * `NotFound` - Workstation does not exist
    async fn delete(&self, id: WorkstationId) -> Result<(), WorkstationError>;
}

/// Persistence operations for workstations.
#[async_trait]
pub trait WorkstationRepository: Send + Sync + 'static {
    async fn create(&self, workstation: NewWorkstation) -> Result<Workstation, WorkstationError>;

    async fn find_by_id(&self, id: WorkstationId) -> Result<Option<Workstation>, WorkstationError>;

    async fn list_all(&self) -> Result<Vec<Workstation>, WorkstationError>;

    async fn update_status(
        &self,
        id: WorkstationId,
        status: WorkstationStatus,
    ) -> Result<Option<Workstation>, WorkstationError>;

    async fn delete(&self, id: WorkstationId) -> Result<bool, WorkstationError>;
}
