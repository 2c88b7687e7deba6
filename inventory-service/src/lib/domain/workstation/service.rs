use std::sync::Arc;

use async_trait::async_trait;

use crate::workstation::errors::WorkstationError;
use crate::workstation::models::NewWorkstation;
use crate::workstation::models::Workstation;
use crate::workstation::models::WorkstationId;
use crate::workstation::models::WorkstationStatus;
use crate::workstation::ports::WorkstationRepository;
use crate::workstation::ports::WorkstationServicePort;

pub struct WorkstationService<R>
where
    R: WorkstationRepository,
{
    repository: Arc<R>,
}

impl<R> WorkstationService<R>
where
    R: WorkstationRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> WorkstationServicePort for WorkstationService<R>
where
    R: WorkstationRepository,
{
    async fn create(&self, workstation: NewWorkstation) -> Result<Workstation, WorkstationError> {
        self.repository.create(workstation).await
    }

    async fn list(&self) -> Result<Vec<Workstation>, WorkstationError> {
        self.repository.list_all().await
    }

    async fn get(&self, id: WorkstationId) -> Result<Workstation, WorkstationError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(WorkstationError::NotFound(id.0))
    }

    async fn set_status(
        &self,
        id: WorkstationId,
        status: WorkstationStatus,
    ) -> Result<Workstation, WorkstationError> {
        self.repository
            .update_status(id, status)
            .await?
            .ok_or(WorkstationError::NotFound(id.0))
    }

    async fn delete(&self, id: WorkstationId) -> Result<(), WorkstationError> {
        if !self.repository.delete(id).await? {
            return Err(WorkstationError::NotFound(id.0));
        }
        Ok(())
    }
}
