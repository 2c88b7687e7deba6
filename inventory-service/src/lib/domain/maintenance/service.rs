use std::sync::Arc;

use async_trait::async_trait;

use crate::maintenance::errors::MaintenanceError;
use crate::maintenance::models::MaintenanceLog;
use crate::maintenance::models::NewMaintenanceLog;
use crate::maintenance::ports::MaintenanceRepository;
use crate::maintenance::ports::MaintenanceServicePort;
use crate::workstation::models::WorkstationId;

pub struct MaintenanceService<R>
where
    R: MaintenanceRepository,
{
    repository: Arc<R>,
}

impl<R> MaintenanceService<R>
where
    R: MaintenanceRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MaintenanceServicePort for MaintenanceService<R>
where
    R: MaintenanceRepository,
{
    async fn record(&self, log: NewMaintenanceLog) -> Result<MaintenanceLog, MaintenanceError> {
        self.repository.create(log).await
    }

    async fn list_for_workstation(
        &self,
        workstation_id: WorkstationId,
    ) -> Result<Vec<MaintenanceLog>, MaintenanceError> {
        if !self.repository.workstation_exists(workstation_id).await? {
            return Err(MaintenanceError::UnknownWorkstation(workstation_id.0));
        }
        self.repository.list_for_workstation(workstation_id).await
    }
}
