use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::identity::models::IdentityId;
use crate::workstation::models::WorkstationId;

/// One maintenance intervention performed on a workstation.
#[derive(Debug, Clone)]
pub struct MaintenanceLog {
    pub id: MaintenanceLogId,
    pub workstation_id: WorkstationId,
    pub maintenance_type: String,
    pub performed_by: Option<IdentityId>,
    pub notes: Option<String>,
    pub performed_at: DateTime<Utc>,
}

/// Log fields known before the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewMaintenanceLog {
    pub workstation_id: WorkstationId,
    pub maintenance_type: String,
    pub performed_by: Option<IdentityId>,
    pub notes: Option<String>,
    pub performed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaintenanceLogId(pub i32);

impl fmt::Display for MaintenanceLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
