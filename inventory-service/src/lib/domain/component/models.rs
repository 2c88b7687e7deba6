use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::component::errors::ComponentStatusError;
use crate::workstation::models::WorkstationId;

/// A tracked hardware component, either installed in a workstation or in
/// storage (no workstation assigned).
#[derive(Debug, Clone)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    pub serial_number: Option<String>,
    pub category: String,
    pub status: ComponentStatus,
    pub workstation_id: Option<WorkstationId>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Component fields known before the store assigns id and created_at.
#[derive(Debug, Clone)]
pub struct NewComponent {
    pub name: String,
    pub serial_number: Option<String>,
    pub category: String,
    pub status: ComponentStatus,
    pub workstation_id: Option<WorkstationId>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub i32);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentStatus {
    InStorage,
    Installed,
    Defective,
    Retired,
}

impl ComponentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentStatus::InStorage => "IN_STORAGE",
            ComponentStatus::Installed => "INSTALLED",
            ComponentStatus::Defective => "DEFECTIVE",
            ComponentStatus::Retired => "RETIRED",
        }
    }
}

impl FromStr for ComponentStatus {
    type Err = ComponentStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_STORAGE" => Ok(ComponentStatus::InStorage),
            "INSTALLED" => Ok(ComponentStatus::Installed),
            "DEFECTIVE" => Ok(ComponentStatus::Defective),
            "RETIRED" => Ok(ComponentStatus::Retired),
            other => Err(ComponentStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
