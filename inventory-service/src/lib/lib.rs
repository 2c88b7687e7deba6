pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::component;
pub use domain::identity;
pub use domain::maintenance;
pub use domain::workstation;
pub use outbound::repositories;
