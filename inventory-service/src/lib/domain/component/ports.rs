use async_trait::async_trait;

use crate::component::errors::ComponentError;
use crate::component::models::Component;
use crate::component::models::ComponentId;
use crate::component::models::NewComponent;

/// Port for component operations.
#[async_trait]
pub trait ComponentServicePort: Send + Sync + 'static {
    /// Create a new component.
    ///
    /// # Errors
    /// * `SerialTaken` - Serial number already registered
    /// * `UnknownWorkstation` - Referenced workstation does not exist
    /// * `StoreUnavailable` - Store operation failed
    async fn create(&self, component: NewComponent) -> Result<Component, ComponentError>;

    /// List all components.
    async fn list(&self) -> Result<Vec<Component>, ComponentError>;

    /// Retrieve a component by id.
    ///
    /// # Errors
    /// * `NotFound` - Component does not exist
    async fn get(&self, id: ComponentId) -> Result<Component, ComponentError>;
}

/// Persistence operations for components.
#[async_trait]
pub trait ComponentRepository: Send + Sync + 'static {
    async fn create(&self, component: NewComponent) -> Result<Component, ComponentError>;

    async fn find_by_id(&self, id: ComponentId) -> Result<Option<Component>, ComponentError>;

    async fn list_all(&self) -> Result<Vec<Component>, ComponentError>;
}
