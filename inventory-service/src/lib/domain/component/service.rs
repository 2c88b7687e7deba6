use std::sync::Arc;

use async_trait::async_trait;

use crate::component::errors::ComponentError;
use crate::component::models::Component;
use crate::component::models::ComponentId;
use crate::component::models::NewComponent;
use crate::component::ports::ComponentRepository;
use crate::component::ports::ComponentServicePort;

pub struct ComponentService<R>
where
    R: ComponentRepository,
{
    repository: Arc<R>,
}

impl<R> ComponentService<R>
where
    R: ComponentRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ComponentServicePort for ComponentService<R>
where
    R: ComponentRepository,
{
    async fn create(&self, component: NewComponent) -> Result<Component, ComponentError> {
        self.repository.create(component).await
    }

    async fn list(&self) -> Result<Vec<Component>, ComponentError> {
        self.repository.list_all().await
    }

    async fn get(&self, id: ComponentId) -> Result<Component, ComponentError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ComponentError::NotFound(id.0))
    }
}
