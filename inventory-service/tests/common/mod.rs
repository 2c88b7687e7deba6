use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Duration;
use chrono::Utc;
use inventory_service::component::errors::ComponentError;
use inventory_service::component::models::Component;
use inventory_service::component::models::ComponentId;
use inventory_service::component::models::NewComponent;
use inventory_service::component::ports::ComponentRepository;
use inventory_service::component::service::ComponentService;
use inventory_service::identity::errors::IdentityError;
use inventory_service::identity::models::EmailAddress;
use inventory_service::identity::models::Identity;
use inventory_service::identity::models::IdentityId;
use inventory_service::identity::models::NewIdentity;
use inventory_service::identity::models::Role;
use inventory_service::identity::ports::IdentityRepository;
use inventory_service::identity::service::IdentityService;
use inventory_service::inbound::http::policy::AccessPolicy;
use inventory_service::inbound::http::router::create_router;
use inventory_service::inbound::http::router::AppState;
use inventory_service::maintenance::errors::MaintenanceError;
use inventory_service::maintenance::models::MaintenanceLog;
use inventory_service::maintenance::models::MaintenanceLogId;
use inventory_service::maintenance::models::NewMaintenanceLog;
use inventory_service::maintenance::ports::MaintenanceRepository;
use inventory_service::maintenance::service::MaintenanceService;
use inventory_service::workstation::errors::WorkstationError;
use inventory_service::workstation::models::NewWorkstation;
use inventory_service::workstation::models::Workstation;
use inventory_service::workstation::models::WorkstationId;
use inventory_service::workstation::models::WorkstationStatus;
use inventory_service::workstation::ports::WorkstationRepository;
use inventory_service::workstation::service::WorkstationService;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-token-signing-32b!";

/// Test application serving the full router on a random port, backed by
/// in-memory stores.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub identities: Arc<InMemoryIdentityRepository>,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(JWT_SECRET, Duration::hours(1)));

        let identities = Arc::new(InMemoryIdentityRepository::new());
        let workstations = Arc::new(InMemoryWorkstationRepository::new());
        let components = Arc::new(InMemoryComponentRepository::new(Arc::clone(&workstations)));
        let maintenance = Arc::new(InMemoryMaintenanceRepository::new(Arc::clone(&workstations)));

        let state = AppState {
            identity_service: Arc::new(IdentityService::new(
                Arc::clone(&identities),
                Arc::clone(&authenticator),
            )),
            workstation_service: Arc::new(WorkstationService::new(workstations)),
            component_service: Arc::new(ComponentService::new(components)),
            maintenance_service: Arc::new(MaintenanceService::new(maintenance)),
            authenticator: Arc::clone(&authenticator),
            policy: Arc::new(AccessPolicy::new()),
        };

        let router = create_router(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            identities,
            authenticator,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make a CORS preflight request (no credentials)
    pub fn preflight(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client
            .request(
                reqwest::Method::OPTIONS,
                format!("{}{}", self.address, path),
            )
            .header("Origin", "http://localhost:3000")
            .header("Access-Control-Request-Method", "GET")
    }

    /// Register a user through the public endpoint
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> reqwest::Response {
        self.post("/api/auth/register")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "fullName": full_name,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in through the public endpoint and return the bearer token
    pub async fn login_token(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }

    /// Seed an admin identity directly into the store
    pub async fn seed_admin(&self, email: &str, password: &str) {
        let password_hash = self
            .authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        self.identities
            .create(NewIdentity {
                email: EmailAddress::new(email.to_string()).unwrap(),
                password_hash,
                full_name: "Seeded Admin".to_string(),
                role: Role::Admin,
            })
            .await
            .expect("Failed to seed admin");
    }
}

/// In-memory credential store with the same uniqueness behavior as the
/// Postgres implementation.
pub struct InMemoryIdentityRepository {
    inner: Mutex<IdentityStore>,
}

struct IdentityStore {
    next_id: i32,
    by_email: HashMap<String, Identity>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(IdentityStore {
                next_id: 1,
                by_email: HashMap::new(),
            }),
        }
    }

    /// Drop an identity out from under any outstanding tokens.
    pub fn remove(&self, email: &str) {
        self.inner.lock().unwrap().by_email.remove(email);
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn create(&self, identity: NewIdentity) -> Result<Identity, IdentityError> {
        let mut store = self.inner.lock().unwrap();

        if store.by_email.contains_key(identity.email.as_str()) {
            return Err(IdentityError::EmailTaken(identity.email.to_string()));
        }

        let created = Identity {
            id: IdentityId(store.next_id),
            email: identity.email,
            password_hash: identity.password_hash,
            full_name: identity.full_name,
            role: identity.role,
            created_at: Utc::now(),
        };
        store.next_id += 1;
        store
            .by_email
            .insert(created.email.as_str().to_string(), created.clone());

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError> {
        Ok(self.inner.lock().unwrap().by_email.get(email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, IdentityError> {
        Ok(self.inner.lock().unwrap().by_email.contains_key(email))
    }
}

pub struct InMemoryWorkstationRepository {
    inner: Mutex<WorkstationStore>,
}

struct WorkstationStore {
    next_id: i32,
    rows: HashMap<i32, Workstation>,
}

impl InMemoryWorkstationRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(WorkstationStore {
                next_id: 1,
                rows: HashMap::new(),
            }),
        }
    }

    fn contains(&self, id: WorkstationId) -> bool {
        self.inner.lock().unwrap().rows.contains_key(&id.0)
    }
}

#[async_trait]
impl WorkstationRepository for InMemoryWorkstationRepository {
    async fn create(&self, workstation: NewWorkstation) -> Result<Workstation, WorkstationError> {
        let mut store = self.inner.lock().unwrap();

        if store.rows.values().any(|w| w.name == workstation.name) {
            return Err(WorkstationError::NameTaken(workstation.name));
        }

        let created = Workstation {
            id: WorkstationId(store.next_id),
            name: workstation.name,
            status: workstation.status,
            grid_x: workstation.grid_x,
            grid_y: workstation.grid_y,
            created_at: Utc::now(),
        };
        store.next_id += 1;
        store.rows.insert(created.id.0, created.clone());

        Ok(created)
    }

    async fn find_by_id(
        &self,
        id: WorkstationId,
    ) -> Result<Option<Workstation>, WorkstationError> {
        Ok(self.inner.lock().unwrap().rows.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Workstation>, WorkstationError> {
        let mut workstations: Vec<Workstation> =
            self.inner.lock().unwrap().rows.values().cloned().collect();
        workstations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(workstations)
    }

    async fn update_status(
        &self,
        id: WorkstationId,
        status: WorkstationStatus,
    ) -> Result<Option<Workstation>, WorkstationError> {
        let mut store = self.inner.lock().unwrap();
        Ok(store.rows.get_mut(&id.0).map(|workstation| {
            workstation.status = status;
            workstation.clone()
        }))
    }

    async fn delete(&self, id: WorkstationId) -> Result<bool, WorkstationError> {
        Ok(self.inner.lock().unwrap().rows.remove(&id.0).is_some())
    }
}

pub struct InMemoryComponentRepository {
    inner: Mutex<ComponentStore>,
    workstations: Arc<InMemoryWorkstationRepository>,
}

struct ComponentStore {
    next_id: i32,
    rows: HashMap<i32, Component>,
}

impl InMemoryComponentRepository {
    pub fn new(workstations: Arc<InMemoryWorkstationRepository>) -> Self {
        Self {
            inner: Mutex::new(ComponentStore {
                next_id: 1,
                rows: HashMap::new(),
            }),
            workstations,
        }
    }
}

#[async_trait]
impl ComponentRepository for InMemoryComponentRepository {
    async fn create(&self, component: NewComponent) -> Result<Component, ComponentError> {
        if let Some(workstation_id) = component.workstation_id {
            if !self.workstations.contains(workstation_id) {
                return Err(ComponentError::UnknownWorkstation(workstation_id.0));
            }
        }

        let mut store = self.inner.lock().unwrap();

        if let Some(serial) = &component.serial_number {
            if store
                .rows
                .values()
                .any(|c| c.serial_number.as_deref() == Some(serial))
            {
                return Err(ComponentError::SerialTaken(serial.clone()));
            }
        }

        let created = Component {
            id: ComponentId(store.next_id),
            name: component.name,
            serial_number: component.serial_number,
            category: component.category,
            status: component.status,
            workstation_id: component.workstation_id,
            purchase_date: component.purchase_date,
            warranty_expiry: component.warranty_expiry,
            notes: component.notes,
            created_at: Utc::now(),
        };
        store.next_id += 1;
        store.rows.insert(created.id.0, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: ComponentId) -> Result<Option<Component>, ComponentError> {
        Ok(self.inner.lock().unwrap().rows.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Component>, ComponentError> {
        let mut components: Vec<Component> =
            self.inner.lock().unwrap().rows.values().cloned().collect();
        components.sort_by_key(|c| c.id.0);
        Ok(components)
    }
}

pub struct InMemoryMaintenanceRepository {
    inner: Mutex<MaintenanceStore>,
    workstations: Arc<InMemoryWorkstationRepository>,
}

struct MaintenanceStore {
    next_id: i32,
    rows: Vec<MaintenanceLog>,
}

impl InMemoryMaintenanceRepository {
    pub fn new(workstations: Arc<InMemoryWorkstationRepository>) -> Self {
        Self {
            inner: Mutex::new(MaintenanceStore {
                next_id: 1,
                rows: Vec::new(),
            }),
            workstations,
        }
    }
}

#[async_trait]
impl MaintenanceRepository for InMemoryMaintenanceRepository {
    async fn create(&self, log: NewMaintenanceLog) -> Result<MaintenanceLog, MaintenanceError> {
        if !self.workstations.contains(log.workstation_id) {
            return Err(MaintenanceError::UnknownWorkstation(log.workstation_id.0));
        }

        let mut store = self.inner.lock().unwrap();
        let created = MaintenanceLog {
            id: MaintenanceLogId(store.next_id),
            workstation_id: log.workstation_id,
            maintenance_type: log.maintenance_type,
            performed_by: log.performed_by,
            notes: log.notes,
            performed_at: log.performed_at,
        };
        store.next_id += 1;
        store.rows.push(created.clone());

        Ok(created)
    }

    async fn list_for_workstation(
        &self,
        workstation_id: WorkstationId,
    ) -> Result<Vec<MaintenanceLog>, MaintenanceError> {
        let mut logs: Vec<MaintenanceLog> = self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|log| log.workstation_id == workstation_id)
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
        Ok(logs)
    }

    async fn workstation_exists(
        &self,
        workstation_id: WorkstationId,
    ) -> Result<bool, MaintenanceError> {
        Ok(self.workstations.contains(workstation_id))
    }
}
