//! In-memory stores sharing one Tokio mutex.
//!
//! Back the hermetic test suites and are good enough for throwaway
//! single-node experiments. They mirror the Postgres referential actions
//! the services rely on: deleting a project removes its tasks, deleting a
//! client unlinks referencing projects.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use atelier_core::error::AppError;
use atelier_core::result::AppResult;
use atelier_entity::{Client, NewClient, NewProject, NewTask, NewUser, Project, Task, User};

use crate::stores::{ClientStore, ProjectStore, TaskStore, UserStore};

/// Internal tables, all guarded by the same lock.
#[derive(Debug, Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    clients: HashMap<Uuid, Client>,
    projects: HashMap<Uuid, Project>,
    tasks: HashMap<Uuid, Task>,
}

/// The whole in-memory database. Hands out one store handle per entity;
/// every handle shares the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle implementing [`UserStore`].
    pub fn users(&self) -> MemoryUserStore {
        MemoryUserStore {
            state: self.state.clone(),
        }
    }

    /// Handle implementing [`ClientStore`].
    pub fn clients(&self) -> MemoryClientStore {
        MemoryClientStore {
            state: self.state.clone(),
        }
    }

    /// Handle implementing [`ProjectStore`].
    pub fn projects(&self) -> MemoryProjectStore {
        MemoryProjectStore {
            state: self.state.clone(),
        }
    }

    /// Handle implementing [`TaskStore`].
    pub fn tasks(&self) -> MemoryTaskStore {
        MemoryTaskStore {
            state: self.state.clone(),
        }
    }

    /// Flips an account to inactive. Test fixture; the store traits expose
    /// no user mutation because the services never need one.
    pub async fn deactivate_user(&self, email: &str) {
        let mut state = self.state.lock().await;
        if let Some(user) = state.users.values_mut().find(|u| u.email == email) {
            user.active = false;
        }
    }
}

fn sorted_by_creation<T>(mut rows: Vec<T>, key: impl Fn(&T) -> (DateTime<Utc>, Uuid)) -> Vec<T> {
    rows.sort_by_key(|r| key(r));
    rows
}

/// In-memory user table handle.
#[derive(Debug, Clone)]
pub struct MemoryUserStore {
    state: Arc<Mutex<Inner>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        let mut state = self.state.lock().await;

        if state.users.values().any(|u| u.email == data.email) {
            return Err(AppError::conflict("Email already in use"));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            active: true,
            roles: data.roles.clone(),
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// In-memory client table handle.
#[derive(Debug, Clone)]
pub struct MemoryClientStore {
    state: Arc<Mutex<Inner>>,
}

#[async_trait]
impl ClientStore for MemoryClientStore {
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Client>> {
        let state = self.state.lock().await;
        let rows = state
            .clients
            .values()
            .filter(|c| c.owner_id == Some(owner_id))
            .cloned()
            .collect();
        Ok(sorted_by_creation(rows, |c| (c.created_at, c.id)))
    }

    async fn find_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Client>> {
        let state = self.state.lock().await;
        Ok(state
            .clients
            .get(&id)
            .filter(|c| c.owner_id == Some(owner_id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Client>> {
        let state = self.state.lock().await;
        Ok(state.clients.get(&id).cloned())
    }

    async fn create(&self, data: &NewClient) -> AppResult<Client> {
        let mut state = self.state.lock().await;
        let client = Client {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            owner_id: Some(data.owner_id),
            created_at: Utc::now(),
        };
        state.clients.insert(client.id, client.clone());
        Ok(client)
    }

    async fn update(&self, client: &Client) -> AppResult<Client> {
        let mut state = self.state.lock().await;
        if !state.clients.contains_key(&client.id) {
            return Err(AppError::not_found(format!(
                "Client {} not found",
                client.id
            )));
        }
        state.clients.insert(client.id, client.clone());
        Ok(client.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.state.lock().await;
        if state.clients.remove(&id).is_none() {
            return Err(AppError::not_found(format!("Client {id} not found")));
        }
        // ON DELETE SET NULL
        for project in state.projects.values_mut() {
            if project.client_id == Some(id) {
                project.client_id = None;
            }
        }
        Ok(())
    }
}

/// In-memory project table handle.
#[derive(Debug, Clone)]
pub struct MemoryProjectStore {
    state: Arc<Mutex<Inner>>,
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Project>> {
        let state = self.state.lock().await;
        let rows = state
            .projects
            .values()
            .filter(|p| p.owner_id == Some(owner_id))
            .cloned()
            .collect();
        Ok(sorted_by_creation(rows, |p| (p.created_at, p.id)))
    }

    async fn find_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Project>> {
        let state = self.state.lock().await;
        Ok(state
            .projects
            .get(&id)
            .filter(|p| p.owner_id == Some(owner_id))
            .cloned())
    }

    async fn create(&self, data: &NewProject) -> AppResult<Project> {
        let mut state = self.state.lock().await;
        let project = Project {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            owner_id: Some(data.owner_id),
            client_id: data.client_id,
            created_at: Utc::now(),
        };
        state.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(&self, project: &Project) -> AppResult<Project> {
        let mut state = self.state.lock().await;
        if !state.projects.contains_key(&project.id) {
            return Err(AppError::not_found(format!(
                "Project {} not found",
                project.id
            )));
        }
        state.projects.insert(project.id, project.clone());
        Ok(project.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.state.lock().await;
        if state.projects.remove(&id).is_none() {
            return Err(AppError::not_found(format!("Project {id} not found")));
        }
        // ON DELETE CASCADE
        state.tasks.retain(|_, t| t.project_id != id);
        Ok(())
    }
}

/// In-memory task table handle.
#[derive(Debug, Clone)]
pub struct MemoryTaskStore {
    state: Arc<Mutex<Inner>>,
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn find_by_project(&self, project_id: Uuid) -> AppResult<Vec<Task>> {
        let state = self.state.lock().await;
        let rows = state
            .tasks
            .values()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect();
        Ok(sorted_by_creation(rows, |t| (t.created_at, t.id)))
    }

    async fn find_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Task>> {
        let state = self.state.lock().await;
        Ok(state
            .tasks
            .get(&id)
            .filter(|t| {
                state
                    .projects
                    .get(&t.project_id)
                    .is_some_and(|p| p.owner_id == Some(owner_id))
            })
            .cloned())
    }

    async fn create(&self, data: &NewTask) -> AppResult<Task> {
        let mut state = self.state.lock().await;
        let task = Task {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            active: data.active,
            project_id: data.project_id,
            created_at: Utc::now(),
        };
        state.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> AppResult<Task> {
        let mut state = self.state.lock().await;
        if !state.tasks.contains_key(&task.id) {
            return Err(AppError::not_found(format!("Task {} not found", task.id)));
        }
        state.tasks.insert(task.id, task.clone());
        Ok(task.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.state.lock().await;
        if state.tasks.remove(&id).is_none() {
            return Err(AppError::not_found(format!("Task {id} not found")));
        }
        Ok(())
    }
}
