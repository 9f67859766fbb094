//! Store traits implemented by the sqlx repositories and the in-memory
//! stores. Services depend on these, never on a concrete backend.

use async_trait::async_trait;
use uuid::Uuid;

use atelier_core::result::AppResult;
use atelier_entity::{Client, NewClient, NewProject, NewTask, NewUser, Project, Task, User};

/// Principal directory operations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by login identity. Case-sensitive exact match.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user. A duplicate identity is a `Conflict`.
    async fn create(&self, data: &NewUser) -> AppResult<User>;
}

/// Client persistence operations.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// List clients owned by the given user.
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Client>>;

    /// Find a client by primary key *and* owner. A row owned by someone
    /// else is reported as absent, same as a row that does not exist.
    async fn find_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Client>>;

    /// Find a client by primary key alone (reference resolution).
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Client>>;

    /// Create a new client.
    async fn create(&self, data: &NewClient) -> AppResult<Client>;

    /// Persist the mutable fields of an existing client.
    async fn update(&self, client: &Client) -> AppResult<Client>;

    /// Delete a client by primary key.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Project persistence operations.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// List projects owned by the given user.
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Project>>;

    /// Find a project by primary key *and* owner.
    async fn find_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Project>>;

    /// Create a new project.
    async fn create(&self, data: &NewProject) -> AppResult<Project>;

    /// Persist the mutable fields of an existing project.
    async fn update(&self, project: &Project) -> AppResult<Project>;

    /// Delete a project by primary key. Tasks go with it.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Task persistence operations. Tasks have no owner column; the scoped
/// lookup goes through the parent project.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// List tasks inside the given project.
    async fn find_by_project(&self, project_id: Uuid) -> AppResult<Vec<Task>>;

    /// Find a task by primary key whose parent project is owned by the
    /// given user.
    async fn find_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Task>>;

    /// Create a new task.
    async fn create(&self, data: &NewTask) -> AppResult<Task>;

    /// Persist the mutable fields of an existing task.
    async fn update(&self, task: &Task) -> AppResult<Task>;

    /// Delete a task by primary key.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}
