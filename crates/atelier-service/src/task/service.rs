//! Task CRUD, authorized through the parent project.
//!
//! Tasks carry no owner column. Listing and creating go through the
//! project id, resolved with the caller as owner; single-task operations
//! join the task to its parent project and filter on the same owner. In
//! both directions a task under someone else's project is `NotFound`.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use atelier_core::error::AppError;
use atelier_core::result::AppResult;
use atelier_database::{ProjectStore, TaskStore};
use atelier_entity::{NewTask, Task};

use crate::context::Identity;

/// Manages tasks.
pub struct TaskService {
    /// Task store.
    tasks: Arc<dyn TaskStore>,
    /// Project store, for scope resolution.
    projects: Arc<dyn ProjectStore>,
}

impl std::fmt::Debug for TaskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskService").finish()
    }
}

/// Data for creating a task.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateTaskRequest {
    /// Task name.
    pub name: String,
    /// Whether the task starts active.
    pub active: bool,
}

/// Data for updating a task.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateTaskRequest {
    /// Task name.
    pub name: String,
    /// Whether the task is active.
    pub active: bool,
}

impl TaskService {
    /// Creates a new task service.
    pub fn new(tasks: Arc<dyn TaskStore>, projects: Arc<dyn ProjectStore>) -> Self {
        Self { tasks, projects }
    }

    /// Lists the tasks of one of the caller's projects.
    pub async fn list(&self, identity: &Identity, project_id: Uuid) -> AppResult<Vec<Task>> {
        let me = identity.require()?;

        self.projects
            .find_by_id_and_owner(project_id, me.id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        self.tasks.find_by_project(project_id).await
    }

    /// Gets one task in one of the caller's projects.
    pub async fn get(&self, identity: &Identity, id: Uuid) -> AppResult<Task> {
        let me = identity.require()?;
        self.tasks
            .find_by_id_and_owner(id, me.id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))
    }

    /// Creates a task inside one of the caller's projects.
    pub async fn create(
        &self,
        identity: &Identity,
        project_id: Uuid,
        req: CreateTaskRequest,
    ) -> AppResult<Task> {
        let me = identity.require()?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Task name cannot be empty"));
        }

        self.projects
            .find_by_id_and_owner(project_id, me.id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        let task = self
            .tasks
            .create(&NewTask {
                name: req.name,
                active: req.active,
                project_id,
            })
            .await?;

        info!(user_id = %me.id, task_id = %task.id, project_id = %project_id, "Task created");

        Ok(task)
    }

    /// Updates one task in one of the caller's projects.
    pub async fn update(
        &self,
        identity: &Identity,
        id: Uuid,
        req: UpdateTaskRequest,
    ) -> AppResult<Task> {
        let me = identity.require()?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Task name cannot be empty"));
        }

        let mut task = self
            .tasks
            .find_by_id_and_owner(id, me.id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))?;

        task.name = req.name;
        task.active = req.active;

        let updated = self.tasks.update(&task).await?;

        info!(user_id = %me.id, task_id = %id, "Task updated");

        Ok(updated)
    }

    /// Deletes one task in one of the caller's projects.
    pub async fn delete(&self, identity: &Identity, id: Uuid) -> AppResult<()> {
        let me = identity.require()?;

        self.tasks
            .find_by_id_and_owner(id, me.id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))?;

        self.tasks.delete(id).await?;

        info!(user_id = %me.id, task_id = %id, "Task deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::error::ErrorKind;
    use atelier_database::{MemoryStore, UserStore};
    use atelier_entity::{NewProject, NewUser, Project, Role, User};

    async fn create_user(db: &MemoryStore, email: &str) -> User {
        db.users()
            .create(&NewUser {
                email: email.to_string(),
                password_hash: "hash".to_string(),
                first_name: None,
                last_name: None,
                roles: vec![Role::User],
            })
            .await
            .unwrap()
    }

    async fn create_project(db: &MemoryStore, owner: &Identity, name: &str) -> Project {
        db.projects()
            .create(&NewProject {
                name: name.to_string(),
                owner_id: owner.current().unwrap().id,
                client_id: None,
            })
            .await
            .unwrap()
    }

    async fn setup() -> (TaskService, MemoryStore, Identity, Identity) {
        let db = MemoryStore::new();
        let alice = create_user(&db, "alice@example.com").await;
        let bob = create_user(&db, "bob@example.com").await;

        let service = TaskService::new(Arc::new(db.tasks()), Arc::new(db.projects()));
        (service, db, Identity::from(alice), Identity::from(bob))
    }

    fn create_request(name: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            name: name.to_string(),
            active: true,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_in_own_project() {
        let (service, db, alice, _bob) = setup().await;
        let project = create_project(&db, &alice, "Site").await;

        let task = service
            .create(&alice, project.id, create_request("Wireframes"))
            .await
            .unwrap();
        assert_eq!(task.project_id, project.id);
        assert!(task.active);

        let tasks = service.list(&alice, project.id).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Wireframes");
    }

    #[tokio::test]
    async fn test_foreign_project_hides_its_tasks() {
        let (service, db, alice, bob) = setup().await;
        let project = create_project(&db, &alice, "Private").await;
        service
            .create(&alice, project.id, create_request("Secret work"))
            .await
            .unwrap();

        // Listing by project id fails at the project resolution step.
        let err = service.list(&bob, project.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        // Creating into the foreign project fails the same way.
        let err = service
            .create(&bob, project.id, create_request("Sneaky"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_single_task_operations_go_through_parent_project() {
        let (service, db, alice, bob) = setup().await;
        let project = create_project(&db, &alice, "Site").await;
        let task = service
            .create(&alice, project.id, create_request("Wireframes"))
            .await
            .unwrap();

        assert!(service.get(&alice, task.id).await.is_ok());

        let get = service.get(&bob, task.id).await.unwrap_err();
        let update = service
            .update(&bob, task.id, UpdateTaskRequest {
                name: "Hijack".to_string(),
                active: false,
            })
            .await
            .unwrap_err();
        let delete = service.delete(&bob, task.id).await.unwrap_err();

        for err in [get, update, delete] {
            assert_eq!(err.kind, ErrorKind::NotFound);
        }

        // Bob's attempts changed nothing.
        let reloaded = service.get(&alice, task.id).await.unwrap();
        assert_eq!(reloaded.name, "Wireframes");
        assert!(reloaded.active);
    }

    #[tokio::test]
    async fn test_update_mutates_name_and_active() {
        let (service, db, alice, _bob) = setup().await;
        let project = create_project(&db, &alice, "Site").await;
        let task = service
            .create(&alice, project.id, create_request("Wireframes"))
            .await
            .unwrap();

        let updated = service
            .update(&alice, task.id, UpdateTaskRequest {
                name: "High-fi mockups".to_string(),
                active: false,
            })
            .await
            .unwrap();
        assert_eq!(updated.name, "High-fi mockups");
        assert!(!updated.active);
    }

    #[tokio::test]
    async fn test_empty_project_lists_no_tasks() {
        let (service, db, alice, _bob) = setup().await;
        let project = create_project(&db, &alice, "Fresh").await;

        let tasks = service.list(&alice, project.id).await.unwrap();
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_anonymous_task_calls_are_rejected() {
        let (service, db, alice, _bob) = setup().await;
        let project = create_project(&db, &alice, "Site").await;
        let anon = Identity::anonymous();

        let err = service.list(&anon, project.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }
}
