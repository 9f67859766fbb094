//! Project CRUD, scoped to the owning user.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use atelier_core::error::AppError;
use atelier_core::result::AppResult;
use atelier_database::{ClientStore, ProjectStore, UserStore};
use atelier_entity::{NewProject, Project};

use crate::context::Identity;
use crate::ownership::resolve_owner_transfer;

/// Manages projects.
pub struct ProjectService {
    /// Project store.
    projects: Arc<dyn ProjectStore>,
    /// Client store, for link resolution.
    clients: Arc<dyn ClientStore>,
    /// Principal directory, for owner-transfer targets.
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for ProjectService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectService").finish()
    }
}

/// Data for creating a project.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateProjectRequest {
    /// Project name.
    pub name: String,
    /// Client to link, if any.
    pub client_id: Option<Uuid>,
}

/// Data for updating a project.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateProjectRequest {
    /// Project name.
    pub name: String,
    /// Requested owner. `None` leaves the owner untouched.
    pub owner_id: Option<Uuid>,
    /// Client link. `None` clears an existing link.
    pub client_id: Option<Uuid>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(
        projects: Arc<dyn ProjectStore>,
        clients: Arc<dyn ClientStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            projects,
            clients,
            users,
        }
    }

    /// Lists the caller's projects.
    pub async fn list(&self, identity: &Identity) -> AppResult<Vec<Project>> {
        let me = identity.require()?;
        self.projects.find_by_owner(me.id).await
    }

    /// Gets one of the caller's projects by id.
    pub async fn get(&self, identity: &Identity, id: Uuid) -> AppResult<Project> {
        let me = identity.require()?;
        self.projects
            .find_by_id_and_owner(id, me.id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))
    }

    /// Creates a project owned by the caller.
    pub async fn create(
        &self,
        identity: &Identity,
        req: CreateProjectRequest,
    ) -> AppResult<Project> {
        let me = identity.require()?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Project name cannot be empty"));
        }

        if let Some(client_id) = req.client_id {
            self.resolve_client(client_id).await?;
        }

        let project = self
            .projects
            .create(&NewProject {
                name: req.name,
                owner_id: me.id,
                client_id: req.client_id,
            })
            .await?;

        info!(user_id = %me.id, project_id = %project.id, "Project created");

        Ok(project)
    }

    /// Updates one of the caller's projects.
    pub async fn update(
        &self,
        identity: &Identity,
        id: Uuid,
        req: UpdateProjectRequest,
    ) -> AppResult<Project> {
        let me = identity.require()?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Project name cannot be empty"));
        }

        let mut project = self
            .projects
            .find_by_id_and_owner(id, me.id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        if let Some(client_id) = req.client_id {
            self.resolve_client(client_id).await?;
        }

        project.name = req.name;
        project.client_id = req.client_id;
        project.owner_id =
            resolve_owner_transfer(self.users.as_ref(), project.owner_id, req.owner_id).await?;

        let updated = self.projects.update(&project).await?;

        info!(user_id = %me.id, project_id = %id, "Project updated");

        Ok(updated)
    }

    /// Deletes one of the caller's projects, and its tasks with it.
    pub async fn delete(&self, identity: &Identity, id: Uuid) -> AppResult<()> {
        let me = identity.require()?;

        self.projects
            .find_by_id_and_owner(id, me.id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        self.projects.delete(id).await?;

        info!(user_id = %me.id, project_id = %id, "Project deleted");

        Ok(())
    }

    /// Checks that a client link target exists.
    ///
    /// Resolution is by primary key only. The referenced client is not
    /// required to belong to the caller, so a known id links another
    /// account's client.
    async fn resolve_client(&self, client_id: Uuid) -> AppResult<()> {
        self.clients
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| AppError::reference_not_found("Linked client not found"))?;
        Ok(())
    }
}
