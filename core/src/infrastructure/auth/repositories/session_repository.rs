use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        auth::{entities::Session, ports::SessionRepository},
        common::entities::app_errors::CoreError,
    },
    entity::sessions::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresSessionRepository {
    pub db: DatabaseConnection,
}

impl PostgresSessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SessionRepository for PostgresSessionRepository {
    async fn create_session(&self, session: Session) -> Result<Session, CoreError> {
        let active_model = ActiveModel {
            id: Set(session.id),
            user_id: Set(session.user_id),
            token_hash: Set(session.token_hash.clone()),
            expires_at: Set(session.expires_at.fixed_offset()),
            created_at: Set(session.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create session: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Session::from(created))
    }

    async fn get_by_id(&self, session_id: Uuid) -> Result<Option<Session>, CoreError> {
        let session = Entity::find_by_id(session_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get session: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(session.map(Session::from))
    }

    async fn delete_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(session_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete session: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
