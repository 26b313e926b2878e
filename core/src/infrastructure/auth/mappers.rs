use crate::{
    domain::auth::entities::{Session, User},
    entity::{sessions, users},
};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email.clone(),
            display_name: model.display_name.clone(),
            password_hash: model.password_hash.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&sessions::Model> for Session {
    fn from(model: &sessions::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            token_hash: model.token_hash.clone(),
            expires_at: model.expires_at.to_utc(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<sessions::Model> for Session {
    fn from(model: sessions::Model) -> Self {
        Self::from(&model)
    }
}
