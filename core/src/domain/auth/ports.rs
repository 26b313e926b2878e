use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    auth::{
        entities::{Session, User},
        value_objects::{Identity, LoginInput, LoginOutput, RegisterInput},
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn create_session(
        &self,
        session: Session,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get_by_id(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<Session>, CoreError>> + Send;

    fn delete_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Signup/login/logout plus bearer-token resolution for the API middleware.
#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn register(
        &self,
        input: RegisterInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn login(
        &self,
        input: LoginInput,
    ) -> impl Future<Output = Result<LoginOutput, CoreError>> + Send;

    fn logout(&self, token: String) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn authenticate(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
