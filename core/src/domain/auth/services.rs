use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};

use crate::{
    application::Service,
    domain::{
        auth::{
            entities::{JwtClaim, Session, User},
            ports::{AuthService, SessionRepository, UserRepository},
            value_objects::{Identity, LoginInput, LoginOutput, RegisterInput},
        },
        common::entities::app_errors::CoreError,
        favorite::ports::FavoriteRepository,
        health::ports::HealthCheckRepository,
        recipe::ports::RecipeRepository,
        suggestion::ports::{ImageSearchClient, LlmClient},
    },
};

pub fn hash_password(password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            CoreError::InternalServerError
        })
}

pub fn verify_password(hash: &str, password: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

fn encode_token(claims: &JwtClaim, secret: &str) -> Result<String, CoreError> {
    jsonwebtoken::encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("Failed to encode access token: {}", e);
        CoreError::InternalServerError
    })
}

fn decode_token(token: &str, secret: &str) -> Result<JwtClaim, CoreError> {
    jsonwebtoken::decode::<JwtClaim>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| CoreError::Unauthorized)
}

impl<U, S, R, F, H, L, I> AuthService for Service<U, S, R, F, H, L, I>
where
    U: UserRepository,
    S: SessionRepository,
    R: RecipeRepository,
    F: FavoriteRepository,
    H: HealthCheckRepository,
    L: LlmClient,
    I: ImageSearchClient,
{
    async fn register(&self, input: RegisterInput) -> Result<User, CoreError> {
        if self
            .user_repository
            .get_by_email(input.email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(&input.password)?;
        let user = User::new(input.email, input.display_name, password_hash);

        self.user_repository.create_user(user).await
    }

    async fn login(&self, input: LoginInput) -> Result<LoginOutput, CoreError> {
        let user = self
            .user_repository
            .get_by_email(input.email)
            .await?
            .ok_or(CoreError::Unauthorized)?;

        if !verify_password(&user.password_hash, &input.password) {
            return Err(CoreError::Unauthorized);
        }

        let now = Utc::now();
        let expires_at = now + Duration::minutes(self.auth_config.token_ttl_minutes);
        let session_id = crate::domain::common::generate_uuid_v7();

        let claims = JwtClaim {
            sub: user.id,
            email: user.email.clone(),
            sid: session_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = encode_token(&claims, &self.auth_config.jwt_secret)?;

        let mut session = Session::new(user.id, hash_token(&token), expires_at);
        session.id = session_id;
        self.session_repository.create_session(session).await?;

        Ok(LoginOutput { token, user })
    }

    async fn logout(&self, token: String) -> Result<(), CoreError> {
        let claims = decode_token(&token, &self.auth_config.jwt_secret)?;

        let session = self
            .session_repository
            .get_by_id(claims.sid)
            .await?
            .ok_or(CoreError::Unauthorized)?;

        self.session_repository.delete_session(session.id).await
    }

    async fn authenticate(&self, token: String) -> Result<Identity, CoreError> {
        let claims = decode_token(&token, &self.auth_config.jwt_secret)?;

        let session = self
            .session_repository
            .get_by_id(claims.sid)
            .await?
            .ok_or(CoreError::Unauthorized)?;

        // A reissued or tampered token must not resurrect an old session.
        if session.token_hash != hash_token(&token) || session.expires_at <= Utc::now() {
            return Err(CoreError::Unauthorized);
        }

        let user = self
            .user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or(CoreError::Unauthorized)?;

        Ok(Identity::User(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tests::mock_service;
    use crate::domain::auth::ports::{MockSessionRepository, MockUserRepository};

    fn user_with_password(password: &str) -> User {
        User::new(
            "cook@example.com".to_string(),
            "Cook".to_string(),
            hash_password(password).unwrap(),
        )
    }

    #[test]
    fn password_roundtrip() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password(&hash, "hunter2"));
        assert!(!verify_password(&hash, "hunter3"));
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(|email| {
            Box::pin(async move {
                Ok(Some(User::new(
                    email,
                    "Existing".to_string(),
                    "hash".to_string(),
                )))
            })
        });

        let mut service = mock_service();
        service.user_repository = users;

        let result = service
            .register(RegisterInput {
                email: "cook@example.com".to_string(),
                password: "hunter2".to_string(),
                display_name: "Cook".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn login_issues_verifiable_token() {
        let user = user_with_password("hunter2");
        let user_for_mock = user.clone();

        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(move |_| {
            let user = user_for_mock.clone();
            Box::pin(async move { Ok(Some(user)) })
        });

        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_create_session()
            .returning(|session| Box::pin(async move { Ok(session) }));

        let mut service = mock_service();
        service.user_repository = users;
        service.session_repository = sessions;

        let output = service
            .login(LoginInput {
                email: user.email.clone(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();

        let claims = decode_token(&output.token, &service.auth_config.jwt_secret).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(output.user.id, user.id);
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let user = user_with_password("hunter2");

        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });

        let mut service = mock_service();
        service.user_repository = users;

        let result = service
            .login(LoginInput {
                email: "cook@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::Unauthorized);
    }

    #[tokio::test]
    async fn authenticate_rejects_token_after_logout() {
        let user = user_with_password("hunter2");
        let user_for_login = user.clone();

        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(move |_| {
            let user = user_for_login.clone();
            Box::pin(async move { Ok(Some(user)) })
        });

        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_create_session()
            .returning(|session| Box::pin(async move { Ok(session) }));
        // Session row is gone once logout ran.
        sessions
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let mut service = mock_service();
        service.user_repository = users;
        service.session_repository = sessions;

        let output = service
            .login(LoginInput {
                email: user.email,
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();

        let result = service.authenticate(output.token).await;
        assert_eq!(result.unwrap_err(), CoreError::Unauthorized);
    }
}
