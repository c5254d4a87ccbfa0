use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{
        AccessTokenDto, LoginDto, RefreshDto, RegisterUserDto, TokenKind, TokenPairDto, UserDto,
        EMAIL_MAX_LEN, LOGIN_MAX_LEN, USER_NAME_MAX_LEN,
    },
    server::{
        data::user::{NewUser, UserRepository},
        error::{auth::AuthError, Error},
        util::{
            jwt::JwtKeys,
            password::{hash_password, verify_password},
            validate::{max_length, required},
        },
    },
};

/// Registration, token issuing and token refresh
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::BadRequest)` - A required field is blank or longer than its column
    /// - `Err(AuthError::LoginTaken)` / `Err(AuthError::EmailTaken)` - Conflicting user exists
    pub async fn register(&self, user: RegisterUserDto) -> Result<UserDto, Error> {
        let name = user.name.trim().to_string();
        let login = user.login.trim().to_string();
        let email = user.email.trim().to_string();

        if login.is_empty() || email.is_empty() || user.password.is_empty() {
            return Err(Error::BadRequest(
                "login, email and password are required".to_string(),
            ));
        }
        required("name", &name)?;
        max_length("name", &name, USER_NAME_MAX_LEN)?;
        max_length("login", &login, LOGIN_MAX_LEN)?;
        max_length("email", &email, EMAIL_MAX_LEN)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_login(&login).await?.is_some() {
            return Err(AuthError::LoginTaken(login).into());
        }
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken(email).into());
        }

        let password_hash = hash_password(&user.password)?;

        let created = user_repo
            .create(NewUser {
                name,
                login,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %created.id, "Registered new user");

        Ok(created.into())
    }

    /// Exchanges credentials for an access and refresh token pair.
    ///
    /// Unknown logins, wrong passwords and inactive users all yield
    /// [`AuthError::InvalidCredentials`] or [`AuthError::InactiveUser`], both answered with 401.
    pub async fn login(&self, credentials: LoginDto) -> Result<TokenPairDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_login(credentials.login.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::InactiveUser(user.id).into());
        }

        Ok(TokenPairDto {
            access: self.jwt.issue(user.id, TokenKind::Access)?,
            refresh: self.jwt.issue(user.id, TokenKind::Refresh)?,
        })
    }

    /// Issues a fresh access token for a valid refresh token.
    pub async fn refresh(&self, refresh: RefreshDto) -> Result<AccessTokenDto, Error> {
        let claims = self.jwt.verify(&refresh.refresh, TokenKind::Refresh)?;

        let user_repo = UserRepository::new(self.db);
        match user_repo.get(claims.user_id).await? {
            Some(user) if user.is_active => Ok(AccessTokenDto {
                access: self.jwt.issue(user.id, TokenKind::Access)?,
            }),
            Some(user) => Err(AuthError::InactiveUser(user.id).into()),
            None => Err(AuthError::UserNotInDatabase(claims.user_id).into()),
        }
    }

    /// Gets the user a verified token belongs to.
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get(user_id).await? {
            Some(user) => Ok(user.into()),
            None => Err(AuthError::UserNotInDatabase(user_id).into()),
        }
    }
}
