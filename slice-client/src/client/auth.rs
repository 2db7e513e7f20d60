//! Auth and profile API

use super::SliceClient;
use crate::error::{ClientError, ClientResult};
use crate::validation::{validate_profile_update, validate_registration};
use shared::request::{LoginRequest, ProfileUpdate, RegisterRequest, VerifyPasswordRequest};
use shared::response::{LoginResponse, PasswordVerification};
use shared::User;

impl SliceClient {
    /// Register a new account
    ///
    /// Success means "account created", nothing more: no token is issued
    /// and the session stays logged out until an explicit [`login`].
    ///
    /// [`login`]: SliceClient::login
    pub async fn register(&self, email: &str, password: &str, confirm: &str) -> ClientResult<()> {
        validate_registration(email, password, confirm)?;

        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.http().post_unit_with("/auth/register", &request).await?;

        tracing::debug!(email, "account registered");
        Ok(())
    }

    /// Login with email and password
    ///
    /// The token is stored before this returns; the profile fetch runs in
    /// the background and fills the session when it lands.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<()> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.http().post("/auth/login", &request).await?;
        self.session.set_token(response.access_token);

        let http = self.http().clone();
        let session = self.session.clone();
        tokio::spawn(async move {
            match http.get::<User>("/users/me").await {
                Ok(user) => session.set_user(user),
                Err(err) => tracing::warn!(error = %err, "profile fetch after login failed"),
            }
        });

        Ok(())
    }

    /// Logout: clears the token and cached profile synchronously
    pub fn logout(&self) {
        self.session.clear();
        tracing::debug!("session cleared");
    }

    /// Fetch the current user profile and cache it in the session
    pub async fn fetch_me(&self) -> ClientResult<User> {
        self.require_auth()?;
        let user: User = self.http().get("/users/me").await?;
        self.session.set_user(user.clone());
        Ok(user)
    }

    /// Re-verify the account password (gate for sensitive profile edits)
    ///
    /// A 403 means "wrong password", not a failure.
    pub async fn verify_password(&self, password: &str) -> ClientResult<bool> {
        self.require_auth()?;

        let request = VerifyPasswordRequest {
            password: password.to_string(),
        };
        match self
            .http()
            .post::<PasswordVerification, _>("/auth/verify-password", &request)
            .await
        {
            Ok(verification) => Ok(verification.is_valid),
            Err(ClientError::Server { status: 403, .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Apply a sparse profile update; only set fields go on the wire
    ///
    /// Validation runs before the request: phone format, new-password
    /// length, current password required alongside a new one, and an empty
    /// update is rejected as [`ClientError::NothingToUpdate`].
    pub async fn update_profile(&self, update: ProfileUpdate) -> ClientResult<User> {
        self.require_auth()?;
        validate_profile_update(&update)?;

        let user: User = self.http().patch("/users/me", &update).await?;
        self.session.set_user(user.clone());
        Ok(user)
    }
}
