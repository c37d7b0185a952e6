use crate::endpoints::auth;
use crate::types::{
    AuthResponse, ConfirmOtpRequest, MessageResponse, RegisterInformationRequest, SignInRequest,
    SignUpRequest,
};
use crate::{Client, Result};

/// Sign-in and the `OTP → UPDATE_INFO → ACTIVE` activation steps
pub struct AuthService {
    client: Client,
}

impl AuthService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Sign in and attach the returned access token to the client
    pub async fn sign_in(&self, params: &SignInRequest) -> Result<AuthResponse> {
        let response: AuthResponse = self.client.post(auth::SIGN_IN, params).await?;
        self.client.set_access_token(response.access_token.clone());
        tracing::debug!("signed in");
        Ok(response)
    }

    pub async fn sign_up(&self, params: &SignUpRequest) -> Result<MessageResponse> {
        self.client.post(auth::SIGN_UP, params).await
    }

    pub async fn confirm_otp(&self, params: &ConfirmOtpRequest) -> Result<MessageResponse> {
        self.client.post(auth::CONFIRM_OTP, params).await
    }

    pub async fn register_information(
        &self,
        params: &RegisterInformationRequest,
    ) -> Result<AuthResponse> {
        self.client.post(auth::REGISTER_INFORMATION, params).await
    }
}
