//! Auth-session state and the login/register/OTP form flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is provided via context and read by route guards and the
//! sidebar profile footer. `AuthStep` and `AuthForm` are owned by the auth
//! page: every transition is gated by a client-side validation pass before
//! any network call, and a failed gate leaves the step unchanged.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{LoginRequest, RegisterRequest, SendOtpRequest, User};
use crate::util::validate::{self, PasswordRule, ValidationError};

/// Delay between a successful registration and returning to the login form.
pub const REGISTER_REDIRECT_DELAY_MS: u64 = 2_000;
/// Delay between a successful login and navigating to the dashboard.
pub const LOGIN_REDIRECT_DELAY_MS: u64 = 1_500;

/// Authentication state for the current tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// Display identity, fetched once after the session is found.
    pub user: Option<User>,
    /// A session token is present.
    pub authenticated: bool,
    /// The session has not been read yet (always true during SSR).
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, authenticated: false, loading: true }
    }
}

/// Which auth form is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStep {
    #[default]
    Login,
    Register,
    OtpPending,
}

/// Inputs that move the auth flow between forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// "Create account" link on the login form.
    ShowRegister,
    /// "Sign in" link on the register form.
    ShowLogin,
    /// The send-OTP call succeeded.
    OtpSent,
    /// The register call succeeded and its display delay elapsed.
    Registered,
    /// Back button on the OTP form.
    Back,
}

impl AuthStep {
    /// Next step for `event`; events that do not apply leave the step unchanged.
    #[must_use]
    pub fn next(self, event: AuthEvent) -> Self {
        match (self, event) {
            (Self::Login, AuthEvent::ShowRegister) | (Self::OtpPending, AuthEvent::Back) => Self::Register,
            (Self::Register, AuthEvent::ShowLogin) | (Self::OtpPending, AuthEvent::Registered) => Self::Login,
            (Self::Register, AuthEvent::OtpSent) => Self::OtpPending,
            (step, _) => step,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Register => "Create Account",
            Self::OtpPending => "Verify Email",
        }
    }
}

/// Draft values for every auth form field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub otp: String,
}

impl AuthForm {
    /// Password rules currently failing, for live display on the register form.
    pub fn password_errors(&self) -> Vec<PasswordRule> {
        validate::password_violations(&self.password)
    }

    /// The send-OTP button stays disabled until every field is filled and
    /// the password passes.
    pub fn send_otp_disabled(&self) -> bool {
        self.name.is_empty() || self.email.is_empty() || self.password.is_empty() || !self.password_errors().is_empty()
    }

    pub fn login_disabled(&self) -> bool {
        self.email.is_empty() || self.password.is_empty()
    }

    /// Gate for the login form.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the email is malformed or the
    /// password is empty.
    pub fn login_request(&self) -> Result<LoginRequest, ValidationError> {
        if !validate::is_valid_email(&self.email) {
            return Err(ValidationError("Please enter a valid email address"));
        }
        if self.password.is_empty() {
            return Err(ValidationError("Password is required"));
        }
        Ok(LoginRequest { email: self.email.clone(), password: self.password.clone() })
    }

    /// Gate for the register form's send-OTP action.
    ///
    /// # Errors
    ///
    /// Returns the message for the first failing check: email, password,
    /// then name.
    pub fn send_otp_request(&self) -> Result<SendOtpRequest, ValidationError> {
        if !validate::is_valid_email(&self.email) {
            return Err(ValidationError("Please enter a valid email address"));
        }
        if !validate::is_valid_password(&self.password) {
            return Err(ValidationError("Please fix password errors before proceeding"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError("Please enter your full name"));
        }
        Ok(SendOtpRequest { email: self.email.clone() })
    }

    /// Gate for the OTP form's register action.
    ///
    /// # Errors
    ///
    /// Returns the message for the first failing check: OTP, name, email,
    /// then password.
    pub fn register_request(&self) -> Result<RegisterRequest, ValidationError> {
        if !validate::is_valid_otp(&self.otp) {
            return Err(ValidationError("OTP must be exactly 6 digits"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError("Name is required"));
        }
        if !validate::is_valid_email(&self.email) {
            return Err(ValidationError("Invalid email format"));
        }
        if !validate::is_valid_password(&self.password) {
            return Err(ValidationError("Password does not meet requirements"));
        }
        Ok(RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            otp: self.otp.clone(),
        })
    }
}
