use super::*;

fn filled_form() -> AuthForm {
    AuthForm {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Abcdef1!".to_owned(),
        otp: "123456".to_owned(),
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.authenticated);
    assert_eq!(state.user, None);
}

// =============================================================
// AuthStep transitions
// =============================================================

#[test]
fn login_to_register_on_user_action() {
    assert_eq!(AuthStep::Login.next(AuthEvent::ShowRegister), AuthStep::Register);
}

#[test]
fn register_to_otp_pending_after_otp_sent() {
    assert_eq!(AuthStep::Register.next(AuthEvent::OtpSent), AuthStep::OtpPending);
}

#[test]
fn otp_pending_to_login_after_registration() {
    assert_eq!(AuthStep::OtpPending.next(AuthEvent::Registered), AuthStep::Login);
}

#[test]
fn otp_pending_back_returns_to_register() {
    assert_eq!(AuthStep::OtpPending.next(AuthEvent::Back), AuthStep::Register);
}

#[test]
fn register_can_return_to_login() {
    assert_eq!(AuthStep::Register.next(AuthEvent::ShowLogin), AuthStep::Login);
}

#[test]
fn inapplicable_events_do_not_change_step() {
    assert_eq!(AuthStep::Login.next(AuthEvent::OtpSent), AuthStep::Login);
    assert_eq!(AuthStep::Login.next(AuthEvent::Registered), AuthStep::Login);
    assert_eq!(AuthStep::Register.next(AuthEvent::Registered), AuthStep::Register);
    assert_eq!(AuthStep::OtpPending.next(AuthEvent::ShowRegister), AuthStep::OtpPending);
}

#[test]
fn auth_step_default_is_login() {
    assert_eq!(AuthStep::default(), AuthStep::Login);
}

// =============================================================
// Login gate
// =============================================================

#[test]
fn login_request_carries_email_and_password() {
    let req = filled_form().login_request().unwrap();
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.password, "Abcdef1!");
}

#[test]
fn login_rejects_bad_email_before_password() {
    let form = AuthForm { email: "ada@example".to_owned(), password: String::new(), ..AuthForm::default() };
    assert_eq!(form.login_request(), Err(ValidationError("Please enter a valid email address")));
}

#[test]
fn login_requires_password_but_not_strength() {
    let mut form = AuthForm { email: "ada@example.com".to_owned(), ..AuthForm::default() };
    assert_eq!(form.login_request(), Err(ValidationError("Password is required")));
    form.password = "weak".to_owned();
    assert!(form.login_request().is_ok());
}

#[test]
fn login_disabled_until_both_fields_present() {
    let mut form = AuthForm { email: "ada@example.com".to_owned(), ..AuthForm::default() };
    assert!(form.login_disabled());
    form.password = "x".to_owned();
    assert!(!form.login_disabled());
}

#[test]
fn step_titles() {
    assert_eq!(AuthStep::Login.title(), "Welcome Back");
    assert_eq!(AuthStep::OtpPending.title(), "Verify Email");
}

// =============================================================
// Send-OTP gate
// =============================================================

#[test]
fn send_otp_request_uses_email_only() {
    let req = filled_form().send_otp_request().unwrap();
    assert_eq!(req.email, "ada@example.com");
}

#[test]
fn send_otp_checks_email_then_password_then_name() {
    let mut form = filled_form();
    form.email = "nope".to_owned();
    form.password = "weak".to_owned();
    form.name = "  ".to_owned();
    assert_eq!(form.send_otp_request(), Err(ValidationError("Please enter a valid email address")));

    form.email = "ada@example.com".to_owned();
    assert_eq!(form.send_otp_request(), Err(ValidationError("Please fix password errors before proceeding")));

    form.password = "Abcdef1!".to_owned();
    assert_eq!(form.send_otp_request(), Err(ValidationError("Please enter your full name")));
}

#[test]
fn send_otp_disabled_until_all_fields_valid() {
    let mut form = AuthForm::default();
    assert!(form.send_otp_disabled());
    form = filled_form();
    assert!(!form.send_otp_disabled());
    form.password = "abcdef1!".to_owned();
    assert!(form.send_otp_disabled());
    assert_eq!(form.password_errors(), vec![PasswordRule::Uppercase]);
}

// =============================================================
// Register gate
// =============================================================

#[test]
fn register_request_includes_otp() {
    let req = filled_form().register_request().unwrap();
    assert_eq!(req.otp, "123456");
    assert_eq!(req.name, "Ada Lovelace");
}

#[test]
fn register_rejects_malformed_otp_first() {
    let mut form = filled_form();
    form.otp = "12345".to_owned();
    form.name = String::new();
    assert_eq!(form.register_request(), Err(ValidationError("OTP must be exactly 6 digits")));
}

#[test]
fn register_reports_remaining_checks_in_order() {
    let mut form = filled_form();
    form.name = " ".to_owned();
    assert_eq!(form.register_request(), Err(ValidationError("Name is required")));

    form.name = "Ada".to_owned();
    form.email = "ada.example.com".to_owned();
    assert_eq!(form.register_request(), Err(ValidationError("Invalid email format")));

    form.email = "ada@example.com".to_owned();
    form.password = "Abcdefgh".to_owned();
    assert_eq!(form.register_request(), Err(ValidationError("Password does not meet requirements")));
}
