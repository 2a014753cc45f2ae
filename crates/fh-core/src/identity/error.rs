use thiserror::Error;

/// Popup / provider-side authentication failure. Recoverable; the user
/// may retry, and session state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderAuthError {
    #[error("sign-in popup dismissed")]
    PopupDismissed,

    #[error("provider rejected the request: {0}")]
    Provider(String),

    #[error("identity gateway failed: {0}")]
    Gateway(String),
}

/// Email/password credential failure, surfaced as a field-level message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("email address is malformed")]
    MalformedEmail,

    #[error("password is too weak")]
    WeakPassword,

    #[error("wrong password")]
    WrongPassword,

    #[error("no account with that email")]
    AccountNotFound,

    #[error("an account with that email already exists")]
    AccountExists,
}
