//! In-memory identity gateway
//!
//! Development and test backend for the identity gateway port: holds
//! email/password accounts and per-provider profiles in memory, and
//! fans identity-change notifications out over buffered channels. Popup
//! outcomes are scriptable (`dismiss_next_popup`), which is how tests
//! exercise the dismissal path without a human.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

use fh_core::ports::{IdentityChange, IdentityGatewayPort};
use fh_core::{CredentialError, ProviderAuthError, ProviderKind, UserIdentity};

/// Capacity of each subscriber's notification channel.
const SUBSCRIBER_CHANNEL_CAPACITY: usize = 16;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

struct PasswordAccount {
    password: String,
    identity: UserIdentity,
}

pub struct InMemoryIdentityGateway {
    accounts: Mutex<HashMap<String, PasswordAccount>>,
    provider_profiles: Mutex<HashMap<ProviderKind, UserIdentity>>,
    current: Mutex<Option<UserIdentity>>,
    subscribers: Mutex<Vec<mpsc::Sender<IdentityChange>>>,
    dismiss_next_popup: AtomicBool,
    reset_requests: Mutex<Vec<String>>,
}

impl InMemoryIdentityGateway {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            provider_profiles: Mutex::new(HashMap::new()),
            current: Mutex::new(None),
            subscribers: Mutex::new(Vec::new()),
            dismiss_next_popup: AtomicBool::new(false),
            reset_requests: Mutex::new(Vec::new()),
        }
    }

    /// Register the profile a popup sign-in for `kind` resolves to.
    pub fn with_provider_profile(self, kind: ProviderKind, identity: UserIdentity) -> Self {
        self.provider_profiles.lock().unwrap().insert(kind, identity);
        self
    }

    /// Make the next popup flow behave as if the user closed the window.
    pub fn dismiss_next_popup(&self) {
        self.dismiss_next_popup.store(true, Ordering::SeqCst);
    }

    /// Push the current identity to every subscriber. This is the
    /// initial notification a hosted gateway fires right after
    /// subscription.
    pub fn announce(&self) {
        let current = self.current.lock().unwrap().clone();
        self.broadcast(current);
    }

    /// Emails a password reset was requested for, oldest first.
    pub fn reset_requests(&self) -> Vec<String> {
        self.reset_requests.lock().unwrap().clone()
    }

    fn set_current(&self, identity: Option<UserIdentity>) {
        *self.current.lock().unwrap() = identity.clone();
        self.broadcast(identity);
    }

    fn broadcast(&self, change: IdentityChange) {
        self.subscribers.lock().unwrap().retain(|tx| {
            match tx.try_send(change.clone()) {
                Ok(()) => true,
                Err(mpsc::error::TrySendError::Closed(_)) => false,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    tracing::warn!("identity subscriber lagging; notification dropped");
                    true
                }
            }
        });
    }
}

impl Default for InMemoryIdentityGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn is_well_formed(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

#[async_trait]
impl IdentityGatewayPort for InMemoryIdentityGateway {
    async fn sign_in_with_popup(
        &self,
        provider: ProviderKind,
    ) -> Result<UserIdentity, ProviderAuthError> {
        if self.dismiss_next_popup.swap(false, Ordering::SeqCst) {
            return Err(ProviderAuthError::PopupDismissed);
        }

        let profile = self
            .provider_profiles
            .lock()
            .unwrap()
            .get(&provider)
            .cloned()
            .ok_or_else(|| {
                ProviderAuthError::Provider(format!("{provider} has no account configured"))
            })?;

        self.set_current(Some(profile.clone()));
        Ok(profile)
    }

    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserIdentity, CredentialError> {
        if !is_well_formed(email) {
            return Err(CredentialError::MalformedEmail);
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(CredentialError::WeakPassword);
        }

        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(CredentialError::AccountExists);
        }

        let identity = UserIdentity {
            uid: Uuid::new_v4().to_string(),
            email: Some(email.to_string()),
            display_name: None,
            photo_url: None,
            providers: vec![ProviderKind::Password],
        };
        accounts.insert(
            email.to_string(),
            PasswordAccount {
                password: password.to_string(),
                identity: identity.clone(),
            },
        );
        drop(accounts);

        self.set_current(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserIdentity, CredentialError> {
        let identity = {
            let accounts = self.accounts.lock().unwrap();
            let account = accounts.get(email).ok_or(CredentialError::AccountNotFound)?;
            if account.password != password {
                return Err(CredentialError::WrongPassword);
            }
            account.identity.clone()
        };

        self.set_current(Some(identity.clone()));
        Ok(identity)
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), CredentialError> {
        if !is_well_formed(email) {
            return Err(CredentialError::MalformedEmail);
        }
        if !self.accounts.lock().unwrap().contains_key(email) {
            return Err(CredentialError::AccountNotFound);
        }

        self.reset_requests.lock().unwrap().push(email.to_string());
        tracing::debug!(email, "password reset dispatched");
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), ProviderAuthError> {
        self.set_current(None);
        Ok(())
    }

    fn identity_changes(&self) -> mpsc::Receiver<IdentityChange> {
        let (tx, rx) = mpsc::channel(SUBSCRIBER_CHANNEL_CAPACITY);
        self.subscribers.lock().unwrap().push(tx);
        rx
    }
}
