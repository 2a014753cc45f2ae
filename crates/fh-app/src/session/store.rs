use std::sync::{Arc, Mutex, RwLock};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use fh_core::ports::IdentityGatewayPort;
use fh_core::{
    CredentialError, ProviderAuthError, ProviderKind, SessionState, UserIdentity,
};

/// Capacity for per-consumer notification channels.
const CONSUMER_CHANNEL_CAPACITY: usize = 16;

/// Process-wide source of truth for "who is logged in".
///
/// Wraps the identity gateway: sign-in/out operations delegate to it,
/// and a single long-lived subscription (established once at `start`,
/// torn down once at `shutdown`) feeds the canonical [`SessionState`].
/// Each notification atomically replaces `current`, latches `ready`,
/// and then fans out to registered consumers synchronously with the
/// state replacement, never during a provider round trip.
///
/// A failed gateway call leaves the state untouched; only the
/// subscription listener and the explicit sign-out path write it.
/// Overlapping sign-in attempts are not deduplicated: the last
/// notification observed wins.
pub struct SessionStore {
    gateway: Arc<dyn IdentityGatewayPort>,
    state: Arc<RwLock<SessionState>>,
    consumers: Arc<Mutex<Vec<mpsc::Sender<SessionState>>>>,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl SessionStore {
    /// Wrap `gateway`, subscribe to its identity changes and spawn the
    /// listener task that keeps the snapshot current.
    pub fn start(gateway: Arc<dyn IdentityGatewayPort>) -> Arc<Self> {
        let state = Arc::new(RwLock::new(SessionState::default()));
        let consumers: Arc<Mutex<Vec<mpsc::Sender<SessionState>>>> =
            Arc::new(Mutex::new(Vec::new()));

        let mut changes = gateway.identity_changes();
        let listener = {
            let state = state.clone();
            let consumers = consumers.clone();
            tokio::spawn(async move {
                while let Some(change) = changes.recv().await {
                    apply_change(&state, &consumers, change);
                }
                tracing::debug!("identity change stream ended");
            })
        };

        Arc::new(Self {
            gateway,
            state,
            consumers,
            listener: Mutex::new(Some(listener)),
        })
    }

    /// Snapshot of the canonical session state.
    pub fn snapshot(&self) -> SessionState {
        self.state.read().unwrap().clone()
    }

    /// Current identity, if any. Check `snapshot().ready` before
    /// rendering anything identity-dependent.
    pub fn current(&self) -> Option<UserIdentity> {
        self.state.read().unwrap().current.clone()
    }

    /// Register a UI consumer. Every state replacement is delivered as a
    /// fresh snapshot; dropping the receiver deregisters.
    pub fn subscribe(&self) -> mpsc::Receiver<SessionState> {
        let (tx, rx) = mpsc::channel(CONSUMER_CHANNEL_CAPACITY);
        self.consumers.lock().unwrap().push(tx);
        rx
    }

    /// Popup sign-in for one of the OAuth providers. On failure the
    /// prior session state is untouched.
    pub async fn sign_in_with_provider(
        &self,
        provider: ProviderKind,
    ) -> Result<UserIdentity, ProviderAuthError> {
        let identity = self.gateway.sign_in_with_popup(provider).await?;
        tracing::info!(provider = %provider, uid = %identity.uid, "provider sign-in succeeded");
        Ok(identity)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserIdentity, CredentialError> {
        let identity = self.gateway.create_account(email, password).await?;
        tracing::info!(uid = %identity.uid, "account created");
        Ok(identity)
    }

    pub async fn log_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserIdentity, CredentialError> {
        let identity = self.gateway.sign_in(email, password).await?;
        tracing::info!(uid = %identity.uid, "credential sign-in succeeded");
        Ok(identity)
    }

    /// Ask the gateway to dispatch a password-reset email. The side
    /// effect is external; nothing in the store changes.
    pub async fn reset_password(&self, email: &str) -> Result<(), CredentialError> {
        self.gateway.send_password_reset(email).await
    }

    /// Sign out. On success `current` is always cleared: written here
    /// directly (the one sanctioned writer besides the listener) and
    /// again by the gateway's own notification, idempotently.
    pub async fn sign_out(&self) -> Result<(), ProviderAuthError> {
        self.gateway.sign_out().await?;
        apply_change(&self.state, &self.consumers, None);
        tracing::info!("signed out");
        Ok(())
    }

    /// Tear down the gateway subscription. Called once at application
    /// shutdown; afterwards the snapshot no longer tracks the gateway.
    pub fn shutdown(&self) {
        if let Some(listener) = self.listener.lock().unwrap().take() {
            listener.abort();
        }
    }
}

impl Drop for SessionStore {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Replace the snapshot and notify consumers, in that order, under no
/// awaits. Closed consumers are dropped on the way.
fn apply_change(
    state: &RwLock<SessionState>,
    consumers: &Mutex<Vec<mpsc::Sender<SessionState>>>,
    change: Option<UserIdentity>,
) {
    let snapshot = {
        let mut state = state.write().unwrap();
        state.apply(change);
        state.clone()
    };
    tracing::debug!(
        signed_in = snapshot.is_signed_in(),
        "session state replaced"
    );

    consumers.lock().unwrap().retain(|tx| {
        match tx.try_send(snapshot.clone()) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Closed(_)) => false,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!("session consumer lagging; notification dropped");
                true
            }
        }
    });
}
