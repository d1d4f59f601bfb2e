//! Current-session identity.
//!
//! A [`Session`] remembers which account is signed in. It stores only the
//! account id and re-reads the account through [`AccountsQuery`] on demand,
//! so profile edits are visible without refreshing the session. Observers
//! subscribe to identity changes through a `tokio::sync::watch` channel.

use tokio::sync::watch;
use tracing::info;

use crate::domain::ports::{AccountCommand, AccountsQuery, LoginService};
use crate::domain::{
    Account, AccountId, DomainError, ErrorCode, Registration, SignInCredentials,
};

/// Holds the identity of the signed-in account, if any.
#[derive(Debug)]
pub struct Session {
    current: watch::Sender<Option<AccountId>>,
}

impl Session {
    /// Create a signed-out session.
    ///
    /// # Examples
    /// ```
    /// use alumni_connect::domain::Session;
    ///
    /// let session = Session::new();
    /// assert!(session.current_account_id().is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self { current }
    }

    /// Authenticate and, on success, make the account current.
    ///
    /// A failed attempt leaves the previous identity untouched.
    pub async fn sign_in<L>(
        &self,
        login: &L,
        credentials: &SignInCredentials,
    ) -> Result<Account, DomainError>
    where
        L: LoginService + ?Sized,
    {
        let account = login.authenticate(credentials).await?;
        self.set_current(account.id().clone());
        info!(account_id = %account.id(), "signed in");
        Ok(account)
    }

    /// Register a new account and make it current.
    pub async fn sign_up<C>(
        &self,
        accounts: &C,
        registration: Registration,
    ) -> Result<Account, DomainError>
    where
        C: AccountCommand + ?Sized,
    {
        let account = accounts.register(registration).await?;
        self.set_current(account.id().clone());
        info!(account_id = %account.id(), "signed up");
        Ok(account)
    }

    /// Clear the current identity. Signing out twice is a no-op.
    pub fn sign_out(&self) {
        let mut previous = None;
        self.current.send_if_modified(|current| {
            previous = current.take();
            previous.is_some()
        });
        if let Some(account_id) = previous {
            info!(account_id = %account_id, "signed out");
        }
    }

    /// Identifier of the signed-in account.
    #[must_use]
    pub fn current_account_id(&self) -> Option<AccountId> {
        self.current.borrow().clone()
    }

    /// Fresh copy of the signed-in account.
    ///
    /// Returns `Ok(None)` when nobody is signed in or the account no longer
    /// exists.
    pub async fn current<Q>(&self, accounts: &Q) -> Result<Option<Account>, DomainError>
    where
        Q: AccountsQuery + ?Sized,
    {
        let Some(account_id) = self.current_account_id() else {
            return Ok(None);
        };
        match accounts.find_account(&account_id).await {
            Ok(account) => Ok(Some(account)),
            Err(error) if error.code() == ErrorCode::NotFound => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Watch identity changes.
    ///
    /// The receiver starts with the current identity marked as seen and is
    /// notified only when the identity actually changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<AccountId>> {
        self.current.subscribe()
    }

    fn set_current(&self, account_id: AccountId) {
        self.current.send_if_modified(|current| {
            if current.as_ref() == Some(&account_id) {
                false
            } else {
                *current = Some(account_id);
                true
            }
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
