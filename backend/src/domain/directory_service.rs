//! Directory domain service.
//!
//! [`DirectoryService`] implements every driving port over one shared
//! [`Directory`]. All reads and writes go through a single mutex so the email
//! uniqueness check and author snapshot propagation stay atomic when callers
//! share the service across tasks. It allocates identifiers and reads the
//! clock; the aggregate stays deterministic.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, warn};

use crate::domain::ports::{
    AccountCommand, AccountsQuery, CreatePostRequest, DeletePostRequest, LoginService,
    PostCommand, PostsQuery, UpdatePostRequest,
};
use crate::domain::{
    Account, AccountId, Directory, DomainError, ErrorCode, Post, PostId, ProfileUpdate,
    Registration, SignInCredentials,
};

/// Shared, thread-safe handle to the in-memory directory.
#[derive(Clone)]
pub struct DirectoryService {
    directory: Arc<Mutex<Directory>>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for DirectoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryService").finish_non_exhaustive()
    }
}

impl DirectoryService {
    /// Wrap an empty directory.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use alumni_connect::domain::DirectoryService;
    ///
    /// let service = DirectoryService::new(Arc::new(DefaultClock));
    /// assert_eq!(service.account_count().unwrap(), 0);
    /// ```
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_directory(Directory::new(), clock)
    }

    /// Wrap a pre-populated directory, e.g. one holding demo data.
    pub fn with_directory(directory: Directory, clock: Arc<dyn Clock>) -> Self {
        Self {
            directory: Arc::new(Mutex::new(directory)),
            clock,
        }
    }

    /// Number of registered accounts.
    pub fn account_count(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.account_count())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Directory>, DomainError> {
        self.directory
            .lock()
            .map_err(|_| DomainError::internal("directory lock poisoned"))
    }
}

#[async_trait]
impl LoginService for DirectoryService {
    async fn authenticate(&self, credentials: &SignInCredentials) -> Result<Account, DomainError> {
        let result = self.lock()?.authenticate(credentials);
        if matches!(&result, Err(error) if error.code() == ErrorCode::AuthenticationFailed) {
            warn!(email = credentials.email(), "sign-in rejected");
        }
        result
    }
}

#[async_trait]
impl AccountCommand for DirectoryService {
    async fn register(&self, registration: Registration) -> Result<Account, DomainError> {
        let account = self.lock()?.register(AccountId::random(), registration)?;
        debug!(account_id = %account.id(), email = %account.email(), "account registered");
        Ok(account)
    }

    async fn update_profile(
        &self,
        account_id: &AccountId,
        update: ProfileUpdate,
    ) -> Result<Account, DomainError> {
        let account = self.lock()?.update_profile(account_id, update)?;
        debug!(account_id = %account_id, "profile updated");
        Ok(account)
    }
}

#[async_trait]
impl AccountsQuery for DirectoryService {
    async fn find_account(&self, account_id: &AccountId) -> Result<Account, DomainError> {
        self.lock()?.find_account(account_id)
    }

    async fn search_accounts(&self, query: &str) -> Result<Vec<Account>, DomainError> {
        Ok(self.lock()?.search_accounts(query))
    }
}

#[async_trait]
impl PostCommand for DirectoryService {
    async fn create_post(&self, request: CreatePostRequest) -> Result<Post, DomainError> {
        let CreatePostRequest {
            author_id,
            title,
            body,
        } = request;
        let created_at = self.clock.utc();
        let post =
            self.lock()?
                .create_post(PostId::random(), &author_id, title, body, created_at)?;
        debug!(post_id = %post.id(), author_id = %author_id, "post created");
        Ok(post)
    }

    async fn update_post(&self, request: UpdatePostRequest) -> Result<Post, DomainError> {
        let UpdatePostRequest {
            post_id,
            acting_account_id,
            title,
            body,
        } = request;
        let post = self
            .lock()?
            .update_post(post_id, &acting_account_id, title, body)?;
        debug!(post_id = %post_id, "post updated");
        Ok(post)
    }

    async fn delete_post(&self, request: DeletePostRequest) -> Result<(), DomainError> {
        self.lock()?
            .delete_post(request.post_id, &request.acting_account_id)?;
        debug!(post_id = %request.post_id, "post deleted");
        Ok(())
    }
}

#[async_trait]
impl PostsQuery for DirectoryService {
    async fn list_posts(&self, _viewer: Option<AccountId>) -> Result<Vec<Post>, DomainError> {
        Ok(self.lock()?.list_posts())
    }
}

#[cfg(test)]
#[path = "directory_service_tests.rs"]
mod tests;
