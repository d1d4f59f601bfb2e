//! Domain ports for the hexagonal boundary.
//!
//! Every port here is a *driving* port: presentation code and the
//! [`crate::domain::Session`] call them, and [`crate::domain::DirectoryService`]
//! implements all of them over the in-memory directory.

mod account_command;
mod accounts_query;
mod login_service;
mod post_command;
mod posts_query;

#[cfg(test)]
pub use account_command::MockAccountCommand;
pub use account_command::AccountCommand;
#[cfg(test)]
pub use accounts_query::MockAccountsQuery;
pub use accounts_query::AccountsQuery;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use post_command::MockPostCommand;
pub use post_command::{CreatePostRequest, DeletePostRequest, PostCommand, UpdatePostRequest};
#[cfg(test)]
pub use posts_query::MockPostsQuery;
pub use posts_query::PostsQuery;
