//! Alumni Connect directory library.
//!
//! An in-memory store of member accounts, extended profiles and a shared
//! feed of posts, plus the session that tracks who is signed in. The
//! [`domain`] module owns the rules; [`demo_data`] wires a ready-to-use
//! directory from configuration.

pub mod demo_data;
pub mod domain;
