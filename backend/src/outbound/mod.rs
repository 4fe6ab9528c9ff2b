//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: storage backends for [`crate::domain::ports::UserRepository`].
//!
//! Adapters translate between domain types and their storage representation
//! and carry no request handling logic.

pub mod persistence;
