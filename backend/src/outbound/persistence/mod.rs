//! Persistence adapters for the user repository port.
//!
//! Only an in-memory backend exists. Records live for the lifetime of the
//! process and are lost on restart.

mod in_memory_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
