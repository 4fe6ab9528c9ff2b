//! Domain ports: the traits adapters implement at the hexagonal boundary.

mod user_repository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
