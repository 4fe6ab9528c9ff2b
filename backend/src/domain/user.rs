//! User record and identifier types.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors returned when constructing a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Identifiers start at 1; zero and negative values never name a record.
    NonPositiveId { value: i64 },
    /// The raw identifier is not a base-10 integer.
    NotAnInteger { raw: String },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId { value } => {
                write!(f, "user id must be positive, got {value}")
            }
            Self::NotAnInteger { raw } => write!(f, "user id '{raw}' is not an integer"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Repository-assigned user identifier.
///
/// Always positive. Serialised as a bare JSON number; text parsing goes
/// through `i64` so negative input is reported as non-positive rather than
/// malformed.
///
/// # Examples
/// ```
/// use user_service::domain::UserId;
///
/// let id: UserId = "42".parse().expect("numeric id");
/// assert_eq!(id.get(), 42);
/// assert!(UserId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct UserId(NonZeroU64);

impl UserId {
    /// The first identifier handed out by a fresh repository.
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Validate and construct a [`UserId`].
    pub fn new(value: u64) -> Result<Self, UserValidationError> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or(UserValidationError::NonPositiveId { value: 0 })
    }

    /// Raw numeric value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// The identifier following this one.
    ///
    /// Saturates at `u64::MAX`; a process cannot realistically create that
    /// many records.
    #[must_use]
    pub fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<u64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or(UserValidationError::NonPositiveId { value })
    }
}

impl From<UserId> for u64 {
    fn from(value: UserId) -> Self {
        value.get()
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value: i64 = raw
            .parse()
            .map_err(|_| UserValidationError::NotAnInteger {
                raw: raw.to_owned(),
            })?;
        Self::try_from(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input to user creation: everything but the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    name: String,
    email: String,
}

impl UserDraft {
    /// Build a draft from its parts. No format rules apply to either field.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attach a repository-assigned identifier, producing the stored record.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// A stored user record.
///
/// ## Invariants
/// - `id` was assigned by the repository counter and never changes.
/// - `name` and `email` are free text; the core applies no format rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a record from validated components.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Repository-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email, stored verbatim.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
