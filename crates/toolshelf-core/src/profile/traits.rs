//! Profile/quota service contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role attached to an authenticated identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Identity of whoever is making a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Caller {
    Anonymous,
    Authenticated { id: String, role: Role },
}

impl Caller {
    pub fn user(id: impl Into<String>) -> Self {
        Caller::Authenticated { id: id.into(), role: Role::User }
    }

    pub fn admin(id: impl Into<String>) -> Self {
        Caller::Authenticated { id: id.into(), role: Role::Admin }
    }

    /// The caller's id, or `Unauthenticated`
    pub fn id(&self) -> ProfileResult<&str> {
        match self {
            Caller::Anonymous => Err(ProfileError::Unauthenticated),
            Caller::Authenticated { id, .. } => Ok(id),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Caller::Authenticated { role: Role::Admin, .. })
    }

    /// Allow the user themself or any admin
    pub fn require_self_or_admin(&self, user_id: &str) -> ProfileResult<()> {
        let id = self.id()?;
        if id == user_id || self.is_admin() {
            Ok(())
        } else {
            Err(ProfileError::unauthorized(format!("{} may not access {}", id, user_id)))
        }
    }

    pub fn require_admin(&self) -> ProfileResult<()> {
        let id = self.id()?;
        if self.is_admin() {
            Ok(())
        } else {
            Err(ProfileError::unauthorized(format!("{} is not an admin", id)))
        }
    }
}

/// A user's stored profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub credits: u64,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            email: None,
            credits: 0,
        }
    }
}

/// One recorded use of a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolUsage {
    pub tool_id: String,
    pub count: u64,
}

/// Errors from the profile service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Caller is not authenticated")]
    Unauthenticated,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Invalid credit amount: {0}")]
    InvalidAmount(u64),
}

impl ProfileError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }
}

pub type ProfileResult<T> = Result<T, ProfileError>;

/// Backend holding user profiles, credit balances and tool usage
///
/// Every call names its caller. Reads and writes of a profile are limited to
/// the user themself or an admin; granting credits is admin-only.
/// The catalog layer never calls this; UI code does.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// The caller's own profile, if one was saved
    async fn get_caller_profile(&self, caller: &Caller) -> ProfileResult<Option<UserProfile>>;

    /// Store the caller's profile
    ///
    /// The profile is always stored under the caller's id; the credit
    /// balance is not writable through this call.
    async fn save_caller_profile(&self, caller: &Caller, profile: UserProfile) -> ProfileResult<()>;

    async fn get_user_profile(&self, caller: &Caller, user_id: &str) -> ProfileResult<Option<UserProfile>>;

    /// Spend credits from the caller's balance
    ///
    /// Returns `false` without changing anything when the balance is short.
    async fn consume_credits(&self, caller: &Caller, amount: u64) -> ProfileResult<bool>;

    /// Add credits to a user's balance (admin only); returns the new balance
    async fn grant_credits(&self, caller: &Caller, user_id: &str, amount: u64) -> ProfileResult<u64>;

    async fn record_tool_usage(&self, caller: &Caller, user_id: &str, tool_id: &str) -> ProfileResult<()>;

    /// Usage counts for a user, most used first
    async fn tool_usage(&self, caller: &Caller, user_id: &str) -> ProfileResult<Vec<ToolUsage>>;
}
