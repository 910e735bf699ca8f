//! In-memory profile service

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::traits::{Caller, ProfileError, ProfileResult, ProfileService, ToolUsage, UserProfile};

#[derive(Debug, Default)]
struct State {
    profiles: HashMap<String, UserProfile>,
    // user id -> tool id -> count
    usage: HashMap<String, HashMap<String, u64>>,
}

/// Profile service keeping everything in memory
///
/// Useful for tests and local development. A first save of a profile starts
/// it with `starting_credits`.
///
/// # Example
///
/// ```
/// use toolshelf_core::profile::{Caller, MemoryProfileService, ProfileService, UserProfile};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let service = MemoryProfileService::with_starting_credits(10);
/// let alice = Caller::user("alice");
/// service.save_caller_profile(&alice, UserProfile::new("alice", "Alice")).await.unwrap();
/// assert!(service.consume_credits(&alice, 3).await.unwrap());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct MemoryProfileService {
    starting_credits: u64,
    state: RwLock<State>,
}

impl MemoryProfileService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_starting_credits(starting_credits: u64) -> Self {
        Self {
            starting_credits,
            state: RwLock::new(State::default()),
        }
    }

    /// Number of stored profiles
    pub fn len(&self) -> usize {
        self.state.read().profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProfileService for MemoryProfileService {
    async fn get_caller_profile(&self, caller: &Caller) -> ProfileResult<Option<UserProfile>> {
        let id = caller.id()?;
        Ok(self.state.read().profiles.get(id).cloned())
    }

    async fn save_caller_profile(&self, caller: &Caller, mut profile: UserProfile) -> ProfileResult<()> {
        let id = caller.id()?;
        let mut state = self.state.write();

        profile.user_id = id.to_string();
        profile.credits = state
            .profiles
            .get(id)
            .map_or(self.starting_credits, |existing| existing.credits);

        state.profiles.insert(id.to_string(), profile);
        Ok(())
    }

    async fn get_user_profile(&self, caller: &Caller, user_id: &str) -> ProfileResult<Option<UserProfile>> {
        caller.require_self_or_admin(user_id)?;
        Ok(self.state.read().profiles.get(user_id).cloned())
    }

    async fn consume_credits(&self, caller: &Caller, amount: u64) -> ProfileResult<bool> {
        let id = caller.id()?;
        if amount == 0 {
            return Err(ProfileError::InvalidAmount(amount));
        }

        let mut state = self.state.write();
        let profile = state
            .profiles
            .get_mut(id)
            .ok_or_else(|| ProfileError::ProfileNotFound(id.to_string()))?;

        match profile.credits.checked_sub(amount) {
            Some(remaining) => {
                profile.credits = remaining;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn grant_credits(&self, caller: &Caller, user_id: &str, amount: u64) -> ProfileResult<u64> {
        caller.require_admin()?;
        if amount == 0 {
            return Err(ProfileError::InvalidAmount(amount));
        }

        let mut state = self.state.write();
        let profile = state
            .profiles
            .get_mut(user_id)
            .ok_or_else(|| ProfileError::ProfileNotFound(user_id.to_string()))?;

        profile.credits = profile.credits.saturating_add(amount);
        Ok(profile.credits)
    }

    async fn record_tool_usage(&self, caller: &Caller, user_id: &str, tool_id: &str) -> ProfileResult<()> {
        caller.require_self_or_admin(user_id)?;

        let mut state = self.state.write();
        *state
            .usage
            .entry(user_id.to_string())
            .or_default()
            .entry(tool_id.to_string())
            .or_insert(0) += 1;
        Ok(())
    }

    async fn tool_usage(&self, caller: &Caller, user_id: &str) -> ProfileResult<Vec<ToolUsage>> {
        caller.require_self_or_admin(user_id)?;

        let state = self.state.read();
        let mut usage: Vec<ToolUsage> = state
            .usage
            .get(user_id)
            .map(|tools| {
                tools
                    .iter()
                    .map(|(tool_id, count)| ToolUsage {
                        tool_id: tool_id.clone(),
                        count: *count,
                    })
                    .collect()
            })
            .unwrap_or_default();

        usage.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tool_id.cmp(&b.tool_id)));
        Ok(usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_get_own_profile() {
        let service = MemoryProfileService::with_starting_credits(5);
        let alice = Caller::user("alice");

        assert!(service.get_caller_profile(&alice).await.unwrap().is_none());

        // user id and credits in the payload are ignored
        let mut profile = UserProfile::new("mallory", "Alice");
        profile.credits = 1_000;
        service.save_caller_profile(&alice, profile).await.unwrap();

        let stored = service.get_caller_profile(&alice).await.unwrap().unwrap();
        assert_eq!(stored.user_id, "alice");
        assert_eq!(stored.credits, 5);
        assert!(service.get_user_profile(&alice, "mallory").await.is_err());
    }

    #[tokio::test]
    async fn test_anonymous_is_rejected() {
        let service = MemoryProfileService::new();
        assert_eq!(
            service.get_caller_profile(&Caller::Anonymous).await,
            Err(ProfileError::Unauthenticated)
        );
        assert_eq!(
            service.consume_credits(&Caller::Anonymous, 1).await,
            Err(ProfileError::Unauthenticated)
        );
    }

    #[tokio::test]
    async fn test_consume_credits() {
        let service = MemoryProfileService::with_starting_credits(3);
        let bob = Caller::user("bob");

        assert_eq!(
            service.consume_credits(&bob, 1).await,
            Err(ProfileError::ProfileNotFound("bob".to_string()))
        );

        service.save_caller_profile(&bob, UserProfile::new("bob", "Bob")).await.unwrap();
        assert_eq!(service.consume_credits(&bob, 2).await, Ok(true));
        assert_eq!(service.consume_credits(&bob, 2).await, Ok(false));
        assert_eq!(service.consume_credits(&bob, 0).await, Err(ProfileError::InvalidAmount(0)));

        let remaining = service.get_caller_profile(&bob).await.unwrap().unwrap().credits;
        assert_eq!(remaining, 1);
    }

    #[tokio::test]
    async fn test_grant_credits_is_admin_only() {
        let service = MemoryProfileService::new();
        let bob = Caller::user("bob");
        let admin = Caller::admin("root");
        service.save_caller_profile(&bob, UserProfile::new("bob", "Bob")).await.unwrap();

        assert!(matches!(
            service.grant_credits(&bob, "bob", 10).await,
            Err(ProfileError::Unauthorized(_))
        ));
        assert_eq!(service.grant_credits(&admin, "bob", 10).await, Ok(10));
        assert!(service.get_user_profile(&admin, "bob").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_tool_usage_counts() {
        let service = MemoryProfileService::new();
        let carol = Caller::user("carol");

        service.record_tool_usage(&carol, "carol", "bmi-calculator").await.unwrap();
        service.record_tool_usage(&carol, "carol", "word-counter").await.unwrap();
        service.record_tool_usage(&carol, "carol", "word-counter").await.unwrap();

        assert!(matches!(
            service.record_tool_usage(&carol, "dave", "word-counter").await,
            Err(ProfileError::Unauthorized(_))
        ));

        let usage = service.tool_usage(&carol, "carol").await.unwrap();
        assert_eq!(
            usage,
            vec![
                ToolUsage { tool_id: "word-counter".to_string(), count: 2 },
                ToolUsage { tool_id: "bmi-calculator".to_string(), count: 1 },
            ]
        );
    }
}
