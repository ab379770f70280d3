use gymhub_domain::{Role, UserProfile};
use parking_lot::RwLock;
use std::sync::Arc;

/// The signed-in operator, shared by every clone.
///
/// Lives only in memory: nothing is persisted and the session never expires on its own.
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: Arc<RwLock<Option<UserProfile>>>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, profile: UserProfile) {
        *self.profile.write() = Some(profile);
    }

    /// Clears the session, returning the profile that was signed in.
    pub fn clear(&self) -> Option<UserProfile> {
        self.profile.write().take()
    }

    #[must_use]
    pub fn current(&self) -> Option<UserProfile> {
        self.profile.read().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.profile.read().is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.profile.read().as_ref().map(|p| p.rol)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Administrator)
    }

    /// Administrators and receptionists run the front desk.
    #[must_use]
    pub fn can_manage_memberships(&self) -> bool {
        matches!(self.role(), Some(Role::Administrator | Role::Receptionist))
    }
}
