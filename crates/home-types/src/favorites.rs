use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::PropertyId;

/// HTTP verb used against `/properties/{id}/favorite`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FavoriteMethod {
    /// Add to favorites.
    Post,
    /// Remove from favorites.
    Delete,
}

/// Result of a single favorite toggle round trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ToggleOutcome {
    Added(PropertyId),
    Removed(PropertyId),
    /// No session was present; nothing was sent.
    LoginRequired,
    Failed { id: PropertyId, message: String },
}

impl ToggleOutcome {
    pub fn applied(id: PropertyId, method: FavoriteMethod) -> Self {
        match method {
            FavoriteMethod::Post => ToggleOutcome::Added(id),
            FavoriteMethod::Delete => ToggleOutcome::Removed(id),
        }
    }

    /// Text for the user-visible notice, if this outcome warrants one.
    pub fn notice(&self) -> Option<String> {
        match self {
            ToggleOutcome::Added(_) | ToggleOutcome::Removed(_) => None,
            ToggleOutcome::LoginRequired => Some("Please log in to save favorites.".into()),
            ToggleOutcome::Failed { message, .. } => {
                Some(format!("Could not update favorites: {message}"))
            }
        }
    }
}

/// What the page knows about the session before and after asking the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Not asked yet, or the answer is still in flight.
    #[default]
    Unknown,
    Present,
    Absent,
}

impl SessionStatus {
    /// Only a confirmed missing session short-circuits a toggle locally.
    pub fn may_toggle(self) -> bool {
        self != SessionStatus::Absent
    }

    pub fn is_present(self) -> bool {
        self == SessionStatus::Present
    }

    /// Status implied by a toggle outcome, if it says anything about the session.
    pub fn after(outcome: &ToggleOutcome) -> Option<Self> {
        match outcome {
            ToggleOutcome::LoginRequired => Some(SessionStatus::Absent),
            ToggleOutcome::Added(_) | ToggleOutcome::Removed(_) => Some(SessionStatus::Present),
            ToggleOutcome::Failed { .. } => None,
        }
    }
}

impl From<bool> for SessionStatus {
    fn from(present: bool) -> Self {
        if present {
            SessionStatus::Present
        } else {
            SessionStatus::Absent
        }
    }
}

/// Favorited property ids for the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSet(BTreeSet<PropertyId>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: PropertyId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PropertyId> + '_ {
        self.0.iter().copied()
    }

    /// POST when absent, DELETE when present.
    pub fn method_for(&self, id: PropertyId) -> FavoriteMethod {
        if self.contains(id) {
            FavoriteMethod::Delete
        } else {
            FavoriteMethod::Post
        }
    }

    pub fn apply(&mut self, id: PropertyId, method: FavoriteMethod) {
        match method {
            FavoriteMethod::Post => {
                self.0.insert(id);
            }
            FavoriteMethod::Delete => {
                self.0.remove(&id);
            }
        }
    }

    /// Only confirmed outcomes change membership.
    pub fn reconcile(&mut self, outcome: &ToggleOutcome) {
        match outcome {
            ToggleOutcome::Added(id) => self.apply(*id, FavoriteMethod::Post),
            ToggleOutcome::Removed(id) => self.apply(*id, FavoriteMethod::Delete),
            ToggleOutcome::LoginRequired | ToggleOutcome::Failed { .. } => {}
        }
    }
}

impl FromIterator<PropertyId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = PropertyId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[u64]) -> FavoriteSet {
        ids.iter().copied().map(PropertyId).collect()
    }

    #[test]
    fn method_follows_membership() {
        let favorites = set(&[5, 9]);
        assert_eq!(favorites.method_for(PropertyId(5)), FavoriteMethod::Delete);
        assert_eq!(favorites.method_for(PropertyId(9)), FavoriteMethod::Delete);
        assert_eq!(favorites.method_for(PropertyId(1)), FavoriteMethod::Post);
        assert_eq!(FavoriteSet::new().method_for(PropertyId(5)), FavoriteMethod::Post);
    }

    #[test]
    fn reconcile_applies_confirmed_outcomes() {
        let mut favorites = FavoriteSet::new();
        favorites.reconcile(&ToggleOutcome::Added(PropertyId(5)));
        assert_eq!(favorites, set(&[5]));

        favorites.reconcile(&ToggleOutcome::Removed(PropertyId(5)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn reconcile_ignores_failures_and_missing_session() {
        let mut favorites = set(&[5]);
        favorites.reconcile(&ToggleOutcome::Failed {
            id: PropertyId(5),
            message: "500".into(),
        });
        favorites.reconcile(&ToggleOutcome::LoginRequired);
        assert_eq!(favorites, set(&[5]));
    }

    #[test]
    fn apply_is_idempotent() {
        let mut favorites = set(&[2]);
        favorites.apply(PropertyId(2), FavoriteMethod::Post);
        assert_eq!(favorites.len(), 1);
        favorites.apply(PropertyId(7), FavoriteMethod::Delete);
        assert_eq!(favorites, set(&[2]));
    }

    #[test]
    fn unknown_session_still_reaches_the_server() {
        assert!(SessionStatus::default().may_toggle());
        assert!(SessionStatus::Present.may_toggle());
        assert!(!SessionStatus::Absent.may_toggle());
    }

    #[test]
    fn session_status_follows_server_answers() {
        assert_eq!(SessionStatus::from(true), SessionStatus::Present);
        assert_eq!(SessionStatus::from(false), SessionStatus::Absent);
        assert!(SessionStatus::from(true).is_present());
        assert!(!SessionStatus::Unknown.is_present());

        assert_eq!(
            SessionStatus::after(&ToggleOutcome::LoginRequired),
            Some(SessionStatus::Absent)
        );
        assert_eq!(
            SessionStatus::after(&ToggleOutcome::Added(PropertyId(1))),
            Some(SessionStatus::Present)
        );
        assert_eq!(
            SessionStatus::after(&ToggleOutcome::Failed {
                id: PropertyId(1),
                message: "timeout".into(),
            }),
            None
        );
    }

    #[test]
    fn only_unconfirmed_outcomes_carry_a_notice() {
        assert!(ToggleOutcome::Added(PropertyId(1)).notice().is_none());
        assert!(ToggleOutcome::LoginRequired
            .notice()
            .unwrap()
            .contains("log in"));
        let failed = ToggleOutcome::Failed {
            id: PropertyId(1),
            message: "server responded with 500".into(),
        };
        assert!(failed.notice().unwrap().contains("500"));
    }
}
