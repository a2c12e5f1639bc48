//! Capacity-bounded groups and their membership gate.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use roster_core::{DomainError, Entity, EntityKey, ValueObject};

use crate::participant::ParticipantId;

/// Group identifier (caller-assigned, e.g. a course code).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub EntityKey);

impl GroupId {
    pub fn new(key: EntityKey) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl core::fmt::Display for GroupId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        Self(EntityKey::from(value))
    }
}

impl From<String> for GroupId {
    fn from(value: String) -> Self {
        Self(EntityKey::from(value))
    }
}

impl FromStr for GroupId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKey::from_str(s).map(Self)
    }
}

/// Maximum member count for a group (value object).
///
/// Always positive: a group that can never hold a member is a configuration
/// mistake, not a valid state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capacity(u32);

impl Capacity {
    pub fn new(limit: u32) -> Result<Self, DomainError> {
        if limit == 0 {
            return Err(DomainError::validation("capacity must be positive"));
        }
        Ok(Self(limit))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Capacity {
    /// Capacity applied when a group is registered without an explicit limit.
    fn default() -> Self {
        Self(30)
    }
}

impl ValueObject for Capacity {}

impl core::fmt::Display for Capacity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: a named group holding at most `capacity` members.
///
/// The member sequence is kept in join order and never contains duplicates.
/// Membership is normally mediated by the [`Registry`](crate::Registry);
/// `add_member`/`remove_member` form the group's half of the bilateral
/// contract and enforce the capacity gate even when invoked directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    name: String,
    leader: String,
    capacity: Capacity,
    members: Vec<ParticipantId>,
}

impl Group {
    /// Create a group with an empty member sequence.
    pub fn new(
        id: GroupId,
        name: impl Into<String>,
        leader: impl Into<String>,
        capacity: Capacity,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            leader: leader.into(),
            capacity,
            members: Vec::new(),
        }
    }

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn leader(&self) -> &str {
        &self.leader
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Members in join order.
    pub fn members(&self) -> &[ParticipantId] {
        &self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Whether the group is at capacity.
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity.get() as usize
    }

    /// Append `participant` to the member sequence.
    ///
    /// Capacity and duplicate checks are evaluated together as a single gate
    /// before any mutation, so no partial state is ever observable. Returns
    /// `false` if the group is full or the participant is already a member.
    pub fn add_member(&mut self, participant: ParticipantId) -> bool {
        if self.is_full() || self.members.contains(&participant) {
            return false;
        }
        self.members.push(participant);
        true
    }

    /// Remove `participant` from the member sequence.
    ///
    /// Returns `false` if the participant is not currently a member.
    pub fn remove_member(&mut self, participant: &ParticipantId) -> bool {
        let Some(pos) = self.members.iter().position(|m| m == participant) else {
            return false;
        };
        self.members.remove(pos);
        true
    }
}

impl Entity for Group {
    type Id = GroupId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_group(capacity: u32) -> Group {
        Group::new(
            GroupId::from("CS101"),
            "Intro to CS",
            "Dr. Brown",
            Capacity::new(capacity).unwrap(),
        )
    }

    #[test]
    fn new_group_is_empty() {
        let group = test_group(2);
        assert_eq!(group.member_count(), 0);
        assert!(!group.is_full());
        assert_eq!(group.capacity().get(), 2);
    }

    #[test]
    fn add_member_appends_in_call_order() {
        let mut group = test_group(3);
        assert!(group.add_member(ParticipantId::from("S001")));
        assert!(group.add_member(ParticipantId::from("S002")));
        assert_eq!(
            group.members(),
            &[ParticipantId::from("S001"), ParticipantId::from("S002")]
        );
    }

    #[test]
    fn add_member_rejects_when_full() {
        let mut group = test_group(2);
        assert!(group.add_member(ParticipantId::from("S001")));
        assert!(group.add_member(ParticipantId::from("S002")));
        assert!(group.is_full());
        assert!(!group.add_member(ParticipantId::from("S003")));
        assert_eq!(group.member_count(), 2);
    }

    #[test]
    fn add_member_rejects_duplicates() {
        let mut group = test_group(5);
        assert!(group.add_member(ParticipantId::from("S001")));
        assert!(!group.add_member(ParticipantId::from("S001")));
        assert_eq!(group.member_count(), 1);
    }

    #[test]
    fn remove_member_succeeds_only_for_members() {
        let mut group = test_group(2);
        group.add_member(ParticipantId::from("S001"));
        assert!(group.remove_member(&ParticipantId::from("S001")));
        assert!(!group.remove_member(&ParticipantId::from("S001")));
        assert_eq!(group.member_count(), 0);
    }

    #[test]
    fn remove_member_reopens_a_full_group() {
        let mut group = test_group(1);
        group.add_member(ParticipantId::from("S001"));
        assert!(group.is_full());
        group.remove_member(&ParticipantId::from("S001"));
        assert!(!group.is_full());
        assert!(group.add_member(ParticipantId::from("S002")));
    }

    #[test]
    fn capacity_rejects_zero() {
        let err = Capacity::new(0).unwrap_err();
        match err {
            roster_core::DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn capacity_default_is_thirty() {
        assert_eq!(Capacity::default().get(), 30);
    }
}
