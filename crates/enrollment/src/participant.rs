//! Participants and their half of the bilateral membership contract.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use roster_core::{DomainError, Entity, EntityKey};

use crate::group::{Group, GroupId};

/// Participant identifier (caller-assigned, e.g. a registration number).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub EntityKey);

impl ParticipantId {
    pub fn new(key: EntityKey) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl core::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self(EntityKey::from(value))
    }
}

impl From<String> for ParticipantId {
    fn from(value: String) -> Self {
        Self(EntityKey::from(value))
    }
}

impl FromStr for ParticipantId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKey::from_str(s).map(Self)
    }
}

/// Entity: a registered participant and the groups it has joined.
///
/// The group sequence is kept in join order and never contains duplicates.
/// `join`/`leave` are two-object transactions: they mutate the counterpart
/// [`Group`] as well as local state, which is why the
/// [`Registry`](crate::Registry) mediates them in normal use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    contact: String,
    groups: Vec<GroupId>,
}

impl Participant {
    /// Create a participant with an empty membership sequence.
    ///
    /// The contact address is opaque at this layer; no format validation.
    pub fn new(id: ParticipantId, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact: contact.into(),
            groups: Vec::new(),
        }
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Joined groups in join order.
    pub fn groups(&self) -> &[GroupId] {
        &self.groups
    }

    pub fn is_enrolled_in(&self, group_id: &GroupId) -> bool {
        self.groups.contains(group_id)
    }

    /// Join `group`, recording the membership on both sides.
    ///
    /// The group's gate is authoritative for capacity: the local record is
    /// appended only after the group has accepted this participant. Returns
    /// `false` — touching neither side — if the group is already recorded
    /// here, and `false` if the group rejects the add (full or duplicate on
    /// its side).
    pub fn join(&mut self, group: &mut Group) -> bool {
        if self.groups.contains(group.id()) {
            return false;
        }
        if !group.add_member(self.id.clone()) {
            return false;
        }
        self.groups.push(group.id().clone());
        true
    }

    /// Leave `group`, removing the membership from both sides.
    ///
    /// Returns `false` if the group was never joined. Once initiated, the
    /// local removal is unconditional and the group-side removal follows.
    pub fn leave(&mut self, group: &mut Group) -> bool {
        let Some(pos) = self.groups.iter().position(|g| g == group.id()) else {
            return false;
        };
        self.groups.remove(pos);
        group.remove_member(&self.id);
        true
    }

    /// Drop a group record without touching the group side. Used by the
    /// registry when cascading a group deletion; the group entity is already
    /// gone at that point.
    pub(crate) fn forget_group(&mut self, group_id: &GroupId) -> bool {
        let Some(pos) = self.groups.iter().position(|g| g == group_id) else {
            return false;
        };
        self.groups.remove(pos);
        true
    }
}

impl Entity for Participant {
    type Id = ParticipantId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
