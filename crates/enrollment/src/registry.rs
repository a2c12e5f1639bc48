//! The registry: aggregate root owning all participants and groups.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use roster_core::{DomainError, DomainResult};

use crate::group::{Capacity, Group, GroupId};
use crate::participant::{Participant, ParticipantId};

/// Registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Capacity applied when a group is registered without an explicit limit.
    #[serde(default)]
    pub default_capacity: Capacity,
}

/// Aggregate root: owns every [`Participant`] and [`Group`] and mediates all
/// membership changes between them.
///
/// Membership is stored as id sequences on both sides of the relationship;
/// the registry is the only place that mutates the two sides together, which
/// is what keeps them consistent. The central invariant, for every
/// participant P and group G:
///
/// ```text
/// G ∈ P.groups  ⟺  P ∈ G.members
/// ```
///
/// Every mutating operation is all-or-nothing: any failure (unknown id, full
/// group, duplicate membership) returns an error and leaves all state
/// untouched. All mutation goes through `&mut self`, so within one thread a
/// gate check and the mutation it guards cannot interleave with another
/// caller's. A concurrent deployment must wrap the registry in its own lock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    config: RegistryConfig,
    participants: IndexMap<ParticipantId, Participant>,
    groups: IndexMap<GroupId, Group>,
}

impl Registry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with an explicit configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a new participant under `id`.
    ///
    /// Fails with [`DomainError::Conflict`] if the id is already taken; no
    /// entity is created on failure.
    pub fn register_participant(
        &mut self,
        id: ParticipantId,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> DomainResult<()> {
        if self.participants.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "participant '{id}' is already registered"
            )));
        }
        tracing::debug!(participant = %id, "participant registered");
        self.participants
            .insert(id.clone(), Participant::new(id, name, contact));
        Ok(())
    }

    /// Register a new group under `id`.
    ///
    /// A `None` capacity falls back to the configured default. Fails with
    /// [`DomainError::Conflict`] if the id is already taken.
    pub fn register_group(
        &mut self,
        id: GroupId,
        name: impl Into<String>,
        leader: impl Into<String>,
        capacity: Option<Capacity>,
    ) -> DomainResult<()> {
        if self.groups.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "group '{id}' is already registered"
            )));
        }
        let capacity = capacity.unwrap_or(self.config.default_capacity);
        tracing::debug!(group = %id, %capacity, "group registered");
        self.groups
            .insert(id.clone(), Group::new(id, name, leader, capacity));
        Ok(())
    }

    /// Look up a participant; `None` for unknown ids, never an error.
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.get(id)
    }

    /// Look up a group; `None` for unknown ids, never an error.
    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups.get(id)
    }

    /// Enroll a participant in a group, recording the membership on both
    /// sides.
    ///
    /// Fails with [`DomainError::NotFound`] if either id is unknown,
    /// [`DomainError::InvariantViolation`] if the group is at capacity, and
    /// [`DomainError::Conflict`] if the participant is already enrolled. No
    /// failure path mutates anything.
    pub fn enroll(&mut self, participant_id: &ParticipantId, group_id: &GroupId) -> DomainResult<()> {
        let Some(participant) = self.participants.get_mut(participant_id) else {
            return Err(DomainError::not_found());
        };
        let Some(group) = self.groups.get_mut(group_id) else {
            return Err(DomainError::not_found());
        };

        // Short-circuit on capacity before touching the participant; the
        // group's own gate re-checks this during the join.
        if group.is_full() {
            return Err(DomainError::invariant(format!(
                "group '{group_id}' is at capacity ({})",
                group.capacity()
            )));
        }

        if !participant.join(group) {
            return Err(DomainError::conflict(format!(
                "participant '{participant_id}' is already enrolled in group '{group_id}'"
            )));
        }
        tracing::debug!(participant = %participant_id, group = %group_id, "enrolled");
        Ok(())
    }

    /// Withdraw a participant from a group, removing the membership from
    /// both sides.
    ///
    /// Fails with [`DomainError::NotFound`] if either id is unknown and
    /// [`DomainError::Conflict`] if the membership does not exist.
    pub fn withdraw(
        &mut self,
        participant_id: &ParticipantId,
        group_id: &GroupId,
    ) -> DomainResult<()> {
        let Some(participant) = self.participants.get_mut(participant_id) else {
            return Err(DomainError::not_found());
        };
        let Some(group) = self.groups.get_mut(group_id) else {
            return Err(DomainError::not_found());
        };

        if !participant.leave(group) {
            return Err(DomainError::conflict(format!(
                "participant '{participant_id}' is not enrolled in group '{group_id}'"
            )));
        }
        tracing::debug!(participant = %participant_id, group = %group_id, "withdrawn");
        Ok(())
    }

    /// Remove a participant, cascading it out of every group it joined.
    ///
    /// Cascade (rather than rejecting deletion while memberships exist) is
    /// the chosen policy: a removed participant leaves no trace in any
    /// group's member sequence.
    pub fn remove_participant(&mut self, id: &ParticipantId) -> DomainResult<()> {
        let Some(participant) = self.participants.shift_remove(id) else {
            return Err(DomainError::not_found());
        };
        for group_id in participant.groups() {
            if let Some(group) = self.groups.get_mut(group_id) {
                group.remove_member(id);
            }
        }
        tracing::debug!(participant = %id, "participant removed");
        Ok(())
    }

    /// Remove a group, cascading it out of every member's group sequence.
    pub fn remove_group(&mut self, id: &GroupId) -> DomainResult<()> {
        let Some(group) = self.groups.shift_remove(id) else {
            return Err(DomainError::not_found());
        };
        for member_id in group.members() {
            if let Some(participant) = self.participants.get_mut(member_id) {
                participant.forget_group(id);
            }
        }
        tracing::debug!(group = %id, "group removed");
        Ok(())
    }

    /// All participants in registration order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.values()
    }

    /// All groups in registration order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Members of `group_id` in join order; empty for unknown ids.
    pub fn participants_of(&self, group_id: &GroupId) -> Vec<&Participant> {
        let Some(group) = self.groups.get(group_id) else {
            return Vec::new();
        };
        group
            .members()
            .iter()
            .filter_map(|id| self.participants.get(id))
            .collect()
    }

    /// Groups joined by `participant_id` in join order; empty for unknown
    /// ids.
    pub fn groups_of(&self, participant_id: &ParticipantId) -> Vec<&Group> {
        let Some(participant) = self.participants.get(participant_id) else {
            return Vec::new();
        };
        participant
            .groups()
            .iter()
            .filter_map(|id| self.groups.get(id))
            .collect()
    }
}
