//! Enrollment domain module (participants, capacity-bounded groups, and the
//! registry that links them).
//!
//! This crate contains the business rules for group membership — capacity
//! enforcement, duplicate rejection, and bidirectional link consistency —
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod group;
pub mod participant;
pub mod registry;

pub use group::{Capacity, Group, GroupId};
pub use participant::{Participant, ParticipantId};
pub use registry::{Registry, RegistryConfig};
