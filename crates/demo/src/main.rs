//! Walkthrough binary: seeds a registry and runs the canonical enrollment
//! scenario, including the failure paths (full group, duplicate enrollment).

use anyhow::Result;
use roster_enrollment::{Capacity, GroupId, ParticipantId, Registry};

fn main() -> Result<()> {
    roster_observability::init();

    let mut registry = Registry::new();

    registry.register_participant(ParticipantId::from("S001"), "Alice Johnson", "alice@example.com")?;
    registry.register_participant(ParticipantId::from("S002"), "Bob Smith", "bob@example.com")?;
    registry.register_participant(ParticipantId::from("S003"), "Carol Davis", "carol@example.com")?;

    // One deliberately tiny group to exercise the capacity gate.
    registry.register_group(
        GroupId::from("CS101"),
        "Introduction to Computer Science",
        "Dr. Brown",
        Some(Capacity::new(2)?),
    )?;
    registry.register_group(GroupId::from("CS201"), "Data Structures", "Dr. Green", None)?;
    registry.register_group(GroupId::from("MATH101"), "Calculus I", "Dr. White", None)?;

    let enrollments = [
        ("S001", "CS101"),
        ("S001", "MATH101"),
        ("S002", "CS101"),
        ("S002", "CS201"),
        ("S003", "CS101"), // third seat in a two-seat group
        ("S003", "CS201"),
    ];

    for (participant, group) in enrollments {
        match registry.enroll(&ParticipantId::from(participant), &GroupId::from(group)) {
            Ok(()) => tracing::info!(participant, group, "enrolled"),
            Err(reason) => tracing::warn!(participant, group, %reason, "enrollment rejected"),
        }
    }

    for group in registry.groups() {
        let roster: Vec<&str> = registry
            .participants_of(group.id())
            .iter()
            .map(|p| p.name())
            .collect();
        tracing::info!(
            group = %group.id(),
            enrolled = group.member_count(),
            capacity = %group.capacity(),
            ?roster,
            "group roster"
        );
    }

    registry.withdraw(&ParticipantId::from("S001"), &GroupId::from("MATH101"))?;
    let remaining: Vec<&str> = registry
        .groups_of(&ParticipantId::from("S001"))
        .iter()
        .map(|g| g.name())
        .collect();
    tracing::info!(participant = "S001", ?remaining, "after withdrawal");

    Ok(())
}
