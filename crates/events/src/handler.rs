use plantshop_core::Aggregate;

/// Execute an aggregate command deterministically (no IO, no async).
///
/// 1. **Decide**: `aggregate.handle(command)` (pure, no mutation)
/// 2. **Evolve**: apply each returned event in order
///
/// Returns the applied events; an empty vector means the command was a no-op
/// and the aggregate is unchanged.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: Aggregate,
{
    let events = A::handle(aggregate, command)?;
    for ev in &events {
        A::apply(aggregate, ev);
    }
    Ok(events)
}
