//! Entities: records compared by identity rather than by value.

/// Anything addressed by a stable identifier (catalog products, cart entries).
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> Self::Id;
}
