//! Arena indices for agents and regions.
//!
//! Both populations are stored as dense `Vec`s and addressed by position.
//! The occupancy grid keeps `AgentId`s, never references, so the world and
//! the agent store can be borrowed independently.

use std::fmt;

/// Declares an index newtype that prints as `<label>#<n>`.
macro_rules! arena_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Marks an empty slot; never handed out to a live entity.
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self.0 != <$inner>::MAX
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

arena_id! {
    /// Position of an agent in the struct-of-arrays store.  Ids are dense
    /// and assigned once at population time.
    pub struct AgentId(u32) => "agent";
}

arena_id! {
    /// Position of a region in the partition, column by column from the
    /// top left.
    pub struct RegionId(u32) => "region";
}
