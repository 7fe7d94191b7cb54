//! Strongly typed, zero-cost identifier wrappers.
//!
//! The authoring format expresses every cross-reference (behavior → trigger,
//! action → node, …) as an index into a flat array, so all IDs are thin `u32`
//! wrappers.  They are `Copy + Ord + Hash` for use as map keys without
//! ceremony.  The inner integer is `pub` to allow direct indexing via
//! `id.0 as usize`, but callers should prefer the `.index()` helpers.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a trigger in the scene's flat trigger array.
    pub struct TriggerId(u32);
}

typed_id! {
    /// Index of an action in the scene's flat action array.
    pub struct ActionId(u32);
}

typed_id! {
    /// Index of a behavior in the scene's flat behavior array.
    pub struct BehaviorId(u32);
}

typed_id! {
    /// Index of a node in the scene graph's node array.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of an animation in the scene's animation array.
    pub struct AnimationId(u32);
}

typed_id! {
    /// Index of a media item in the scene's media array.
    pub struct MediaId(u32);
}

typed_id! {
    /// Index of a material in the scene's material array.
    pub struct MaterialId(u32);
}

typed_id! {
    /// Index of a world-tracking anchor.  The engine only ever asks whether
    /// an anchor is resolved; pose math is the host's problem.
    pub struct AnchorId(u32);
}
