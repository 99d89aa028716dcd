//! Dense index types for the entities of an [`ExamProblem`](super::ExamProblem).
//!
//! Ids are handed out by the problem builder in insertion order and are
//! valid only for the problem that created them.

macro_rules! dense_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub usize);

        impl $name {
            /// Returns the position of this entity in its problem.
            #[inline]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

dense_id!(
    /// Index of a [`Course`](super::Course).
    CourseId
);
dense_id!(
    /// Index of an [`ExamSlot`](super::ExamSlot).
    SlotId
);
dense_id!(
    /// Index of a [`StudentGroup`](super::StudentGroup).
    GroupId
);
