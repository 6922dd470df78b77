pub use {
    crate::vector::traits::{Length, Snapshot},
    crate::vector::{Cursor, OutOfBounds, Vector},
    crate::BincodeConfiguration,
};

#[cfg(feature = "serde")]
pub use crate::vector::traits::Bincode;
