//! Coordinate transforms applied to a block before evaluation
//!
//! The evaluator derives the shift vector and, for [`TransformKind::RotShift`],
//! the rotation matrix from the block seed. A seed exists exactly when the
//! transform is not the identity; [`Transform`] encodes that in its variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Kind of coordinate transform, without its seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    /// Coordinates are used as-is
    None,
    /// Coordinates are shifted by a seeded offset vector
    Shift,
    /// Coordinates are rotated then shifted
    RotShift,
}

impl TransformKind {
    pub const ALL: [TransformKind; 3] = [
        TransformKind::None,
        TransformKind::Shift,
        TransformKind::RotShift,
    ];

    /// Palette order used by the pattern generator
    pub const GENERATOR_ORDER: [TransformKind; 3] = [
        TransformKind::Shift,
        TransformKind::RotShift,
        TransformKind::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransformKind::None => "none",
            TransformKind::Shift => "shift",
            TransformKind::RotShift => "rot_shift",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransformKind {
    type Err = CatalogError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_lowercase();
        match t.as_str() {
            "none" => Ok(TransformKind::None),
            "shift" => Ok(TransformKind::Shift),
            "rot_shift" => Ok(TransformKind::RotShift),
            _ => Err(CatalogError::UnknownTransform(s.to_string())),
        }
    }
}

/// A transform together with the seed it is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Identity,
    Shift { seed: u64 },
    RotShift { seed: u64 },
}

impl Transform {
    /// Pair a kind with a seed.
    ///
    /// The seed must be present for `Shift`/`RotShift` and absent for `None`.
    pub fn new(kind: TransformKind, seed: Option<u64>) -> Result<Self, CatalogError> {
        match (kind, seed) {
            (TransformKind::None, None) => Ok(Transform::Identity),
            (TransformKind::Shift, Some(seed)) => Ok(Transform::Shift { seed }),
            (TransformKind::RotShift, Some(seed)) => Ok(Transform::RotShift { seed }),
            (transform, seed) => Err(CatalogError::SeedMismatch { transform, seed }),
        }
    }

    /// Build the transform for `kind`, attaching `seed` only when it is needed
    pub(crate) fn seeded(kind: TransformKind, seed: u64) -> Self {
        match kind {
            TransformKind::None => Transform::Identity,
            TransformKind::Shift => Transform::Shift { seed },
            TransformKind::RotShift => Transform::RotShift { seed },
        }
    }

    pub fn kind(&self) -> TransformKind {
        match self {
            Transform::Identity => TransformKind::None,
            Transform::Shift { .. } => TransformKind::Shift,
            Transform::RotShift { .. } => TransformKind::RotShift,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        match *self {
            Transform::Identity => None,
            Transform::Shift { seed } | Transform::RotShift { seed } => Some(seed),
        }
    }
}
