//! One 25D sub-objective of a hybrid pattern

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::functions::BaseFunction;
use crate::transform::{Transform, TransformKind};

/// Default half-width of the seeded shift vector
pub const DEFAULT_SHIFT_RANGE: f64 = 5.0;
/// Default weight of a block in the summed objective
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A base function, its transform, and the two evaluator-side attributes
///
/// `shift_range` and `weight` are carried for the evaluator; nothing in this
/// crate computes with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BlockRecord", into = "BlockRecord")]
pub struct Block {
    pub function: BaseFunction,
    pub transform: Transform,
    pub shift_range: f64,
    pub weight: f64,
}

impl Block {
    pub fn new(function: BaseFunction, transform: Transform) -> Self {
        Self {
            function,
            transform,
            shift_range: DEFAULT_SHIFT_RANGE,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Block evaluated on raw coordinates
    pub fn plain(function: BaseFunction) -> Self {
        Self::new(function, Transform::Identity)
    }

    pub fn shifted(function: BaseFunction, seed: u64) -> Self {
        Self::new(function, Transform::Shift { seed })
    }

    pub fn rot_shifted(function: BaseFunction, seed: u64) -> Self {
        Self::new(function, Transform::RotShift { seed })
    }

    pub fn with_shift_range(mut self, v: f64) -> Self {
        self.shift_range = v;
        self
    }

    pub fn with_weight(mut self, v: f64) -> Self {
        self.weight = v;
        self
    }

    pub fn function_name(&self) -> &'static str {
        self.function.as_str()
    }

    pub fn transform_kind(&self) -> TransformKind {
        self.transform.kind()
    }

    pub fn seed(&self) -> Option<u64> {
        self.transform.seed()
    }
}

fn default_shift_range() -> f64 {
    DEFAULT_SHIFT_RANGE
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// Flat on-disk form of a block, as consumed by the evaluator
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BlockRecord {
    func: BaseFunction,
    transform: TransformKind,
    seed: Option<u64>,
    #[serde(default = "default_shift_range")]
    shift_range: f64,
    #[serde(default = "default_weight")]
    weight: f64,
}

impl TryFrom<BlockRecord> for Block {
    type Error = CatalogError;
    fn try_from(r: BlockRecord) -> Result<Self, Self::Error> {
        Ok(Block {
            function: r.func,
            transform: Transform::new(r.transform, r.seed)?,
            shift_range: r.shift_range,
            weight: r.weight,
        })
    }
}

impl From<Block> for BlockRecord {
    fn from(b: Block) -> Self {
        BlockRecord {
            func: b.function,
            transform: b.transform.kind(),
            seed: b.transform.seed(),
            shift_range: b.shift_range,
            weight: b.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_defaults() {
        let block = Block::shifted(BaseFunction::Sphere, 303);
        assert_eq!(block.function_name(), "sphere");
        assert_eq!(block.transform_kind(), TransformKind::Shift);
        assert_eq!(block.seed(), Some(303));
        assert_eq!(block.shift_range, 5.0);
        assert_eq!(block.weight, 1.0);
    }

    #[test]
    fn test_block_serializes_flat_record() {
        let block = Block::rot_shifted(BaseFunction::Rosenbrock, 202).with_weight(0.5);
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "func": "rosenbrock",
                "transform": "rot_shift",
                "seed": 202,
                "shift_range": 5.0,
                "weight": 0.5
            })
        );

        let plain = serde_json::to_value(Block::plain(BaseFunction::Ackley)).unwrap();
        assert_eq!(plain["seed"], serde_json::Value::Null);
    }

    #[test]
    fn test_block_record_defaults_optional_attributes() {
        let block: Block =
            serde_json::from_str(r#"{"func": "griewank", "transform": "shift", "seed": 11}"#)
                .unwrap();
        assert_eq!(block, Block::shifted(BaseFunction::Griewank, 11));
    }

    #[test]
    fn test_block_record_rejects_seed_on_identity() {
        let err = serde_json::from_str::<Block>(
            r#"{"func": "sphere", "transform": "none", "seed": 3}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("does not match seed"), "{}", err);

        let err = serde_json::from_str::<Block>(r#"{"func": "sphere", "transform": "shift"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("does not match seed"), "{}", err);
    }
}
