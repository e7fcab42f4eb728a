//! Hybrid benchmark pattern catalog
//!
//! A hybrid objective splits a 100D input into `N_BLOCKS` consecutive 25D
//! blocks. Every block runs one base function (sphere, rastrigin, ...) on its
//! slice, optionally after a seeded shift or rotation+shift, and the block
//! values are summed.
//!
//! This crate only describes those objectives. The catalog starts with seven
//! hand-authored patterns (f1..f7) and is extended deterministically up to the
//! requested size (f8, f9, ...). Evaluating the functions and applying the
//! transforms is left to the consumer.
//!
//! # Example
//!
//! ```rust
//! use hybrid_patterns::*;
//!
//! let catalog = generate_catalog(25);
//! assert_eq!(catalog.len(), 25);
//!
//! let f8 = catalog.by_name("f8").unwrap();
//! assert_eq!(f8.blocks()[0].function_name(), "rastrigin");
//! assert_eq!(f8.blocks()[0].seed(), None);
//!
//! // Shared instance for the default 25 patterns
//! assert_eq!(default_catalog(), &catalog);
//! ```

pub mod block;
pub mod catalog;
pub mod error;
pub mod fixed;
pub mod functions;
pub mod generator;
pub mod pattern;
pub mod transform;

pub use block::{Block, DEFAULT_SHIFT_RANGE, DEFAULT_WEIGHT};
pub use catalog::{Catalog, default_catalog};
pub use error::CatalogError;
pub use fixed::{FIXED_PATTERN_COUNT, fixed_patterns};
pub use functions::BaseFunction;
pub use generator::{
    DEFAULT_TOTAL_PATTERNS, GeneratorConfig, GeneratorConfigBuilder, PatternGenerator,
    generate_catalog, generated_seed,
};
pub use pattern::Pattern;
pub use transform::{Transform, TransformKind};

/// Dimensions per block
pub const BLOCK_SIZE: usize = 25;
/// Blocks per pattern
pub const N_BLOCKS: usize = 4;
/// Dimensions of a full hybrid objective
pub const TOTAL_DIM: usize = BLOCK_SIZE * N_BLOCKS;
