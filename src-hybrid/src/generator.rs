//! Formulaic extension of the fixed prefix
//!
//! Pattern `idx` (1-based over the whole catalog) beyond the fixed prefix is
//! built block by block:
//!
//! - function  = `base_functions[(idx + b) % len]`
//! - transform = `transforms[(idx + 2 * b) % len]`
//! - seed      = `1000 + 10 * idx + b` unless the transform is `none`
//!
//! The strides and the seed offset must stay exactly as they are: published
//! benchmark results are tied to the patterns they produce.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::N_BLOCKS;
use crate::block::Block;
use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::fixed::fixed_patterns;
use crate::functions::BaseFunction;
use crate::pattern::Pattern;
use crate::transform::{Transform, TransformKind};

/// Number of patterns in the default catalog (f1..f25)
pub const DEFAULT_TOTAL_PATTERNS: usize = 25;

const SEED_OFFSET: u64 = 1000;
const SEED_PATTERN_STRIDE: u64 = 10;

/// Seed of block `b` in generated pattern `idx` (1-based)
///
/// Injective over `(idx, b)` as long as `b < 10`.
pub fn generated_seed(idx: usize, b: usize) -> u64 {
    SEED_OFFSET + idx as u64 * SEED_PATTERN_STRIDE + b as u64
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Total number of patterns, fixed prefix included
    pub total_patterns: usize,
    /// Palette cycled through by `idx + b`
    pub base_functions: Vec<BaseFunction>,
    /// Palette cycled through by `idx + 2 * b`
    pub transforms: Vec<TransformKind>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            total_patterns: DEFAULT_TOTAL_PATTERNS,
            base_functions: BaseFunction::ALL.to_vec(),
            transforms: TransformKind::GENERATOR_ORDER.to_vec(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.base_functions.is_empty() {
            return Err(CatalogError::EmptyPalette("base function"));
        }
        if self.transforms.is_empty() {
            return Err(CatalogError::EmptyPalette("transform"));
        }
        Ok(())
    }

    /// Load and validate a JSON configuration file; missing fields take defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GeneratorConfig = serde_json::from_str(&text)?;
        config.validate()?;
        log::info!("Loaded generator config from {}", path.display());
        Ok(config)
    }
}

/// Builder for [`GeneratorConfig`]
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    cfg: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn total_patterns(mut self, v: usize) -> Self {
        self.cfg.total_patterns = v;
        self
    }
    pub fn base_functions(mut self, v: Vec<BaseFunction>) -> Self {
        self.cfg.base_functions = v;
        self
    }
    pub fn transforms(mut self, v: Vec<TransformKind>) -> Self {
        self.cfg.transforms = v;
        self
    }
    pub fn build(self) -> Result<GeneratorConfig, CatalogError> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

/// Builds catalogs from a validated configuration
#[derive(Debug, Clone)]
pub struct PatternGenerator {
    config: GeneratorConfig,
}

impl PatternGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Pattern at 1-based position `idx` produced by the formula
    pub fn generated_pattern(&self, idx: usize) -> Pattern {
        let funcs = &self.config.base_functions;
        let transforms = &self.config.transforms;
        Pattern::new(std::array::from_fn(|b| {
            let function = funcs[(idx + b) % funcs.len()];
            let kind = transforms[(idx + 2 * b) % transforms.len()];
            Block::new(function, Transform::seeded(kind, generated_seed(idx, b)))
        }))
    }

    /// Catalog of exactly `total_patterns` entries
    ///
    /// Totals up to the fixed prefix length truncate the prefix; larger totals
    /// append formula patterns after it.
    pub fn generate(&self) -> Catalog {
        let total = self.config.total_patterns;
        let mut patterns = fixed_patterns();
        let fixed = patterns.len();
        if total <= fixed {
            patterns.truncate(total);
            log::debug!("Catalog of {} patterns taken from the fixed prefix", total);
            return Catalog::new(patterns, total);
        }

        patterns.reserve(total - fixed);
        patterns.extend((fixed + 1..=total).map(|idx| self.generated_pattern(idx)));
        log::debug!(
            "Catalog of {} patterns: {} fixed, {} generated",
            total,
            fixed,
            total - fixed
        );
        Catalog::new(patterns, fixed)
    }
}

/// Build the catalog of `total` patterns with the default palettes
pub fn generate_catalog(total: usize) -> Catalog {
    let config = GeneratorConfig {
        total_patterns: total,
        ..GeneratorConfig::default()
    };
    PatternGenerator { config }.generate()
}

// Blocks per pattern must stay below the seed stride for seeds to be unique.
const _: () = assert!((N_BLOCKS as u64) < SEED_PATTERN_STRIDE);
