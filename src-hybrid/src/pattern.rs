//! Composite 100D objective made of `N_BLOCKS` consecutive blocks

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::error::CatalogError;
use crate::transform::TransformKind;
use crate::{BLOCK_SIZE, N_BLOCKS};

/// Ordered blocks of one hybrid objective
///
/// Block `b` is evaluated on coordinates `b * BLOCK_SIZE .. (b + 1) * BLOCK_SIZE`
/// of the full input and the weighted block values are summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Block>", into = "Vec<Block>")]
pub struct Pattern {
    blocks: [Block; N_BLOCKS],
}

impl Pattern {
    pub fn new(blocks: [Block; N_BLOCKS]) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block; N_BLOCKS] {
        &self.blocks
    }

    pub fn block(&self, b: usize) -> Option<&Block> {
        self.blocks.get(b)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Coordinate slice of the 100D input fed to block `b`
    ///
    /// # Panics
    ///
    /// Panics if `b >= N_BLOCKS`.
    pub fn block_range(b: usize) -> Range<usize> {
        assert!(b < N_BLOCKS, "block index {} out of range", b);
        b * BLOCK_SIZE..(b + 1) * BLOCK_SIZE
    }

    /// Whether any block needs a rotation matrix
    pub fn uses_rotation(&self) -> bool {
        self.blocks
            .iter()
            .any(|block| block.transform_kind() == TransformKind::RotShift)
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Block>> for Pattern {
    type Error = CatalogError;
    fn try_from(blocks: Vec<Block>) -> Result<Self, Self::Error> {
        let n = blocks.len();
        let blocks: [Block; N_BLOCKS] = blocks
            .try_into()
            .map_err(|_| CatalogError::BlockCount(n))?;
        Ok(Pattern { blocks })
    }
}

impl From<Pattern> for Vec<Block> {
    fn from(p: Pattern) -> Self {
        p.blocks.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TOTAL_DIM;
    use crate::functions::BaseFunction;

    #[test]
    fn test_block_ranges_tile_full_input() {
        let mut next = 0;
        for b in 0..N_BLOCKS {
            let range = Pattern::block_range(b);
            assert_eq!(range.start, next);
            assert_eq!(range.len(), BLOCK_SIZE);
            next = range.end;
        }
        assert_eq!(next, TOTAL_DIM);
    }

    #[test]
    #[should_panic]
    fn test_block_range_out_of_bounds() {
        let _ = Pattern::block_range(N_BLOCKS);
    }

    #[test]
    fn test_wrong_block_count_is_rejected() {
        let blocks = vec![Block::plain(BaseFunction::Sphere); 3];
        assert!(matches!(
            Pattern::try_from(blocks),
            Err(CatalogError::BlockCount(3))
        ));
    }

    #[test]
    fn test_uses_rotation() {
        let plain = Pattern::new(std::array::from_fn(|_| Block::plain(BaseFunction::Rosenbrock)));
        assert!(!plain.uses_rotation());

        let mut blocks = plain.blocks().clone();
        blocks[2] = Block::rot_shifted(BaseFunction::Ackley, 9);
        assert!(Pattern::new(blocks).uses_rotation());
    }
}
