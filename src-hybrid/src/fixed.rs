//! Hand-authored patterns f1..f7
//!
//! Each entry restates one of the legacy single-function benchmarks as a
//! 4-block hybrid. These are edited by hand only; the generator never derives
//! or modifies them.

use crate::block::Block;
use crate::functions::BaseFunction::{Ackley, Ellipsoid, Rastrigin, Rosenbrock, Sphere};
use crate::pattern::Pattern;

/// Number of hand-authored patterns at the head of every catalog
pub const FIXED_PATTERN_COUNT: usize = 7;

/// The fixed prefix of the catalog, index 0 being f1
pub fn fixed_patterns() -> Vec<Pattern> {
    vec![
        // f1: Sphere + Rastrigin + Ellipsoid + (Rot+Shift)Rosenbrock
        Pattern::new([
            Block::shifted(Sphere, 303),
            Block::shifted(Rastrigin, 101),
            Block::shifted(Ellipsoid, 202),
            Block::rot_shifted(Rosenbrock, 202),
        ]),
        // f2: Sphere + Rastrigin + 2 x (Rot+Shift)Rosenbrock
        Pattern::new([
            Block::shifted(Sphere, 303),
            Block::shifted(Rastrigin, 101),
            Block::rot_shifted(Rosenbrock, 202),
            Block::rot_shifted(Rosenbrock, 202),
        ]),
        // f3: Sphere + 3 x (Rot+Shift)Rosenbrock
        Pattern::new([
            Block::shifted(Sphere, 303),
            Block::rot_shifted(Rosenbrock, 101),
            Block::rot_shifted(Rosenbrock, 202),
            Block::rot_shifted(Rosenbrock, 202),
        ]),
        // f4: 4 x (Rot+Shift)Rosenbrock
        Pattern::new([
            Block::rot_shifted(Rosenbrock, 303),
            Block::rot_shifted(Rosenbrock, 101),
            Block::rot_shifted(Rosenbrock, 202),
            Block::rot_shifted(Rosenbrock, 202),
        ]),
        // f5: Sphere + Rastrigin + Ackley + (Rot+Shift)Rosenbrock
        Pattern::new([
            Block::shifted(Sphere, 303),
            Block::shifted(Rastrigin, 101),
            Block::shifted(Ackley, 404),
            Block::rot_shifted(Rosenbrock, 202),
        ]),
        // f6: 4 x Rosenbrock, untransformed
        Pattern::new([
            Block::plain(Rosenbrock),
            Block::plain(Rosenbrock),
            Block::plain(Rosenbrock),
            Block::plain(Rosenbrock),
        ]),
        // f7: everything rotated and shifted
        Pattern::new([
            Block::rot_shifted(Sphere, 701),
            Block::rot_shifted(Rastrigin, 702),
            Block::rot_shifted(Ackley, 703),
            Block::rot_shifted(Rosenbrock, 704),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::TransformKind;

    #[test]
    fn test_fixed_count() {
        assert_eq!(fixed_patterns().len(), FIXED_PATTERN_COUNT);
    }

    #[test]
    fn test_f1_blocks() {
        let f1 = &fixed_patterns()[0];
        let summary: Vec<(&str, TransformKind, Option<u64>)> = f1
            .iter()
            .map(|b| (b.function_name(), b.transform_kind(), b.seed()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("sphere", TransformKind::Shift, Some(303)),
                ("rastrigin", TransformKind::Shift, Some(101)),
                ("ellipsoid", TransformKind::Shift, Some(202)),
                ("rosenbrock", TransformKind::RotShift, Some(202)),
            ]
        );
    }

    #[test]
    fn test_f6_has_no_seeds() {
        let f6 = &fixed_patterns()[5];
        assert!(f6.iter().all(|b| b.seed().is_none()));
        assert!(f6.iter().all(|b| b.function_name() == "rosenbrock"));
    }
}
