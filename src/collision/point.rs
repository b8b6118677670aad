//! Where on a rectangle's boundary a contact happened, and the normals that go with it.

use serde::{Deserialize, Serialize};

use crate::math::vec2::Vec2;

/// The place on a rectangle's boundary where a collision occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CollisionPoint {
    #[default]
    None,
    Top,
    Left,
    Bottom,
    Right,
    TopLeftCorner,
    TopRightCorner,
    BottomLeftCorner,
    BottomRightCorner,
}

/// Coarse side grouping of a [`CollisionPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CollisionSide {
    #[default]
    None,
    Left,
    Top,
    Right,
    Bottom,
}

impl CollisionPoint {
    pub const ALL: [CollisionPoint; 9] = [
        CollisionPoint::None,
        CollisionPoint::Top,
        CollisionPoint::Left,
        CollisionPoint::Bottom,
        CollisionPoint::Right,
        CollisionPoint::TopLeftCorner,
        CollisionPoint::TopRightCorner,
        CollisionPoint::BottomLeftCorner,
        CollisionPoint::BottomRightCorner,
    ];

    /// Combines a horizontal and a vertical side into the corner between them.
    ///
    /// Order does not matter. Anything other than one of Left/Right together with
    /// one of Top/Bottom yields `CollisionPoint::None`.
    pub fn combine(self, other: CollisionPoint) -> CollisionPoint {
        use CollisionPoint::*;
        match (self, other) {
            (Left, Top) | (Top, Left) => TopLeftCorner,
            (Right, Top) | (Top, Right) => TopRightCorner,
            (Left, Bottom) | (Bottom, Left) => BottomLeftCorner,
            (Right, Bottom) | (Bottom, Right) => BottomRightCorner,
            _ => None,
        }
    }

    /// Returns the unit normal for this point.
    ///
    /// With `inside == false` the normal points out of the rectangle (Top is `(0, -1)`).
    /// With `inside == true` it points back into it, which is what a body contained
    /// by the rectangle wants when it hits a wall. Corners follow the same rule, so an
    /// inside corner normal is the normalized sum of its two inside side normals.
    /// `None` gives the zero vector.
    pub fn normal(self, inside: bool) -> Vec2 {
        // Outward sign; flipped for the inside convention.
        let s = if inside { -1.0 } else { 1.0 };
        match self {
            CollisionPoint::None => Vec2::ZERO,
            CollisionPoint::Top => Vec2::new(0.0, -s),
            CollisionPoint::Left => Vec2::new(-s, 0.0),
            CollisionPoint::Bottom => Vec2::new(0.0, s),
            CollisionPoint::Right => Vec2::new(s, 0.0),
            CollisionPoint::TopLeftCorner => corner_normal(Vec2::new(-s, -s)),
            CollisionPoint::TopRightCorner => corner_normal(Vec2::new(s, -s)),
            CollisionPoint::BottomLeftCorner => corner_normal(Vec2::new(-s, s)),
            CollisionPoint::BottomRightCorner => corner_normal(Vec2::new(s, s)),
        }
    }

    /// Groups the point with the side it belongs to. Corners go to their horizontal side.
    pub fn side(self) -> CollisionSide {
        match self {
            CollisionPoint::None => CollisionSide::None,
            CollisionPoint::Top => CollisionSide::Top,
            CollisionPoint::Bottom => CollisionSide::Bottom,
            CollisionPoint::Left
            | CollisionPoint::TopLeftCorner
            | CollisionPoint::BottomLeftCorner => CollisionSide::Left,
            CollisionPoint::Right
            | CollisionPoint::TopRightCorner
            | CollisionPoint::BottomRightCorner => CollisionSide::Right,
        }
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            CollisionPoint::TopLeftCorner
                | CollisionPoint::TopRightCorner
                | CollisionPoint::BottomLeftCorner
                | CollisionPoint::BottomRightCorner
        )
    }
}

/// Free-function form of [`CollisionPoint::combine`].
pub fn combine(source: CollisionPoint, target: CollisionPoint) -> CollisionPoint {
    source.combine(target)
}

/// Normalizes a diagonal into a corner normal.
pub fn corner_normal(delta: Vec2) -> Vec2 {
    delta.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;
    const EPSILON: f64 = 1e-10;

    const SIDES: [CollisionPoint; 4] = [
        CollisionPoint::Top,
        CollisionPoint::Left,
        CollisionPoint::Bottom,
        CollisionPoint::Right,
    ];

    #[test]
    fn test_combine_adjacent_sides() {
        use CollisionPoint::*;
        assert_eq!(combine(Left, Top), TopLeftCorner);
        assert_eq!(combine(Right, Top), TopRightCorner);
        assert_eq!(combine(Left, Bottom), BottomLeftCorner);
        assert_eq!(combine(Right, Bottom), BottomRightCorner);
    }

    #[test]
    fn test_combine_is_commutative() {
        for p in CollisionPoint::ALL {
            for q in CollisionPoint::ALL {
                assert_eq!(p.combine(q), q.combine(p), "combine({:?}, {:?})", p, q);
            }
        }
    }

    #[test]
    fn test_combine_with_self_is_none() {
        for p in CollisionPoint::ALL {
            assert_eq!(p.combine(p), CollisionPoint::None, "combine({:?}, itself)", p);
        }
    }

    #[test]
    fn test_combine_only_four_pairs_yield_corners() {
        let mut corners = 0;
        for p in CollisionPoint::ALL {
            for q in CollisionPoint::ALL {
                let c = p.combine(q);
                if c != CollisionPoint::None {
                    assert!(c.is_corner());
                    assert!(SIDES.contains(&p) && SIDES.contains(&q));
                    corners += 1;
                }
            }
        }
        // Four unordered pairs, counted in both orders
        assert_eq!(corners, 8);
    }

    #[test]
    fn test_combine_opposite_sides_is_none() {
        use CollisionPoint::*;
        assert_eq!(combine(Left, Right), None);
        assert_eq!(combine(Top, Bottom), None);
        assert_eq!(combine(TopLeftCorner, Bottom), None);
        assert_eq!(combine(None, Top), None);
    }

    #[test]
    fn test_side_normals() {
        use CollisionPoint::*;
        assert_eq!(Top.normal(false), Vec2::new(0.0, -1.0));
        assert_eq!(Top.normal(true), Vec2::new(0.0, 1.0));
        assert_eq!(Left.normal(false), Vec2::new(-1.0, 0.0));
        assert_eq!(Left.normal(true), Vec2::new(1.0, 0.0));
        assert_eq!(Bottom.normal(false), Vec2::new(0.0, 1.0));
        assert_eq!(Bottom.normal(true), Vec2::new(0.0, -1.0));
        assert_eq!(Right.normal(false), Vec2::new(1.0, 0.0));
        assert_eq!(Right.normal(true), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_corner_normals() {
        let n = CollisionPoint::TopLeftCorner.normal(true);
        assert!((n.x - FRAC_1_SQRT_2).abs() < EPSILON);
        assert!((n.y - FRAC_1_SQRT_2).abs() < EPSILON);

        let n = CollisionPoint::TopLeftCorner.normal(false);
        assert!((n.x + FRAC_1_SQRT_2).abs() < EPSILON);
        assert!((n.y + FRAC_1_SQRT_2).abs() < EPSILON);

        let n = CollisionPoint::BottomRightCorner.normal(true);
        assert!((n.x + FRAC_1_SQRT_2).abs() < EPSILON);
        assert!((n.y + FRAC_1_SQRT_2).abs() < EPSILON);

        let n = CollisionPoint::TopRightCorner.normal(true);
        assert!((n.x + FRAC_1_SQRT_2).abs() < EPSILON);
        assert!((n.y - FRAC_1_SQRT_2).abs() < EPSILON);

        let n = CollisionPoint::BottomLeftCorner.normal(false);
        assert!((n.x + FRAC_1_SQRT_2).abs() < EPSILON);
        assert!((n.y - FRAC_1_SQRT_2).abs() < EPSILON);
    }

    #[test]
    fn test_corner_normals_point_into_region_when_inside() {
        for corner in CollisionPoint::ALL.into_iter().filter(|p| p.is_corner()) {
            let (h, v) = corner_sides(corner);
            assert_eq!(combine(h, v), corner);

            let n = corner.normal(true);
            let sum = (h.normal(true) + v.normal(true)).normalize();
            assert!((n.x - sum.x).abs() < EPSILON, "{corner:?}");
            assert!((n.y - sum.y).abs() < EPSILON, "{corner:?}");
            assert!(n.dot(h.normal(true)) > 0.0);
            assert!(n.dot(v.normal(true)) > 0.0);
        }
    }

    fn corner_sides(corner: CollisionPoint) -> (CollisionPoint, CollisionPoint) {
        match corner {
            CollisionPoint::TopLeftCorner => (CollisionPoint::Left, CollisionPoint::Top),
            CollisionPoint::TopRightCorner => (CollisionPoint::Right, CollisionPoint::Top),
            CollisionPoint::BottomLeftCorner => (CollisionPoint::Left, CollisionPoint::Bottom),
            CollisionPoint::BottomRightCorner => (CollisionPoint::Right, CollisionPoint::Bottom),
            other => (other, CollisionPoint::None),
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        for p in CollisionPoint::ALL {
            for inside in [false, true] {
                let n = p.normal(inside);
                if p == CollisionPoint::None {
                    assert_eq!(n, Vec2::ZERO);
                } else {
                    assert!((n.magnitude() - 1.0).abs() < EPSILON, "{:?} inside={}", p, inside);
                }
            }
        }
    }

    #[test]
    fn test_inside_normal_is_negated_outside_normal() {
        for p in CollisionPoint::ALL {
            let outward = p.normal(false);
            let inward = p.normal(true);
            assert!((outward + inward).magnitude() < EPSILON, "{:?}", p);
        }
    }

    #[test]
    fn test_side_grouping() {
        use CollisionPoint::*;
        assert_eq!(TopLeftCorner.side(), CollisionSide::Left);
        assert_eq!(BottomLeftCorner.side(), CollisionSide::Left);
        assert_eq!(Left.side(), CollisionSide::Left);
        assert_eq!(TopRightCorner.side(), CollisionSide::Right);
        assert_eq!(BottomRightCorner.side(), CollisionSide::Right);
        assert_eq!(Right.side(), CollisionSide::Right);
        assert_eq!(Top.side(), CollisionSide::Top);
        assert_eq!(Bottom.side(), CollisionSide::Bottom);
        assert_eq!(None.side(), CollisionSide::None);
    }

    #[test]
    fn test_corner_normal_of_zero_is_zero() {
        assert_eq!(corner_normal(Vec2::ZERO), Vec2::ZERO);
    }
}
