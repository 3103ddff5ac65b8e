//! Periodic boundary helpers.
//!
//! The box `[0, L) x [0, L)` is treated as wrapping: a disk near one edge
//! has neighbors near the opposite edge. Generation uses [`wrap`] to fold
//! coordinates back into the box; the viewer uses [`periodic_images`] to
//! tile the configuration into a 3x3 super-cell so disks straddling an edge
//! are drawn on both sides.

use glam::Vec2;

/// Folds a position into the box `[0, l)` per coordinate.
///
/// Uses the Euclidean remainder, so negative coordinates wrap to the far
/// side of the box.
#[inline]
pub fn wrap(p: Vec2, l: f32) -> Vec2 {
    Vec2::new(p.x.rem_euclid(l), p.y.rem_euclid(l))
}

/// Tiles positions into a 3x3 super-cell of periodic images, keeping only
/// images that can contribute to the padded viewing window.
///
/// Each position is shifted by every combination of `{-l, 0, l}` per axis,
/// and an image survives only if it lies inside `[-pad, l + pad]` on both
/// axes. With `pad = sigma / 2` this keeps exactly the disk centers whose
/// circles can intersect the visible box.
///
/// ### Parameters
/// - `positions` - Wrapped disk centers inside `[0, l)`.
/// - `l` - Box edge length.
/// - `pad` - Margin around the box in which images are kept.
///
/// ### Returns
/// The surviving images, at most `9 * positions.len()` of them.
pub fn periodic_images(positions: &[Vec2], l: f32, pad: f32) -> Vec<Vec2> {
    let shifts = [-l, 0.0, l];
    let mut images = Vec::with_capacity(positions.len() * 9);
    for &p in positions {
        for dx in shifts {
            for dy in shifts {
                let q = p + Vec2::new(dx, dy);
                if q.x >= -pad && q.x <= l + pad && q.y >= -pad && q.y <= l + pad {
                    images.push(q);
                }
            }
        }
    }
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn wrap_is_identity_inside_the_box() {
        let p = Vec2::new(0.25, 1.75);
        assert_eq!(wrap(p, 2.0), p);
        // The lower edge belongs to the box, the upper edge does not.
        assert_eq!(wrap(Vec2::new(0.0, 0.0), 2.0), Vec2::new(0.0, 0.0));
        assert_eq!(wrap(Vec2::new(2.0, 2.0), 2.0), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn wrap_folds_out_of_range_coordinates() {
        let q = wrap(Vec2::new(-0.5, 2.25), 2.0);
        assert!((q.x - 1.5).abs() < 1e-6);
        assert!((q.y - 0.25).abs() < 1e-6);

        // Result is always in [0, l).
        for p in [Vec2::new(-7.3, 11.1), Vec2::new(1.999, -0.001)] {
            let q = wrap(p, 2.0);
            assert!(q.x >= 0.0 && q.x < 2.0);
            assert!(q.y >= 0.0 && q.y < 2.0);
        }
    }

    #[test]
    fn periodic_images_keeps_interior_point_once() {
        // A point in the middle of the box has no image near the window.
        let images = periodic_images(&[Vec2::new(1.0, 1.0)], 2.0, 0.2);
        assert_eq!(images, vec![Vec2::new(1.0, 1.0)]);
    }

    #[test]
    fn periodic_images_duplicates_corner_point() {
        // A corner disk contributes one image per overlapping cell:
        // shifts of {0, +l} survive on each axis, {-l} falls outside.
        let images = periodic_images(&[Vec2::new(0.0, 0.0)], 2.0, 0.5);
        assert_eq!(images.len(), 4);
        for q in &images {
            assert!(q.x == 0.0 || q.x == 2.0);
            assert!(q.y == 0.0 || q.y == 2.0);
        }
    }

    #[test]
    fn periodic_images_stay_inside_padded_window() {
        let positions = [
            Vec2::new(0.05, 1.9),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.99, 1.99),
        ];
        let (l, pad) = (2.0, 0.15);
        let images = periodic_images(&positions, l, pad);
        assert!(images.len() >= positions.len());
        assert!(images.len() <= positions.len() * 9);
        for q in &images {
            assert!(q.x >= -pad && q.x <= l + pad);
            assert!(q.y >= -pad && q.y <= l + pad);
        }
    }
}
