//! Box sizing for a target 2-D packing fraction.
//!
//! For `n` disks of diameter `sigma` at packing fraction `eta`, the box is a
//! square whose area makes the disk area equal the requested fraction:
//! `L = sqrt(n * pi * sigma^2 / (4 * eta))`.

use crate::error::LatticeError;
use std::f32::consts::PI;

/// Returns the edge length of the square box that realizes the target
/// packing fraction.
///
/// ### Parameters
/// - `n` - Number of disks, must be positive.
/// - `eta` - Target packing fraction, must lie in `(0, 1)`.
/// - `sigma` - Disk diameter, must be positive.
///
/// ### Returns
/// `L = sqrt(n * pi * sigma^2 / (4 * eta))`, or
/// [`LatticeError::InvalidParameter`] for degenerate inputs.
pub fn box_length(n: usize, eta: f32, sigma: f32) -> Result<f32, LatticeError> {
    if n == 0 {
        return Err(LatticeError::InvalidParameter {
            name: "n",
            value: 0.0,
            requirement: "a positive disk count",
        });
    }
    // The negated comparisons also reject NaN.
    if !(eta > 0.0 && eta < 1.0) {
        return Err(LatticeError::InvalidParameter {
            name: "eta",
            value: eta,
            requirement: "inside (0, 1)",
        });
    }
    if !(sigma > 0.0) {
        return Err(LatticeError::InvalidParameter {
            name: "sigma",
            value: sigma,
            requirement: "positive",
        });
    }

    Ok((n as f32 * PI * sigma * sigma / (4.0 * eta)).sqrt())
}

/// Packing fraction realized by `n` disks of diameter `sigma` in a square
/// box of edge length `l`: `n * pi * (sigma / 2)^2 / l^2`.
pub fn packing_fraction(n: usize, sigma: f32, l: f32) -> f32 {
    let r = sigma / 2.0;
    n as f32 * PI * r * r / (l * l)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_length_matches_demo_fixture() {
        // Regression fixture for the stock demo parameters.
        let l = box_length(100, 0.68, 0.3).unwrap();
        assert!((l - 3.22412).abs() < 1e-4, "L = {l}");
    }

    #[test]
    fn box_length_satisfies_area_identity() {
        // n * pi * sigma^2 / (4 * eta) == L^2 for a spread of valid inputs.
        let cases = [
            (100, 0.68, 0.3),
            (1, 0.1, 1.0),
            (500, 0.9, 0.05),
            (7, 0.25, 2.5),
        ];
        for (n, eta, sigma) in cases {
            let l = box_length(n, eta, sigma).unwrap();
            let disk_area = n as f32 * PI * sigma * sigma / (4.0 * eta);
            assert!(
                (l * l - disk_area).abs() < 1e-3 * disk_area,
                "n={n} eta={eta} sigma={sigma}: L^2={} vs {}",
                l * l,
                disk_area
            );
        }
    }

    #[test]
    fn box_length_rejects_degenerate_parameters() {
        assert!(matches!(
            box_length(0, 0.5, 0.3),
            Err(LatticeError::InvalidParameter { name: "n", .. })
        ));
        for eta in [0.0, 1.0, -0.2, 1.5, f32::NAN] {
            assert!(matches!(
                box_length(10, eta, 0.3),
                Err(LatticeError::InvalidParameter { name: "eta", .. })
            ));
        }
        for sigma in [0.0, -1.0, f32::NAN] {
            assert!(matches!(
                box_length(10, 0.5, sigma),
                Err(LatticeError::InvalidParameter { name: "sigma", .. })
            ));
        }
    }

    #[test]
    fn packing_fraction_inverts_box_length() {
        // Sizing the box for eta and measuring the fraction back must agree.
        for (n, eta, sigma) in [(100, 0.68, 0.3), (42, 0.3, 1.2)] {
            let l = box_length(n, eta, sigma).unwrap();
            let measured = packing_fraction(n, sigma, l);
            assert!((measured - eta).abs() < 1e-5, "eta={eta} measured={measured}");
        }
    }
}
