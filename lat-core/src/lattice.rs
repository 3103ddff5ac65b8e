//! Square and triangular (hex) lattice builders.
//!
//! Both builders place exactly `n` points inside a box of edge length `l`
//! and wrap every coordinate into `[0, l)`. When the lattice geometry cannot
//! hold `n` points, they fail with [`LatticeError::CapacityExceeded`] rather
//! than silently returning a short configuration.

use crate::{config::Config, error::LatticeError, pbc};
use glam::Vec2;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Which lattice arrangement to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeKind {
    Square,
    Hex,
}

impl LatticeKind {
    /// Human-readable name used in window titles.
    pub fn label(&self) -> &'static str {
        match self {
            LatticeKind::Square => "Square lattice",
            LatticeKind::Hex => "Hexagonal lattice (triangular)",
        }
    }
}

impl fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeKind::Square => write!(f, "square"),
            LatticeKind::Hex => write!(f, "hex"),
        }
    }
}

impl FromStr for LatticeKind {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(LatticeKind::Square),
            "hex" => Ok(LatticeKind::Hex),
            other => Err(LatticeError::InvalidLatticeKind(other.to_string())),
        }
    }
}

/// Builds the configuration selected by `cfg.lattice`.
///
/// The square grid uses `cfg.square_spacing()` as its site spacing; the hex
/// lattice spaces neighbors one diameter apart and perturbs sites by
/// `cfg.jitter` using the supplied generator.
pub fn build(cfg: &Config, l: f32, rng: &mut impl Rng) -> Result<Vec<Vec2>, LatticeError> {
    log::debug!(
        "building {} configuration: n={} L={l} sigma={}",
        cfg.lattice,
        cfg.n,
        cfg.sigma
    );
    match cfg.lattice {
        LatticeKind::Square => square_lattice(cfg.n, l, cfg.square_spacing()),
        LatticeKind::Hex => hex_lattice(cfg.n, l, cfg.sigma, cfg.jitter, rng),
    }
}

/// Places `n` points on a uniform square grid.
///
/// Sites are enumerated row by row (rows in y, columns in x) with the given
/// spacing on both axes, stopping as soon as `n` points are collected.
///
/// ### Parameters
/// - `n` - Number of points to place.
/// - `l` - Box edge length.
/// - `spacing` - Distance between neighboring sites on each axis.
///
/// ### Returns
/// Exactly `n` wrapped positions, or [`LatticeError::CapacityExceeded`] if
/// the `floor(l / spacing)^2` grid sites cannot hold `n` points.
pub fn square_lattice(n: usize, l: f32, spacing: f32) -> Result<Vec<Vec2>, LatticeError> {
    if !(l > 0.0) {
        return Err(LatticeError::InvalidParameter {
            name: "l",
            value: l,
            requirement: "positive",
        });
    }
    if !(spacing > 0.0) {
        return Err(LatticeError::InvalidParameter {
            name: "spacing",
            value: spacing,
            requirement: "positive",
        });
    }

    let per_axis = (l / spacing).floor() as usize;
    let capacity = per_axis * per_axis;
    if capacity < n {
        return Err(LatticeError::CapacityExceeded {
            requested: n,
            capacity,
        });
    }

    let mut coords = Vec::with_capacity(n);
    'rows: for iy in 0..per_axis {
        let y = iy as f32 * spacing;
        for ix in 0..per_axis {
            // Wrap is a safety net for sites landing exactly on the far edge.
            coords.push(pbc::wrap(Vec2::new(ix as f32 * spacing, y), l));
            if coords.len() == n {
                break 'rows;
            }
        }
    }
    Ok(coords)
}

/// Places `n` points on a close-packed triangular lattice, with optional
/// jitter to break the perfect symmetry.
///
/// Neighbors sit one diameter apart (`a = sigma`), rows are
/// `sqrt(3) / 2 * a` apart, and odd rows are offset by `a / 2`. Rows are
/// filled while they fit inside the box, stopping as soon as `n` points are
/// collected. If `jitter > 0`, each coordinate is then displaced by an
/// independent uniform sample from `[-jitter, jitter]`; all coordinates are
/// wrapped back into `[0, l)` afterwards.
///
/// ### Parameters
/// - `n` - Number of points to place.
/// - `l` - Box edge length.
/// - `sigma` - Disk diameter, which doubles as the nearest-neighbor spacing.
/// - `jitter` - Uniform displacement amplitude, must be non-negative.
/// - `rng` - Generator used for the jitter samples; seeding it makes the
///   configuration reproducible.
///
/// ### Returns
/// Exactly `n` wrapped positions, or [`LatticeError::CapacityExceeded`] if
/// the rows fitting inside the box hold fewer than `n` sites.
pub fn hex_lattice(
    n: usize,
    l: f32,
    sigma: f32,
    jitter: f32,
    rng: &mut impl Rng,
) -> Result<Vec<Vec2>, LatticeError> {
    if !(l > 0.0) {
        return Err(LatticeError::InvalidParameter {
            name: "l",
            value: l,
            requirement: "positive",
        });
    }
    if !(sigma > 0.0) {
        return Err(LatticeError::InvalidParameter {
            name: "sigma",
            value: sigma,
            requirement: "positive",
        });
    }
    if !(jitter >= 0.0) {
        return Err(LatticeError::InvalidParameter {
            name: "jitter",
            value: jitter,
            requirement: "non-negative",
        });
    }

    let a = sigma;
    let row_height = 3.0_f32.sqrt() / 2.0 * a;

    let mut coords = Vec::with_capacity(n);
    let mut iy = 0;
    'rows: loop {
        let y = iy as f32 * row_height;
        if y >= l {
            break;
        }
        let x_offset = if iy % 2 == 1 { 0.5 * a } else { 0.0 };
        let mut ix = 0;
        loop {
            let x = ix as f32 * a + x_offset;
            if x >= l {
                break;
            }
            coords.push(Vec2::new(x, y));
            if coords.len() == n {
                break 'rows;
            }
            ix += 1;
        }
        iy += 1;
    }

    // The row loop only exits early once n points exist, so a short vector
    // here means the box is exhausted and its length is the full capacity.
    if coords.len() < n {
        return Err(LatticeError::CapacityExceeded {
            requested: n,
            capacity: coords.len(),
        });
    }

    if jitter > 0.0 {
        for p in &mut coords {
            p.x += rng.random_range(-jitter..=jitter);
            p.y += rng.random_range(-jitter..=jitter);
        }
    }
    for p in &mut coords {
        *p = pbc::wrap(*p, l);
    }
    Ok(coords)
}
