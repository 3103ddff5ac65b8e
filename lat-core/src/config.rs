use crate::lattice::LatticeKind;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Parameters for one configuration-generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Number of disks to place.
    pub n: usize,
    /// Target packing fraction, must lie in (0, 1).
    pub eta: f32,
    /// Disk diameter.
    pub sigma: f32,
    pub lattice: LatticeKind,
    /// Uniform jitter amplitude applied to hex lattice sites.
    pub jitter: f32,
    /// Extra spacing added to the disk diameter on the square grid.
    pub spacing_pad: f32,
    /// Seed for the jitter random number generator.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n: 100,
            eta: 0.68,
            sigma: 0.3,
            lattice: LatticeKind::Square,
            jitter: 0.0,
            spacing_pad: 0.0,
            seed: 1,
        }
    }
}

impl Config {
    /// Creates the deterministic generator used for jitter; the same seed
    /// always yields the same jitter sequence.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// Site spacing of the square grid.
    pub fn square_spacing(&self) -> f32 {
        self.sigma + self.spacing_pad
    }
}
