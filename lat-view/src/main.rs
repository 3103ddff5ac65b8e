//! Command-line entry point for the 2D hard-disk configuration viewer.
//!
//! This binary parses the packing parameters, runs the lattice generation
//! pipeline from `lat-core`, echoes the box length and the first few
//! positions to the console, and then opens the interactive [`Viewer`].

mod viewer;

use anyhow::Result;
use clap::Parser;
use lat_core::config::Config;
use lat_core::lattice::LatticeKind;
use viewer::Viewer;

/// Generates an initial 2D hard-disk configuration on a lattice and shows
/// it with periodic-boundary tiling.
#[derive(Parser, Debug)]
struct Args {
    /// Number of disks to place.
    #[arg(long, default_value_t = 100)]
    n: usize,

    /// Target packing fraction, in (0, 1).
    #[arg(long, default_value_t = 0.68)]
    eta: f32,

    /// Disk diameter.
    #[arg(long, default_value_t = 0.3)]
    sigma: f32,

    /// Lattice arrangement: "square" or "hex".
    #[arg(long, default_value = "square")]
    lattice: String,

    /// Uniform jitter amplitude applied to hex lattice sites.
    #[arg(long, default_value_t = 0.0)]
    jitter: f32,

    /// Extra spacing added to the disk diameter on the square grid.
    #[arg(long, default_value_t = 0.0)]
    pad: f32,

    /// Seed for the jitter random number generator.
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

fn config_from_args(args: &Args) -> Result<Config> {
    let lattice: LatticeKind = args.lattice.parse()?;
    Ok(Config {
        n: args.n,
        eta: args.eta,
        sigma: args.sigma,
        lattice,
        jitter: args.jitter,
        spacing_pad: args.pad,
        seed: args.seed,
    })
}

/// Runs the generation pipeline and launches the native viewer window.
///
/// ### Returns
/// - `Ok(())` if generation succeeds and the window runs to completion.
/// - `Err` for invalid parameters, an oversubscribed lattice, or an
///   eframe startup failure.
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let cfg = config_from_args(&args)?;

    let viewer = Viewer::new(cfg.clone())?;
    println!("Box length L = {:.5}", viewer.box_len());

    println!("First 10 positions:");
    for (i, p) in viewer.positions().iter().take(10).enumerate() {
        println!("{i:3}: {:.5}  {:.5}", p.x, p.y);
    }

    let title = format!(
        "{} — N={}, η={}, σ={}, L={:.3}",
        cfg.lattice.label(),
        cfg.n,
        cfg.eta,
        cfg.sigma,
        viewer.box_len()
    );

    let options = eframe::NativeOptions::default();
    eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(viewer))))
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_match_the_default_config() {
        let args = Args::try_parse_from(["lat-view"]).unwrap();
        let cfg = config_from_args(&args).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn unknown_lattice_tag_is_rejected_before_geometry() {
        let args = Args::try_parse_from(["lat-view", "--lattice", "cubic"]).unwrap();
        let err = config_from_args(&args).unwrap_err();
        assert!(err.to_string().contains("cubic"), "{err}");
    }
}
