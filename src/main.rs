//! Rollback Math self-check
//!
//! Runs a short deterministic scenario and logs the results together with
//! a state checksum that peers can compare across machines.

use anyhow::{bail, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rollback_math::{
    core::hash::checksum_hex, Fixed, FixedVec3, MathError, StateHasher, FIXED_ONE, VERSION,
};

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Rollback Math v{}", VERSION);
    info!("Scale: {} (1.0 = raw {})", FIXED_ONE, Fixed::ONE.raw());

    run_scenario()
}

/// Divide, take a failing square root, render a vector, then checksum.
fn run_scenario() -> Result<()> {
    info!("=== Scalar ===");

    let quotient = (Fixed::from_int(5) / Fixed::from_int(2))?;
    info!("5 / 2 = {} (raw {})", quotient, quotient.raw());

    match Fixed::from_int(-1).sqrt() {
        Err(MathError::NegativeOperand) => {
            info!("sqrt(-1) rejected: {}", MathError::NegativeOperand)
        }
        Err(other) => bail!("sqrt(-1) failed with unexpected error: {other}"),
        Ok(root) => bail!("sqrt(-1) unexpectedly returned {root}"),
    }

    let root = Fixed::from_int(2).sqrt()?;
    info!("sqrt(2) = {} (raw {})", root, root.raw());

    if let Err(err) = Fixed::ONE / Fixed::ZERO {
        warn!("1 / 0 rejected: {}", err);
    }

    info!("=== Vector ===");

    let position = FixedVec3::from_ints(3, 4, 5);
    let (x, y, z) = position.to_display_floats();
    info!("position = ({:.1}, {:.1}, {:.1})", x, y, z);

    let velocity = FixedVec3::from_ints(1, 2, 3);
    let moved = position + velocity * Fixed::HALF;
    info!("position + velocity * 0.5 = {}", moved);
    info!("position . velocity = {}", position.dot(velocity));

    let mut hasher = StateHasher::for_simulation_state();
    hasher.update_fixed(quotient);
    hasher.update_fixed(root);
    hasher.update_vec3(moved);
    let checksum = hasher.finalize();
    info!("State checksum: {}", checksum_hex(&checksum));

    Ok(())
}
