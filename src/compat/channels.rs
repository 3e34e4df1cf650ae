//! Channel-content helpers for classifying deep-inelastic tables.
//!
//! A FONLL-B table only makes sense for deep-inelastic scattering, where one
//! side of every channel combination is a lepton. Drivers use these
//! predicates, together with the flavor-number-scheme label from the theory
//! parameters, to pick the coupling conventions for such tables.

/// Return `true` if `pid` is a lepton particle identifier (`10 < |pid| < 17`).
pub fn is_lepton_pid(pid: i32) -> bool {
    let abs = pid.abs();
    abs > 10 && abs < 17
}

/// Return `true` if the table being computed is a DIS FONLL-B table.
///
/// # Parameters
/// - `fns`: flavor-number-scheme label from the theory parameters.
/// - `channels`: channel (luminosity) content of the grid; each combination
///   is a pair of initial-state particle identifiers with a weight.
///
/// # Behavior
/// A combination with no lepton on either side means the process is not
/// deep-inelastic, so the table cannot be FONLL-B regardless of the scheme
/// label. Otherwise the verdict is simply whether the scheme is FONLL-B.
pub fn is_dis_fonll_b(fns: &str, channels: &[Vec<(i32, i32, f64)>]) -> bool {
    for combinations in channels {
        for &(pid_a, pid_b, _) in combinations {
            if !is_lepton_pid(pid_a) && !is_lepton_pid(pid_b) {
                return false;
            }
        }
    }
    fns == "FONLL-B"
}
