//! Environment detection.

/// Environment variables whose presence marks a CI run.
pub const CI_ENV_VARS: [&str; 2] = ["CI", "BUILD_NUMBER"];

/// Returns true when any CI marker variable is set, whatever its value.
#[must_use]
pub fn running_on_ci() -> bool {
    CI_ENV_VARS.iter().any(|var| std::env::var_os(var).is_some())
}
