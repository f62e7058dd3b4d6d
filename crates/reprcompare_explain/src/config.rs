//! Configuration for explanations.

use crate::env::running_on_ci;
use crate::highlight::{AnsiHighlighter, Highlight, PlainHighlighter};

/// Which verbosity setting a caller asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerbosityKind {
    /// The session-wide verbosity (`-v`, `-q`).
    Global,
    /// Verbosity for assertion explanations, which may differ from the global one.
    Assertions,
}

/// Source of verbosity levels for an explanation.
pub trait VerbosityProvider {
    /// Returns the verbosity level for the given kind.
    fn get_verbosity(&self, kind: VerbosityKind) -> i32;

    /// Forces CI detection on or off. `None` reads the environment.
    fn ci_override(&self) -> Option<bool> {
        None
    }
}

/// Configuration for explaining failed comparisons.
///
/// Controls how much detail explanations carry and how they are colored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Global verbosity: negative is quiet, 0 is normal, 1 is `-v`, 2 is `-vv`.
    pub verbose: i32,

    /// Verbosity for assertions. `None` follows `verbose`.
    pub assertion_verbosity: Option<i32>,

    /// Whether to behave as on CI. `None` detects it from the environment.
    pub ci: Option<bool>,

    /// Emit ANSI colors.
    pub color: bool,
}

impl Config {
    /// Creates a configuration for quiet runs (`-q`).
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            verbose: -1,
            ..Self::default()
        }
    }

    /// Creates a configuration for verbose runs (`-v`).
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            verbose: 1,
            ..Self::default()
        }
    }

    /// Creates a configuration for very verbose runs (`-vv`).
    #[must_use]
    pub fn very_verbose() -> Self {
        Self {
            verbose: 2,
            ..Self::default()
        }
    }

    /// Builder method to set the global verbosity.
    #[must_use]
    pub fn with_verbose(mut self, verbose: i32) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builder method to set the assertion verbosity.
    #[must_use]
    pub fn with_assertion_verbosity(mut self, verbosity: i32) -> Self {
        self.assertion_verbosity = Some(verbosity);
        self
    }

    /// Builder method to force CI behaviour on or off.
    #[must_use]
    pub fn with_ci(mut self, ci: bool) -> Self {
        self.ci = Some(ci);
        self
    }

    /// Builder method to enable/disable colored output.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Whether explanations should behave as on CI.
    #[must_use]
    pub fn on_ci(&self) -> bool {
        self.ci.unwrap_or_else(running_on_ci)
    }

    /// The highlighter matching the color setting.
    #[must_use]
    pub fn highlighter(&self) -> &'static dyn Highlight {
        if self.color {
            &AnsiHighlighter
        } else {
            &PlainHighlighter
        }
    }
}

impl VerbosityProvider for Config {
    fn get_verbosity(&self, kind: VerbosityKind) -> i32 {
        match kind {
            VerbosityKind::Global => self.verbose,
            VerbosityKind::Assertions => self.assertion_verbosity.unwrap_or(self.verbose),
        }
    }

    fn ci_override(&self) -> Option<bool> {
        self.ci
    }
}
