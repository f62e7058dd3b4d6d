//! Process-wide hook slots.
//!
//! The host installs these once per session so that assertion rewriting
//! code elsewhere can tell the explanation subsystem is loaded and call into
//! it. Nothing in this crate reads them.

use std::sync::{Arc, PoisonError, RwLock};

use reprcompare_foundation::Value;

use crate::config::Config;

/// Hook producing a formatted explanation for `(op, left, right)`.
pub type ReprCompareHook = Arc<dyn Fn(&str, &Value, &Value) -> Option<String> + Send + Sync>;

/// Callback invoked with `(line, original, explanation)` when an assertion passes.
pub type AssertionPassHook = Arc<dyn Fn(usize, &str, &str) + Send + Sync>;

static REPRCOMPARE: RwLock<Option<ReprCompareHook>> = RwLock::new(None);
static ASSERTION_PASS: RwLock<Option<AssertionPassHook>> = RwLock::new(None);
static SESSION_CONFIG: RwLock<Option<Config>> = RwLock::new(None);

fn read<T: Clone>(slot: &RwLock<Option<T>>) -> Option<T> {
    slot.read().unwrap_or_else(PoisonError::into_inner).clone()
}

fn replace<T>(slot: &RwLock<Option<T>>, value: Option<T>) -> Option<T> {
    let mut guard = slot.write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *guard, value)
}

/// Installs the reverse-comparison hook, returning the previous one.
pub fn set_reprcompare(hook: Option<ReprCompareHook>) -> Option<ReprCompareHook> {
    replace(&REPRCOMPARE, hook)
}

/// The installed reverse-comparison hook.
#[must_use]
pub fn reprcompare() -> Option<ReprCompareHook> {
    read(&REPRCOMPARE)
}

/// Installs the assertion-pass callback, returning the previous one.
pub fn set_assertion_pass(hook: Option<AssertionPassHook>) -> Option<AssertionPassHook> {
    replace(&ASSERTION_PASS, hook)
}

/// The installed assertion-pass callback.
#[must_use]
pub fn assertion_pass() -> Option<AssertionPassHook> {
    read(&ASSERTION_PASS)
}

/// Installs the session configuration, returning the previous one.
pub fn set_config(config: Option<Config>) -> Option<Config> {
    replace(&SESSION_CONFIG, config)
}

/// The installed session configuration.
#[must_use]
pub fn config() -> Option<Config> {
    read(&SESSION_CONFIG)
}

/// Installs all three slots for the lifetime of the guard.
///
/// Dropping the guard restores whatever was installed before.
#[must_use = "the hooks are uninstalled when the guard is dropped"]
pub struct SessionHooks {
    reprcompare: Option<ReprCompareHook>,
    assertion_pass: Option<AssertionPassHook>,
    config: Option<Config>,
}

impl SessionHooks {
    /// Installs the given hooks.
    pub fn install(
        reprcompare: Option<ReprCompareHook>,
        assertion_pass: Option<AssertionPassHook>,
        config: Option<Config>,
    ) -> Self {
        tracing::debug!(
            reprcompare = reprcompare.is_some(),
            assertion_pass = assertion_pass.is_some(),
            config = config.is_some(),
            "installing session hooks"
        );
        Self {
            reprcompare: set_reprcompare(reprcompare),
            assertion_pass: set_assertion_pass(assertion_pass),
            config: set_config(config),
        }
    }
}

impl Drop for SessionHooks {
    fn drop(&mut self) {
        set_reprcompare(self.reprcompare.take());
        set_assertion_pass(self.assertion_pass.take());
        set_config(self.config.take());
    }
}

impl std::fmt::Debug for SessionHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHooks")
            .field("reprcompare", &self.reprcompare.is_some())
            .field("assertion_pass", &self.assertion_pass.is_some())
            .field("config", &self.config)
            .finish()
    }
}
