//! Integration tests for session hooks
//!
//! Tests a host wiring the explainer into the process-wide hook slots.

use std::sync::Arc;

use reprcompare_explain::hooks::{self, ReprCompareHook, SessionHooks};
use reprcompare_explain::{Config, Operator, explain};
use reprcompare_foundation::Value;

// Slots are process-wide: this is the only test in the binary touching them.
#[test]
fn host_hook_uses_session_config() {
    let hook: ReprCompareHook = Arc::new(|symbol: &str, left: &Value, right: &Value| {
        let op: Operator = symbol.parse().ok()?;
        let config = hooks::config().unwrap_or_default();
        let lines = explain(&config, op, left, right).ok()??;
        Some(lines.join("\n"))
    });

    {
        let config = Config::default().with_ci(false);
        let _session = SessionHooks::install(Some(hook), None, Some(config));
        let explained = hooks::reprcompare()
            .and_then(|h| h("==", &Value::list([1, 2]), &Value::list([1, 2, 3])));
        assert_eq!(
            explained.as_deref(),
            Some("[1, 2] == [1, 2, 3]\n\nRight contains one more item: 3\nUse -v to get more diff")
        );
    }

    assert!(hooks::reprcompare().is_none());
    assert!(hooks::config().is_none());
}
