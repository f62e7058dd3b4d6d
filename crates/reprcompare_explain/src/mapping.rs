//! Differences between two mappings.

use reprcompare_foundation::pprint::pformat;
use reprcompare_foundation::repr::{DEFAULT_REPR_MAX_SIZE, saferepr};
use reprcompare_foundation::{PMap, Result, Value};

use crate::context::Context;
use crate::highlight::Lexer;

/// Explains which keys two mappings share, which values differ, and which
/// keys only one side has.
///
/// # Errors
///
/// Propagates failures of value equality or repr.
pub fn compare_eq_dict(left: &Value, right: &Value, ctx: &Context<'_>) -> Result<Vec<String>> {
    let (Some(left), Some(right)) = (left.as_dict(), right.as_dict()) else {
        return Ok(Vec::new());
    };
    let mut explanation = Vec::new();

    let mut same = PMap::new();
    let mut differing = Vec::new();
    for (key, l) in left.iter() {
        if let Some(r) = right.get(key) {
            if l.try_eq(r)? {
                same = same.insert(key.clone(), l.clone());
            } else {
                differing.push((key, l, r));
            }
        }
    }

    if !same.is_empty() && ctx.verbose < 2 {
        explanation.push(format!(
            "Omitting {} identical items, use -vv to show",
            same.len()
        ));
    } else if !same.is_empty() {
        explanation.push("Common items:".to_string());
        explanation.extend(ctx.hl_lines(&pformat(&Value::Dict(same))?, Lexer::Python));
    }

    if !differing.is_empty() {
        explanation.push("Differing items:".to_string());
        for (key, l, r) in differing {
            explanation.push(format!(
                "{} != {}",
                ctx.hl(&single_item(key, l)),
                ctx.hl(&single_item(key, r))
            ));
        }
    }

    for (side, this, other) in [("Left", left, right), ("Right", right, left)] {
        let extra: PMap<Value, Value> = this
            .iter()
            .filter(|(key, _)| !other.contains_key(key))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if extra.is_empty() {
            continue;
        }
        let n = extra.len();
        let plural = if n == 1 { "" } else { "s" };
        explanation.push(format!("{side} contains {n} more item{plural}:"));
        explanation.extend(ctx.hl_lines(&pformat(&Value::Dict(extra))?, Lexer::Python));
    }

    Ok(explanation)
}

fn single_item(key: &Value, value: &Value) -> String {
    let entry = PMap::new().insert(key.clone(), value.clone());
    saferepr(&Value::Dict(entry), DEFAULT_REPR_MAX_SIZE, false)
}
