//! Differences between two ordered sequences.

use reprcompare_foundation::repr::{DEFAULT_REPR_MAX_SIZE, repr, saferepr};
use reprcompare_foundation::{Result, Value};

use crate::context::Context;

/// Explains where two sequences first differ and how their lengths differ.
///
/// Byte strings report differing bytes as one-byte strings and never report
/// a length difference.
///
/// # Errors
///
/// Propagates failures of element equality or repr.
pub fn compare_eq_sequence(left: &Value, right: &Value, ctx: &Context<'_>) -> Result<Vec<String>> {
    let bytes = left.as_bytes().zip(right.as_bytes());
    let mut explanation = Vec::new();
    let len_left = left.seq_len().unwrap_or(0);
    let len_right = right.seq_len().unwrap_or(0);

    for i in 0..len_left.min(len_right) {
        let (Some(l), Some(r)) = (left.seq_item(i), right.seq_item(i)) else {
            break;
        };
        if l.try_eq(&r)? {
            continue;
        }
        let (l, r) = match bytes {
            Some((lb, rb)) => (Value::bytes(&lb[i..=i]), Value::bytes(&rb[i..=i])),
            None => (l, r),
        };
        explanation.push(format!(
            "At index {i} diff: {} != {}",
            ctx.hl(&repr(&l)?),
            ctx.hl(&repr(&r)?)
        ));
        break;
    }

    if bytes.is_some() {
        return Ok(explanation);
    }

    let (dir_with_more, extra, len_diff) = match len_left.cmp(&len_right) {
        std::cmp::Ordering::Equal => return Ok(explanation),
        std::cmp::Ordering::Greater => ("Left", left.seq_item(len_right), len_left - len_right),
        std::cmp::Ordering::Less => ("Right", right.seq_item(len_left), len_right - len_left),
    };
    let extra = ctx.hl(&extra.map_or_else(String::new, |v| saferepr(&v, DEFAULT_REPR_MAX_SIZE, false)));
    if len_diff == 1 {
        explanation.push(format!("{dir_with_more} contains one more item: {extra}"));
    } else {
        explanation.push(format!(
            "{dir_with_more} contains {len_diff} more items, first extra item: {extra}"
        ));
    }
    Ok(explanation)
}
