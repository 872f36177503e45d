//! Opaque argument lists threaded between states.
//!
//! A state's work receives the previous state's results followed by its own
//! static params, and reports its own results. The walker never looks inside.

use serde_json::Value;

/// Ordered list of opaque values passed between states.
pub type Values = Vec<Value>;

/// Build the argument list for one step: incoming results, then params.
///
/// # Example
///
/// ```rust
/// use statewalk::core::values::concat_args;
/// use serde_json::json;
///
/// let args = concat_args(vec![json!({"id": "p1"})], &[json!("extra")]);
/// assert_eq!(args, vec![json!({"id": "p1"}), json!("extra")]);
/// ```
pub fn concat_args(incoming: Values, params: &[Value]) -> Values {
    let mut args = incoming;
    args.extend(params.iter().cloned());
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn incoming_precede_params() {
        let args = concat_args(vec![json!(1), json!(2)], &[json!("a")]);
        assert_eq!(args, vec![json!(1), json!(2), json!("a")]);
    }

    #[test]
    fn empty_sides_are_fine() {
        assert!(concat_args(Vec::new(), &[]).is_empty());
        assert_eq!(concat_args(Vec::new(), &[json!(null)]), vec![json!(null)]);
    }
}
