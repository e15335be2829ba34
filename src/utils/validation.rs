use super::error::Error;
use serde_json::Value;
use validator::ValidationErrors;

/// One check in a route's validation chain.
pub type Step<C> = fn(&C) -> Result<(), Error>;

/// Runs `steps` in order and stops at the first failure.
pub fn run<C>(ctx: &C, steps: &[Step<C>]) -> Result<(), Error> {
    steps.iter().try_for_each(|step| step(ctx))
}

pub fn reject(errors: ValidationErrors, message: &str) -> Error {
    tracing::warn!("Failed to validate payload: {errors}");
    Error::BadRequest(message.to_string())
}

/// Whether a submitted JSON value counts as "given": `null`, `false`, `0`
/// and `""` do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn is_given(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

/// Reads a whole number, accepting floats without a fractional part
/// (`5.0`) the same way as `5`.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    }
}

/// Renders a submitted id for messages: strings verbatim, anything else as JSON.
pub fn display_id(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A body id is accepted when it is missing, falsy, or exactly the route id.
pub fn id_matches(body_id: Option<&Value>, route_id: &str) -> bool {
    match body_id {
        Some(id) if is_truthy(id) => id.as_str() == Some(route_id),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn always_ok(_: &u8) -> Result<(), Error> {
        Ok(())
    }

    fn fails_with_first(_: &u8) -> Result<(), Error> {
        Err(Error::BadRequest("first".into()))
    }

    fn fails_with_second(_: &u8) -> Result<(), Error> {
        Err(Error::BadRequest("second".into()))
    }

    #[test]
    fn first_failing_step_wins() {
        let steps: [Step<u8>; 3] = [always_ok, fails_with_first, fails_with_second];
        assert_eq!(run(&0, &steps), Err(Error::BadRequest("first".into())));
    }

    #[test]
    fn passing_chain_is_ok() {
        let steps: [Step<u8>; 2] = [always_ok, always_ok];
        assert_eq!(run(&0, &steps), Ok(()));
        assert_eq!(run::<u8>(&0, &[]), Ok(()));
    }

    #[test]
    fn truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(-1), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn integers() {
        assert_eq!(as_integer(&json!(5)), Some(5));
        assert_eq!(as_integer(&json!(5.0)), Some(5));
        assert_eq!(as_integer(&json!(-3)), Some(-3));
        assert_eq!(as_integer(&json!(5.5)), None);
        assert_eq!(as_integer(&json!("5")), None);
    }

    #[test]
    fn id_matching() {
        assert!(id_matches(None, "5"));
        assert!(id_matches(Some(&json!("")), "5"));
        assert!(id_matches(Some(&json!(null)), "5"));
        assert!(id_matches(Some(&json!("5")), "5"));
        assert!(!id_matches(Some(&json!("99")), "5"));
        assert!(!id_matches(Some(&json!(5)), "5"));
    }
}
