//! Verifies the prelude exposes everything a typical caller needs.

use shapecheck_validator::prelude::*;

#[test]
fn prelude_covers_the_common_surface() {
    let pattern: Pattern = ObjectPattern::new()
        .field("name", Pattern::parse("string").unwrap())
        .unwrap()
        .field("port", Pattern::parse("optional number").unwrap())
        .unwrap()
        .into();

    let config = Value::object([("name", Value::text("web"))]);
    assert!(check(&config, &pattern).is_ok());

    let matcher = Matcher::with_observables(Handles);
    let wrapped = Value::observable(Value::integer(8080));
    assert!(
        matcher
            .check_named(&wrapped, &Pattern::parse("observable number").unwrap(), "port")
            .is_ok()
    );
}

#[test]
fn error_types_are_reachable() {
    let parse_err: PatternError = Pattern::parse("").unwrap_err();
    assert_eq!(parse_err, PatternError::Empty);

    let err: ValidationError = check(
        &Value::integer(1),
        &Pattern::parse("string").unwrap(),
    )
    .unwrap_err();
    assert_eq!(err.path(), DEFAULT_ROOT);
}
