//! End-to-end tests of `#[derive(Buildable)]` through the public surface.

use std::collections::BTreeMap;

use knack_builder::{BuildError, BuildProblem, Buildable};
use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq, Buildable)]
struct Record {
    a: String,
    b: Option<String>,
    c: BTreeMap<String, i64>,
}

#[derive(Debug, PartialEq, Buildable)]
struct Retry {
    #[builder(default)]
    attempts: u32,
    #[builder(default = 250)]
    delay_ms: u64,
    #[builder(default = "immediate")]
    mode: String,
}

#[derive(Debug, PartialEq, Buildable)]
struct Nothing {}

fn labels() -> BTreeMap<String, i64> {
    BTreeMap::from([("n".to_string(), 1)])
}

#[test]
fn typed_setters_feed_the_constructor() {
    let record = Record::builder()
        .with_a("x")
        .with_b("described".to_string())
        .with_c(labels())
        .build()
        .unwrap();
    assert_eq!(
        record,
        Record {
            a: "x".into(),
            b: Some("described".into()),
            c: labels(),
        }
    );
}

#[test]
fn unset_optional_field_defaults_to_none() {
    let record = Record::builder()
        .with_a("x")
        .with_c(labels())
        .build()
        .unwrap();
    assert_eq!(record.a, "x");
    assert_eq!(record.b, None);
    assert_eq!(record.c, labels());
}

#[test]
fn re_setting_an_argument_overwrites_it() {
    let record = Record::builder()
        .with_a("x")
        .with_c(labels())
        .with_a("y")
        .build()
        .unwrap();
    assert_eq!(record.a, "y");
}

#[test]
fn missing_required_argument_is_reported() {
    let err = Record::builder().with_a("x").build().unwrap_err();
    match err {
        BuildError::Construction { target, problems } => {
            assert_eq!(target, "Record");
            assert_eq!(problems, vec![BuildProblem::missing("c")]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_argument_via_dynamic_set_is_reported() {
    let err = Record::builder()
        .with_a("x")
        .with_c(labels())
        .set("zzz", 1)
        .build()
        .unwrap_err();
    assert_eq!(err.problems(), &[BuildProblem::unknown("zzz")]);
}

#[test]
fn all_problems_aggregate_into_one_error() {
    let err = Record::builder()
        .with_a("x")
        .set("zzz", 1)
        .build()
        .unwrap_err();
    assert_eq!(
        err.problems(),
        &[BuildProblem::missing("c"), BuildProblem::unknown("zzz")]
    );
}

#[test]
fn mistyped_dynamic_value_is_reported_per_field() {
    let err = Record::builder()
        .set("a", 42)
        .with_c(labels())
        .build()
        .unwrap_err();
    let problems = err.problems();
    assert_eq!(problems.len(), 1);
    assert!(matches!(
        problems[0],
        BuildProblem::InvalidValue { name: "a", .. }
    ));
}

#[test]
fn build_is_repeatable_and_independent() {
    let builder = Record::builder().with_a("x").with_c(labels());
    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first, second);
}

#[test]
fn declared_defaults_apply_when_unset() {
    let retry = Retry::builder().build().unwrap();
    assert_eq!(
        retry,
        Retry {
            attempts: 0,
            delay_ms: 250,
            mode: "immediate".into(),
        }
    );
}

#[test]
fn declared_defaults_yield_to_explicit_values() {
    let retry = Retry::builder()
        .with_attempts(3u32)
        .with_delay_ms(10u64)
        .with_mode("backoff")
        .build()
        .unwrap();
    assert_eq!(
        retry,
        Retry {
            attempts: 3,
            delay_ms: 10,
            mode: "backoff".into(),
        }
    );
}

#[test]
fn empty_struct_builds_from_an_empty_pack() {
    assert_eq!(Nothing::builder().build().unwrap(), Nothing {});
}

#[test]
fn empty_struct_still_rejects_unknown_arguments() {
    let err = Nothing::builder().set("ghost", true).build().unwrap_err();
    assert_eq!(err.problems(), &[BuildProblem::unknown("ghost")]);
}

#[test]
fn schema_reflects_field_requirements() {
    let required: Vec<_> = Record::FIELDS
        .iter()
        .filter(|field| field.required)
        .map(|field| field.name)
        .collect();
    assert_eq!(required, vec!["a", "c"]);
    assert!(Retry::FIELDS.iter().all(|field| !field.required));
}
