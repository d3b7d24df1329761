//! Integration tests for the Foldable generic algorithms.
//!
//! Three kinds of data types are exercised:
//!
//! - `Vec<i64>`, which supplies `fold_left` only;
//! - `Tuple`, which supplies `unpack` only;
//! - `Bag`, which supplies `fold_left` and overrides `length`.

use std::sync::{Arc, Mutex};

use rstest::{fixture, rstest};
use tagclass::dispatch::{Call, Context, Error, Function, Operation, Registry, Tag, Value};
use tagclass::tuple;
use tagclass::typeclass::FoldableOps;
use tagclass::typeclass::foldable::{FOLD_LEFT_NON_EMPTY, FOLD_RIGHT_NON_EMPTY};

const I64: Tag = Tag::new("i64");
const BAG: Tag = Tag::new("bag");

#[derive(Clone)]
struct Bag(Vec<i64>);

fn fold_bag(context: &Context, call: Call) -> tagclass::dispatch::Result<Value> {
    let [bag, state, f] = call.into_arguments()?;
    let f = f.function()?;
    let mut accumulator = state;
    for element in bag.cloned::<Bag>()?.0 {
        accumulator = context.call(&f, vec![accumulator, Value::new(element)])?;
    }
    Ok(accumulator)
}

#[fixture]
fn registry() -> Registry {
    Registry::builder()
        .with(tagclass::instances::standard)
        .associate::<Bag>(BAG)
        .define(Operation::FoldLeft, BAG, fold_bag)
        .define(Operation::Length, BAG, |_, _| Ok(Value::new(usize::MAX)))
        .build()
        .unwrap()
}

fn add() -> Function {
    Function::binary("add", |left, right| {
        Ok(Value::new(left.cloned::<i64>()? + right.cloned::<i64>()?))
    })
}

fn subtract() -> Function {
    Function::binary("subtract", |left, right| {
        Ok(Value::new(left.cloned::<i64>()? - right.cloned::<i64>()?))
    })
}

fn list(values: &[i64]) -> Value {
    Value::new(values.to_vec())
}

fn int(value: &Value) -> i64 {
    value.cloned::<i64>().unwrap()
}

// =============================================================================
// Folds
// =============================================================================

#[rstest]
#[case(list(&[1, 2, 3]))]
#[case(Value::new(tuple![1_i64, 2_i64, 3_i64]))]
#[case(Value::new([1_i64, 2, 3]))]
fn test_fold_left_with_plus_from_zero(#[case] xs: Value) {
    let registry = Registry::builder()
        .with(tagclass::instances::standard)
        .with(tagclass::instances::install_array::<i64, 3>)
        .build()
        .unwrap();
    let result = registry.fold_left(xs, Value::new(0_i64), &add()).unwrap();
    assert_eq!(int(&result), 6);
}

#[rstest]
#[case(list(&[1, 2, 3]))]
#[case(Value::new(tuple![1_i64, 2_i64, 3_i64]))]
fn test_fold_right_with_minus_from_zero(registry: Registry, #[case] xs: Value) {
    // 1 - (2 - (3 - 0))
    let result = registry.fold_right(xs, Value::new(0_i64), &subtract()).unwrap();
    assert_eq!(int(&result), 2);
}

#[rstest]
fn test_fold_left1_equals_fold_left_over_the_tail(registry: Registry) {
    let stateless = registry.fold_left1(list(&[10, 2, 3]), &subtract()).unwrap();
    let seeded = registry
        .fold_left(list(&[2, 3]), Value::new(10_i64), &subtract())
        .unwrap();
    assert_eq!(int(&stateless), int(&seeded));
}

#[rstest]
#[case(list(&[]))]
#[case(Value::new(tuple![]))]
fn test_stateless_fold_of_empty_reports_the_contract(registry: Registry, #[case] xs: Value) {
    assert_eq!(
        registry.fold_left1(xs.clone(), &add()).unwrap_err(),
        Error::ContractViolation(FOLD_LEFT_NON_EMPTY)
    );
    assert_eq!(
        registry.fold_right1(xs, &add()).unwrap_err(),
        Error::ContractViolation(FOLD_RIGHT_NON_EMPTY)
    );
    assert_eq!(
        FOLD_LEFT_NON_EMPTY,
        "fold_left(xs, f) requires xs to be non-empty"
    );
}

#[rstest]
fn test_stateful_fold_of_empty_returns_the_state(registry: Registry) {
    let result = registry
        .fold_right(list(&[]), Value::new(42_i64), &subtract())
        .unwrap();
    assert_eq!(int(&result), 42);
}

// =============================================================================
// Unpack
// =============================================================================

#[rstest]
fn test_derived_unpack_matches_partial_application(registry: Registry) {
    let sum3 = Function::new("sum3", |arguments| {
        let [a, b, c] = tagclass::dispatch::spread("sum3", arguments)?;
        Ok(Value::new(
            a.cloned::<i64>()? * 100 + b.cloned::<i64>()? * 10 + c.cloned::<i64>()?,
        ))
    });
    let unpacked = registry.unpack(list(&[1, 2, 3]), &sum3).unwrap();

    let partial = Function::binary("partial", |accumulated, element| {
        Ok(accumulated.function()?.partial(vec![element]).into_value())
    });
    let folded = registry
        .fold_left(list(&[1, 2, 3]), sum3.into_value(), &partial)
        .unwrap()
        .function()
        .unwrap()
        .call(Vec::new())
        .unwrap();

    assert_eq!(int(&unpacked), 123);
    assert_eq!(int(&unpacked), int(&folded));
}

// =============================================================================
// Derived algorithms
// =============================================================================

#[rstest]
#[case(list(&[3, 1, 2]))]
#[case(Value::new(tuple![3_i64, 1_i64, 2_i64]))]
fn test_minimum_and_maximum(registry: Registry, #[case] xs: Value) {
    assert_eq!(int(&registry.minimum(xs.clone()).unwrap()), 1);
    assert_eq!(int(&registry.maximum(xs).unwrap()), 3);
}

#[rstest]
fn test_minimum_of_empty_is_a_contract_violation(registry: Registry) {
    assert_eq!(
        registry.minimum(list(&[])).unwrap_err(),
        Error::ContractViolation(FOLD_LEFT_NON_EMPTY)
    );
}

#[rstest]
fn test_count(registry: Registry) {
    assert_eq!(registry.count(list(&[1, 2, 1, 3]), Value::new(1_i64)).unwrap(), 2);
}

#[rstest]
#[case(&[])]
#[case(&[4])]
#[case(&[1, 2, 3, 4, 5, 6, 7])]
fn test_length_equals_count_if_always(registry: Registry, #[case] values: &[i64]) {
    let always = Function::unary("always", |_| Ok(Value::new(true)));
    assert_eq!(
        registry.length(list(values)).unwrap(),
        registry.count_if(list(values), &always).unwrap()
    );
    assert_eq!(registry.length(list(values)).unwrap(), values.len());
}

#[rstest]
fn test_sum_and_product_of_empty_are_identities(registry: Registry) {
    assert_eq!(int(&registry.sum(I64, list(&[])).unwrap()), 0);
    assert_eq!(int(&registry.product(I64, list(&[])).unwrap()), 1);
}

#[rstest]
fn test_sum_and_product(registry: Registry) {
    assert_eq!(int(&registry.sum(I64, list(&[1, 2, 3, 4])).unwrap()), 10);
    assert_eq!(int(&registry.product(I64, list(&[1, 2, 3, 4])).unwrap()), 24);
}

#[rstest]
fn test_sum_over_floats(registry: Registry) {
    let total = registry
        .sum(Tag::new("f64"), Value::new(vec![0.5_f64, 0.25, 0.25]))
        .unwrap()
        .cloned::<f64>()
        .unwrap();
    assert!((total - 1.0).abs() < f64::EPSILON);
}

#[rstest]
fn test_for_each_runs_side_effects_in_order(registry: Registry) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let record = Function::unary("record", move |value| {
        sink.lock().unwrap().push(value.cloned::<i64>()?);
        Ok(Value::unit())
    });
    registry.for_each(list(&[5, 6, 7]), &record).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![5, 6, 7]);
}

// =============================================================================
// Overrides
// =============================================================================

#[rstest]
fn test_user_override_wins_over_the_derived_default(registry: Registry) {
    assert_eq!(registry.length(Value::new(Bag(vec![1, 2]))).unwrap(), usize::MAX);
    assert!(!registry.is_default(Operation::Length, BAG));
    assert!(registry.is_default(Operation::Count, BAG));
}

#[rstest]
fn test_other_algorithms_still_derive_from_the_fold(registry: Registry) {
    let bag = Value::new(Bag(vec![4, 4, 9]));
    assert_eq!(registry.count(bag.clone(), Value::new(4_i64)).unwrap(), 2);
    assert_eq!(int(&registry.sum(I64, bag).unwrap()), 17);
}

#[rstest]
fn test_non_foldable_values_do_not_conform(registry: Registry) {
    let error = registry.sum(I64, Value::new(3_i64)).unwrap_err();
    assert!(matches!(
        error,
        Error::NotConforming {
            operation: Operation::Sum,
            ..
        }
    ));
    assert!(
        error
            .to_string()
            .contains("it does not model Foldable")
    );
}

#[rstest]
fn test_sum_with_a_non_monoid_parameter_does_not_conform(registry: Registry) {
    let error = registry.sum(Tag::new("bool"), list(&[1])).unwrap_err();
    assert_eq!(
        error,
        Error::NotConforming {
            operation: Operation::Zero,
            tag: Tag::new("bool"),
            typeclass: tagclass::dispatch::Typeclass::Monoid,
        }
    );
}
