//! Shared helpers for integration tests
// Not every test target uses every helper.
#![allow(dead_code)]

use sequence_utils::*;

/// `[1, 5, "x", NaN, 10]`
pub fn mixed_values() -> Sequence<Value> {
    seq![1, 5, "x", f64::NAN, 10]
}

/// `[1, "hello", 3, <hole>, 5]`
pub fn sparse_values() -> Sequence<Value> {
    seq![1, "hello", 3, _, 5]
}

/// Numeric addition combiner for `Value` folds; holes count as 0.
pub fn add_values(acc: Value, v: Option<&Value>, _: usize, _: &Sequence<Value>) -> Value {
    let lhs = acc.as_f64().unwrap_or(0.0);
    let rhs = v.and_then(Value::as_f64).unwrap_or(0.0);
    Value::from(lhs + rhs)
}

/// Record `{ name, sound }` inheriting `{ kingdom, legs }`.
pub fn dog_record() -> Record<Value> {
    let mut animal = Record::new();
    animal.insert("kingdom", Value::from("animalia"));
    animal.insert("legs", Value::from(4));

    let mut dog = Record::with_base(std::rc::Rc::new(animal));
    dog.insert("name", Value::from("rex"));
    dog.insert("sound", Value::from("woof"));
    dog
}
