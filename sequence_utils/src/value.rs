//! Dynamic Value type
//!
//! This module provides the `Value` enum used for heterogeneous
//! sequences such as `[1, 5, "x", NaN, 10]`, where elements of
//! different kinds share one container.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::record::Record;
use crate::sequence::Sequence;

/// Dynamically typed element
///
/// Arrays and objects are shared references; two of them are equal only
/// when they are the same allocation. An array may contain itself; such
/// cycles render as `[Circular]`.
#[derive(Clone, Default)]
pub enum Value {
    // ========== Primitive Types ==========
    /// Absent value (what an empty slot reads as)
    #[default]
    Undefined,
    /// Explicit null marker
    Null,
    /// Boolean
    Bool(bool),
    /// Double precision number
    Number(f64),
    /// String
    Str(String),

    // ========== Heap-Allocated Types ==========
    /// Array (shared, mutable)
    Array(Rc<RefCell<Sequence<Value>>>),
    /// Object (shared, mutable)
    Object(Rc<RefCell<Record<Value>>>),
}

impl Value {
    /// Wrap a sequence into a shared array value
    pub fn array(seq: Sequence<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(seq)))
    }

    /// Wrap a record into a shared object value
    pub fn object(record: Record<Value>) -> Self {
        Value::Object(Rc::new(RefCell::new(record)))
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Check if this value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is NaN
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Try to extract as f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to extract as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to extract as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Dynamic truthiness
    ///
    /// `undefined`, `null`, `false`, `0`, `-0`, `NaN` and `""` are falsy;
    /// everything else, including empty arrays and objects, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Strict equality: no coercion, `NaN` never equal, `+0` equals `-0`
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Same-value-zero equality: strict equality where `NaN` equals `NaN`
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.strict_equals(other),
        }
    }
}

// ========== From implementations ==========

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<Sequence<Value>> for Value {
    fn from(v: Sequence<Value>) -> Self {
        Value::array(v)
    }
}

impl From<Record<Value>> for Value {
    fn from(v: Record<Value>) -> Self {
        Value::object(v)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

// ========== Cycle detection ==========

thread_local! {
    static ACTIVE: RefCell<Vec<*const ()>> = const { RefCell::new(Vec::new()) };
}

/// Marks a shared array/object as being rendered on this thread.
///
/// `enter` returns `None` when the allocation is already being rendered,
/// i.e. the value is reachable from itself. The mark is removed on drop.
#[derive(Debug)]
pub(crate) struct CycleGuard {
    ptr: *const (),
}

impl CycleGuard {
    pub(crate) fn enter<T: ?Sized>(rc: &Rc<T>) -> Option<CycleGuard> {
        let ptr = Rc::as_ptr(rc) as *const ();
        ACTIVE.with(|active| {
            let mut active = active.borrow_mut();
            if active.contains(&ptr) {
                None
            } else {
                active.push(ptr);
                Some(CycleGuard { ptr })
            }
        })
    }
}

impl Drop for CycleGuard {
    fn drop(&mut self) {
        ACTIVE.with(|active| {
            let mut active = active.borrow_mut();
            if let Some(pos) = active.iter().rposition(|p| *p == self.ptr) {
                active.remove(pos);
            }
        });
    }
}

const CIRCULAR: &str = "[Circular]";

/// Write a shared container, or `[Circular]` if it is already on the stack.
fn fmt_shared<T, F>(rc: &Rc<RefCell<T>>, f: &mut fmt::Formatter<'_>, write: F) -> fmt::Result
where
    F: FnOnce(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let Some(_guard) = CycleGuard::enter(rc) else {
        return write!(f, "{}", CIRCULAR);
    };
    match rc.try_borrow() {
        Ok(inner) => write(&inner, f),
        // Mutably borrowed further up the stack
        Err(_) => write!(f, "[Borrowed]"),
    }
}

// ========== Display implementation ==========

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Number(v) => {
                if v.is_nan() {
                    write!(f, "NaN")
                } else if v.is_infinite() {
                    write!(f, "{}Infinity", if *v < 0.0 { "-" } else { "" })
                } else {
                    // Integral numbers print without a fraction: 3, not 3.0
                    write!(f, "{}", v)
                }
            }
            Value::Str(s) => write!(f, "'{}'", s),
            Value::Array(arr) => fmt_shared(arr, f, |seq, f| write!(f, "{}", seq)),
            Value::Object(obj) => fmt_shared(obj, f, |record, f| write!(f, "{}", record)),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Number(v) => f.debug_tuple("Number").field(v).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Array(arr) => {
                write!(f, "Array(")?;
                fmt_shared(arr, f, |seq, f| fmt::Debug::fmt(seq, f))?;
                write!(f, ")")
            }
            Value::Object(obj) => {
                write!(f, "Object(")?;
                fmt_shared(obj, f, |record, f| fmt::Debug::fmt(record, f))?;
                write!(f, ")")
            }
        }
    }
}

// ========== PartialEq implementation ==========

/// `==` on values is strict equality, so `Value::Number(NaN) != Value::Number(NaN)`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}
