//! Element comparison strategies used by the search utilities.
//!
//! Two modes are supported:
//!
//! - `EqMode::Strict`: no coercion, `NaN` is never equal to anything
//!   (itself included) and `+0` equals `-0`. Used by `index_of` and
//!   `last_index_of`.
//! - `EqMode::SameValueZero`: strict equality except that `NaN` equals
//!   `NaN`. Used by `includes`.
//!
//! For types without a `NaN` the two modes agree.

use crate::value::Value;

/// Equality mode for element comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EqMode {
    /// `===`-style equality
    #[default]
    Strict,
    /// NaN-aware equality
    SameValueZero,
}

/// Element types that can be compared under an `EqMode`
pub trait SeqEq {
    /// Compare two elements under `mode`
    fn seq_eq(&self, other: &Self, mode: EqMode) -> bool;

    /// Whether an empty slot reads as this value.
    ///
    /// `includes` matches such a target against holes; no other search does.
    fn reads_as_hole(&self) -> bool {
        false
    }
}

/// Compare two elements under `mode`
pub fn equals<T: SeqEq + ?Sized>(a: &T, b: &T, mode: EqMode) -> bool {
    a.seq_eq(b, mode)
}

macro_rules! impl_seq_eq_exact {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SeqEq for $ty {
                #[inline]
                fn seq_eq(&self, other: &Self, _mode: EqMode) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_seq_eq_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SeqEq for $ty {
                #[inline]
                fn seq_eq(&self, other: &Self, mode: EqMode) -> bool {
                    match mode {
                        EqMode::Strict => self == other,
                        EqMode::SameValueZero => {
                            self == other || (self.is_nan() && other.is_nan())
                        }
                    }
                }
            }
        )*
    };
}

impl_seq_eq_exact!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String);
impl_seq_eq_float!(f32, f64);

impl SeqEq for &str {
    #[inline]
    fn seq_eq(&self, other: &Self, _mode: EqMode) -> bool {
        self == other
    }
}

impl<T: SeqEq> SeqEq for Option<T> {
    fn seq_eq(&self, other: &Self, mode: EqMode) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.seq_eq(b, mode),
            (None, None) => true,
            _ => false,
        }
    }
}

impl SeqEq for Value {
    fn seq_eq(&self, other: &Self, mode: EqMode) -> bool {
        match mode {
            EqMode::Strict => self.strict_equals(other),
            EqMode::SameValueZero => self.same_value_zero(other),
        }
    }

    fn reads_as_hole(&self) -> bool {
        self.is_undefined()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_modes() {
        assert!(!equals(&f64::NAN, &f64::NAN, EqMode::Strict));
        assert!(equals(&f64::NAN, &f64::NAN, EqMode::SameValueZero));
        assert!(equals(&0.0f64, &-0.0f64, EqMode::Strict));
        assert!(equals(&0.0f32, &-0.0f32, EqMode::SameValueZero));
        assert!(!equals(&1.0f64, &f64::NAN, EqMode::SameValueZero));
    }

    #[test]
    fn test_exact_types_ignore_mode() {
        for mode in [EqMode::Strict, EqMode::SameValueZero] {
            assert!(equals(&3i64, &3i64, mode));
            assert!(!equals("a", "b", mode));
            assert!(equals(&String::from("x"), &String::from("x"), mode));
        }
    }

    #[test]
    fn test_option_elements() {
        assert!(equals(&None::<f64>, &None, EqMode::Strict));
        assert!(equals(&Some(f64::NAN), &Some(f64::NAN), EqMode::SameValueZero));
        assert!(!equals(&Some(f64::NAN), &Some(f64::NAN), EqMode::Strict));
    }

    #[test]
    fn test_value_modes() {
        let nan = Value::from(f64::NAN);
        assert!(!equals(&nan, &nan, EqMode::Strict));
        assert!(equals(&nan, &nan, EqMode::SameValueZero));
        assert!(!equals(&Value::from(1), &Value::from("1"), EqMode::SameValueZero));
        assert!(Value::Undefined.reads_as_hole());
        assert!(!Value::Null.reads_as_hole());
        assert!(!1i32.reads_as_hole());
    }
}
