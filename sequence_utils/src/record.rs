//! Keyed records and own-property extraction (`keys`, `values`).
//!
//! A `Record<V>` owns an ordered list of properties and may share a base
//! record. Lookups fall through to the base chain, but `keys` and `values`
//! only report properties the record owns directly and that are marked
//! enumerable, in insertion order.

use std::fmt;
use std::rc::Rc;

use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

/// A named property slot
#[derive(Debug, Clone, PartialEq)]
pub struct Property<V> {
    /// Property name
    pub name: String,
    /// Property value
    pub value: V,
    /// Whether `keys`/`values` report this property
    pub enumerable: bool,
}

/// String-keyed record with an optional shared base
#[derive(Debug, Clone, PartialEq)]
pub struct Record<V> {
    own: Vec<Property<V>>,
    base: Option<Rc<Record<V>>>,
}

impl<V> Record<V> {
    /// Create a record with no properties and no base
    pub fn new() -> Self {
        Record {
            own: Vec::new(),
            base: None,
        }
    }

    /// Create a record that inherits from `base`
    pub fn with_base(base: Rc<Record<V>>) -> Self {
        Record {
            own: Vec::new(),
            base: Some(base),
        }
    }

    /// The shared base record, if any
    pub fn base(&self) -> Option<&Rc<Record<V>>> {
        self.base.as_ref()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.own.iter().position(|p| p.name == name)
    }

    /// Set an own enumerable property.
    ///
    /// Re-inserting an existing name replaces its value in place and keeps
    /// its original position. Returns the previous value.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: V) -> Option<V> {
        let name = name.into();
        match self.position(&name) {
            Some(i) => Some(std::mem::replace(&mut self.own[i].value, value)),
            None => {
                self.own.push(Property {
                    name,
                    value,
                    enumerable: true,
                });
                None
            }
        }
    }

    /// Define an own property that `keys`/`values` skip.
    ///
    /// # Errors
    ///
    /// `SeqError::ArgumentError` if the record already owns `name`.
    pub fn define_hidden<S: Into<String>>(&mut self, name: S, value: V) -> SeqResult<()> {
        let name = name.into();
        if self.position(&name).is_some() {
            return Err(SeqError::argument_error(format!(
                "property `{}` is already defined",
                name
            )));
        }
        self.own.push(Property {
            name,
            value,
            enumerable: false,
        });
        Ok(())
    }

    /// Look up a property, own first, then along the base chain
    pub fn get(&self, name: &str) -> Option<&V> {
        match self.position(name) {
            Some(i) => Some(&self.own[i].value),
            None => self.base.as_ref().and_then(|base| base.get(name)),
        }
    }

    /// Check if the record itself owns `name`
    pub fn has_own(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove an own property, returning its value
    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.position(name).map(|i| self.own.remove(i).value)
    }

    /// Number of own properties, hidden ones included
    pub fn len(&self) -> usize {
        self.own.len()
    }

    /// Check if the record owns no properties
    pub fn is_empty(&self) -> bool {
        self.own.is_empty()
    }

    /// Own enumerable properties in enumeration order
    pub fn own_enumerable(&self) -> impl Iterator<Item = &Property<V>> + '_ {
        self.own.iter().filter(|p| p.enumerable)
    }
}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Record::new()
    }
}

impl<S: Into<String>, V> FromIterator<(S, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl<V: fmt::Display> fmt::Display for Record<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.own_enumerable().next().is_none() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        for (i, p) in self.own_enumerable().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", p.name, p.value)?;
        }
        write!(f, " }}")
    }
}

/// Names of the record's own enumerable properties, in enumeration order.
///
/// Inherited properties are never included.
pub fn keys<V>(record: &Record<V>) -> Sequence<String> {
    record.own_enumerable().map(|p| p.name.clone()).collect()
}

/// Values of the record's own enumerable properties, at the positions
/// `keys` reports their names.
pub fn values<V: Clone>(record: &Record<V>) -> Sequence<V> {
    record.own_enumerable().map(|p| p.value.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal() -> Rc<Record<i32>> {
        let mut base = Record::new();
        base.insert("legs", 4);
        base.insert("eyes", 2);
        Rc::new(base)
    }

    #[test]
    fn test_keys_and_values_in_insertion_order() {
        let r: Record<i32> = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
        assert_eq!(keys(&r), Sequence::from(vec!["b".to_string(), "a".into(), "c".into()]));
        assert_eq!(values(&r), Sequence::from(vec![2, 1, 3]));
    }

    #[test]
    fn test_inherited_properties_are_excluded() {
        let mut dog = Record::with_base(animal());
        dog.insert("name", 1);
        assert_eq!(dog.get("legs"), Some(&4));
        assert!(!dog.has_own("legs"));
        assert_eq!(keys(&dog), Sequence::from(vec!["name".to_string()]));
        assert_eq!(values(&dog), Sequence::from(vec![1]));
    }

    #[test]
    fn test_base_is_shared() {
        let base = animal();
        let cat = Record::with_base(Rc::clone(&base));
        assert!(cat.base().is_some_and(|b| Rc::ptr_eq(b, &base)));
        assert!(Record::<i32>::new().base().is_none());
    }

    #[test]
    fn test_own_property_shadows_base() {
        let mut bird = Record::with_base(animal());
        bird.insert("legs", 2);
        assert_eq!(bird.get("legs"), Some(&2));
        assert_eq!(keys(&bird).len(), 1);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut r = Record::new();
        r.insert("x", 1);
        r.insert("y", 2);
        assert_eq!(r.insert("x", 10), Some(1));
        assert_eq!(values(&r), Sequence::from(vec![10, 2]));
    }

    #[test]
    fn test_hidden_properties_are_skipped() {
        let mut r = Record::new();
        r.insert("shown", 1);
        r.define_hidden("hidden", 2).unwrap();
        assert_eq!(r.len(), 2);
        assert_eq!(r.get("hidden"), Some(&2));
        assert_eq!(keys(&r), Sequence::from(vec!["shown".to_string()]));
        assert!(r.define_hidden("shown", 3).is_err());
    }

    #[test]
    fn test_remove() {
        let mut r: Record<i32> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(r.remove("a"), Some(1));
        assert_eq!(r.remove("a"), None);
        assert_eq!(keys(&r), Sequence::from(vec!["b".to_string()]));
    }

    #[test]
    fn test_empty_record() {
        let r: Record<i32> = Record::new();
        assert!(keys(&r).is_empty());
        assert!(values(&r).is_empty());
        assert_eq!(format!("{}", r), "{}");
    }
}
