//! Parameter values bound to named placeholders.

use std::collections::HashMap;

/// A scalar value bound to one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Null,
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for BindValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// One placeholder and its value.
///
/// The placeholder is stored without its leading `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub placeholder: String,
    pub value: BindValue,
}

/// Placeholder bindings for one statement, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingSet {
    entries: Vec<Binding>,
    index: HashMap<String, usize>,
}

impl BindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Binds `value` to `placeholder`, returning the value it replaced.
    pub fn insert(
        &mut self,
        placeholder: impl Into<String>,
        value: impl Into<BindValue>,
    ) -> Option<BindValue> {
        let placeholder = placeholder.into();
        let value = value.into();
        if let Some(&position) = self.index.get(&placeholder) {
            return Some(std::mem::replace(&mut self.entries[position].value, value));
        }
        self.index.insert(placeholder.clone(), self.entries.len());
        self.entries.push(Binding { placeholder, value });
        None
    }

    pub fn get(&self, placeholder: &str) -> Option<&BindValue> {
        self.index
            .get(placeholder)
            .map(|&position| &self.entries[position].value)
    }

    pub fn contains(&self, placeholder: &str) -> bool {
        self.index.contains_key(placeholder)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a BindingSet {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
