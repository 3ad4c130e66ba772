use std::collections::HashMap;

use crate::ast::ValueType;

/// Parse-time record of every variable declared so far and its declared type.
///
/// A registry belongs to one session and is handed to
/// [`parse`](crate::interpreter::parser::core::parse) by mutable borrow, so
/// declarations made on one interactive line are visible to the next. Only
/// successful `let` declarations add entries; entries are never removed.
///
/// ```
/// use pancake::{ast::ValueType, interpreter::registry::TypeRegistry};
///
/// let mut registry = TypeRegistry::new();
/// registry.declare("count", ValueType::Int);
///
/// assert_eq!(registry.lookup("count"), Some(ValueType::Int));
/// assert_eq!(registry.lookup("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, ValueType>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` with its declared type, returning the type it had
    /// before if it was already declared.
    pub fn declare(&mut self, name: impl Into<String>, ty: ValueType) -> Option<ValueType> {
        self.types.insert(name.into(), ty)
    }

    /// The declared type of `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ValueType> {
        self.types.get(name).copied()
    }

    /// Whether `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of declared names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no name has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
