//! Tagged value tree: null, boolean, number, string, array, object.
//!
//! Every node is owned by exactly one parent (an array slot, an object
//! entry, or the caller holding the root). Dropping a node destroys its
//! children first, then the container.

use crate::error::{Error, Result};
use crate::object::Object;

/// A document node.
#[derive(Debug, Default, PartialEq)]
pub enum Value {
    /// No payload.
    #[default]
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// Double-precision number.
    Number(f64),
    /// Owned byte string. The length is authoritative; no terminator is
    /// stored.
    String(Box<[u8]>),
    /// Ordered list of owned children.
    Array(Array),
    /// Key/value pairs stored in a [`HashTable`](crate::HashTable).
    Object(Object),
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl Value {
    /// Creates a null value.
    #[must_use]
    pub const fn null() -> Self {
        Self::Null
    }

    /// Creates a boolean value.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Creates a number value.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a string value holding a copy of `bytes`.
    #[must_use]
    pub fn string(bytes: impl AsRef<[u8]>) -> Self {
        Self::String(bytes.as_ref().into())
    }

    /// Creates an empty array.
    #[must_use]
    pub fn array() -> Self {
        Self::Array(Array::new())
    }

    /// Creates an empty object.
    #[must_use]
    pub fn object() -> Self {
        Self::Object(Object::new())
    }
}

// ---------------------------------------------------------------------------
// In-place reconstruction
//
// Each `make_*` first resets the node to null, dropping whatever payload it
// held, then installs the new variant.
// ---------------------------------------------------------------------------

impl Value {
    /// Resets the node to null, destroying its previous payload.
    pub fn make_null(&mut self) -> &mut Self {
        *self = Self::Null;
        self
    }

    /// Turns the node into a boolean.
    pub fn make_boolean(&mut self, value: bool) -> &mut Self {
        self.make_null();
        *self = Self::Boolean(value);
        self
    }

    /// Turns the node into a number.
    pub fn make_number(&mut self, value: f64) -> &mut Self {
        self.make_null();
        *self = Self::Number(value);
        self
    }

    /// Turns the node into a string holding a copy of `bytes`.
    pub fn make_string(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        self.make_null();
        *self = Self::string(bytes);
        self
    }

    /// Turns the node into an empty array.
    pub fn make_array(&mut self) -> &mut Self {
        self.make_null();
        *self = Self::array();
        self
    }

    /// Turns the node into an empty object.
    pub fn make_object(&mut self) -> &mut Self {
        self.make_null();
        *self = Self::object();
        self
    }

    /// Destroys the payload recursively and leaves the node null.
    pub fn destroy(&mut self) {
        self.make_null();
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl Value {
    /// Name of the variant, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean payload.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number payload.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string bytes.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::String(bytes) => Some(&bytes[..]),
            _ => None,
        }
    }

    /// Returns the array payload.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the array payload mutably.
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the object payload.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the object payload mutably.
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the array payload mutably, or an error naming the actual
    /// variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedType`] if the node is not an array.
    pub fn try_array_mut(&mut self) -> Result<&mut Array> {
        let found = self.type_name();
        self.as_array_mut().ok_or(Error::UnexpectedType {
            expected: "array",
            found,
        })
    }

    /// Returns the object payload mutably, or an error naming the actual
    /// variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedType`] if the node is not an object.
    pub fn try_object_mut(&mut self) -> Result<&mut Object> {
        let found = self.type_name();
        self.as_object_mut().ok_or(Error::UnexpectedType {
            expected: "object",
            found,
        })
    }

    /// Returns the array element at `index`; `None` if out of range or if
    /// the node is not an array.
    #[must_use]
    pub fn array_get(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    /// Returns the value under `key`; `None` if absent or if the node is
    /// not an object.
    #[must_use]
    pub fn object_get(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value.into_bytes().into_boxed_slice())
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Array(Array { items })
    }
}

// ---------------------------------------------------------------------------
// Array
// ---------------------------------------------------------------------------

/// Growable list of owned values.
#[derive(Debug, Default, PartialEq)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the array has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `value`, taking ownership of it.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Returns the element at `index` without transferring ownership.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Returns the element at `index` mutably.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Removes the last element and hands it back.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
