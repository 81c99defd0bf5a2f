//! Entity property access for filtering, sorting and cell rendering
//!
//! The renderer and updater never inspect entity types directly; they go
//! through the [`Entity`] trait, which hands out [`PropertyValue`]s keyed by
//! the same property names the column configuration uses.

use std::cmp::Ordering;
use std::fmt;

/// A typed cell value extracted from an entity
///
/// Carries enough type information to sort numerically where the underlying
/// property is numeric, while still rendering to the string form used for
/// filtering and cell content. A missing value renders as the empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	/// No value; renders as an empty cell
	Null,
	/// Boolean property
	Bool(bool),
	/// Integer property
	Int(i64),
	/// Floating point property
	Float(f64),
	/// String property
	Text(String),
}

impl PropertyValue {
	/// Compares two values by the natural order of their type
	///
	/// Values of the same variant compare natively (integers numerically,
	/// floats by total order, strings lexicographically). Integers and floats
	/// compare with each other numerically. Any other mixed pair falls back
	/// to comparing string forms, so the ordering is total.
	pub fn natural_cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Null, Self::Null) => Ordering::Equal,
			(Self::Null, _) => Ordering::Less,
			(_, Self::Null) => Ordering::Greater,
			(Self::Bool(a), Self::Bool(b)) => a.cmp(b),
			(Self::Int(a), Self::Int(b)) => a.cmp(b),
			(Self::Float(a), Self::Float(b)) => a.total_cmp(b),
			(Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b),
			(Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)),
			(Self::Text(a), Self::Text(b)) => a.cmp(b),
			(a, b) => a.to_string().cmp(&b.to_string()),
		}
	}

	/// Returns true when the value is [`PropertyValue::Null`]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl fmt::Display for PropertyValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Bool(value) => write!(f, "{value}"),
			Self::Int(value) => write!(f, "{value}"),
			Self::Float(value) => write!(f, "{value}"),
			Self::Text(value) => f.write_str(value),
		}
	}
}

impl From<bool> for PropertyValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for PropertyValue {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}

impl From<i64> for PropertyValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<f64> for PropertyValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for PropertyValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for PropertyValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl<T> From<Option<T>> for PropertyValue
where
	T: Into<PropertyValue>,
{
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Self::Null)
	}
}

/// Property access by name for table entities
///
/// Column keys, filter properties and sort properties all resolve through
/// this trait. Implementations return [`PropertyValue::Null`] for property
/// names they do not recognize.
///
/// # Examples
///
/// ```
/// use bootstrap_table::{Entity, PropertyValue};
///
/// struct User {
///     name: String,
///     age: i64,
/// }
///
/// impl Entity for User {
///     fn property(&self, name: &str) -> PropertyValue {
///         match name {
///             "Name" => self.name.as_str().into(),
///             "Age" => self.age.into(),
///             _ => PropertyValue::Null,
///         }
///     }
/// }
/// ```
pub trait Entity {
	/// Returns the value of the named property
	fn property(&self, name: &str) -> PropertyValue;
}
