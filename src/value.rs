// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dynamically typed values for inputs that don't arrive as `&[T]`.
//!
//! Assertion frameworks and JSON documents hand the checker untyped values.
//! A `List` carries its declared element type, and construction refuses items
//! that don't conform, so "a sequence of a single element type" is a property
//! of the value rather than something re-checked on every comparison.
//!
//! # Element types
//!
//! | `ElemType`       | Admits                        | Comparable |
//! |------------------|-------------------------------|------------|
//! | `Null`..`Str`    | values of exactly that kind   | yes        |
//! | `Any`            | every value                   | yes        |
//! | `List(inner)`    | lists whose element is `inner`| no         |
//! | `Map`            | maps                          | no         |
//! | `Opaque(name)`   | opaque handles named `name`   | no         |

use std::collections::BTreeMap;
use std::fmt;

/// Declared type of the items in a [`List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElemType {
    Null,
    Bool,
    Int,
    Float,
    Str,
    /// Untyped element: any value may appear, compared structurally.
    Any,
    List(Box<ElemType>),
    Map,
    /// A foreign handle (callback, channel, ...) that has no notion of equality.
    Opaque(&'static str),
}

impl ElemType {
    /// Can two elements of this type be compared with `==`?
    ///
    /// Containers and opaque handles can't. `Any` can: its values are
    /// compared structurally whatever they hold.
    pub fn is_comparable(&self) -> bool {
        !matches!(self, ElemType::List(_) | ElemType::Map | ElemType::Opaque(_))
    }

    /// Does `value` conform to this element type?
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            ElemType::Any => true,
            other => value.type_of() == *other,
        }
    }
}

impl fmt::Display for ElemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElemType::Null => write!(f, "null"),
            ElemType::Bool => write!(f, "bool"),
            ElemType::Int => write!(f, "int"),
            ElemType::Float => write!(f, "float"),
            ElemType::Str => write!(f, "string"),
            ElemType::Any => write!(f, "any"),
            ElemType::List(inner) => write!(f, "[]{}", inner),
            ElemType::Map => write!(f, "map"),
            ElemType::Opaque(name) => write!(f, "{}", name),
        }
    }
}

/// Error building a [`List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An item doesn't conform to the list's declared element type.
    Heterogeneous {
        index: usize,
        elem: ElemType,
        found: ElemType,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::Heterogeneous { index, elem, found } => {
                write!(
                    f,
                    "list item {} has type {}, expected {}",
                    index, found, elem
                )
            }
        }
    }
}

impl std::error::Error for ValueError {}

/// An ordered list whose items all conform to `elem`.
#[derive(Clone, PartialEq)]
pub struct List {
    elem: ElemType,
    items: Vec<Value>,
}

impl List {
    /// Build a list with a declared element type, checking every item.
    pub fn new(elem: ElemType, items: Vec<Value>) -> Result<Self, ValueError> {
        if let Some(index) = items.iter().position(|item| !elem.admits(item)) {
            return Err(ValueError::Heterogeneous {
                index,
                found: items[index].type_of(),
                elem,
            });
        }
        Ok(Self { elem, items })
    }

    /// Build an untyped list. Never fails.
    pub fn any(items: Vec<Value>) -> Self {
        Self {
            elem: ElemType::Any,
            items,
        }
    }

    /// Build a list whose element type is inferred from its items.
    ///
    /// Empty lists and lists mixing types get `Any`.
    pub fn infer(items: Vec<Value>) -> Self {
        let mut types = items.iter().map(Value::type_of);
        let elem = match types.next() {
            Some(first) if types.all(|t| t == first) => first,
            _ => ElemType::Any,
        };
        Self { elem, items }
    }

    pub fn elem_type(&self) -> &ElemType {
        &self.elem
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

/// A dynamically typed value.
#[derive(Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(List),
    Map(BTreeMap<String, Value>),
    Opaque(&'static str),
}

impl Value {
    /// The element type this value would have inside a list.
    pub fn type_of(&self) -> ElemType {
        match self {
            Value::Null => ElemType::Null,
            Value::Bool(_) => ElemType::Bool,
            Value::Int(_) => ElemType::Int,
            Value::Float(_) => ElemType::Float,
            Value::Str(_) => ElemType::Str,
            Value::List(list) => ElemType::List(Box::new(list.elem.clone())),
            Value::Map(_) => ElemType::Map,
            Value::Opaque(name) => ElemType::Opaque(*name),
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Untyped list, the analogue of a `[]any`.
    pub fn any_list(items: Vec<Value>) -> Self {
        Value::List(List::any(items))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::List(list) => fmt::Debug::fmt(list, f),
            Value::Map(map) => f.debug_map().entries(map).finish(),
            Value::Opaque(name) => write!(f, "<{}>", name),
        }
    }
}

/// Rust types with a fixed dynamic element type.
///
/// Lets `Vec<T>` convert into a typed `Value::List` even when it's empty.
pub trait Typed: Into<Value> {
    fn elem_type() -> ElemType;
}

macro_rules! typed_scalar {
    ($($ty:ty => $variant:ident($conv:expr)),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant($conv(v))
                }
            }

            impl Typed for $ty {
                fn elem_type() -> ElemType {
                    ElemType::$variant
                }
            }
        )*
    };
}

typed_scalar! {
    bool => Bool(std::convert::identity),
    u8 => Int(i64::from),
    i32 => Int(i64::from),
    u32 => Int(i64::from),
    i64 => Int(std::convert::identity),
    f64 => Float(std::convert::identity),
    String => Str(std::convert::identity),
    &str => Str(str::to_string),
}

impl Typed for Value {
    fn elem_type() -> ElemType {
        ElemType::Any
    }
}

impl<T: Typed> Typed for Vec<T> {
    fn elem_type() -> ElemType {
        ElemType::List(Box::new(T::elem_type()))
    }
}

impl<T: Typed> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(List {
            elem: T::elem_type(),
            items: items.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::List(list)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

#[cfg(feature = "json")]
mod json {
    use super::{List, Value};

    impl From<serde_json::Value> for Value {
        /// Integers that fit `i64` become `Int`; every other number is a `Float`.
        fn from(json: serde_json::Value) -> Self {
            match json {
                serde_json::Value::Null => Value::Null,
                serde_json::Value::Bool(b) => Value::Bool(b),
                serde_json::Value::Number(n) => match n.as_i64() {
                    Some(i) => Value::Int(i),
                    None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
                },
                serde_json::Value::String(s) => Value::Str(s),
                serde_json::Value::Array(items) => {
                    Value::List(List::infer(items.into_iter().map(Value::from).collect()))
                }
                serde_json::Value::Object(map) => Value::Map(
                    map.into_iter()
                        .map(|(key, value)| (key, Value::from(value)))
                        .collect(),
                ),
            }
        }
    }

    impl Value {
        /// Parse a JSON document into a dynamic value.
        pub fn from_json_str(text: &str) -> Result<Value, serde_json::Error> {
            serde_json::from_str::<serde_json::Value>(text).map(Value::from)
        }
    }
}
