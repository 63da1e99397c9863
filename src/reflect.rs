//! Dotted property-path lookup (`"Address.City"`) over serializable values.
//!
//! Objects are reflected by serializing them to [`serde_json::Value`]; the walk
//! itself only needs the [`PropertySource`] capability.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReflectError {
    #[error("Could not get property value because calling object is null (path '{path}', at '{segment}')")]
    NullTarget { path: String, segment: String },
    #[error("Property '{path}' cannot be read as {expected}: {message}")]
    TypeMismatch {
        path: String,
        expected: String,
        message: String,
    },
    #[error("Failed to reflect object: {0}")]
    Serialize(String),
}

pub type ReflectResult<T> = Result<T, ReflectError>;

/// Named field lookup on a runtime value.
pub trait PropertySource {
    fn get_field(&self, name: &str) -> Option<&Value>;
}

impl PropertySource for Value {
    fn get_field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(name),
            Value::Array(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumMessage,
    strum::EnumIter,
)]
pub enum PropertyKind {
    #[strum(message = "null value")]
    Null,
    #[strum(message = "boolean")]
    Bool,
    #[strum(message = "number")]
    Number,
    #[strum(message = "text")]
    String,
    #[strum(message = "list")]
    Array,
    #[strum(message = "object")]
    Object,
}

impl PropertyKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => PropertyKind::Null,
            Value::Bool(_) => PropertyKind::Bool,
            Value::Number(_) => PropertyKind::Number,
            Value::String(_) => PropertyKind::String,
            Value::Array(_) => PropertyKind::Array,
            Value::Object(_) => PropertyKind::Object,
        }
    }
}

/// Descriptor of the property a path resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyInfo {
    pub name: String,
    pub path: String,
    pub kind: PropertyKind,
}

fn to_value<T: Serialize + ?Sized>(obj: &T) -> ReflectResult<Value> {
    serde_json::to_value(obj).map_err(|e| ReflectError::Serialize(e.to_string()))
}

fn walk<'v>(root: Option<&'v Value>, path: &str) -> ReflectResult<Option<&'v Value>> {
    let mut current = root;
    for segment in path.split('.') {
        let target = match current {
            Some(value) if !value.is_null() => value,
            _ => {
                return Err(ReflectError::NullTarget {
                    path: path.to_string(),
                    segment: segment.to_string(),
                })
            }
        };
        match target.get_field(segment) {
            Some(value) => current = Some(value),
            None => {
                debug!(path, segment, "property not found");
                return Ok(None);
            }
        }
    }
    Ok(current)
}

/// Resolves `path` against `obj`.
///
/// Fails with [`ReflectError::NullTarget`] when `obj` or an intermediate value
/// is absent; returns `Ok(None)` when a named property does not exist.
#[tracing::instrument(level = "debug", skip(obj), err)]
pub fn get_prop_value<T: Serialize + ?Sized>(
    obj: Option<&T>,
    path: &str,
) -> ReflectResult<Option<Value>> {
    let root = obj.map(to_value).transpose()?;
    walk(root.as_ref(), path).map(|value| value.cloned())
}

/// Typed variant of [`get_prop_value`]. Missing or `null` values give `R::default()`.
pub fn get_prop_value_as<R, T>(obj: Option<&T>, path: &str) -> ReflectResult<R>
where
    R: DeserializeOwned + Default,
    T: Serialize + ?Sized,
{
    match get_prop_value(obj, path)? {
        None | Some(Value::Null) => Ok(R::default()),
        Some(value) => serde_json::from_value(value).map_err(|e| ReflectError::TypeMismatch {
            path: path.to_string(),
            expected: std::any::type_name::<R>().to_string(),
            message: e.to_string(),
        }),
    }
}

/// Describes the property at `path`, or `None` if the root is absent or the
/// path cannot be followed.
pub fn get_property<T: Serialize + ?Sized>(obj: Option<&T>, path: &str) -> Option<PropertyInfo> {
    let root = to_value(obj?).ok()?;
    let value = walk(Some(&root), path).ok().flatten()?;
    Some(PropertyInfo {
        name: path.rsplit('.').next().unwrap_or(path).to_string(),
        path: path.to_string(),
        kind: PropertyKind::of(value),
    })
}

/// Property-path access as methods on any serializable value.
pub trait Reflect: Serialize {
    fn prop_value(&self, path: &str) -> ReflectResult<Option<Value>> {
        get_prop_value(Some(self), path)
    }

    fn prop_value_as<R: DeserializeOwned + Default>(&self, path: &str) -> ReflectResult<R> {
        get_prop_value_as(Some(self), path)
    }

    fn property(&self, path: &str) -> Option<PropertyInfo> {
        get_property(Some(self), path)
    }
}

impl<T: Serialize + ?Sized> Reflect for T {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::describe::Describe;

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Address {
        city: String,
        zip: Option<String>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct TestObject {
        property1: String,
        property2: i32,
        address: Option<Address>,
        tags: Vec<String>,
    }

    fn sample() -> TestObject {
        TestObject {
            property1: "TestValue".to_string(),
            property2: 100,
            address: Some(Address {
                city: "Madison".to_string(),
                zip: None,
            }),
            tags: vec!["a".to_string(), "b".to_string()],
        }
    }

    #[test]
    fn test_get_prop_value() {
        let obj = sample();
        assert_eq!(
            get_prop_value(Some(&obj), "Property1").unwrap(),
            Some(json!("TestValue"))
        );
        assert_eq!(
            get_prop_value(Some(&obj), "Address.City").unwrap(),
            Some(json!("Madison"))
        );
        assert_eq!(
            get_prop_value(Some(&obj), "Tags.1").unwrap(),
            Some(json!("b"))
        );
    }

    #[test]
    fn test_missing_property_is_none() {
        let obj = sample();
        assert_eq!(get_prop_value(Some(&obj), "Property3").unwrap(), None);
        assert_eq!(get_prop_value(Some(&obj), "Nope.Deeper").unwrap(), None);
        assert_eq!(get_prop_value(Some(&obj), "Property1.Length").unwrap(), None);
    }

    #[test]
    fn test_null_root_fails() {
        let err = get_prop_value::<TestObject>(None, "Property1").unwrap_err();
        assert_eq!(
            err,
            ReflectError::NullTarget {
                path: "Property1".to_string(),
                segment: "Property1".to_string()
            }
        );
    }

    #[test]
    fn test_null_intermediate_fails() {
        let obj = sample();
        let err = get_prop_value(Some(&obj), "Address.Zip.Code").unwrap_err();
        assert!(matches!(err, ReflectError::NullTarget { segment, .. } if segment == "Code"));
    }

    #[test]
    fn test_typed_value() {
        let obj = sample();
        assert_eq!(get_prop_value_as::<i32, _>(Some(&obj), "Property2").unwrap(), 100);
        assert_eq!(get_prop_value_as::<i32, _>(Some(&obj), "Property3").unwrap(), 0);
        assert_eq!(
            get_prop_value_as::<String, _>(Some(&obj), "Address.Zip").unwrap(),
            ""
        );
    }

    #[test]
    fn test_typed_value_mismatch() {
        let obj = sample();
        let err = get_prop_value_as::<i32, _>(Some(&obj), "Property1").unwrap_err();
        assert!(matches!(
            err,
            ReflectError::TypeMismatch { ref expected, .. } if expected == "i32"
        ));
    }

    #[test]
    fn test_typed_value_null_root() {
        assert!(matches!(
            get_prop_value_as::<i32, TestObject>(None, "Property1"),
            Err(ReflectError::NullTarget { .. })
        ));
    }

    #[test]
    fn test_get_property() {
        let obj = sample();
        let info = get_property(Some(&obj), "Property1").unwrap();
        assert_eq!(info.name, "Property1");
        assert_eq!(info.kind, PropertyKind::String);

        let nested = get_property(Some(&obj), "Address.City").unwrap();
        assert_eq!(nested.name, "City");
        assert_eq!(nested.path, "Address.City");

        assert_eq!(get_property::<TestObject>(None, "Property1"), None);
        assert_eq!(get_property(Some(&obj), "Missing"), None);
    }

    #[test]
    fn test_reflect_trait() {
        let obj = sample();
        assert_eq!(obj.prop_value_as::<i32>("Property2").unwrap(), 100);
        assert_eq!(obj.property("Tags").map(|p| p.kind), Some(PropertyKind::Array));
        let value = json!({ "a": { "b": true } });
        assert_eq!(value.prop_value("a.b").unwrap(), Some(json!(true)));
    }

    #[test]
    fn test_kind_descriptions() {
        assert_eq!(PropertyKind::String.description(), "text");
        assert_eq!(PropertyKind::Object.to_string(), "Object");
    }
}
