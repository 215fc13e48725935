//! Ordered map type for object values.
//!
//! This module provides [`Map`], keyed by [`Key`] rather than plain text.
//! Integer keys keep their numeric kind instead of being flattened to a
//! string on entry, so the configured radix applies to keys exactly as it
//! does to values when the object is rendered.
//!
//! Entries keep insertion order (the storage is an [`IndexMap`]), but
//! rendering does not rely on it: the stringifier sorts rendered
//! `"key: value"` pairs before joining them, so output is deterministic even
//! for maps built from a [`HashMap`] with randomized iteration order.
//!
//! ## Examples
//!
//! ```rust
//! use serde_stringify::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("name", Value::from("Alice"));
//! map.insert(7, Value::from("lucky"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::{Equivalent, IndexMap};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Options, Value};

/// A map key.
///
/// String-like keys stay text; integer keys keep their numeric kind so the
/// configured [`Options::with_base`](crate::Options::with_base) applies when
/// the owning object is rendered.
///
/// # Examples
///
/// ```rust
/// use serde_stringify::{stringify_with_options, Map, Options, Value};
///
/// let mut map = Map::new();
/// map.insert(10, Value::from(1));
///
/// let rendered = stringify_with_options(&Value::Object(map), Options::new().with_base(2));
/// assert_eq!(rendered, "{1010: 1}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// A text key, rendered verbatim.
    String(String),
    /// A signed integer key, rendered in the configured radix.
    Int(i64),
    /// An unsigned integer key, rendered in the configured radix.
    UInt(u64),
    /// An arbitrary-width integer key, rendered in the configured radix.
    Big(BigInt),
}

impl Key {
    /// If this is a text key, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s),
            _ => None,
        }
    }
}

// String keys hash like their str form so lookups by `&str` find them.
impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Key::String(s) => s.as_str().hash(state),
            Key::Int(i) => i.hash(state),
            Key::UInt(u) => u.hash(state),
            Key::Big(b) => b.hash(state),
        }
    }
}

impl Equivalent<Key> for str {
    fn equivalent(&self, key: &Key) -> bool {
        matches!(key, Key::String(s) if s == self)
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Key::String(s) if s == other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Key::String(s) if s == other)
    }
}

impl fmt::Display for Key {
    /// Renders the key with default options, identically to how it appears
    /// inside a rendered object.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::stringify::render_key(self, &Options::default()))
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::String(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::String(value.to_string())
    }
}

impl From<BigInt> for Key {
    fn from(value: BigInt) -> Self {
        Key::Big(value)
    }
}

macro_rules! key_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(value: $ty) -> Self {
                    Key::Int(value as i64)
                }
            }
        )*
    };
}

macro_rules! key_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(value: $ty) -> Self {
                    Key::UInt(value as u64)
                }
            }
        )*
    };
}

key_from_signed!(i8, i16, i32, i64);
key_from_unsigned!(u8, u16, u32, u64);

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::String(s) => serializer.serialize_str(s),
            Key::Int(i) => serializer.serialize_i64(*i),
            Key::UInt(u) => serializer.serialize_u64(*u),
            Key::Big(b) => b.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;

        impl serde::de::Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer map key")
            }

            fn visit_str<E>(self, value: &str) -> Result<Key, E> {
                Ok(Key::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Key, E> {
                Ok(Key::String(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Key, E> {
                Ok(Key::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Key, E> {
                Ok(Key::UInt(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Key, E> {
                Ok(Key::Big(BigInt::from(value)))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Key, E> {
                Ok(Key::Big(BigInt::from(value)))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

/// An insertion-ordered map of keys to values.
///
/// # Examples
///
/// ```rust
/// use serde_stringify::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("first", Value::from(1));
/// map.insert("second", Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Map(IndexMap<Key, Value>);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    /// Creates an empty `Map` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_stringify::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// assert!(map.insert("key", Value::from(42)).is_none());
    /// assert!(map.insert("key", Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: impl Into<Key>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// Lookup by `&str` matches text keys only; an integer key is found via
    /// its [`Key`] form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_stringify::{Key, Map, Value};
    ///
    /// let mut map = Map::new();
    /// map.insert(1, Value::from("one"));
    /// assert_eq!(map.get(&Key::Int(1)).and_then(|v| v.as_str()), Some("one"));
    /// assert!(map.get("1").is_none());
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&Value>
    where
        Q: ?Sized + Hash + Equivalent<Key>,
    {
        self.0.get(key)
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// Preserves the relative order of the remaining entries.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Value>
    where
        Q: ?Sized + Hash + Equivalent<Key>,
    {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<Key>,
    {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.0.iter()
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, Value>> for Map {
    fn from(map: HashMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, Value>> for Map {
    fn from(map: BTreeMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<Key>> FromIterator<(K, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<Key>> Extend<(K, Value)> for Map {
    fn extend<T: IntoIterator<Item = (K, Value)>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}
