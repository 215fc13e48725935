//! Conversion from arbitrary serde-serializable types into [`Value`].
//!
//! This is how foreign types enter the stringifier without a hand-written
//! conversion: any `T: Serialize` funnels through [`ValueSerializer`] into
//! the dynamic model, where structs and maps become objects, sequences and
//! tuples become arrays, and `()`/`None` become null. A plain record with no
//! display capability therefore renders through its serde shape, e.g.
//! `{x: 1, y: 10}` for a two-field struct; that textual form is best-effort
//! and not part of the stable contract.
//!
//! Enum representation follows the externally-tagged convention: unit
//! variants render as their name, and newtype/tuple/struct variants become a
//! single-entry object keyed by the variant name.
//!
//! ## Usage
//!
//! Most users should use [`to_value`](crate::to_value) or
//! [`stringify_any`](crate::stringify_any) from the crate root:
//!
//! ```rust
//! use serde::Serialize;
//! use serde_stringify::{stringify_any, to_value};
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 1, y: 10 }).unwrap();
//! assert!(value.is_object());
//! assert_eq!(stringify_any(&Point { x: 1, y: 10 }).unwrap(), "{x: 1, y: 10}");
//! ```

use crate::{Error, Key, Map, Number, Result, Value};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// Serializer whose output is a [`Value`] tree.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeValueMap {
    map: Map,
    current_key: Option<Key>,
}

pub struct SerializeTupleVariantValue {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeStructVariantValue {
    variant: &'static str,
    map: Map,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariantValue;
    type SerializeMap = SerializeValueMap;
    type SerializeStruct = SerializeValueMap;
    type SerializeStructVariant = SerializeStructVariantValue;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Int(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Int(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Int(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Int(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::Number(Number::Big(BigInt::from(v))))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::UInt(v as u64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::UInt(v as u64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::UInt(v as u64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(Number::UInt(v)))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::Number(Number::Big(BigInt::from(v))))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        // byte sequences are text to the stringifier, not numeric lists
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut map = Map::with_capacity(1);
        map.insert(variant, value.serialize(ValueSerializer)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariantValue> {
        Ok(SerializeTupleVariantValue {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeValueMap> {
        Ok(SerializeValueMap {
            map: Map::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeValueMap> {
        Ok(SerializeValueMap {
            map: Map::new(),
            current_key: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariantValue> {
        Ok(SerializeStructVariantValue {
            variant,
            map: Map::new(),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariantValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = Map::with_capacity(1);
        map.insert(self.variant, Value::Array(self.vec));
        Ok(Value::Object(map))
    }
}

impl ser::SerializeMap for SerializeValueMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeValueMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariantValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = Map::with_capacity(1);
        map.insert(self.variant, Value::Object(self.map));
        Ok(Value::Object(map))
    }
}

/// Serializer for map keys.
///
/// Strings and chars become text keys; integers keep their numeric kind so
/// the configured radix applies when the owning object is rendered. Anything
/// else is an [`Error::InvalidKey`].
struct KeySerializer;

macro_rules! key_from_signed {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<Key> {
                Ok(Key::Int(v as i64))
            }
        )*
    };
}

macro_rules! key_from_unsigned {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<Key> {
                Ok(Key::UInt(v as u64))
            }
        )*
    };
}

impl ser::Serializer for KeySerializer {
    type Ok = Key;
    type Error = Error;

    type SerializeSeq = ser::Impossible<Key, Error>;
    type SerializeTuple = ser::Impossible<Key, Error>;
    type SerializeTupleStruct = ser::Impossible<Key, Error>;
    type SerializeTupleVariant = ser::Impossible<Key, Error>;
    type SerializeMap = ser::Impossible<Key, Error>;
    type SerializeStruct = ser::Impossible<Key, Error>;
    type SerializeStructVariant = ser::Impossible<Key, Error>;

    key_from_signed! {
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
    }

    key_from_unsigned! {
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
    }

    fn serialize_i128(self, v: i128) -> Result<Key> {
        Ok(Key::Big(BigInt::from(v)))
    }

    fn serialize_u128(self, v: u128) -> Result<Key> {
        Ok(Key::Big(BigInt::from(v)))
    }

    fn serialize_bool(self, v: bool) -> Result<Key> {
        Ok(Key::String(v.to_string()))
    }

    fn serialize_char(self, v: char) -> Result<Key> {
        Ok(Key::String(v.to_string()))
    }

    fn serialize_f32(self, _v: f32) -> Result<Key> {
        Err(Error::invalid_key("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Key> {
        Err(Error::invalid_key("float"))
    }

    fn serialize_str(self, v: &str) -> Result<Key> {
        Ok(Key::String(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Key> {
        Err(Error::invalid_key("bytes"))
    }

    fn serialize_none(self) -> Result<Key> {
        Err(Error::invalid_key("none"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Key>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Key> {
        Err(Error::invalid_key("unit"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Key> {
        Err(Error::invalid_key("unit struct"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Key> {
        Ok(Key::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Key>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Key>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::invalid_key("newtype variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::invalid_key("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::invalid_key("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::invalid_key("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::invalid_key("tuple variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::invalid_key("map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::invalid_key("struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::invalid_key("struct variant"))
    }
}

#[cfg(test)]
mod tests {
    use crate::{to_value, Key, Number, Value};
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Segment(f64, f64),
        Rect { w: f64, h: f64 },
    }

    #[test]
    fn test_struct_becomes_object() {
        let value = to_value(&Point { x: 1, y: 10 }).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("x"), Some(&Value::Number(Number::Int(1))));
        assert_eq!(obj.get("y"), Some(&Value::Number(Number::Int(10))));
    }

    #[test]
    fn test_unit_variant_becomes_name() {
        assert_eq!(
            to_value(&Shape::Empty).unwrap(),
            Value::String("Empty".to_string())
        );
    }

    #[test]
    fn test_variants_become_tagged_objects() {
        let circle = to_value(&Shape::Circle(1.0)).unwrap();
        let obj = circle.as_object().unwrap();
        assert_eq!(obj.get("Circle"), Some(&Value::Number(Number::Float(1.0))));

        let segment = to_value(&Shape::Segment(0.0, 1.0)).unwrap();
        let arr = segment
            .as_object()
            .and_then(|o| o.get("Segment"))
            .and_then(Value::as_array)
            .unwrap();
        assert_eq!(arr.len(), 2);

        let rect = to_value(&Shape::Rect { w: 2.0, h: 3.0 }).unwrap();
        let inner = rect
            .as_object()
            .and_then(|o| o.get("Rect"))
            .and_then(Value::as_object)
            .unwrap();
        assert_eq!(inner.get("w"), Some(&Value::Number(Number::Float(2.0))));
    }

    #[test]
    fn test_u64_stays_unsigned() {
        assert_eq!(
            to_value(&u64::MAX).unwrap(),
            Value::Number(Number::UInt(u64::MAX))
        );
    }

    #[test]
    fn test_wide_integers_widen_to_big() {
        let value = to_value(&(1u128 << 100)).unwrap();
        assert!(matches!(value, Value::Number(Number::Big(_))));
    }

    #[test]
    fn test_option_and_unit() {
        assert_eq!(to_value(&None::<i32>).unwrap(), Value::Null);
        assert_eq!(to_value(&Some(5)).unwrap(), Value::Number(Number::Int(5)));
        assert_eq!(to_value(&()).unwrap(), Value::Null);
    }

    #[test]
    fn test_integer_map_keys_keep_their_kind() {
        let map: BTreeMap<i32, &str> = BTreeMap::from([(1, "one"), (2, "two")]);
        let value = to_value(&map).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get(&Key::Int(1)).and_then(Value::as_str), Some("one"));
        assert_eq!(obj.get(&Key::Int(2)).and_then(Value::as_str), Some("two"));
        // the numeric key is not a text key
        assert!(obj.get("1").is_none());
    }

    #[test]
    fn test_wide_map_keys_widen_to_big() {
        let map: BTreeMap<u128, &str> = BTreeMap::from([(1u128 << 70, "wide")]);
        let value = to_value(&map).unwrap();
        let obj = value.as_object().unwrap();
        let (key, _) = obj.iter().next().unwrap();
        assert!(matches!(key, Key::Big(_)));
    }

    #[test]
    fn test_tuple_becomes_array() {
        let value = to_value(&(1, "two", true)).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[1], Value::String("two".to_string()));
    }
}
