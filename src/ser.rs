//! Serializer that builds a [`Value`] directly.
//!
//! Going through `serde_json::Value` would turn non-finite floats into
//! `null`; this keeps every `f64` as a number.

use serde::ser::{self, Serialize};

use crate::error::RecordError;
use crate::record::{Record, Value};

pub(crate) struct ValueSerializer;

pub(crate) fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, RecordError> {
    value.serialize(ValueSerializer)
}

fn tagged(variant: Option<&'static str>, value: Value) -> Value {
    match variant {
        Some(name) => Value::Map(Record::new().with_field(name, value)),
        None => value,
    }
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = RecordError;

    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = SeqBuilder;
    type SerializeMap = RecordBuilder;
    type SerializeStruct = RecordBuilder;
    type SerializeStructVariant = RecordBuilder;

    fn serialize_bool(self, v: bool) -> Result<Value, RecordError> {
        Ok(Value::Boolean(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, RecordError> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, RecordError> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, RecordError> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, RecordError> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, RecordError> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, RecordError> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, RecordError> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, RecordError> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, RecordError> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, RecordError> {
        Ok(Value::Number(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, RecordError> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, RecordError> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, RecordError> {
        Ok(Value::Sequence(
            v.iter().map(|byte| Value::Number(f64::from(*byte))).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value, RecordError> {
        Ok(Value::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value, RecordError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, RecordError> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, RecordError> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Value, RecordError> {
        Ok(Value::Text(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, RecordError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, RecordError> {
        Ok(tagged(Some(variant), to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder, RecordError> {
        Ok(SeqBuilder::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder, RecordError> {
        Ok(SeqBuilder::new(len, None))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, RecordError> {
        Ok(SeqBuilder::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, RecordError> {
        Ok(SeqBuilder::new(len, Some(variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<RecordBuilder, RecordError> {
        Ok(RecordBuilder::new(None))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<RecordBuilder, RecordError> {
        Ok(RecordBuilder::new(None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<RecordBuilder, RecordError> {
        Ok(RecordBuilder::new(Some(variant)))
    }
}

pub(crate) struct SeqBuilder {
    items: Vec<Value>,
    variant: Option<&'static str>,
}

impl SeqBuilder {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        Self {
            items: Vec::with_capacity(len),
            variant,
        }
    }

    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RecordError> {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn finish(self) -> Value {
        tagged(self.variant, Value::Sequence(self.items))
    }
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RecordError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, RecordError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RecordError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, RecordError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SeqBuilder {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RecordError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, RecordError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SeqBuilder {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RecordError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, RecordError> {
        Ok(self.finish())
    }
}

pub(crate) struct RecordBuilder {
    record: Record,
    next_key: Option<String>,
    variant: Option<&'static str>,
}

impl RecordBuilder {
    fn new(variant: Option<&'static str>) -> Self {
        Self {
            record: Record::new(),
            next_key: None,
            variant,
        }
    }

    fn finish(self) -> Value {
        tagged(self.variant, Value::Map(self.record))
    }
}

impl ser::SerializeMap for RecordBuilder {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), RecordError> {
        let key = match to_value(key)? {
            Value::Text(text) => text,
            Value::Number(number) => number.to_string(),
            Value::Boolean(flag) => flag.to_string(),
            other => {
                return Err(RecordError::KeyNotText { kind: other.kind() });
            }
        };
        self.next_key = Some(key);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RecordError> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| <RecordError as ser::Error>::custom("map value without a key"))?;
        self.record.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, RecordError> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for RecordBuilder {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), RecordError> {
        self.record.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, RecordError> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for RecordBuilder {
    type Ok = Value;
    type Error = RecordError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), RecordError> {
        self.record.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, RecordError> {
        Ok(self.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ValueKind;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    enum Shape {
        Dot,
        Circle(f64),
        Line(f64, f64),
        Rect { width: f64, height: f64 },
    }

    #[test]
    fn test_non_finite_floats_stay_numbers() {
        assert_eq!(to_value(&f64::INFINITY).unwrap(), Value::Number(f64::INFINITY));
        assert_eq!(
            to_value(&f64::NEG_INFINITY).unwrap(),
            Value::Number(f64::NEG_INFINITY)
        );
        let nan = to_value(&f64::NAN).unwrap();
        assert!(nan.as_number().is_some_and(f64::is_nan));
    }

    #[test]
    fn test_enum_variants() {
        assert_eq!(to_value(&Shape::Dot).unwrap(), Value::from("Dot"));
        assert_eq!(
            to_value(&Shape::Circle(1.5)).unwrap(),
            Value::Map(Record::new().with_field("Circle", 1.5))
        );
        assert_eq!(
            to_value(&Shape::Line(1.0, 2.0)).unwrap(),
            Value::Map(Record::new().with_field("Line", vec![1.0, 2.0]))
        );
        let rect = Record::new().with_field("width", 2.0).with_field("height", 3.0);
        assert_eq!(
            to_value(&Shape::Rect { width: 2.0, height: 3.0 }).unwrap(),
            Value::Map(Record::new().with_field("Rect", Value::Map(rect)))
        );
    }

    #[test]
    fn test_options_and_units() {
        assert_eq!(to_value(&None::<u32>).unwrap(), Value::Null);
        assert_eq!(to_value(&Some("x")).unwrap(), Value::from("x"));
        assert_eq!(to_value(&()).unwrap(), Value::Null);
    }

    #[test]
    fn test_maps_keep_text_keys() {
        let mut map = BTreeMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        let value = to_value(&map).unwrap();
        let Value::Map(record) = value else {
            panic!("expected a map");
        };
        assert_eq!(record.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_sequence_keys_are_rejected() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "x");
        assert!(matches!(
            to_value(&map),
            Err(RecordError::KeyNotText {
                kind: ValueKind::Sequence
            })
        ));
    }
}
