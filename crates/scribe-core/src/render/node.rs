//! Lossless intermediate form for rendering
//!
//! [`to_node`] runs a value's `Serialize` impl against [`NodeSerializer`] and
//! keeps every scalar as it was given: 128-bit integers stay exact, NaN and
//! infinities stay floats, and mapping keys keep their own kind and order.

use std::fmt;

use serde::ser::{self, Serialize};
use thiserror::Error;

/// A serialized value, ready to be laid out as text
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Int(i128),
    UInt(u128),
    Float(f64),
    Str(String),
    Seq(Vec<Node>),
    Map(Vec<(Node, Node)>),
}

impl Node {
    pub fn is_collection(&self) -> bool {
        matches!(self, Node::Seq(_) | Node::Map(_))
    }

    /// Bare text of a scalar; collections give `None`
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Node::Null => Some("null".to_string()),
            Node::Bool(flag) => Some(flag.to_string()),
            Node::Int(n) => Some(n.to_string()),
            Node::UInt(n) => Some(n.to_string()),
            Node::Float(x) => Some(float_text(*x)),
            Node::Str(text) => Some(text.clone()),
            Node::Seq(_) | Node::Map(_) => None,
        }
    }

    /// Single-line text for any node, used where a collection has to fit on
    /// one line (a mapping key built from a tuple, for instance)
    pub fn inline_text(&self) -> String {
        match self {
            Node::Seq(items) => {
                let parts: Vec<String> = items.iter().map(Node::inline_text).collect();
                format!("[{}]", parts.join(", "))
            }
            Node::Map(entries) => {
                let parts: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k.inline_text(), v.inline_text()))
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
            scalar => scalar.scalar_text().unwrap_or_default(),
        }
    }
}

/// `NAN`, `INF`, `-INF`, or the shortest text that reads back as `x`
///
/// Finite values always carry a `.` or exponent so they never look like integers.
pub fn float_text(x: f64) -> String {
    if x.is_nan() {
        "NAN".to_string()
    } else if x.is_infinite() {
        if x > 0.0 { "INF" } else { "-INF" }.to_string()
    } else {
        format!("{:?}", x)
    }
}

/// Raised only by `Serialize` impls that fail on their own
#[derive(Error, Debug)]
#[error("{0}")]
pub struct NodeError(String);

impl ser::Error for NodeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        NodeError(msg.to_string())
    }
}

/// Lower any serializable value into a [`Node`]
pub fn to_node<T: Serialize + ?Sized>(value: &T) -> Result<Node, NodeError> {
    value.serialize(NodeSerializer)
}

fn tagged(variant: &str, inner: Node) -> Node {
    Node::Map(vec![(Node::Str(variant.to_string()), inner)])
}

/// Serializer producing [`Node`] trees
///
/// Enum layouts follow the usual externally tagged convention: unit variants
/// become their name, other variants a one-entry map from name to content.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeSerializer;

impl ser::Serializer for NodeSerializer {
    type Ok = Node;
    type Error = NodeError;
    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = SeqBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = MapBuilder;
    type SerializeStructVariant = MapBuilder;

    fn serialize_bool(self, v: bool) -> Result<Node, NodeError> {
        Ok(Node::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Node, NodeError> {
        Ok(Node::Int(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Node, NodeError> {
        Ok(Node::Int(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Node, NodeError> {
        Ok(Node::Int(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Node, NodeError> {
        Ok(Node::Int(v.into()))
    }

    fn serialize_i128(self, v: i128) -> Result<Node, NodeError> {
        Ok(Node::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Node, NodeError> {
        Ok(Node::UInt(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Node, NodeError> {
        Ok(Node::UInt(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Node, NodeError> {
        Ok(Node::UInt(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Node, NodeError> {
        Ok(Node::UInt(v.into()))
    }

    fn serialize_u128(self, v: u128) -> Result<Node, NodeError> {
        Ok(Node::UInt(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Node, NodeError> {
        // via text, so 0.1f32 stays 0.1 instead of 0.10000000149011612
        let widened = if v.is_finite() {
            v.to_string().parse::<f64>().unwrap_or_else(|_| f64::from(v))
        } else {
            f64::from(v)
        };
        Ok(Node::Float(widened))
    }

    fn serialize_f64(self, v: f64) -> Result<Node, NodeError> {
        Ok(Node::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Node, NodeError> {
        Ok(Node::Str(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Node, NodeError> {
        Ok(Node::Str(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Node, NodeError> {
        Ok(Node::Seq(v.iter().map(|b| Node::UInt((*b).into())).collect()))
    }

    fn serialize_none(self) -> Result<Node, NodeError> {
        Ok(Node::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Node, NodeError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Node, NodeError> {
        Ok(Node::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Node, NodeError> {
        Ok(Node::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Node, NodeError> {
        Ok(Node::Str(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Node, NodeError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Node, NodeError> {
        Ok(tagged(variant, value.serialize(self)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder, NodeError> {
        Ok(SeqBuilder::new(None, len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder, NodeError> {
        Ok(SeqBuilder::new(None, len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, NodeError> {
        Ok(SeqBuilder::new(None, len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, NodeError> {
        Ok(SeqBuilder::new(Some(variant), len))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapBuilder, NodeError> {
        Ok(MapBuilder::new(None, len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<MapBuilder, NodeError> {
        Ok(MapBuilder::new(None, len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<MapBuilder, NodeError> {
        Ok(MapBuilder::new(Some(variant), len))
    }
}

/// Collects sequence, tuple and tuple-variant elements
pub struct SeqBuilder {
    variant: Option<&'static str>,
    items: Vec<Node>,
}

impl SeqBuilder {
    fn new(variant: Option<&'static str>, capacity: usize) -> Self {
        Self {
            variant,
            items: Vec::with_capacity(capacity),
        }
    }

    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NodeError> {
        self.items.push(value.serialize(NodeSerializer)?);
        Ok(())
    }

    fn finish(self) -> Node {
        let seq = Node::Seq(self.items);
        match self.variant {
            Some(variant) => tagged(variant, seq),
            None => seq,
        }
    }
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Node;
    type Error = NodeError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NodeError> {
        self.push(value)
    }

    fn end(self) -> Result<Node, NodeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Node;
    type Error = NodeError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NodeError> {
        self.push(value)
    }

    fn end(self) -> Result<Node, NodeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SeqBuilder {
    type Ok = Node;
    type Error = NodeError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NodeError> {
        self.push(value)
    }

    fn end(self) -> Result<Node, NodeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SeqBuilder {
    type Ok = Node;
    type Error = NodeError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NodeError> {
        self.push(value)
    }

    fn end(self) -> Result<Node, NodeError> {
        Ok(self.finish())
    }
}

/// Collects map, struct and struct-variant entries in insertion order
pub struct MapBuilder {
    variant: Option<&'static str>,
    entries: Vec<(Node, Node)>,
    pending_key: Option<Node>,
}

impl MapBuilder {
    fn new(variant: Option<&'static str>, capacity: usize) -> Self {
        Self {
            variant,
            entries: Vec::with_capacity(capacity),
            pending_key: None,
        }
    }

    fn push_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), NodeError> {
        let value = value.serialize(NodeSerializer)?;
        self.entries.push((Node::Str(key.to_string()), value));
        Ok(())
    }

    fn finish(self) -> Node {
        let map = Node::Map(self.entries);
        match self.variant {
            Some(variant) => tagged(variant, map),
            None => map,
        }
    }
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Node;
    type Error = NodeError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), NodeError> {
        self.pending_key = Some(key.serialize(NodeSerializer)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NodeError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| NodeError("map value serialized before its key".to_string()))?;
        let value = value.serialize(NodeSerializer)?;
        self.entries.push((key, value));
        Ok(())
    }

    fn end(self) -> Result<Node, NodeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for MapBuilder {
    type Ok = Node;
    type Error = NodeError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), NodeError> {
        self.push_field(key, value)
    }

    fn end(self) -> Result<Node, NodeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for MapBuilder {
    type Ok = Node;
    type Error = NodeError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), NodeError> {
        self.push_field(key, value)
    }

    fn end(self) -> Result<Node, NodeError> {
        Ok(self.finish())
    }
}
