//! ### English
//! Wire values exchanged with the scripting runtime, and argument decoding.
//!
//! ### 中文
//! 与脚本运行时交换的线上值，以及参数解码。

use std::collections::BTreeMap;
use std::sync::Arc;

use gleam::gl::{GLfloat, GLint, GLuint};

use super::error::{BridgeError, Result};
use super::object_table::ObjectId;

/// ### English
/// Element type of a typed array.
///
/// ### 中文
/// typed array 的元素类型。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypedArrayKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
}

impl TypedArrayKind {
    pub const fn element_size(self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 | Self::Uint8Clamped => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }
}

/// ### English
/// Typed array contents as raw native-endian bytes.
///
/// The bytes are immutable and reference counted, so capturing one into a queued operation is
/// either a refcount bump (shared) or a copy, depending on context configuration.
///
/// ### 中文
/// 以原生字节序原始字节表示的 typed array 内容。
///
/// 字节不可变且带引用计数，捕获到队列操作中时根据上下文配置选择共享（增加引用计数）或拷贝。
#[derive(Clone, Debug, PartialEq)]
pub struct TypedArray {
    pub kind: TypedArrayKind,
    pub bytes: Arc<[u8]>,
}

impl TypedArray {
    pub fn new(kind: TypedArrayKind, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
        }
    }

    pub fn from_u8(values: &[u8]) -> Self {
        Self::new(TypedArrayKind::Uint8, values)
    }

    pub fn from_f32(values: &[f32]) -> Self {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        Self::new(TypedArrayKind::Float32, bytes)
    }

    pub fn from_i32(values: &[i32]) -> Self {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        Self::new(TypedArrayKind::Int32, bytes)
    }

    pub fn from_u32(values: &[u32]) -> Self {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        Self::new(TypedArrayKind::Uint32, bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len() / self.kind.element_size()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// ### English
    /// Reinterprets the bytes as `f32` elements (trailing partial elements are dropped).
    ///
    /// ### 中文
    /// 将字节重新解释为 `f32` 元素（末尾不完整的元素会被丢弃）。
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.bytes
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    pub fn to_i32_vec(&self) -> Vec<i32> {
        self.bytes
            .chunks_exact(4)
            .map(|c| i32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    pub fn to_u32_vec(&self) -> Vec<u32> {
        self.bytes
            .chunks_exact(4)
            .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }
}

/// ### English
/// A dynamically typed value crossing the script boundary.
///
/// ### 中文
/// 跨越脚本边界的动态类型值。
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    TypedArray(TypedArray),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    pub fn object<const N: usize>(fields: [(&str, Value); N]) -> Self {
        Self::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value))
                .collect(),
        )
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Number(n) => Some(n),
            Self::Bool(b) => Some(f64::from(u8::from(b))),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_typed_array(&self) -> Option<&TypedArray> {
        match self {
            Self::TypedArray(array) => Some(array),
            _ => None,
        }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(fields) => fields.get(key),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<TypedArray> for Value {
    fn from(array: TypedArray) -> Self {
        Self::TypedArray(array)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Self::Number(f64::from(id.get()))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// ### English
/// Positional argument reader with script-style numeric conversion.
///
/// Numbers convert to GL integers through `i64` so both negative values and enums above
/// `i32::MAX` survive. Missing trailing arguments read as `undefined`.
///
/// ### 中文
/// 按位置读取参数，采用脚本风格的数值转换。
///
/// 数值经由 `i64` 转换为 GL 整数，从而负数与大于 `i32::MAX` 的枚举都能保留。缺失的尾部参数视为
/// `undefined`。
#[derive(Clone, Copy)]
pub struct Args<'a>(&'a [Value]);

impl<'a> Args<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> &'a Value {
        static UNDEFINED: Value = Value::Undefined;
        self.0.get(index).unwrap_or(&UNDEFINED)
    }

    pub fn f64(&self, index: usize) -> Result<f64> {
        match self.get(index) {
            Value::Undefined | Value::Null => Ok(0.0),
            value => value.as_f64().ok_or(BridgeError::InvalidArgument {
                index,
                expected: "number",
            }),
        }
    }

    pub fn f32(&self, index: usize) -> Result<GLfloat> {
        Ok(self.f64(index)? as f32)
    }

    pub fn i32(&self, index: usize) -> Result<GLint> {
        Ok(self.f64(index)? as i64 as i32)
    }

    pub fn u32(&self, index: usize) -> Result<GLuint> {
        Ok(self.f64(index)? as i64 as u32)
    }

    pub fn bool(&self, index: usize) -> Result<bool> {
        Ok(match self.get(index) {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::Undefined | Value::Null => false,
            _ => {
                return Err(BridgeError::InvalidArgument {
                    index,
                    expected: "boolean",
                });
            }
        })
    }

    pub fn string(&self, index: usize) -> Result<&'a str> {
        self.get(index).as_str().ok_or(BridgeError::InvalidArgument {
            index,
            expected: "string",
        })
    }

    /// ### English
    /// Reads an object reference; null, undefined and 0 mean "no object".
    ///
    /// ### 中文
    /// 读取对象引用；null、undefined 与 0 表示"无对象"。
    pub fn object_id(&self, index: usize) -> Result<Option<ObjectId>> {
        match self.get(index) {
            Value::Undefined | Value::Null => Ok(None),
            Value::Number(n) if *n >= 0.0 && *n <= f64::from(u32::MAX) => {
                Ok(ObjectId::from_raw(*n as u32))
            }
            _ => Err(BridgeError::InvalidArgument {
                index,
                expected: "object handle",
            }),
        }
    }

    pub fn typed_array(&self, index: usize) -> Result<&'a TypedArray> {
        self.get(index)
            .as_typed_array()
            .ok_or(BridgeError::InvalidArgument {
                index,
                expected: "typed array",
            })
    }

    /// ### English
    /// Reads a list of numbers from either a typed array or a plain array.
    ///
    /// ### 中文
    /// 从 typed array 或普通数组读取数值列表。
    pub fn f32_list(&self, index: usize) -> Result<Vec<f32>> {
        match self.get(index) {
            Value::TypedArray(array) if array.kind == TypedArrayKind::Float32 => {
                Ok(array.to_f32_vec())
            }
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_f64().map(|n| n as f32))
                .collect::<Option<_>>()
                .ok_or(BridgeError::InvalidArgument {
                    index,
                    expected: "array of numbers",
                }),
            _ => Err(BridgeError::InvalidArgument {
                index,
                expected: "Float32Array or array",
            }),
        }
    }

    pub fn i32_list(&self, index: usize) -> Result<Vec<i32>> {
        match self.get(index) {
            Value::TypedArray(array) if array.kind == TypedArrayKind::Int32 => {
                Ok(array.to_i32_vec())
            }
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_f64().map(|n| n as i64 as i32))
                .collect::<Option<_>>()
                .ok_or(BridgeError::InvalidArgument {
                    index,
                    expected: "array of numbers",
                }),
            _ => Err(BridgeError::InvalidArgument {
                index,
                expected: "Int32Array or array",
            }),
        }
    }

    pub fn u32_list(&self, index: usize) -> Result<Vec<u32>> {
        match self.get(index) {
            Value::TypedArray(array) if array.kind == TypedArrayKind::Uint32 => {
                Ok(array.to_u32_vec())
            }
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_f64().map(|n| n as i64 as u32))
                .collect::<Option<_>>()
                .ok_or(BridgeError::InvalidArgument {
                    index,
                    expected: "array of numbers",
                }),
            _ => Err(BridgeError::InvalidArgument {
                index,
                expected: "Uint32Array or array",
            }),
        }
    }

    pub fn string_list(&self, index: usize) -> Result<Vec<String>> {
        let invalid = BridgeError::InvalidArgument {
            index,
            expected: "array of strings",
        };
        match self.get(index) {
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect::<Option<_>>()
                .ok_or(invalid),
            _ => Err(invalid),
        }
    }
}
