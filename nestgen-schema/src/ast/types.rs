//! Type definitions for the schema IR.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A half-open range of scanned line indices `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    /// First line of the range.
    pub start: usize,
    /// One past the last line of the range.
    pub end: usize,
}

impl LineRange {
    /// Create a new range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the range covers no lines.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the line indices in the range.
    pub fn iter(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Scalar kinds a field type token can classify to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    /// Text.
    String,
    /// True/false.
    Boolean,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    BigInt,
    /// Floating point number.
    Float,
    /// Arbitrary precision decimal.
    Decimal,
    /// A `Decimal` stored with a currency marker.
    Money,
    /// Date and time.
    DateTime,
    /// Free-form JSON value.
    Json,
    /// Binary data.
    Bytes,
    /// Anything the compiler does not understand.
    Unsupported,
}

impl ScalarType {
    /// Look up a bare type keyword in the scalar table.
    ///
    /// `Money` has no keyword of its own; it is derived from `Decimal` plus a
    /// storage marker by the classifier.
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "String" => Some(Self::String),
            "Boolean" => Some(Self::Boolean),
            "Int" => Some(Self::Int),
            "BigInt" => Some(Self::BigInt),
            "Float" => Some(Self::Float),
            "Decimal" => Some(Self::Decimal),
            "DateTime" => Some(Self::DateTime),
            "Json" => Some(Self::Json),
            "Bytes" => Some(Self::Bytes),
            "Unsupported" => Some(Self::Unsupported),
            _ => None,
        }
    }

    /// Get the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Int => "Int",
            Self::BigInt => "BigInt",
            Self::Float => "Float",
            Self::Decimal => "Decimal",
            Self::Money => "Money",
            Self::DateTime => "DateTime",
            Self::Json => "Json",
            Self::Bytes => "Bytes",
            Self::Unsupported => "Unsupported",
        }
    }

    /// The public, API-facing type.
    pub fn wire_type(&self) -> WireType {
        match self {
            Self::String | Self::Json | Self::Bytes | Self::Unsupported => WireType::String,
            Self::Boolean => WireType::Boolean,
            Self::Int => WireType::Int,
            Self::BigInt | Self::Float | Self::Decimal | Self::Money => WireType::Float,
            Self::DateTime => WireType::Date,
        }
    }

    /// The in-memory representation used by generated code.
    pub fn language_type(&self) -> LanguageType {
        match self {
            Self::String | Self::Unsupported => LanguageType::String,
            Self::Boolean => LanguageType::Boolean,
            Self::Int => LanguageType::Int,
            Self::BigInt => LanguageType::Int64,
            Self::Float => LanguageType::Float,
            Self::Decimal => LanguageType::Decimal,
            Self::Money => LanguageType::Currency,
            Self::DateTime => LanguageType::DateTime,
            Self::Json => LanguageType::Any,
            Self::Bytes => LanguageType::Bytes,
        }
    }

    /// Check if this is one of the decimal kinds.
    pub fn is_decimal(&self) -> bool {
        matches!(self, Self::Decimal | Self::Money)
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// API-facing type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireType {
    /// Text; also carries JSON, bytes and unsupported columns.
    String,
    /// True or false.
    Boolean,
    /// 32-bit integer.
    Int,
    /// Any non-integer number, plus `BigInt`.
    Float,
    /// Timestamp.
    Date,
}

impl WireType {
    /// Get the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Date => "Date",
        }
    }
}

impl std::fmt::Display for WireType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// In-memory representations of scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageType {
    /// Owned string.
    String,
    /// Boolean.
    Boolean,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Int64,
    /// Double-precision float.
    Float,
    /// Arbitrary-precision decimal.
    Decimal,
    /// Decimal carrying currency units.
    Currency,
    /// Date and time.
    DateTime,
    /// Opaque map or any value.
    Any,
    /// Raw bytes, encoded as a string.
    Bytes,
}

impl LanguageType {
    /// Get the descriptor as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Int => "number/int",
            Self::Int64 => "number/int64",
            Self::Float => "number/float",
            Self::Decimal => "decimal",
            Self::Currency => "decimal (currency)",
            Self::DateTime => "datetime",
            Self::Any => "opaque map/any",
            Self::Bytes => "string/bytes",
        }
    }
}

impl std::fmt::Display for LanguageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flat classification of a property's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// `String` scalar.
    String,
    /// `Boolean` scalar.
    Boolean,
    /// `Int` scalar.
    Int,
    /// `BigInt` scalar.
    BigInt,
    /// `Float` scalar.
    Float,
    /// `Decimal` scalar without a money marker.
    Decimal,
    /// `Decimal` scalar with a money marker.
    Money,
    /// `DateTime` scalar.
    DateTime,
    /// `Json` scalar.
    Json,
    /// `Bytes` scalar.
    Bytes,
    /// Unknown type name or the `Unsupported` keyword.
    Unsupported,
    /// Reference to a declared enum.
    Enum,
    /// Reference to a declared model.
    Relation,
}

impl From<ScalarType> for DataType {
    fn from(scalar: ScalarType) -> Self {
        match scalar {
            ScalarType::String => Self::String,
            ScalarType::Boolean => Self::Boolean,
            ScalarType::Int => Self::Int,
            ScalarType::BigInt => Self::BigInt,
            ScalarType::Float => Self::Float,
            ScalarType::Decimal => Self::Decimal,
            ScalarType::Money => Self::Money,
            ScalarType::DateTime => Self::DateTime,
            ScalarType::Json => Self::Json,
            ScalarType::Bytes => Self::Bytes,
            ScalarType::Unsupported => Self::Unsupported,
        }
    }
}

/// The classified type of a property.
///
/// The referenced enum or model name lives inside the variant, so a scalar
/// property can never carry a reference and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// A scalar from the fixed keyword table.
    Scalar(ScalarType),
    /// A reference to an enum declared in the schema.
    Enum(SmolStr),
    /// A reference to a model declared in the schema.
    Relation(SmolStr),
}

impl FieldType {
    /// Check if this is a scalar type.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Check if this is an enum type.
    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Check if this is a relation to another model.
    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Relation(_))
    }

    /// Get the flat data type.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Scalar(s) => (*s).into(),
            Self::Enum(_) => DataType::Enum,
            Self::Relation(_) => DataType::Relation,
        }
    }

    /// Name of the referenced enum, if any.
    pub fn enum_name(&self) -> Option<&str> {
        match self {
            Self::Enum(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Name of the referenced model, if any.
    pub fn relation_name(&self) -> Option<&str> {
        match self {
            Self::Relation(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Get the type name as a string.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Scalar(s) => s.as_str(),
            Self::Enum(name) | Self::Relation(name) => name.as_str(),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}
