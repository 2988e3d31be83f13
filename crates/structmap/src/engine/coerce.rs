use structmap_core::{schema::ConvertTarget, Error, Result, Type, Value};

use std::fmt;

/// Parses `text` as the kind named by a conversion directive.
///
/// Integers are radix 10 and range checked against the target width.
/// Unsigned targets reject any sign. The empty string never parses.
pub(super) fn convert(text: &str, directive: &str) -> Result<(Value, Type)> {
    let Some(target) = ConvertTarget::parse(directive) else {
        return Err(Error::unsupported_conversion(directive));
    };

    let fail = |cause: Box<dyn std::error::Error + Send + Sync>| {
        Error::conversion_failed(text, target.as_str(), cause)
    };

    macro_rules! parse {
        (unsigned $variant:ident, $ty:ty) => {{
            if text.starts_with('+') {
                return Err(fail(Box::new(UnexpectedSign)));
            }
            parse!($variant, $ty)
        }};
        ($variant:ident, $ty:ty) => {
            Value::$variant(text.parse::<$ty>().map_err(|e| fail(Box::new(e)))?)
        };
    }

    let value = match target {
        ConvertTarget::Int => parse!(ISize, isize),
        ConvertTarget::Int8 => parse!(I8, i8),
        ConvertTarget::Int16 => parse!(I16, i16),
        ConvertTarget::Int32 => parse!(I32, i32),
        ConvertTarget::Int64 => parse!(I64, i64),
        ConvertTarget::Uint => parse!(unsigned USize, usize),
        ConvertTarget::Uint8 => parse!(unsigned U8, u8),
        ConvertTarget::Uint16 => parse!(unsigned U16, u16),
        ConvertTarget::Uint32 => parse!(unsigned U32, u32),
        ConvertTarget::Uint64 => parse!(unsigned U64, u64),
        ConvertTarget::Float32 => parse!(F32, f32),
        ConvertTarget::Float64 => parse!(F64, f64),
        ConvertTarget::Bool => Value::Bool(parse_bool(text).map_err(|e| fail(Box::new(e)))?),
    };

    Ok((value, target.ty()))
}

fn parse_bool(text: &str) -> core::result::Result<bool, InvalidBool> {
    match text {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(InvalidBool),
    }
}

#[derive(Debug)]
struct InvalidBool;

impl fmt::Display for InvalidBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid boolean syntax")
    }
}

impl std::error::Error for InvalidBool {}

#[derive(Debug)]
struct UnexpectedSign;

impl fmt::Display for UnexpectedSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unsigned value must not carry a sign")
    }
}

impl std::error::Error for UnexpectedSign {}
