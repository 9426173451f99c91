//! Conversions between enum values and integers.

use crate::enumeration::Enumeration;
use crate::error::{Error, ErrorKind, Result};
use crate::underlying::{Underlying, UnderlyingKind};
use crate::validate::is_valid_value;
use std::convert::TryFrom;

/// Returns the underlying value of `value` as an `i32`.
///
/// Fails with [`ErrorKind::ConversionOverflow`] if the underlying value does not fit, which
/// can only happen for enums backed by `u32`, `i64` or `u64`.
pub fn to_int<E: Enumeration>(value: E) -> Result<i32> {
    let raw = value.to_underlying();

    i32::try_from(raw.to_i128()).map_err(|e| {
        Error::new(
            ErrorKind::ConversionOverflow {
                target: UnderlyingKind::I32,
            },
            E::TYPE_NAME,
        )
        .with_input(raw)
        .with_source(e)
        .traced()
    })
}

/// Like [`to_int`], failing with [`ErrorKind::NullInput`] if `value` is `None`.
pub fn to_int_nullable<E: Enumeration>(value: Option<E>) -> Result<i32> {
    match value {
        Some(value) => to_int(value),
        None => Err(Error::new(ErrorKind::NullInput, E::TYPE_NAME).traced()),
    }
}

/// Returns the underlying value of `value` as `U`, which must be exactly the declared
/// underlying type of `E`.
///
/// Requesting any other type fails with [`ErrorKind::TypeMismatch`], even when the value would
/// fit.
///
/// # Example
///
/// ```
/// use enumconv::{convert, define_enum, ErrorKind};
///
/// define_enum! {
///     pub struct Level(u8) {
///         (1, LOW, Low),
///         (2, HIGH, High),
///     }
/// }
///
/// assert_eq!(convert::to_value::<_, u8>(Level::HIGH).ok(), Some(2));
///
/// let error = convert::to_value::<_, i32>(Level::HIGH).unwrap_err();
/// assert!(matches!(error.kind(), ErrorKind::TypeMismatch { .. }));
/// ```
pub fn to_value<E, U>(value: E) -> Result<U>
where
    E: Enumeration,
    U: Underlying,
{
    let declared = <E::Underlying as Underlying>::KIND;

    if U::KIND != declared {
        return Err(Error::new(
            ErrorKind::TypeMismatch {
                requested: U::KIND,
                declared,
            },
            E::TYPE_NAME,
        )
        .with_input(value.to_underlying())
        .traced());
    }

    Ok(U::from_bits(value.to_underlying().to_bits()))
}

/// Converts an integer of any width to `E`.
///
/// Fails with [`ErrorKind::ConversionOverflow`] if `value` is out of range for the underlying
/// type of `E`. If `validate` is set, also fails with [`ErrorKind::UndefinedValue`] unless the
/// value is defined (see [`is_valid_value`]).
pub fn to_enum<E, N>(value: N, validate: bool) -> Result<E>
where
    E: Enumeration,
    N: Underlying,
{
    from_i128(value.to_i128(), validate)
}

// Shared by integer and numeric-string conversions.
pub(crate) fn from_i128<E: Enumeration>(value: i128, validate: bool) -> Result<E> {
    let raw = E::Underlying::from_i128(value).ok_or_else(|| {
        Error::new(
            ErrorKind::ConversionOverflow {
                target: <E::Underlying as Underlying>::KIND,
            },
            E::TYPE_NAME,
        )
        .with_input(value)
        .traced()
    })?;

    if validate && !is_valid_value::<E>(raw) {
        return Err(Error::new(ErrorKind::UndefinedValue, E::TYPE_NAME)
            .with_input(raw)
            .traced());
    }

    Ok(E::from_underlying(raw))
}

/// Like [`to_enum`], mapping `None` to `Ok(None)`.
pub fn to_enum_nullable<E, N>(value: Option<N>, validate: bool) -> Result<Option<E>>
where
    E: Enumeration,
    N: Underlying,
{
    value.map(|value| to_enum(value, validate)).transpose()
}

/// Like [`try_to_enum`], mapping `None` to `None`.
pub fn try_to_enum_nullable<E, N>(value: Option<N>) -> Option<E>
where
    E: Enumeration,
    N: Underlying,
{
    value.and_then(try_to_enum)
}

/// Converts an integer to a defined value of `E`, returning `None` on any failure.
pub fn try_to_enum<E, N>(value: N) -> Option<E>
where
    E: Enumeration,
    N: Underlying,
{
    to_enum(value, true).ok()
}

/// Like [`try_to_enum`], returning a success flag along with either the converted value or
/// `default`.
pub fn try_to_enum_or<E, N>(value: N, default: E) -> (bool, E)
where
    E: Enumeration,
    N: Underlying,
{
    match try_to_enum(value) {
        Some(value) => (true, value),
        None => (false, default),
    }
}
