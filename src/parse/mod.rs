//! Parsing enum values from strings.
//!
//! Input is trimmed, then interpreted in this order:
//!
//! 1. If it starts like a signed integer literal, it is converted as a number and must be a
//!    defined value.
//! 2. Otherwise it is matched against the declared member names.
//! 3. If it contains commas, each trimmed segment must match a member name, and the result is
//!    the bitwise OR of the matched members. A single unmatched segment fails the whole parse,
//!    and the combined value must itself be defined.

mod comparison;

pub use self::comparison::Comparison;

use crate::convert;
use crate::enumeration::Enumeration;
use crate::error::{Error, ErrorKind, Result};
use crate::underlying::Underlying;
use crate::validate::is_valid_value;
use std::num::IntErrorKind;

/// Parses an optional string, failing with [`ErrorKind::EmptyOrWhitespaceInput`] for `None`.
pub fn parse<E: Enumeration>(input: Option<&str>, mode: impl Into<Comparison>) -> Result<E> {
    match input {
        Some(input) => parse_str(input, mode),
        None => Err(Error::new(ErrorKind::EmptyOrWhitespaceInput, E::TYPE_NAME).traced()),
    }
}

/// Parses `input` as a value of `E`.
///
/// No allocation happens on success unless a culture-aware, case-insensitive [`Comparison`] is
/// used.
///
/// # Example
///
/// ```
/// use enumconv::{define_enum, parse, ErrorKind};
///
/// define_enum! {
///     pub struct OrderStatus(i32) {
///         (1, PENDING, Pending),
///         (2, SHIPPED, Shipped),
///         (3, DELIVERED, Delivered),
///     }
/// }
///
/// assert_eq!(
///     parse::parse_str::<OrderStatus>(" delivered ", true).ok(),
///     Some(OrderStatus::DELIVERED)
/// );
/// assert_eq!(
///     parse::parse_str::<OrderStatus>("2", false).ok(),
///     Some(OrderStatus::SHIPPED)
/// );
///
/// let error = parse::parse_str::<OrderStatus>("999", false).unwrap_err();
/// assert_eq!(error.kind(), &ErrorKind::UndefinedValue);
///
/// let error = parse::parse_str::<OrderStatus>("unknown", true).unwrap_err();
/// assert_eq!(error.kind(), &ErrorKind::NoMatchingMember);
/// ```
pub fn parse_str<E: Enumeration>(input: &str, mode: impl Into<Comparison>) -> Result<E> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(Error::new(ErrorKind::EmptyOrWhitespaceInput, E::TYPE_NAME)
            .with_input(input)
            .traced());
    }

    if starts_numeric(trimmed) {
        return parse_numeric(trimmed);
    }

    let mode = mode.into();

    if let Some(value) = find_member::<E>(trimmed, mode) {
        return Ok(value);
    }

    if trimmed.contains(',') {
        return parse_combination(trimmed, mode);
    }

    Err(no_matching_member::<E>(trimmed))
}

/// Like [`parse_str`], returning `None` on any failure.
pub fn try_parse<E: Enumeration>(input: &str, mode: impl Into<Comparison>) -> Option<E> {
    parse_str(input, mode).ok()
}

/// Like [`parse`], returning `None` on any failure.
pub fn parse_nullable<E: Enumeration>(
    input: Option<&str>,
    mode: impl Into<Comparison>,
) -> Option<E> {
    parse(input, mode).ok()
}

fn starts_numeric(input: &str) -> bool {
    matches!(input.as_bytes().first(), Some(b'0'..=b'9' | b'+' | b'-'))
}

fn parse_numeric<E: Enumeration>(literal: &str) -> Result<E> {
    let value = literal.parse::<i128>().map_err(|e| {
        let kind = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ErrorKind::ConversionOverflow {
                    target: <E::Underlying as Underlying>::KIND,
                }
            }
            _ => ErrorKind::NoMatchingMember,
        };

        Error::new(kind, E::TYPE_NAME)
            .with_input(literal)
            .with_source(e)
            .traced()
    })?;

    convert::from_i128(value, true)
}

fn parse_combination<E: Enumeration>(input: &str, mode: Comparison) -> Result<E> {
    let mut bits = 0;

    for segment in input.split(',') {
        let segment = segment.trim();
        let member = find_member::<E>(segment, mode)
            .ok_or_else(|| no_matching_member::<E>(segment))?;

        bits |= member.to_underlying().to_bits();
    }

    let value = E::Underlying::from_bits(bits);

    // Only reachable for simple enums: OR-ing flag members always stays within the mask.
    if !is_valid_value::<E>(value) {
        return Err(Error::new(ErrorKind::UndefinedValue, E::TYPE_NAME)
            .with_input(input)
            .traced());
    }

    Ok(E::from_underlying(value))
}

fn find_member<E: Enumeration>(name: &str, mode: Comparison) -> Option<E> {
    E::MEMBERS
        .iter()
        .find(|member| mode.matches(member.name(), name))
        .map(|member| member.value())
}

fn no_matching_member<E: Enumeration>(input: &str) -> Error {
    Error::new(ErrorKind::NoMatchingMember, E::TYPE_NAME)
        .with_input(input)
        .traced()
}
