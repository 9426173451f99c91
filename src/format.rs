//! Formatting enum values as member names.

use crate::enumeration::{Enumeration, Member};
use crate::underlying::Underlying;

/// Returns the name of the first declared member equal to `value`.
pub fn name_of<E: Enumeration>(value: E) -> Option<&'static str> {
    E::MEMBERS
        .iter()
        .find(|member| member.value() == value)
        .map(Member::name)
}

/// Formats `value` as a string.
///
/// An exact member formats as its name. For flag enums, a combination of members formats as
/// their names in ascending order of value, separated by `", "`. Anything else formats as the
/// decimal underlying value. Output for defined values parses back to the same value.
///
/// # Example
///
/// ```
/// use enumconv::{define_flags, format};
///
/// define_flags! {
///     pub struct Permissions(u8) {
///         (1, READ, Read),
///         (2, WRITE, Write),
///         (4, EXECUTE, Execute),
///     }
/// }
///
/// assert_eq!(format::format(Permissions::READ), "Read");
/// assert_eq!(format::format(Permissions::READ | Permissions::EXECUTE), "Read, Execute");
/// assert_eq!(format::format(Permissions::new(9)), "9");
/// ```
pub fn format<E: Enumeration>(value: E) -> String {
    if let Some(name) = name_of(value) {
        return name.to_owned();
    }

    if E::FLAGS {
        if let Some(names) = format_flags(value) {
            return names;
        }
    }

    value.to_underlying().to_string()
}

// Greedy decomposition from the largest member down. `None` if any bit is left over.
fn format_flags<E: Enumeration>(value: E) -> Option<String> {
    let mut remaining = value.to_underlying().to_bits();

    if remaining == 0 {
        return None;
    }

    let mut members: Vec<&Member<E>> = E::MEMBERS
        .iter()
        .filter(|member| member.bits() != 0)
        .collect();
    members.sort_by(|a, b| b.bits().cmp(&a.bits()));

    let mut picked = Vec::new();

    for member in members {
        let bits = member.bits();

        if remaining & bits == bits {
            remaining &= !bits;
            picked.push(member.name());
        }
    }

    if remaining != 0 {
        return None;
    }

    picked.reverse();
    Some(picked.join(", "))
}

/// Declared member names, in declaration order.
pub fn names<E: Enumeration>() -> impl Iterator<Item = &'static str> {
    E::MEMBERS.iter().map(Member::name)
}

/// Declared members, in declaration order.
pub fn values<E: Enumeration>() -> impl Iterator<Item = E> {
    E::MEMBERS.iter().map(Member::value)
}
