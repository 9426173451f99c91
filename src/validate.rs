//! Checks for whether a value is a defined member of an [`Enumeration`].

use crate::enumeration::Enumeration;
use crate::underlying::Underlying;

/// Bitwise OR of every declared member's bit pattern.
pub fn flag_mask<E: Enumeration>() -> u64 {
    E::MEMBERS
        .iter()
        .fold(0, |mask, member| mask | member.bits())
}

/// Whether `value` is defined for `E`.
///
/// A value is defined if it equals a declared member. For flag enums, a value is also defined
/// if none of its bits fall outside [`flag_mask`].
///
/// # Example
///
/// ```
/// use enumconv::{define_flags, validate};
///
/// define_flags! {
///     pub struct Permissions(u8) {
///         (1, READ, Read),
///         (2, WRITE, Write),
///         (4, EXECUTE, Execute),
///     }
/// }
///
/// assert!(validate::is_valid_value::<Permissions>(3));
/// assert!(!validate::is_valid_value::<Permissions>(8));
/// assert!(!validate::is_valid_value::<Permissions>(16));
/// ```
pub fn is_valid_value<E: Enumeration>(value: E::Underlying) -> bool {
    if E::MEMBERS
        .iter()
        .any(|member| member.value().to_underlying() == value)
    {
        return true;
    }

    E::FLAGS && value.to_bits() & !flag_mask::<E>() == 0
}

/// Whether `value` is defined for its type. See [`is_valid_value`].
pub fn is_defined<E: Enumeration>(value: E) -> bool {
    is_valid_value::<E>(value.to_underlying())
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::define_flags! {
        pub struct Permissions(u8) {
            (1, READ, Read),
            (2, WRITE, Write),
            (4, EXECUTE, Execute),
        }
    }

    crate::define_enum! {
        pub struct OrderStatus(u8) {
            (1, PENDING, Pending),
            (2, SHIPPED, Shipped),
            (3, DELIVERED, Delivered),
        }
    }

    crate::define_flags! {
        pub struct Signed(i8) {
            (1, LOW, Low),
            (-128, HIGH, High),
        }
    }

    crate::define_flags! {
        pub struct Wide(i64) {
            (1, FIRST, First),
            (i64::MIN, SIGN, Sign),
        }
    }

    crate::define_flags! {
        pub struct Unsigned64(u64) {
            (1, FIRST, First),
            (1 << 63, TOP, Top),
        }
    }

    #[test]
    fn simple_enum_requires_exact_member() {
        assert!(is_valid_value::<OrderStatus>(1));
        assert!(is_valid_value::<OrderStatus>(3));
        assert!(!is_valid_value::<OrderStatus>(0));
        assert!(!is_valid_value::<OrderStatus>(231));
        assert!(is_defined(OrderStatus::SHIPPED));
        assert!(!is_defined(OrderStatus::new(4)));
    }

    #[test]
    fn flag_enum_accepts_subsets_of_mask() {
        assert_eq!(flag_mask::<Permissions>(), 0b111);
        assert!(is_valid_value::<Permissions>(3));
        assert!(is_valid_value::<Permissions>(7));
        assert!(is_valid_value::<Permissions>(0));
        assert!(!is_valid_value::<Permissions>(8));
        assert!(!is_valid_value::<Permissions>(16));
        assert!(!is_valid_value::<Permissions>(9));
    }

    #[test]
    fn signed_flags_use_twos_complement_bits() {
        assert_eq!(flag_mask::<Signed>(), 0x81);
        assert!(is_valid_value::<Signed>(-127));
        assert!(!is_valid_value::<Signed>(-1));
        assert!(!is_valid_value::<Signed>(2));

        assert_eq!(flag_mask::<Wide>(), 0x8000_0000_0000_0001);
        assert!(is_valid_value::<Wide>(i64::MIN + 1));
        assert!(!is_valid_value::<Wide>(-1));
    }

    #[test]
    fn unsigned_flags_cover_top_bit() {
        assert_eq!(flag_mask::<Unsigned64>(), 0x8000_0000_0000_0001);
        assert!(is_valid_value::<Unsigned64>(1 << 63));
        assert!(is_valid_value::<Unsigned64>((1 << 63) | 1));
        assert!(is_defined(Unsigned64::TOP | Unsigned64::FIRST));
        assert!(!is_valid_value::<Unsigned64>(2));
        assert!(!is_valid_value::<Unsigned64>(u64::MAX));
        assert!(!is_valid_value::<Unsigned64>(1 << 62));
    }
}
