// Shared expansion for `define_enum!` and `define_flags!`.
#[doc(hidden)]
#[macro_export]
macro_rules! __define_enumeration {
    (
        flags = $flags:expr;
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty) {
            $(
                $(#[$docs:meta])*
                ($value:expr, $const_name:ident, $member_name:ident),
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        $vis struct $name($repr);

        impl $name {
            $(
                $(#[$docs])*
                #[doc = concat!("`", stringify!($value), " ", stringify!($member_name), "`")]
                pub const $const_name: $name = $name($value);
            )+

            /// Creates a value from a raw underlying value, which need not be a declared member.
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }

            /// Returns the underlying value.
            pub const fn value(self) -> $repr {
                self.0
            }

            /// Returns the declared name of this value, if it is exactly a member.
            pub fn name(self) -> Option<&'static str> {
                $crate::format::name_of(self)
            }
        }

        impl $crate::Enumeration for $name {
            type Underlying = $repr;

            const TYPE_NAME: &'static str = stringify!($name);
            const FLAGS: bool = $flags;
            const MEMBERS: &'static [$crate::Member<Self>] = &[
                $(
                    $crate::Member::new(stringify!($member_name), $name::$const_name),
                )+
            ];

            fn from_underlying(value: $repr) -> Self {
                Self(value)
            }

            fn to_underlying(self) -> $repr {
                self.0
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::format::format(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::parse::parse_str(s, $crate::Comparison::Ordinal)
            }
        }
    };
}

/// Define an integer newtype with a set of named members.
///
/// Each member is given as `(value, CONST_NAME, MemberName)`: the constant is how Rust code
/// refers to it, and the member name is what parsing and formatting use.
///
/// # Example
///
/// ```
/// use enumconv::define_enum;
///
/// define_enum! {
///     /// Lifecycle of an order.
///     pub struct OrderStatus(u8) {
///         (1, PENDING, Pending),
///         (2, SHIPPED, Shipped),
///         (3, DELIVERED, Delivered),
///     }
/// }
///
/// assert_eq!(OrderStatus::SHIPPED.value(), 2);
/// assert_eq!(OrderStatus::SHIPPED.to_string(), "Shipped");
/// assert_eq!("Delivered".parse::<OrderStatus>().ok(), Some(OrderStatus::DELIVERED));
///
/// // Undefined values are representable, and format as numbers
/// assert_eq!(OrderStatus::new(7).name(), None);
/// assert_eq!(OrderStatus::new(7).to_string(), "7");
/// ```
#[macro_export]
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty) {
            $(
                $(#[$docs:meta])*
                ($value:expr, $const_name:ident, $member_name:ident),
            )+
        }
    ) => {
        $crate::__define_enumeration! {
            flags = false;
            $(#[$meta])*
            $vis struct $name($repr) {
                $(
                    $(#[$docs])*
                    ($value, $const_name, $member_name),
                )+
            }
        }
    };
}

/// Define an integer newtype whose members may be combined with bitwise OR.
///
/// In addition to everything [`define_enum!`](crate::define_enum) generates, the type gets the
/// bitwise operators along with `contains` and `is_empty`. Any value whose set bits are all
/// covered by some declared member is considered defined.
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
/// let rw = Permissions::READ | Permissions::WRITE;
/// assert!(rw.contains(Permissions::WRITE));
/// assert!(validate::is_defined(rw));
/// assert!(!validate::is_defined(Permissions::new(8)));
/// assert_eq!(rw.to_string(), "Read, Write");
/// ```
#[macro_export]
macro_rules! define_flags {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty) {
            $(
                $(#[$docs:meta])*
                ($value:expr, $const_name:ident, $member_name:ident),
            )+
        }
    ) => {
        $crate::__define_enumeration! {
            flags = true;
            $(#[$meta])*
            $vis struct $name($repr) {
                $(
                    $(#[$docs])*
                    ($value, $const_name, $member_name),
                )+
            }
        }

        impl $name {
            /// Whether every bit set in `other` is also set in `self`.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Whether no bits are set.
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl std::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl std::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0;
            }
        }

        impl std::ops::BitXor for $name {
            type Output = Self;

            fn bitxor(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }
    };
}
