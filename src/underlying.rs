//! Integer types that an [`Enumeration`](crate::Enumeration) may be backed by.

use paste::paste;
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Width and signedness of an underlying integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnderlyingKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
}

impl UnderlyingKind {
    /// Number of bits in the type.
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 => 32,
            Self::I64 | Self::U64 => 64,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
        }
    }
}

impl fmt::Display for UnderlyingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-width primitive integer.
///
/// This trait is sealed; it is implemented for `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64`
/// and `u64` only.
pub trait Underlying:
    Copy + Eq + Ord + fmt::Debug + fmt::Display + Default + Send + Sync + 'static + sealed::Sealed
{
    /// Tag identifying this type.
    const KIND: UnderlyingKind;

    /// Lossless widening to `i128`.
    fn to_i128(self) -> i128;

    /// Range-checked narrowing from `i128`. Returns `None` if `value` does not fit.
    fn from_i128(value: i128) -> Option<Self>;

    /// The two's complement bit pattern of this value, zero-extended to 64 bits.
    fn to_bits(self) -> u64;

    /// Reinterprets the low bits of `bits` as this type, discarding the rest.
    fn from_bits(bits: u64) -> Self;
}

macro_rules! impl_underlying {
    ($($ty:ident => $unsigned:ident,)+) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Underlying for $ty {
                const KIND: UnderlyingKind = paste! { UnderlyingKind::[<$ty:upper>] };

                #[inline]
                fn to_i128(self) -> i128 {
                    i128::from(self)
                }

                #[inline]
                fn from_i128(value: i128) -> Option<Self> {
                    use std::convert::TryFrom;

                    <$ty>::try_from(value).ok()
                }

                #[inline]
                fn to_bits(self) -> u64 {
                    u64::from(self as $unsigned)
                }

                #[inline]
                fn from_bits(bits: u64) -> Self {
                    bits as $unsigned as $ty
                }
            }
        )+
    };
}

impl_underlying! {
    i8 => u8,
    u8 => u8,
    i16 => u16,
    u16 => u16,
    i32 => u32,
    u32 => u32,
    i64 => u64,
    u64 => u64,
}
