//! Method-call forms of the conversion functions.
//!
//! ```
//! use enumconv::define_enum;
//! use enumconv::ext::{EnumExt, IntExt, StrExt};
//!
//! define_enum! {
//!     pub struct OrderStatus(i32) {
//!         (1, PENDING, Pending),
//!         (2, SHIPPED, Shipped),
//!         (3, DELIVERED, Delivered),
//!     }
//! }
//!
//! assert_eq!(OrderStatus::SHIPPED.to_int().ok(), Some(2));
//! assert_eq!(2i32.to_enum::<OrderStatus>(true).ok(), Some(OrderStatus::SHIPPED));
//! assert!(999i32.to_enum::<OrderStatus>(true).is_err());
//! assert_eq!(
//!     "delivered".to_enum::<OrderStatus>(true).ok(),
//!     Some(OrderStatus::DELIVERED)
//! );
//! assert_eq!("unknown".to_nullable_enum::<OrderStatus>(false), None);
//! ```

use crate::convert;
use crate::enumeration::Enumeration;
use crate::error::Result;
use crate::parse::{self, Comparison};
use crate::underlying::Underlying;
use crate::validate;

pub trait EnumExt: Enumeration {
    /// See [`convert::to_int`].
    fn to_int(self) -> Result<i32> {
        convert::to_int(self)
    }

    /// See [`convert::to_value`].
    fn to_value<U: Underlying>(self) -> Result<U> {
        convert::to_value(self)
    }

    /// See [`validate::is_defined`].
    fn is_defined(self) -> bool {
        validate::is_defined(self)
    }
}

impl<E: Enumeration> EnumExt for E {}

pub trait IntExt: Underlying {
    /// See [`convert::to_enum`].
    fn to_enum<E: Enumeration>(self, validate: bool) -> Result<E> {
        convert::to_enum(self, validate)
    }

    /// See [`convert::try_to_enum`].
    fn try_to_enum<E: Enumeration>(self) -> Option<E> {
        convert::try_to_enum(self)
    }
}

impl<N: Underlying> IntExt for N {}

pub trait StrExt {
    /// See [`parse::parse_str`].
    fn to_enum<E: Enumeration>(&self, mode: impl Into<Comparison>) -> Result<E>;

    /// See [`parse::try_parse`].
    fn to_nullable_enum<E: Enumeration>(&self, mode: impl Into<Comparison>) -> Option<E>;
}

impl StrExt for str {
    fn to_enum<E: Enumeration>(&self, mode: impl Into<Comparison>) -> Result<E> {
        parse::parse_str(self, mode)
    }

    fn to_nullable_enum<E: Enumeration>(&self, mode: impl Into<Comparison>) -> Option<E> {
        parse::try_parse(self, mode)
    }
}
