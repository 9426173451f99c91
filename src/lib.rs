//! Conversions between integer-backed enums, their underlying values, and their member names.
//!
//! Enum types are declared with [`define_enum!`] or [`define_flags!`], which generate an integer
//! newtype with one associated constant per member and an [`Enumeration`] implementation
//! describing the member table. Every conversion is a free function:
//!
//! * [`convert`]: enum to integer, integer to enum, with optional validation
//! * [`validate`]: whether a value is a defined member or flag combination
//! * [`parse`]: string to enum, by number, by name, or by comma-separated flag names
//! * [`format`]: enum to member name(s)
//!
//! Fallible conversions return [`Result`]. Conversions of untrusted input (integer to enum,
//! string to enum) also have `try_` or `_nullable` forms which collapse every failure into
//! `None`; for the rest, use [`Result::ok`]. The [`ext`] traits offer the same functions as
//! methods.
//!
//! # Example
//!
//! ```
//! use enumconv::{convert, define_enum, parse, ErrorKind};
//!
//! define_enum! {
//!     pub struct OrderStatus(i32) {
//!         (1, PENDING, Pending),
//!         (2, SHIPPED, Shipped),
//!         (3, DELIVERED, Delivered),
//!     }
//! }
//!
//! # fn main() -> enumconv::Result<()> {
//! assert_eq!(convert::to_int(OrderStatus::SHIPPED)?, 2);
//! assert_eq!(convert::to_enum::<OrderStatus, _>(2, true)?, OrderStatus::SHIPPED);
//!
//! let error = convert::to_enum::<OrderStatus, _>(999, true).unwrap_err();
//! assert_eq!(error.kind(), &ErrorKind::UndefinedValue);
//!
//! assert_eq!(parse::parse_str::<OrderStatus>("delivered", true)?, OrderStatus::DELIVERED);
//! assert_eq!(parse::parse_nullable::<OrderStatus>(Some("unknown"), false), None);
//! # Ok(())
//! # }
//! ```

mod enumeration;

pub mod convert;
pub mod error;
pub mod ext;
pub mod format;
pub mod parse;
pub mod underlying;
pub mod validate;

pub use crate::enumeration::{Enumeration, Member};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::parse::Comparison;
pub use crate::underlying::{Underlying, UnderlyingKind};
