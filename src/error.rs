use crate::underlying::UnderlyingKind;
use std::error::Error as StdError;
use std::fmt;

pub type BoxError = Box<dyn StdError + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error returned by the conversion functions in this crate.
///
/// The [`ErrorKind`] distinguishes expected outcomes of converting untrusted input
/// ([`UndefinedValue`](ErrorKind::UndefinedValue),
/// [`EmptyOrWhitespaceInput`](ErrorKind::EmptyOrWhitespaceInput),
/// [`NoMatchingMember`](ErrorKind::NoMatchingMember)) from misuse of the API by the caller
/// (see [`Error::is_contract_violation`]).
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    type_name: &'static str,
    input: Option<String>,
    source: Option<BoxError>,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("required value was absent")]
    NullInput,
    #[error("requested underlying type `{requested}` does not match declared type `{declared}`")]
    TypeMismatch {
        requested: UnderlyingKind,
        declared: UnderlyingKind,
    },
    #[error("value does not fit in underlying type `{target}`")]
    ConversionOverflow { target: UnderlyingKind },
    #[error("value is not a defined member")]
    UndefinedValue,
    #[error("input was empty or whitespace")]
    EmptyOrWhitespaceInput,
    #[error("input does not match any member")]
    NoMatchingMember,
}

impl ErrorKind {
    /// Whether this kind indicates a caller bug rather than bad input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::NullInput | Self::TypeMismatch { .. } | Self::ConversionOverflow { .. }
        )
    }
}

impl Error {
    pub fn new(kind: ErrorKind, type_name: &'static str) -> Self {
        Self {
            kind,
            type_name,
            input: None,
            source: None,
        }
    }

    /// Record the offending input, rendered for display.
    pub fn with_input<T: fmt::Display>(mut self, input: T) -> Self {
        self.input = Some(input.to_string());
        self
    }

    /// Set this error's underlying `source`.
    pub fn with_source<E: Into<BoxError>>(mut self, source: E) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Consumes the error, returning its source.
    pub fn into_source(self) -> Option<BoxError> {
        self.source
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Name of the enum type the conversion targeted.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn is_contract_violation(&self) -> bool {
        self.kind.is_contract_violation()
    }

    // Every failure path funnels through here so it gets traced exactly once.
    pub(crate) fn traced(self) -> Self {
        tracing::trace!(
            type_name = self.type_name,
            input = ?self.input,
            kind = %self.kind,
            "enum conversion failed"
        );
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.kind)?;

        if let Some(ref input) = self.input {
            write!(f, " (input {:?})", input)?;
        }

        if let Some(ref source) = self.source {
            write!(f, ": {}", source)?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let error = Error::new(ErrorKind::UndefinedValue, "OrderStatus").with_input(999);
        assert_eq!(
            error.to_string(),
            "OrderStatus: value is not a defined member (input \"999\")"
        );

        let error = Error::new(
            ErrorKind::TypeMismatch {
                requested: UnderlyingKind::I32,
                declared: UnderlyingKind::U8,
            },
            "OrderStatus",
        );
        assert_eq!(
            error.to_string(),
            "OrderStatus: requested underlying type `i32` does not match declared type `u8`"
        );
    }

    #[test]
    fn source_is_exposed() {
        let parse_error = "x".parse::<i32>().unwrap_err();
        let error = Error::new(ErrorKind::NoMatchingMember, "OrderStatus").with_source(parse_error);

        assert!(StdError::source(&error).is_some());
        assert!(error.into_source().is_some());
    }

    #[test]
    fn contract_violations() {
        assert!(ErrorKind::NullInput.is_contract_violation());
        assert!(ErrorKind::ConversionOverflow {
            target: UnderlyingKind::I8
        }
        .is_contract_violation());
        assert!(!ErrorKind::UndefinedValue.is_contract_violation());
        assert!(!ErrorKind::NoMatchingMember.is_contract_violation());
        assert!(!ErrorKind::EmptyOrWhitespaceInput.is_contract_violation());
    }
}
