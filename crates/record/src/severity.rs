use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// The severity determines only the leading label of the subject line; it
/// carries no filtering semantics.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Error record.
    Error,
    /// Warning record.
    Warning,
    /// Informational record.
    Info,
}

impl Severity {
    /// Returns the uppercase label rendered at the start of the subject line.
    ///
    /// These three strings are the only labels the facility ever produces, so
    /// call sites that branch on the textual representation can rely on the
    /// exact spelling without duplicating it.
    ///
    /// # Examples
    ///
    /// ```
    /// use record::Severity;
    ///
    /// assert_eq!(Severity::Error.label(), "ERROR");
    /// assert_eq!(Severity::Warning.label(), "WARNING");
    /// assert_eq!(Severity::Info.label(), "INFO");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }

    /// Reports whether this severity is [`Severity::Error`].
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Reports whether this severity is [`Severity::Warning`].
    #[must_use]
    pub const fn is_warning(self) -> bool {
        matches!(self, Self::Warning)
    }

    /// Reports whether this severity is [`Severity::Info`].
    #[must_use]
    pub const fn is_info(self) -> bool {
        matches!(self, Self::Info)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log severity label")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "ERROR" => Ok(Self::Error),
            "WARNING" => Ok(Self::Warning),
            "INFO" => Ok(Self::Info),
            _ => Err(ParseSeverityError { _private: () }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_subject_line_spelling() {
        assert_eq!(Severity::Error.label(), "ERROR");
        assert_eq!(Severity::Warning.label(), "WARNING");
        assert_eq!(Severity::Info.label(), "INFO");
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Severity::Warning.to_string(), "WARNING");
    }

    #[test]
    fn predicates_match_variants() {
        assert!(Severity::Error.is_error());
        assert!(!Severity::Error.is_warning());
        assert!(Severity::Warning.is_warning());
        assert!(Severity::Info.is_info());
        assert!(!Severity::Info.is_error());
    }

    #[test]
    fn parse_round_trips_every_label() {
        for severity in [Severity::Error, Severity::Warning, Severity::Info] {
            assert_eq!(severity.label().parse::<Severity>(), Ok(severity));
        }
    }

    #[test]
    fn parse_rejects_lowercase_and_unknown_labels() {
        assert!("error".parse::<Severity>().is_err());
        assert!("FATAL".parse::<Severity>().is_err());
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn parse_error_displays_message() {
        let error = "debug".parse::<Severity>().unwrap_err();
        assert_eq!(error.to_string(), "unrecognised log severity label");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn severity_serialises_as_variant_name() {
        let json = serde_json::to_string(&Severity::Warning).expect("serialise");
        assert_eq!(json, "\"Warning\"");
        let parsed: Severity = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(parsed, Severity::Warning);
    }
}
