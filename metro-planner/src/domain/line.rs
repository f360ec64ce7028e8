//! Metro line codes.

use std::fmt;

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code {input:?}: {reason}")]
pub struct InvalidLineCode {
    input: char,
    reason: &'static str,
}

/// A metro line, identified by a single uppercase ASCII letter.
///
/// The Delhi network uses the first letter of the line colour
/// (`B`lue, `Y`ellow, `O`range, `P`ink, `R`ed).
///
/// # Examples
///
/// ```
/// use metro_planner::domain::LineCode;
///
/// let blue = LineCode::parse('B').unwrap();
/// assert_eq!(blue.as_char(), 'B');
///
/// assert!(LineCode::parse('b').is_err());
/// assert!(LineCode::parse('1').is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCode(u8);

impl LineCode {
    /// Parse a line code from a single character.
    pub fn parse(c: char) -> Result<Self, InvalidLineCode> {
        if !c.is_ascii_uppercase() {
            return Err(InvalidLineCode {
                input: c,
                reason: "must be an uppercase ASCII letter A-Z",
            });
        }

        Ok(LineCode(c as u8))
    }

    /// Returns the line code as a character.
    pub fn as_char(&self) -> char {
        self.0 as char
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.as_char())
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
