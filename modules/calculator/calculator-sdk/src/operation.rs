//! Exported arithmetic function names.

use std::fmt;
use std::str::FromStr;

use crate::CalculatorError;

/// One of the four arithmetic functions the fixture exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Exported function name, as a host would look it up.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalculatorError::unknown_operation(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exported_names() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("divide".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!("MULTIPLY".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!(" add ".parse::<Operation>(), Ok(Operation::Add));
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            "Modulo".parse::<Operation>(),
            Err(CalculatorError::UnknownOperation("Modulo".to_owned()))
        );
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_display_uses_exported_name() {
        assert_eq!(Operation::Subtract.to_string(), "Subtract");
    }
}
