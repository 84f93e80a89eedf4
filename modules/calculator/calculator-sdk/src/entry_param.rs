//! Entry parameter codec.
//!
//! A host passes `Load` the address of its entry-info block rendered as
//! 16 uppercase hex digits, zero padded and without prefix. The string stays
//! opaque to the fixture: decoding is best effort and only used for diagnostics.

use std::fmt;

const MAX_HEX_DIGITS: usize = 16;

/// Address of a host entry-info block, decoded from a `Load` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryParam {
    address: u64,
}

impl EntryParam {
    #[must_use]
    pub fn new(address: u64) -> Self {
        Self { address }
    }

    #[must_use]
    pub fn address(self) -> u64 {
        self.address
    }

    /// Decode a parameter string.
    ///
    /// Accepts up to 16 hex digits in either case, optionally prefixed with
    /// `0x`. Returns `None` for anything else, including the empty string.
    #[must_use]
    pub fn parse(param: &str) -> Option<Self> {
        let digits = param
            .strip_prefix("0x")
            .or_else(|| param.strip_prefix("0X"))
            .unwrap_or(param);

        if digits.is_empty()
            || digits.len() > MAX_HEX_DIGITS
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return None;
        }

        u64::from_str_radix(digits, 16).ok().map(Self::new)
    }

    /// Render in the host's canonical form.
    #[must_use]
    pub fn to_param_string(self) -> String {
        format!("{:016X}", self.address)
    }
}

impl fmt::Display for EntryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_format() {
        let param = EntryParam::parse("00007FF6A1B2C3D4").unwrap();
        assert_eq!(param.address(), 0x0000_7FF6_A1B2_C3D4);
        assert_eq!(param.to_param_string(), "00007FF6A1B2C3D4");
    }

    #[test]
    fn test_parse_prefixed_and_lowercase() {
        assert_eq!(EntryParam::parse("0x1A2B"), Some(EntryParam::new(0x1A2B)));
        assert_eq!(EntryParam::parse("0X1a2b"), Some(EntryParam::new(0x1A2B)));
        assert_eq!(EntryParam::parse("ffffffffffffffff"), Some(EntryParam::new(u64::MAX)));
    }

    #[test]
    fn test_parse_opaque_strings() {
        assert_eq!(EntryParam::parse(""), None);
        assert_eq!(EntryParam::parse("0x"), None);
        assert_eq!(EntryParam::parse("hello"), None);
        assert_eq!(EntryParam::parse("+1A2B"), None);
        assert_eq!(EntryParam::parse(" 1A2B"), None);
        assert_eq!(EntryParam::parse("10000000000000000"), None);
    }

    #[test]
    fn test_canonical_form_is_zero_padded() {
        assert_eq!(EntryParam::new(0x1A2B).to_param_string(), "0000000000001A2B");
        assert_eq!(EntryParam::new(0).to_param_string(), "0000000000000000");
    }

    #[test]
    fn test_display() {
        assert_eq!(EntryParam::new(0x1A2B).to_string(), "0x0000000000001a2b");
    }
}
