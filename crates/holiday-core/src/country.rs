//! Country identity as served by the upstream holiday provider.

use serde::{Deserialize, Serialize};

/// A country known to the holiday provider.
///
/// Identity is the ISO-style `code`; the registry normalizes codes to
/// uppercase before storing them, and all lookups compare
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO-style country code (e.g. "AU", "NL").
    pub code: String,
    /// Human-readable country name.
    pub name: String,
}

impl Country {
    /// Creates a new country.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Returns the code normalized to uppercase.
    pub fn normalized_code(&self) -> String {
        self.code.trim().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_code_uppercases_and_trims() {
        let country = Country::new(" nl ", "Netherlands");
        assert_eq!(country.normalized_code(), "NL");
    }
}
