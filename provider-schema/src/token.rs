use std::{fmt, str::FromStr};

use serde::Deserialize;

/// A resource token of the form `package:module:TypeName`.
///
/// Tokens key the `resources` map in a Pulumi schema. The third segment is
/// the local type name that generated declarations are derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct ResourceToken {
    package: String,
    module: String,
    type_name: String,
}

impl ResourceToken {
    /// The package segment (e.g. `acme` in `acme:index:Widget`).
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The module segment (e.g. `index` in `acme:index:Widget`).
    pub fn module(&self) -> &str {
        &self.module
    }

    /// The local type name (e.g. `Widget` in `acme:index:Widget`).
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl TryFrom<String> for ResourceToken {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for ResourceToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(format!(
                "invalid resource token '{}', expected 'package:module:TypeName'",
                s
            ));
        }
        Ok(Self {
            package: parts[0].to_string(),
            module: parts[1].to_string(),
            type_name: parts[2].to_string(),
        })
    }
}

impl fmt::Display for ResourceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.package, self.module, self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let token: ResourceToken = "acme:index:Widget".parse().unwrap();
        assert_eq!(token.package(), "acme");
        assert_eq!(token.module(), "index");
        assert_eq!(token.type_name(), "Widget");
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("acme:Widget".parse::<ResourceToken>().is_err());
        assert!("acme:index:sub:Widget".parse::<ResourceToken>().is_err());
        assert!("acme::Widget".parse::<ResourceToken>().is_err());
        assert!("".parse::<ResourceToken>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let token: ResourceToken = "acme:index:Widget".parse().unwrap();
        assert_eq!(token.to_string(), "acme:index:Widget");
    }
}
