//! SysQL query templates
//!
//! A SysQL query paginates by rewriting its trailing `OFFSET` clause. Doing
//! that with a plain text replace risks clobbering unrelated numeric literals
//! (a `LIMIT 1000` next to `OFFSET 1000`, say), so the template splits the
//! query once at parse time and substitutes the offset value structurally.

use crate::error::{Error, Result};

/// The default vulnerability/workload/image query.
pub const DEFAULT_QUERY: &str = "\
MATCH Vulnerability AFFECTS KubeWorkload OPTIONAL MATCH KubeWorkload HAS Container RUNS Image PACKAGE_INSTALLED_ON Package
RETURN KubeWorkload.clusterName, KubeWorkload.namespaceName, KubeWorkload.name, Vulnerability.acceptedRisk,
       Vulnerability.cvssScore, Vulnerability.fixedInVersion, Vulnerability.name, Vulnerability.packageName,
       Vulnerability.packageVersion, Vulnerability.severity, Image.baseOS, Image.imageReference, Image.repository,
       Image.registry ORDER BY Vulnerability.lastModified LIMIT 1000 OFFSET 0;";

/// A SysQL query with an explicit, substitutable offset clause.
///
/// The text before `OFFSET` and the text after its numeric argument are kept
/// verbatim; only the offset value changes between pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplate {
    /// Query text up to and including the `OFFSET ` keyword
    head: String,
    /// Query text after the offset value (trailing `;`, whitespace)
    tail: String,
}

impl QueryTemplate {
    /// Parse a query whose last `OFFSET` clause carries a numeric literal.
    pub fn parse(text: &str) -> Result<Self> {
        let keyword_at = text
            .rfind("OFFSET")
            .ok_or_else(|| Error::config("query has no OFFSET clause"))?;

        let after_keyword = &text[keyword_at + "OFFSET".len()..];
        let spaces = after_keyword.len() - after_keyword.trim_start().len();
        let value = &after_keyword[spaces..];
        let digits = value.chars().take_while(char::is_ascii_digit).count();
        if digits == 0 {
            return Err(Error::config("OFFSET clause has no numeric value"));
        }

        Ok(Self {
            head: text[..keyword_at + "OFFSET".len() + spaces].to_string(),
            tail: value[digits..].to_string(),
        })
    }

    /// Render the query with the given offset.
    pub fn render(&self, offset: u64) -> String {
        format!("{}{offset}{}", self.head, self.tail)
    }
}

impl Default for QueryTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_QUERY).expect("default query must parse")
    }
}

impl std::str::FromStr for QueryTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_at_offset_zero_is_identity() {
        let text = "MATCH V RETURN V.name LIMIT 1000 OFFSET 0;";
        let template = QueryTemplate::parse(text).unwrap();
        assert_eq!(template.render(0), text);
    }

    #[test]
    fn test_render_advances_only_the_offset_clause() {
        let template = QueryTemplate::parse("MATCH V RETURN V.name LIMIT 1000 OFFSET 0;").unwrap();
        assert_eq!(
            template.render(2000),
            "MATCH V RETURN V.name LIMIT 1000 OFFSET 2000;"
        );
    }

    #[test]
    fn test_other_numeric_literals_untouched() {
        // The LIMIT shares its value with the starting offset on purpose.
        let template =
            QueryTemplate::parse("MATCH V WHERE V.score > 0 RETURN V LIMIT 500 OFFSET 500").unwrap();
        assert_eq!(
            template.render(1000),
            "MATCH V WHERE V.score > 0 RETURN V LIMIT 500 OFFSET 1000"
        );
    }

    #[test]
    fn test_default_query_parses() {
        let template = QueryTemplate::default();
        let rendered = template.render(3000);
        assert!(rendered.contains("OFFSET 3000"));
        assert!(rendered.contains("LIMIT 1000"));
    }

    #[test]
    fn test_missing_offset_clause_is_config_error() {
        let err = QueryTemplate::parse("MATCH V RETURN V.name").unwrap_err();
        assert!(err.to_string().contains("no OFFSET clause"));
    }

    #[test]
    fn test_offset_without_value_is_config_error() {
        let err = QueryTemplate::parse("MATCH V RETURN V.name OFFSET ;").unwrap_err();
        assert!(err.to_string().contains("no numeric value"));
    }
}
