//! Structured data validation.
//!
//! Checks a JSON-LD object for the fields search engines require. Every
//! violation is collected so callers see the whole picture in one pass.

use serde::Serialize;
use serde_json::Value;

/// Validation report for one JSON-LD object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataReport {
    /// True when no errors were found
    pub is_valid: bool,
    /// Missing or malformed required fields
    pub errors: Vec<String>,
}

impl StructuredDataReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn finish(mut self) -> Self {
        self.is_valid = self.errors.is_empty();
        self
    }

    fn require(&mut self, schema: &Value, field: &str, schema_type: &str) {
        if is_missing(schema.get(field)) {
            self.errors
                .push(format!("{} schema missing required field: {}", schema_type, field));
        }
    }
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Validate `schema` against the per-type required fields.
pub fn validate_structured_data(schema: &Value) -> StructuredDataReport {
    let mut report = StructuredDataReport::new();

    if !schema.is_object() {
        report.errors.push("Structured data must be a JSON object".to_string());
        return report.finish();
    }

    if is_missing(schema.get("@context")) {
        report.errors.push("Missing @context".to_string());
    }

    let schema_type = match schema.get("@type") {
        Some(Value::String(t)) if !t.trim().is_empty() => Some(t.as_str()),
        _ => {
            report.errors.push("Missing @type".to_string());
            None
        }
    };

    match schema_type {
        Some("Article") => {
            for field in ["headline", "author", "publisher"] {
                report.require(schema, field, "Article");
            }
        }
        Some("Organization") => {
            for field in ["name", "url"] {
                report.require(schema, field, "Organization");
            }
        }
        Some("SoftwareApplication") => {
            for field in ["name", "offers"] {
                report.require(schema, field, "SoftwareApplication");
            }
        }
        _ => {}
    }

    report.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::structured::{generate_structured_data, SchemaKind};
    use serde_json::json;

    // ==================== Valid Schema Tests ====================

    #[test]
    fn test_generated_schemas_are_valid() {
        for kind in SchemaKind::ALL {
            let schema = generate_structured_data(kind, None, None, "https://example.com");
            let report = validate_structured_data(&schema);
            assert!(report.is_valid, "{}: {:?}", kind, report.errors);
        }
    }

    #[test]
    fn test_unknown_type_only_needs_context_and_type() {
        let report = validate_structured_data(&json!({
            "@context": "https://schema.org",
            "@type": "Recipe"
        }));
        assert!(report.is_valid);
    }

    // ==================== Error Collection Tests ====================

    #[test]
    fn test_empty_object_reports_context_and_type() {
        let report = validate_structured_data(&json!({}));
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Missing @context", "Missing @type"]);
    }

    #[test]
    fn test_article_collects_every_missing_field() {
        let report = validate_structured_data(&json!({
            "@context": "https://schema.org",
            "@type": "Article"
        }));

        assert_eq!(report.errors.len(), 3);
        assert!(report.errors.iter().any(|e| e.contains("headline")));
        assert!(report.errors.iter().any(|e| e.contains("author")));
        assert!(report.errors.iter().any(|e| e.contains("publisher")));
    }

    #[test]
    fn test_missing_context_and_type_fields_together() {
        let report = validate_structured_data(&json!({
            "@type": "Organization",
            "name": "AISEOTurbo"
        }));

        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0], "Missing @context");
        assert!(report.errors[1].contains("url"));
    }

    #[test]
    fn test_software_application_requires_offers() {
        let report = validate_structured_data(&json!({
            "@context": "https://schema.org",
            "@type": "SoftwareApplication",
            "name": "Tool",
            "offers": null
        }));
        assert_eq!(
            report.errors,
            vec!["SoftwareApplication schema missing required field: offers"]
        );
    }

    #[test]
    fn test_blank_string_counts_as_missing() {
        let report = validate_structured_data(&json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": "  ",
            "url": "https://example.com"
        }));
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_non_object_is_invalid() {
        assert!(!validate_structured_data(&json!([1, 2])).is_valid);
    }

    #[test]
    fn test_report_serialization() {
        let report = validate_structured_data(&json!({}));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_valid_report_serialization() {
        let report = validate_structured_data(&json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": "AI SEO Turbo",
            "url": "https://www.aiseoturbo.com"
        }));
        assert!(report.is_valid);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "isValid": true, "errors": [] })
        );
    }
}
