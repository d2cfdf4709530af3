use crate::analysis::lexer::Position;
use crate::generators::java::java_type_name;
use crate::models::{Diagnostic, PropertySet, PropertyTypeDecl};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Legal AADL identifier: a letter followed by letters or digits, with
/// single underscores only between them (no leading, trailing or doubled
/// underscore).
fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z](_?[A-Za-z0-9])*$").expect("valid regex"))
}

pub fn is_valid_identifier(name: &str) -> bool {
    identifier_pattern().is_match(name)
}

/// Semantic checks on a parsed property set. Every problem that would make
/// generation ambiguous or degenerate is an error; generation is refused for
/// files carrying any error-severity diagnostic.
///
/// `positions` holds the source position of each entry in `set.types`
/// (see [`crate::analysis::parser::ParsedUnit`]).
pub fn validate(set: &PropertySet, positions: &[Position]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if !is_valid_identifier(&set.name) {
        diagnostics.push(Diagnostic::error(
            format!("'{}' is not a valid property set name", set.name),
            1,
            1,
        ));
    }

    let mut seen_names: HashMap<String, &str> = HashMap::new();
    let mut seen_derived: HashMap<String, &str> = HashMap::new();

    for (index, decl) in set.types.iter().enumerate() {
        let position = positions.get(index).copied().unwrap_or_default();
        let name = decl.name();

        if !is_valid_identifier(name) {
            diagnostics.push(Diagnostic::error(
                format!("'{}' is not a valid identifier", name),
                position.line,
                position.column,
            ));
        }

        // AADL names are case-insensitive
        if let Some(previous) = seen_names.insert(name.to_lowercase(), name) {
            diagnostics.push(Diagnostic::error(
                format!(
                    "duplicate type declaration '{}' (first declared as '{}')",
                    name, previous
                ),
                position.line,
                position.column,
            ));
        }

        if let PropertyTypeDecl::Enumeration(e) = decl {
            if e.literals.is_empty() {
                diagnostics.push(Diagnostic::error(
                    format!("enumeration type '{}' declares no literals", e.name),
                    position.line,
                    position.column,
                ));
            }
            let mut seen_literals: HashMap<String, &str> = HashMap::new();
            for literal in &e.literals {
                if !is_valid_identifier(literal) {
                    diagnostics.push(Diagnostic::error(
                        format!("'{}' is not a valid literal name", literal),
                        position.line,
                        position.column,
                    ));
                }
                if let Some(previous) = seen_literals.insert(literal.to_lowercase(), literal) {
                    diagnostics.push(Diagnostic::error(
                        format!(
                            "duplicate literal '{}' in enumeration type '{}' (first declared as '{}')",
                            literal, e.name, previous
                        ),
                        position.line,
                        position.column,
                    ));
                }
            }

            // Two distinct declarations may normalize to the same Java type
            // name (e.g. Error_Code and ErrorCode). The generated files would
            // silently overwrite each other, so reject the input instead.
            let derived = java_type_name(&e.name);
            if let Some(previous) = seen_derived.insert(derived.clone(), &e.name) {
                diagnostics.push(Diagnostic::error(
                    format!(
                        "enumeration types '{}' and '{}' both map to the Java type name '{}'",
                        previous, e.name, derived
                    ),
                    position.line,
                    position.column,
                ));
            }
        }
    }

    if !set
        .types
        .iter()
        .any(|decl| matches!(decl, PropertyTypeDecl::Enumeration(_)))
    {
        diagnostics.push(Diagnostic::warning(
            format!(
                "property set '{}' declares no enumeration types; nothing will be generated",
                set.name
            ),
            1,
            1,
        ));
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnumerationType, UnitsType};

    fn enum_type(name: &str, literals: &[&str]) -> PropertyTypeDecl {
        PropertyTypeDecl::Enumeration(EnumerationType {
            name: name.to_string(),
            literals: literals.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn set_of(types: Vec<PropertyTypeDecl>) -> PropertySet {
        PropertySet {
            name: "PS".to_string(),
            types,
        }
    }

    fn validate_only(set: &PropertySet) -> Vec<Diagnostic> {
        let positions = vec![Position::default(); set.types.len()];
        validate(set, &positions)
    }

    #[test]
    fn test_identifier_pattern() {
        assert!(is_valid_identifier("Error_Code"));
        assert!(is_valid_identifier("a"));
        assert!(is_valid_identifier("A1_b2"));
        assert!(!is_valid_identifier("_leading"));
        assert!(!is_valid_identifier("trailing_"));
        assert!(!is_valid_identifier("double__underscore"));
        assert!(!is_valid_identifier("1starts_with_digit"));
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn test_clean_set_has_no_diagnostics() {
        let set = set_of(vec![
            enum_type("Error_Code", &["ok", "warning", "fatal"]),
            PropertyTypeDecl::Units(UnitsType {
                name: "Time_Units".to_string(),
                units: vec!["ms".to_string()],
            }),
        ]);
        assert!(validate_only(&set).is_empty());
    }

    #[test]
    fn test_empty_enumeration_is_an_error() {
        let set = set_of(vec![enum_type("Empty", &[])]);
        let diagnostics = validate_only(&set);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("declares no literals"));
    }

    #[test]
    fn test_duplicate_literal_is_an_error() {
        let set = set_of(vec![enum_type("Color", &["red", "RED"])]);
        let diagnostics = validate_only(&set);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("duplicate literal"));
    }

    #[test]
    fn test_duplicate_type_name_is_an_error() {
        let set = set_of(vec![
            enum_type("Color", &["red"]),
            PropertyTypeDecl::Other {
                name: "COLOR".to_string(),
            },
        ]);
        let diagnostics = validate_only(&set);
        assert!(diagnostics
            .iter()
            .any(|d| d.message.contains("duplicate type declaration")));
    }

    #[test]
    fn test_derived_name_collision_is_an_error() {
        let set = set_of(vec![
            enum_type("A_2_B", &["a"]),
            enum_type("A2_B", &["b"]),
        ]);
        let diagnostics = validate_only(&set);
        assert!(diagnostics
            .iter()
            .any(|d| d.message.contains("both map to the Java type name 'A2B'")));
    }

    #[test]
    fn test_interior_capitals_yield_distinct_derived_names() {
        // Error_Code derives ErrorCode but ErrorCode derives Errorcode
        let set = set_of(vec![
            enum_type("Error_Code", &["a"]),
            enum_type("ErrorCode", &["b"]),
        ]);
        assert!(validate_only(&set).is_empty());
    }

    #[test]
    fn test_set_without_enumerations_gets_a_warning() {
        let set = set_of(vec![PropertyTypeDecl::Units(UnitsType {
            name: "Time_Units".to_string(),
            units: vec!["ms".to_string()],
        })]);
        let diagnostics = validate_only(&set);
        assert_eq!(diagnostics.len(), 1);
        assert!(!diagnostics[0].is_error());
        assert!(diagnostics[0]
            .message
            .contains("declares no enumeration types"));
    }

    #[test]
    fn test_units_types_do_not_participate_in_derived_name_collisions() {
        let set = set_of(vec![
            enum_type("Time_Units", &["a"]),
            PropertyTypeDecl::Units(UnitsType {
                name: "TimeUnits".to_string(),
                units: vec!["s".to_string()],
            }),
        ]);
        let diagnostics = validate_only(&set);
        assert!(diagnostics.is_empty());
    }
}
