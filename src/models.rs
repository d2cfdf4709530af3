use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed AADL property set: a named collection of property type declarations.
///
/// Property sets and their nested declarations are read-only inputs to the
/// generator; declaration order is preserved from the source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertySet {
    pub name: String,
    pub types: Vec<PropertyTypeDecl>,
}

impl PropertySet {
    /// The Java package the generated sources belong to.
    pub fn package_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Enumeration types that qualify for generation, in declaration order.
    /// Units types are enumeration-like but are handled by OSATE itself and
    /// never generated here.
    pub fn enumeration_types(&self) -> impl Iterator<Item = &EnumerationType> {
        self.types.iter().filter_map(|decl| match decl {
            PropertyTypeDecl::Enumeration(e) => Some(e),
            _ => None,
        })
    }
}

/// One owned property type declaration of a property set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum PropertyTypeDecl {
    Enumeration(EnumerationType),
    Units(UnitsType),
    /// Any other property type kind (aadlinteger, aadlstring, record, ...).
    /// Parsed so that name clashes can be diagnosed, never generated.
    Other { name: String },
}

impl PropertyTypeDecl {
    pub fn name(&self) -> &str {
        match self {
            PropertyTypeDecl::Enumeration(e) => &e.name,
            PropertyTypeDecl::Units(u) => &u.name,
            PropertyTypeDecl::Other { name } => name,
        }
    }
}

/// An enumeration property type: a fixed, named set of literals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnumerationType {
    pub name: String,
    /// Literal names in declaration order.
    pub literals: Vec<String>,
}

/// A units property type. Only the unit names are kept; conversion factors
/// are parsed and discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitsType {
    pub name: String,
    pub units: Vec<String>,
}

/// One generated Java source file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    pub file_name: String,
    pub contents: String,
}

/// Severity of an analysis diagnostic. Error-severity diagnostics block
/// generation for the file that carries them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic produced while analyzing a property set source file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            line,
            column,
        }
    }

    pub fn warning(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line,
            column,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.line, self.column, self.severity, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_is_lowercased() {
        let set = PropertySet {
            name: "MyProps".to_string(),
            types: vec![],
        };
        assert_eq!(set.package_name(), "myprops");
    }

    #[test]
    fn test_enumeration_types_excludes_units_and_other() {
        let set = PropertySet {
            name: "PS".to_string(),
            types: vec![
                PropertyTypeDecl::Enumeration(EnumerationType {
                    name: "Color".to_string(),
                    literals: vec!["red".to_string()],
                }),
                PropertyTypeDecl::Units(UnitsType {
                    name: "Time_Units".to_string(),
                    units: vec!["ms".to_string()],
                }),
                PropertyTypeDecl::Other {
                    name: "Max_Size".to_string(),
                },
            ],
        };
        let names: Vec<&str> = set.enumeration_types().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Color"]);
    }

    #[test]
    fn test_diagnostic_display() {
        let d = Diagnostic::error("unexpected token", 3, 7);
        assert_eq!(d.to_string(), "3:7: error: unexpected token");
        assert!(d.is_error());
        assert!(!Diagnostic::warning("odd", 1, 1).is_error());
    }
}
