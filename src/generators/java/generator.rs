use crate::error::{Error, Result};
use crate::generators::java::templates::{render_enum, render_literal_list};
use crate::models::{GeneratedFile, PropertySet};
use std::collections::HashMap;

/// Derive the Java type name for an enumeration property type: split the
/// declared name on underscores, title-case each segment (lowercase it, then
/// uppercase its first character) and concatenate.
///
/// `ERROR_CODE` becomes `ErrorCode`. Empty segments from leading, trailing
/// or doubled underscores contribute nothing.
pub fn java_type_name(name: &str) -> String {
    name.split('_')
        .map(|segment| {
            let lower = segment.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// Generate one Java enum source per enumeration property type of the
/// property set, in declaration order. Units types never qualify. Pure:
/// identical input always yields identical output, and nothing is written
/// anywhere.
///
/// Fails on malformed input rather than emitting degenerate Java: an
/// enumeration without literals, a blank literal name, or two declarations
/// whose derived Java type names collide.
pub fn generate(property_set: &PropertySet) -> Result<Vec<GeneratedFile>> {
    let package = property_set.package_name();
    let mut derived_names: HashMap<String, String> = HashMap::new();

    property_set
        .enumeration_types()
        .map(|enum_type| {
            if enum_type.literals.is_empty() {
                return Err(Error::EmptyEnumeration {
                    type_name: enum_type.name.clone(),
                });
            }
            if enum_type.literals.iter().any(|l| l.trim().is_empty()) {
                return Err(Error::InvalidLiteralName {
                    type_name: enum_type.name.clone(),
                });
            }

            let type_name = java_type_name(&enum_type.name);
            if let Some(first) = derived_names.insert(type_name.clone(), enum_type.name.clone()) {
                return Err(Error::DerivedNameCollision {
                    derived: type_name,
                    first,
                    second: enum_type.name.clone(),
                });
            }

            let literal_list = render_literal_list(&enum_type.literals);
            let contents = render_enum(&package, &type_name, &literal_list);
            Ok(GeneratedFile {
                file_name: format!("{}.java", type_name),
                contents,
            })
        })
        .collect()
}
