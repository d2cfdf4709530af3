//! The fixed Java enum template.
//!
//! Templates are authored indented so they read like the Java they produce;
//! the common authoring indent is stripped before emission. Generated
//! sources elsewhere depend on the exact bytes of this output (enum member
//! names, the `valueOf` factory signature and its dispatch over reference
//! kinds), so nothing here may change shape without coordinating downstream.

/// Uppercase each literal and join them as the enum body: comma, newline,
/// then the five tabs matching the literal list's authoring indentation.
pub fn render_literal_list(literals: &[String]) -> String {
    literals
        .iter()
        .map(|literal| literal.to_uppercase())
        .collect::<Vec<_>>()
        .join(",\n\t\t\t\t\t")
}

/// Render one enum source. `literal_list` is the output of
/// [`render_literal_list`]; `package` is the lowercased property set name.
pub fn render_enum(package: &str, type_name: &str, literal_list: &str) -> String {
    dedent(&format!(
        r#"
				package {package};

				import org.osate.aadl2.AbstractNamedValue;
				import org.osate.aadl2.EnumerationLiteral;
				import org.osate.aadl2.NamedValue;
				import org.osate.aadl2.Property;
				import org.osate.aadl2.PropertyConstant;
				import org.osate.aadl2.PropertyExpression;

				public enum {type_name} {{
					{literal_list};
					
					public static {type_name} valueOf(PropertyExpression propertyExpression) {{
						AbstractNamedValue abstractNamedValue = ((NamedValue) propertyExpression).getNamedValue();
						if (abstractNamedValue instanceof EnumerationLiteral) {{
							return valueOf(((EnumerationLiteral) abstractNamedValue).getName().toUpperCase());
						}} else if (abstractNamedValue instanceof Property) {{
							throw new IllegalArgumentException("Reference to property not supported");
						}} else if (abstractNamedValue instanceof PropertyConstant) {{
							throw new IllegalArgumentException("Reference to property constant not supported");
						}} else {{
							throw new AssertionError("Unexpected type: " + abstractNamedValue.getClass().getName());
						}}
					}}
				}}
				"#
    ))
}

/// Strip the common leading indent of all non-blank lines, drop the first
/// and last lines when blank, and keep no trailing newline. Blank interior
/// lines lose the same number of leading characters as everything else, so a
/// blank line indented one level deeper than the common indent keeps a
/// single tab. Assumes the indent uses a single character kind (tabs here).
pub(crate) fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let min_indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            if (index == 0 || index == last) && line.trim().is_empty() {
                None
            } else {
                Some(line.get(min_indent..).unwrap_or(""))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_literal_list_uppercases_and_joins() {
        let literals = vec!["ok".to_string(), "warning".to_string(), "fatal".to_string()];
        assert_eq!(
            render_literal_list(&literals),
            "OK,\n\t\t\t\t\tWARNING,\n\t\t\t\t\tFATAL"
        );
    }

    #[test]
    fn test_render_literal_list_single_literal() {
        assert_eq!(render_literal_list(&["on".to_string()]), "ON");
    }

    #[test]
    fn test_dedent_strips_common_indent() {
        assert_eq!(dedent("\n\t\ta\n\t\t\tb\n\t\t"), "a\n\tb");
    }

    #[test]
    fn test_dedent_blank_interior_line_keeps_excess_indent() {
        assert_eq!(dedent("\n\ta\n\t\t\n\tb\n\t"), "a\n\t\nb");
    }

    #[test]
    fn test_dedent_short_blank_interior_line_becomes_empty() {
        assert_eq!(dedent("\n\t\ta\n\t\n\t\tb\n"), "a\n\nb");
    }

    #[test]
    fn test_rendered_enum_has_no_trailing_newline() {
        let contents = render_enum("myprops", "ErrorCode", "OK");
        assert!(contents.ends_with('}'));
        assert!(!contents.ends_with('\n'));
    }

    #[test]
    fn test_rendered_enum_package_and_type_name() {
        let contents = render_enum("myprops", "ErrorCode", "OK");
        assert!(contents.starts_with("package myprops;\n"));
        assert!(contents.contains("public enum ErrorCode {"));
        assert!(contents
            .contains("public static ErrorCode valueOf(PropertyExpression propertyExpression)"));
    }

    #[test]
    fn test_rendered_enum_blank_line_after_literals_is_one_tab() {
        let contents = render_enum("p", "T", "A");
        assert!(contents.contains("\tA;\n\t\n\tpublic static"));
    }
}
