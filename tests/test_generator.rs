use aadl_propgen::generators::java;
use aadl_propgen::models::{EnumerationType, PropertySet, PropertyTypeDecl, UnitsType};

/// The exact bytes the original OSATE generator writes for this input.
const EXPECTED_ERROR_CODE_JAVA: &str = include_str!("fixtures/error_code.java.expected");

fn enumeration(name: &str, literals: &[&str]) -> PropertyTypeDecl {
    PropertyTypeDecl::Enumeration(EnumerationType {
        name: name.to_string(),
        literals: literals.iter().map(|s| s.to_string()).collect(),
    })
}

#[test]
fn test_concrete_scenario_error_code_in_my_props() {
    let set = PropertySet {
        name: "MyProps".to_string(),
        types: vec![enumeration("ERROR_CODE", &["ok", "warning", "fatal"])],
    };

    let files = java::generate(&set).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, "ErrorCode.java");
    assert_eq!(files[0].contents, EXPECTED_ERROR_CODE_JAVA);
}

#[test]
fn test_generated_file_is_byte_identical_across_runs() {
    let set = PropertySet {
        name: "MyProps".to_string(),
        types: vec![enumeration("ERROR_CODE", &["ok", "warning", "fatal"])],
    };
    let first = java::generate(&set).unwrap();
    let second = java::generate(&set).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_package_line_uses_lowercased_property_set_name() {
    let set = PropertySet {
        name: "Flight_Manager".to_string(),
        types: vec![enumeration("Mode", &["up", "down"])],
    };
    let files = java::generate(&set).unwrap();
    assert!(files[0].contents.starts_with("package flight_manager;\n"));
}

#[test]
fn test_factory_return_type_matches_enum_name() {
    let set = PropertySet {
        name: "PS".to_string(),
        types: vec![enumeration("thread_state", &["ready", "running"])],
    };
    let files = java::generate(&set).unwrap();
    assert_eq!(files[0].file_name, "ThreadState.java");
    assert!(files[0].contents.contains("public enum ThreadState {"));
    assert!(files[0]
        .contents
        .contains("public static ThreadState valueOf(PropertyExpression propertyExpression)"));
}

#[test]
fn test_empty_property_set_yields_empty_output() {
    let set = PropertySet {
        name: "Nothing".to_string(),
        types: vec![],
    };
    assert!(java::generate(&set).unwrap().is_empty());
}

#[test]
fn test_two_types_one_of_them_units_yields_one_file() {
    let set = PropertySet {
        name: "PS".to_string(),
        types: vec![
            PropertyTypeDecl::Units(UnitsType {
                name: "Mass_Units".to_string(),
                units: vec!["g".to_string(), "kg".to_string()],
            }),
            enumeration("Color", &["red", "green", "blue"]),
        ],
    };
    let files = java::generate(&set).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, "Color.java");
}

#[test]
fn test_output_preserves_declaration_order() {
    let set = PropertySet {
        name: "PS".to_string(),
        types: vec![
            enumeration("B_Type", &["x"]),
            enumeration("A_Type", &["y"]),
        ],
    };
    let names: Vec<String> = java::generate(&set)
        .unwrap()
        .into_iter()
        .map(|f| f.file_name)
        .collect();
    assert_eq!(names, vec!["BType.java", "AType.java"]);
}

#[test]
fn test_type_name_derivation_examples() {
    assert_eq!(java::java_type_name("ERROR_CODE"), "ErrorCode");
    assert_eq!(java::java_type_name("supported_dispatch_protocols"), "SupportedDispatchProtocols");
    assert_eq!(java::java_type_name("Queue_Processing_Protocol"), "QueueProcessingProtocol");
}
