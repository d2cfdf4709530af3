use aadl_propgen::analysis::PropertySetAnalyzer;
use aadl_propgen::models::PropertyTypeDecl;
use std::path::Path;

#[test]
fn test_analyzes_fixture_property_set() {
    let analyzer = PropertySetAnalyzer::new();
    let analysis = analyzer
        .analyze_file(Path::new("tests/fixtures/my_props.aadl"))
        .unwrap();

    assert!(!analysis.has_errors(), "{:?}", analysis.diagnostics);
    let set = analysis.property_set.unwrap();
    assert_eq!(set.name, "MyProps");

    // three type declarations survive; the property definition and the
    // constant are not types
    assert_eq!(set.types.len(), 3);
    assert!(matches!(&set.types[0], PropertyTypeDecl::Enumeration(e)
        if e.name == "Error_Code" && e.literals == ["ok", "warning", "fatal"]));
    assert!(matches!(&set.types[1], PropertyTypeDecl::Units(u)
        if u.name == "Time_Units" && u.units == ["ms", "sec", "min"]));
    assert!(matches!(&set.types[2], PropertyTypeDecl::Other { name }
        if name == "Max_Retries"));
}

#[test]
fn test_broken_fixture_carries_error_diagnostics() {
    let analyzer = PropertySetAnalyzer::new();
    let analysis = analyzer
        .analyze_file(Path::new("tests/fixtures/broken_props.aadl"))
        .unwrap();

    assert!(analysis.has_errors());
    // one empty enumeration, one derived-name collision
    assert_eq!(analysis.error_count(), 2);
    assert!(analysis
        .diagnostics
        .iter()
        .any(|d| d.message.contains("declares no literals")));
    assert!(analysis
        .diagnostics
        .iter()
        .any(|d| d.message.contains("both map to the Java type name")));
}

#[test]
fn test_analyze_path_finds_every_fixture() {
    let analyzer = PropertySetAnalyzer::new();
    let analyses = analyzer
        .analyze_path(Path::new("tests/fixtures"))
        .unwrap();

    // the .java.expected fixture is not an .aadl file
    assert_eq!(analyses.len(), 2);
    // sorted order: broken_props.aadl before my_props.aadl
    assert!(analyses[0].file.ends_with("broken_props.aadl"));
    assert!(analyses[1].file.ends_with("my_props.aadl"));
}

#[test]
fn test_analyze_path_accepts_a_single_file() {
    let analyzer = PropertySetAnalyzer::new();
    let analyses = analyzer
        .analyze_path(Path::new("tests/fixtures/my_props.aadl"))
        .unwrap();
    assert_eq!(analyses.len(), 1);
    assert!(!analyses[0].has_errors());
}
