//! # AADL Propgen
//!
//! Generate Java enum sources from the enumeration property types of AADL
//! property sets.
//!
//! For every `Name : type enumeration (...)` declaration in a property set,
//! one `<TypeName>.java` file is produced in a package named after the
//! lowercased property set, containing a Java enum with the uppercased
//! literals and a `valueOf(PropertyExpression)` factory that resolves
//! enumeration literal references at runtime. Units types are
//! enumeration-like but excluded. Output for a property set replaces
//! whatever a previous run generated for it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate Java sources for every .aadl file under the current directory
//! aadl-propgen generate -i . -o ./src-gen
//!
//! # Only analyze and report diagnostics
//! aadl-propgen check -i my_props.aadl
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,no_run
//! use aadl_propgen::{generate_from_config, GenerateConfig};
//!
//! let config = GenerateConfig {
//!     input_path: "./props".to_string(),
//!     output_path: "./src-gen".to_string(),
//!     verbose: Some(true),
//! };
//!
//! let report = generate_from_config(&config)?;
//! # Ok::<(), aadl_propgen::Error>(())
//! ```
//!
//! The generation kernel itself is pure and available directly:
//!
//! ```rust
//! use aadl_propgen::generators::java;
//! use aadl_propgen::models::{EnumerationType, PropertySet, PropertyTypeDecl};
//!
//! let set = PropertySet {
//!     name: "MyProps".to_string(),
//!     types: vec![PropertyTypeDecl::Enumeration(EnumerationType {
//!         name: "ERROR_CODE".to_string(),
//!         literals: vec!["ok".to_string(), "fatal".to_string()],
//!     })],
//! };
//! let files = java::generate(&set).unwrap();
//! assert_eq!(files[0].file_name, "ErrorCode.java");
//! ```

pub mod analysis;
mod error;
pub mod generators;
pub mod interface;
pub mod models;

pub use error::{Error, Result};
pub use models::*;

// Convenience re-exports for common use cases
pub use interface::config::GenerateConfig;
pub use interface::output::Logger;
pub use interface::{analyze_inputs, generate_from_config, GenerateReport};
