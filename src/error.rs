use serde::{ser::Serializer, Serialize};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] crate::interface::config::ConfigError),

    /// The input file carries error-severity diagnostics; generation is
    /// refused entirely for that file.
    #[error("Cannot generate Java types for \"{file}\" because it has errors.")]
    BlockedByValidation { file: String, error_count: usize },

    #[error("Enumeration type '{type_name}' declares no literals")]
    EmptyEnumeration { type_name: String },

    #[error("Enumeration type '{type_name}' has a literal with an empty name")]
    InvalidLiteralName { type_name: String },

    #[error("Enumeration types '{first}' and '{second}' both map to the Java type name '{derived}'")]
    DerivedNameCollision {
        derived: String,
        first: String,
        second: String,
    },

    /// Two property sets in one run would write into the same package
    /// folder; the later set's output would silently erase the earlier one's.
    #[error("Property sets '{first}' and '{second}' both map to the output package '{package}'")]
    DuplicatePackage {
        package: String,
        first: String,
        second: String,
    },

    #[error("No property set files found under: {0}")]
    NoPropertySets(String),
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
