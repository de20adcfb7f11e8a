/// Environment variable pointing to the project root
pub const HARMONY_DIR: &str = "HARMONY_DIR";

/// Directory, relative to the project root, receiving generated files
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory of `DATA_GENERATED` receiving recorded runs
pub const RECORDS: &str = "records";
