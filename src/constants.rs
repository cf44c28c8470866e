//! Application constants for the editor round trip, secret naming rules,
//! and the command-line surface.
//!
//! This module contains the fixed values used throughout the application,
//! so the defaults the operator sees are defined in one place.

/// Editor and temporary file constants.
pub mod editor {
    /// Environment variable naming the editor program.
    pub const EDITOR_ENV: &str = "EDITOR";

    /// Editor used when `EDITOR` is unset or blank.
    pub const DEFAULT_EDITOR: &str = "vim";

    /// Prefix of the temporary file handed to the editor.
    pub const TEMP_FILE_PREFIX: &str = "smed-";

    /// Suffix of the temporary file, so editors pick JSON highlighting.
    pub const TEMP_FILE_SUFFIX: &str = ".json";

    /// Initial content for a secret that does not exist yet.
    pub const CREATE_PLACEHOLDER: &str = "{}";
}

/// Secret name validation constants.
pub mod validation {
    /// Maximum length of a secret name accepted by Secrets Manager.
    pub const MAX_SECRET_NAME_LENGTH: usize = 512;

    /// Characters Secrets Manager allows in a secret name.
    pub const VALID_SECRET_NAME_PATTERN: &str = r"^[A-Za-z0-9/_+=.@-]+$";
}

/// Remote store constants.
pub mod store {
    /// Environment variable overriding the Secrets Manager endpoint (local emulators).
    pub const ENDPOINT_URL_ENV: &str = "SMED_ENDPOINT_URL";
}

/// Command-line constants.
pub mod cli {
    /// Printed when the arguments do not form a recognized command.
    pub const USAGE: &str = "Usage: smed SECRETNAME [-lcv]";

    /// Default tracing filter when `RUST_LOG` is not set.
    pub const DEFAULT_LOG_FILTER: &str = "smed=warn";
}
