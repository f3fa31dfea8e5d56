//! Configuration constants for declaration generation.

/// Metadata table filename looked up when no input is given.
pub const DEFAULT_TABLE_FILENAME: &str = "font-map.json";

/// Declaration module filename written when no output is given.
pub const DEFAULT_OUTPUT_FILENAME: &str = "fonts.ts";

/// Stub module filename written when no output is given.
pub const DEFAULT_STUB_FILENAME: &str = "stub.ts";

/// Prefix of the scratch file an output is staged in before the rename.
pub const TEMP_FILE_PREFIX: &str = ".fontdecl-";

/// Unix mode of a newly created output file.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Families selected by `--popular` and listed in stub modules.
pub const POPULAR_FONTS: &[&str] = &[
    "Roboto",
    "Open Sans",
    "Lato",
    "Montserrat",
    "Poppins",
    "Inter",
    "Raleway",
    "Nunito",
    "Ubuntu",
    "Rubik",
    "Roboto Mono",
    "Roboto Condensed",
    "Oswald",
    "Source Sans Pro",
    "Dosis",
    "DM Sans",
    "PT Sans",
    "Noto Sans",
    "Mukta",
    "Work Sans",
];
