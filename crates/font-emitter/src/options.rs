//! Names and module paths used in generated output.

/// First line of every generated module.
pub const GENERATED_HEADER: &str =
    "// This file is generated by fontdecl from a font metadata table. Do not edit by hand.";

/// Union type of every family name in the table.
pub const DEFAULT_FAMILY_TYPE: &str = "GoogleFontTypes";

/// Union of this module's family names and the complementary set.
pub const DEFAULT_COMBINED_TYPE: &str = "AllFontVariants";

/// Externally defined family-name type merged into the combined union.
pub const DEFAULT_COMPLEMENTARY_TYPE: &str = "PrimitiveFontTypes";

/// Module the complementary type is imported from.
pub const DEFAULT_COMPLEMENTARY_MODULE: &str = "../primitive/types.ts";

/// Module providing `CssVariable`, `Display` and the loader's return type.
pub const DEFAULT_TYPES_MODULE: &str = "../types.ts";

/// What every declared loader function returns.
pub const DEFAULT_RETURN_TYPE: &str = "InSpatialFontProp";

/// Appended to the warning a stub loader prints when called.
pub const DEFAULT_INSTALL_HINT: &str = "Generate the full font declarations to use it.";

/// Names and paths the emitted module refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub family_type: String,
    pub combined_type: String,
    pub complementary_type: String,
    pub complementary_module: String,
    pub types_module: String,
    pub return_type: String,
    pub install_hint: String,
}

impl EmitOptions {
    /// Type names the module declares or imports.
    pub fn type_names(&self) -> [&str; 4] {
        [
            self.family_type.as_str(),
            self.combined_type.as_str(),
            self.complementary_type.as_str(),
            self.return_type.as_str(),
        ]
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            family_type: DEFAULT_FAMILY_TYPE.to_owned(),
            combined_type: DEFAULT_COMBINED_TYPE.to_owned(),
            complementary_type: DEFAULT_COMPLEMENTARY_TYPE.to_owned(),
            complementary_module: DEFAULT_COMPLEMENTARY_MODULE.to_owned(),
            types_module: DEFAULT_TYPES_MODULE.to_owned(),
            return_type: DEFAULT_RETURN_TYPE.to_owned(),
            install_hint: DEFAULT_INSTALL_HINT.to_owned(),
        }
    }
}
