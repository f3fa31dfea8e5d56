//! # Font Emitter
//!
//! Renders compiled font families as TypeScript. Rendering is pure: both
//! module types implement [`Display`](std::fmt::Display), so the same input
//! always produces the same bytes.
//!
//! ## Example
//!
//! ```
//! use fontdecl_emitter::{DeclarationModule, EmitOptions};
//!
//! let options = EmitOptions::default();
//! let text = DeclarationModule::new(&[], &options).to_string();
//! assert!(text.contains("export type GoogleFontTypes = never"));
//! ```

mod declaration;
mod literal;
mod options;
mod stub;

pub use declaration::DeclarationModule;
pub use literal::{Quoted, Union};
pub use options::{
    DEFAULT_COMBINED_TYPE, DEFAULT_COMPLEMENTARY_MODULE, DEFAULT_COMPLEMENTARY_TYPE,
    DEFAULT_FAMILY_TYPE, DEFAULT_INSTALL_HINT, DEFAULT_RETURN_TYPE, DEFAULT_TYPES_MODULE,
    EmitOptions, GENERATED_HEADER,
};
pub use stub::StubModule;
