//! Placeholder module for projects that have not generated full declarations.
//!
//! Every family still gets an export so imports resolve, but calling one only
//! warns and returns a system font stack.

use std::fmt;

use fontdecl_schema::CompiledFamily;

use crate::{
    literal::Quoted,
    options::{EmitOptions, GENERATED_HEADER},
};

const FALLBACK_FONT_STACK: &str = "system-ui, -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif";

/// Module-level values and helpers, in the order they are written.
const HELPERS: [&str; 5] =
    ["POPULAR_FONTS", "FALLBACK_FONT_STACK", "createFontPlaceholder", "fontFace", "getFontMap"];

/// Stub counterpart of [`DeclarationModule`](crate::DeclarationModule).
#[derive(Debug, Clone, Copy)]
pub struct StubModule<'a> {
    families: &'a [CompiledFamily],
    popular: &'a [&'a str],
    options: &'a EmitOptions,
}

impl<'a> StubModule<'a> {
    pub fn new(
        families: &'a [CompiledFamily],
        popular: &'a [&'a str],
        options: &'a EmitOptions,
    ) -> Self {
        Self { families, popular, options }
    }

    /// Top-level names the module takes before any family is exported.
    pub fn declared_names(options: &EmitOptions) -> Vec<&str> {
        let mut names = options.type_names().to_vec();
        names.extend(HELPERS);
        names
    }
}

impl fmt::Display for StubModule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let EmitOptions {
            family_type,
            combined_type,
            complementary_type,
            complementary_module,
            types_module,
            return_type,
            install_hint,
        } = self.options;

        writeln!(f, "{GENERATED_HEADER}")?;
        writeln!(f, "import type {{ {return_type} }} from {}", Quoted(types_module))?;
        writeln!(f, "import type {{ {complementary_type} }} from {}", Quoted(complementary_module))?;
        writeln!(f)?;
        writeln!(f, "/**")?;
        writeln!(f, " * Font families accepted by the loader.")?;
        writeln!(f, " * Placeholder: generate the full declarations for exact family names.")?;
        writeln!(f, " */")?;
        writeln!(f, "export type {family_type} = string")?;
        writeln!(f)?;
        writeln!(f, "export type {combined_type} = {family_type} | {complementary_type}")?;
        writeln!(f)?;

        writeln!(f, "export const POPULAR_FONTS = [")?;
        for name in self.popular {
            writeln!(f, "  {},", Quoted(name))?;
        }
        writeln!(f, "]")?;
        writeln!(f)?;

        writeln!(f, "const FALLBACK_FONT_STACK = {}", Quoted(FALLBACK_FONT_STACK))?;
        writeln!(f)?;
        writeln!(
            f,
            "function createFontPlaceholder(fontName: string): (options: unknown) => {return_type} {{"
        )?;
        writeln!(f, "  return (_options: unknown) => {{")?;
        writeln!(
            f,
            "    console.warn('Font \"' + fontName + '\" is not installed. ' + {})",
            Quoted(install_hint)
        )?;
        writeln!(
            f,
            "    return {{ className: '', style: {{ fontFamily: FALLBACK_FONT_STACK }} }} as {return_type}"
        )?;
        writeln!(f, "  }}")?;
        writeln!(f, "}}")?;
        writeln!(f)?;

        for family in self.families {
            writeln!(
                f,
                "export const {} = createFontPlaceholder({})",
                family.identifier,
                Quoted(&family.family)
            )?;
        }
        if !self.families.is_empty() {
            writeln!(f)?;
        }

        writeln!(f, "export function fontFace(family: string): string {{")?;
        writeln!(f, "  return '/* Placeholder for font: ' + family + ' */'")?;
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, "export function getFontMap(): Record<string, unknown> {{")?;
        writeln!(
            f,
            "  console.warn('Font declarations are not installed. Using stub implementation.')"
        )?;
        writeln!(f, "  return {{}}")?;
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, "export default {{")?;
        writeln!(f, "  fontFace,")?;
        writeln!(f, "  getFontMap,")?;
        writeln!(f, "  isStub: true,")?;
        writeln!(f, "}}")
    }
}
