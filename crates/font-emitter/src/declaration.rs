//! The full declaration module.

use std::fmt;

use fontdecl_schema::{CompiledFamily, FamilySchema};

use crate::{
    literal::{Quoted, Union},
    options::{EmitOptions, GENERATED_HEADER},
};

/// Types imported from the types module next to the return type.
const SHARED_TYPES: [&str; 2] = ["CssVariable", "Display"];

/// One declaration per family plus the family-name unions, in input order.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationModule<'a> {
    families: &'a [CompiledFamily],
    options: &'a EmitOptions,
}

impl<'a> DeclarationModule<'a> {
    pub fn new(families: &'a [CompiledFamily], options: &'a EmitOptions) -> Self {
        Self { families, options }
    }

    /// Top-level names the module takes before any family is declared.
    pub fn declared_names(options: &EmitOptions) -> Vec<&str> {
        let mut names = SHARED_TYPES.to_vec();
        names.extend(options.type_names());
        names
    }

    fn write_imports(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let EmitOptions { return_type, types_module, complementary_type, complementary_module, .. } =
            self.options;
        let [css_variable, display] = SHARED_TYPES;
        writeln!(
            f,
            "import type {{ {css_variable}, {display}, {return_type} }} from {}",
            Quoted(types_module)
        )?;
        writeln!(f, "import type {{ {complementary_type} }} from {}", Quoted(complementary_module))
    }

    fn write_family_union(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family_type = &self.options.family_type;
        if self.families.is_empty() {
            return writeln!(f, "export type {family_type} = never");
        }
        writeln!(f, "export type {family_type} =")?;
        for family in self.families {
            writeln!(f, "  | {}", Quoted(&family.family))?;
        }
        Ok(())
    }

    fn write_declaration(&self, f: &mut fmt::Formatter<'_>, family: &CompiledFamily) -> fmt::Result {
        let FamilySchema { weight, style, subsets, variation } = &family.schema;
        let weight = Union(weight.members());
        let style = Union(style.members());
        let subsets = Union(subsets.members());

        writeln!(
            f,
            "export declare function {}<T extends CssVariable | undefined = undefined>(options: {{",
            family.identifier
        )?;
        writeln!(f, "  weight: {weight} | Array<{weight}>")?;
        writeln!(f, "  style?: {style} | Array<{style}>")?;
        writeln!(f, "  display?: Display")?;
        writeln!(f, "  variable?: T")?;
        writeln!(f, "  preload?: boolean")?;
        writeln!(f, "  fallback?: string[]")?;
        writeln!(f, "  adjustFontFallback?: boolean")?;
        writeln!(f, "  subsets?: Array<{subsets}>")?;
        for axis in variation.axes() {
            writeln!(
                f,
                "  {}?: number // min: {}, max: {}, default: {}",
                axis.tag, axis.min, axis.max, axis.default
            )?;
        }
        writeln!(f, "}}): {}", self.options.return_type)
    }
}

impl fmt::Display for DeclarationModule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{GENERATED_HEADER}")?;
        self.write_imports(f)?;
        writeln!(f)?;
        self.write_family_union(f)?;
        writeln!(f)?;

        let EmitOptions { combined_type, family_type, complementary_type, .. } = self.options;
        writeln!(f, "export type {combined_type} = {family_type} | {complementary_type}")?;

        for family in self.families {
            writeln!(f)?;
            self.write_declaration(f, family)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontdecl_metadata::{AxisSpec, FontFamilyEntry};
    use fontdecl_schema::build_schema;
    use serde_json::Number;

    fn compile(entry: FontFamilyEntry, identifier: &str) -> CompiledFamily {
        CompiledFamily {
            schema: build_schema(&entry).unwrap(),
            identifier: identifier.to_owned(),
            family: entry.family,
        }
    }

    fn minimal() -> CompiledFamily {
        compile(FontFamilyEntry::new("Foo", ["400"]).with_subsets(["latin"]), "Foo")
    }

    fn variable() -> CompiledFamily {
        let axis = AxisSpec::new("wght", Number::from(100), Number::from(900), Number::from(400));
        compile(
            FontFamilyEntry::new("Bar Baz", ["400", "variable"])
                .with_subsets(["latin"])
                .with_axes([axis]),
            "Bar_Baz",
        )
    }

    fn render(families: &[CompiledFamily]) -> String {
        DeclarationModule::new(families, &EmitOptions::default()).to_string()
    }

    #[test]
    fn test_minimal_family() {
        let text = render(&[minimal()]);
        let expected = "\
export declare function Foo<T extends CssVariable | undefined = undefined>(options: {
  weight: '400' | Array<'400'>
  style?: never | Array<never>
  display?: Display
  variable?: T
  preload?: boolean
  fallback?: string[]
  adjustFontFallback?: boolean
  subsets?: Array<'latin'>
}): InSpatialFontProp
";
        assert!(text.ends_with(expected), "unexpected output:\n{text}");
    }

    #[test]
    fn test_variable_family_axis_comment() {
        let text = render(&[variable()]);
        assert!(text.contains("export declare function Bar_Baz<"));
        assert!(text.contains("  weight: '400' | 'variable' | Array<'400' | 'variable'>\n"));
        assert!(text.contains("  subsets?: Array<'latin'>\n  wght?: number // min: 100, max: 900, default: 400\n}"));
    }

    #[test]
    fn test_empty_subsets_emitted() {
        let family = compile(FontFamilyEntry::new("Foo", ["400"]), "Foo");
        let text = render(&[family]);
        assert!(text.contains("  subsets?: Array<never>\n"));
        assert!(!text.contains("string>"));
    }

    #[test]
    fn test_family_union_in_order() {
        let text = render(&[variable(), minimal()]);
        assert!(text.contains("export type GoogleFontTypes =\n  | 'Bar Baz'\n  | 'Foo'\n\n"));
        let bar = text.find("function Bar_Baz").unwrap();
        let foo = text.find("function Foo").unwrap();
        assert!(bar < foo);
    }

    #[test]
    fn test_header_and_combined_type() {
        let text = render(&[minimal()]);
        assert!(text.starts_with(GENERATED_HEADER));
        assert!(text.contains(
            "import type { CssVariable, Display, InSpatialFontProp } from '../types.ts'\n"
        ));
        assert!(text.contains("import type { PrimitiveFontTypes } from '../primitive/types.ts'\n"));
        assert!(text.contains("export type AllFontVariants = GoogleFontTypes | PrimitiveFontTypes\n"));
    }

    #[test]
    fn test_empty_module() {
        let text = render(&[]);
        assert!(text.contains("export type GoogleFontTypes = never\n"));
        assert!(!text.contains("declare function"));
    }

    #[test]
    fn test_custom_names() {
        let options = EmitOptions {
            family_type: "WebFamily".into(),
            combined_type: "AnyFamily".into(),
            complementary_type: "LocalFamily".into(),
            return_type: "LoadedFont".into(),
            ..EmitOptions::default()
        };
        let families = [minimal()];
        let text = DeclarationModule::new(&families, &options).to_string();
        assert!(text.contains("export type AnyFamily = WebFamily | LocalFamily\n"));
        assert!(text.contains("}): LoadedFont\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let families = [variable(), minimal()];
        assert_eq!(render(&families), render(&families));
    }

    #[test]
    fn test_declared_names_are_written() {
        let options = EmitOptions::default();
        let text = DeclarationModule::new(&[], &options).to_string();
        let names = DeclarationModule::declared_names(&options);
        assert_eq!(
            names,
            [
                "CssVariable",
                "Display",
                "GoogleFontTypes",
                "AllFontVariants",
                "PrimitiveFontTypes",
                "InSpatialFontProp",
            ]
        );
        assert!(!names.contains(&"fontFace"));
        for name in names {
            assert!(text.contains(name), "`{name}` not in declaration module");
        }
    }
}
