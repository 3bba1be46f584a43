//! Display-name lookup for DWARF codes.
//!
//! The crate never owns DWARF name tables: rendering goes through this
//! trait so the embedding analyzer can plug in whatever naming service it
//! already has. Two implementations ship here: [`DwarfNames`], which
//! delegates to gimli's constant tables, and [`HexNames`], a bare fallback
//! that prints raw codes.

use crate::entry::FormClass;

/// External name-lookup service for attribute, tag, form and form-class
/// codes. Only consulted when rendering diagnostics or the final report.
pub trait NameResolver {
    fn attribute_name(&self, code: u16) -> String;
    fn tag_name(&self, code: u16) -> String;
    fn form_name(&self, code: u16) -> String;
    fn form_class_name(&self, code: u16) -> String;
}

/// Name lookup backed by gimli's constant tables, falling back to hex for
/// codes gimli does not know.
#[derive(Debug, Clone, Copy, Default)]
pub struct DwarfNames;

impl NameResolver for DwarfNames {
    fn attribute_name(&self, code: u16) -> String {
        match gimli::DwAt(code).static_string() {
            Some(name) => name.to_string(),
            None => format!("<DW_AT 0x{code:04x}>"),
        }
    }

    fn tag_name(&self, code: u16) -> String {
        match gimli::DwTag(code).static_string() {
            Some(name) => name.to_string(),
            None => format!("<DW_TAG 0x{code:04x}>"),
        }
    }

    fn form_name(&self, code: u16) -> String {
        match gimli::DwForm(code).static_string() {
            Some(name) => name.to_string(),
            None => format!("<DW_FORM 0x{code:04x}>"),
        }
    }

    fn form_class_name(&self, code: u16) -> String {
        FormClass::from_code(code).as_str().to_string()
    }
}

/// Raw-code fallback for embedders without a naming service.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexNames;

impl NameResolver for HexNames {
    fn attribute_name(&self, code: u16) -> String {
        format!("0x{code:04x}")
    }

    fn tag_name(&self, code: u16) -> String {
        format!("0x{code:04x}")
    }

    fn form_name(&self, code: u16) -> String {
        format!("0x{code:04x}")
    }

    fn form_class_name(&self, code: u16) -> String {
        format!("0x{code:04x}")
    }
}
