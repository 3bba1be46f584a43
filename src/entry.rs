//! The composite-key entry stored in every legality tree.

use serde::{Deserialize, Serialize};

/// Which compiled-in table contributed a rule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Base DWARF standard table.
    Standard,
    /// Vendor or DWARF-revision extension table.
    Extension,
    /// Runtime usage entries, which no table contributed.
    #[default]
    Unknown,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Standard => "standard",
            Provenance::Extension => "extension",
            Provenance::Unknown => "unknown",
        }
    }
}

/// Lexicographic three-part key. The meaning of each part depends on the
/// tree holding the entry: for the attr-form tree `key1` is the attribute
/// code, `key2` the form-class code and `key3` the form code (zero for
/// rule entries, nonzero for observed usages). The tag-attr and tag-tag
/// trees relate two codes and leave `key3` at zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ThreeKey {
    pub key1: u16,
    pub key2: u16,
    pub key3: u16,
}

impl ThreeKey {
    pub fn new(key1: u16, key2: u16, key3: u16) -> Self {
        Self { key1, key2, key3 }
    }
}

/// One resident tree entry: the key triple, the provenance of the rule
/// that created it, and a monotonically incremented usage counter.
///
/// `reserved` is always zero; it is retained for layout symmetry with the
/// record shape external tooling expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeKeyEntry {
    pub key: ThreeKey,
    pub provenance: Provenance,
    pub reserved: u8,
    pub count: u64,
}

impl ThreeKeyEntry {
    /// A rule entry seeded from a compiled-in table. Count starts at zero:
    /// rules describe legality, they are not observations.
    pub fn new_rule(key: ThreeKey, provenance: Provenance) -> Self {
        Self { key, provenance, reserved: 0, count: 0 }
    }

    /// A usage entry for a freshly observed combination.
    pub fn new_use(key: ThreeKey) -> Self {
        Self { key, provenance: Provenance::Unknown, reserved: 0, count: 1 }
    }

    /// Rule entries in the attr-form tree have a zero form code.
    pub fn is_rule(&self) -> bool {
        self.key.key3 == 0
    }

    /// Observed usages carry the form code in `key3`.
    pub fn is_usage(&self) -> bool {
        self.key.key3 != 0
    }
}

/// Form class: the coarse category one or more DWARF forms map to.
///
/// Mirrors libdwarf's `Dwarf_Form_Class` numbering so codes interchange
/// with external tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u16)]
pub enum FormClass {
    Unknown = 0,
    Address = 1,
    Block = 2,
    Constant = 3,
    ExprLoc = 4,
    Flag = 5,
    LinePtr = 6,
    LocListPtr = 7,
    MacPtr = 8,
    RangeListPtr = 9,
    Reference = 10,
    String = 11,
    FramePtr = 12,
    MacroPtr = 13,
    AddrPtr = 14,
    LocList = 15,
    LocListsPtr = 16,
    RngList = 17,
    RngListsPtr = 18,
    StrOffsetsPtr = 19,
}

impl FormClass {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Self {
        match code {
            1 => FormClass::Address,
            2 => FormClass::Block,
            3 => FormClass::Constant,
            4 => FormClass::ExprLoc,
            5 => FormClass::Flag,
            6 => FormClass::LinePtr,
            7 => FormClass::LocListPtr,
            8 => FormClass::MacPtr,
            9 => FormClass::RangeListPtr,
            10 => FormClass::Reference,
            11 => FormClass::String,
            12 => FormClass::FramePtr,
            13 => FormClass::MacroPtr,
            14 => FormClass::AddrPtr,
            15 => FormClass::LocList,
            16 => FormClass::LocListsPtr,
            17 => FormClass::RngList,
            18 => FormClass::RngListsPtr,
            19 => FormClass::StrOffsetsPtr,
            _ => FormClass::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormClass::Unknown => "DW_FORM_CLASS_UNKNOWN",
            FormClass::Address => "DW_FORM_CLASS_ADDRESS",
            FormClass::Block => "DW_FORM_CLASS_BLOCK",
            FormClass::Constant => "DW_FORM_CLASS_CONSTANT",
            FormClass::ExprLoc => "DW_FORM_CLASS_EXPRLOC",
            FormClass::Flag => "DW_FORM_CLASS_FLAG",
            FormClass::LinePtr => "DW_FORM_CLASS_LINEPTR",
            FormClass::LocListPtr => "DW_FORM_CLASS_LOCLISTPTR",
            FormClass::MacPtr => "DW_FORM_CLASS_MACPTR",
            FormClass::RangeListPtr => "DW_FORM_CLASS_RANGELISTPTR",
            FormClass::Reference => "DW_FORM_CLASS_REFERENCE",
            FormClass::String => "DW_FORM_CLASS_STRING",
            FormClass::FramePtr => "DW_FORM_CLASS_FRAMEPTR",
            FormClass::MacroPtr => "DW_FORM_CLASS_MACROPTR",
            FormClass::AddrPtr => "DW_FORM_CLASS_ADDRPTR",
            FormClass::LocList => "DW_FORM_CLASS_LOCLIST",
            FormClass::LocListsPtr => "DW_FORM_CLASS_LOCLISTSPTR",
            FormClass::RngList => "DW_FORM_CLASS_RNGLIST",
            FormClass::RngListsPtr => "DW_FORM_CLASS_RNGLISTSPTR",
            FormClass::StrOffsetsPtr => "DW_FORM_CLASS_STROFFSETSPTR",
        }
    }
}

impl std::fmt::Display for FormClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ordering_is_lexicographic() {
        let a = ThreeKey::new(1, 2, 3);
        let b = ThreeKey::new(1, 2, 4);
        let c = ThreeKey::new(1, 3, 0);
        let d = ThreeKey::new(2, 0, 0);
        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
        assert_eq!(a, ThreeKey::new(1, 2, 3));
    }

    #[test]
    fn test_rule_vs_usage_split_on_key3() {
        let rule = ThreeKeyEntry::new_rule(ThreeKey::new(0x02, 0x05, 0), Provenance::Standard);
        assert!(rule.is_rule());
        assert!(!rule.is_usage());
        assert_eq!(rule.count, 0);

        let used = ThreeKeyEntry::new_use(ThreeKey::new(0x02, 0x05, 0x0b));
        assert!(used.is_usage());
        assert_eq!(used.count, 1);
        assert_eq!(used.provenance, Provenance::Unknown);
    }

    #[test]
    fn test_form_class_code_roundtrip() {
        for code in 0..=20u16 {
            let fc = FormClass::from_code(code);
            if code <= 19 {
                assert_eq!(fc.code(), code);
            } else {
                assert_eq!(fc, FormClass::Unknown);
            }
        }
        assert_eq!(FormClass::Flag.code(), 0x05);
        assert_eq!(FormClass::LinePtr.code(), 0x06);
    }
}
