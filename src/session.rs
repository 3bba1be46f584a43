//! The analysis session: tree ownership, validation and recording.
//!
//! One `CheckSession` lives for one analysis run. It owns the four trees,
//! builds the rule trees once (tied object files re-enter the build as a
//! no-op), answers legality queries during traversal, accumulates usage
//! counts, and renders the final statistics report.

use serde::Serialize;
use tracing::warn;

use crate::builder;
use crate::config::CheckConfig;
use crate::entry::{FormClass, Provenance, ThreeKey};
use crate::error::Result;
use crate::names::{DwarfNames, NameResolver};
use crate::stats;
use crate::tables::RuleTables;
use crate::trees::TreeSet;

use gimli::{DwAt, DwForm, DwTag};

/// Outcome of a legality query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legality {
    /// The combination is in the rulebook; carries which table knew it.
    Legal(Provenance),
    /// Not a recognized combination.
    Unknown,
}

/// One illegal-combination diagnostic, collected when tag-attr checking
/// is enabled. Names come from the session's resolver at record time.
#[derive(Debug, Clone, Serialize)]
pub struct CheckDiagnostic {
    pub tag: u16,
    pub attribute: u16,
    pub form_class: u16,
    pub tag_name: String,
    pub attribute_name: String,
    pub form_class_name: String,
    /// DIE nesting depth at the point of observation.
    pub indent_level: usize,
}

/// Session-wide validation and usage state.
pub struct CheckSession {
    config: CheckConfig,
    tables: RuleTables,
    trees: TreeSet,
    names: Box<dyn NameResolver + Send + Sync>,
    diagnostics: Vec<CheckDiagnostic>,
    attr_formclass_checks: u64,
    attr_formclass_errors: u64,
    major_errors: u64,
}

impl CheckSession {
    /// A session over the compiled-in DWARF rulebook, resolving names
    /// through gimli's constant tables.
    pub fn new(config: CheckConfig) -> Self {
        Self::with_tables(config, RuleTables::builtin())
    }

    /// A session over a caller-supplied rulebook.
    pub fn with_tables(config: CheckConfig, tables: RuleTables) -> Self {
        Self {
            config,
            tables,
            trees: TreeSet::new(),
            names: Box::new(DwarfNames),
            diagnostics: Vec::new(),
            attr_formclass_checks: 0,
            attr_formclass_errors: 0,
            major_errors: 0,
        }
    }

    /// Replace the name-lookup service used for diagnostics and reports.
    pub fn with_names(mut self, names: impl NameResolver + Send + Sync + 'static) -> Self {
        self.names = Box::new(names);
        self
    }

    /// Build the three rule trees plus the tag-use no-op build. Safe to
    /// call once per object file; already-built trees are left alone.
    pub fn build_rule_trees(&mut self) -> Result<()> {
        builder::build_all(&mut self.trees, &self.tables)
    }

    /// Whether `(attribute, form_class)` is a recognized combination,
    /// honoring the extension-suppression flag. Never mutates any tree.
    pub fn is_legal(&self, attr: DwAt, form_class: FormClass) -> bool {
        match self.legality(attr, form_class) {
            Legality::Legal(Provenance::Extension) => !self.config.suppress_extension_tables,
            Legality::Legal(_) => true,
            Legality::Unknown => false,
        }
    }

    /// Legality plus the provenance of the matching rule, ignoring the
    /// extension-suppression flag.
    pub fn legality(&self, attr: DwAt, form_class: FormClass) -> Legality {
        let probe = ThreeKey::new(attr.0, form_class.code(), 0);
        match self.trees.attr_form.find(&probe) {
            Some(rule) => Legality::Legal(rule.provenance),
            None => Legality::Unknown,
        }
    }

    /// Record one observed attribute instance.
    ///
    /// Validates the attribute/form-class pair first; an illegal
    /// combination produces a diagnostic (when checking is enabled) but
    /// never blocks counting, so unusual-but-real data still shows up in
    /// the statistics.
    pub fn record_attr_form_use(
        &mut self,
        tag: DwTag,
        attr: DwAt,
        form_class: FormClass,
        form: DwForm,
        indent_level: usize,
    ) {
        self.attr_formclass_checks += 1;
        if !self.is_legal(attr, form_class) {
            self.attr_formclass_errors += 1;
            if self.config.check_tag_attr {
                let diag = CheckDiagnostic {
                    tag: tag.0,
                    attribute: attr.0,
                    form_class: form_class.code(),
                    tag_name: self.names.tag_name(tag.0),
                    attribute_name: self.names.attribute_name(attr.0),
                    form_class_name: self.names.form_class_name(form_class.code()),
                    indent_level,
                };
                warn!(
                    tag = %diag.tag_name,
                    attribute = %diag.attribute_name,
                    form_class = %diag.form_class_name,
                    "check the attr-formclass combination"
                );
                self.diagnostics.push(diag);
            }
        }
        self.trees
            .attr_form
            .record_use(ThreeKey::new(attr.0, form_class.code(), form.0));
    }

    /// Count one use of `tag`. First insertion initializes the tag-use
    /// tree; no build step is involved.
    pub fn record_tag_use(&mut self, tag: DwTag) {
        self.trees.tag_use.record_use(ThreeKey::new(tag.0, 0, 0));
    }

    /// Accumulated per-tag counts, ascending by tag code.
    pub fn tag_use_counts(&self) -> Vec<(DwTag, u64)> {
        self.trees
            .tag_use
            .iter()
            .map(|e| (DwTag(e.key.key1), e.count))
            .collect()
    }

    /// Render the four usage tables. Read-only over the trees; a failed
    /// snapshot bumps the major-error counter and surfaces the failure.
    pub fn render_usage_report(&mut self) -> Result<String> {
        match stats::render_usage_report(&self.trees, self.names.as_ref()) {
            Ok(report) => Ok(report),
            Err(err) => {
                self.major_errors += 1;
                warn!(error = %err, "attr/form usage report failed");
                Err(err)
            }
        }
    }

    /// Release every entry of all four trees and return to the unbuilt
    /// state. The tag-use tree is cleared unconditionally.
    pub fn reset(&mut self) {
        self.trees.clear_all();
    }

    /// Diagnostics collected so far, in observation order.
    pub fn diagnostics(&self) -> &[CheckDiagnostic] {
        &self.diagnostics
    }

    /// Number of attr/form-class checks performed.
    pub fn attr_formclass_checks(&self) -> u64 {
        self.attr_formclass_checks
    }

    /// Number of checks that found an unrecognized combination.
    pub fn attr_formclass_errors(&self) -> u64 {
        self.attr_formclass_errors
    }

    /// Failures observed while reporting.
    pub fn major_errors(&self) -> u64 {
        self.major_errors
    }

    /// The session's trees, for read-only inspection.
    pub fn trees(&self) -> &TreeSet {
        &self.trees
    }
}

impl std::fmt::Debug for CheckSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckSession")
            .field("config", &self.config)
            .field("attr_form_entries", &self.trees.attr_form.len())
            .field("tag_attr_entries", &self.trees.tag_attr.len())
            .field("tag_tag_entries", &self.trees.tag_tag.len())
            .field("tag_use_entries", &self.trees.tag_use.len())
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{AfRow, TagAttrRow, TagTagRow};
    use gimli::constants::*;

    static AF_STD: &[AfRow] = &[(DW_AT_location, FormClass::Flag)];
    static AF_EXT: &[AfRow] = &[(DW_AT_MIPS_fde, FormClass::Constant)];
    static TA: &[TagAttrRow] = &[(DW_TAG_compile_unit, &[DW_AT_name])];
    static TT: &[TagTagRow] = &[(DW_TAG_compile_unit, &[DW_TAG_subprogram])];

    fn tiny_tables() -> RuleTables {
        RuleTables {
            attr_formclass_std: AF_STD,
            attr_formclass_ext: AF_EXT,
            tag_attr_std: TA,
            tag_attr_ext: &[],
            tag_tag_std: TT,
            tag_tag_ext: &[],
        }
    }

    fn built_session(config: CheckConfig) -> CheckSession {
        let mut session = CheckSession::with_tables(config, tiny_tables());
        session.build_rule_trees().unwrap();
        session
    }

    #[test]
    fn test_standard_rule_is_legal_under_either_flag() {
        for suppress in [false, true] {
            let config = CheckConfig { suppress_extension_tables: suppress, ..Default::default() };
            let session = built_session(config);
            assert!(session.is_legal(DW_AT_location, FormClass::Flag));
            assert_eq!(
                session.legality(DW_AT_location, FormClass::Flag),
                Legality::Legal(Provenance::Standard)
            );
        }
    }

    #[test]
    fn test_extension_rule_respects_suppression() {
        let session = built_session(CheckConfig::default());
        assert!(session.is_legal(DW_AT_MIPS_fde, FormClass::Constant));

        let session = built_session(CheckConfig::new().with_extension_tables_suppressed());
        assert!(!session.is_legal(DW_AT_MIPS_fde, FormClass::Constant));
        // The provenance view is unaffected by the flag.
        assert_eq!(
            session.legality(DW_AT_MIPS_fde, FormClass::Constant),
            Legality::Legal(Provenance::Extension)
        );
    }

    #[test]
    fn test_unknown_combination_is_illegal() {
        let session = built_session(CheckConfig::default());
        assert!(!session.is_legal(DW_AT_location, FormClass::LinePtr));
        assert_eq!(session.legality(DW_AT_location, FormClass::LinePtr), Legality::Unknown);
    }

    #[test]
    fn test_validation_does_not_mutate_trees() {
        let session = built_session(CheckConfig::default());
        let before = session.trees().attr_form.len();
        session.is_legal(DW_AT_location, FormClass::Flag);
        session.is_legal(DW_AT_location, FormClass::LinePtr);
        assert_eq!(session.trees().attr_form.len(), before);
    }

    #[test]
    fn test_recording_counts_checks_and_errors() {
        let mut session = built_session(CheckConfig::default());
        session.record_attr_form_use(
            DW_TAG_variable, DW_AT_location, FormClass::Flag, DW_FORM_flag, 2,
        );
        session.record_attr_form_use(
            DW_TAG_variable, DW_AT_location, FormClass::LinePtr, DW_FORM_data4, 2,
        );
        assert_eq!(session.attr_formclass_checks(), 2);
        assert_eq!(session.attr_formclass_errors(), 1);
        // Checking disabled: no diagnostic, but the error was counted.
        assert!(session.diagnostics().is_empty());
    }

    #[test]
    fn test_diagnostics_gated_by_check_flag() {
        let mut session = built_session(CheckConfig::new().with_tag_attr_checking());
        session.record_attr_form_use(
            DW_TAG_variable, DW_AT_location, FormClass::LinePtr, DW_FORM_data4, 3,
        );
        let diags = session.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].attribute, DW_AT_location.0);
        assert_eq!(diags[0].form_class, FormClass::LinePtr.code());
        assert_eq!(diags[0].attribute_name, "DW_AT_location");
        assert_eq!(diags[0].form_class_name, "DW_FORM_CLASS_LINEPTR");
        assert_eq!(diags[0].indent_level, 3);
    }

    #[test]
    fn test_illegal_combination_is_still_recorded() {
        let mut session = built_session(CheckConfig::default());
        session.record_attr_form_use(
            DW_TAG_variable, DW_AT_location, FormClass::LinePtr, DW_FORM_data4, 0,
        );
        let key = ThreeKey::new(DW_AT_location.0, FormClass::LinePtr.code(), DW_FORM_data4.0);
        assert_eq!(session.trees().attr_form.find(&key).unwrap().count, 1);
    }

    #[test]
    fn test_tag_use_accumulates() {
        let mut session = built_session(CheckConfig::default());
        session.record_tag_use(DW_TAG_subprogram);
        session.record_tag_use(DW_TAG_subprogram);
        session.record_tag_use(DW_TAG_variable);
        let counts = session.tag_use_counts();
        assert_eq!(
            counts,
            vec![(DW_TAG_subprogram, 2), (DW_TAG_variable, 1)]
        );
    }

    #[test]
    fn test_reset_returns_to_unbuilt() {
        let mut session = built_session(CheckConfig::default());
        session.record_tag_use(DW_TAG_variable);
        session.reset();
        assert!(session.trees().attr_form.is_empty());
        assert!(session.trees().tag_use.is_empty());
        // A fresh build repopulates.
        session.build_rule_trees().unwrap();
        assert_eq!(session.trees().attr_form.len(), 2);
    }
}
