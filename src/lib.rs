//! dwcheck - legality validation and usage statistics for DWARF
//! attribute/form combinations.
//!
//! A DWARF traversal (out of scope here) reports every observed
//! `(tag, attribute, form-class, form)` tuple to a [`CheckSession`]. The
//! session validates each pair against a compiled-in rulebook, counts
//! every combination actually seen, and renders ranked usage tables when
//! the traversal is done.
//!
//! # Example
//!
//! ```
//! use dwcheck::{CheckConfig, CheckSession, FormClass};
//! use gimli::constants::{DW_AT_name, DW_FORM_strp, DW_TAG_subprogram};
//!
//! let mut session = CheckSession::new(CheckConfig::default());
//! session.build_rule_trees().unwrap();
//!
//! assert!(session.is_legal(DW_AT_name, FormClass::String));
//! session.record_attr_form_use(
//!     DW_TAG_subprogram, DW_AT_name, FormClass::String, DW_FORM_strp, 1,
//! );
//!
//! let report = session.render_usage_report().unwrap();
//! assert!(report.contains("ATTRIBUTES AND FORMS USAGE"));
//! ```

mod builder;
mod stats;

pub mod config;
pub mod entry;
pub mod error;
pub mod names;
pub mod tables;
pub mod trees;

mod session;

pub use config::CheckConfig;
pub use entry::{FormClass, Provenance, ThreeKey, ThreeKeyEntry};
pub use error::{CheckError, Result};
pub use names::{DwarfNames, HexNames, NameResolver};
pub use session::{CheckDiagnostic, CheckSession, Legality};
pub use tables::RuleTables;
pub use trees::{ThreeKeyTree, TreeSet, Upsert};
