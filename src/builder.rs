//! Builds the rule trees from the compiled-in tables.

use tracing::debug;

use crate::entry::{Provenance, ThreeKey};
use crate::error::Result;
use crate::tables::{AfRow, RuleTables, TagAttrRow, TagTagRow};
use crate::trees::{ThreeKeyTree, TreeSet};

/// Populate the three rule trees from `tables`.
///
/// Idempotent: when the attr-form tree already has contents the whole
/// build returns immediately, so tied object files analyzed in one
/// session re-enter initialization safely. Short-circuits on the first
/// failure; a duplicate triple in any table is fatal to the call.
pub fn build_all(trees: &mut TreeSet, tables: &RuleTables) -> Result<()> {
    if !trees.attr_form.is_empty() {
        return Ok(());
    }
    build_attr_form(&mut trees.attr_form, tables)?;
    build_tag_attr(&mut trees.tag_attr, tables)?;
    build_tag_tag(&mut trees.tag_tag, tables)?;
    build_tag_use(&mut trees.tag_use)?;
    debug!(
        attr_form = trees.attr_form.len(),
        tag_attr = trees.tag_attr.len(),
        tag_tag = trees.tag_tag.len(),
        "rule trees built"
    );
    Ok(())
}

/// Attr/form-class rules: one entry per row, form code zero, count zero.
fn build_attr_form(tree: &mut ThreeKeyTree, tables: &RuleTables) -> Result<()> {
    insert_af_rows(tree, tables.attr_formclass_std, Provenance::Standard)?;
    insert_af_rows(tree, tables.attr_formclass_ext, Provenance::Extension)
}

fn insert_af_rows(
    tree: &mut ThreeKeyTree,
    rows: &[AfRow],
    provenance: Provenance,
) -> Result<()> {
    for (attr, class) in rows {
        if attr.0 == 0 || class.code() == 0 {
            // Sentinel codes never describe a legal combination.
            continue;
        }
        tree.insert_rule(ThreeKey::new(attr.0, class.code(), 0), provenance)?;
    }
    Ok(())
}

/// Tag/attribute rules: the extension matrix first, then the standard
/// matrix, one entry per `(head, member)` pair.
fn build_tag_attr(tree: &mut ThreeKeyTree, tables: &RuleTables) -> Result<()> {
    insert_tag_attr_rows(tree, tables.tag_attr_ext, Provenance::Extension)?;
    insert_tag_attr_rows(tree, tables.tag_attr_std, Provenance::Standard)
}

fn insert_tag_attr_rows(
    tree: &mut ThreeKeyTree,
    rows: &[TagAttrRow],
    provenance: Provenance,
) -> Result<()> {
    for (head, members) in rows {
        if head.0 == 0 {
            continue;
        }
        for member in members.iter() {
            if member.0 == 0 {
                continue;
            }
            tree.insert_rule(ThreeKey::new(head.0, member.0, 0), provenance)?;
        }
    }
    Ok(())
}

/// Tag containment rules, same expansion as tag/attribute.
fn build_tag_tag(tree: &mut ThreeKeyTree, tables: &RuleTables) -> Result<()> {
    insert_tag_tag_rows(tree, tables.tag_tag_ext, Provenance::Extension)?;
    insert_tag_tag_rows(tree, tables.tag_tag_std, Provenance::Standard)
}

fn insert_tag_tag_rows(
    tree: &mut ThreeKeyTree,
    rows: &[TagTagRow],
    provenance: Provenance,
) -> Result<()> {
    for (head, members) in rows {
        if head.0 == 0 {
            continue;
        }
        for member in members.iter() {
            if member.0 == 0 {
                continue;
            }
            tree.insert_rule(ThreeKey::new(head.0, member.0, 0), provenance)?;
        }
    }
    Ok(())
}

/// The tag-use tree has no static table; the first recorded tag
/// initializes it. Kept so the build chain covers all four trees.
fn build_tag_use(_tree: &mut ThreeKeyTree) -> Result<()> {
    Ok(())
}
