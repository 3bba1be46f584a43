//! Ranked usage tables over the attr-form tree.
//!
//! Four views of the same snapshot: the raw attribute+form detail table
//! ranked by count, then per-form-class, per-form and per-attribute
//! rollups. The rollups sort by the grouping key and merge adjacent equal
//! keys, which is linear after the sort and keeps group order identical
//! to key order.

use crate::entry::ThreeKeyEntry;
use crate::error::Result;
use crate::names::NameResolver;
use crate::trees::TreeSet;

/// Render the four usage tables as plain text. Read-only over the trees.
///
/// Rule entries (form code zero) are excluded from totals and rows: only
/// observed usages contribute. An empty tree renders nothing.
pub fn render_usage_report(trees: &TreeSet, names: &dyn NameResolver) -> Result<String> {
    let snapshot = trees.attr_form.snapshot()?;
    if snapshot.is_empty() {
        return Ok(String::new());
    }
    let full_record_count = snapshot.len();

    let mut usages: Vec<ThreeKeyEntry> =
        snapshot.into_iter().filter(|e| e.is_usage()).collect();
    let total: f64 = usages.iter().map(|e| e.count as f64).sum();

    let mut out = String::new();

    // Detail table: count descending, ties broken by attribute, form,
    // then form-class code.
    usages.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then(a.key.key1.cmp(&b.key.key1))
            .then(a.key.key3.cmp(&b.key.key3))
            .then(a.key.key2.cmp(&b.key.key2))
    });
    out.push_str("\n*** ATTRIBUTES AND FORMS USAGE ***\n");
    out.push_str(&format!(
        "Full record count                    : {full_record_count:8}\n"
    ));
    out.push_str(&format!(
        "Total number of objectfile attributes: {total:8.0}\n"
    ));
    out.push_str("[]                                                        found rate\n");
    let mut sum: u64 = 0;
    for (idx, entry) in usages.iter().enumerate() {
        let pct = percent(entry.count, total);
        out.push_str(&format!(
            "[{idx:3}] {:<30} {:<20} {:7} {pct:.0}%\n",
            names.attribute_name(entry.key.key1),
            names.form_name(entry.key.key3),
            entry.count,
        ));
        sum += entry.count;
    }
    out.push_str(&format!(
        "[{:3}] {:<30} {:<20} {sum:7} {:.0}%\n",
        usages.len(),
        "Sum found:",
        "",
        100.0,
    ));

    // Rollups share the sort-then-merge pass, each under its own key.
    usages.sort_by_key(|e| e.key.key2);
    render_rollup(
        &mut out,
        &usages,
        total,
        "\n*** COUNT BY FORMCLASS ***\n[]                                 found rate\n",
        28,
        |e| e.key.key2,
        &|code| names.form_class_name(code),
    );

    usages.sort_by_key(|e| e.key.key3);
    render_rollup(
        &mut out,
        &usages,
        total,
        "\n*** COUNT BY FORM ***\n[]                         found rate\n",
        20,
        |e| e.key.key3,
        &|code| names.form_name(code),
    );

    usages.sort_by_key(|e| e.key.key1);
    render_rollup(
        &mut out,
        &usages,
        total,
        "\n*** COUNT BY ATTRIBUTE ***\n[]                                   found rate\n",
        30,
        |e| e.key.key1,
        &|code| names.attribute_name(code),
    );

    Ok(out)
}

fn percent(count: u64, total: f64) -> f64 {
    if total > 0.0 {
        (count as f64 / total) * 100.0
    } else {
        0.0
    }
}

/// Merge adjacent equal-key entries of a pre-sorted snapshot into group
/// rows. A group closes when the key changes or the input ends.
fn render_rollup(
    out: &mut String,
    sorted: &[ThreeKeyEntry],
    total: f64,
    header: &str,
    name_width: usize,
    key_of: impl Fn(&ThreeKeyEntry) -> u16,
    name_of: &dyn Fn(u16) -> String,
) {
    out.push_str(header);
    let mut row = 0usize;
    let mut sum: u64 = 0;
    let mut current: Option<(u16, u64)> = None;
    for entry in sorted {
        let key = key_of(entry);
        match current {
            None => current = Some((key, entry.count)),
            Some((cur, running)) if cur == key => current = Some((cur, running + entry.count)),
            Some((cur, running)) => {
                emit_group(out, row, name_of(cur), running, total, name_width);
                sum += running;
                row += 1;
                current = Some((key, entry.count));
            }
        }
    }
    if let Some((cur, running)) = current {
        emit_group(out, row, name_of(cur), running, total, name_width);
        sum += running;
        row += 1;
    }
    out.push_str(&format!(
        "[{row:2}] {:<name_width$} {sum:6} {:.0}%\n",
        "Sum found:", 100.0,
    ));
}

fn emit_group(
    out: &mut String,
    row: usize,
    name: String,
    count: u64,
    total: f64,
    name_width: usize,
) {
    let pct = percent(count, total);
    out.push_str(&format!("[{row:2}] {name:<name_width$} {count:6} {pct:.0}%\n"));
}
