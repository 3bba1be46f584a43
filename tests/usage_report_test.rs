//! End-to-end recording and report rendering.

use anyhow::Result;
use dwcheck::{CheckConfig, CheckSession, FormClass, RuleTables, ThreeKey};
use gimli::constants::*;

static ONE_PAIR: &[(DwAt, FormClass)] = &[(DW_AT_location, FormClass::Flag)];

fn one_pair_session(config: CheckConfig) -> CheckSession {
    let tables = RuleTables {
        attr_formclass_std: ONE_PAIR,
        attr_formclass_ext: &[],
        tag_attr_std: &[],
        tag_attr_ext: &[],
        tag_tag_std: &[],
        tag_tag_ext: &[],
    };
    let mut session = CheckSession::with_tables(config, tables);
    session.build_rule_trees().unwrap();
    session
}

/// Parse the data rows of one report table: (name, count, pct).
fn table_rows(report: &str, header: &str) -> Vec<(String, u64, u64)> {
    let start = report.find(header).unwrap_or_else(|| panic!("missing table {header}"));
    let body = &report[start..];
    let end = body[3..].find("\n***").map(|i| i + 3).unwrap_or(body.len());
    body[..end]
        .lines()
        .filter(|l| l.starts_with('[') && !l.starts_with("[]"))
        .map(|l| {
            let rest = &l[l.find(']').unwrap() + 1..];
            let tokens: Vec<&str> = rest.split_whitespace().collect();
            let pct = tokens[tokens.len() - 1].trim_end_matches('%').parse().unwrap();
            let count = tokens[tokens.len() - 2].parse().unwrap();
            (tokens[..tokens.len() - 2].join(" "), count, pct)
        })
        .collect()
}

#[test]
fn test_three_records_one_entry_full_percentage() -> Result<()> {
    // Record the same legal combination three times.
    let mut session = one_pair_session(CheckConfig::default());
    for _ in 0..3 {
        session.record_attr_form_use(
            DW_TAG_array_type,
            DW_AT_location,
            FormClass::Flag,
            DW_FORM_data1,
            1,
        );
    }

    let key = ThreeKey::new(DW_AT_location.0, FormClass::Flag.code(), DW_FORM_data1.0);
    let usages: Vec<_> = session
        .trees()
        .attr_form
        .iter()
        .filter(|e| e.is_usage())
        .copied()
        .collect();
    assert_eq!(usages.len(), 1);
    assert_eq!(usages[0].key, key);
    assert_eq!(usages[0].count, 3);

    let report = session.render_usage_report()?;
    let attr = table_rows(&report, "*** COUNT BY ATTRIBUTE ***");
    assert_eq!(attr[0].0, "DW_AT_location");
    assert_eq!(attr[0].1, 3);
    assert_eq!(attr[0].2, 100);
    assert_eq!(session.major_errors(), 0);
    Ok(())
}

#[test]
fn test_two_forms_split_thirds() -> Result<()> {
    let mut session = one_pair_session(CheckConfig::default());
    session.record_attr_form_use(
        DW_TAG_array_type, DW_AT_location, FormClass::Flag, DW_FORM_data1, 0,
    );
    for _ in 0..2 {
        session.record_attr_form_use(
            DW_TAG_array_type, DW_AT_location, FormClass::Flag, DW_FORM_flag, 0,
        );
    }

    let report = session.render_usage_report()?;

    // One merged attribute group holding the whole total.
    let attr = table_rows(&report, "*** COUNT BY ATTRIBUTE ***");
    assert_eq!(attr.len(), 2); // group + sum row
    assert_eq!(attr[0], ("DW_AT_location".to_string(), 3, 100));

    // Two form groups at a third and two thirds.
    let form = table_rows(&report, "*** COUNT BY FORM ***");
    assert_eq!(form.len(), 3);
    assert_eq!(form[0], ("DW_FORM_data1".to_string(), 1, 33));
    assert_eq!(form[1], ("DW_FORM_flag".to_string(), 2, 67));
    assert_eq!(form[2], ("Sum found:".to_string(), 3, 100));
    Ok(())
}

#[test]
fn test_sum_rows_match_grand_total_across_all_tables() -> Result<()> {
    let mut session = CheckSession::new(CheckConfig::default());
    session.build_rule_trees().unwrap();

    let observations: &[(DwTag, DwAt, FormClass, DwForm, u64)] = &[
        (DW_TAG_subprogram, DW_AT_name, FormClass::String, DW_FORM_strp, 12),
        (DW_TAG_subprogram, DW_AT_low_pc, FormClass::Address, DW_FORM_addr, 12),
        (DW_TAG_variable, DW_AT_name, FormClass::String, DW_FORM_string, 5),
        (DW_TAG_variable, DW_AT_type, FormClass::Reference, DW_FORM_ref4, 17),
        (DW_TAG_base_type, DW_AT_byte_size, FormClass::Constant, DW_FORM_data1, 4),
        (DW_TAG_member, DW_AT_data_member_location, FormClass::Constant, DW_FORM_data2, 9),
    ];
    let grand_total: u64 = observations.iter().map(|o| o.4).sum();
    for &(tag, attr, fc, form, n) in observations {
        for _ in 0..n {
            session.record_attr_form_use(tag, attr, fc, form, 2);
        }
    }

    let report = session.render_usage_report()?;
    for header in [
        "*** ATTRIBUTES AND FORMS USAGE ***",
        "*** COUNT BY FORMCLASS ***",
        "*** COUNT BY FORM ***",
        "*** COUNT BY ATTRIBUTE ***",
    ] {
        let rows = table_rows(&report, header);
        let (name, sum, pct) = rows.last().unwrap().clone();
        assert_eq!(name, "Sum found:", "{header}");
        assert_eq!(sum, grand_total, "{header}");
        assert_eq!(pct, 100, "{header}");
        let data_total: u64 = rows[..rows.len() - 1].iter().map(|r| r.1).sum();
        assert_eq!(data_total, grand_total, "{header}");
    }
    Ok(())
}

#[test]
fn test_percentages_are_bounded_and_roughly_complete() -> Result<()> {
    let mut session = CheckSession::new(CheckConfig::default());
    session.build_rule_trees().unwrap();

    // Uneven spread across forms so rounding actually bites.
    let forms = [
        (DW_FORM_data1, 1u64),
        (DW_FORM_data2, 2),
        (DW_FORM_data4, 3),
        (DW_FORM_data8, 7),
        (DW_FORM_udata, 11),
    ];
    for &(form, n) in &forms {
        for _ in 0..n {
            session.record_attr_form_use(
                DW_TAG_base_type, DW_AT_byte_size, FormClass::Constant, form, 1,
            );
        }
    }

    let report = session.render_usage_report()?;
    for header in ["*** COUNT BY FORMCLASS ***", "*** COUNT BY FORM ***", "*** COUNT BY ATTRIBUTE ***"] {
        let rows = table_rows(&report, header);
        let groups = &rows[..rows.len() - 1];
        let pct_sum: u64 = groups.iter().map(|r| r.2).sum();
        for row in groups {
            assert!(row.2 <= 100, "{header}: {row:?}");
        }
        // Whole-percent rounding drifts at most half a point per group.
        let bound = (groups.len() as f64) * 0.5;
        assert!(
            (pct_sum as f64 - 100.0).abs() <= bound,
            "{header}: group percentages sum to {pct_sum}"
        );
    }
    Ok(())
}

#[test]
fn test_detail_table_is_ranked_by_count() -> Result<()> {
    let mut session = CheckSession::new(CheckConfig::default());
    session.build_rule_trees().unwrap();
    for (n, form) in [(6u64, DW_FORM_strp), (2, DW_FORM_string)] {
        for _ in 0..n {
            session.record_attr_form_use(
                DW_TAG_variable, DW_AT_name, FormClass::String, form, 1,
            );
        }
    }
    session.record_attr_form_use(
        DW_TAG_variable, DW_AT_type, FormClass::Reference, DW_FORM_ref4, 1,
    );

    let report = session.render_usage_report()?;
    let rows = table_rows(&report, "*** ATTRIBUTES AND FORMS USAGE ***");
    let counts: Vec<u64> = rows[..rows.len() - 1].iter().map(|r| r.1).collect();
    assert_eq!(counts, vec![6, 2, 1]);
    Ok(())
}

#[test]
fn test_diagnostics_only_when_checking_enabled() {
    let mut silent = one_pair_session(CheckConfig::default());
    silent.record_attr_form_use(
        DW_TAG_array_type, DW_AT_location, FormClass::LinePtr, DW_FORM_data4, 4,
    );
    assert!(silent.diagnostics().is_empty());
    assert_eq!(silent.attr_formclass_errors(), 1);

    let mut checked = one_pair_session(CheckConfig::new().with_tag_attr_checking());
    checked.record_attr_form_use(
        DW_TAG_array_type, DW_AT_location, FormClass::LinePtr, DW_FORM_data4, 4,
    );
    let diags = checked.diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].tag_name, "DW_TAG_array_type");
    assert_eq!(diags[0].form_class_name, "DW_FORM_CLASS_LINEPTR");

    // Diagnostics serialize for machine-readable sinks.
    let json = serde_json::to_value(&diags[0]).unwrap();
    assert_eq!(json["attribute"], u16::from(DW_AT_location.0));
    assert_eq!(json["indent_level"], 4);
}

#[test]
fn test_tag_use_counts_survive_until_reset() {
    let mut session = one_pair_session(CheckConfig::default());
    for _ in 0..4 {
        session.record_tag_use(DW_TAG_subprogram);
    }
    session.record_tag_use(DW_TAG_compile_unit);
    let counts = session.tag_use_counts();
    assert_eq!(counts, vec![(DW_TAG_compile_unit, 1), (DW_TAG_subprogram, 4)]);

    session.reset();
    assert!(session.tag_use_counts().is_empty());
}

#[test]
fn test_empty_session_renders_empty_report() -> Result<()> {
    let mut session = CheckSession::with_tables(
        CheckConfig::default(),
        RuleTables {
            attr_formclass_std: &[],
            attr_formclass_ext: &[],
            tag_attr_std: &[],
            tag_attr_ext: &[],
            tag_tag_std: &[],
            tag_tag_ext: &[],
        },
    );
    let report = session.render_usage_report()?;
    assert!(report.is_empty());
    Ok(())
}
