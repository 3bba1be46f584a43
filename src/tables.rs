//! Compiled-in legality tables.
//!
//! Three relationships are tabulated, each with a standard set and an
//! extension set (vendor and DWARF-revision extensions):
//!
//! - attribute -> form class: which value categories an attribute may be
//!   encoded as;
//! - tag -> attribute: which attributes a DIE of a given tag may carry;
//! - tag -> tag: which child tags a DIE of a given tag may contain.
//!
//! The tag tables are head-plus-members rows; the builder expands each
//! row into one rule entry per `(head, member)` pair.

use gimli::constants::*;

use crate::entry::FormClass;

/// One attribute/form-class legality row.
pub type AfRow = (DwAt, FormClass);

/// One tag row: the head tag and the attributes it may legally carry.
pub type TagAttrRow = (DwTag, &'static [DwAt]);

/// One tag row: the head tag and the child tags it may legally contain.
pub type TagTagRow = (DwTag, &'static [DwTag]);

/// The full rule set one session builds its trees from.
///
/// Sessions normally use [`RuleTables::builtin`]; tests and embedders with
/// bespoke rulebooks can supply their own slices.
#[derive(Debug, Clone, Copy)]
pub struct RuleTables {
    pub attr_formclass_std: &'static [AfRow],
    pub attr_formclass_ext: &'static [AfRow],
    pub tag_attr_std: &'static [TagAttrRow],
    pub tag_attr_ext: &'static [TagAttrRow],
    pub tag_tag_std: &'static [TagTagRow],
    pub tag_tag_ext: &'static [TagTagRow],
}

impl RuleTables {
    /// The compiled-in DWARF rulebook.
    pub fn builtin() -> Self {
        Self {
            attr_formclass_std: ATTR_FORMCLASS_STD,
            attr_formclass_ext: ATTR_FORMCLASS_EXT,
            tag_attr_std: TAG_ATTR_STD,
            tag_attr_ext: TAG_ATTR_EXT,
            tag_tag_std: TAG_TAG_STD,
            tag_tag_ext: TAG_TAG_EXT,
        }
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Standard attribute/form-class combinations, DWARF 2 through 5.
static ATTR_FORMCLASS_STD: &[AfRow] = &[
    (DW_AT_sibling, FormClass::Reference),
    (DW_AT_location, FormClass::ExprLoc),
    (DW_AT_location, FormClass::Block),
    (DW_AT_location, FormClass::LocListPtr),
    (DW_AT_location, FormClass::LocList),
    (DW_AT_name, FormClass::String),
    (DW_AT_ordering, FormClass::Constant),
    (DW_AT_byte_size, FormClass::Constant),
    (DW_AT_byte_size, FormClass::ExprLoc),
    (DW_AT_byte_size, FormClass::Reference),
    (DW_AT_bit_offset, FormClass::Constant),
    (DW_AT_bit_offset, FormClass::Block),
    (DW_AT_bit_size, FormClass::Constant),
    (DW_AT_bit_size, FormClass::ExprLoc),
    (DW_AT_stmt_list, FormClass::LinePtr),
    (DW_AT_low_pc, FormClass::Address),
    (DW_AT_high_pc, FormClass::Address),
    (DW_AT_high_pc, FormClass::Constant),
    (DW_AT_language, FormClass::Constant),
    (DW_AT_discr, FormClass::Reference),
    (DW_AT_discr_value, FormClass::Constant),
    (DW_AT_visibility, FormClass::Constant),
    (DW_AT_import, FormClass::Reference),
    (DW_AT_string_length, FormClass::ExprLoc),
    (DW_AT_string_length, FormClass::LocListPtr),
    (DW_AT_common_reference, FormClass::Reference),
    (DW_AT_comp_dir, FormClass::String),
    (DW_AT_const_value, FormClass::Block),
    (DW_AT_const_value, FormClass::Constant),
    (DW_AT_const_value, FormClass::String),
    (DW_AT_containing_type, FormClass::Reference),
    (DW_AT_default_value, FormClass::Constant),
    (DW_AT_default_value, FormClass::Reference),
    (DW_AT_default_value, FormClass::Flag),
    (DW_AT_inline, FormClass::Constant),
    (DW_AT_is_optional, FormClass::Flag),
    (DW_AT_lower_bound, FormClass::Constant),
    (DW_AT_lower_bound, FormClass::ExprLoc),
    (DW_AT_lower_bound, FormClass::Reference),
    (DW_AT_producer, FormClass::String),
    (DW_AT_prototyped, FormClass::Flag),
    (DW_AT_return_addr, FormClass::ExprLoc),
    (DW_AT_return_addr, FormClass::LocListPtr),
    (DW_AT_start_scope, FormClass::Constant),
    (DW_AT_start_scope, FormClass::RangeListPtr),
    (DW_AT_bit_stride, FormClass::Constant),
    (DW_AT_upper_bound, FormClass::Constant),
    (DW_AT_upper_bound, FormClass::ExprLoc),
    (DW_AT_upper_bound, FormClass::Reference),
    (DW_AT_abstract_origin, FormClass::Reference),
    (DW_AT_accessibility, FormClass::Constant),
    (DW_AT_address_class, FormClass::Constant),
    (DW_AT_artificial, FormClass::Flag),
    (DW_AT_base_types, FormClass::Reference),
    (DW_AT_calling_convention, FormClass::Constant),
    (DW_AT_count, FormClass::Constant),
    (DW_AT_count, FormClass::ExprLoc),
    (DW_AT_count, FormClass::Reference),
    (DW_AT_data_member_location, FormClass::Constant),
    (DW_AT_data_member_location, FormClass::ExprLoc),
    (DW_AT_data_member_location, FormClass::Block),
    (DW_AT_decl_column, FormClass::Constant),
    (DW_AT_decl_file, FormClass::Constant),
    (DW_AT_decl_line, FormClass::Constant),
    (DW_AT_declaration, FormClass::Flag),
    (DW_AT_discr_list, FormClass::Block),
    (DW_AT_encoding, FormClass::Constant),
    (DW_AT_external, FormClass::Flag),
    (DW_AT_frame_base, FormClass::ExprLoc),
    (DW_AT_frame_base, FormClass::LocListPtr),
    (DW_AT_frame_base, FormClass::LocList),
    (DW_AT_friend, FormClass::Reference),
    (DW_AT_identifier_case, FormClass::Constant),
    (DW_AT_macro_info, FormClass::MacPtr),
    (DW_AT_namelist_item, FormClass::Reference),
    (DW_AT_priority, FormClass::Reference),
    (DW_AT_segment, FormClass::ExprLoc),
    (DW_AT_segment, FormClass::LocListPtr),
    (DW_AT_specification, FormClass::Reference),
    (DW_AT_static_link, FormClass::ExprLoc),
    (DW_AT_static_link, FormClass::LocListPtr),
    (DW_AT_type, FormClass::Reference),
    (DW_AT_use_location, FormClass::ExprLoc),
    (DW_AT_use_location, FormClass::LocListPtr),
    (DW_AT_variable_parameter, FormClass::Flag),
    (DW_AT_virtuality, FormClass::Constant),
    (DW_AT_vtable_elem_location, FormClass::ExprLoc),
    (DW_AT_vtable_elem_location, FormClass::LocListPtr),
    (DW_AT_allocated, FormClass::Constant),
    (DW_AT_allocated, FormClass::ExprLoc),
    (DW_AT_allocated, FormClass::Reference),
    (DW_AT_associated, FormClass::Constant),
    (DW_AT_associated, FormClass::ExprLoc),
    (DW_AT_associated, FormClass::Reference),
    (DW_AT_data_location, FormClass::ExprLoc),
    (DW_AT_byte_stride, FormClass::Constant),
    (DW_AT_byte_stride, FormClass::ExprLoc),
    (DW_AT_byte_stride, FormClass::Reference),
    (DW_AT_entry_pc, FormClass::Address),
    (DW_AT_entry_pc, FormClass::Constant),
    (DW_AT_use_UTF8, FormClass::Flag),
    (DW_AT_extension, FormClass::Reference),
    (DW_AT_ranges, FormClass::RangeListPtr),
    (DW_AT_ranges, FormClass::RngList),
    (DW_AT_trampoline, FormClass::Address),
    (DW_AT_trampoline, FormClass::Flag),
    (DW_AT_trampoline, FormClass::Reference),
    (DW_AT_trampoline, FormClass::String),
    (DW_AT_call_column, FormClass::Constant),
    (DW_AT_call_file, FormClass::Constant),
    (DW_AT_call_line, FormClass::Constant),
    (DW_AT_description, FormClass::String),
    (DW_AT_object_pointer, FormClass::Reference),
    (DW_AT_endianity, FormClass::Constant),
    (DW_AT_elemental, FormClass::Flag),
    (DW_AT_pure, FormClass::Flag),
    (DW_AT_recursive, FormClass::Flag),
    (DW_AT_signature, FormClass::Reference),
    (DW_AT_main_subprogram, FormClass::Flag),
    (DW_AT_data_bit_offset, FormClass::Constant),
    (DW_AT_const_expr, FormClass::Flag),
    (DW_AT_enum_class, FormClass::Flag),
    (DW_AT_linkage_name, FormClass::String),
    (DW_AT_string_length_bit_size, FormClass::Constant),
    (DW_AT_string_length_byte_size, FormClass::Constant),
    (DW_AT_rank, FormClass::Constant),
    (DW_AT_rank, FormClass::ExprLoc),
    (DW_AT_str_offsets_base, FormClass::StrOffsetsPtr),
    (DW_AT_addr_base, FormClass::AddrPtr),
    (DW_AT_rnglists_base, FormClass::RngListsPtr),
    (DW_AT_loclists_base, FormClass::LocListsPtr),
    (DW_AT_dwo_name, FormClass::String),
    (DW_AT_reference, FormClass::Flag),
    (DW_AT_rvalue_reference, FormClass::Flag),
    (DW_AT_macros, FormClass::MacroPtr),
    (DW_AT_call_all_calls, FormClass::Flag),
    (DW_AT_call_all_source_calls, FormClass::Flag),
    (DW_AT_call_all_tail_calls, FormClass::Flag),
    (DW_AT_call_return_pc, FormClass::Address),
    (DW_AT_call_value, FormClass::ExprLoc),
    (DW_AT_call_origin, FormClass::Reference),
    (DW_AT_call_parameter, FormClass::Reference),
    (DW_AT_call_pc, FormClass::Address),
    (DW_AT_call_tail_call, FormClass::Flag),
    (DW_AT_call_target, FormClass::ExprLoc),
    (DW_AT_call_target_clobbered, FormClass::ExprLoc),
    (DW_AT_call_data_location, FormClass::ExprLoc),
    (DW_AT_call_data_value, FormClass::ExprLoc),
    (DW_AT_noreturn, FormClass::Flag),
    (DW_AT_alignment, FormClass::Constant),
    (DW_AT_export_symbols, FormClass::Flag),
    (DW_AT_deleted, FormClass::Flag),
    (DW_AT_defaulted, FormClass::Constant),
];

/// Vendor attribute/form-class combinations (GNU and MIPS extensions).
static ATTR_FORMCLASS_EXT: &[AfRow] = &[
    (DW_AT_MIPS_linkage_name, FormClass::String),
    (DW_AT_MIPS_fde, FormClass::Constant),
    (DW_AT_GNU_dwo_name, FormClass::String),
    (DW_AT_GNU_dwo_id, FormClass::Constant),
    (DW_AT_GNU_pubnames, FormClass::Flag),
    (DW_AT_GNU_pubtypes, FormClass::Flag),
    (DW_AT_GNU_macros, FormClass::MacPtr),
    (DW_AT_GNU_ranges_base, FormClass::Constant),
    (DW_AT_GNU_addr_base, FormClass::Constant),
    (DW_AT_GNU_all_call_sites, FormClass::Flag),
    (DW_AT_GNU_all_tail_call_sites, FormClass::Flag),
    (DW_AT_GNU_all_source_call_sites, FormClass::Flag),
    (DW_AT_GNU_call_site_value, FormClass::ExprLoc),
    (DW_AT_GNU_call_site_target, FormClass::ExprLoc),
    (DW_AT_GNU_vector, FormClass::Flag),
];

/// Standard tag -> attribute legality.
static TAG_ATTR_STD: &[TagAttrRow] = &[
    (
        DW_TAG_compile_unit,
        &[
            DW_AT_name,
            DW_AT_language,
            DW_AT_stmt_list,
            DW_AT_low_pc,
            DW_AT_high_pc,
            DW_AT_comp_dir,
            DW_AT_producer,
            DW_AT_macro_info,
            DW_AT_macros,
            DW_AT_ranges,
            DW_AT_use_UTF8,
            DW_AT_main_subprogram,
            DW_AT_entry_pc,
            DW_AT_str_offsets_base,
            DW_AT_addr_base,
            DW_AT_rnglists_base,
            DW_AT_loclists_base,
            DW_AT_dwo_name,
        ],
    ),
    (
        DW_TAG_subprogram,
        &[
            DW_AT_name,
            DW_AT_low_pc,
            DW_AT_high_pc,
            DW_AT_decl_file,
            DW_AT_decl_line,
            DW_AT_decl_column,
            DW_AT_declaration,
            DW_AT_external,
            DW_AT_frame_base,
            DW_AT_type,
            DW_AT_prototyped,
            DW_AT_inline,
            DW_AT_artificial,
            DW_AT_abstract_origin,
            DW_AT_specification,
            DW_AT_object_pointer,
            DW_AT_linkage_name,
            DW_AT_ranges,
            DW_AT_entry_pc,
            DW_AT_accessibility,
            DW_AT_virtuality,
            DW_AT_vtable_elem_location,
            DW_AT_calling_convention,
            DW_AT_main_subprogram,
            DW_AT_noreturn,
            DW_AT_call_all_calls,
            DW_AT_call_all_tail_calls,
            DW_AT_deleted,
            DW_AT_defaulted,
        ],
    ),
    (
        DW_TAG_variable,
        &[
            DW_AT_name,
            DW_AT_type,
            DW_AT_location,
            DW_AT_decl_file,
            DW_AT_decl_line,
            DW_AT_decl_column,
            DW_AT_declaration,
            DW_AT_external,
            DW_AT_const_value,
            DW_AT_abstract_origin,
            DW_AT_specification,
            DW_AT_artificial,
            DW_AT_linkage_name,
            DW_AT_accessibility,
            DW_AT_alignment,
            DW_AT_const_expr,
        ],
    ),
    (
        DW_TAG_formal_parameter,
        &[
            DW_AT_name,
            DW_AT_type,
            DW_AT_location,
            DW_AT_decl_file,
            DW_AT_decl_line,
            DW_AT_artificial,
            DW_AT_abstract_origin,
            DW_AT_const_value,
            DW_AT_variable_parameter,
            DW_AT_is_optional,
            DW_AT_default_value,
        ],
    ),
    (
        DW_TAG_base_type,
        &[
            DW_AT_name,
            DW_AT_byte_size,
            DW_AT_encoding,
            DW_AT_bit_size,
            DW_AT_data_bit_offset,
            DW_AT_endianity,
            DW_AT_alignment,
        ],
    ),
    (
        DW_TAG_structure_type,
        &[
            DW_AT_name,
            DW_AT_byte_size,
            DW_AT_decl_file,
            DW_AT_decl_line,
            DW_AT_declaration,
            DW_AT_specification,
            DW_AT_abstract_origin,
            DW_AT_accessibility,
            DW_AT_alignment,
            DW_AT_signature,
            DW_AT_export_symbols,
            DW_AT_calling_convention,
        ],
    ),
    (
        DW_TAG_class_type,
        &[
            DW_AT_name,
            DW_AT_byte_size,
            DW_AT_decl_file,
            DW_AT_decl_line,
            DW_AT_declaration,
            DW_AT_containing_type,
            DW_AT_accessibility,
            DW_AT_alignment,
            DW_AT_signature,
            DW_AT_export_symbols,
            DW_AT_calling_convention,
        ],
    ),
    (
        DW_TAG_union_type,
        &[
            DW_AT_name,
            DW_AT_byte_size,
            DW_AT_decl_file,
            DW_AT_decl_line,
            DW_AT_declaration,
            DW_AT_accessibility,
            DW_AT_alignment,
            DW_AT_signature,
        ],
    ),
    (
        DW_TAG_member,
        &[
            DW_AT_name,
            DW_AT_type,
            DW_AT_data_member_location,
            DW_AT_byte_size,
            DW_AT_bit_size,
            DW_AT_bit_offset,
            DW_AT_data_bit_offset,
            DW_AT_decl_file,
            DW_AT_decl_line,
            DW_AT_accessibility,
            DW_AT_artificial,
            DW_AT_declaration,
            DW_AT_const_value,
        ],
    ),
    (
        DW_TAG_typedef,
        &[
            DW_AT_name,
            DW_AT_type,
            DW_AT_decl_file,
            DW_AT_decl_line,
            DW_AT_declaration,
            DW_AT_abstract_origin,
            DW_AT_accessibility,
            DW_AT_alignment,
        ],
    ),
    (
        DW_TAG_pointer_type,
        &[DW_AT_type, DW_AT_byte_size, DW_AT_address_class, DW_AT_alignment],
    ),
    (
        DW_TAG_reference_type,
        &[DW_AT_type, DW_AT_byte_size, DW_AT_address_class],
    ),
    (DW_TAG_const_type, &[DW_AT_type]),
    (DW_TAG_volatile_type, &[DW_AT_type]),
    (DW_TAG_restrict_type, &[DW_AT_type]),
    (
        DW_TAG_array_type,
        &[
            DW_AT_name,
            DW_AT_type,
            DW_AT_byte_size,
            DW_AT_ordering,
            DW_AT_bit_stride,
            DW_AT_byte_stride,
            DW_AT_declaration,
            DW_AT_alignment,
        ],
    ),
    (
        DW_TAG_subrange_type,
        &[
            DW_AT_type,
            DW_AT_lower_bound,
            DW_AT_upper_bound,
            DW_AT_count,
            DW_AT_byte_size,
            DW_AT_bit_size,
            DW_AT_bit_stride,
            DW_AT_byte_stride,
        ],
    ),
    (
        DW_TAG_enumeration_type,
        &[
            DW_AT_name,
            DW_AT_type,
            DW_AT_byte_size,
            DW_AT_decl_file,
            DW_AT_decl_line,
            DW_AT_declaration,
            DW_AT_enum_class,
            DW_AT_alignment,
            DW_AT_signature,
        ],
    ),
    (
        DW_TAG_enumerator,
        &[DW_AT_name, DW_AT_const_value, DW_AT_decl_file, DW_AT_decl_line],
    ),
    (
        DW_TAG_lexical_block,
        &[
            DW_AT_name,
            DW_AT_low_pc,
            DW_AT_high_pc,
            DW_AT_ranges,
            DW_AT_decl_file,
            DW_AT_decl_line,
            DW_AT_entry_pc,
        ],
    ),
    (
        DW_TAG_inlined_subroutine,
        &[
            DW_AT_abstract_origin,
            DW_AT_low_pc,
            DW_AT_high_pc,
            DW_AT_ranges,
            DW_AT_call_file,
            DW_AT_call_line,
            DW_AT_call_column,
            DW_AT_entry_pc,
        ],
    ),
    (
        DW_TAG_subroutine_type,
        &[
            DW_AT_name,
            DW_AT_type,
            DW_AT_prototyped,
            DW_AT_byte_size,
            DW_AT_calling_convention,
        ],
    ),
    (
        DW_TAG_namespace,
        &[
            DW_AT_name,
            DW_AT_decl_file,
            DW_AT_decl_line,
            DW_AT_extension,
            DW_AT_export_symbols,
        ],
    ),
    (DW_TAG_unspecified_parameters, &[DW_AT_artificial, DW_AT_type]),
    (
        DW_TAG_template_type_parameter,
        &[DW_AT_name, DW_AT_type, DW_AT_default_value],
    ),
    (
        DW_TAG_template_value_parameter,
        &[DW_AT_name, DW_AT_type, DW_AT_const_value, DW_AT_default_value],
    ),
    (
        DW_TAG_imported_declaration,
        &[DW_AT_name, DW_AT_import, DW_AT_decl_file, DW_AT_decl_line, DW_AT_accessibility],
    ),
    (
        DW_TAG_imported_module,
        &[DW_AT_import, DW_AT_decl_file, DW_AT_decl_line, DW_AT_start_scope],
    ),
    (
        DW_TAG_inheritance,
        &[DW_AT_type, DW_AT_data_member_location, DW_AT_accessibility, DW_AT_virtuality],
    ),
    (DW_TAG_variant_part, &[DW_AT_type, DW_AT_discr]),
    (DW_TAG_variant, &[DW_AT_discr_value, DW_AT_discr_list]),
    (DW_TAG_unspecified_type, &[DW_AT_name]),
    (
        DW_TAG_call_site,
        &[
            DW_AT_call_return_pc,
            DW_AT_call_pc,
            DW_AT_call_origin,
            DW_AT_call_target,
            DW_AT_call_target_clobbered,
            DW_AT_call_tail_call,
            DW_AT_type,
        ],
    ),
    (
        DW_TAG_call_site_parameter,
        &[
            DW_AT_name,
            DW_AT_type,
            DW_AT_location,
            DW_AT_call_value,
            DW_AT_call_data_location,
            DW_AT_call_data_value,
        ],
    ),
];

/// Extension tag -> attribute legality.
static TAG_ATTR_EXT: &[TagAttrRow] = &[
    (
        DW_TAG_compile_unit,
        &[
            DW_AT_GNU_dwo_name,
            DW_AT_GNU_dwo_id,
            DW_AT_GNU_pubnames,
            DW_AT_GNU_pubtypes,
            DW_AT_GNU_macros,
            DW_AT_GNU_ranges_base,
            DW_AT_GNU_addr_base,
        ],
    ),
    (
        DW_TAG_subprogram,
        &[
            DW_AT_MIPS_linkage_name,
            DW_AT_MIPS_fde,
            DW_AT_GNU_all_call_sites,
            DW_AT_GNU_all_tail_call_sites,
            DW_AT_GNU_all_source_call_sites,
        ],
    ),
    (DW_TAG_variable, &[DW_AT_MIPS_linkage_name]),
    (DW_TAG_base_type, &[DW_AT_GNU_vector]),
    (
        DW_TAG_GNU_call_site,
        &[DW_AT_abstract_origin, DW_AT_low_pc, DW_AT_GNU_call_site_target],
    ),
    (
        DW_TAG_GNU_call_site_parameter,
        &[DW_AT_location, DW_AT_GNU_call_site_value],
    ),
];

/// Standard tag containment legality.
static TAG_TAG_STD: &[TagTagRow] = &[
    (
        DW_TAG_compile_unit,
        &[
            DW_TAG_array_type,
            DW_TAG_base_type,
            DW_TAG_class_type,
            DW_TAG_const_type,
            DW_TAG_enumeration_type,
            DW_TAG_imported_declaration,
            DW_TAG_imported_module,
            DW_TAG_namespace,
            DW_TAG_pointer_type,
            DW_TAG_reference_type,
            DW_TAG_restrict_type,
            DW_TAG_structure_type,
            DW_TAG_subprogram,
            DW_TAG_subroutine_type,
            DW_TAG_typedef,
            DW_TAG_union_type,
            DW_TAG_unspecified_type,
            DW_TAG_variable,
            DW_TAG_volatile_type,
        ],
    ),
    (
        DW_TAG_subprogram,
        &[
            DW_TAG_formal_parameter,
            DW_TAG_unspecified_parameters,
            DW_TAG_lexical_block,
            DW_TAG_inlined_subroutine,
            DW_TAG_variable,
            DW_TAG_typedef,
            DW_TAG_structure_type,
            DW_TAG_union_type,
            DW_TAG_enumeration_type,
            DW_TAG_template_type_parameter,
            DW_TAG_template_value_parameter,
            DW_TAG_call_site,
        ],
    ),
    (
        DW_TAG_lexical_block,
        &[
            DW_TAG_variable,
            DW_TAG_lexical_block,
            DW_TAG_inlined_subroutine,
            DW_TAG_typedef,
            DW_TAG_structure_type,
        ],
    ),
    (
        DW_TAG_inlined_subroutine,
        &[
            DW_TAG_formal_parameter,
            DW_TAG_lexical_block,
            DW_TAG_variable,
            DW_TAG_inlined_subroutine,
            DW_TAG_call_site,
        ],
    ),
    (
        DW_TAG_structure_type,
        &[
            DW_TAG_member,
            DW_TAG_inheritance,
            DW_TAG_subprogram,
            DW_TAG_typedef,
            DW_TAG_template_type_parameter,
            DW_TAG_template_value_parameter,
            DW_TAG_variant_part,
            DW_TAG_structure_type,
            DW_TAG_union_type,
            DW_TAG_enumeration_type,
        ],
    ),
    (
        DW_TAG_class_type,
        &[
            DW_TAG_member,
            DW_TAG_inheritance,
            DW_TAG_subprogram,
            DW_TAG_typedef,
            DW_TAG_template_type_parameter,
            DW_TAG_template_value_parameter,
        ],
    ),
    (DW_TAG_union_type, &[DW_TAG_member, DW_TAG_typedef]),
    (DW_TAG_array_type, &[DW_TAG_subrange_type, DW_TAG_enumeration_type]),
    (DW_TAG_enumeration_type, &[DW_TAG_enumerator]),
    (
        DW_TAG_namespace,
        &[
            DW_TAG_subprogram,
            DW_TAG_variable,
            DW_TAG_typedef,
            DW_TAG_structure_type,
            DW_TAG_class_type,
            DW_TAG_enumeration_type,
            DW_TAG_namespace,
            DW_TAG_imported_declaration,
            DW_TAG_imported_module,
            DW_TAG_union_type,
            DW_TAG_subroutine_type,
        ],
    ),
    (
        DW_TAG_subroutine_type,
        &[DW_TAG_formal_parameter, DW_TAG_unspecified_parameters],
    ),
    (DW_TAG_variant_part, &[DW_TAG_variant, DW_TAG_member]),
    (DW_TAG_variant, &[DW_TAG_member]),
    (DW_TAG_call_site, &[DW_TAG_call_site_parameter]),
];

/// Extension tag containment legality.
static TAG_TAG_EXT: &[TagTagRow] = &[
    (
        DW_TAG_subprogram,
        &[
            DW_TAG_GNU_call_site,
            DW_TAG_GNU_template_parameter_pack,
            DW_TAG_GNU_formal_parameter_pack,
        ],
    ),
    (DW_TAG_GNU_call_site, &[DW_TAG_GNU_call_site_parameter]),
    (
        DW_TAG_GNU_template_parameter_pack,
        &[DW_TAG_template_type_parameter, DW_TAG_template_value_parameter],
    ),
    (DW_TAG_GNU_formal_parameter_pack, &[DW_TAG_formal_parameter]),
];
