//! StyleCI rule tables.
//!
//! Generated by `stylebridge catalog update` from the upstream StyleCI
//! configuration source. Review the diff when regenerating; do not edit by
//! hand.

/// Canonical rule names recognized by the linting service.
pub(crate) static VALID: &[&str] = &[
    "align_double_arrow",
    "align_equals",
    "blankline_after_open_tag",
    "braces",
    "concat_with_spaces",
    "concat_without_spaces",
    "double_arrow_multiline_whitespaces",
    "duplicate_semicolon",
    "echo_to_print",
    "elseif",
    "empty_return",
    "encoding",
    "eof_ending",
    "extra_empty_lines",
    "full_opening_tag",
    "function_call_space",
    "function_declaration",
    "header_comment",
    "include",
    "indentation",
    "join_function",
    "line_after_namespace",
    "linefeed",
    "list_commas",
    "logical_not_operators_with_spaces",
    "long_array_syntax",
    "lowercase_constants",
    "lowercase_keywords",
    "method_argument_space",
    "multiline_array_trailing_comma",
    "multiple_use",
    "namespace_no_leading_whitespace",
    "newline_after_open_tag",
    "no_blank_lines_after_class_opening",
    "no_blank_lines_before_namespace",
    "no_empty_lines_after_phpdocs",
    "object_operator",
    "operators_spaces",
    "ordered_use",
    "parenthesis",
    "php_closing_tag",
    "phpdoc_align",
    "phpdoc_indent",
    "phpdoc_inline_tag",
    "phpdoc_no_access",
    "phpdoc_no_empty_return",
    "phpdoc_no_package",
    "phpdoc_params",
    "phpdoc_scalar",
    "phpdoc_separation",
    "phpdoc_short_description",
    "phpdoc_to_comment",
    "phpdoc_trim",
    "phpdoc_type_to_var",
    "phpdoc_types",
    "phpdoc_var_to_type",
    "phpdoc_var_without_name",
    "print_to_echo",
    "psr0",
    "remove_leading_slash_use",
    "remove_lines_between_uses",
    "return",
    "self_accessor",
    "short_array_syntax",
    "single_array_no_trailing_comma",
    "single_blank_line_before_namespace",
    "single_line_after_imports",
    "single_quote",
    "spaces_before_semicolon",
    "spaces_cast",
    "standardize_not_equal",
    "ternary_spaces",
    "trailing_spaces",
    "trim_array_spaces",
    "unalign_double_arrow",
    "unalign_equals",
    "unary_operators_spaces",
    "unused_use",
    "visibility",
    "whitespacy_lines",
];

/// Historical name on the left, current name on the right. Both directions
/// refer to the same rule across fixer-tool major versions.
pub(crate) static ALIASES: &[(&str, &str)] = &[
    ("duplicate_semicolon", "no_empty_statement"),
    ("extra_empty_lines", "no_extra_consecutive_blank_lines"),
    ("join_function", "no_alias_functions"),
    ("multiline_array_trailing_comma", "trailing_comma_in_multiline_array"),
    ("ordered_use", "ordered_imports"),
    ("phpdoc_short_description", "phpdoc_summary"),
    ("return", "blank_line_before_return"),
    ("short_array_syntax", "array_syntax"),
    ("unused_use", "no_unused_imports"),
    ("visibility", "visibility_required"),
];

/// Rules that must not both be enabled.
pub(crate) static CONFLICTS: &[(&str, &str)] = &[
    ("align_double_arrow", "unalign_double_arrow"),
    ("align_equals", "unalign_equals"),
    ("concat_with_spaces", "concat_without_spaces"),
    ("echo_to_print", "print_to_echo"),
    ("long_array_syntax", "short_array_syntax"),
    ("no_blank_lines_before_namespace", "single_blank_line_before_namespace"),
    ("phpdoc_type_to_var", "phpdoc_var_to_type"),
];

pub(crate) static PSR1_FIXERS: &[&str] = &[
    "encoding",
    "full_opening_tag",
];

pub(crate) static PSR2_FIXERS: &[&str] = &[
    "encoding",
    "full_opening_tag",
    "braces",
    "elseif",
    "eof_ending",
    "function_call_space",
    "function_declaration",
    "indentation",
    "line_after_namespace",
    "linefeed",
    "lowercase_constants",
    "lowercase_keywords",
    "method_argument_space",
    "multiple_use",
    "parenthesis",
    "php_closing_tag",
    "single_line_after_imports",
    "trailing_spaces",
    "visibility",
];

pub(crate) static SYMFONY_FIXERS: &[&str] = &[
    "encoding",
    "full_opening_tag",
    "braces",
    "elseif",
    "eof_ending",
    "function_call_space",
    "function_declaration",
    "indentation",
    "line_after_namespace",
    "linefeed",
    "lowercase_constants",
    "lowercase_keywords",
    "method_argument_space",
    "multiple_use",
    "parenthesis",
    "php_closing_tag",
    "single_line_after_imports",
    "trailing_spaces",
    "visibility",
    "blankline_after_open_tag",
    "concat_without_spaces",
    "double_arrow_multiline_whitespaces",
    "duplicate_semicolon",
    "empty_return",
    "extra_empty_lines",
    "include",
    "join_function",
    "list_commas",
    "multiline_array_trailing_comma",
    "namespace_no_leading_whitespace",
    "newline_after_open_tag",
    "no_blank_lines_after_class_opening",
    "no_empty_lines_after_phpdocs",
    "object_operator",
    "operators_spaces",
    "ordered_use",
    "phpdoc_align",
    "phpdoc_indent",
    "phpdoc_inline_tag",
    "phpdoc_no_access",
    "phpdoc_no_empty_return",
    "phpdoc_no_package",
    "phpdoc_params",
    "phpdoc_scalar",
    "phpdoc_separation",
    "phpdoc_short_description",
    "phpdoc_to_comment",
    "phpdoc_trim",
    "phpdoc_type_to_var",
    "phpdoc_types",
    "phpdoc_var_without_name",
    "remove_leading_slash_use",
    "remove_lines_between_uses",
    "return",
    "self_accessor",
    "single_array_no_trailing_comma",
    "single_blank_line_before_namespace",
    "single_quote",
    "spaces_before_semicolon",
    "spaces_cast",
    "standardize_not_equal",
    "ternary_spaces",
    "trim_array_spaces",
    "unalign_double_arrow",
    "unalign_equals",
    "unary_operators_spaces",
    "unused_use",
    "whitespacy_lines",
    "-psr0",
];

pub(crate) static LARAVEL_FIXERS: &[&str] = &[
    "encoding",
    "full_opening_tag",
    "braces",
    "elseif",
    "eof_ending",
    "function_call_space",
    "function_declaration",
    "indentation",
    "line_after_namespace",
    "linefeed",
    "lowercase_constants",
    "lowercase_keywords",
    "method_argument_space",
    "multiple_use",
    "parenthesis",
    "php_closing_tag",
    "single_line_after_imports",
    "trailing_spaces",
    "visibility",
    "include",
    "list_commas",
    "no_blank_lines_after_class_opening",
    "object_operator",
    "operators_spaces",
    "phpdoc_scalar",
    "phpdoc_types",
    "remove_leading_slash_use",
    "short_array_syntax",
    "single_quote",
    "spaces_cast",
    "ternary_spaces",
    "trim_array_spaces",
    "unused_use",
    "-psr0",
];

pub(crate) static RECOMMENDED_FIXERS: &[&str] = &[
    "encoding",
    "full_opening_tag",
    "braces",
    "elseif",
    "eof_ending",
    "function_call_space",
    "function_declaration",
    "indentation",
    "line_after_namespace",
    "linefeed",
    "lowercase_constants",
    "lowercase_keywords",
    "method_argument_space",
    "multiple_use",
    "parenthesis",
    "php_closing_tag",
    "single_line_after_imports",
    "trailing_spaces",
    "visibility",
    "align_double_arrow",
    "align_equals",
    "concat_without_spaces",
    "duplicate_semicolon",
    "empty_return",
    "extra_empty_lines",
    "include",
    "list_commas",
    "multiline_array_trailing_comma",
    "namespace_no_leading_whitespace",
    "newline_after_open_tag",
    "no_blank_lines_after_class_opening",
    "no_empty_lines_after_phpdocs",
    "object_operator",
    "operators_spaces",
    "ordered_use",
    "phpdoc_align",
    "phpdoc_indent",
    "phpdoc_params",
    "phpdoc_scalar",
    "phpdoc_separation",
    "phpdoc_short_description",
    "phpdoc_to_comment",
    "phpdoc_trim",
    "phpdoc_types",
    "remove_leading_slash_use",
    "return",
    "self_accessor",
    "short_array_syntax",
    "single_blank_line_before_namespace",
    "single_quote",
    "spaces_cast",
    "standardize_not_equal",
    "ternary_spaces",
    "trim_array_spaces",
    "unary_operators_spaces",
    "unused_use",
    "whitespacy_lines",
    "-psr0",
];

pub(crate) static PRESETS: &[(&str, &[&str])] = &[
    ("psr1", PSR1_FIXERS),
    ("psr2", PSR2_FIXERS),
    ("symfony", SYMFONY_FIXERS),
    ("laravel", LARAVEL_FIXERS),
    ("recommended", RECOMMENDED_FIXERS),
];
