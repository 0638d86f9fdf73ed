//! Input validation for directory writes

use crate::contract::DirectoryError;
use crate::domain::categories::CategoryTable;

/// Longest accepted caller-supplied identifier
pub const MAX_ID_LEN: usize = 64;

/// Validate an explicitly supplied company or solution id
///
/// Accepts alphanumeric characters plus `_` and `-`; the id ends up in URL paths.
pub fn validate_explicit_id(kind: &str, id: &str) -> Result<(), DirectoryError> {
    if id.len() > MAX_ID_LEN {
        return Err(DirectoryError::validation(format!(
            "{} id '{}' is longer than {} characters",
            kind, id, MAX_ID_LEN
        )));
    }

    let valid = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(DirectoryError::validation(format!(
            "{} id '{}' contains invalid characters. Only alphanumeric, '_' and '-' are allowed",
            kind, id
        )));
    }

    Ok(())
}

/// Validate the owning company reference of a solution
pub fn validate_company_reference(company_id: &str) -> Result<(), DirectoryError> {
    if company_id.trim().is_empty() {
        return Err(DirectoryError::validation("companyId cannot be empty"));
    }
    Ok(())
}

/// Validate a (main, sub) category pair against the category table
pub fn validate_category(
    table: &CategoryTable,
    main_category_id: i32,
    sub_category_id: i32,
) -> Result<(), DirectoryError> {
    if table.solution_category(main_category_id).is_none() {
        return Err(DirectoryError::validation(format!(
            "unknown main category {}",
            main_category_id
        )));
    }
    if !table.contains(main_category_id, Some(sub_category_id)) {
        return Err(DirectoryError::validation(format!(
            "main category {} has no sub category {}",
            main_category_id, sub_category_id
        )));
    }
    Ok(())
}
