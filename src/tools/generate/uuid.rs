//! Random (v4) UUID generator.

use ::uuid::Uuid;

use crate::tools::{ToolError, ToolResult};

/// Largest batch accepted by [`generate`].
pub const MAX_COUNT: usize = 1000;

/// Formatting options.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidOptions {
    /// Upper-case hex digits
    pub uppercase: bool,
    /// Leave out the hyphens
    pub no_hyphens: bool,
}

/// Formats one UUID.
pub fn format(id: Uuid, options: UuidOptions) -> String {
    let text = if options.no_hyphens {
        id.simple().to_string()
    } else {
        id.hyphenated().to_string()
    };
    if options.uppercase {
        text.to_uppercase()
    } else {
        text
    }
}

/// Generates `count` random UUIDs.
pub fn generate(count: usize, options: UuidOptions) -> ToolResult<Vec<String>> {
    if !(1..=MAX_COUNT).contains(&count) {
        return Err(ToolError::invalid_option(format!(
            "count {count} is outside 1..={MAX_COUNT}"
        )));
    }
    Ok((0..count).map(|_| format(Uuid::new_v4(), options)).collect())
}
