use serde::{Deserialize, Serialize};

/// Configuration consumed by the checker. Mirrors the flags the driving
/// analyzer exposes on its command line; defaults leave diagnostics off
/// and the extension tables trusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Emit a checker diagnostic for every illegal attribute/form-class
    /// combination observed. Recording happens either way.
    pub check_tag_attr: bool,
    /// Treat rules contributed by the extension tables as illegal, so
    /// only base-standard combinations validate.
    pub suppress_extension_tables: bool,
}

impl CheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_attr_checking(mut self) -> Self {
        self.check_tag_attr = true;
        self
    }

    pub fn with_extension_tables_suppressed(mut self) -> Self {
        self.suppress_extension_tables = true;
        self
    }
}
