/// Per-family placement conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Leading feature-code characters used as the subgroup code.
    pub subgroup_code_len: usize,
    /// Subgroup receiving items whose prefix is not in the taxonomy.
    pub fallback_subgroup: String,
    /// Columns carrying the feature code; emitted as the item key, never as references.
    pub feature_code_columns: Vec<String>,
    /// Attribute name the feature code is written under.
    pub key_attribute: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            subgroup_code_len: 2,
            fallback_subgroup: "ZD".to_string(),
            feature_code_columns: vec!["FCODE".to_string(), "F_CODE".to_string()],
            key_attribute: "F_CODE".to_string(),
        }
    }
}

impl LayoutConfig {
    pub fn with_key_attribute(mut self, key_attribute: impl Into<String>) -> Self {
        self.key_attribute = key_attribute.into();
        self
    }

    pub fn subgroup_code(&self, fcode: &str) -> String {
        fcode.chars().take(self.subgroup_code_len).collect()
    }

    pub fn is_feature_code_column(&self, column: &str) -> bool {
        self.feature_code_columns.iter().any(|c| c == column)
    }
}
