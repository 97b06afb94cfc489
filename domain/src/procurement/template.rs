//! Entity document templates
//!
//! A template lists what an entity requires from every bidder, independent
//! of any one project's submission state.

use serde::{Deserialize, Serialize};

/// One required (or optional) document in an entity's template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRequirement {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub name: String,
    #[serde(default = "default_required")]
    pub required: bool,
    /// Expected format ("DOH Format A-1", "Notarized", ...)
    #[serde(default)]
    pub format: String,
}

fn default_required() -> bool {
    true
}

impl TemplateRequirement {
    pub fn requirement_label(&self) -> &'static str {
        if self.required { "Required" } else { "Optional" }
    }
}

/// Count of required vs optional rows in a template
pub fn count_required(requirements: &[TemplateRequirement]) -> (usize, usize) {
    let required = requirements.iter().filter(|r| r.required).count();
    (required, requirements.len() - required)
}
