//! Statement text paired with its bindings.

use ctm_model::BindingSet;

/// SQL text and the values for its named placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlStatement {
    pub text: String,
    pub bindings: BindingSet,
}

impl SqlStatement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bindings: BindingSet::new(),
        }
    }

    #[must_use]
    pub fn with_bindings(mut self, bindings: BindingSet) -> Self {
        self.bindings = bindings;
        self
    }
}
