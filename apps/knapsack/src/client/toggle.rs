use std::collections::HashMap;

/// Show/hide state of the page's toggleable elements.
#[derive(Debug, Clone, Default)]
pub struct Elements {
    shown: HashMap<String, bool>,
}

impl Elements {
    /// Registers elements that start hidden.
    pub fn hidden<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            shown: ids.into_iter().map(|id| (id.to_string(), false)).collect(),
        }
    }

    /// Flips an element and returns whether it is now shown.
    /// Unknown ids are left alone.
    pub fn show_item(&mut self, id: &str) -> Option<bool> {
        let shown = self.shown.get_mut(id)?;
        *shown = !*shown;
        Some(*shown)
    }

    pub fn reveal(&mut self, id: &str) {
        if let Some(shown) = self.shown.get_mut(id) {
            *shown = true;
        }
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.shown.get(id).copied().unwrap_or(false)
    }
}
