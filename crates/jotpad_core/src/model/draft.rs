//! Draft buffer for in-progress composition.

/// Text currently being composed or edited, mirroring the editable surface.
///
/// Pure state holder: content is stored verbatim, without trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftBuffer {
    text: String,
}

impl DraftBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole buffer content.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn read(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
