//! The display capability the engine renders into

/// Receives the display text after every mutating engine operation
pub trait DisplaySink {
    fn render(&mut self, text: &str);
}

/// In-memory display that keeps the latest rendered text
#[derive(Debug, Clone, Default)]
pub struct DisplayBuffer {
    text: String,
    renders: usize,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many times the engine has rendered into this buffer
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl DisplaySink for DisplayBuffer {
    fn render(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.renders += 1;
    }
}
