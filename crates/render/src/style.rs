//! Rendering options for the HTML views.

/// Options for the HTML year view: cell dimensions for the `<style>`
/// block and the suffix appended to the year in titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlStyle {
    cell_width: u32,
    cell_height: u32,
    title_suffix: String,
}

impl Default for HtmlStyle {
    fn default() -> Self {
        Self {
            cell_width: 100,
            cell_height: 100,
            title_suffix: "AR".to_string(),
        }
    }
}

impl HtmlStyle {
    /// Sets the day-cell width in pixels.
    pub fn with_cell_width(mut self, px: u32) -> Self {
        self.cell_width = px;
        self
    }

    /// Sets the day-cell height in pixels.
    pub fn with_cell_height(mut self, px: u32) -> Self {
        self.cell_height = px;
        self
    }

    /// Sets the suffix appended to the year in the page title and heading.
    pub fn with_title_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.title_suffix = suffix.into();
        self
    }

    /// Returns the day-cell width in pixels.
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Returns the day-cell height in pixels.
    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Returns the year title suffix.
    pub fn title_suffix(&self) -> &str {
        &self.title_suffix
    }
}
