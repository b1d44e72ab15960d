#![forbid(unsafe_code)]

//! Scrollable content made of a banner and headed sections.

use serde::{Deserialize, Serialize};

/// One section: a sticky header followed by body content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Header height.
    pub header_height: f64,
    /// Height of the untracked body below the header.
    pub body_height: f64,
}

impl Section {
    /// Create a new section. Negative heights are clamped to zero.
    #[must_use]
    pub fn new(header_height: f64, body_height: f64) -> Self {
        Self {
            header_height: header_height.max(0.0),
            body_height: body_height.max(0.0),
        }
    }
}

/// Vertical content of the simulated scroll container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentModel {
    /// Untracked block above the first section.
    pub banner_height: f64,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

impl Default for ContentModel {
    fn default() -> Self {
        Self::reference()
    }
}

impl ContentModel {
    /// Banner height of the reference screen.
    pub const REFERENCE_BANNER: f64 = 56.0;
    /// Section count of the reference screen.
    pub const REFERENCE_SECTIONS: usize = 50;
    /// Header height of the reference screen.
    pub const REFERENCE_HEADER: f64 = 34.0;
    /// Body height of the reference screen.
    pub const REFERENCE_BODY: f64 = 120.0;

    /// The reference screen: a banner and fifty "Heading N" sections.
    #[must_use]
    pub fn reference() -> Self {
        Self::uniform(
            Self::REFERENCE_BANNER,
            Self::REFERENCE_SECTIONS,
            Self::REFERENCE_HEADER,
            Self::REFERENCE_BODY,
        )
    }

    /// `count` identical sections below a banner.
    #[must_use]
    pub fn uniform(banner_height: f64, count: usize, header_height: f64, body_height: f64) -> Self {
        Self {
            banner_height: banner_height.max(0.0),
            sections: vec![Section::new(header_height, body_height); count],
        }
    }

    /// Natural (unscrolled) top of each header.
    #[must_use]
    pub fn header_tops(&self) -> Vec<f64> {
        let mut y = self.banner_height;
        self.sections
            .iter()
            .map(|s| {
                let top = y;
                y += s.header_height + s.body_height;
                top
            })
            .collect()
    }

    /// Total content height.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.banner_height
            + self
                .sections
                .iter()
                .map(|s| s.header_height + s.body_height)
                .sum::<f64>()
    }

    /// Largest scroll position that keeps the viewport filled.
    #[must_use]
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        (self.content_height() - viewport_height).max(0.0)
    }

    /// Display label of section `index`.
    #[must_use]
    pub fn label(index: usize) -> String {
        format!("Heading {index}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_layout() {
        let model = ContentModel::reference();
        assert_eq!(model.sections.len(), 50);
        let tops = model.header_tops();
        assert_eq!(tops[0], 56.0);
        assert_eq!(tops[1], 56.0 + 34.0 + 120.0);
        assert_eq!(model.content_height(), 56.0 + 50.0 * 154.0);
    }

    #[test]
    fn max_scroll_never_negative() {
        let model = ContentModel::uniform(0.0, 1, 10.0, 10.0);
        assert_eq!(model.max_scroll(500.0), 0.0);
        assert_eq!(model.max_scroll(5.0), 15.0);
    }

    #[test]
    fn negative_heights_clamp() {
        let s = Section::new(-3.0, -1.0);
        assert_eq!(s.header_height, 0.0);
        assert_eq!(s.body_height, 0.0);
    }

    #[test]
    fn labels() {
        assert_eq!(ContentModel::label(0), "Heading 0");
    }
}
