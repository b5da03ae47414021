//! Text rendering of successful results.
//!
//! The web pages and the CLI print the same headline and detail lines, so the
//! wording lives here next to the types it describes.

/// Headline plus detail lines for a successful result.
pub trait Summary {
    fn headline(&self) -> String;

    fn details(&self) -> Vec<String> {
        Vec::new()
    }

    /// Headline followed by details, one entry per output line.
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.headline()];
        lines.extend(self.details());
        lines
    }
}
