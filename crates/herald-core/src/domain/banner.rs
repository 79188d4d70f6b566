//! Banner generation: preset selection + justification dispatch.

use crate::domain::presets::Preset;
use crate::domain::value_objects::Justification;

/// Renders one-line banners from text, a width, and a justification mode.
///
/// Preset selection follows text presence: `Some` text (even empty) gets the
/// `title` decoration, `None` collapses to a bare `hr` rule. Callers that
/// want a different preset resolve their own template and use it directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct BannerGenerator;

impl BannerGenerator {
    /// Produce a banner of (at least) `columns` characters.
    ///
    /// Infallible by construction: the preset table is closed over
    /// [`Preset`] and [`Justification`] admits no invalid mode — textual
    /// mode sources fail earlier, at their `FromStr` parse.
    pub fn generate(text: Option<&str>, columns: usize, justify: Justification) -> String {
        let preset = if text.is_some() {
            Preset::Title
        } else {
            Preset::Hr
        };
        let template = preset.template();
        let text = text.unwrap_or("");

        match justify {
            Justification::Left => template.left_justify(text, columns),
            Justification::Center => template.center_justify(text, columns),
            Justification::Right => template.right_justify(text, columns),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_text_renders_a_bare_rule() {
        let out = BannerGenerator::generate(None, 80, Justification::Left);
        assert_eq!(out, "=".repeat(80));
    }

    #[test]
    fn text_renders_the_title_decoration() {
        let out = BannerGenerator::generate(Some("TEST"), 20, Justification::Center);
        assert_eq!(out, "======= TEST =======");
    }

    #[test]
    fn empty_text_still_counts_as_present() {
        // Some("") selects the title preset: spacers survive.
        let out = BannerGenerator::generate(Some(""), 10, Justification::Left);
        assert_eq!(out, "=  =======");
    }

    #[test]
    fn right_justified_banner() {
        let out = BannerGenerator::generate(Some("TEST"), 20, Justification::Right);
        assert_eq!(out, "============= TEST =");
    }
}
