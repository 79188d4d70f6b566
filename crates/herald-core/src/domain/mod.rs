// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Herald: the banner engine.
//!
//! This module contains pure string computation with ZERO I/O. Console
//! writes happen behind ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: everything is synchronous, O(length) string work
//! - **No I/O**: no terminal, filesystem, or clock access
//! - **Immutable value objects**: templates are built once and shared
//! - **Strategies behind a trait**: the justifier family shares
//!   [`JustifierBehaviors`], with the padding budget math as provided
//!   methods rather than a base class

// Public API - what the world sees
pub mod banner;
pub mod error;
pub mod justifier;
pub mod presets;
pub mod template;
pub mod value_objects;

// Re-exports for convenience
pub use banner::BannerGenerator;
pub use error::{DomainError, ErrorCategory};
pub use justifier::{CenterJustifier, JustifierBehaviors, LeftJustifier, RightJustifier};
pub use presets::{Preset, TemplateSpec, build};
pub use template::{InterpolationTemplate, TemplateAttributes, TemplateBuilder};
pub use value_objects::{
    Justification, MessageKind, TimestampFormat, parse_columns,
};

#[cfg(test)]
mod tests {
    use super::*;

    // End-to-end checks across the domain modules; the per-module details
    // live next to each module.

    #[test]
    fn title_banner_through_every_mode() {
        let template = build("title").unwrap();
        assert_eq!(template.left_justify("TEST", 20), "= TEST =============");
        assert_eq!(template.center_justify("TEST", 20), "======= TEST =======");
        assert_eq!(template.right_justify("TEST", 20), "============= TEST =");
    }

    #[test]
    fn generator_and_template_paths_agree() {
        let via_generator = BannerGenerator::generate(Some("TEST"), 20, Justification::Center);
        let via_template = build("title").unwrap().center_justify("TEST", 20);
        assert_eq!(via_generator, via_template);
    }

    #[test]
    fn justified_output_always_contains_the_interpolation() {
        let template = build("wtf").unwrap();
        for text in ["", "x", "a rather long piece of text that overflows"] {
            let out = template.left_justify(text, 10);
            assert!(out.chars().count() >= template.wrap(text).chars().count());
            assert!(out.contains(text));
        }
    }
}
