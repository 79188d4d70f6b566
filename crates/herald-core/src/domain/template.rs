//! The interpolation template: Herald's central value object.
//!
//! An [`InterpolationTemplate`] describes the decoration scheme a banner is
//! built from — six string parts, read left to right:
//!
//! ```text
//! ┌──────────────┬───────────┬─────────────┬──────┬──────────────┬────────────┬───────────────┐
//! │ left_bookend │ left_fill │ left_spacer │ text │ right_spacer │ right_fill │ right_bookend │
//! └──────────────┴───────────┴─────────────┴──────┴──────────────┴────────────┴───────────────┘
//! ```
//!
//! - **Bookends** are emitted verbatim at the very ends of the output and
//!   are never counted toward the justification target length; they are
//!   appended after all fill arithmetic.
//! - **Fills** are the repeatable patterns justifiers pad with.
//! - **Spacers** are static strings hugging the text.
//!
//! ## Invariants
//!
//! 1. All six parts default to the empty string; none is ever "missing".
//! 2. A template is immutable after construction — no setters, only the
//!    [`TemplateBuilder`]. Shared freely by reference across render calls.
//! 3. Length arithmetic everywhere counts `char`s, not bytes.
//!
//! ## Construction
//!
//! ```rust
//! use herald_core::domain::InterpolationTemplate;
//!
//! let title = InterpolationTemplate::builder()
//!     .left_fill("=")
//!     .left_spacer(" ")
//!     .right_spacer(" ")
//!     .right_fill("=")
//!     .build();
//!
//! assert_eq!(title.left_justify("TEST", 20), "= TEST =============");
//! ```

use std::fmt;

use crate::domain::justifier::{
    CenterJustifier, JustifierBehaviors, LeftJustifier, RightJustifier,
};

/// Immutable six-part decoration scheme for banners.
///
/// See the module docs for the part layout. Constructed via
/// [`InterpolationTemplate::builder`] or from [`TemplateAttributes`];
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpolationTemplate {
    left_bookend: String,
    left_fill: String,
    left_spacer: String,
    right_spacer: String,
    right_fill: String,
    right_bookend: String,
}

impl InterpolationTemplate {
    /// Start the builder pattern for fluent construction.
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::default()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn left_bookend(&self) -> &str {
        &self.left_bookend
    }
    pub fn left_fill(&self) -> &str {
        &self.left_fill
    }
    pub fn left_spacer(&self) -> &str {
        &self.left_spacer
    }
    pub fn right_spacer(&self) -> &str {
        &self.right_spacer
    }
    pub fn right_fill(&self) -> &str {
        &self.right_fill
    }
    pub fn right_bookend(&self) -> &str {
        &self.right_bookend
    }

    /// Whether a left fill pattern is present (non-empty).
    pub fn has_left_fill(&self) -> bool {
        !self.left_fill.is_empty()
    }

    /// Whether a right fill pattern is present (non-empty).
    pub fn has_right_fill(&self) -> bool {
        !self.right_fill.is_empty()
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Raw interpolation: every part once, in order, no length targeting.
    ///
    /// `None` yields the decoration alone — no placeholder is inserted for
    /// the absent text.
    pub fn interpolate(&self, text: Option<&str>) -> String {
        let mut out = String::new();
        out.push_str(&self.left_bookend);
        out.push_str(&self.left_fill);
        out.push_str(&self.left_spacer);
        out.push_str(text.unwrap_or(""));
        out.push_str(&self.right_spacer);
        out.push_str(&self.right_fill);
        out.push_str(&self.right_bookend);
        out
    }

    /// The inner string justifiers pad further: fills and spacers around the
    /// text, bookends excluded.
    pub fn wrap(&self, text: &str) -> String {
        let mut out = String::new();
        out.push_str(&self.left_fill);
        out.push_str(&self.left_spacer);
        out.push_str(text);
        out.push_str(&self.right_spacer);
        out.push_str(&self.right_fill);
        out
    }

    /// Left-justify `text` within `length` columns using this template.
    pub fn left_justify(&self, text: &str, length: usize) -> String {
        LeftJustifier::new(self, length)
            .call(text)
            .expect("left justifier implements its justify step")
    }

    /// Center `text` within `length` columns using this template.
    pub fn center_justify(&self, text: &str, length: usize) -> String {
        CenterJustifier::new(self, length)
            .call(text)
            .expect("center justifier implements its justify step")
    }

    /// Right-justify `text` within `length` columns using this template.
    pub fn right_justify(&self, text: &str, length: usize) -> String {
        RightJustifier::new(self, length)
            .call(text)
            .expect("right justifier implements its justify step")
    }
}

impl fmt::Display for InterpolationTemplate {
    /// Template-literal-like representation for diagnostics:
    /// `{}` marks the text slot, non-empty fills render with a repetition
    /// marker, empty parts render as nothing.
    ///
    /// The `title` preset, for example, renders as `['=', ...] {} ['=', ...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn fill_repr(fill: &str) -> String {
            if fill.is_empty() {
                String::new()
            } else {
                format!("['{fill}', ...]")
            }
        }

        write!(
            f,
            "{}{}{}{{}}{}{}{}",
            self.left_bookend,
            fill_repr(&self.left_fill),
            self.left_spacer,
            self.right_spacer,
            fill_repr(&self.right_fill),
            self.right_bookend,
        )
    }
}

// ── Attributes ────────────────────────────────────────────────────────────────

/// Plain attribute set for an [`InterpolationTemplate`].
///
/// This is the "mapping of attributes" input form: the preset table is a
/// table of these, and callers that already hold six strings can construct
/// one directly instead of going through the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateAttributes {
    pub left_bookend: String,
    pub left_fill: String,
    pub left_spacer: String,
    pub right_spacer: String,
    pub right_fill: String,
    pub right_bookend: String,
}

impl From<TemplateAttributes> for InterpolationTemplate {
    fn from(attrs: TemplateAttributes) -> Self {
        Self {
            left_bookend: attrs.left_bookend,
            left_fill: attrs.left_fill,
            left_spacer: attrs.left_spacer,
            right_spacer: attrs.right_spacer,
            right_fill: attrs.right_fill,
            right_bookend: attrs.right_bookend,
        }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent constructor for [`InterpolationTemplate`].
///
/// Every part is optional and defaults to the empty string, so `build()`
/// cannot fail — there is no invalid combination of six strings.
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    attrs: TemplateAttributes,
}

impl TemplateBuilder {
    pub fn left_bookend(mut self, s: impl Into<String>) -> Self {
        self.attrs.left_bookend = s.into();
        self
    }

    pub fn left_fill(mut self, s: impl Into<String>) -> Self {
        self.attrs.left_fill = s.into();
        self
    }

    pub fn left_spacer(mut self, s: impl Into<String>) -> Self {
        self.attrs.left_spacer = s.into();
        self
    }

    pub fn right_spacer(mut self, s: impl Into<String>) -> Self {
        self.attrs.right_spacer = s.into();
        self
    }

    pub fn right_fill(mut self, s: impl Into<String>) -> Self {
        self.attrs.right_fill = s.into();
        self
    }

    pub fn right_bookend(mut self, s: impl Into<String>) -> Self {
        self.attrs.right_bookend = s.into();
        self
    }

    /// Consume the builder and construct the template.
    pub fn build(self) -> InterpolationTemplate {
        self.attrs.into()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn title() -> InterpolationTemplate {
        InterpolationTemplate::builder()
            .left_fill("=")
            .left_spacer(" ")
            .right_spacer(" ")
            .right_fill("=")
            .build()
    }

    #[test]
    fn default_template_is_all_empty() {
        let t = InterpolationTemplate::default();
        assert_eq!(t.left_bookend(), "");
        assert_eq!(t.right_fill(), "");
        assert!(!t.has_left_fill());
        assert!(!t.has_right_fill());
    }

    #[test]
    fn interpolate_concatenates_in_order() {
        let t = InterpolationTemplate::builder()
            .left_bookend("<")
            .left_fill("=")
            .left_spacer(" ")
            .right_spacer(" ")
            .right_fill("-")
            .right_bookend(">")
            .build();
        assert_eq!(t.interpolate(Some("hi")), "<= hi ->");
    }

    #[test]
    fn interpolate_none_yields_decoration_alone() {
        assert_eq!(title().interpolate(None), "=  =");
    }

    #[test]
    fn wrap_excludes_bookends() {
        let t = InterpolationTemplate::builder()
            .left_bookend("<")
            .left_fill("=")
            .left_spacer(" ")
            .right_spacer(" ")
            .right_fill("=")
            .right_bookend(">")
            .build();
        assert_eq!(t.wrap("hi"), "= hi =");
    }

    #[test]
    fn has_fill_predicates_track_emptiness() {
        let t = InterpolationTemplate::builder().left_fill("=").build();
        assert!(t.has_left_fill());
        assert!(!t.has_right_fill());
    }

    #[test]
    fn display_marks_fills_with_repetition() {
        assert_eq!(title().to_string(), "['=', ...] {} ['=', ...]");
    }

    #[test]
    fn display_omits_empty_segments() {
        assert_eq!(InterpolationTemplate::default().to_string(), "{}");
    }

    #[test]
    fn from_attributes_round_trips() {
        let attrs = TemplateAttributes {
            left_fill: "=".into(),
            left_spacer: " ".into(),
            right_spacer: " ".into(),
            right_fill: "=".into(),
            ..TemplateAttributes::default()
        };
        assert_eq!(InterpolationTemplate::from(attrs), title());
    }

    #[test]
    fn templates_are_shareable_across_calls() {
        let t = title();
        let a = t.left_justify("A", 10);
        let b = t.right_justify("B", 10);
        // The template is unchanged by rendering.
        assert_eq!(t, title());
        assert_ne!(a, b);
    }
}
