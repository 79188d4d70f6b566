//! Named template presets and the polymorphic template build.
//!
//! The preset table is a read-only, process-wide constant: a `match` over a
//! `Copy` enum, fixed at compile time. There is no lazy mutation and no
//! runtime registration.
//!
//! [`build`] is the single entry point callers hand "whatever they have" to:
//! a preset name, a raw attribute set, or an already-built template. The
//! pass-through case is idempotent; an unknown preset NAME is an error
//! carrying the requested key, never a silent fallback.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::template::{InterpolationTemplate, TemplateAttributes};

// ── Preset ────────────────────────────────────────────────────────────────────

/// A named, predefined attribute set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    /// `= TEXT ====…` — the default when nothing is specified.
    #[default]
    Title,
    /// `====…` — a bare horizontal rule (alias: `double_line`).
    Hr,
    /// `? TEXT ????…` — for output you can't explain yet.
    Wtf,
}

impl Preset {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Hr => "hr",
            Self::Wtf => "wtf",
        }
    }

    /// The fixed attribute set for this preset.
    pub fn attributes(&self) -> TemplateAttributes {
        match self {
            Self::Title => TemplateAttributes {
                left_fill: "=".into(),
                left_spacer: " ".into(),
                right_spacer: " ".into(),
                right_fill: "=".into(),
                ..TemplateAttributes::default()
            },
            Self::Hr => TemplateAttributes {
                left_fill: "=".into(),
                right_fill: "=".into(),
                ..TemplateAttributes::default()
            },
            Self::Wtf => TemplateAttributes {
                left_fill: "?".into(),
                left_spacer: " ".into(),
                right_spacer: " ".into(),
                right_fill: "?".into(),
                ..TemplateAttributes::default()
            },
        }
    }

    /// Build this preset's template directly (infallible — the table is
    /// closed over the enum).
    pub fn template(&self) -> InterpolationTemplate {
        self.attributes().into()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "hr" | "double_line" => Ok(Self::Hr),
            "wtf" => Ok(Self::Wtf),
            other => Err(DomainError::PresetNotFound {
                name: other.to_string(),
            }),
        }
    }
}

// ── TemplateSpec ──────────────────────────────────────────────────────────────

/// The polymorphic argument to [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSpec {
    /// A preset name to resolve against the table.
    Named(String),
    /// Raw attributes to construct from directly.
    Attributes(TemplateAttributes),
    /// An already-built template (returned unchanged).
    Template(InterpolationTemplate),
}

impl Default for TemplateSpec {
    fn default() -> Self {
        Self::Named(Preset::Title.as_str().to_string())
    }
}

impl From<&str> for TemplateSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for TemplateSpec {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Preset> for TemplateSpec {
    fn from(preset: Preset) -> Self {
        Self::Named(preset.as_str().to_string())
    }
}

impl From<TemplateAttributes> for TemplateSpec {
    fn from(attrs: TemplateAttributes) -> Self {
        Self::Attributes(attrs)
    }
}

impl From<InterpolationTemplate> for TemplateSpec {
    fn from(template: InterpolationTemplate) -> Self {
        Self::Template(template)
    }
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Resolve a [`TemplateSpec`] to an [`InterpolationTemplate`].
///
/// - A template passes through unchanged (idempotent).
/// - Attributes construct directly.
/// - A name is looked up in the preset table; unknown names fail with
///   [`DomainError::PresetNotFound`] carrying the requested key.
pub fn build(spec: impl Into<TemplateSpec>) -> Result<InterpolationTemplate, DomainError> {
    match spec.into() {
        TemplateSpec::Template(template) => Ok(template),
        TemplateSpec::Attributes(attrs) => Ok(attrs.into()),
        TemplateSpec::Named(name) => Ok(name.parse::<Preset>()?.template()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_preset_attributes() {
        let t = Preset::Title.template();
        assert_eq!(t.left_fill(), "=");
        assert_eq!(t.left_spacer(), " ");
        assert_eq!(t.right_spacer(), " ");
        assert_eq!(t.right_fill(), "=");
        assert_eq!(t.left_bookend(), "");
    }

    #[test]
    fn hr_preset_has_no_spacers() {
        let t = Preset::Hr.template();
        assert_eq!(t.left_fill(), "=");
        assert_eq!(t.left_spacer(), "");
        assert_eq!(t.right_spacer(), "");
    }

    #[test]
    fn wtf_preset_fills_with_question_marks() {
        let t = Preset::Wtf.template();
        assert_eq!(t.left_fill(), "?");
        assert_eq!(t.right_fill(), "?");
    }

    #[test]
    fn preset_from_str_accepts_double_line_alias() {
        assert_eq!("double_line".parse::<Preset>().unwrap(), Preset::Hr);
        assert_eq!("HR".parse::<Preset>().unwrap(), Preset::Hr);
    }

    #[test]
    fn unknown_preset_errors_with_the_requested_key() {
        let err = "banner9000".parse::<Preset>().unwrap_err();
        assert_eq!(
            err,
            DomainError::PresetNotFound {
                name: "banner9000".into()
            }
        );
    }

    #[test]
    fn build_by_name() {
        assert_eq!(build("title").unwrap(), Preset::Title.template());
        assert_eq!(build("wtf").unwrap(), Preset::Wtf.template());
        assert!(build("nope").is_err());
    }

    #[test]
    fn build_from_attributes() {
        let attrs = TemplateAttributes {
            left_bookend: "|".into(),
            right_bookend: "|".into(),
            ..TemplateAttributes::default()
        };
        let t = build(attrs).unwrap();
        assert_eq!(t.left_bookend(), "|");
        assert_eq!(t.right_bookend(), "|");
    }

    #[test]
    fn build_passes_templates_through_unchanged() {
        let original = Preset::Wtf.template();
        let rebuilt = build(original.clone()).unwrap();
        assert_eq!(rebuilt, original);
        // And again: idempotent.
        assert_eq!(build(rebuilt).unwrap(), original);
    }

    #[test]
    fn default_spec_is_the_title_preset() {
        let t = build(TemplateSpec::default()).unwrap();
        assert_eq!(t, Preset::Title.template());
    }
}
