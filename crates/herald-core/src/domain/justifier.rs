//! Justification strategies: left, center, right.
//!
//! A justifier is ephemeral: constructed immediately before a single
//! [`call`](JustifierBehaviors::call), discarded after. It borrows its
//! [`InterpolationTemplate`] (the template outlives every render) and carries
//! one more attribute, the target `total_length`.
//!
//! ## Length budgeting
//!
//! Bookends sit OUTSIDE the padded region: the budget available to the
//! fill-padded body is `total_length - bookend lengths` (saturating), and the
//! bookends are concatenated afterwards — so a bookended result can be longer
//! than `total_length`. Fills and spacers, by contrast, are part of the
//! wrapped body and consume budget.
//!
//! ## Fallback fill
//!
//! An empty fill attribute falls back to a single space as the pad pattern,
//! so justification still visually shifts text under an "empty" template.
//! Padding never fails.
//!
//! ## No truncation
//!
//! Text longer than the budget is returned unpadded, never cut.

use crate::domain::error::DomainError;
use crate::domain::template::InterpolationTemplate;

/// Fallback pad pattern when a template has no fill on the relevant side.
const SPACE_FILL: &str = " ";

// ── Padding arithmetic ────────────────────────────────────────────────────────

/// Cyclic fill construction and width-targeted padding.
///
/// Widths count `char`s, not bytes. Pad characters are drawn from the
/// pattern cyclically starting at its first character, truncated to exactly
/// the missing width.
mod pad {
    /// Character count of `s`.
    pub(super) fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    /// `count` characters drawn cyclically from `pattern`.
    pub(super) fn fill(pattern: &str, count: usize) -> String {
        if count == 0 || pattern.is_empty() {
            return String::new();
        }
        pattern.chars().cycle().take(count).collect()
    }

    /// Pad `text` on the right up to `width` characters.
    pub(super) fn pad_right(text: &str, width: usize, pattern: &str) -> String {
        let len = char_len(text);
        if len >= width {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len() + width - len);
        out.push_str(text);
        out.push_str(&fill(pattern, width - len));
        out
    }

    /// Pad `text` on the left up to `width` characters.
    pub(super) fn pad_left(text: &str, width: usize, pattern: &str) -> String {
        let len = char_len(text);
        if len >= width {
            return text.to_string();
        }
        let mut out = fill(pattern, width - len);
        out.push_str(text);
        out
    }
}

// ── Shared contract ───────────────────────────────────────────────────────────

/// Behaviors shared by every justification strategy.
///
/// `call` is the complete render pipeline (wrap → justify → bookend);
/// `justify` is the strategy-specific step. The default `justify` fails with
/// [`DomainError::JustifyNotImplemented`]: a strategy that does not override
/// it is an invalid construction and must fail loudly on first use, never
/// silently no-op.
pub trait JustifierBehaviors {
    /// The borrowed decoration scheme.
    fn template(&self) -> &InterpolationTemplate;

    /// The target width the padded body aims for.
    fn total_length(&self) -> usize;

    /// Strategy name, used in diagnostics.
    fn kind(&self) -> &'static str;

    /// The strategy-specific padding step over the already-wrapped text.
    fn justify(&self, text: &str) -> Result<String, DomainError> {
        let _ = text;
        Err(DomainError::JustifyNotImplemented {
            justifier: self.kind().to_string(),
        })
    }

    /// Render `text`: wrap it in fills and spacers, pad to the budget, then
    /// bookend the result.
    fn call(&self, text: &str) -> Result<String, DomainError> {
        let wrapped = self.template().wrap(text);
        let body = self.justify(&wrapped)?;

        let mut out = String::with_capacity(
            self.template().left_bookend().len() + body.len() + self.template().right_bookend().len(),
        );
        out.push_str(self.template().left_bookend());
        out.push_str(&body);
        out.push_str(self.template().right_bookend());
        Ok(out)
    }

    /// Like [`call`](Self::call), but the closure's return value supplies
    /// the text.
    fn call_with<F>(&self, text: F) -> Result<String, DomainError>
    where
        F: FnOnce() -> String,
        Self: Sized,
    {
        self.call(&text())
    }

    /// Budget available to the fill-padded body: the bookends are excluded.
    fn justification_length(&self) -> usize {
        let bookends = pad::char_len(self.template().left_bookend())
            + pad::char_len(self.template().right_bookend());
        self.total_length().saturating_sub(bookends)
    }

    /// Left pad pattern, falling back to a single space.
    fn left_fill_pattern(&self) -> &str {
        if self.template().has_left_fill() {
            self.template().left_fill()
        } else {
            SPACE_FILL
        }
    }

    /// Right pad pattern, falling back to a single space.
    fn right_fill_pattern(&self) -> &str {
        if self.template().has_right_fill() {
            self.template().right_fill()
        } else {
            SPACE_FILL
        }
    }
}

// ── Left ──────────────────────────────────────────────────────────────────────

/// Anchors text at the left edge; pads on the right.
#[derive(Debug)]
pub struct LeftJustifier<'t> {
    template: &'t InterpolationTemplate,
    total_length: usize,
}

impl<'t> LeftJustifier<'t> {
    pub fn new(template: &'t InterpolationTemplate, total_length: usize) -> Self {
        Self {
            template,
            total_length,
        }
    }
}

impl JustifierBehaviors for LeftJustifier<'_> {
    fn template(&self) -> &InterpolationTemplate {
        self.template
    }

    fn total_length(&self) -> usize {
        self.total_length
    }

    fn kind(&self) -> &'static str {
        "left"
    }

    fn justify(&self, text: &str) -> Result<String, DomainError> {
        Ok(pad::pad_right(
            text,
            self.justification_length(),
            self.right_fill_pattern(),
        ))
    }
}

// ── Right ─────────────────────────────────────────────────────────────────────

/// Anchors text at the right edge; pads on the left.
#[derive(Debug)]
pub struct RightJustifier<'t> {
    template: &'t InterpolationTemplate,
    total_length: usize,
}

impl<'t> RightJustifier<'t> {
    pub fn new(template: &'t InterpolationTemplate, total_length: usize) -> Self {
        Self {
            template,
            total_length,
        }
    }
}

impl JustifierBehaviors for RightJustifier<'_> {
    fn template(&self) -> &InterpolationTemplate {
        self.template
    }

    fn total_length(&self) -> usize {
        self.total_length
    }

    fn kind(&self) -> &'static str {
        "right"
    }

    fn justify(&self, text: &str) -> Result<String, DomainError> {
        Ok(pad::pad_left(
            text,
            self.justification_length(),
            self.left_fill_pattern(),
        ))
    }
}

// ── Center ────────────────────────────────────────────────────────────────────

/// Centers text by composing a left pad then a right pad.
///
/// The left padding target is
/// `ceil(total_length / 2) + ceil(text_len / 2) - left_bookend_len`; the
/// result is then right-padded to the full budget. For odd total padding the
/// extra fill character lands on the LEFT. The asymmetry is specified,
/// testable behavior — do not replace it with a symmetric split.
#[derive(Debug)]
pub struct CenterJustifier<'t> {
    template: &'t InterpolationTemplate,
    total_length: usize,
}

impl<'t> CenterJustifier<'t> {
    pub fn new(template: &'t InterpolationTemplate, total_length: usize) -> Self {
        Self {
            template,
            total_length,
        }
    }
}

impl JustifierBehaviors for CenterJustifier<'_> {
    fn template(&self) -> &InterpolationTemplate {
        self.template
    }

    fn total_length(&self) -> usize {
        self.total_length
    }

    fn kind(&self) -> &'static str {
        "center"
    }

    fn justify(&self, text: &str) -> Result<String, DomainError> {
        let text_len = pad::char_len(text);
        let left_bookend_len = pad::char_len(self.template().left_bookend());

        // Integer ceil: (n + 1) / 2.
        let left_target = ((self.total_length() + 1) / 2 + (text_len + 1) / 2)
            .saturating_sub(left_bookend_len);

        let left_padded = pad::pad_left(text, left_target, self.left_fill_pattern());
        Ok(pad::pad_right(
            &left_padded,
            self.justification_length(),
            self.right_fill_pattern(),
        ))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::InterpolationTemplate;

    fn title() -> InterpolationTemplate {
        InterpolationTemplate::builder()
            .left_fill("=")
            .left_spacer(" ")
            .right_spacer(" ")
            .right_fill("=")
            .build()
    }

    // ── padding arithmetic ────────────────────────────────────────────────

    #[test]
    fn fill_cycles_pattern_and_truncates() {
        assert_eq!(pad::fill("ab", 5), "ababa");
        assert_eq!(pad::fill("=", 3), "===");
        assert_eq!(pad::fill("=", 0), "");
        assert_eq!(pad::fill("", 4), "");
    }

    #[test]
    fn pad_right_leaves_wide_text_alone() {
        assert_eq!(pad::pad_right("abcdef", 4, "="), "abcdef");
        assert_eq!(pad::pad_left("abcdef", 4, "="), "abcdef");
    }

    #[test]
    fn pad_counts_chars_not_bytes() {
        // 'é' is two bytes but one column here.
        assert_eq!(pad::pad_right("é", 3, "="), "é==");
        assert_eq!(pad::pad_left("é", 3, "="), "==é");
    }

    // ── literal scenarios ─────────────────────────────────────────────────

    #[test]
    fn left_justify_pads_to_eighty() {
        let out = title().left_justify("TEST", 80);
        assert_eq!(out.chars().count(), 80);
        assert!(out.starts_with("= TEST ="));
        assert!(out.ends_with("=="));
        assert_eq!(out, format!("= TEST {}", "=".repeat(73)));
    }

    #[test]
    fn center_justify_twenty() {
        assert_eq!(title().center_justify("TEST", 20), "======= TEST =======");
    }

    #[test]
    fn right_justify_twenty() {
        assert_eq!(title().right_justify("TEST", 20), "============= TEST =");
    }

    #[test]
    fn empty_template_left_justify_space_pads() {
        let plain = InterpolationTemplate::default();
        assert_eq!(plain.left_justify("TEST", 10), "TEST      ");
    }

    // ── specified properties ──────────────────────────────────────────────

    #[test]
    fn center_bias_puts_extra_fill_on_the_left() {
        // 21 columns around an 8-char wrapped body: 13 pad chars total,
        // 7 land on the left, 6 on the right.
        let out = title().center_justify("TEST", 21);
        assert_eq!(out.chars().count(), 21);
        assert_eq!(out, "======== TEST =======");
    }

    #[test]
    fn fallback_fill_shifts_text_right() {
        let plain = InterpolationTemplate::default();
        assert_eq!(plain.right_justify("TEST", 10), "      TEST");
        assert_eq!(plain.center_justify("TEST", 10), "   TEST   ");
    }

    #[test]
    fn oversized_text_is_never_truncated() {
        let text = "X".repeat(40);
        let out = title().left_justify(&text, 10);
        assert!(out.contains(&text));
        assert_eq!(out, title().interpolate(Some(&text)));

        let out = title().right_justify(&text, 10);
        assert!(out.contains(&text));

        let out = title().center_justify(&text, 10);
        assert!(out.contains(&text));
    }

    #[test]
    fn short_text_justifies_to_exact_length() {
        for columns in [12usize, 20, 33, 80] {
            let out = title().center_justify("hi", columns);
            assert_eq!(out.chars().count(), columns);
        }
    }

    // ── bookends ──────────────────────────────────────────────────────────

    fn bookended() -> InterpolationTemplate {
        InterpolationTemplate::builder()
            .left_bookend("<<")
            .left_fill("=")
            .left_spacer(" ")
            .right_spacer(" ")
            .right_fill("=")
            .right_bookend(">>")
            .build()
    }

    #[test]
    fn bookends_are_outside_the_budget() {
        let out = bookended().left_justify("TEST", 20);
        // Budget shrinks to 16, then 2+2 bookend chars are appended.
        assert_eq!(out.chars().count(), 20);
        assert!(out.starts_with("<<= TEST ="));
        assert!(out.ends_with(">>"));
    }

    #[test]
    fn bookends_can_push_past_total_length() {
        let out = bookended().left_justify("a long banner title", 10);
        assert!(out.chars().count() > 10);
        assert!(out.starts_with("<<"));
        assert!(out.ends_with(">>"));
    }

    #[test]
    fn justification_length_saturates_at_zero() {
        let t = bookended();
        let j = LeftJustifier::new(&t, 3);
        assert_eq!(j.justification_length(), 0);
    }

    // ── contract failure ──────────────────────────────────────────────────

    struct HalfBuilt<'t> {
        template: &'t InterpolationTemplate,
    }

    impl JustifierBehaviors for HalfBuilt<'_> {
        fn template(&self) -> &InterpolationTemplate {
            self.template
        }
        fn total_length(&self) -> usize {
            80
        }
        fn kind(&self) -> &'static str {
            "half-built"
        }
        // No justify override: the contract default must fail loudly.
    }

    #[test]
    fn missing_justify_step_fails_on_call() {
        let t = title();
        let err = HalfBuilt { template: &t }.call("TEST").unwrap_err();
        assert_eq!(
            err,
            DomainError::JustifyNotImplemented {
                justifier: "half-built".into()
            }
        );
    }

    // ── call_with ─────────────────────────────────────────────────────────

    #[test]
    fn call_with_uses_closure_result_as_text() {
        let t = title();
        let j = LeftJustifier::new(&t, 20);
        let out = j.call_with(|| "TEST".to_string()).unwrap();
        assert_eq!(out, j.call("TEST").unwrap());
    }

    // ── multi-char fill patterns ──────────────────────────────────────────

    #[test]
    fn multi_char_fill_cycles_through_pattern() {
        let t = InterpolationTemplate::builder().right_fill("-=").build();
        // wrap("X") = "X-=", then 5 cyclic pad chars.
        assert_eq!(t.left_justify("X", 8), "X-=-=-=-");
    }
}
