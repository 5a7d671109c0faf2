//! Entrance Animations
//!
//! Templates tag elements with `data-delay="<seconds>s"`. After every render
//! the fragment is armed: each tagged element gets the slide-in marker and an
//! inline `animation-delay` matching its tag.

use std::fmt;

const DELAY_ATTR: &str = "data-delay=\"";
const ARMED_MARKER: &str = " data-animate=\"slide-in\"";

/// Animation delay with millisecond resolution, shown as CSS seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Delay(u32);

impl Delay {
    pub const fn from_millis(millis: u32) -> Self {
        Self(millis)
    }

    pub const fn millis(self) -> u32 {
        self.0
    }

    /// Stagger for the `index`th card of a grid: 0.1s, then +0.15s per card.
    pub fn staggered(index: usize) -> Self {
        let step = u32::try_from(index).unwrap_or(u32::MAX);
        Self(100_u32.saturating_add(step.saturating_mul(150)))
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0 / 1000;
        let frac = self.0 % 1000;
        if frac == 0 {
            return write!(f, "{secs}s");
        }
        let frac = format!("{frac:03}");
        write!(f, "{secs}.{}s", frac.trim_end_matches('0'))
    }
}

/// An element armed during the latest render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatedElement {
    /// Position among the animated elements, in document order.
    pub ordinal: usize,
    /// The delay exactly as written in the markup.
    pub delay: String,
}

/// Arms every `data-delay` element in `html`.
///
/// Elements that already carry the marker are recorded but not rewritten, so
/// arming twice yields the same markup.
pub fn arm(html: &str) -> (String, Vec<AnimatedElement>) {
    let mut out = String::with_capacity(html.len() + html.len() / 8);
    let mut animated = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find(DELAY_ATTR) {
        let value_start = start + DELAY_ATTR.len();
        let Some(value_len) = rest[value_start..].find('"') else {
            break;
        };
        let value_end = value_start + value_len;
        let delay = &rest[value_start..value_end];

        out.push_str(&rest[..=value_end]);
        rest = &rest[value_end + 1..];

        if !rest.starts_with(ARMED_MARKER) {
            out.push_str(ARMED_MARKER);
            out.push_str(" style=\"animation-delay: ");
            out.push_str(delay);
            out.push('"');
        }

        animated.push(AnimatedElement {
            ordinal: animated.len(),
            delay: delay.to_string(),
        });
    }

    out.push_str(rest);
    (out, animated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "0.1s"; "first card")]
    #[test_case(1, "0.25s"; "second card")]
    #[test_case(2, "0.4s"; "third card")]
    #[test_case(6, "1s"; "whole second")]
    fn test_staggered_delay(index: usize, expected: &str) {
        assert_eq!(Delay::staggered(index).to_string(), expected);
    }

    #[test]
    fn test_arm_rewrites_each_element_once() {
        let html = r#"<div class="a" data-delay="0.4s">x</div><p>y</p><div data-delay="0.5s"></div>"#;
        let (armed, elements) = arm(html);

        assert_eq!(
            armed,
            r#"<div class="a" data-delay="0.4s" data-animate="slide-in" style="animation-delay: 0.4s">x</div><p>y</p><div data-delay="0.5s" data-animate="slide-in" style="animation-delay: 0.5s"></div>"#
        );
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].delay, "0.4s");
        assert_eq!(elements[1].ordinal, 1);
    }

    #[test]
    fn test_arm_is_idempotent() {
        let (once, first) = arm(r#"<a data-delay="0.1s">a</a>"#);
        let (twice, second) = arm(&once);
        assert_eq!(once, twice);
        assert_eq!(first, second);
    }

    #[test]
    fn test_arm_without_tags_is_identity() {
        let (armed, elements) = arm("<section>plain</section>");
        assert_eq!(armed, "<section>plain</section>");
        assert!(elements.is_empty());
    }

    #[test]
    fn test_unterminated_attribute_is_left_alone() {
        let html = r#"<div data-delay="0.1s"#;
        let (armed, elements) = arm(html);
        assert_eq!(armed, html);
        assert!(elements.is_empty());
    }
}
