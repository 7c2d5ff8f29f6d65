use once_cell::sync::Lazy;
use regex::Regex;

static X_RANGE: Lazy<Regex> = Lazy::new(|| axis_range("x"));
static Y_RANGE: Lazy<Regex> = Lazy::new(|| axis_range("y"));

fn axis_range(axis: &str) -> Regex {
    let number = r"-?\d+(?:\.\d+)?";
    let pattern = format!(r"{axis}\s*∈\s*\[\s*({number})\s*,\s*({number})\s*\]");
    Regex::new(&pattern).expect("axis range pattern is valid")
}

/// The math bounds of a Desmos graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Viewport {
    /// Parse a hint like `x∈[-10,10], y∈[-5,5]`.
    ///
    /// Both axes must be present; anything else in the string is ignored.
    pub fn parse(hint: &str) -> Option<Self> {
        let (left, right) = range(&X_RANGE, hint)?;
        let (bottom, top) = range(&Y_RANGE, hint)?;
        Some(Viewport {
            left,
            right,
            bottom,
            top,
        })
    }
}

fn range(re: &Regex, hint: &str) -> Option<(f64, f64)> {
    let caps = re.captures(hint)?;
    let lo = caps.get(1)?.as_str().parse().ok()?;
    let hi = caps.get(2)?.as_str().parse().ok()?;
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_axes() {
        assert_eq!(
            Viewport::parse("x∈[-10,10], y∈[-5,20]"),
            Some(Viewport {
                left: -10.0,
                right: 10.0,
                bottom: -5.0,
                top: 20.0
            })
        );
    }

    #[test]
    fn spacing_and_decimals() {
        let v = Viewport::parse("y ∈ [ -0.5 , 2.5 ] and x ∈ [0, 4]").unwrap();
        assert_eq!((v.left, v.right, v.bottom, v.top), (0.0, 4.0, -0.5, 2.5));
    }

    #[test]
    fn missing_axis() {
        assert_eq!(Viewport::parse("x∈[-10,10]"), None);
        assert_eq!(Viewport::parse("whole plane"), None);
    }
}
