/// Timing functions applied to one keyframe segment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`; `x1` and `x2` must lie in `[0, 1]`.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// CSS `ease-in-out`.
    pub const CSS_EASE_IN_OUT: Ease = Ease::CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    /// CSS text for the `animation-timing-function` property, where one exists.
    pub fn to_css(self) -> Option<String> {
        match self {
            Self::Linear => Some("linear".to_owned()),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                Some(format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"))
            }
            _ => None,
        }
    }
}

// Solves x(s) = t for the curve parameter, then returns y(s).
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let coeffs = |p1: f64, p2: f64| {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    };
    let (ax, bx, cx) = coeffs(x1, x2);
    let (ay, by, cy) = coeffs(y1, y2);
    let curve_x = |s: f64| ((ax * s + bx) * s + cx) * s;
    let curve_y = |s: f64| ((ay * s + by) * s + cy) * s;
    let slope_x = |s: f64| (3.0 * ax * s + 2.0 * bx) * s + cx;

    const EPS: f64 = 1e-7;

    let mut s = t;
    for _ in 0..8 {
        let err = curve_x(s) - t;
        if err.abs() < EPS {
            return curve_y(s);
        }
        let d = slope_x(s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    // Newton stalled; x(s) is monotonic on [0, 1] so bisection converges.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = t;
    while hi - lo > EPS {
        let x = curve_x(s);
        if (x - t).abs() < EPS {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    curve_y(s)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
