use crate::animation::ease::Ease;
use crate::foundation::error::{PageError, PageResult};
use crate::markup::style::{css_num, px};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// `translateY(..) rotate(..)` transform used by the floating shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    pub translate_y_px: f64,
    pub rotate_deg: f64,
}

impl Pose {
    pub const fn new(translate_y_px: f64, rotate_deg: f64) -> Self {
        Self {
            translate_y_px,
            rotate_deg,
        }
    }

    pub fn to_css(self) -> String {
        format!(
            "translateY({}) rotate({}deg)",
            px(self.translate_y_px),
            css_num(self.rotate_deg)
        )
    }
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate_y_px: f64::lerp(&a.translate_y_px, &b.translate_y_px, t),
            rotate_deg: f64::lerp(&a.rotate_deg, &b.rotate_deg, t),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One keyframe of a CSS-style animation.
pub struct Keyframe<T> {
    /// Position in the cycle, `0.0..=1.0`.
    pub offset: f64,
    /// Value at `offset`.
    pub value: T,
    /// Timing function applied toward the next keyframe.
    pub ease: Ease,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Keyframes sampled by cycle progress.
pub struct Keyframes<T> {
    /// Keyframes sorted by `offset`.
    pub keys: Vec<Keyframe<T>>,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn new(keys: Vec<Keyframe<T>>) -> PageResult<Self> {
        let kf = Self { keys };
        kf.validate()?;
        Ok(kf)
    }

    pub fn validate(&self) -> PageResult<()> {
        if self.keys.is_empty() {
            return Err(PageError::animation("Keyframes must have at least one key"));
        }
        if !self
            .keys
            .iter()
            .all(|k| k.offset.is_finite() && (0.0..=1.0).contains(&k.offset))
        {
            return Err(PageError::animation(
                "Keyframes offsets must lie in [0, 1]",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].offset <= w[1].offset) {
            return Err(PageError::animation(
                "Keyframes keys must be sorted by offset",
            ));
        }
        Ok(())
    }

    /// Sample at cycle progress `p` (clamped to `[0, 1]`).
    pub fn sample(&self, p: f64) -> PageResult<T> {
        let Some(first) = self.keys.first() else {
            return Err(PageError::animation("Keyframes has no keys"));
        };
        let p = p.clamp(0.0, 1.0);
        let idx = self.keys.partition_point(|k| k.offset <= p);

        if idx == 0 {
            return Ok(first.value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.offset - a.offset;
        if span <= 0.0 {
            return Ok(a.value.clone());
        }
        let t = a.ease.apply((p - a.offset) / span);
        Ok(T::lerp(&a.value, &b.value, t))
    }
}

/// Repeat schedule of an `infinite` CSS animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cycle {
    pub duration_s: f64,
    /// Negative values start the animation part-way through its cycle.
    pub delay_s: f64,
}

impl Cycle {
    pub fn new(duration_s: f64, delay_s: f64) -> PageResult<Self> {
        if !duration_s.is_finite() || duration_s <= 0.0 {
            return Err(PageError::animation(format!(
                "cycle duration must be positive (got {duration_s})"
            )));
        }
        if !delay_s.is_finite() {
            return Err(PageError::animation("cycle delay must be finite"));
        }
        Ok(Self {
            duration_s,
            delay_s,
        })
    }

    /// Progress within the current cycle at page time `t_s`, or `None` while the delay is
    /// still pending.
    pub fn progress_at(self, t_s: f64) -> Option<f64> {
        let local = t_s - self.delay_s;
        if local < 0.0 {
            return None;
        }
        Some(local.rem_euclid(self.duration_s) / self.duration_s)
    }
}

/// Keyframes of the `float` animation shared by every background shape.
pub fn float_keyframes() -> Keyframes<Pose> {
    let key = |offset, ty, rot| Keyframe {
        offset,
        value: Pose::new(ty, rot),
        ease: Ease::CSS_EASE_IN_OUT,
    };
    Keyframes {
        keys: vec![
            key(0.0, 0.0, 0.0),
            key(0.25, -30.0, 5.0),
            key(0.5, -15.0, -3.0),
            key(0.75, -25.0, 2.0),
            key(1.0, 0.0, 0.0),
        ],
    }
}

/// Keyframes of the glyph `bounce`, as a fraction of the glyph's own height.
pub fn bounce_keyframes() -> Keyframes<f64> {
    let fall = Ease::CubicBezier {
        x1: 0.8,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    let rise = Ease::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };
    Keyframes {
        keys: vec![
            Keyframe {
                offset: 0.0,
                value: -0.25,
                ease: fall,
            },
            Keyframe {
                offset: 0.5,
                value: 0.0,
                ease: rise,
            },
            Keyframe {
                offset: 1.0,
                value: -0.25,
                ease: fall,
            },
        ],
    }
}

/// Period of the dot `pulse`.
pub const PULSE_DURATION_S: f64 = 2.0;

/// Opacity keyframes of the dot `pulse`.
pub fn pulse_keyframes() -> Keyframes<f64> {
    let ease = Ease::CubicBezier {
        x1: 0.4,
        y1: 0.0,
        x2: 0.6,
        y2: 1.0,
    };
    Keyframes {
        keys: vec![
            Keyframe {
                offset: 0.0,
                value: 1.0,
                ease,
            },
            Keyframe {
                offset: 0.5,
                value: 0.5,
                ease,
            },
            Keyframe {
                offset: 1.0,
                value: 1.0,
                ease,
            },
        ],
    }
}

/// `@keyframes float { .. }` rule, with identical poses merged into one selector.
pub fn float_keyframes_css() -> String {
    let mut groups: Vec<(Vec<f64>, Pose)> = Vec::new();
    for k in float_keyframes().keys {
        match groups.iter_mut().find(|(_, pose)| *pose == k.value) {
            Some((offsets, _)) => offsets.push(k.offset),
            None => groups.push((vec![k.offset], k.value)),
        }
    }

    let mut out = String::from("\n  @keyframes float {\n");
    for (offsets, pose) in groups {
        let selector = offsets
            .iter()
            .map(|o| format!("{}%", css_num(o * 100.0)))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "    {selector} {{\n      transform: {};\n    }}\n",
            pose.to_css()
        ));
    }
    out.push_str("  }\n");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
