/// Ordered inline CSS declarations.
///
/// Setting a property that is already present replaces its value in place, so a base style can
/// be extended and overridden while keeping declaration order stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, prop: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.decls.iter_mut().find(|(p, _)| *p == prop) {
            Some(slot) => slot.1 = value,
            None => self.decls.push((prop, value)),
        }
        self
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.decls.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// `prop: value; prop: value` form for a `style` attribute.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (i, (p, v)) in self.decls.iter().enumerate() {
            if i > 0 {
                out.push_str("; ");
            }
            out.push_str(p);
            out.push_str(": ");
            out.push_str(v);
        }
        out
    }
}

/// Shortest round-trip decimal form of `v`; negative zero prints as `0`.
pub fn css_num(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    format!("{v}")
}

pub fn px(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    format!("{}px", css_num(v))
}

pub fn pct(v: f64) -> String {
    format!("{}%", css_num(v))
}

pub fn secs(v: f64) -> String {
    format!("{}s", css_num(v))
}

#[cfg(test)]
#[path = "../../tests/unit/markup/style.rs"]
mod tests;
