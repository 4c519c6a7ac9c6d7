use std::fmt;

use serde::Serialize;

/// One labeled value of a decoded chunk, e.g. `("Number of planes", "5")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    pub label: String,
    pub value: String,
}

impl FieldEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Entry with an empty label, used for status rows such as `(unknown)`.
    pub fn note(value: impl Into<String>) -> Self {
        Self::new("", value)
    }
}

impl fmt::Display for FieldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            f.write_str(&self.value)
        } else {
            write!(f, "{}: {}", self.label, self.value)
        }
    }
}

/// Accumulator a decoder appends to, in on-disk field order.
///
/// One is created per `describe` call. Whatever was pushed before a failing
/// read is kept.
#[derive(Debug, Default)]
pub struct Fields {
    entries: Vec<FieldEntry>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl ToString) {
        self.entries.push(FieldEntry::new(label, value.to_string()));
    }

    /// Push a `"a : b"` pair, the format used for dimensions and positions.
    pub fn pair(&mut self, label: impl Into<String>, a: impl fmt::Display, b: impl fmt::Display) {
        self.entries.push(FieldEntry::new(label, format!("{a} : {b}")));
    }

    /// Push `label` for every `(bit, name)` whose bit is set in `value`.
    pub fn set_bits(&mut self, label: &str, value: u32, names: &[(u32, &str)]) {
        for &(bit, name) in names {
            if value & (1 << bit) != 0 {
                self.push(label, name);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<FieldEntry> {
        self.entries
    }
}

/// Render a 16.16 fixed-point value with four fraction digits.
pub fn fixed(raw: i32) -> String {
    format!("{:.4}", f64::from(raw) / 65536.0)
}

/// Render an enumerated code, or `None` for codes that have no listed name.
pub fn lookup<T: PartialEq + Copy>(code: T, names: &[(T, &'static str)]) -> Option<&'static str> {
    names.iter().find(|(c, _)| *c == code).map(|&(_, name)| name)
}
