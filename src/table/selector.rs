use crate::grid::Scalar;
use crate::table::labels::{column_label, row_label, LETTER_LABELS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

/// A synthetic positional label, 1-based.
///
/// Only meaningful for PureTable tables; elsewhere it stands for its own text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Row(usize),
    Column(usize),
}

impl Label {
    pub fn axis(&self) -> Axis {
        match self {
            Label::Row(_) => Axis::Row,
            Label::Column(_) => Axis::Column,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Label::Row(n) | Label::Column(n) => *n,
        }
    }

    /// The label as it appears in a rendered PureTable grid.
    pub fn text(&self) -> String {
        match *self {
            Label::Row(0) | Label::Column(0) => "0".to_owned(),
            Label::Row(n) => row_label(n - 1),
            Label::Column(n) => column_label(n - 1),
        }
    }

    /// Recognizes a single decimal digit on the row axis, or a single ASCII
    /// letter (any case) on the column axis.
    pub fn parse(axis: Axis, text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        match axis {
            Axis::Row => c.to_digit(10).map(|d| Label::Row(d as usize)),
            Axis::Column if c.is_ascii_alphabetic() => {
                let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
                debug_assert!(index < LETTER_LABELS);
                Some(Label::Column(index + 1))
            }
            Axis::Column => None,
        }
    }
}

/// One element of a selector.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    Value(Scalar),
    /// Typed-in text that reads as a number. Matches a header holding either
    /// the number or the text as written.
    Numeric { value: Scalar, text: String },
    Label(Label),
}

impl Key {
    /// Interprets free text: numbers become [`Key::Numeric`], anything else
    /// a text value.
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        let value = if let Ok(i) = text.parse::<i64>() {
            Scalar::Int(i)
        } else if let Some(f) = text.parse::<f64>().ok().filter(|f| f.is_finite()) {
            Scalar::Float(f)
        } else {
            return Key::Value(Scalar::from(text));
        };

        Key::Numeric {
            value,
            text: text.to_owned(),
        }
    }
}

impl From<Scalar> for Key {
    fn from(value: Scalar) -> Self {
        Key::Value(value)
    }
}

impl From<Label> for Key {
    fn from(label: Label) -> Self {
        Key::Label(label)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Value(value.into())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Value(value.into())
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Value(value.into())
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Value(value.into())
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::Value(value.into())
    }
}

/// What to look for along one axis.
///
/// `All` matches a header tuple only when every key is contained in it,
/// wherever it sits in the tuple.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    Exact(Key),
    All(Vec<Key>),
}

impl Selector {
    pub fn all<I>(keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        Selector::All(keys.into_iter().map(Into::into).collect())
    }

    pub fn keys(&self) -> &[Key] {
        match self {
            Selector::Exact(key) => std::slice::from_ref(key),
            Selector::All(keys) => keys,
        }
    }

    /// Parses comma-separated text. With `labels` set, single-character
    /// pieces that look like positional labels for `axis` become labels.
    pub fn parse(axis: Axis, text: &str, labels: bool) -> Self {
        let mut keys: Vec<Key> = text
            .split(',')
            .map(str::trim)
            .map(|piece| match Label::parse(axis, piece) {
                Some(label) if labels => Key::Label(label),
                _ => Key::from_text(piece),
            })
            .collect();

        if keys.len() == 1 {
            Selector::Exact(keys.remove(0))
        } else {
            Selector::All(keys)
        }
    }
}

macro_rules! exact_selector_from {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Selector {
                fn from(key: $source) -> Self {
                    Selector::Exact(key.into())
                }
            }
        )*
    };
}

exact_selector_from!(Key, Label, Scalar, &str, String, i64, i32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_character_labels_only() {
        assert_eq!(Label::parse(Axis::Row, "3"), Some(Label::Row(3)));
        assert_eq!(Label::parse(Axis::Row, "12"), None);
        assert_eq!(Label::parse(Axis::Row, "A"), None);
        assert_eq!(Label::parse(Axis::Column, "b"), Some(Label::Column(2)));
        assert_eq!(Label::parse(Axis::Column, "Z"), Some(Label::Column(26)));
        assert_eq!(Label::parse(Axis::Column, "AB"), None);
        assert_eq!(Label::parse(Axis::Column, "7"), None);
    }

    #[test]
    fn label_text_matches_rendered_labels() {
        assert_eq!(Label::Row(4).text(), "4");
        assert_eq!(Label::Column(1).text(), "A");
        assert_eq!(Label::Column(30).text(), "Col30");
        assert_eq!(Label::Row(0).text(), "0");
    }

    #[test]
    fn parse_without_labels_keeps_values() {
        assert_eq!(
            Selector::parse(Axis::Row, "1", false),
            Selector::Exact(Key::Numeric {
                value: Scalar::Int(1),
                text: "1".to_owned()
            })
        );
        assert_eq!(
            Selector::parse(Axis::Row, "1", true),
            Selector::Exact(Key::Label(Label::Row(1)))
        );
    }

    #[test]
    fn parse_splits_on_commas() {
        let selector = Selector::parse(Axis::Column, "Sales, 2.5, a", true);
        assert_eq!(
            selector,
            Selector::All(vec![
                Key::Value(Scalar::from("Sales")),
                Key::Numeric {
                    value: Scalar::Float(2.5),
                    text: "2.5".to_owned()
                },
                Key::Label(Label::Column(1)),
            ])
        );
    }

    #[test]
    fn numeric_text_keeps_what_was_typed() {
        assert_eq!(
            Key::from_text(" 2024 "),
            Key::Numeric {
                value: Scalar::Int(2024),
                text: "2024".to_owned()
            }
        );
        assert_eq!(Key::from_text("inf"), Key::Value(Scalar::from("inf")));
        assert_eq!(Key::from_text("North"), Key::Value(Scalar::from("North")));
    }
}
