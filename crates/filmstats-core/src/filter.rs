// Record selection by named field.

/// A field value as seen by the filter operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i64),
    Bool(bool),
    Missing,
}

impl FieldValue<'_> {
    /// Lowercased textual form, used for substring search
    fn to_lowercase_text(self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text.to_lowercase()),
            FieldValue::Int(n) => Some(n.to_string()),
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Missing => None,
        }
    }
}

/// Anything whose fields can be looked up by name.
pub trait Record {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> FieldValue<'_> {
        (**self).field(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Field equals a boolean or integer exactly
    Equals { field: String, value: Scalar },
    /// Field, as text, contains `needle` ignoring case (needle stored lowercased)
    Contains { field: String, needle: String },
    /// Field is present, non-null and not an empty string
    Present { field: String },
}

impl Condition {
    pub fn equals(field: &str, value: impl Into<Scalar>) -> Self {
        Condition::Equals {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn contains_ignore_case(field: &str, needle: &str) -> Self {
        Condition::Contains {
            field: field.to_string(),
            needle: needle.to_lowercase(),
        }
    }

    pub fn present(field: &str) -> Self {
        Condition::Present {
            field: field.to_string(),
        }
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            Condition::Equals { field, value } => match (record.field(field), value) {
                (FieldValue::Bool(a), Scalar::Bool(b)) => a == *b,
                (FieldValue::Int(a), Scalar::Int(b)) => a == *b,
                _ => false,
            },
            Condition::Contains { field, needle } => record
                .field(field)
                .to_lowercase_text()
                .map(|text| text.contains(needle.as_str()))
                .unwrap_or(false),
            Condition::Present { field } => match record.field(field) {
                FieldValue::Text(text) => !text.is_empty(),
                FieldValue::Int(_) | FieldValue::Bool(_) => true,
                FieldValue::Missing => false,
            },
        }
    }
}

/// Conjunction of conditions. An empty filter accepts every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.conditions.iter().all(|condition| condition.matches(record))
    }

    /// Keep only the matching records, preserving order.
    pub fn apply<'f, R, I>(&'f self, records: I) -> impl Iterator<Item = R> + 'f
    where
        R: Record + 'f,
        I: IntoIterator<Item = R>,
        I::IntoIter: 'f,
    {
        records.into_iter().filter(move |record| self.matches(record))
    }
}
