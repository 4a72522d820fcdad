use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// One element of the top-level array. Its contents are skipped, not decoded,
/// so records holding numbers outside the f64 range still count.
pub type MovieRecord = IgnoredAny;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Number,
    Boolean,
    Null,
}

impl ScalarKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Number => "number",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Null => "null",
        }
    }
}

/// A decoded input document, split by the only distinction the counter cares
/// about: whether the top-level value is an array.
#[derive(Debug, Clone)]
pub enum Document {
    Array(Vec<MovieRecord>),
    Object { entries: usize },
    Scalar(ScalarKind),
}

impl Document {
    /// JSON type name of the top-level value.
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Array(_) => "array",
            Document::Object { .. } => "object",
            Document::Scalar(kind) => kind.name(),
        }
    }

    pub fn into_records(self) -> Option<Vec<MovieRecord>> {
        match self {
            Document::Array(items) => Some(items),
            _ => None,
        }
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON value")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Document, A::Error> {
        let mut records = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(record) = seq.next_element::<MovieRecord>()? {
            records.push(record);
        }
        Ok(Document::Array(records))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Document, A::Error> {
        let mut entries = 0;
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {
            entries += 1;
        }
        Ok(Document::Object { entries })
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Document, E> {
        Ok(Document::Scalar(ScalarKind::String))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Document, E> {
        Ok(Document::Scalar(ScalarKind::Number))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Document, E> {
        Ok(Document::Scalar(ScalarKind::Number))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Document, E> {
        Ok(Document::Scalar(ScalarKind::Number))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Document, E> {
        Ok(Document::Scalar(ScalarKind::Boolean))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Document, E> {
        Ok(Document::Scalar(ScalarKind::Null))
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCount {
    /// Input path as configured, echoed in the message.
    pub source: String,
    pub count: usize,
}

impl MovieCount {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MovieCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number of movies in {}: {}", self.source, self.count)
    }
}
