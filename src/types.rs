use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One extracted infobox value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
    Null,
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        value.map(FieldValue::Number).unwrap_or(FieldValue::Null)
    }
}

/// Insertion-ordered label → value mapping for one infobox.
///
/// Inserting a label that already exists replaces its value in place, so the
/// record keeps the position of the first occurrence and the value of the last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoboxRecord {
    entries: Vec<(String, FieldValue)>,
}

impl InfoboxRecord {
    pub const TITLE: &'static str = "title";
    pub const IMAGE: &'static str = "image";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: FieldValue) {
        let label = label.into();
        match self.entries.iter_mut().find(|(k, _)| *k == label) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v)
    }

    pub fn title(&self) -> Option<&str> {
        self.get(Self::TITLE).and_then(FieldValue::as_text)
    }

    pub fn image(&self) -> Option<&str> {
        self.get(Self::IMAGE).and_then(FieldValue::as_text)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for InfoboxRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for InfoboxRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = InfoboxRecord;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an infobox object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut record = InfoboxRecord::new();
                while let Some((k, v)) = access.next_entry::<String, FieldValue>()? {
                    record.insert(k, v);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Title of a table entry that carries no link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleStub {
    pub title: String,
}

/// One italic entry of a sortable wikitable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableEntry {
    Stub(TitleStub),
    Record(InfoboxRecord),
}

impl TableEntry {
    pub fn stub(title: impl Into<String>) -> Self {
        TableEntry::Stub(TitleStub {
            title: title.into(),
        })
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            TableEntry::Stub(s) => Some(&s.title),
            TableEntry::Record(r) => r.title(),
        }
    }
}

/// Everything one wikipedia run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeOutput {
    pub info_box: InfoboxRecord,
    pub tables: Vec<TableEntry>,
}
