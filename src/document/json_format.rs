//! JSON document format.
//!
//! Untouched sections are carried as raw JSON text, so whatever formatting
//! they had on disk is written back unchanged.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::value::RawValue;

use crate::settings::FieldMap;

use super::{DocumentError, DocumentFormat, SectionList};

/// Indentation used for rendered sections.
const INDENT: &str = "  ";

/// A JSON object whose members are the document sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl DocumentFormat for JsonFormat {
    type Section = Box<RawValue>;

    fn parse(&self, text: &str) -> Result<SectionList<Self::Section>, DocumentError> {
        let RawSections(sections) = serde_json::from_str(text)?;
        Ok(sections)
    }

    fn decode_section(&self, section: &Self::Section) -> Result<FieldMap, DocumentError> {
        Ok(serde_json::from_str(section.get())?)
    }

    fn encode_section(&self, fields: &FieldMap) -> Result<Self::Section, DocumentError> {
        // Nest the pretty output one level so it lines up under its key.
        let pretty = serde_json::to_string_pretty(fields)?.replace('\n', &format!("\n{INDENT}"));
        Ok(RawValue::from_string(pretty)?)
    }

    /// Lays the document out as one `"name": <section>` line per section at
    /// two-space indentation.
    ///
    /// Each section's raw text is emitted byte-for-byte, inner line breaks and
    /// indentation included, so a multi-line section from a hand-edited file
    /// keeps its original alignment rather than being reindented under its key.
    fn render(&self, sections: &SectionList<Self::Section>) -> Result<String, DocumentError> {
        if sections.is_empty() {
            return Ok("{}\n".to_string());
        }

        let mut out = String::from("{\n");
        for (index, (name, section)) in sections.iter().enumerate() {
            if index > 0 {
                out.push_str(",\n");
            }
            out.push_str(INDENT);
            out.push_str(&serde_json::to_string(name)?);
            out.push_str(": ");
            out.push_str(section.get());
        }
        out.push_str("\n}\n");
        Ok(out)
    }
}

/// Top-level object read member by member, keeping each value's raw text.
struct RawSections(SectionList<Box<RawValue>>);

impl<'de> Deserialize<'de> for RawSections {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawSectionsVisitor)
    }
}

struct RawSectionsVisitor;

impl<'de> Visitor<'de> for RawSectionsVisitor {
    type Value = RawSections;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object of named sections")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut sections = SectionList::new();
        while let Some((name, section)) = map.next_entry::<String, Box<RawValue>>()? {
            sections.replace_or_append(&name, section);
        }
        Ok(RawSections(sections))
    }
}
