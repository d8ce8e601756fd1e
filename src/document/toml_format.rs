//! TOML document format.

use toml::{Table, Value};

use crate::settings::FieldMap;

use super::{DocumentError, DocumentFormat, SectionList};

/// A TOML document whose top-level keys are the sections.
///
/// Sections round-trip by value in document order. TOML has no null, so
/// unset optional fields are left out when a section is written.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlFormat;

impl DocumentFormat for TomlFormat {
    type Section = Value;

    fn parse(&self, text: &str) -> Result<SectionList<Self::Section>, DocumentError> {
        let table: Table = toml::from_str(text)?;
        Ok(table.into_iter().collect())
    }

    fn decode_section(&self, section: &Self::Section) -> Result<FieldMap, DocumentError> {
        Ok(section.clone().try_into::<FieldMap>()?)
    }

    fn encode_section(&self, fields: &FieldMap) -> Result<Self::Section, DocumentError> {
        let present: FieldMap = fields
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Ok(Value::try_from(present)?)
    }

    fn render(&self, sections: &SectionList<Self::Section>) -> Result<String, DocumentError> {
        let table: Table = sections
            .iter()
            .map(|(name, section)| (name.to_string(), section.clone()))
            .collect();
        Ok(toml::to_string_pretty(&table)?)
    }
}
