//! JSON tree export and import

use eyre::{Result, bail, eyre};
use serde_json::{Map, Value, json};

use super::{Document, EntryValue, GENERATOR, Reading, RenderContext, SCHEMA_VERSION};
use crate::persona::{Dimension, DimensionGroup, Field, FieldKind, Profile};

fn reading_value(reading: &Reading) -> Value {
    json!({ "value": reading.value, "label": reading.label })
}

/// The export tree shared by the JSON and YAML writers
pub fn to_value(document: &Document, ctx: &RenderContext) -> Value {
    let mut persona = Map::new();

    for section in &document.sections {
        let mut body = Map::new();
        for entry in &section.entries {
            let value = match &entry.value {
                EntryValue::Text(text) => Value::String(text.clone()),
                EntryValue::List(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
                EntryValue::Dimensions(readings) => Value::Object(
                    readings
                        .iter()
                        .map(|r| (r.dimension.name().to_string(), reading_value(r)))
                        .collect(),
                ),
                EntryValue::Rated(reading) => reading_value(reading),
            };
            body.insert(entry.key.to_string(), value);
        }
        persona.insert(section.key.to_string(), Value::Object(body));
    }

    json!({
        "persona": persona,
        "metadata": {
            "generated_by": GENERATOR,
            "generated_at": ctx.generated_at(),
            "version": SCHEMA_VERSION,
        }
    })
}

pub fn render(document: &Document, ctx: &RenderContext) -> String {
    let value = to_value(document, ctx);
    // Serializing a Value cannot fail
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// Accept either `{ "value": n, ... }` or a bare number
fn dimension_value(value: &Value) -> Option<u8> {
    value
        .as_u64()
        .or_else(|| value.get("value").and_then(Value::as_u64))
        .and_then(|n| u8::try_from(n).ok())
}

fn field_for_export_key(key: &str) -> Option<Field> {
    Field::ALL.iter().copied().find(|f| f.export_key() == key)
}

/// Rebuild a profile from an exported persona tree (JSON or YAML parsed to a `Value`)
pub fn profile_from_export(export: &Value) -> Result<Profile> {
    let persona = export
        .get("persona")
        .and_then(Value::as_object)
        .ok_or_else(|| eyre!("Export has no 'persona' object"))?;

    let mut profile = Profile::default();

    for (section_key, section) in persona {
        let section = section
            .as_object()
            .ok_or_else(|| eyre!("Section '{}' is not an object", section_key))?;

        for (key, value) in section {
            if let Some(group) = DimensionGroup::ALL.iter().find(|g| g.key() == key) {
                let readings = value
                    .as_object()
                    .ok_or_else(|| eyre!("'{}' is not an object", key))?;
                for (name, reading) in readings {
                    let dimension = Dimension::from_name(name)
                        .filter(|d| d.group() == Some(*group))
                        .ok_or_else(|| eyre!("Unknown dimension '{}' in {}", name, key))?;
                    let n = dimension_value(reading).ok_or_else(|| eyre!("Invalid value for {}", name))?;
                    profile.set_dimension(dimension, n)?;
                }
                continue;
            }

            if key == Dimension::TechnologyAdoption.name() {
                let n = dimension_value(value).ok_or_else(|| eyre!("Invalid value for {}", key))?;
                profile.set_dimension(Dimension::TechnologyAdoption, n)?;
                continue;
            }

            let field = field_for_export_key(key).ok_or_else(|| eyre!("Unknown entry '{}' in {}", key, section_key))?;
            match (field.kind(), value) {
                (FieldKind::Multi, Value::Array(items)) => {
                    let labels: Vec<String> = items
                        .iter()
                        .map(|item| match item {
                            Value::String(s) => Ok(s.clone()),
                            other => Err(eyre!("Non-string label {} in {}", other, key)),
                        })
                        .collect::<Result<_>>()?;
                    profile.set_labels(field, labels)?;
                }
                (FieldKind::Single, Value::String(label)) => profile.select(field, label)?,
                (FieldKind::Text, Value::String(text)) => profile.set_text(field, text)?,
                (_, Value::Null) => {}
                (kind, other) => bail!("Expected {} value for {}, found {}", kind, key, other),
            }
        }
    }

    Ok(profile)
}
