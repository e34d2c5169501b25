use super::{DOCUMENT_TITLE, Document, EntryValue, GENERATOR};

pub fn render(document: &Document) -> String {
    let mut md = format!("# {}\n\n**Generated by {}**\n\n---\n\n", DOCUMENT_TITLE, GENERATOR);

    for section in &document.sections {
        md.push_str(&format!("## {}\n\n", section.title));

        for entry in &section.entries {
            md.push_str(&format!("### {}\n", entry.title));
            match &entry.value {
                EntryValue::Text(text) => md.push_str(&format!("{}\n", text)),
                EntryValue::List(items) => {
                    for item in items {
                        md.push_str(&format!("- {}\n", item));
                    }
                }
                EntryValue::Dimensions(readings) => {
                    for reading in readings {
                        md.push_str(&format!(
                            "- **{}**: {}% ({})\n",
                            reading.dimension.title(),
                            reading.value,
                            reading.label
                        ));
                    }
                }
                EntryValue::Rated(reading) => md.push_str(&format!("{} ({}%)\n", reading.label, reading.value)),
            }
            md.push('\n');
        }
    }

    md
}
