use wordcheck_types::DefinitionEntry;

pub const NO_DEFINITION_MESSAGE: &str = "No definitions found";
pub const NO_NETWORK_MESSAGE: &str = "Definitions require internet connection";

/// Groups listed here come first, in this order
pub const PREFERRED_PARTS_OF_SPEECH: [&str; 2] = ["noun", "verb"];

/// Render definitions grouped by part of speech:
///
/// ```text
/// (Noun)
/// 1. <definition>
/// 2. <definition>
///
/// (Verb)
/// 1. <definition>
/// ```
///
/// Preferred parts of speech lead; the rest follow in order of first
/// appearance. Numbering restarts in every group. Entries without a part of
/// speech form their own group, printed without a header.
pub fn format_definitions(entries: &[DefinitionEntry]) -> String {
    if entries.is_empty() {
        return NO_DEFINITION_MESSAGE.to_string();
    }

    let mut groups: Vec<(String, Vec<&DefinitionEntry>)> = Vec::new();
    for entry in entries {
        let key = part_of_speech_key(entry);
        match groups.iter().position(|(k, _)| *k == key) {
            Some(i) => groups[i].1.push(entry),
            None => groups.push((key, vec![entry])),
        }
    }

    groups.sort_by_key(|(key, _)| {
        PREFERRED_PARTS_OF_SPEECH
            .iter()
            .position(|preferred| *preferred == key.as_str())
            .unwrap_or(PREFERRED_PARTS_OF_SPEECH.len())
    });

    groups
        .iter()
        .map(|(key, group)| format_group(key, group))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn part_of_speech_key(entry: &DefinitionEntry) -> String {
    entry
        .part_of_speech
        .as_deref()
        .map(|pos| pos.trim().to_lowercase())
        .unwrap_or_default()
}

fn format_group(part_of_speech: &str, definitions: &[&DefinitionEntry]) -> String {
    let mut lines = Vec::with_capacity(definitions.len() + 1);

    if !part_of_speech.is_empty() {
        lines.push(format!("({})", capitalize_words(part_of_speech)));
    }

    for (index, entry) in definitions.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, entry.definition));
    }

    lines.join("\n")
}

/// Uppercase the first letter of every word, e.g. `phrasal verb` -> `Phrasal Verb`
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }

    out
}
