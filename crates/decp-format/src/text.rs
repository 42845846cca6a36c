//! Display names and label text helpers.

use decp_model::{NOM_NON_DIFFUSIBLE, Structure};

/// Separator inserted by [`long_labels_breaker`]; the chart library the
/// dashboard uses understands HTML line breaks in axis labels.
const LABEL_BREAK: &str = "<br>";

/// Display name of a structure, with a fallback chain: the proper name
/// when present and not the undisclosed sentinel `[ND]`, otherwise
/// `[ND] {type_identifiant}:{identifiant}`, otherwise the empty string.
pub fn structure_name(structure: Option<&Structure>) -> String {
    let Some(structure) = structure else {
        return String::new();
    };
    match structure.nom.as_deref() {
        Some(nom) if !nom.is_empty() && nom != NOM_NON_DIFFUSIBLE => nom.to_string(),
        _ if !structure.identifiant.is_empty() => format!(
            "{NOM_NON_DIFFUSIBLE} {}:{}",
            structure.type_identifiant, structure.identifiant
        ),
        _ => String::new(),
    }
}

/// Wrap chart-axis labels longer than `max_len` characters at word
/// boundaries, joining the lines with `<br>`.
///
/// Labels at or under the limit, single unbreakable tokens, and `None`
/// entries pass through untouched.
pub fn long_labels_breaker<S: AsRef<str>>(
    labels: &[Option<S>],
    max_len: usize,
) -> Vec<Option<String>> {
    labels
        .iter()
        .map(|label| {
            label
                .as_ref()
                .map(|label| break_label(label.as_ref(), max_len))
        })
        .collect()
}

fn break_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        return label.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    for word in label.split_whitespace() {
        match lines.last_mut() {
            Some(line)
                if line.chars().count() + 1 + word.chars().count() <= max_len =>
            {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    lines.join(LABEL_BREAK)
}
