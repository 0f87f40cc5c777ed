/// Strip byte-order marks and zero-width spaces, then collapse runs of whitespace.
pub(crate) fn normalize_cell(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pipe-delimited skill cells keep their delimiters; only the items are cleaned.
pub(crate) fn normalize_skill_list(value: &str) -> String {
    value
        .split('|')
        .map(normalize_cell)
        .filter(|skill| !skill.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

