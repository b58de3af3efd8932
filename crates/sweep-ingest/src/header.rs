//! Header normalization.

use std::collections::HashSet;

/// Makes raw header names usable as unique column names.
///
/// Blank names become `Unnamed: {index}`; a repeated name gets a numeric
/// suffix (`a`, `a.1`, `a.2`) that does not clash with any other header.
pub fn repair_headers(raw: Vec<String>) -> Vec<String> {
    let named: Vec<String> = raw
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            if name.trim().is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name
            }
        })
        .collect();

    let original: HashSet<&str> = named.iter().map(String::as_str).collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(named.len());
    let mut columns = Vec::with_capacity(named.len());

    for name in &named {
        if seen.insert(name.clone()) {
            columns.push(name.clone());
            continue;
        }
        let mut suffix = 1;
        let candidate = loop {
            let candidate = format!("{name}.{suffix}");
            if !seen.contains(&candidate) && !original.contains(candidate.as_str()) {
                break candidate;
            }
            suffix += 1;
        };
        seen.insert(candidate.clone());
        columns.push(candidate);
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_unique_headers_unchanged() {
        assert_eq!(repair_headers(names(&["A", "B"])), names(&["A", "B"]));
    }

    #[test]
    fn test_blank_headers() {
        assert_eq!(
            repair_headers(names(&["A", "", " "])),
            names(&["A", "Unnamed: 1", "Unnamed: 2"])
        );
    }

    #[test]
    fn test_repeated_headers() {
        assert_eq!(
            repair_headers(names(&["a", "a", "b", "a"])),
            names(&["a", "a.1", "b", "a.2"])
        );
    }

    #[test]
    fn test_suffix_skips_existing_names() {
        assert_eq!(
            repair_headers(names(&["a", "a", "a.1"])),
            names(&["a", "a.2", "a.1"])
        );
    }
}
