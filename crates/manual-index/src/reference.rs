//! Reference glossaries.
//!
//! A reference file holds one `<term> <description>` pair per line. The term ends
//! at the first space; the rest of the line is the description.

use std::collections::BTreeMap;

/// Glossary entries sorted by term.
pub type Reference = BTreeMap<String, String>;

/// Parses reference lines into `reference`, replacing existing terms.
///
/// Blank lines and lines without a description are skipped.
pub fn parse_reference_into(content: &str, reference: &mut Reference) {
    for line in content.lines().map(str::trim) {
        if let Some((term, description)) = line.split_once(' ') {
            reference.insert(term.to_string(), description.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        let mut reference = Reference::new();
        parse_reference_into("zeta last letter\nalpha first letter\n", &mut reference);

        let entries: Vec<_> = reference.iter().collect();
        assert_eq!(
            entries,
            vec![
                (&"alpha".to_string(), &"first letter".to_string()),
                (&"zeta".to_string(), &"last letter".to_string()),
            ]
        );
    }

    #[test]
    fn test_skips_blank_and_malformed_lines() {
        let mut reference = Reference::new();
        parse_reference_into("\n   \nlonely\n  padded  value  \n", &mut reference);

        assert_eq!(reference.len(), 1);
        assert_eq!(reference.get("padded").map(String::as_str), Some(" value"));
    }

    #[test]
    fn test_later_lines_replace_terms() {
        let mut reference = Reference::new();
        parse_reference_into("term one\nterm two\n", &mut reference);
        assert_eq!(reference.get("term").map(String::as_str), Some("two"));
    }
}
