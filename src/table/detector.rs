use log::debug;

/// Column names recognised as holding free text, compared case-insensitively.
pub const TEXT_COLUMN_CANDIDATES: [&str; 6] =
    ["text", "texte", "comment", "commentaire", "review", "avis"];

/// First column, in declared order, whose name is a text-column candidate.
pub fn detect<S: AsRef<str>>(columns: &[S]) -> Option<&str> {
    let found = columns.iter().map(AsRef::as_ref).find(|name| {
        let lowered = name.to_lowercase();
        TEXT_COLUMN_CANDIDATES.contains(&lowered.as_str())
    });

    match found {
        Some(name) => debug!("Detected text column {:?}", name),
        None => debug!("No text column among {} columns", columns.len()),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(detect(&["id", "Comment", "date"]), Some("Comment"));
        assert_eq!(detect(&["AVIS"]), Some("AVIS"));
    }

    #[test]
    fn returns_none_without_candidate() {
        assert_eq!(detect(&["id", "date"]), None);
        assert_eq!(detect::<&str>(&[]), None);
    }

    #[test]
    fn first_declared_column_wins() {
        assert_eq!(detect(&["review", "text"]), Some("review"));
        assert_eq!(detect(&["Text", "review"]), Some("Text"));
    }

    #[test]
    fn requires_exact_name() {
        assert_eq!(detect(&["text_body", "comments", " text"]), None);
    }

    #[test]
    fn accepts_owned_names() {
        let columns = vec!["id".to_string(), "Texte".to_string()];
        assert_eq!(detect(&columns), Some("Texte"));
    }
}
