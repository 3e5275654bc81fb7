//! Destination filename generation for downloaded images.

/// Builds the destination filename for an acquired image.
///
/// The name is deterministic in the query and a 1-based running index:
/// `<sanitized-query>-<index>.jpg`. The `.jpg` suffix is nominal; whatever
/// bytes the server returns are saved under it.
#[must_use]
pub fn image_filename(query: &str, index: usize) -> String {
    format!("{}-{index}.jpg", sanitize_query(query))
}

/// Maps a free-text query to a filesystem-safe filename stem.
///
/// Whitespace runs become a single hyphen; path separators and other
/// filesystem-hostile characters map to hyphens as well.
fn sanitize_query(query: &str) -> String {
    let mut out = String::new();
    let mut prev_sep = false;
    for ch in query.chars() {
        let mapped = match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_whitespace() || c.is_control() => '-',
            c => c,
        };
        if mapped == '-' {
            if !prev_sep {
                out.push('-');
                prev_sep = true;
            }
        } else {
            out.push(mapped);
            prev_sep = false;
        }
    }
    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_hyphens() {
        assert_eq!(image_filename("tabby cats", 1), "tabby-cats-1.jpg");
    }

    #[test]
    fn test_index_appended() {
        assert_eq!(image_filename("cats", 101), "cats-101.jpg");
    }

    #[test]
    fn test_path_separators_sanitized() {
        let name = image_filename("a/b\\c", 1);
        assert!(!name.contains('/'), "no path separator in: {name}");
        assert!(!name.contains('\\'), "no backslash in: {name}");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(image_filename("big   cats", 2), "big-cats-2.jpg");
    }

    #[test]
    fn test_distinct_indexes_give_distinct_names() {
        let a = image_filename("cats", 3);
        let b = image_filename("cats", 4);
        assert_ne!(a, b);
    }
}
