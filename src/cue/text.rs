use crate::cue::error::{CueError, CueResult};

fn strip_quotes(data: &str) -> &str {
    let mut data = data;

    if data.starts_with('"') {
        data = data.trim_matches('"').trim();
    }

    if data.starts_with('\'') {
        data = data.trim_matches('\'').trim();
    }

    data
}

/// Removes tabs and surrounding whitespace, then strips surrounding `"` then `'` quotes
/// until none are left.
pub fn normalize(token: &str) -> String {
    let data = token.replace('\t', "");
    let mut data = data.trim();

    loop {
        let stripped = strip_quotes(data);
        if stripped == data {
            break;
        }
        data = stripped;
    }

    data.to_string()
}

/// Splits a line into its keyword and the (normalized) rest.
pub fn token(line: &str) -> CueResult<(String, String)> {
    let (keyword, rest) = line
        .split_once(' ')
        .ok_or_else(|| CueError::MalformedLine(line.to_string()))?;

    Ok((normalize(keyword), normalize(rest)))
}

/// Splits `line` into `keyword` followed by exactly `field_count` fields.
///
/// The last field keeps any further occurrences of `divisor`.
pub fn attribute(
    keyword: &str,
    line: &str,
    divisor: char,
    field_count: usize,
) -> CueResult<Vec<String>> {
    let parts: Vec<&str> = line.splitn(field_count + 1, divisor).collect();

    if parts.len() != field_count + 1 || parts[0] != keyword {
        return Err(CueError::MalformedAttribute {
            keyword: keyword.to_string(),
            line: line.to_string(),
        });
    }

    Ok(parts[1..].iter().map(|part| normalize(part)).collect())
}

/// Returns `(name, type)` of a `FILE "<name>" <type>` line. Names may contain spaces.
pub fn file_fields(line: &str) -> CueResult<(String, String)> {
    let rest = line.replacen("FILE", "", 1);

    let (name, file_type) = rest
        .trim()
        .rsplit_once(' ')
        .ok_or_else(|| CueError::MalformedFile(line.to_string()))?;

    Ok((normalize(name), normalize(file_type)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_tabs_quotes_and_whitespace() {
        assert_eq!(normalize("\t\"Some Title\"  "), "Some Title");
        assert_eq!(normalize("' single '"), "single");
        assert_eq!(normalize("\" 'both' \""), "both");
        assert_eq!(normalize("plain"), "plain");
        assert_eq!(normalize("\t\t"), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in [
            "\"Title\"",
            "  'x'  ",
            "a\tb",
            "\"\"",
            "REM GENRE Rock",
            "\" spaced \"",
            "'\"x\"'",
            "\"'\"nested\"'\"",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "{raw:?}");
        }
    }

    #[test]
    fn normalize_strips_double_quotes_inside_single_quotes() {
        assert_eq!(normalize("'\"x\"'"), "x");
        assert_eq!(normalize("\"'\"nested\"'\""), "nested");
    }

    #[test]
    fn token_splits_on_first_space() {
        assert_eq!(
            token("TITLE \"Blue Train\"").unwrap(),
            ("TITLE".to_string(), "Blue Train".to_string())
        );
        assert_eq!(
            token("REM DATE 1957").unwrap(),
            ("REM".to_string(), "DATE 1957".to_string())
        );
    }

    #[test]
    fn token_without_space_is_malformed() {
        assert_eq!(
            token("TITLE"),
            Err(CueError::MalformedLine("TITLE".to_string()))
        );
    }

    #[test]
    fn attribute_returns_normalized_fields() {
        assert_eq!(
            attribute("TRACK", "TRACK 01 AUDIO", ' ', 2).unwrap(),
            vec!["01".to_string(), "AUDIO".to_string()]
        );
        assert_eq!(
            attribute("INDEX", "INDEX 01 00:00:00", ' ', 2).unwrap(),
            vec!["01".to_string(), "00:00:00".to_string()]
        );
    }

    #[test]
    fn attribute_requires_keyword_and_field_count() {
        assert!(attribute("TRACK", "TRACK 01", ' ', 2).is_err());
        assert!(attribute("TRACK", "INDEX 01 AUDIO", ' ', 2).is_err());
        assert!(matches!(
            attribute("TRACK", "TRACKS 01 AUDIO", ' ', 2),
            Err(CueError::MalformedAttribute { .. })
        ));
    }

    #[test]
    fn file_fields_split_on_last_space() {
        assert_eq!(
            file_fields("FILE \"Side A - part 1.wav\" WAVE").unwrap(),
            ("Side A - part 1.wav".to_string(), "WAVE".to_string())
        );
    }

    #[test]
    fn file_fields_keep_keyword_inside_name() {
        assert_eq!(
            file_fields("FILE \"FILE.flac\" WAVE").unwrap(),
            ("FILE.flac".to_string(), "WAVE".to_string())
        );
    }

    #[test]
    fn file_fields_without_type_are_malformed() {
        assert_eq!(
            file_fields("FILE \"a.wav\""),
            Err(CueError::MalformedFile("FILE \"a.wav\"".to_string()))
        );
    }
}
