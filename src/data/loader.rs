use std::path::Path;

use super::error::{LoadError, ParseErrorKind};
use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read and parse a whole data file.
///
/// Expected layout, one record per line:
///
/// ```text
/// 0 5
/// 1 12   trailing columns are ignored
/// 2 7
/// ```
///
/// The first malformed line aborts the load.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let lines = read_lines(path)?;
    log::debug!("read {} lines from {}", lines.len(), path.display());
    parse_lines(lines.iter().map(String::as_str))
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Read the file into memory line by line. The handle is closed on return.
pub fn read_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_owned).collect())
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse every line in order, stopping at the first failure.
pub fn parse_lines<'a, I>(lines: I) -> Result<Dataset, LoadError>
where
    I: IntoIterator<Item = &'a str>,
{
    let lines = lines.into_iter();
    let mut dataset = Dataset::with_capacity(lines.size_hint().0);

    for (idx, line) in lines.enumerate() {
        let record = parse_line(line).map_err(|kind| LoadError::Parse {
            line: idx + 1,
            content: line.to_string(),
            kind,
        })?;
        dataset.push(record);
    }

    Ok(dataset)
}

/// Parse the first two whitespace-separated tokens of `line` as integers.
pub fn parse_line(line: &str) -> Result<Record, ParseErrorKind> {
    let mut tokens = line.split_whitespace();
    let (Some(x), Some(y)) = (tokens.next(), tokens.next()) else {
        return Err(ParseErrorKind::MissingColumn {
            found: line.split_whitespace().count(),
        });
    };

    Ok(Record::new(parse_int(x, 1)?, parse_int(y, 2)?))
}

fn parse_int(token: &str, column: usize) -> Result<i64, ParseErrorKind> {
    token
        .parse::<i64>()
        .map_err(|source| ParseErrorKind::InvalidInteger {
            column,
            token: token.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;
    use tempfile::NamedTempFile;

    use super::*;

    fn data_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_records_in_file_order() {
        let file = data_file("1 10\n2 20\n3 5\n");

        let ds = load_file(file.path()).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.xs(), &[1, 2, 3]);
        assert_eq!(ds.ys(), &[10, 20, 5]);
    }

    #[test]
    fn loading_twice_gives_equal_datasets() {
        let file = data_file("0 5\n4 -3\n2 8\n");

        let first = load_file(file.path()).unwrap();
        let second = load_file(file.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_file_gives_empty_dataset() {
        let file = data_file("");
        let ds = load_file(file.path()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn extra_columns_and_spacing_are_ignored() {
        let file = data_file("  7\t 70 ignored 99\r\n8   80\n");

        let ds = load_file(file.path()).unwrap();

        assert_eq!(ds.xs(), &[7, 8]);
        assert_eq!(ds.ys(), &[70, 80]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.txt");

        let err = load_file(&path).unwrap_err();

        match err {
            LoadError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn single_token_line_fails_with_its_line_number() {
        let file = data_file("1 10\n5\n3 30\n");

        let err = load_file(file.path()).unwrap_err();

        assert_eq!(err.line(), Some(2));
        match err {
            LoadError::Parse { content, kind, .. } => {
                assert_eq!(content, "5");
                assert_eq!(kind, ParseErrorKind::MissingColumn { found: 1 });
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn first_bad_line_wins() {
        let err = parse_lines(["1 1", "x 2", "3"]).unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn parse_error_message_names_the_line() {
        let err = parse_lines(["1 1", "2 two"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("line 2:"), "{msg}");
        assert!(msg.contains("\"two\""), "{msg}");
    }

    #[rstest]
    #[case("", 0)]
    #[case("   ", 0)]
    #[case("42", 1)]
    fn too_few_columns(#[case] line: &str, #[case] found: usize) {
        assert_eq!(
            parse_line(line),
            Err(ParseErrorKind::MissingColumn { found })
        );
    }

    #[rstest]
    #[case("a 1", 1, "a")]
    #[case("1 b", 2, "b")]
    #[case("1.5 2", 1, "1.5")]
    #[case("1 2e3", 2, "2e3")]
    #[case("99999999999999999999 1", 1, "99999999999999999999")]
    fn non_integer_tokens(#[case] line: &str, #[case] column: usize, #[case] token: &str) {
        match parse_line(line) {
            Err(ParseErrorKind::InvalidInteger {
                column: c,
                token: t,
                ..
            }) => {
                assert_eq!(c, column);
                assert_eq!(t, token);
            }
            other => panic!("expected InvalidInteger, got {other:?}"),
        }
    }

    #[rstest]
    #[case("0 5", Record::new(0, 5))]
    #[case("-3 +4", Record::new(-3, 4))]
    #[case("10 20 30", Record::new(10, 20))]
    fn valid_lines(#[case] line: &str, #[case] expected: Record) {
        assert_eq!(parse_line(line), Ok(expected));
    }
}
