use clap::ValueEnum;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;

/// A parsed input document: zero or more groups of integers, in input order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GroupDoc {
    pub groups: Vec<Vec<i64>>,
}

/// Options for [`GroupDoc::parse`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub format: InputFormat,
}

/// Input formats, analogous to `--input` in the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, ValueEnum)]
pub enum InputFormat {
    /// Each non-blank line is one group: integers separated by whitespace. Blank lines are skipped,
    /// so concatenating multiple files never introduces spurious groups. Empty groups are not
    /// representable in this format; use JSON input if you need them.
    #[default]
    Text,

    /// A JSON array of arrays of integers, like `[[], [5], [1, 2, 3, 4]]`. The input may contain
    /// several such documents back to back, in which case their groups are concatenated in order;
    /// this is what makes multi-file JSON input work.
    Json,
}

impl Display for InputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let self_str = match self {
            InputFormat::Text => "text",
            InputFormat::Json => "json",
        };
        f.write_str(self_str)
    }
}

impl GroupDoc {
    /// Parses `text` into groups of integers, per `options.format`.
    pub fn parse(text: &str, options: &ParseOptions) -> Result<Self, InvalidGroups> {
        let groups = match options.format {
            InputFormat::Text => parse_text(text)?,
            InputFormat::Json => parse_json(text)?,
        };
        Ok(Self { groups })
    }
}

fn parse_text(text: &str) -> Result<Vec<Vec<i64>>, InvalidGroups> {
    let mut groups = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut group = Vec::new();
        for token in line.split_whitespace() {
            let value = token.parse().map_err(|error| InvalidGroups::BadInteger {
                line: idx + 1,
                token: token.to_string(),
                error,
            })?;
            group.push(value);
        }
        groups.push(group);
    }
    Ok(groups)
}

fn parse_json(text: &str) -> Result<Vec<Vec<i64>>, InvalidGroups> {
    let mut groups = Vec::new();
    for document in serde_json::Deserializer::from_str(text).into_iter::<Vec<Vec<i64>>>() {
        let mut parsed = document.map_err(|err| InvalidGroups::Json(err.to_string()))?;
        groups.append(&mut parsed);
    }
    Ok(groups)
}

/// The reasons an input document can fail to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidGroups {
    /// A token in text input that isn't a valid 64-bit integer. `line` is 1-based.
    BadInteger {
        line: usize,
        token: String,
        error: ParseIntError,
    },

    /// JSON input that isn't a well-formed stream of arrays of arrays of integers.
    ///
    /// This wraps the message from the underlying JSON parser; the position information it carries
    /// refers to the document being parsed when the error occurred, not to the whole input.
    Json(String),
}

impl std::error::Error for InvalidGroups {}

impl Display for InvalidGroups {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidGroups::BadInteger { line, token, error } => {
                write!(f, "line {line}: invalid integer {token:?}: {error}")
            }
            InvalidGroups::Json(message) => write!(f, "invalid JSON input: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::utils_for_test::*;
    use indoc::indoc;

    fn parse(text: &str, format: InputFormat) -> Result<GroupDoc, InvalidGroups> {
        GroupDoc::parse(text, &ParseOptions { format })
    }

    #[test]
    fn text_empty_input() {
        unwrap!(parse("", InputFormat::Text), Ok(doc));
        assert_eq!(doc.groups, Vec::<Vec<i64>>::new());
    }

    #[test]
    fn text_one_group_per_line() {
        let text = indoc! {r"
            1 2 3 4
            10 -3 -3 -3
        "};
        unwrap!(parse(text, InputFormat::Text), Ok(doc));
        assert_eq!(doc.groups, vec![vec![1, 2, 3, 4], vec![10, -3, -3, -3]]);
    }

    #[test]
    fn text_single_value_line() {
        unwrap!(parse("5", InputFormat::Text), Ok(doc));
        assert_eq!(get_only(doc.groups), vec![5]);
    }

    #[test]
    fn text_blank_lines_are_skipped() {
        let text = indoc! {r"
            1 2

            3 4

        "};
        unwrap!(parse(text, InputFormat::Text), Ok(doc));
        assert_eq!(doc.groups, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn text_extra_whitespace() {
        unwrap!(parse("  7\t 8  ", InputFormat::Text), Ok(doc));
        assert_eq!(get_only(doc.groups), vec![7, 8]);
    }

    #[test]
    fn text_bad_token_reports_line_and_token() {
        let text = indoc! {r"
            1 2
            3 x 4
        "};
        unwrap!(parse(text, InputFormat::Text), Err(err));
        unwrap!(&err, InvalidGroups::BadInteger { line, token, .. });
        assert_eq!(*line, 2);
        assert_eq!(token, "x");
        assert_eq!(
            err.to_string(),
            "line 2: invalid integer \"x\": invalid digit found in string"
        );
    }

    #[test]
    fn text_blank_lines_do_not_shift_error_lines() {
        unwrap!(parse("\n\nbad", InputFormat::Text), Err(err));
        unwrap!(err, InvalidGroups::BadInteger { line, .. });
        assert_eq!(line, 3);
    }

    #[test]
    fn json_groups_including_empty() {
        unwrap!(parse("[[], [5], [1,2,3,4]]", InputFormat::Json), Ok(doc));
        assert_eq!(doc.groups, vec![vec![], vec![5], vec![1, 2, 3, 4]]);
    }

    #[test]
    fn json_empty_input() {
        unwrap!(parse("", InputFormat::Json), Ok(doc));
        assert_eq!(doc.groups, Vec::<Vec<i64>>::new());
    }

    #[test]
    fn json_multiple_documents_concatenate() {
        let text = indoc! {r"
            [[1, 2]]
            [[3, 4], [5]]
        "};
        unwrap!(parse(text, InputFormat::Json), Ok(doc));
        assert_eq!(doc.groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn json_not_an_array() {
        unwrap!(parse(r#"{"groups": []}"#, InputFormat::Json), Err(err));
        unwrap!(err, InvalidGroups::Json(_));
    }

    #[test]
    fn json_non_integer_element() {
        unwrap!(parse("[[1.5]]", InputFormat::Json), Err(err));
        unwrap!(err, InvalidGroups::Json(_));
    }
}
