#![warn(clippy::uninlined_format_args)]

//! Parser for plain-text expense sheets.
//!
//! ```text
//! PEOPLE := 4
//! Alice 30,000원
//! "Bob Kim": 12000
//! -  8000        // blank name, gets a placeholder later
//! Carol          // paid nothing
//! ```

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till, take_until, take_while, take_while1},
    character::complete::{char, multispace1, satisfy, space0},
    combinator::{opt, recognize, rest, value},
    multi::many0,
    sequence::delimited,
};

/// The participant count declared by a `PEOPLE := n` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeopleHeader {
    pub line: usize,
    pub count: u32,
}

/// One contribution row. `name` is empty for a `-` row and `amount` is the raw,
/// uncoerced text after the name (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow<'a> {
    pub line: usize,
    pub name: &'a str,
    pub amount: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sheet<'a> {
    pub people: Option<PeopleHeader>,
    pub rows: Vec<SheetRow<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
    #[error("Participant count declared twice at line {line}.")]
    DuplicateHeader { line: usize },
    #[error("Participant count must come before the first row (line {line}).")]
    HeaderAfterRows { line: usize },
    #[error("Invalid participant count at line {line}.")]
    InvalidPeopleCount { line: usize },
}

fn sp(input: &str) -> IResult<&str, &str> {
    fn fullwidth_space(input: &str) -> IResult<&str, &str> {
        take_while1(|c: char| c == '\u{3000}')(input)
    }

    fn comment(input: &str) -> IResult<&str, &str> {
        delimited(tag("/*"), take_until("*/"), tag("*/")).parse(input)
    }

    fn line_comment(input: &str) -> IResult<&str, &str> {
        recognize((tag("//"), rest)).parse(input)
    }

    recognize(many0(alt((
        multispace1,
        fullwidth_space,
        comment,
        line_comment,
    ))))
    .parse(input)
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

fn bare_name(input: &str) -> IResult<&str, &str> {
    recognize((satisfy(is_name_start), take_while(is_name_char))).parse(input)
}

fn quoted_name(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c| c == '"'), char('"')).parse(input)
}

fn blank_name(input: &str) -> IResult<&str, &str> {
    value("", char('-')).parse(input)
}

fn name(input: &str) -> IResult<&str, &str> {
    alt((quoted_name, blank_name, bare_name)).parse(input)
}

// Everything up to a comment; coercion happens downstream.
fn amount_text(input: &str) -> IResult<&str, &str> {
    take_till(|c| c == '/')(input).map(|(rest, text)| (rest, text.trim_end()))
}

// PEOPLE := 4
fn header(input: &str) -> IResult<&str, &str> {
    (
        alt((tag_no_case("people"), tag("인원"))),
        sp,
        tag(":="),
        sp,
        amount_text,
    )
        .map(|(_, _, _, _, count)| count)
        .parse(input)
}

// name [:] amount
fn row(input: &str) -> IResult<&str, (&str, &str)> {
    (name, space0, opt(char(':')), sp, amount_text)
        .map(|(name, _, _, _, amount)| (name, amount))
        .parse(input)
}

fn syntax_error(line: usize, error: impl std::fmt::Display) -> ParseError {
    ParseError::SyntaxError {
        line,
        detail: error.to_string(),
    }
}

fn ensure_consumed(input: &str, line: usize) -> Result<(), ParseError> {
    let (rest, _) = sp(input).map_err(|e| syntax_error(line, e))?;
    if rest.trim().is_empty() {
        Ok(())
    } else {
        Err(syntax_error(
            line,
            format!("unparsed input: {}", rest.trim()),
        ))
    }
}

/// Parse a whole sheet, one header or row per line.
pub fn parse_sheet(input: &str) -> Result<Sheet<'_>, ParseError> {
    let mut sheet = Sheet::default();

    for (idx, raw_line) in input.lines().enumerate() {
        let line = idx + 1;
        let (content, _) = sp(raw_line).map_err(|e| syntax_error(line, e))?;
        if content.trim().is_empty() {
            continue;
        }

        if let Ok((rest, count)) = header(content) {
            ensure_consumed(rest, line)?;
            if sheet.people.is_some() {
                return Err(ParseError::DuplicateHeader { line });
            }
            if !sheet.rows.is_empty() {
                return Err(ParseError::HeaderAfterRows { line });
            }
            let count = count
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidPeopleCount { line })?;
            sheet.people = Some(PeopleHeader { line, count });
            continue;
        }

        match row(content) {
            Ok((rest, (name, amount))) => {
                ensure_consumed(rest, line)?;
                sheet.rows.push(SheetRow { line, name, amount });
            }
            Err(e) => return Err(syntax_error(line, e)),
        }
    }

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row_at<'a>(line: usize, name: &'a str, amount: &'a str) -> SheetRow<'a> {
        SheetRow { line, name, amount }
    }

    #[test]
    fn parses_header_and_rows() {
        let input = "PEOPLE := 4\nAlice 30,000원\n\"Bob Kim\": 12000\n- 8000\nCarol\n";

        let sheet = parse_sheet(input).expect("sheet should parse");

        assert_eq!(sheet.people, Some(PeopleHeader { line: 1, count: 4 }));
        assert_eq!(
            sheet.rows,
            vec![
                row_at(2, "Alice", "30,000원"),
                row_at(3, "Bob Kim", "12000"),
                row_at(4, "", "8000"),
                row_at(5, "Carol", ""),
            ]
        );
    }

    #[rstest]
    #[case::korean_header("인원 := 3\n철수 300\n", 3, "철수")]
    #[case::lowercase_header("people:=2\nA 1", 2, "A")]
    #[case::fullwidth_space("PEOPLE := 2\n\u{3000}민지\u{3000}500", 2, "민지")]
    fn accepts_header_variants(
        #[case] input: &str,
        #[case] expected_count: u32,
        #[case] expected_name: &str,
    ) {
        let sheet = parse_sheet(input).expect("sheet should parse");

        assert_eq!(sheet.people.map(|header| header.count), Some(expected_count));
        assert_eq!(sheet.rows[0].name, expected_name);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let input = "// dinner\n\nA 100 // paid the bill\n/* no-show */ B\n";

        let sheet = parse_sheet(input).expect("sheet should parse");

        assert_eq!(sheet.people, None);
        assert_eq!(sheet.rows, vec![row_at(3, "A", "100"), row_at(4, "B", "")]);
    }

    #[test]
    fn keeps_non_numeric_amount_text_for_coercion() {
        let sheet = parse_sheet("A lots\n").expect("sheet should parse");

        assert_eq!(sheet.rows, vec![row_at(1, "A", "lots")]);
    }

    #[test]
    fn header_named_like_a_member_without_assignment_is_a_row() {
        let sheet = parse_sheet("people 300\n").expect("sheet should parse");

        assert_eq!(sheet.people, None);
        assert_eq!(sheet.rows, vec![row_at(1, "people", "300")]);
    }

    #[rstest]
    #[case::duplicate_header("PEOPLE := 2\nPEOPLE := 3\n", ParseError::DuplicateHeader { line: 2 })]
    #[case::header_after_rows("A 100\nPEOPLE := 3\n", ParseError::HeaderAfterRows { line: 2 })]
    #[case::non_numeric_count("PEOPLE := many\n", ParseError::InvalidPeopleCount { line: 1 })]
    #[case::count_overflow("PEOPLE := 99999999999\n", ParseError::InvalidPeopleCount { line: 1 })]
    fn rejects_bad_headers(#[case] input: &str, #[case] expected: ParseError) {
        assert_eq!(parse_sheet(input), Err(expected));
    }

    #[rstest]
    #[case::leading_digit("1000\n", 1)]
    #[case::unterminated_quote("\"Alice 100\n", 1)]
    #[case::stray_slash("A 1/2\n", 1)]
    #[case::unterminated_comment("A 100\nB /* 200\n", 2)]
    fn reports_syntax_errors_with_line(#[case] input: &str, #[case] expected_line: usize) {
        match parse_sheet(input) {
            Err(ParseError::SyntaxError { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }
}
