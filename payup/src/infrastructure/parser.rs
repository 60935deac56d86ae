use payup_application::{ExpenseSheet, RawExpense, SheetError, SheetReader};
use payup_parser::{ParseError, parse_sheet};

#[derive(Default)]
pub struct PayupSheetReader;

impl SheetReader for PayupSheetReader {
    fn read<'a>(&self, content: &'a str) -> Result<ExpenseSheet<'a>, SheetError> {
        match parse_sheet(content) {
            Ok(sheet) => Ok(ExpenseSheet {
                people: sheet.people.map(|header| header.count),
                rows: sheet
                    .rows
                    .into_iter()
                    .map(|row| RawExpense {
                        name: row.name,
                        amount: row.amount,
                    })
                    .collect(),
            }),
            Err(err) => Err(match err {
                ParseError::SyntaxError { line, detail } => SheetError::SyntaxError { line, detail },
                ParseError::DuplicateHeader { line } => SheetError::DuplicateHeader { line },
                ParseError::HeaderAfterRows { line } => SheetError::HeaderAfterRows { line },
                ParseError::InvalidPeopleCount { line } => SheetError::InvalidPeopleCount { line },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_rows_and_header() {
        let sheet = PayupSheetReader
            .read("PEOPLE := 3\nA 300\n- 0\n")
            .expect("sheet");

        assert_eq!(sheet.people, Some(3));
        assert_eq!(
            sheet.rows,
            vec![
                RawExpense {
                    name: "A",
                    amount: "300",
                },
                RawExpense {
                    name: "",
                    amount: "0",
                },
            ]
        );
    }

    #[test]
    fn maps_parse_errors() {
        assert_eq!(
            PayupSheetReader.read("A 1\nPEOPLE := 2\n"),
            Err(SheetError::HeaderAfterRows { line: 2 })
        );
    }
}
