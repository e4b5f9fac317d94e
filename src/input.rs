//! Parsing of the interactive temperature prompt.

use std::io::{BufRead, Write};

use crate::Error;

/// Parses a plate temperature, which also sets the plate size.
///
/// Text that is not an integer is `InvalidInput`; an integer that is not
/// positive is `InvalidDimension`.
pub fn parse_temperature(input: &str) -> Result<usize, Error> {
    let temperature = input.trim().parse::<i64>().map_err(|_| Error::InvalidInput {
        input: input.trim_end_matches(['\r', '\n']).to_string(),
    })?;
    if temperature <= 0 {
        return Err(Error::InvalidDimension(temperature));
    }
    usize::try_from(temperature).map_err(|_| Error::InvalidDimension(temperature))
}

/// Asks for a temperature on `writer` and reads the answer from `reader`.
pub fn prompt_temperature<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<usize, Error> {
    write!(writer, "Enter temperature: ")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    parse_temperature(&line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_surrounding_whitespace() {
        assert_eq!(parse_temperature(" 42\n").unwrap(), 42);
        assert_eq!(parse_temperature("+7").unwrap(), 7);
    }

    #[test]
    fn non_positive_numbers_are_bad_dimensions() {
        for (input, expected) in [("0", 0), ("-5", -5), (" -120\n", -120)] {
            match parse_temperature(input) {
                Err(Error::InvalidDimension(value)) => assert_eq!(value, expected),
                other => panic!("{:?} parsed as {:?}", input, other),
            }
        }
    }

    #[test]
    fn rejects_non_numeric_input() {
        for input in ["", "abc", "2.5", "1e3", "--5"] {
            match parse_temperature(input) {
                Err(Error::InvalidInput { input: raw }) => assert_eq!(raw, input),
                other => panic!("{:?} parsed as {:?}", input, other),
            }
        }
    }

    #[test]
    fn prompt_reads_one_line() {
        let mut output = Vec::new();
        let temperature = prompt_temperature("12\n13\n".as_bytes(), &mut output).unwrap();

        assert_eq!(temperature, 12);
        assert_eq!(output, b"Enter temperature: ");
    }
}
