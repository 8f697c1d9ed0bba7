use std::fmt::Display;

const QUIT: &str = "q";

#[derive(Debug, PartialEq)]
pub enum Cmd {
    Quit,
    Check(i64),
}

#[derive(Debug, PartialEq)]
pub enum ParseError {
    NotAWholeNumber,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::NotAWholeNumber => write!(f, "Please enter a whole number!"),
        }
    }
}

pub fn parse(line: &str) -> Result<Cmd, ParseError> {
    let line = line.trim();

    if line.eq_ignore_ascii_case(QUIT) {
        return Ok(Cmd::Quit);
    }

    line.parse::<i64>()
        .map(Cmd::Check)
        .map_err(|_| ParseError::NotAWholeNumber)
}
