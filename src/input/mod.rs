use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("unknown choice: {0}")]
    UnknownChoice(i64),
}

/// One menu entry, parsed from the choice the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Visit,
    GoBack,
    GoForward,
    OpenNewTab,
    SwitchTab,
    ShowStatus,
    Exit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let trimmed = line.trim();
        let choice: i64 = trimmed
            .parse()
            .map_err(|_| ParseError::NotANumber(trimmed.to_string()))?;

        match choice {
            1 => Ok(Self::Visit),
            2 => Ok(Self::GoBack),
            3 => Ok(Self::GoForward),
            4 => Ok(Self::OpenNewTab),
            5 => Ok(Self::SwitchTab),
            6 => Ok(Self::ShowStatus),
            0 => Ok(Self::Exit),
            other => Err(ParseError::UnknownChoice(other)),
        }
    }
}
