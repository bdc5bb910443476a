use std::process::ExitCode;

/// Exit status for a propcheck run.
///
/// - `Success` (0): every enabled check passed
/// - `Failure` (255): at least one check reported missing, unnecessary or unused keys
/// - `Error` (2): the run could not complete (unreadable file, invalid file name, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every enabled check passed.
    Success,
    /// Checks completed but found issues.
    Failure,
    /// Run aborted by an error.
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 255,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
