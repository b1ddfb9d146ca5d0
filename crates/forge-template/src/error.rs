//! Error types for forge-template

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed template at line {line}: {problem}")]
    MalformedTemplate { line: usize, problem: MarkerProblem },

    #[error("Template not found: {name}")]
    UnknownTemplate { name: String },

    #[error("Template already registered: {name}")]
    DuplicateTemplate { name: String },
}

/// What is wrong with a template's conditional markers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerProblem {
    #[error("section '{key}' is never closed")]
    Unclosed { key: String },

    #[error("'ENDIF {key}' has no matching IF")]
    UnexpectedClose { key: String },

    #[error("'ENDIF {found}' closes section '{expected}' opened at line {opened_at}")]
    Mismatched {
        expected: String,
        opened_at: usize,
        found: String,
    },
}

impl Error {
    pub(crate) fn malformed(line: usize, problem: MarkerProblem) -> Self {
        Self::MalformedTemplate { line, problem }
    }
}
