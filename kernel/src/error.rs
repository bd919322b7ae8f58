use std::fmt::Display;

use error_stack::{Context, Report};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    Validation,
    NotFound,
    Unauthorized,
    Conflict,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Invalid input"),
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::Unauthorized => write!(f, "Invalid API Key"),
            KernelError::Conflict => write!(f, "Resource is still referenced"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

impl KernelError {
    pub fn with_detail(self, detail: impl Into<String>) -> Report<KernelError> {
        Report::new(self).attach_detail(detail)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ErrorDetail(String);

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

impl Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ErrorDetail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub trait ErrorDetailAttachment {
    fn attach_detail(self, detail: impl Into<String>) -> Self;
    fn detail(&self) -> Option<&ErrorDetail>;
}

impl ErrorDetailAttachment for Report<KernelError> {
    fn attach_detail(self, detail: impl Into<String>) -> Self {
        self.attach_printable(ErrorDetail::new(detail))
    }

    fn detail(&self) -> Option<&ErrorDetail> {
        self.frames()
            .find_map(|frame| frame.downcast_ref::<ErrorDetail>())
    }
}
