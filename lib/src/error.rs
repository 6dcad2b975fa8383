use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub struct BootstrapError {
    pub cause: String,
    pub message: Option<String>,
}

impl BootstrapError {
    pub fn new(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    /// Builds an error from a failed AWS call, keeping the service error code and message as cause.
    pub fn from_sdk<E>(
        error: &E,
        message: &str,
    ) -> Self
    where
        E: ProvideErrorMetadata + Error,
    {
        let cause = match (error.code(), error.message()) {
            (Some(code), Some(detail)) => format!("{code}: {detail}"),
            (Some(code), None) => code.to_string(),
            (None, Some(detail)) => detail.to_string(),
            (None, None) => DisplayErrorContext(error).to_string(),
        };

        Self::new(&cause, message)
    }
}

impl Error for BootstrapError {}

impl fmt::Display for BootstrapError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}
