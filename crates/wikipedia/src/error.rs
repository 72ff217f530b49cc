use wikipedia_core::summary::SummaryError;

/// Failure kinds of a summary fetch
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Connection failure, timeout, or a 4xx/5xx answer
    #[error("Request failed: {0}")]
    Transport(String),

    /// The body could not be read as an article summary
    #[error("Invalid article summary")]
    Validation(#[from] SummaryError),
}

impl Error {
    pub fn transport(err: &reqwest::Error) -> Self {
        Self::Transport(describe(err))
    }
}

/// Flatten an error and its sources into one line
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
