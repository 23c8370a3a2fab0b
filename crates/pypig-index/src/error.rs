use std::process::ExitStatus;

/// Errors from listing, parsing and acting on an index.
///
/// Messages never include the composed index URL, which carries credentials.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("cannot parse package filename '{filename}': {reason}")]
    Parse {
        filename: String,
        reason: &'static str,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("index returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{program} exited with {status}")]
    Subprocess { program: String, status: ExitStatus },
}

impl From<ureq::Error> for IndexError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                IndexError::Status {
                    status,
                    body: body.trim().to_string(),
                }
            }
            // Transport's Display prefixes the request URL, so build the message by hand.
            ureq::Error::Transport(transport) => {
                let message = match transport.message() {
                    Some(msg) => format!("{}: {}", transport.kind(), msg),
                    None => transport.kind().to_string(),
                };
                IndexError::Network(message)
            }
        }
    }
}
