use super::{Error, ErrorKind};

/// A connection URL that cannot be turned into connection options.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    origin: Origin,
    reason: Box<str>,
}

#[derive(Debug)]
enum Origin {
    /// The URL itself, with any password masked.
    Url(Box<str>),

    /// The environment variable that should have held the URL.
    EnvVar(Box<str>),
}

impl Error {
    /// `url` was rejected for `reason`. A password in `url` is masked before
    /// it is stored, so the error is safe to log.
    pub fn invalid_connection_url(url: &str, reason: impl core::fmt::Display) -> Error {
        invalid(Origin::Url(redact(url).into()), reason)
    }

    /// The environment variable `var` could not supply a connection URL.
    pub fn connection_url_unavailable(var: &str, reason: impl core::fmt::Display) -> Error {
        invalid(Origin::EnvVar(var.into()), reason)
    }

    pub fn is_invalid_connection_url(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::InvalidConnectionUrl(_)))
    }
}

impl std::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.origin {
            Origin::Url(url) => write!(f, "invalid connection URL `{url}`: {}", self.reason),
            Origin::EnvVar(var) => {
                write!(f, "no connection URL in `{var}`: {}", self.reason)
            }
        }
    }
}

fn invalid(origin: Origin, reason: impl core::fmt::Display) -> Error {
    Error::from(ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl {
        origin,
        reason: reason.to_string().into(),
    }))
}

fn redact(input: &str) -> String {
    match url::Url::parse(input) {
        Ok(mut url) if url.password().is_some() => {
            // Only fails for URLs that cannot carry credentials at all
            let _ = url.set_password(Some("***"));
            url.to_string()
        }
        _ => input.to_string(),
    }
}
