use reqwest::StatusCode;
use thiserror::Error;

/// Failure while fetching from the Rancher API. Any of these aborts the
/// run with exit code 255, before anything is printed.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Error accessing {url}. HTTP status code {}.", .status.as_u16())]
    Status { url: String, status: StatusCode },

    #[error("Error accessing {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error decoding response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_names_url_and_code() {
        let error = ApiError::Status {
            url: "https://rancher.example.com/v3/clusters".to_string(),
            status: StatusCode::UNAUTHORIZED,
        };
        assert_eq!(
            error.to_string(),
            "Error accessing https://rancher.example.com/v3/clusters. HTTP status code 401."
        );
    }
}
