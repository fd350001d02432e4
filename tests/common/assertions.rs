//! Custom assertion macros
//!
//! Every failed request answers with `{"message": "..."}`; these macros check
//! status and message in one go.

/// Assert a response's status code and error message
#[macro_export]
macro_rules! assert_failure {
    ($response:expr, $status:expr, $message:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status_code(),
            $status,
            "unexpected status, body: {}",
            response.text()
        );
        let body: palabrator::shared::FailedRequestResponse = response.json();
        assert_eq!(body.message, $message);
    }};
}

/// Assert a response's status code only, printing the body on mismatch
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status_code(),
            $status,
            "unexpected status, body: {}",
            response.text()
        );
    }};
}
