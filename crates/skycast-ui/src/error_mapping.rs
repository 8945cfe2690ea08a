//! Maps UI service errors to skycast_core::AppError for consistent user-facing messages.

use skycast_core::{AppError, WeatherError};

use crate::services::WeatherServiceError;

impl From<WeatherServiceError> for AppError {
    fn from(e: WeatherServiceError) -> Self {
        match e {
            WeatherServiceError::Fetch(s) => AppError::Weather(WeatherError::FetchFailed(s)),
            WeatherServiceError::Location(s) => {
                AppError::Weather(WeatherError::LocationUnavailable(s))
            }
            WeatherServiceError::LocationUnsupported => {
                AppError::Weather(WeatherError::LocationUnsupported)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::error::{
        FETCH_FAILED_MESSAGE, LOCATION_FAILED_MESSAGE, LOCATION_UNSUPPORTED_MESSAGE,
    };

    #[test]
    fn every_fetch_cause_gets_the_same_message() {
        for cause in ["HTTP 500", "connection refused", "missing field `main`"] {
            let err: AppError = WeatherServiceError::Fetch(cause.into()).into();
            assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        }
    }

    #[test]
    fn location_messages() {
        let err: AppError = WeatherServiceError::Location("timed out".into()).into();
        assert_eq!(err.user_message(), LOCATION_FAILED_MESSAGE);

        let err: AppError = WeatherServiceError::LocationUnsupported.into();
        assert_eq!(err.user_message(), LOCATION_UNSUPPORTED_MESSAGE);
    }
}
