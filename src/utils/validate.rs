use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Query string extractor that runs `validator` rules after deserializing
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Request;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestQuery {
        #[validate(range(min = 1, message = "Page must be at least 1"))]
        page: i64,
        #[validate(length(min = 1, max = 8, message = "Label must be 1 to 8 characters"))]
        label: Option<String>,
    }

    async fn extract(uri: &str) -> AppResult<ValidatedQuery<TestQuery>> {
        let request = Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        ValidatedQuery::<TestQuery>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_valid_query() {
        let ValidatedQuery(query) = extract("/test?page=3&label=grants").await.unwrap();
        assert_eq!(query.page, 3);
        assert_eq!(query.label.as_deref(), Some("grants"));
    }

    #[tokio::test]
    async fn test_validation_error() {
        match extract("/test?page=0").await {
            Err(AppError::ValidationErrors { errors }) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "page");
                assert_eq!(errors[0].message, "Page must be at least 1");
            }
            other => panic!("Expected ValidationErrors, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_multiple_validation_errors_sorted() {
        match extract("/test?page=-2&label=far-too-long").await {
            Err(AppError::ValidationErrors { errors }) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["label", "page"]);
            }
            other => panic!("Expected ValidationErrors, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        match extract("/test?label=x").await {
            Err(AppError::BadRequest { message }) => assert!(message.contains("page")),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_numeric_is_bad_request() {
        assert!(matches!(
            extract("/test?page=abc").await,
            Err(AppError::BadRequest { .. })
        ));
    }
}
