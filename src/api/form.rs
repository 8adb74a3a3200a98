//! 表单提取器
//! Accepts both `multipart/form-data` and urlencoded bodies, like the web clients send.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header,
    Form,
};
use std::collections::HashMap;

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct FormFields {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl FormFields {
    pub fn text(&self, name: &str) -> Result<&str, ApiError> {
        self.fields
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ApiError::invalid_input(format!("Missing form field '{}'", name)))
    }

    pub fn float(&self, name: &str) -> Result<f64, ApiError> {
        let raw = self.text(name)?;
        let value: f64 = raw.trim().parse().map_err(|_| {
            ApiError::invalid_input(format!("Form field '{}' must be a number, got '{}'", name, raw))
        })?;
        if !value.is_finite() {
            return Err(ApiError::invalid_input(format!(
                "Form field '{}' must be a finite number",
                name
            )));
        }
        Ok(value)
    }

    pub fn file(&self, name: &str) -> Result<&UploadedFile, ApiError> {
        let file = self
            .files
            .get(name)
            .ok_or_else(|| ApiError::invalid_input(format!("Missing file field '{}'", name)))?;
        if file.bytes.is_empty() {
            return Err(ApiError::invalid_input(format!(
                "Uploaded file '{}' is empty",
                file.file_name
            )));
        }
        Ok(file)
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = FormFields::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::rejected(e.status(), e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            let file_name = field.file_name().map(str::to_owned);
            let content_type = field.content_type().map(str::to_owned);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::rejected(e.status(), e.body_text()))?;

            match file_name {
                Some(file_name) => {
                    form.files.insert(
                        name,
                        UploadedFile {
                            file_name,
                            content_type,
                            bytes: bytes.to_vec(),
                        },
                    );
                }
                None => {
                    form.fields
                        .insert(name, String::from_utf8_lossy(&bytes).into_owned());
                }
            }
        }
        Ok(form)
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("multipart/form-data"))
            .unwrap_or(false);

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::rejected(e.status(), e.body_text()))?;
            return Self::from_multipart(multipart).await;
        }

        let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(|e| ApiError::rejected(e.status(), e.body_text()))?;
        Ok(Self {
            fields,
            files: HashMap::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn urlencoded(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_urlencoded_fields() {
        let form = FormFields::from_request(urlencoded("query=how+deep&temperature=25"), &())
            .await
            .unwrap();
        assert_eq!(form.text("query").unwrap(), "how deep");
        assert_eq!(form.float("temperature").unwrap(), 25.0);
    }

    #[tokio::test]
    async fn test_non_numeric_float_is_rejected() {
        let form = FormFields::from_request(urlencoded("humidity=wet"), &())
            .await
            .unwrap();
        assert!(matches!(form.float("humidity"), Err(ApiError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_nan_is_rejected() {
        let form = FormFields::from_request(urlencoded("pressure=NaN"), &())
            .await
            .unwrap();
        assert!(form.float("pressure").is_err());
    }

    #[tokio::test]
    async fn test_wrong_content_type_keeps_rejection_status() {
        let req = axum::http::Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("query=hello"))
            .unwrap();

        let err = FormFields::from_request(req, &()).await.unwrap_err();
        match err {
            ApiError::Rejected { status, .. } => {
                assert_eq!(status, axum::http::StatusCode::UNSUPPORTED_MEDIA_TYPE)
            }
            other => panic!("expected a rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_multipart_text_and_file() {
        let body = "--XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"query\"\r\n\r\n\
            hello\r\n\
            --XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"file\"; filename=\"leaf.png\"\r\n\
            Content-Type: image/png\r\n\r\n\
            PNGDATA\r\n\
            --XBOUNDARY--\r\n";
        let req = axum::http::Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XBOUNDARY")
            .body(Body::from(body))
            .unwrap();

        let form = FormFields::from_request(req, &()).await.unwrap();
        assert_eq!(form.text("query").unwrap(), "hello");
        let file = form.file("file").unwrap();
        assert_eq!(file.file_name, "leaf.png");
        assert_eq!(file.content_type.as_deref(), Some("image/png"));
        assert_eq!(file.bytes, b"PNGDATA");
        assert!(form.file("other").is_err());
    }
}
