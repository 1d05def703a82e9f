//! Multipart form submission
//!
//! Sends the form's current fields, files included, to its declared action
//! with its declared method, and reports the outcome as a banner.

use reqwest::multipart::{Form, Part};

use hrms_notify::NotificationCenter;

use crate::error::FormError;
use crate::form::{FieldValue, FormModel};
use crate::validation::Violation;
use crate::Result;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Thao tác thành công!";
const SUBMIT_FAILURE_PREFIX: &str = "Có lỗi xảy ra: ";
const EMPTY_FILE_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validity gate refused; nothing was sent
    Invalid(Vec<Violation>),
    Submitted(SubmitResponse),
    /// Sent but failed; the danger banner is already showing
    Failed(FormError),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

#[derive(Clone)]
pub struct FormSubmitter {
    client: reqwest::Client,
    notifier: NotificationCenter,
}

impl FormSubmitter {
    pub fn new(notifier: NotificationCenter) -> Self {
        Self::with_client(reqwest::Client::new(), notifier)
    }

    pub fn with_client(client: reqwest::Client, notifier: NotificationCenter) -> Self {
        Self { client, notifier }
    }

    /// Send the form and return the server's answer. Non-success statuses
    /// come back as `FormError::Server` carrying the response body.
    pub async fn submit(&self, form: &FormModel) -> Result<SubmitResponse> {
        let body = multipart_body(form)?;

        tracing::debug!(
            form_id = %form.id,
            method = %form.method,
            action = %form.action,
            "Submitting form"
        );

        let response = self
            .client
            .request(form.method.into(), form.action.clone())
            .multipart(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FormError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(SubmitResponse {
            status: status.as_u16(),
            body,
        })
    }

    /// Submit and surface the result. On success `on_success` runs if given,
    /// otherwise a generic success banner shows; failures show a danger
    /// banner with the server's text.
    pub async fn submit_and_notify<F>(&self, form: &FormModel, on_success: Option<F>) -> SubmitOutcome
    where
        F: FnOnce(&SubmitResponse),
    {
        match self.submit(form).await {
            Ok(response) => {
                match on_success {
                    Some(callback) => callback(&response),
                    None => {
                        self.notifier.success(SUBMIT_SUCCESS_MESSAGE);
                    }
                }
                tracing::info!(form_id = %form.id, status = response.status, "Form submitted");
                SubmitOutcome::Submitted(response)
            }
            Err(e) => {
                tracing::warn!(form_id = %form.id, error = %e, "Form submission failed");
                self.notifier
                    .danger(format!("{SUBMIT_FAILURE_PREFIX}{}", e.user_text()));
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Run the validity gate first; an invalid form is marked and never sent
    pub async fn submit_validated<F>(&self, form: &mut FormModel, on_success: Option<F>) -> SubmitOutcome
    where
        F: FnOnce(&SubmitResponse),
    {
        if !form.validate() {
            return SubmitOutcome::Invalid(form.check_validity());
        }
        self.submit_and_notify(form, on_success).await
    }
}

fn multipart_body(form: &FormModel) -> Result<Form> {
    let mut body = Form::new();

    for field in &form.fields {
        body = match &field.value {
            FieldValue::Text(text) => body.text(field.name.clone(), text.clone()),
            FieldValue::File(Some(upload)) => {
                let part = Part::bytes(upload.bytes.clone())
                    .file_name(upload.file_name.clone())
                    .mime_str(&upload.mime_type)?;
                body.part(field.name.clone(), part)
            }
            // An empty file input is still sent, as the browser does
            FieldValue::File(None) => {
                let part = Part::bytes(Vec::new())
                    .file_name(String::new())
                    .mime_str(EMPTY_FILE_MIME)?;
                body.part(field.name.clone(), part)
            }
        };
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FileUpload, FormField, FormMethod};
    use axum::body::Bytes;
    use axum::http::{header, HeaderMap, Method, StatusCode};
    use axum::routing::any;
    use axum::Router;
    use hrms_notify::Severity;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use url::Url;

    struct Received {
        method: Method,
        content_type: String,
        body: String,
    }

    /// Serve `/employee/add` on a free local port, answering with `status`
    /// and `reply`. Every request that arrives is recorded.
    async fn serve(status: StatusCode, reply: &'static str) -> (Url, Arc<Mutex<Vec<Received>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);

        let app = Router::new().route(
            "/employee/add",
            any(move |method: Method, headers: HeaderMap, body: Bytes| {
                let sink = Arc::clone(&sink);
                async move {
                    let content_type = headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    sink.lock().push(Received {
                        method,
                        content_type,
                        body: String::from_utf8_lossy(&body).into_owned(),
                    });
                    (status, reply)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let url = Url::parse(&format!("http://{addr}/employee/add")).unwrap();
        (url, received)
    }

    fn employee_form(action: Url, method: FormMethod) -> FormModel {
        FormModel::new("employeeForm", action, method)
            .with_field(FormField::text("full_name", "Phan Thanh Tâm").required())
            .with_field(FormField::file(
                "avatar",
                Some(FileUpload::new("tam.png", "image/png", vec![137, 80, 78, 71])),
            ))
    }

    #[tokio::test]
    async fn test_submit_sends_multipart_with_declared_method() {
        let (url, received) = serve(StatusCode::OK, "saved").await;
        let center = NotificationCenter::default();
        let submitter = FormSubmitter::new(center.clone());

        let form = employee_form(url, FormMethod::Put);
        let outcome = submitter.submit_and_notify(&form, None::<fn(&SubmitResponse)>).await;

        {
            let received = received.lock();
            assert_eq!(received.len(), 1);
            let request = &received[0];
            assert_eq!(request.method, Method::PUT);
            assert!(request.content_type.starts_with("multipart/form-data"));
            assert!(request.body.contains("name=\"full_name\""));
            assert!(request.body.contains("Phan Thanh Tâm"));
            assert!(request.body.contains("filename=\"tam.png\""));
        }

        match outcome {
            SubmitOutcome::Submitted(response) => assert_eq!(response.body, "saved"),
            other => panic!("Expected Submitted, got {other:?}"),
        }
        let banners = center.banners();
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].severity, Severity::Success);
        assert_eq!(banners[0].message, SUBMIT_SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_callback_replaces_success_banner() {
        let (url, received) = serve(StatusCode::CREATED, "{\"id\":42}").await;
        let center = NotificationCenter::default();
        let submitter = FormSubmitter::new(center.clone());

        let mut seen = None;
        let form = employee_form(url, FormMethod::Post);
        let outcome = submitter
            .submit_and_notify(&form, Some(|r: &SubmitResponse| seen = Some(r.status)))
            .await;

        assert!(outcome.is_submitted());
        assert_eq!(received.lock()[0].method, Method::POST);
        assert_eq!(seen, Some(201));
        assert!(center.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_text_in_banner() {
        let (url, _) = serve(StatusCode::UNPROCESSABLE_ENTITY, "Mã nhân viên đã tồn tại").await;
        let center = NotificationCenter::default();
        let submitter = FormSubmitter::new(center.clone());

        let form = employee_form(url, FormMethod::Post);
        let outcome = submitter.submit_and_notify(&form, None::<fn(&SubmitResponse)>).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(FormError::Server { status: 422, .. })
        ));
        let banners = center.banners();
        assert_eq!(banners[0].severity, Severity::Danger);
        assert_eq!(banners[0].message, "Có lỗi xảy ra: Mã nhân viên đã tồn tại");
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let center = NotificationCenter::default();
        let submitter = FormSubmitter::new(center.clone());

        let (action, received) = serve(StatusCode::OK, "saved").await;
        let mut form = FormModel::new("employeeForm", action, FormMethod::Post)
            .with_field(FormField::text("full_name", "").required());

        let outcome = submitter
            .submit_validated(&mut form, None::<fn(&SubmitResponse)>)
            .await;

        match outcome {
            SubmitOutcome::Invalid(violations) => assert_eq!(violations[0].field, "full_name"),
            other => panic!("Expected Invalid, got {other:?}"),
        }
        assert!(form.was_validated());
        assert!(center.is_empty());
        assert!(received.lock().is_empty());
    }
}
