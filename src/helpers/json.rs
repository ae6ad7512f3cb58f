use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<String>,
    item: Option<T>,
    list: Option<Vec<T>>,
    message: Option<String>,
}

impl<T> Default for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn default() -> Self {
        Self {
            id: None,
            item: None,
            list: None,
            message: None,
        }
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub fn set_msg(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    fn form(self, status: &str, code: u32, fallback: &str) -> JsonResponse<T> {
        let message = match self.message {
            Some(msg) if !msg.trim().is_empty() => msg,
            _ => fallback.to_string(),
        };

        JsonResponse {
            status: status.to_string(),
            message,
            code,
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    fn err(self, status_code: StatusCode, message: &str, fallback: &str) -> Error {
        let msg = if !message.trim().is_empty() {
            message.to_string()
        } else {
            fallback.to_string()
        };
        let response = self.set_msg(msg.clone()).form("Error", status_code.as_u16() as u32, fallback);

        InternalError::from_response(msg, HttpResponse::build(status_code).json(response)).into()
    }

    pub fn ok(self, message: &str) -> HttpResponse {
        let response = if !message.trim().is_empty() {
            self.set_msg(message)
        } else {
            self
        };
        HttpResponse::Ok().json(response.form("OK", 200, "Success"))
    }

    pub fn created(self, message: &str) -> HttpResponse {
        let response = if !message.trim().is_empty() {
            self.set_msg(message)
        } else {
            self
        };
        HttpResponse::Created().json(response.form("OK", 201, "Created"))
    }

    pub fn bad_request(self, message: &str) -> Error {
        self.err(StatusCode::BAD_REQUEST, message, "Bad request")
    }

    pub fn form_error(self, message: String) -> Error {
        self.err(StatusCode::BAD_REQUEST, message.as_str(), "Validation error")
    }

    pub fn unauthorized(self, message: &str) -> Error {
        self.err(StatusCode::UNAUTHORIZED, message, "Authentication required")
    }

    pub fn forbidden(self, message: &str) -> Error {
        self.err(StatusCode::FORBIDDEN, message, "Access denied")
    }

    pub fn not_found(self, message: &str) -> Error {
        self.err(StatusCode::NOT_FOUND, message, "Object not found")
    }

    pub fn conflict(self, message: &str) -> Error {
        self.err(StatusCode::CONFLICT, message, "Conflict")
    }

    pub fn internal_server_error(self, message: &str) -> Error {
        self.err(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            "Internal error",
        )
    }

    pub fn to_string(self) -> String {
        let response = self.form("Error", 400, "Bad request");
        serde_json::to_string(&response).unwrap_or_default()
    }
}

impl<T> From<T> for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn from(value: T) -> Self {
        JsonResponseBuilder::default().set_item(value)
    }
}

impl<T> From<Vec<T>> for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn from(value: Vec<T>) -> Self {
        JsonResponseBuilder::default().set_list(value)
    }
}
