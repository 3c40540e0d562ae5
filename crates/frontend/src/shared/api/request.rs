use super::error::ApiError;
use crate::shared::files::FileHandle;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

/// One named part of a multipart form.
#[derive(Debug, Clone)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: FileHandle },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Multipart form payload, parts kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FileHandle) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file,
        });
        self
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match p {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn files(&self, name: &str) -> Vec<&FileHandle> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                FormPart::File { name: n, file } if n == name => Some(file),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(Value),
    Multipart(MultipartForm),
}

/// Per-request options: extra headers, query parameters and an abort signal.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub params: Vec<(String, String)>,
    pub signal: Option<web_sys::AbortSignal>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn signal(mut self, signal: web_sys::AbortSignal) -> Self {
        self.signal = Some(signal);
        self
    }
}

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// `message` string field of a JSON object body, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ResponseBody::Json(v) => v.get("message").and_then(Value::as_str),
            ResponseBody::Text(_) => None,
        }
    }

    pub fn into_json<T: serde::de::DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            ResponseBody::Json(v) => {
                serde_json::from_value(v).map_err(|e| ApiError::Decode(e.to_string()))
            }
            ResponseBody::Text(s) => {
                serde_json::from_str(&s).map_err(|e| ApiError::Decode(e.to_string()))
            }
        }
    }
}

/// Cancellation handle backed by the browser `AbortController`.
///
/// Pass [`CancelToken::signal`] through [`RequestOptions::signal`]; calling
/// [`CancelToken::cancel`] makes the pending request fail with
/// [`ApiError::Cancelled`].
#[derive(Debug, Clone)]
pub struct CancelToken {
    controller: web_sys::AbortController,
}

impl CancelToken {
    pub fn new() -> Result<Self, ApiError> {
        let controller = web_sys::AbortController::new().map_err(|e| ApiError::Transport {
            message: format!("Failed to create AbortController: {:?}", e),
        })?;
        Ok(Self { controller })
    }

    pub fn signal(&self) -> web_sys::AbortSignal {
        self.controller.signal()
    }

    pub fn cancel(&self) {
        self.controller.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_keeps_part_order() {
        let a = FileHandle::in_memory("a.txt", "text/plain", b"a".to_vec());
        let b = FileHandle::in_memory("b.txt", "text/plain", b"b".to_vec());
        let form = MultipartForm::new()
            .text("description", "docs")
            .file("files", a)
            .file("files", b);

        let names: Vec<_> = form.parts().iter().map(FormPart::name).collect();
        assert_eq!(names, vec!["description", "files", "files"]);
        assert_eq!(form.text_value("description"), Some("docs"));
        let files: Vec<_> = form.files("files").iter().map(|f| f.name.clone()).collect();
        assert_eq!(files, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_response_body_into_json() {
        #[derive(Debug, serde::Deserialize)]
        struct Out {
            n: u32,
        }
        let out: Out = ResponseBody::Json(json!({"n": 3})).into_json().unwrap();
        assert_eq!(out.n, 3);
        let out: Out = ResponseBody::Text(r#"{"n": 4}"#.into()).into_json().unwrap();
        assert_eq!(out.n, 4);
        let err = ResponseBody::Text("nope".into()).into_json::<Out>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_options_builder() {
        let opts = RequestOptions::new()
            .header("X-Trace", "1")
            .param("page", "2");
        assert_eq!(opts.headers, vec![("X-Trace".to_string(), "1".to_string())]);
        assert_eq!(opts.params, vec![("page".to_string(), "2".to_string())]);
        assert!(opts.signal.is_none());
    }
}
