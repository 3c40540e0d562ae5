use super::error::ApiError;
use super::request::{HttpMethod, MultipartForm, RequestBody, RequestOptions, ResponseBody};
use super::transport::{HttpRequest, HttpResponse, HttpTransport, TransportBody};
use crate::shared::config::ApiConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

const CONTENT_TYPE: &str = "Content-Type";
const JSON_MIME: &str = "application/json";

/// Base controller for API requests
///
/// Built once at startup and shared through context; clones are cheap and
/// point at the same transport.
#[derive(Clone)]
pub struct ApiController {
    base_url: Rc<str>,
    default_headers: Rc<[(String, String)]>,
    transport: Rc<dyn HttpTransport>,
}

impl ApiController {
    pub fn new(config: &ApiConfig, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: Rc::from(config.base_url.trim_end_matches('/')),
            default_headers: Rc::from(vec![("Accept".to_string(), JSON_MIME.to_string())]),
            transport,
        }
    }

    /// Build complete URL with query parameters
    pub fn build_url(&self, endpoint: &str, params: &[(String, String)]) -> String {
        let mut url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        };

        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&query);
        }

        url
    }

    /// Merge default and custom headers; custom ones replace defaults with
    /// the same (case-insensitive) name.
    pub fn merge_headers(&self, custom: &[(String, String)]) -> Vec<(String, String)> {
        let mut merged: Vec<(String, String)> = self.default_headers.to_vec();
        for (name, value) in custom {
            set_header(&mut merged, name, value);
        }
        merged
    }

    /// Make GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(HttpMethod::Get, endpoint, None, options)
            .await?
            .into_json()
    }

    /// Make POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Transport {
            message: format!("Failed to serialize request: {}", e),
        })?;
        self.request(HttpMethod::Post, endpoint, Some(RequestBody::Json(value)), options)
            .await?
            .into_json()
    }

    /// Upload files with multipart form data
    pub async fn upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: MultipartForm,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(HttpMethod::Post, endpoint, Some(RequestBody::Multipart(form)), options)
            .await?
            .into_json()
    }

    /// Shared request core for every verb
    pub async fn request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<ResponseBody, ApiError> {
        let url = self.build_url(endpoint, &options.params);
        let mut headers = self.merge_headers(&options.headers);

        let body = match body {
            None => None,
            Some(RequestBody::Multipart(form)) => {
                // the browser has to write the boundary itself
                headers.retain(|(k, _)| !k.eq_ignore_ascii_case(CONTENT_TYPE));
                Some(TransportBody::Multipart(form))
            }
            Some(RequestBody::Json(value)) => {
                set_header(&mut headers, CONTENT_TYPE, JSON_MIME);
                Some(TransportBody::Text(value.to_string()))
            }
        };

        log::debug!("{} {}", method.as_str(), url);

        let response = self
            .transport
            .execute(HttpRequest {
                method,
                url,
                headers,
                body,
                signal: options.signal,
            })
            .await?;

        handle_response(response)
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
        Some(existing) => *existing = (name.to_string(), value.to_string()),
        None => headers.push((name.to_string(), value.to_string())),
    }
}

fn decode_body(response: &HttpResponse) -> ResponseBody {
    let is_json = response
        .header(CONTENT_TYPE)
        .map(|ct| ct.to_ascii_lowercase().contains(JSON_MIME))
        .unwrap_or(false);

    if is_json {
        if let Ok(value) = serde_json::from_str(&response.body) {
            return ResponseBody::Json(value);
        }
        log::warn!("Response declared JSON but body did not parse; keeping text");
    }
    ResponseBody::Text(response.body.clone())
}

fn handle_response(response: HttpResponse) -> Result<ResponseBody, ApiError> {
    let body = decode_body(&response);
    if !response.is_success() {
        log::warn!("HTTP error: {}", response.status);
        return Err(ApiError::from_status(response.status, body));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::error::TransportError;
    use crate::shared::files::FileHandle;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde::Deserialize;
    use serde_json::json;
    use std::cell::RefCell;

    struct FakeTransport {
        reply: Result<HttpResponse, TransportError>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        fn replying(status: u16, content_type: &str, body: &str) -> Rc<Self> {
            Rc::new(Self {
                reply: Ok(HttpResponse {
                    status,
                    headers: vec![("content-type".into(), content_type.into())],
                    body: body.into(),
                }),
                seen: RefCell::new(Vec::new()),
            })
        }

        fn failing(err: TransportError) -> Rc<Self> {
            Rc::new(Self {
                reply: Err(err),
                seen: RefCell::new(Vec::new()),
            })
        }

        fn last(&self) -> HttpRequest {
            self.seen.borrow().last().cloned().unwrap()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for FakeTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.borrow_mut().push(request);
            self.reply.clone()
        }
    }

    fn controller(base_url: &str, transport: Rc<FakeTransport>) -> ApiController {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            upload_endpoint: "/upload".to_string(),
        };
        ApiController::new(&config, transport)
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        ok: bool,
    }

    #[test]
    fn test_build_url() {
        let api = controller("http://localhost:3000/", FakeTransport::replying(200, "", ""));
        assert_eq!(api.build_url("/upload", &[]), "http://localhost:3000/upload");
        assert_eq!(api.build_url("upload", &[]), "http://localhost:3000/upload");
        assert_eq!(
            api.build_url(
                "/search",
                &[("q".into(), "a b&c".into()), ("page".into(), "2".into())]
            ),
            "http://localhost:3000/search?q=a%20b%26c&page=2"
        );
        assert_eq!(
            api.build_url("https://other.host/x", &[]),
            "https://other.host/x"
        );
    }

    #[test]
    fn test_empty_base_gives_relative_url() {
        let api = controller("", FakeTransport::replying(200, "", ""));
        assert_eq!(api.build_url("/api/documents/upload", &[]), "/api/documents/upload");
    }

    #[test]
    fn test_merge_headers_overrides_default() {
        let api = controller("", FakeTransport::replying(200, "", ""));
        let merged = api.merge_headers(&[
            ("accept".into(), "text/plain".into()),
            ("X-Request-Id".into(), "7".into()),
        ]);
        assert_eq!(merged.len(), 2);
        assert!(merged.contains(&("accept".to_string(), "text/plain".to_string())));
        assert!(merged.contains(&("X-Request-Id".to_string(), "7".to_string())));
    }

    #[test]
    fn test_get_decodes_json() {
        let transport = FakeTransport::replying(200, "application/json; charset=utf-8", r#"{"ok":true}"#);
        let api = controller("http://api", transport.clone());

        let out: Echo = block_on(api.get("/ping", RequestOptions::new().param("v", "1"))).unwrap();
        assert_eq!(out, Echo { ok: true });

        let sent = transport.last();
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.url, "http://api/ping?v=1");
        assert_eq!(sent.header("Accept"), Some("application/json"));
        assert!(sent.body.is_none());
        assert!(sent.header("Content-Type").is_none());
    }

    #[test]
    fn test_post_forces_json_content_type() {
        let transport = FakeTransport::replying(201, "application/json", r#"{"ok":true}"#);
        let api = controller("http://api", transport.clone());

        let opts = RequestOptions::new().header("Content-Type", "text/plain");
        let _: Echo = block_on(api.post("/items", &json!({"name": "x"}), opts)).unwrap();

        let sent = transport.last();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.header("content-type"), Some("application/json"));
        match sent.body {
            Some(TransportBody::Text(text)) => assert_eq!(text, r#"{"name":"x"}"#),
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_upload_drops_content_type() {
        let transport = FakeTransport::replying(200, "application/json", r#"{"ok":true}"#);
        let api = controller("http://api", transport.clone());

        let form = MultipartForm::new()
            .text("description", "d")
            .file("files", FileHandle::in_memory("a.txt", "text/plain", b"a".to_vec()));
        let opts = RequestOptions::new().header("Content-Type", "multipart/form-data");
        let _: Echo = block_on(api.upload("/upload", form, opts)).unwrap();

        let sent = transport.last();
        assert!(sent.header("Content-Type").is_none());
        assert_eq!(sent.header("Accept"), Some("application/json"));
        assert!(matches!(sent.body, Some(TransportBody::Multipart(ref f)) if f.parts().len() == 2));
    }

    #[test]
    fn test_non_json_response_is_text() {
        let api = controller("", FakeTransport::replying(200, "text/plain", "pong"));
        let body = block_on(api.request(HttpMethod::Get, "/ping", None, RequestOptions::new()))
            .unwrap();
        assert_eq!(body, ResponseBody::Text("pong".into()));
    }

    #[test]
    fn test_non_2xx_is_status_error() {
        let api = controller(
            "",
            FakeTransport::replying(413, "application/json", r#"{"message":"Payload too large"}"#),
        );
        let err = block_on(api.get::<Echo>("/x", RequestOptions::new())).unwrap_err();
        assert_eq!(err.status(), Some(413));
        assert_eq!(err.to_string(), "Payload too large");
        match err {
            ApiError::Status { body, .. } => {
                assert_eq!(body, ResponseBody::Json(json!({"message": "Payload too large"})))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_status_error_with_text_body() {
        let api = controller("", FakeTransport::replying(502, "text/html", "<h1>Bad gateway</h1>"));
        let err = block_on(api.get::<Echo>("/x", RequestOptions::new())).unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.to_string(), "An error occurred");
    }

    #[test]
    fn test_abort_is_cancelled() {
        let api = controller("", FakeTransport::failing(TransportError::Aborted));
        let err = block_on(api.get::<Echo>("/x", RequestOptions::new())).unwrap_err();
        assert_eq!(err, ApiError::Cancelled);
    }

    #[test]
    fn test_network_failure_is_transport_error() {
        let api = controller("", FakeTransport::failing(TransportError::Network("Failed to fetch".into())));
        let err = block_on(api.get::<Echo>("/x", RequestOptions::new())).unwrap_err();
        assert_eq!(err, ApiError::Transport { message: "Failed to fetch".into() });
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_success_with_undecodable_body_is_decode_error() {
        let api = controller("", FakeTransport::replying(200, "text/plain", "not json"));
        let err = block_on(api.get::<Echo>("/x", RequestOptions::new())).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
