use super::error::TransportError;
use super::request::{FormPart, HttpMethod, MultipartForm};
use crate::shared::files::{FileHandle, FileSource};
use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

/// Body as it goes over the wire: already serialized text, or a form the
/// transport turns into a browser `FormData`.
#[derive(Debug, Clone)]
pub enum TransportBody {
    Text(String),
    Multipart(MultipartForm),
}

/// Fully resolved request handed to a transport
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<TransportBody>,
    pub signal: Option<web_sys::AbortSignal>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Sends one request and returns the raw response.
///
/// Implementations must not interpret the status code; that is the
/// controller's job.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Browser fetch through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = RequestBuilder::new(&request.url).method(gloo_method(request.method));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        builder = builder.abort_signal(request.signal.as_ref());

        let prepared = match request.body {
            None => builder.build(),
            Some(TransportBody::Text(text)) => builder.body(text),
            Some(TransportBody::Multipart(form)) => builder.body(to_form_data(&form)?),
        }
        .map_err(classify)?;

        let response = prepared.send().await.map_err(classify)?;
        let status = response.status();
        let headers = response.headers().entries().collect();
        let body = response.text().await.map_err(classify)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn gloo_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Patch => Method::PATCH,
    }
}

fn classify(err: gloo_net::Error) -> TransportError {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => TransportError::Aborted,
        gloo_net::Error::JsError(js) => TransportError::Network(js.message),
        other => TransportError::Network(other.to_string()),
    }
}

fn js_error(value: JsValue) -> TransportError {
    TransportError::Network(format!("{value:?}"))
}

fn to_form_data(form: &MultipartForm) -> Result<FormData, TransportError> {
    let data = FormData::new().map_err(js_error)?;
    for part in form.parts() {
        match part {
            FormPart::Text { name, value } => data.append_with_str(name, value),
            FormPart::File { name, file } => {
                let blob = to_blob(file)?;
                data.append_with_blob_and_filename(name, &blob, &file.name)
            }
        }
        .map_err(js_error)?;
    }
    Ok(data)
}

fn to_blob(file: &FileHandle) -> Result<Blob, TransportError> {
    match &file.source {
        FileSource::Browser(f) => Ok(f.clone().into()),
        FileSource::Memory(bytes) => {
            let array = js_sys::Uint8Array::from(&bytes[..]);
            let parts = js_sys::Array::of1(&array);
            let options = BlobPropertyBag::new();
            options.set_type(&file.mime_type);
            Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)
        }
    }
}
