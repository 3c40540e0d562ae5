//! HTTP client adapter for the API server.
//!
//! `ApiController` is the only place that knows about URLs, headers and
//! response decoding. Requests go out through an [`HttpTransport`]; in the
//! browser that is [`GlooTransport`] (fetch via gloo-net).

mod controller;
mod error;
mod request;
mod transport;

pub use controller::ApiController;
pub use error::{ApiError, TransportError};
pub use request::{
    CancelToken, FormPart, HttpMethod, MultipartForm, RequestBody, RequestOptions, ResponseBody,
};
pub use transport::{GlooTransport, HttpRequest, HttpResponse, HttpTransport, TransportBody};
