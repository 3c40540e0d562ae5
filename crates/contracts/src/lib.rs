//! Shared DTOs between the document assistant front-end and its API server.

pub mod domain;
