//! # API Layer
//!
//! Wire shapes of the platform-facing boundary. The hosting function
//! owns routing and framing; everything it needs to type a request or a
//! response lives in [`dto`].

pub mod dto;

pub use dto::{
    ApplicationPayload, CalculateRequest, ErrorResponse, ECHO_SKIP, ECHO_SUCCESS,
};
