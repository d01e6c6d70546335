//! Wire contract for the `user.v1` backend service.
//!
//! The gateway consumes this protocol, it does not define it. The backend
//! owns the schema; this crate carries hand-rolled [`prost::Message`] types
//! mirroring it plus a thin unary client, so the gateway needs neither
//! `protoc` nor build-time codegen.
//!
//! You should not need to depend on this crate directly — the `user-gateway`
//! crate wraps it behind its backend call interface.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod user_v1;
