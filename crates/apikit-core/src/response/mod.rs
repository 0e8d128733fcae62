//! Standardized response envelopes.
//!
//! Every service response shares one envelope head (timestamp, trace id,
//! type, code, message, success flag). Success envelopes add a payload and
//! its size; error envelopes add the HTTP status and server-side detail.

pub mod builder;
pub mod error;
pub mod head;
pub mod page;
pub mod sizable;
pub mod success;

pub use builder::ResponseBuilder;
pub use error::ErrorResponse;
pub use head::{ResponseHead, ResponseMessage};
pub use page::Page;
pub use sizable::Sizable;
pub use success::SuccessResponse;
