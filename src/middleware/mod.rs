pub mod request_id;

pub use request_id::{request_id_layers, stamp_error_responses, RequestIdExt, X_REQUEST_ID};
