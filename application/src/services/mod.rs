//! Application services shared by several use cases

pub mod text_request;
