//! Detection service client

pub mod detect;
