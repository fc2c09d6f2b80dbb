//! Client-side file download

pub mod download;
