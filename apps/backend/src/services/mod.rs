//! Backend services: disk storage for uploads and PDF text extraction.

pub mod extract;
pub mod files;
