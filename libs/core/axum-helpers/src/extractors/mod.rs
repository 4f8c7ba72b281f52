//! Extractors whose rejections render through [`AppError`](crate::AppError).

mod json;

pub use json::{AppJson, AppQuery};
