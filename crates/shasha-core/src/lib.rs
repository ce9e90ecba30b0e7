//! Core model, configuration and local persistence for the shasha
//! media-catalog client.

pub mod channels;
pub mod config;
pub mod error;
pub mod favorites;
pub mod gate;
pub mod models;
pub mod storage;
