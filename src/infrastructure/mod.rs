//! Infrastructure layer - concrete storage, hashing and services

pub mod account;
pub mod listing;
pub mod logging;
pub mod storage;
