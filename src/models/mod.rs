// src/models/mod.rs

pub mod ad;
pub mod listing;
pub mod store;
pub mod submission;
