// src/utils/mod.rs

pub mod generator;
pub mod html;
