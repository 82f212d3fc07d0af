// src/handlers/mod.rs

pub mod ads;
pub mod pages;
