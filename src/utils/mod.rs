// src/utils/mod.rs

pub mod code;
pub mod hash;
pub mod token;
