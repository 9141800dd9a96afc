//! JWT bearer assertion 모델

pub mod token;

pub use token::*;
