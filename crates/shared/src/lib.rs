pub mod domain;
pub mod encode;
pub mod error;
pub mod protocol;
