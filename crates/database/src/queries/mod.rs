//! Typed query modules

pub mod books;
