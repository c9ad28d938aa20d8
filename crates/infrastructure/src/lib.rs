//! Vigil DNS Infrastructure Layer
pub mod dns;
