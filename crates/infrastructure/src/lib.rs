//! ensdns Infrastructure Layer
pub mod chain;
pub mod dns;
pub mod zonefile;
