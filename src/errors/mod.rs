//! Error types for the lexer and its command-line front end.
//!
//! The scanner itself never fails; it encodes anomalies as `Illegal`
//! tokens. The types here are for consumers that decide an illegal token
//! is fatal, and for I/O around the scanner:
//!
//! - Error structures with source position information
//! - Error variants with helpful tips for reporting

pub mod errors;
