#![allow(missing_docs, dead_code)]
//! Shared benchmark support.

pub mod harness;
