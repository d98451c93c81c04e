//! Decision Walker - Adaptive questionnaire over a decision graph
//!
//! Validates a graph of question, response and terminus nodes, walks it by
//! classifying free-text answers, and collects labelled learning examples
//! for later offline training.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
