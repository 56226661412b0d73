//! Health Assistant - Scripted health-advice dialogue manager
//!
//! This crate classifies free-text utterances, extracts symptom mentions,
//! collects symptom duration and severity through a bounded slot-filling
//! dialogue, and replies with templated self-care or escalation advice.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
