//! Course RAG - Question answering over indexed course materials
//!
//! An LLM answers each question in a bounded loop of tool rounds, searching
//! lesson content or fetching course outlines, and the passages it used are
//! returned as citations alongside the answer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
