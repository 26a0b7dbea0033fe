//! Syllabus tracker: extraction of coursework deadlines from syllabus text.
//!
//! This crate holds the core of a personal coursework dashboard. Pasted
//! syllabus text is turned into dated, confidence-scored candidate tasks,
//! reviewed by the user, and appended to a task store.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`syllabus`]: Date normalization, line recognition and import review
//! - [`task`]: Task records, the task store port and weekly views
//! - [`config`]: Dashboard settings that drive recognition and scheduling

pub mod config;
pub mod syllabus;
pub mod task;
