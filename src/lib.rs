//! Wodah Lead Capture & Solar ROI API Library
//!
//! Core logic behind the Wodah niche landing pages: the solar ROI estimator
//! that powers the calculator widget, the lead validation endpoint, and the
//! client-side submission workflow the conversion form renders from.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Wire and store data models.
//! - `roi`: Solar ROI estimation.
//! - `store`: Supabase lead store client.
//! - `workflow`: Lead submission state machine.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod roi;
pub mod store;
pub mod workflow;
