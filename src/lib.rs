//! ToccaATE - let someone else (or chance) pick for you
//!
//! A creator lists two to four options and shares a link. Whoever opens the
//! link either picks one by hand or lets the server draw one at random; the
//! creator polls for the result. Choices are kept in memory and mirrored to a
//! single snapshot file after every change.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
