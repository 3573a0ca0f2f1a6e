//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints including:
//! - Registration
//! - Email verification (sending and verifying codes)
//! - Login, logout and the is-authenticated check
//! - Password reset

pub mod cookie;
pub mod password_reset;
pub mod register;
pub mod session;
pub mod verification;
