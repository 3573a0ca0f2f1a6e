//! Mail delivery seam
//!
//! The core crate builds messages; delivery is provided by the
//! infrastructure layer through `MailerTrait`.

mod message;
mod traits;

#[cfg(test)]
pub mod mock;

pub use message::MailMessage;
pub use traits::MailerTrait;
