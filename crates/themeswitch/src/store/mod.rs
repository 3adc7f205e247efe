//! Durable preference storage outside the browser.
//!
//! - [`FileStore`]: A JSON object file holding string entries
//! - [`StoreError`]: Errors from reading or writing that file

mod error;
mod file;

pub use error::StoreError;
pub use file::FileStore;
