pub mod config;
pub mod error;
pub mod invoice;
pub mod pdf;

pub use config::{Config, ConfigStore, CONFIG_FILE};
pub use error::{InvoiceError, Result};
pub use invoice::{ConsolePrompt, Invoice, LineItem, Prompt, Session};
