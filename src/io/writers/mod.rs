pub mod csv;
pub mod email;
pub mod json;
pub mod markdown;
pub mod terminal;

pub use csv::CsvWriter;
pub use email::EmailWriter;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;
