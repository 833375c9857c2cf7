//! REPL (Read-Eval-Print Loop) module
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions and conversion to AppEvent
//! - **parser.rs**: Manual string parsing for `@` and `:` prefixes
//! - **input.rs**: rustyline line editor with prompt and history
//!
//! ## Usage in main.rs
//!
//! ```rust,ignore
//! let mut repl = ReplInput::new()?;
//! while let Some(line) = repl.readline()? {
//!     let event = repl.to_app_event(&line);
//!     if let Some(output) = app.handle_event(event) {
//!         println!("{}", output);
//!     }
//! }
//! ```

pub mod command;
pub mod input;
pub mod parser;

pub use command::ReplCommand;
pub use input::{line_to_app_event, ReplInput};
pub use parser::parse_repl_input;
