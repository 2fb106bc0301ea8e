//! End-to-end runs.
//!
//! This module combines the [`crate::groups`], [`crate::sum`], and [`crate::output`] mods into a
//! single workflow. It's useful for building functionality like the CLI's, but running it
//! within-process.
//!
//! ## Example
//!
//! ```
//! # use tailsum::run;
//!
//! // First, let's define a mocked I/O. Replace this with whatever you need.
//! #[derive(Default)]
//! struct MockIo {
//!     stdout: Vec<u8>,
//! }
//!
//! impl run::OsFacade for MockIo {
//!     fn read_stdin(&self) -> std::io::Result<String> {
//!         Ok("1 2 3\n10 20".to_string())
//!     }
//!
//!     fn read_file(&self, path: &str) -> std::io::Result<String> {
//!         Err(std::io::Error::new(std::io::ErrorKind::NotFound, path))
//!     }
//!
//!     fn stdout(&mut self) -> impl std::io::Write {
//!         &mut self.stdout
//!     }
//!
//!     fn write_error(&mut self, err: run::Error) {
//!         eprintln!("{err}")
//!     }
//! }
//!
//! // Now, use it:
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! // Use the default "CLI" options: text input from stdin, one sum per line out.
//! let cli_options = run::RunOptions::default();
//!
//! let mut os_facade = MockIo::default();
//! let ok = run::run(&cli_options, &mut os_facade);
//! let stdout_text = String::from_utf8(os_facade.stdout)?;
//!
//! assert_eq!(ok, true);
//! assert_eq!(stdout_text, "5\n20\n");
//! #
//! #     Ok(())
//! # }
//! ```
mod cli;
mod run_main;

pub use cli::*;
pub use run_main::*;
