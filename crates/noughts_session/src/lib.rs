//! Round controller for human-versus-computer tic-tac-toe.
//!
//! A presentation layer holds one [`Session`] and forwards cell clicks to
//! it; the session plays the human's cross, answers with the computer's
//! circle, and reports what to draw next.
//!
//! # Example
//!
//! ```
//! use noughts_session::{ClickResponse, Session, SessionConfig};
//!
//! let config = SessionConfig::from_toml_str("seed = 3\nlog_filter = \"warn\"")?;
//! config.init_tracing();
//! let mut session = Session::new(&config);
//!
//! match session.click(4)? {
//!     ClickResponse::Played(report) => assert_eq!(report.user_move, 4),
//!     ClickResponse::Restarted => unreachable!(),
//! }
//! assert_eq!(session.cell_labels()[4], "X");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;
mod telemetry;

pub use config::{CONFIG_PATH_VAR, ConfigError, LOG_VAR, SEED_VAR, SessionConfig, StatusMessages};
pub use session::{ClickResponse, Session, TurnReport};
pub use telemetry::init_tracing;
