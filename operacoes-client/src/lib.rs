//! # operacoes-client
//!
//! Client side of the arithmetic operations service.
//!
//! - [`OperationClient`]: one HTTP round trip per call; service refusals come
//!   back as [`ClientError::Service`] carrying the service's own message.
//! - [`parse_operands`]: validation of user-typed numbers before any call.
//! - [`CalculatorForm`]: the state machine behind the graphical client.
//! - [`run_demo`]: the scripted console walkthrough.

pub mod cli;
pub mod client;
pub mod demo;
pub mod error;
pub mod form;
#[cfg(feature = "gui")]
pub mod gui;
pub mod input;

pub use client::OperationClient;
pub use demo::run_demo;
pub use error::{ClientError, InputError};
pub use form::CalculatorForm;
pub use input::parse_operands;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the `tracing` subscriber used by the client binaries.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,operacoes_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
