//! Local stand-in for a network device's configuration session.
//!
//! # Responsibility
//! - Hold hostname, interface state and response prefix settings.
//! - Render each setting as a `key: value` line.
//!
//! # Invariants
//! - `interface_state` is always one of `up` or `down`.
//! - A rejected update leaves every setting unchanged.

use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_HOSTNAME: &str = "1";
pub const DEFAULT_RESPONSE_PREFIX: &str = "Standard Response";

/// Administrative state of the simulated interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterfaceState {
    Up,
    #[default]
    Down,
}

impl InterfaceState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl Display for InterfaceState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterfaceState {
    type Err = ConfigError;

    /// Accepts exactly `up` or `down`; matching is case-sensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(ConfigError::InvalidArgument {
                field: "interface_state",
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration manager error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidArgument { field: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { field, value } => {
                write!(f, "invalid value `{value}` for {field}; expected up|down")
            }
        }
    }
}

impl Error for ConfigError {}

/// In-memory configuration session for one simulated device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfigManager {
    hostname: String,
    interface_state: InterfaceState,
    response_prefix: String,
    connected: bool,
}

impl Default for NetworkConfigManager {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            interface_state: InterfaceState::Down,
            response_prefix: DEFAULT_RESPONSE_PREFIX.to_string(),
            connected: false,
        }
    }
}

impl NetworkConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the session. Pair with [`NetworkConfigManager::disconnect`].
    pub fn connect(&mut self) {
        self.connected = true;
        debug!("event=device_connect module=device status=ok");
    }

    pub fn disconnect(&mut self) {
        if !self.connected {
            debug!("event=device_disconnect module=device status=skipped reason=not_connected");
            return;
        }
        self.connected = false;
        debug!("event=device_disconnect module=device status=ok");
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn update_hostname(&mut self, value: impl Into<String>) {
        self.hostname = value.into();
    }

    pub fn show_hostname(&self) -> String {
        format!("hostname: {}", self.hostname)
    }

    /// Sets the interface state from its textual form.
    ///
    /// # Errors
    /// - `InvalidArgument` for anything other than `up` or `down`; the stored
    ///   state is kept.
    pub fn update_interface_state(&mut self, value: &str) -> Result<(), ConfigError> {
        match value.parse::<InterfaceState>() {
            Ok(state) => {
                self.interface_state = state;
                Ok(())
            }
            Err(err) => {
                warn!("event=interface_state_update module=device status=error error_code=invalid_argument");
                Err(err)
            }
        }
    }

    pub fn interface_state(&self) -> InterfaceState {
        self.interface_state
    }

    pub fn show_interface_state(&self) -> String {
        format!("interface_state: {}", self.interface_state)
    }

    pub fn update_response_prefix(&mut self, value: impl Into<String>) {
        self.response_prefix = value.into();
    }

    pub fn show_response_prefix(&self) -> String {
        format!("response_prefix: {}", self.response_prefix)
    }
}
