//! Observable events
//!
//! Every log line names one of these.

use std::fmt;

/// Observable events in the listing service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Database opened and schema applied
    StoreOpened,
    /// HTTP listener bound
    ServerListening,
    /// HTTP server stopped
    ServerStopped,

    // Requests
    /// An HTTP request completed
    HttpRequest,

    // Reads
    /// Property search executed
    PropertySearch,
    /// Space search executed
    SpaceSearch,
    /// Space statistics computed
    SpaceStats,

    // Writes
    /// Property and spaces persisted
    PropertyCreated,
    /// Property fully replaced
    PropertyReplaced,
    /// Write request failed validation
    PropertyRejected,

    // Failures
    /// The store returned an error
    StoreFailure,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreOpened => "STORE_OPENED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerStopped => "SERVER_STOPPED",
            Event::HttpRequest => "HTTP_REQUEST",
            Event::PropertySearch => "PROPERTY_SEARCH",
            Event::SpaceSearch => "SPACE_SEARCH",
            Event::SpaceStats => "SPACE_STATS",
            Event::PropertyCreated => "PROPERTY_CREATED",
            Event::PropertyReplaced => "PROPERTY_REPLACED",
            Event::PropertyRejected => "PROPERTY_REJECTED",
            Event::StoreFailure => "STORE_FAILURE",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
