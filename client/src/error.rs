use thiserror::Error;

/// A call to the battle server failed
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Unreadable response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Starting an audio clip failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("Clip not found: {0}")]
    NotFound(String),

    /// The autoplay policy refused playback until the user interacts with the page
    #[error("Playback blocked until a user gesture")]
    Blocked,

    #[error("Could not decode {0}")]
    Decode(String),
}

/// An effect could not be drawn
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    #[error("Effect asset missing: {0}")]
    AssetMissing(String),
}

/// An action was submitted while another one is still playing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("An action is already in progress")]
pub struct ActionRejected;
