use std::collections::TryReserveError;

use thiserror::Error;

use crate::lifecycle::BufferKind;

/// Failure while building a host payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    #[error("allocator refused {kind} buffer of {len} elements")]
    Refused { kind: BufferKind, len: usize },
    #[error("failed to reserve {kind} buffer of {len} elements: {source}")]
    Reserve {
        kind: BufferKind,
        len: usize,
        #[source]
        source: TryReserveError,
    },
}

impl TranscodeError {
    pub fn kind(&self) -> BufferKind {
        match self {
            Self::Refused { kind, .. } | Self::Reserve { kind, .. } => *kind,
        }
    }
}

/// A payload the host side could not take.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("host could not accept the payload: {message}")]
pub struct RegistrationError {
    pub message: String,
}

impl RegistrationError {
    pub fn new(message: impl std::fmt::Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Why a negotiation left the host without options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NegotiationError {
    #[error(transparent)]
    Transcode(#[from] TranscodeError),
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

impl NegotiationError {
    /// The buffer whose allocation failed, for transcoding failures.
    pub fn buffer_kind(&self) -> Option<BufferKind> {
        match self {
            Self::Transcode(err) => Some(err.kind()),
            Self::Registration(_) => None,
        }
    }
}
