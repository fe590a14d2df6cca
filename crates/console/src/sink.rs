// HeartWire - STM32F401 UART Bring-Up
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Output sink adapter: the low-level write primitive behind formatted
//! output, routing bytes for the standard descriptors to the UART.

use core::fmt;

/// Standard descriptor numbers, as a C runtime's low-level write sees them.
pub const STDIN: i32 = 0;
pub const STDOUT: i32 = 1;
pub const STDERR: i32 = 2;

/// Non-OK status reported by the transmit hardware. Not recoverable at
/// this layer, so it carries no detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmitFault;

/// Blocking transmit half of the one configured UART.
///
/// An implementation sends every byte before returning; partial success is
/// not modeled. The firmware provides one over the HAL's `Tx`, tests use
/// recording fakes.
pub trait SerialSink {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), TransmitFault>;
}

/// Errors surfaced by [`Console::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
    /// Descriptor other than stdout/stderr (`EBADF` analog).
    BadDescriptor,
    /// Hardware reported a transmit failure (`EIO` analog).
    Transmit,
}

/// Owns the serial sink and exposes the write primitive. Stateless beyond
/// that ownership: no buffering, no retries.
pub struct Console<S: SerialSink> {
    sink: S,
}

impl<S: SerialSink> Console<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Low-level write. Descriptors 1 and 2 transmit synchronously over
    /// the UART; anything else fails without touching the wire.
    ///
    /// On success the returned count always equals `bytes.len()`. A
    /// transmit failure surfaces once, with no retry here; the caller
    /// decides whether to try again.
    pub fn write(&mut self, fd: i32, bytes: &[u8]) -> Result<usize, WriteError> {
        match fd {
            STDOUT | STDERR => match self.sink.transmit(bytes) {
                Ok(()) => Ok(bytes.len()),
                Err(TransmitFault) => Err(WriteError::Transmit),
            },
            _ => Err(WriteError::BadDescriptor),
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: SerialSink> fmt::Write for Console<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.write(STDOUT, s.as_bytes()) {
            Ok(_) => Ok(()),
            Err(_) => Err(fmt::Error),
        }
    }
}
