// HeartWire - STM32F401 UART Bring-Up
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Board-independent core of the HeartWire bring-up firmware: the output
//! sink adapter that routes low-level writes to the UART, the wire-format
//! descriptor shared with host tooling, and the heartbeat cycle.

#![no_std]

pub mod frame;
pub mod heartbeat;
pub mod sink;

pub use frame::{FlowControl, Parity, SerialFrame, StopBits, WordLength};
pub use sink::{Console, SerialSink, TransmitFault, WriteError, STDERR, STDIN, STDOUT};
