// HeartWire - STM32F401 UART Bring-Up
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Opens the board's virtual COM port with the shared frame descriptor
//! rendered onto `serialport` settings.

use crate::config::Settings;
use heartwire_console::{FlowControl, Parity, SerialFrame, StopBits, WordLength};
use serialport::{DataBits, SerialPort, SerialPortInfo};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Failed to enumerate serial ports: {0}")]
    Enumerate(#[source] serialport::Error),
    #[error("Failed to open {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },
}

// Longer than one heartbeat period, so a healthy board never times out.
const READ_TIMEOUT: Duration = Duration::from_millis(1500);

pub fn list_ports() -> Result<Vec<SerialPortInfo>, MonitorError> {
    serialport::available_ports().map_err(MonitorError::Enumerate)
}

pub fn open(settings: &Settings) -> Result<Box<dyn SerialPort>, MonitorError> {
    let frame = &settings.frame;
    serialport::new(&settings.port, frame.baud_rate)
        .data_bits(data_bits(frame))
        .parity(parity(frame))
        .stop_bits(stop_bits(frame))
        .flow_control(flow_control(frame))
        .timeout(READ_TIMEOUT)
        .open()
        .map_err(|source| MonitorError::Open {
            port: settings.port.clone(),
            source,
        })
}

fn data_bits(frame: &SerialFrame) -> DataBits {
    match frame.word_length {
        WordLength::Eight => DataBits::Eight,
        // A 9-bit STM32 frame is 8 data bits plus parity; the host still
        // configures 8 data bits.
        WordLength::Nine => DataBits::Eight,
    }
}

fn parity(frame: &SerialFrame) -> serialport::Parity {
    match frame.parity {
        Parity::None => serialport::Parity::None,
        Parity::Even => serialport::Parity::Even,
        Parity::Odd => serialport::Parity::Odd,
    }
}

fn stop_bits(frame: &SerialFrame) -> serialport::StopBits {
    match frame.stop_bits {
        StopBits::One => serialport::StopBits::One,
        StopBits::Two => serialport::StopBits::Two,
    }
}

fn flow_control(frame: &SerialFrame) -> serialport::FlowControl {
    match frame.flow_control {
        FlowControl::None => serialport::FlowControl::None,
        FlowControl::RtsCts => serialport::FlowControl::Hardware,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_maps_to_8n1_no_flow() {
        let frame = SerialFrame::default();
        assert_eq!(data_bits(&frame), DataBits::Eight);
        assert_eq!(parity(&frame), serialport::Parity::None);
        assert_eq!(stop_bits(&frame), serialport::StopBits::One);
        assert_eq!(flow_control(&frame), serialport::FlowControl::None);
    }

    #[test]
    fn test_nine_bit_frame_keeps_eight_data_bits_on_host() {
        let frame = SerialFrame {
            word_length: WordLength::Nine,
            parity: Parity::Even,
            ..SerialFrame::default()
        };
        assert_eq!(data_bits(&frame), DataBits::Eight);
        assert_eq!(parity(&frame), serialport::Parity::Even);
    }
}
