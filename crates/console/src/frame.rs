// HeartWire - STM32F401 UART Bring-Up
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Wire-format descriptor shared by the firmware and the host monitor.
//! Both sides render the same frame, which is what keeps the link
//! bit-exact end to end.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordLength {
    Eight,
    /// 8 data bits plus a parity bit in the 9th position.
    Nine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    None,
    Even,
    Odd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
    None,
    RtsCts,
}

/// Frame settings of the one configured UART.
///
/// `Default` is the bring-up contract external terminal tooling must
/// match: 115200 baud, 8 data bits, 1 stop bit, no parity, no hardware
/// flow control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialFrame {
    pub baud_rate: u32,
    pub word_length: WordLength,
    pub stop_bits: StopBits,
    pub parity: Parity,
    pub flow_control: FlowControl,
}

impl Default for SerialFrame {
    fn default() -> Self {
        Self {
            baud_rate: 115_200,
            word_length: WordLength::Eight,
            stop_bits: StopBits::One,
            parity: Parity::None,
            flow_control: FlowControl::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_is_the_bring_up_contract() {
        let frame = SerialFrame::default();
        assert_eq!(frame.baud_rate, 115_200);
        assert_eq!(frame.word_length, WordLength::Eight);
        assert_eq!(frame.stop_bits, StopBits::One);
        assert_eq!(frame.parity, Parity::None);
        assert_eq!(frame.flow_control, FlowControl::None);
    }
}
