// HeartWire - STM32F401 UART Bring-Up
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! CRLF line reassembly for the raw RX byte stream. Serial reads land on
//! arbitrary boundaries, so a line (or its terminator) can arrive split
//! across any number of chunks.

#[derive(Default)]
pub struct LineAssembler {
    pending: Vec<u8>,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw chunk; returns the lines it completed, CRLF stripped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.pending.windows(2).position(|w| w == b"\r\n") {
            let line = self.pending[..pos].to_vec();
            self.pending.drain(..pos + 2);
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }
        lines
    }
}
