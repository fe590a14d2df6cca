// HeartWire - STM32F401 UART Bring-Up
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! The main-loop cycle: one heartbeat message on the console, one fixed
//! delay. Kept board-independent so the cycle is testable on the host.

use crate::sink::{Console, SerialSink, STDOUT};

/// Heartbeat payload, CRLF-terminated for plain terminal output.
pub const MESSAGE: &[u8] = b"Ping.\r\n";

/// Fixed pause between beats.
pub const PERIOD_MS: u32 = 1000;

/// Blocking delay of approximately `ms` milliseconds. The firmware backs
/// this with the SysTick delay; tests record the calls.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

/// One cycle of the main loop: emit the heartbeat, then wait out the
/// period.
///
/// The write result is deliberately dropped. A failed transmit means one
/// missing heartbeat on the wire; the next cycle tries again on its own
/// schedule.
pub fn beat<S: SerialSink, D: Delay>(console: &mut Console<S>, delay: &mut D) {
    let _ = console.write(STDOUT, MESSAGE);
    delay.delay_ms(PERIOD_MS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::TransmitFault;

    /// Counts transmit attempts; can be told to fail all of them.
    struct CountingSink {
        attempts: usize,
        last: [u8; 16],
        last_len: usize,
        fail: bool,
    }

    impl CountingSink {
        fn new(fail: bool) -> Self {
            Self {
                attempts: 0,
                last: [0; 16],
                last_len: 0,
                fail,
            }
        }

        fn last(&self) -> &[u8] {
            &self.last[..self.last_len]
        }
    }

    impl SerialSink for CountingSink {
        fn transmit(&mut self, bytes: &[u8]) -> Result<(), TransmitFault> {
            self.attempts += 1;
            self.last[..bytes.len()].copy_from_slice(bytes);
            self.last_len = bytes.len();
            if self.fail {
                return Err(TransmitFault);
            }
            Ok(())
        }
    }

    struct RecordedDelay {
        calls: usize,
        last_ms: u32,
    }

    impl Delay for RecordedDelay {
        fn delay_ms(&mut self, ms: u32) {
            self.calls += 1;
            self.last_ms = ms;
        }
    }

    #[test]
    fn test_n_cycles_make_n_transmits_with_n_delays() {
        let mut console = Console::new(CountingSink::new(false));
        let mut delay = RecordedDelay {
            calls: 0,
            last_ms: 0,
        };

        for _ in 0..5 {
            beat(&mut console, &mut delay);
        }

        let sink = console.into_sink();
        assert_eq!(sink.attempts, 5);
        assert_eq!(sink.last(), MESSAGE);
        assert_eq!(delay.calls, 5);
        assert_eq!(delay.last_ms, PERIOD_MS);
    }

    #[test]
    fn test_failed_transmit_does_not_stop_the_cycle() {
        let mut console = Console::new(CountingSink::new(true));
        let mut delay = RecordedDelay {
            calls: 0,
            last_ms: 0,
        };

        for _ in 0..3 {
            beat(&mut console, &mut delay);
        }

        // Every cycle still attempts exactly once and still waits out its
        // period, independent of the transmit outcome.
        assert_eq!(console.into_sink().attempts, 3);
        assert_eq!(delay.calls, 3);
    }
}
