// HeartWire - STM32F401 UART Bring-Up
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! STM32F401RE Nucleo bring-up: HSI clock, USART2 TX on PA2 (the ST-Link
//! virtual COM port), then the heartbeat loop forever.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use stm32f4xx_hal as hal;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial, Tx},
};
use heartwire_console::{
    heartbeat, Console, Parity, SerialFrame, SerialSink, TransmitFault, WordLength,
};

/// Transmit half of USART2 behind the console's sink trait.
struct UartTx(Tx<pac::USART2>);

impl SerialSink for UartTx {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), TransmitFault> {
        for &byte in bytes {
            nb::block!(self.0.write(byte)).map_err(|_| TransmitFault)?;
        }
        // Wait out transmission-complete so the last byte is on the wire
        // before the caller moves on.
        nb::block!(self.0.flush()).map_err(|_| TransmitFault)
    }
}

/// SysTick delay behind the heartbeat's delay trait.
struct TickDelay(hal::timer::SysDelay);

impl heartbeat::Delay for TickDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}

fn serial_config(frame: &SerialFrame) -> Config {
    let config = Config::default().baudrate(frame.baud_rate.bps());
    let config = match frame.word_length {
        WordLength::Eight => config.wordlength_8(),
        WordLength::Nine => config.wordlength_9(),
    };
    // One stop bit and no hardware flow control are the USART reset
    // defaults; nothing to program for them.
    match frame.parity {
        Parity::None => config.parity_none(),
        Parity::Even => config.parity_even(),
        Parity::Odd => config.parity_odd(),
    }
}

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::peripheral::Peripherals::take().unwrap();

    // HSI at 16 MHz, no PLL, /1 on AHB and both APB buses.
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let mut delay = TickDelay(cp.SYST.delay(&clocks));

    // PA2 is USART2 TX on the Nucleo's virtual COM path.
    let gpioa = dp.GPIOA.split();
    let tx_pin = gpioa.pa2.into_alternate();

    // A failed bring-up halts right here (panic-halt); running on with a
    // dead UART would only ever produce silence.
    let tx = Serial::tx(
        dp.USART2,
        tx_pin,
        serial_config(&SerialFrame::default()),
        &clocks,
    )
    .unwrap();

    let mut console = Console::new(UartTx(tx));

    loop {
        heartbeat::beat(&mut console, &mut delay);
    }
}
