// HeartWire - STM32F401 UART Bring-Up
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Follows the board's heartbeat over the ST-Link virtual COM port.

mod config;
mod line;
mod port;

use clap::{Parser, Subcommand};
use std::io::{ErrorKind, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

const EXIT_OK: u8 = 0;
const EXIT_CONFIG_ERROR: u8 = 2;
const EXIT_RUNTIME_ERROR: u8 = 3;

#[derive(Parser, Debug)]
#[command(author, version, about = "HeartWire heartbeat monitor", long_about = None)]
struct Cli {
    /// Serial port of the board, e.g. /dev/ttyACM0
    #[arg(short, long)]
    port: Option<String>,

    /// Override the baud rate (default: the bring-up contract's 115200)
    #[arg(short, long)]
    baud: Option<u32>,

    /// Path to a monitor config (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many heartbeats instead of running until interrupted
    #[arg(long)]
    count: Option<u64>,

    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List serial ports visible on this host.
    ListPorts,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    match cli.command {
        Some(Commands::ListPorts) => run_list_ports(),
        None => run_follow(cli),
    }
}

fn run_list_ports() -> ExitCode {
    match port::list_ports() {
        Ok(ports) if ports.is_empty() => {
            info!("No serial ports found");
            ExitCode::from(EXIT_OK)
        }
        Ok(ports) => {
            for p in ports {
                info!("{}", p.port_name);
            }
            ExitCode::from(EXIT_OK)
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(EXIT_RUNTIME_ERROR)
        }
    }
}

fn run_follow(cli: Cli) -> ExitCode {
    let settings = match config::resolve(cli.config.as_deref(), cli.port, cli.baud) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    let mut port = match port::open(&settings) {
        Ok(port) => port,
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::from(EXIT_RUNTIME_ERROR);
        }
    };

    info!(
        "Listening on {} at {} baud",
        settings.port, settings.frame.baud_rate
    );

    let mut assembler = line::LineAssembler::new();
    let mut beats: u64 = 0;
    let mut buf = [0u8; 256];

    loop {
        match port.read(&mut buf) {
            Ok(0) => {}
            Ok(n) => {
                for text in assembler.push(&buf[..n]) {
                    beats += 1;
                    info!(beat = beats, "{}", text);
                    if cli.count.is_some_and(|limit| beats >= limit) {
                        return ExitCode::from(EXIT_OK);
                    }
                }
            }
            // A quiet period is not fatal; the board may be resetting.
            Err(e) if e.kind() == ErrorKind::TimedOut => {
                tracing::debug!("No heartbeat within the read timeout");
            }
            Err(e) => {
                error!("Serial read failed: {}", e);
                return ExitCode::from(EXIT_RUNTIME_ERROR);
            }
        }
    }
}
