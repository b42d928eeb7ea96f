mod ab_switch;
mod ab_switch_control;
mod config;
mod cross_fade;
mod midi;
mod switch;

use crate::config::Config;
use anyhow::Context;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use std::thread;

/// Routes two stereo inputs to two stereo outputs through a crossfade
/// switched by a MIDI Control Change message.
#[derive(Parser)]
#[clap(name = "ab_switch", version)]
struct Opts {
    /// Configuration file; defaults to ab_switch.toml in the user
    /// configuration directory
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// MIDI CC controller number to listen to, overriding the configuration
    /// file
    #[clap(long)]
    cc_number: Option<u8>,

    /// Write the effective configuration to the configuration file and exit
    #[clap(long)]
    write_config: bool,
}

fn run() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let filename = match opts.config {
        Some(filename) => filename,
        None => Config::default_path()?,
    };
    let mut config = Config::load(&filename).context("Failed to load configuration")?;
    if let Some(cc_number) = opts.cc_number {
        config.control.cc_number = cc_number;
    }
    if opts.write_config {
        config.save(&filename)?;
        println!("Wrote config to {}", filename.display());
        return Ok(());
    }

    let (control_send, control_recv) = ab_switch_control::channel();
    let (shutdown_send, shutdown_recv) = crossbeam_channel::bounded::<()>(0);

    let audio_join = thread::spawn(move || ab_switch::main(config, control_recv, shutdown_recv));

    println!(
        "Listening for CC {} on the midi_in port; enter a new CC number to retarget, q to quit",
        config.control.cc_number
    );
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line == "q" {
            break;
        }
        if line.is_empty() {
            continue;
        }
        match line.parse::<u8>() {
            Ok(cc_number) => {
                let mut config = config;
                config.control.cc_number = cc_number;
                if control_send
                    .send(ab_switch_control::Message::UpdateConfig(config))
                    .is_err()
                {
                    break;
                }
                println!("Listening for CC {}", cc_number);
            }
            Err(_) => println!("Expected a CC number in 0..=127, or q"),
        }
    }

    drop(shutdown_send);
    audio_join
        .join()
        .unwrap()
        .context("JACK client terminated with an error")?;

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{:#}", error);
        std::process::exit(1);
    }
}
