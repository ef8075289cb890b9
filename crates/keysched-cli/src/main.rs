//! Command-line interface for `keysched`.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use keysched_core::{
    from_hex, to_hex, GFunction, Key, KeyScheduler, Rcon, Word, KEY_SIZE, NUM_CHUNKS,
};

/// Key-schedule CLI.
#[derive(Parser)]
#[command(
    name = "keysched",
    version,
    author,
    about = "Rijndael-style key-schedule explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand an initial key and print each round key.
    Expand {
        /// Initial key as up to 32 hex digits (leading zeros optional).
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Number of round keys to print, counting round 0.
        #[arg(long, default_value_t = 11)]
        rounds: u32,
    },
    /// Iterate the g transform from a seed word, feeding each output back in.
    Gfunction {
        /// Seed word as up to 8 hex digits.
        #[arg(long, value_name = "HEX")]
        word: String,
        /// Number of iterations to print.
        #[arg(long, default_value_t = 11)]
        count: u32,
    },
    /// Print the round-coefficient sequence.
    Rcon {
        /// Number of coefficients to print.
        #[arg(long, default_value_t = 10)]
        count: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Expand { key, rounds } => cmd_expand(&key, rounds),
        Commands::Gfunction { word, count } => cmd_gfunction(&word, count),
        Commands::Rcon { count } => cmd_rcon(count),
    }
}

fn cmd_expand(key_hex: &str, rounds: u32) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let scheduler = KeyScheduler::new(key);
    for (round, round_key) in scheduler.take(rounds as usize).enumerate() {
        println!(
            "[{:02}] = {}",
            round,
            hex_pairs(round_key.value(), (KEY_SIZE / 4) as usize)
        );
    }
    Ok(())
}

fn cmd_gfunction(word_hex: &str, count: u32) -> Result<()> {
    let mut word = parse_word_hex(word_hex)?;
    let mut g = GFunction::new();
    for i in 0..count {
        word = g.apply(word);
        println!("[{:02}] = {}", i, hex_pairs(u128::from(word), NUM_CHUNKS * 2));
    }
    Ok(())
}

fn cmd_rcon(count: u32) -> Result<()> {
    for (i, coefficient) in Rcon::new().take(count as usize).enumerate() {
        println!("[{:02}] = {}", i, to_hex(u128::from(coefficient), 2));
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Key> {
    let value = from_hex(hex_str.trim()).context("decode key hex")?;
    Ok(Key::new(value))
}

fn parse_word_hex(hex_str: &str) -> Result<Word> {
    let value = from_hex(hex_str.trim()).context("decode word hex")?;
    if value > u128::from(Word::MAX) {
        bail!("seed word must fit in {} bits", Word::BITS);
    }
    Ok(value as Word)
}

/// Formats `value` as `min_digits` hex digits grouped into byte pairs,
/// e.g. `62 63 63 63`.
fn hex_pairs(value: u128, min_digits: usize) -> String {
    let digits = to_hex(value, min_digits);
    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).expect("hex digits are ascii"))
        .collect::<Vec<_>>()
        .join(" ")
}
