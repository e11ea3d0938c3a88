//! Command-line interface for `aes-block`.

#![forbid(unsafe_code)]

mod kat;
mod telemetry;

use aes_block::{block_from_slice, Aes, Aes128, Aes192, Aes256, KeySchedule, Variant};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

/// Single-block AES CLI.
#[derive(Parser)]
#[command(
    name = "aesblk",
    version,
    author,
    about = "FIPS-197 AES single-block encryption"
)]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

/// Key size selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    Aes128,
    Aes192,
    Aes256,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Encrypt {
        /// Key size.
        #[arg(long, value_enum, default_value_t = VariantArg::Aes128)]
        variant: VariantArg,
        /// Cipher key as hex (32, 48 or 64 characters).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the expanded key schedule, one round key per line.
    Expand {
        /// Key size.
        #[arg(long, value_enum, default_value_t = VariantArg::Aes128)]
        variant: VariantArg,
        /// Cipher key as hex.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Run the FIPS-197 known-answer checks.
    Check,
    /// Encrypt a random block under a random key.
    Demo {
        /// Key size.
        #[arg(long, value_enum, default_value_t = VariantArg::Aes128)]
        variant: VariantArg,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;
    match cli.command {
        Commands::Encrypt {
            variant,
            key_hex,
            block_hex,
        } => cmd_encrypt(variant, &key_hex, &block_hex),
        Commands::Expand { variant, key_hex } => cmd_expand(variant, &key_hex),
        Commands::Check => cmd_check(),
        Commands::Demo { variant, seed } => cmd_demo(variant, seed),
    }
}

fn cmd_encrypt(variant: VariantArg, key_hex: &str, block_hex: &str) -> Result<()> {
    let ciphertext = match variant {
        VariantArg::Aes128 => encrypt_hex::<Aes128>(key_hex, block_hex)?,
        VariantArg::Aes192 => encrypt_hex::<Aes192>(key_hex, block_hex)?,
        VariantArg::Aes256 => encrypt_hex::<Aes256>(key_hex, block_hex)?,
    };
    println!("{ciphertext}");
    Ok(())
}

fn cmd_expand(variant: VariantArg, key_hex: &str) -> Result<()> {
    let lines = match variant {
        VariantArg::Aes128 => format_schedule(load_cipher::<Aes128>(key_hex)?.schedule()),
        VariantArg::Aes192 => format_schedule(load_cipher::<Aes192>(key_hex)?.schedule()),
        VariantArg::Aes256 => format_schedule(load_cipher::<Aes256>(key_hex)?.schedule()),
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn cmd_check() -> Result<()> {
    let outcomes = kat::run_all()?;
    let mut failed = 0usize;
    for outcome in &outcomes {
        if outcome.passed() {
            println!("{}: ok", outcome.name);
        } else {
            failed += 1;
            println!(
                "{}: FAILED (expected {}, got {})",
                outcome.name, outcome.expected, outcome.actual
            );
        }
    }
    info!(total = outcomes.len(), failed, "known-answer checks finished");
    if failed > 0 {
        bail!("{failed} of {} known-answer checks failed", outcomes.len());
    }
    Ok(())
}

fn cmd_demo(variant: VariantArg, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let (key, plaintext, ciphertext) = match variant {
        VariantArg::Aes128 => random_encryption::<Aes128>(&mut rng)?,
        VariantArg::Aes192 => random_encryption::<Aes192>(&mut rng)?,
        VariantArg::Aes256 => random_encryption::<Aes256>(&mut rng)?,
    };
    println!("demo key: {key}");
    println!("plaintext: {plaintext}");
    println!("ciphertext: {ciphertext}");
    Ok(())
}

fn encrypt_hex<V: Variant>(key_hex: &str, block_hex: &str) -> Result<String> {
    let cipher = load_cipher::<V>(key_hex)?;
    let block = block_from_slice(&decode_hex(block_hex, "block")?)?;
    debug!(variant = V::NAME, "encrypting block");
    Ok(hex::encode(cipher.encrypt_block(&block)))
}

fn load_cipher<V: Variant>(key_hex: &str) -> Result<Aes<V>> {
    let bytes = decode_hex(key_hex, "key")?;
    Aes::<V>::from_key_bytes(&bytes).with_context(|| format!("load {} key", V::NAME))
}

fn decode_hex(hex_str: &str, what: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))
}

fn format_schedule<V: Variant>(schedule: &KeySchedule<V>) -> Vec<String> {
    (0..=schedule.rounds())
        .map(|round| {
            let words: Vec<String> = schedule
                .round_key(round)
                .iter()
                .map(|word| format!("{word:08x}"))
                .collect();
            format!("round {round:02}: {}", words.join(" "))
        })
        .collect()
}

fn random_encryption<V: Variant>(rng: &mut impl RngCore) -> Result<(String, String, String)> {
    let mut key_bytes = vec![0u8; V::KEY_BYTES];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut block);
    let cipher = Aes::<V>::from_key_bytes(&key_bytes)?;
    let ciphertext = cipher.encrypt_block(&block);
    Ok((
        hex::encode(key_bytes),
        hex::encode(block),
        hex::encode(ciphertext),
    ))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
