use clap::{Parser, ValueEnum};
use rand::rngs::OsRng;
use std::path::PathBuf;
use textbook_rsa::{BIT_LENGTH, ExponentKind, MILLER_RABIN_ROUNDS, RsaConfig, TrailingSpaces};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExponentArg {
    /// random exponent as wide as φ(n)
    FullWidth,
    /// 65537
    SmallFixed,
}

impl From<ExponentArg> for ExponentKind {
    fn from(arg: ExponentArg) -> Self {
        match arg {
            ExponentArg::FullWidth => ExponentKind::FullWidthRandom,
            ExponentArg::SmallFixed => ExponentKind::SmallFixed,
        }
    }
}

/// Encrypts a text file block by block with a fresh textbook RSA key and
/// checks that decryption gives it back.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// ASCII text to encrypt
    #[arg(short, long, default_value = "message.txt")]
    input: PathBuf,

    /// Modulus size in bits, a multiple of 16
    #[arg(long, default_value_t = BIT_LENGTH)]
    bits: usize,

    /// Miller-Rabin rounds per prime candidate
    #[arg(long, default_value_t = MILLER_RABIN_ROUNDS)]
    rounds: u32,

    #[arg(long, value_enum, default_value_t = ExponentArg::FullWidth)]
    exponent: ExponentArg,

    /// Keep trailing spaces of the text instead of stripping them per block
    #[arg(long)]
    exact_length: bool,
}

impl Args {
    fn config(&self) -> RsaConfig {
        RsaConfig {
            bit_length: self.bits,
            rounds: self.rounds,
            exponent: self.exponent.into(),
            trailing: if self.exact_length {
                TrailingSpaces::Exact
            } else {
                TrailingSpaces::Strip
            },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    log::info!("reading {}", args.input.display());
    let text = std::fs::read(&args.input).map_err(textbook_rsa::RsaError::from)?;

    let report = textbook_rsa::run(&text, &args.config(), &mut OsRng)?;
    println!("{report}");
    Ok(())
}
