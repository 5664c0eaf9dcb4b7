#![allow(clippy::result_large_err, clippy::type_complexity)]
#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  self::{
    arguments::Arguments,
    config::Config,
    error::{
      DecodeResult, InvalidInscriptionStructure, NoInscriptionFound, NoTapscript, NonMinimalPush,
    },
    inscriptions::tag::Tag,
    options::Options,
    script::{
      opcodes::{self, Class, ClassifyContext, Opcode, Ordinary},
      Instruction, Instructions,
    },
    settings::Settings,
    subcommand::{OutputFormat, Subcommand, SubcommandResult},
  },
  anyhow::{anyhow, bail, Context, Error},
  bitcoin::{
    blockdata::constants::MAX_SCRIPT_ELEMENT_SIZE,
    consensus,
    hashes::Hash,
    taproot::TAPROOT_ANNEX_PREFIX,
    Transaction, Txid, Witness,
  },
  clap::{ArgGroup, Parser, ValueEnum},
  derive_more::Display,
  serde::{Deserialize, Serialize},
  serde_with::{DeserializeFromStr, SerializeDisplay},
  snafu::{ensure, Snafu},
  std::{
    collections::BTreeMap,
    env,
    fmt::{self, Formatter},
    fs::{self, File},
    io::{self, Cursor, Read},
    path::{Path, PathBuf},
    process,
    str::{self, FromStr},
  },
};

pub use self::{
  chain::Chain,
  error::DecodeError,
  inscriptions::{
    Curse, Envelope, FieldParser, Inscription, InscriptionId, InscriptionParser, InscriptionResult,
    Protocol, Sequential, Tagged,
  },
};


#[cfg(test)]
use self::test::*;

mod arguments;
pub mod chain;
mod config;
mod error;
pub mod inscriptions;
pub mod options;
pub mod script;
mod settings;
pub mod subcommand;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn default<T: Default>() -> T {
  Default::default()
}

pub fn main() {
  env_logger::init();

  let args = Arguments::parse();

  let format = args.options.format;

  match args.run() {
    Err(err) => {
      eprintln!("error: {err}");

      for (i, err) in err.chain().skip(1).enumerate() {
        if i == 0 {
          eprintln!();
          eprintln!("because:");
        }

        eprintln!("- {err}");
      }

      if env::var_os("RUST_BACKTRACE")
        .map(|val| val == "1")
        .unwrap_or_default()
      {
        eprintln!("{}", err.backtrace());
      }

      process::exit(1);
    }
    Ok(output) => {
      if let Some(output) = output {
        output.print(format.unwrap_or_default());
      }
    }
  }
}
