use super::*;

#[derive(Clone, Default, Debug, Parser)]
#[command(group(
  ArgGroup::new("chains")
    .required(false)
    .args(&["chain_argument", "signet", "regtest", "testnet"]),
))]
pub struct Options {
  #[arg(long = "chain", value_enum, help = "Use <CHAIN>. [default: mainnet]")]
  pub(crate) chain_argument: Option<Chain>,
  #[arg(long, help = "Load configuration from <CONFIG>.")]
  pub(crate) config: Option<PathBuf>,
  #[arg(long, short, help = "Specify output format. [default: json]")]
  pub(crate) format: Option<OutputFormat>,
  #[arg(
    long,
    help = "Stop cursing pushnum and stutter envelopes at <JUBILEE_HEIGHT>. [default: chain jubilee height]"
  )]
  pub(crate) jubilee_height: Option<u32>,
  #[arg(
    long,
    value_enum,
    help = "Parse envelope fields with <PROTOCOL>. [default: tagged]"
  )]
  pub(crate) protocol: Option<Protocol>,
  #[arg(long, short, help = "Use regtest. Equivalent to `--chain regtest`.")]
  pub(crate) regtest: bool,
  #[arg(long, short, help = "Use signet. Equivalent to `--chain signet`.")]
  pub(crate) signet: bool,
  #[arg(long, short, help = "Use testnet. Equivalent to `--chain testnet`.")]
  pub(crate) testnet: bool,
}

impl Options {
  pub(crate) fn chain(&self) -> Option<Chain> {
    self
      .signet
      .then_some(Chain::Signet)
      .or(self.regtest.then_some(Chain::Regtest))
      .or(self.testnet.then_some(Chain::Testnet))
      .or(self.chain_argument)
  }
}
