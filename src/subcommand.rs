use super::*;

pub mod decode;
pub mod script;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Json,
  Yaml,
  Minify,
}

pub trait Output: Send {
  fn print(&self, format: OutputFormat);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print(&self, format: OutputFormat) {
    let result = match format {
      OutputFormat::Json => serde_json::to_writer_pretty(io::stdout(), self).map_err(Error::from),
      OutputFormat::Yaml => serde_yaml::to_writer(io::stdout(), self).map_err(Error::from),
      OutputFormat::Minify => serde_json::to_writer(io::stdout(), self).map_err(Error::from),
    };

    if let Err(err) = result {
      log::error!("failed to write output: {err}");
    }

    println!();
  }
}

pub(crate) type SubcommandResult = Result<Option<Box<dyn Output>>>;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Decode inscriptions from a transaction")]
  Decode(decode::Decode),
  #[command(about = "Disassemble a script")]
  Script(script::Script),
}

impl Subcommand {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    match self {
      Self::Decode(decode) => decode.run(settings),
      Self::Script(script) => script.run(),
    }
  }
}
