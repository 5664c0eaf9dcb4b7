use super::*;

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Settings {
  chain: Chain,
  jubilee_height: u32,
  protocol: Protocol,
}

impl Settings {
  pub(crate) fn load(options: Options) -> Result<Self> {
    let config = match &options.config {
      Some(path) => Config::load(path)?,
      None => Config::default(),
    };

    Self::merge(options, config)
  }

  pub(crate) fn merge(options: Options, config: Config) -> Result<Self> {
    let chain = Self::setting_typed(options.chain(), Some("CHAIN"), config.chain, Chain::Mainnet)?;

    let protocol = Self::setting_typed(
      options.protocol,
      Some("PROTOCOL"),
      config.protocol,
      Protocol::Tagged,
    )?;

    let jubilee_height = Self::setting_typed(
      options.jubilee_height,
      Some("JUBILEE_HEIGHT"),
      config.jubilee_height,
      chain.jubilee_height(),
    )?;

    log::debug!("using {protocol} protocol on {chain} with jubilee height {jubilee_height}");

    Ok(Self {
      chain,
      jubilee_height,
      protocol,
    })
  }

  pub(crate) fn inscription_parser(&self) -> InscriptionParser {
    InscriptionParser {
      protocol: self.protocol,
      jubilee_height: self.jubilee_height,
    }
  }

  fn setting_typed<T>(
    arg_value: Option<T>,
    env_key: Option<&str>,
    config_value: Option<T>,
    default_value: T,
  ) -> Result<T>
  where
    T: FromStr,
    T::Err: Into<Error>,
  {
    if let Some(arg_value) = arg_value {
      return Ok(arg_value);
    }

    if let Some(env_key) = env_key {
      let key = format!("ORD_{env_key}");
      match env::var(&key) {
        Ok(env_value) => {
          return env_value
            .parse()
            .map_err(Into::<Error>::into)
            .with_context(|| anyhow!("failed to parse {key}"))
        }
        Err(err @ env::VarError::NotUnicode(_)) => return Err(err.into()),
        Err(env::VarError::NotPresent) => {}
      }
    }

    if let Some(config_value) = config_value {
      return Ok(config_value);
    }

    Ok(default_value)
  }
}
