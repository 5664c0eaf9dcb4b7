use super::*;

#[derive(Serialize, Eq, PartialEq, Deserialize, Debug)]
pub struct Output {
  pub instructions: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

#[derive(Debug, Parser)]
pub(crate) struct Script {
  #[arg(help = "Disassemble hex-encoded <SCRIPT>.")]
  script: String,
  #[arg(long, help = "Reject pushes that do not use the smallest encoding.")]
  minimal: bool,
}

impl Script {
  pub(crate) fn run(self) -> SubcommandResult {
    let bytes = hex::decode(self.script.trim()).context("failed to decode script hex")?;

    Ok(Some(Box::new(self.disassemble(&bytes))))
  }

  fn disassemble(&self, bytes: &[u8]) -> Output {
    let instructions = if self.minimal {
      Instructions::minimal(bytes)
    } else {
      Instructions::new(bytes)
    };

    let mut output = Output {
      instructions: Vec::new(),
      error: None,
    };

    for instruction in instructions.encoded() {
      match instruction {
        Ok((opcode, Instruction::PushBytes(bytes))) if !bytes.is_empty() => output
          .instructions
          .push(format!("{opcode} {}", hex::encode(bytes))),
        Ok((opcode, _)) => output.instructions.push(opcode.to_string()),
        Err(err) => output.error = Some(err.to_string()),
      }
    }

    output
  }
}
