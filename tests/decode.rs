use {super::*, ord_inscriptions::subcommand::decode::RawOutput};

fn hex(transaction: &Transaction) -> String {
  consensus::encode::serialize_hex(transaction)
}

#[test]
fn decode_from_file() {
  let transaction = transaction(&[hello()]);

  pretty_assert_eq!(
    CommandBuilder::new("decode --file transaction.bin")
      .write("transaction.bin", consensus::serialize(&transaction))
      .run_and_deserialize_output::<RawOutput>(),
    RawOutput {
      inscriptions: vec![InscriptionResult {
        inscription: text("hello"),
        input: 0,
        offset: 0,
        cursed: false,
        curse: None,
      }],
    }
  );
}

#[test]
fn decode_from_hex() {
  let transaction = transaction(&[Witness::new(), hello()]);

  pretty_assert_eq!(
    CommandBuilder::new(format!("decode --hex {}", hex(&transaction)))
      .run_and_deserialize_output::<RawOutput>(),
    RawOutput {
      inscriptions: vec![InscriptionResult {
        inscription: text("hello"),
        input: 1,
        offset: 0,
        cursed: true,
        curse: Some(Curse::NotInFirstInput),
      }],
    }
  );
}

#[test]
fn decode_from_stdin() {
  let transaction = transaction(&[hello()]);

  let output = CommandBuilder::new("decode")
    .stdin(consensus::serialize(&transaction))
    .run_and_deserialize_output::<RawOutput>();

  assert_eq!(output.inscriptions.len(), 1);
  assert_eq!(output.inscriptions[0].inscription, text("hello"));
}

#[test]
fn transaction_without_inscriptions() {
  CommandBuilder::new(format!(
    "--format minify decode --hex {}",
    hex(&transaction(&[Witness::new()]))
  ))
  .expected_stdout("{\"inscriptions\":[]}\n")
  .run();
}

#[test]
fn compact_output() {
  let transaction = transaction(&[envelope(&[
    b"ord",
    &[1],
    b"text/plain",
    &[1],
    b"text/html",
    &[],
    b"hi",
  ])]);

  CommandBuilder::new(format!(
    "--format minify decode --compact --hex {}",
    hex(&transaction)
  ))
  .expected_stdout(
    "{\"inscriptions\":[{\"input\":0,\"offset\":0,\"cursed\":true,\"curse\":\"duplicate-field\",\
    \"body\":\"6869\",\"content_type\":\"text/plain\",\"duplicate_field\":true}]}\n",
  )
  .run();
}

#[test]
fn height_controls_jubilee() {
  let script = Builder::new()
    .push_opcode(opcodes::OP_FALSE)
    .push_opcode(opcodes::all::OP_IF)
    .push_slice(push(b"ord"))
    .push_opcode(opcodes::all::OP_PUSHNUM_1)
    .push_slice(push(b"text/plain"))
    .push_slice(push(&[]))
    .push_slice(push(b"hello"))
    .push_opcode(opcodes::all::OP_ENDIF)
    .into_script();

  let transaction = transaction(&[Witness::from_slice(&[script.into_bytes(), Vec::new()])]);

  let before = CommandBuilder::new(format!("--regtest decode --height 109 --hex {}", hex(&transaction)))
    .run_and_deserialize_output::<RawOutput>();

  assert_eq!(before.inscriptions[0].curse, Some(Curse::Pushnum));
  assert_eq!(before.inscriptions[0].inscription, text("hello"));

  let after = CommandBuilder::new(format!("--regtest decode --height 110 --hex {}", hex(&transaction)))
    .run_and_deserialize_output::<RawOutput>();

  assert_eq!(after.inscriptions[0].curse, None);
}

#[test]
fn sequential_protocol() {
  let transaction = transaction(&[envelope(&[
    b"ord",
    &[1],
    b"text/plain",
    &[1],
    b"text/html",
    &[],
    b"hi",
  ])]);

  CommandBuilder::new(format!(
    "--protocol sequential --format minify decode --hex {}",
    hex(&transaction)
  ))
  .expected_stdout("{\"inscriptions\":[]}\n")
  .run();
}

#[test]
fn yaml_output() {
  CommandBuilder::new(format!(
    "--format yaml decode --hex {}",
    hex(&transaction(&[Witness::new()]))
  ))
  .expected_stdout("inscriptions: []\n\n")
  .run();
}

#[test]
fn invalid_hex_is_an_error() {
  CommandBuilder::new("decode --hex zz")
    .expected_exit_code(1)
    .stderr_regex("error: failed to decode transaction hex\n\nbecause:\n- .*\n")
    .run();
}

#[test]
fn truncated_transaction_is_an_error() {
  CommandBuilder::new("decode --hex 0200")
    .expected_exit_code(1)
    .stderr_regex("error: failed to deserialize transaction\n\nbecause:\n- .*")
    .run();
}

#[test]
fn missing_file_is_an_error() {
  CommandBuilder::new("decode --file missing.bin")
    .expected_exit_code(1)
    .stderr_regex("error: failed to read `missing.bin`\n\nbecause:\n- .*")
    .run();
}
