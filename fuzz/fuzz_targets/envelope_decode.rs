#![no_main]

use {
  bitcoin::Witness,
  libfuzzer_sys::fuzz_target,
  ord_inscriptions::{script::Instructions, Chain, InscriptionParser, Protocol},
};

fuzz_target!(|stack: Vec<Vec<u8>>| {
  for element in &stack {
    for instructions in [Instructions::new(element), Instructions::minimal(element)] {
      assert!(instructions.filter(Result::is_err).count() <= 1);
    }
  }

  let witness = Witness::from_slice(&stack);

  for protocol in [Protocol::Tagged, Protocol::Sequential] {
    let parser = InscriptionParser::new(Chain::Mainnet, protocol);

    if let Ok(results) = parser.parse_input(0, &witness, 0) {
      assert!(results.windows(2).all(|pair| pair[0].offset < pair[1].offset));
    }
  }
});
