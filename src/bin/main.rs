fn main() {
  ord_inscriptions::main();
}
