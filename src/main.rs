fn main() {
    applesoft::term::main();
}
