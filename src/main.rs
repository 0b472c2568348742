fn main() {
    teeny::term::main()
}
