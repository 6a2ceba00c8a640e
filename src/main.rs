fn main() {
    modtree::cli::run();
}
