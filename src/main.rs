fn main() {
    cordboot::app::cli::run();
}
