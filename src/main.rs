fn main() {
    if let Err(e) = barista::run() {
        eprintln!("barista failed to start: {}", e);
        std::process::exit(1);
    }
}
