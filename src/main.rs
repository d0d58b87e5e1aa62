use curlgen::status::ExitStatus;

/// Entry point - returns ExitStatus directly, which implements
/// std::process::Termination.
fn main() -> ExitStatus {
    let args: Vec<String> = std::env::args().collect();
    curlgen::core::run(args)
}
