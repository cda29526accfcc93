use std::process::ExitCode;

fn main() -> ExitCode {
    scanline_cli::run()
}
