mod console;

fn main() -> std::process::ExitCode {
    console::run_app()
}
