use miette::Result;

/// Main entry point for the deadlock-detector CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    deadlock_detector::run()
}
