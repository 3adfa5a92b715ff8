//! folio CLI entry point
//!
//! # Examples
//!
//! ```bash
//! # Index a book with the default 106 lines per page
//! folio --input book.txt --output index.txt
//!
//! # Pipe through with a custom page height
//! folio --lines-per-page 40 < book.txt
//!
//! # Machine-readable index
//! folio --input book.txt --format json
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::cli::{output, run, Cli};

fn main() {
    // Initialize tracing; logs go to stderr so stdout stays a clean
    // index stream
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.message());
        // Configuration problems exit 2, runtime failures exit 1
        std::process::exit(if e.is_config() { 2 } else { 1 });
    }
}
