//! Binary entry point for the `compbench` benchmark driver.
//!
//! Dispatch order follows the classic driver: create the session, announce
//! the algorithm, load the corpus, size the output buffer, then hand off to
//! the benchmark runner. All resources are released by RAII on every exit
//! path, including early failures.

use clap::Parser;

use compbench::bench::report::print_summary;
use compbench::bench::run_benchmark;
use compbench::cli::{set_display_level, Cli};
use compbench::displaylevel;
use compbench::error::BenchError;
use compbench::input::load_input;
use compbench::session::create_session;

fn run(cli: &Cli) -> Result<(), BenchError> {
    let params = cli.session_params();
    let config = cli.bench_config();

    let mut session = create_session(&params)?;
    println!("Compression algorithm: {}", params.algorithm.label());

    let input = load_input(&cli.input_file)?;
    let out_buf_len = session.max_compressed_length(input.len());
    println!(
        "File {} read. Size is {}. Output buffer size is {}.",
        cli.input_file.display(),
        input.len(),
        out_buf_len,
    );

    let report = run_benchmark(session.as_mut(), &input, &config)?;
    print_summary(&report);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    set_display_level(cli.display_level());

    displaylevel!(
        3,
        "*** {} v{} ***\n",
        compbench::PROGRAM_NAME,
        compbench::VERSION_STRING
    );

    if let Err(e) = run(&cli) {
        displaylevel!(1, "{}: {}\n", compbench::PROGRAM_NAME, e);
        std::process::exit(e.exit_code());
    }
}
