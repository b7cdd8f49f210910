use fib_sequence::compute;
use tracing::info;
use tracing_subscriber::EnvFilter;

const N: isize = 15;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Calculating Fibonacci sequence for n={N}...");

    match compute(N) {
        Ok(seq) => println!("Result: {seq}"),
        Err(err) => println!("Error: {err}"),
    }
}
