use anyhow::Context;
use create_matrix_common::MatrixError;
use create_matrix_core::{Invocation, USAGE};
use std::process;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // stdout carries only the declaration
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let invocation = match Invocation::from_args(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(MatrixError::ArgumentCount(count)) => {
            tracing::debug!("got {} arguments, printing usage", count);
            println!("{}", USAGE);
            process::exit(1);
        }
        Err(err) => return Err(err).context("Failed to read luma coefficients"),
    };

    println!("{}", invocation.matrix());
    Ok(())
}
