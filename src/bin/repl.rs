use dice_notation::{Evaluate, Expression};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Reads one notation per line and prints a roll, its bounds and its mean.
///
/// `RUST_LOG` controls log output on stderr; `DICE_SEED` makes a session
/// reproducible.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut rng = match std::env::var("DICE_SEED") {
        Ok(seed) => StdRng::seed_from_u64(seed.trim().parse()?),
        Err(_) => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(Ok(line)) = lines.next() {
        if !line.trim().is_empty() {
            match line.parse::<Expression>() {
                Ok(expr) => println!(
                    "{}  (min {}, max {}, mean {})",
                    expr.render_with(&mut rng),
                    expr.minimum(),
                    expr.maximum(),
                    expr.expectancy()
                ),
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
