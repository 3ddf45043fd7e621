//! Devig command implementation

use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::devig::{overround, Devigger, LinearMethod, PowerMethod};

/// Devig method selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Power,
    Linear,
}

#[derive(Args, Debug)]
pub struct DevigArgs {
    /// Implied probabilities for every outcome of the market
    #[arg(required = true, num_args = 1..)]
    pub probabilities: Vec<f64>,

    /// Devig method
    #[arg(long, value_enum, default_value = "power")]
    pub method: MethodArg,
}

impl DevigArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        println!("Overround: {:+.2}%", overround(&self.probabilities) * 100.0);

        let fair = match self.method {
            MethodArg::Power => {
                let solver =
                    PowerMethod::new(config.devig.max_iterations, config.devig.tolerance);
                let result = solver.solve(&self.probabilities);
                tracing::info!(
                    exponent = result.exponent,
                    iterations = result.iterations,
                    converged = result.converged,
                    "Power devig"
                );
                result.fair
            }
            MethodArg::Linear => LinearMethod.devig(&self.probabilities),
        };

        for (raw, fair) in self.probabilities.iter().zip(&fair) {
            println!("{raw:.4} -> {fair:.4}");
        }
        println!("Sum: {:.4}", fair.iter().sum::<f64>());
        Ok(())
    }
}
