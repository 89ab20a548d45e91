use primer::metrics::SingleTargetRegression;
use primer::summary::describe;
use primer::traits::{Fit, Predict};
use primer_linear::{fit_line, linregress, LinearRegression};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let (x, y) = primer_datasets::sample_points();

    println!("predictor\n{}\n", describe(&x)?);
    println!("outcome\n{}\n", describe(&y)?);

    // fit by hand
    let line = fit_line(&x, &y)?;
    let (dx, dy) = line.centered(&x, &y)?;
    println!("{:>6} {:>6} {:>8} {:>8}", "x", "y", "x - x̄", "y - ȳ");
    for i in 0..x.len() {
        println!("{:>6.2} {:>6.2} {:>8.3} {:>8.3}", x[i], y[i], dx[i], dy[i]);
    }
    println!(
        "\nhand fit:   y = {:.6} + {:.6} x",
        line.intercept(),
        line.slope()
    );

    // cross-check with the statistics routine
    let reference = linregress(&x, &y)?;
    println!(
        "linregress: y = {:.6} + {:.6} x (r = {:.4}, p = {:.4}, stderr = {:.4})",
        reference.intercept, reference.slope, reference.rvalue, reference.pvalue, reference.stderr
    );

    // and with ordinary least squares on a dataset
    let dataset = primer_datasets::sample()?;
    let model = LinearRegression::new().fit(&dataset)?;
    println!(
        "ols:        y = {:.6} + {:.6} x",
        model.intercept(),
        model.params()[0]
    );

    let predicted = model.predict(&dataset);
    let residuals = predicted.residuals(&y)?;
    println!("\n{:>6} {:>6} {:>8} {:>9}", "x", "y", "ŷ", "residual");
    for i in 0..x.len() {
        println!(
            "{:>6.2} {:>6.2} {:>8.3} {:>9.3}",
            x[i], y[i], predicted[i], residuals[i]
        );
    }

    println!("\nrmse (hand fit): {:.6}", line.rmse(&x, &y)?);
    println!("rmse (ols):      {:.6}", predicted.root_mean_squared_error(&y)?);

    Ok(())
}
