use primer::traits::{Fit, Predict};
use primer_logistic::{LogisticRegression, Result as LogisticResult};
use rand::{rngs::SmallRng, SeedableRng};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let dataset = primer_datasets::grades_classification()?;

    // 70% for training, same pass rate in both partitions
    let mut rng = SmallRng::seed_from_u64(42);
    let (train, test) = dataset.stratified_split_with_ratio(0.7, &mut rng)?;
    println!(
        "training on {} students, testing on {}",
        train.nsamples(),
        test.nsamples()
    );

    let fitted: LogisticResult<_> = LogisticRegression::params().fit(&train);
    let model = fitted?;
    println!(
        "P(pass | hours) = sigm({:.4} + {:.4} * hours), boundary at {:.2} hours",
        model.intercept(),
        model.params()[0],
        -model.intercept() / model.params()[0]
    );

    let predicted = model.predict(&test);
    let probabilities = model.predict_probabilities(test.records());
    println!("\n{:>6} {:>7} {:>9} {:>6}", "hours", "passed", "predicted", "prob");
    for (i, row) in test.records().outer_iter().enumerate() {
        println!(
            "{:>6.1} {:>7} {:>9} {:>6.3}",
            row[0],
            test.targets()[i],
            predicted[i],
            probabilities[i]
        );
    }

    let cm = model.confusion_matrix(&test)?;
    println!("\naccuracy: {:.3}", cm.accuracy());
    println!("\n{}", cm);

    Ok(())
}
