//! Trains the decision tree, KNN, and Naive Bayes classifiers
//! on a training file and evaluates them on a test file.
use clap::Parser;
use colored::Colorize;

use miniclassifiers::prelude::*;
use miniclassifiers::research::{
    cross_validate,
    format_accuracy,
    write_accuracy,
    write_output,
    write_tree,
};

use std::path::PathBuf;
use std::process::ExitCode;


const OUTPUT_FILE: &str = "output.txt";
const TREE_FILE: &str = "tree.txt";
const ACCURACY_FILE: &str = "accuracy.txt";
const N_FOLDS: usize = 5;


/// Compare ID3, KNN, and Naive Bayes on tab-separated categorical data.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "miniclassifiers", version)]
struct Args {
    /// Training set (tab-separated, header line, label in the last column)
    train: PathBuf,

    /// Test set (same format as the training set)
    test: PathBuf,

    /// Directory the result files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Number of neighbors of KNN
    #[arg(short = 'k', long, default_value_t = 5)]
    neighbors: usize,

    /// Seed of the coin that breaks yes/no ties in the decision tree
    #[arg(short, long, default_value_t = 1234)]
    seed: u64,

    /// Also write the bare tree to `tree.txt`
    #[arg(long)]
    tree: bool,

    /// Also write 5-fold cross-validation accuracies
    /// on the training set to `accuracy.txt`
    #[arg(long)]
    cross_validation: bool,

    /// Save the decision tree as JSON
    #[arg(long, value_name = "PATH")]
    save_model: Option<PathBuf>,

    /// Print progress
    #[arg(short, long)]
    verbose: bool,
}


fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".bold().red());
            ExitCode::FAILURE
        },
    }
}


fn run(args: &Args) -> Result<()> {
    let train = SampleReader::default().file(&args.train).read()?;
    let test = SampleReader::default().file(&args.test).read()?;

    if args.verbose {
        let (n_train, n_feature) = train.shape();
        println!(
            "{}    {}    {}",
            format!("[FEATURES {n_feature:>5}]").bold().red(),
            format!("[TRAIN {n_train:>9}]").bold().green(),
            format!("[TEST {:>9}]", test.shape().0).bold().yellow(),
        );
    }

    let dtree = DecisionTreeBuilder::new().seed(args.seed).build();
    let knn = Knn::new(args.neighbors)?;
    let nbayes = NBayes::init();

    let tree = dtree.produce(&train)?;
    let dt_acc = tree.accuracy(&test)?;
    let knn_acc = knn.produce(&train)?.accuracy(&test)?;
    let nb_acc = nbayes.produce(&train)?.accuracy(&test)?;
    let accuracies = [dt_acc, knn_acc, nb_acc];

    if args.verbose {
        for (name, acc) in [dtree.name(), knn.name(), nbayes.name()]
            .into_iter()
            .zip(accuracies)
        {
            println!("  {:<24} {}", name, format_accuracy(acc).bold().blue());
        }
    }

    let path = args.output_dir.join(OUTPUT_FILE);
    write_output(&path, &tree, &accuracies)?;
    report_written(args, &path);

    if args.tree {
        let path = args.output_dir.join(TREE_FILE);
        write_tree(&path, &tree)?;
        report_written(args, &path);
    }

    if args.cross_validation {
        let cv = [
            cross_validate(&dtree, &train, N_FOLDS, args.verbose)?.average,
            cross_validate(&knn, &train, N_FOLDS, args.verbose)?.average,
            cross_validate(&nbayes, &train, N_FOLDS, args.verbose)?.average,
        ];
        let path = args.output_dir.join(ACCURACY_FILE);
        write_accuracy(&path, &cv)?;
        report_written(args, &path);
    }

    if let Some(path) = &args.save_model {
        std::fs::write(path, tree.to_json()?)?;
        report_written(args, path);
    }

    Ok(())
}


fn report_written(args: &Args, path: &std::path::Path) {
    if args.verbose {
        println!("{} {}", "wrote".bold().green(), path.display());
    }
}
