use colored::Colorize;

use crate::{
    Learner,
    error::{Error, Result},
    classifier::test_for_accuracy,
    importance::{Importance, InformationGain, RandomImportance},
    sample::ExampleTable,
    tree::{DecisionTreeBuilder, UnseenValuePolicy},
};
use super::report::{Report, MetricSummary, TrialRecord};

use std::time::Instant;

const DEFAULT_TRIALS: usize = 20;
const DEFAULT_SEED: u64 = 1234;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// A struct that trains decision trees on a training table
/// with both the information gain and the random baseline,
/// and measures the error rates on the training and test tables.
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// let train = TableReader::default()
///     .file("/path/to/training.txt")
///     .read()
///     .unwrap();
/// let test = TableReader::default()
///     .file("/path/to/test.txt")
///     .read()
///     .unwrap();
///
/// let report = Experiment::new(&train, &test)
///     .n_trials(50)
///     .seed(777)
///     .verbose(true)
///     .run()
///     .unwrap();
/// report.to_csv_file("errors.csv").unwrap();
/// for summary in report.summaries() {
///     println!("{}: {}", summary.name(), summary.mean_test_error());
/// }
/// ```
pub struct Experiment<'a> {
    train: &'a ExampleTable,
    test: &'a ExampleTable,
    n_trials: usize,
    seed: u64,
    verbose: bool,
    policy: UnseenValuePolicy,
}


impl<'a> Experiment<'a> {
    /// Construct a new instance of `Experiment`.
    #[inline]
    pub fn new(train: &'a ExampleTable, test: &'a ExampleTable) -> Self {
        Self {
            train,
            test,
            n_trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
            verbose: false,
            policy: UnseenValuePolicy::default(),
        }
    }


    /// Set the number of trials.
    /// Default value is `20.`
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = n_trials;
        self
    }


    /// Set the seed of the random baseline.
    /// Trial `t` uses the seed `seed + t`.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `Experiment` prints the settings
    /// and the error rates of each trial.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Set the behavior on attribute values without a branch.
    /// Default value is [`UnseenValuePolicy::Fail`].
    #[inline]
    pub fn unseen_value_policy(mut self, policy: UnseenValuePolicy) -> Self {
        self.policy = policy;
        self
    }


    /// Run the trials.
    /// In each trial, the two metrics are trained concurrently.
    pub fn run(&self) -> Result<Report> {
        if self.n_trials == 0 {
            return Err(Error::Parameters(
                "the number of trials must be positive".to_string()
            ));
        }

        let mut gain = MetricSummary::new(InformationGain.name());
        let mut random = MetricSummary::new(RandomImportance::NAME);

        if self.verbose { self.print_stats(); }

        for trial in 1..=self.n_trials {
            let seed = self.seed.wrapping_add(trial as u64);
            let (g, r) = rayon::join(
                || self.trial(trial, InformationGain),
                || self.trial(trial, RandomImportance::seeded(seed)),
            );
            let (g, r) = (g?, r?);

            if self.verbose {
                print_record(gain.name(), &g);
                print_record(random.name(), &r);
            }

            gain.push(g);
            random.push(r);
        }

        Ok(Report::new(vec![gain, random]))
    }


    /// Trains a tree with `importance` and evaluates it.
    fn trial<I>(&self, trial: usize, importance: I) -> Result<TrialRecord>
        where I: Importance,
    {
        let learner = DecisionTreeBuilder::new(self.train)
            .importance(importance)
            .unseen_value_policy(self.policy)
            .build()?;

        // Start measuring time
        let now = Instant::now();
        let f = learner.produce(self.train)?;
        let time = now.elapsed().as_millis() as u64;

        let train_error = test_for_accuracy(&f, self.train)?.error_rate();
        let test_error = test_for_accuracy(&f, self.test)?.error_rate();

        if self.verbose && trial == 1 {
            let depth = f.root().depth();
            let leaves = f.root().n_leaves();
            println!(
                "    + {:<STAT_WIDTH$}\tdepth {depth}, {leaves} leaves",
                learner.importance_metric().name(),
            );
        }

        Ok(TrialRecord { trial, train_error, test_error, time })
    }


    /// print current settings.
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        let (n_train, n_attributes) = self.train.shape();
        let n_test = self.test.len();
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Training examples".bold(),
            n_train.to_string().bold().green(),
            "Test examples".bold(),
            n_test.to_string().bold().green(),
            "Attributes".bold(),
            n_attributes.to_string().bold().green(),
            "Trials".bold(),
            self.n_trials.to_string().bold().green(),
            "Unseen values".bold(),
            self.policy.to_string().bold().green(),
            "".bold(),
        );
        println!(
            "      {:>WIDTH$}\t{:<18}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "TRIAL".bold().red(),
            "IMPORTANCE".bold(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }
}


fn print_record(name: &str, record: &TrialRecord) {
    println!(
        "      {}\t{:<18}\t{}\t{}\t{}",
        format!("{:>WIDTH$}", record.trial).bold().red(),
        name,
        format!("{:>WIDTH$.PREC_WIDTH$}", record.train_error).bold().green(),
        format!("{:>WIDTH$.PREC_WIDTH$}", record.test_error).bold().yellow(),
        format!("{:>WIDTH$}ms", record.time).bold().cyan(),
    );
}
