use minitrees::prelude::*;

use std::path::PathBuf;


fn read(name: &str) -> ExampleTable {
    let mut path: PathBuf = std::env::current_dir().unwrap();
    path.push("tests/data");
    path.push(name);
    TableReader::default()
        .file(path)
        .read()
        .unwrap()
}


#[test]
fn information_gain_against_random_baseline() {
    let train = read("training.txt");
    let test = read("test.txt");

    let report = Experiment::new(&train, &test)
        .n_trials(5)
        .seed(777)
        .run()
        .unwrap();

    assert_eq!(report.summaries().len(), 2);

    let gain = report.summary("Information gain").unwrap();
    assert_eq!(gain.records().len(), 5);
    assert!(gain.train_errors().iter().all(|&e| e == 0.0));
    assert!(gain.test_errors().iter().all(|&e| e == 0.0));
    assert_eq!(gain.mean_test_error(), 0.0);

    let random = report.summary("Random").unwrap();
    assert_eq!(random.records().len(), 5);
    assert!(random.train_errors().iter().all(|&e| e == 0.0));
    for r in random.records() {
        assert!((0.0..=1.0).contains(&r.test_error()));
    }
    assert!(random.min_test_error() <= random.mean_test_error());
    assert!(random.mean_test_error() <= random.max_test_error());
    let trials = random.records()
        .iter()
        .map(|r| r.trial())
        .collect::<Vec<_>>();
    assert_eq!(trials, vec![1, 2, 3, 4, 5]);
}


#[test]
fn same_seed_gives_the_same_errors() {
    let train = read("training.txt");
    let test = read("test.txt");

    let run = || {
        Experiment::new(&train, &test)
            .n_trials(3)
            .seed(99)
            .unseen_value_policy(UnseenValuePolicy::Plurality)
            .run()
            .unwrap()
    };
    let a = run();
    let b = run();
    assert_eq!(
        a.summary("Random").unwrap().test_errors(),
        b.summary("Random").unwrap().test_errors(),
    );
}


#[test]
fn zero_trials_is_rejected() {
    let train = read("training.txt");
    let result = Experiment::new(&train, &train)
        .n_trials(0)
        .run();
    assert!(matches!(result, Err(Error::Parameters(_))));
}


#[test]
fn report_as_csv_and_json() {
    let train = read("training.txt");
    let test = read("test.txt");
    let report = Experiment::new(&train, &test)
        .n_trials(2)
        .run()
        .unwrap();

    let mut path = std::env::temp_dir();
    path.push("minitrees_report.csv");
    report.to_csv_file(&path).unwrap();

    let csv = std::fs::read_to_string(&path).unwrap();
    let lines = csv.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "Trial,Importance,TrainError,TestError,Time");
    assert_eq!(lines.len(), 1 + 2 * 2);
    assert!(lines[1].starts_with("1,Information gain,0,0,"));

    let json = report.to_json().unwrap();
    assert!(json.contains("\"name\": \"Information gain\""));
    assert!(json.contains("\"name\": \"Random\""));
    assert!(json.contains("\"test_error\""));
}


#[test]
fn plot_test_errors_as_svg() {
    let train = read("training.txt");
    let test = read("test.txt");
    let report = Experiment::new(&train, &test)
        .n_trials(3)
        .run()
        .unwrap();

    let mut path = std::env::temp_dir();
    path.push("minitrees_errors.svg");
    let _ = std::fs::remove_file(&path);
    report.plot(&path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Information gain"));
    assert!(svg.contains("Random"));
}
