use minitrees::prelude::*;

use approx::assert_abs_diff_eq;
use std::collections::BTreeMap;


fn weather() -> ExampleTable {
    ExampleTable::from_rows([
        ["sunny", "hot",  "no"],
        ["sunny", "cool", "yes"],
        ["rainy", "cool", "yes"],
        ["rainy", "hot",  "no"],
    ]).unwrap()
}


// outlook ─┬─ sunny -> yes
//          └─ rainy -> no
fn outlook_tree() -> Node {
    let children = BTreeMap::from([
        ("sunny".to_string(), Node::leaf("yes")),
        ("rainy".to_string(), Node::leaf("no")),
    ]);
    Node::internal(0, "yes", children)
}


#[test]
fn classify_walks_down_to_a_leaf() {
    let tree = outlook_tree();
    assert_eq!(classify(&tree, &["sunny", "hot"]).unwrap(), "yes");
    assert_eq!(classify(&tree, &["rainy"]).unwrap(), "no");
    assert_eq!(classify(&Node::leaf("no"), &[] as &[&str]).unwrap(), "no");
}


#[test]
fn unseen_value_fails_by_default() {
    let tree = outlook_tree();
    let result = classify(&tree, &["cloudy", "hot"]);
    match result {
        Err(Error::UnseenValue { attribute, value }) => {
            assert_eq!(attribute, 0);
            assert_eq!(value, "cloudy");
        },
        other => panic!("expected an unseen value error, got {other:?}"),
    }
}


#[test]
fn unseen_value_falls_back_to_plurality() {
    let f = DecisionTreeClassifier::from(outlook_tree())
        .unseen_value_policy(UnseenValuePolicy::Plurality);
    assert_eq!(f.predict(&["cloudy"]).unwrap(), "yes");
    assert_eq!(f.predict(&["rainy"]).unwrap(), "no");
}


#[test]
fn short_example_is_an_error() {
    let table = weather();
    let f = DecisionTreeBuilder::new(&table)
        .build()
        .unwrap()
        .produce(&table)
        .unwrap();

    let result = f.predict(&["sunny"]);
    assert!(matches!(
        result,
        Err(Error::MissingField { attribute: 1, found: 1 })
    ));
}


#[test]
fn one_mistake_out_of_five() {
    let tree = outlook_tree();
    let test = ExampleTable::from_rows([
        ["sunny", "yes"],
        ["rainy", "no"],
        ["sunny", "yes"],
        ["rainy", "yes"],
        ["sunny", "yes"],
    ]).unwrap();

    let accuracy = test_for_accuracy(&tree, &test).unwrap();
    assert_abs_diff_eq!(accuracy.error_rate(), 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(accuracy.accuracy(), 0.8, epsilon = 1e-12);
    assert_eq!(accuracy.misclassified(), &[3]);
}


#[test]
fn accuracy_propagates_unseen_values() {
    let tree = outlook_tree();
    let test = ExampleTable::from_rows([
        ["sunny", "yes"],
        ["foggy", "no"],
    ]).unwrap();

    assert!(matches!(
        test_for_accuracy(&tree, &test),
        Err(Error::UnseenValue { .. })
    ));
}


#[test]
fn predict_all_keeps_the_row_order() {
    let table = weather();
    let f = DecisionTreeBuilder::new(&table)
        .build()
        .unwrap()
        .produce(&table)
        .unwrap();

    assert_eq!(f.predict_all(&table).unwrap(), vec!["no", "yes", "yes", "no"]);
}


#[test]
fn dot_output_labels_nodes_and_edges() {
    let table = weather()
        .with_attribute_names(["outlook", "temperature"])
        .unwrap();
    let f = DecisionTreeBuilder::new(&table)
        .build()
        .unwrap()
        .produce(&table)
        .unwrap();

    let dot = f.to_dot();
    assert!(dot.starts_with("digraph DecisionTree {"));
    assert!(dot.ends_with('}'));
    assert!(dot.contains("node_0 [ label = \"temperature\" ];"));
    assert!(dot.contains("node_0 -> node_1 [ label = \"cool\" ];"));
    assert!(dot.contains("node_0 -> node_2 [ label = \"hot\" ];"));
    assert!(dot.contains("node_1 [ label = \"yes\", shape = box, ];"));
    assert!(dot.contains("node_2 [ label = \"no\", shape = box, ];"));

    let mut path = std::env::temp_dir();
    path.push("minitrees_weather.dot");
    f.to_dot_file(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), dot);
}
