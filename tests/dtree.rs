use minitrees::prelude::*;
use minitrees::tree::{
    decision_tree_learning,
    have_same_classification,
    plurality_value,
};


fn weather() -> ExampleTable {
    ExampleTable::from_rows([
        ["sunny", "hot",  "no"],
        ["sunny", "cool", "yes"],
        ["rainy", "cool", "yes"],
        ["rainy", "hot",  "no"],
    ]).unwrap()
}


fn tennis() -> ExampleTable {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/data/training.txt");
    TableReader::default()
        .file(path)
        .read()
        .unwrap()
}


fn leaf_label(node: &Node) -> &str {
    match node {
        Node::Leaf(leaf) => leaf.label(),
        Node::Internal(_) => panic!("expected a leaf, got {node:?}"),
    }
}


#[test]
fn splits_on_the_separating_attribute() {
    let table = weather();
    let all = table.all_examples();
    let tree = decision_tree_learning(
        &table, &all, &table.attributes(), &all, &InformationGain
    ).unwrap();

    let Node::Internal(root) = &tree else {
        panic!("expected an internal root, got {tree:?}");
    };
    assert_eq!(root.attribute(), 1);
    assert_eq!(root.children().len(), 2);
    assert_eq!(leaf_label(&root.children()["hot"]), "no");
    assert_eq!(leaf_label(&root.children()["cool"]), "yes");
}


#[test]
fn uniform_subset_is_a_leaf() {
    let table = weather();
    let subset = ExampleSubset::from(vec![1, 2]);

    assert_eq!(have_same_classification(&table, &subset), Some("yes"));
    for attributes in [table.attributes(), AttributeSet::new()] {
        let tree = decision_tree_learning(
            &table, &subset, &attributes, &table.all_examples(), &InformationGain
        ).unwrap();
        assert_eq!(tree, Node::leaf("yes"));
    }
}


#[test]
fn empty_subset_takes_parent_plurality() {
    let table = weather();
    let parent = ExampleSubset::from(vec![0, 1, 3]);
    let tree = decision_tree_learning(
        &table, &ExampleSubset::new(), &table.attributes(), &parent, &InformationGain
    ).unwrap();

    assert_eq!(Some(leaf_label(&tree)), plurality_value(&table, &parent));
    assert_eq!(leaf_label(&tree), "no");
}


#[test]
fn empty_subset_without_parent_fails() {
    let table = weather();
    let empty = ExampleSubset::new();
    let result = decision_tree_learning(
        &table, &empty, &table.attributes(), &empty, &InformationGain
    );
    assert!(matches!(result, Err(Error::EmptySubset)));
}


#[test]
fn no_attribute_left_takes_plurality() {
    let table = weather();
    let subset = ExampleSubset::from(vec![0, 1, 2]);
    let tree = decision_tree_learning(
        &table, &subset, &AttributeSet::new(), &subset, &InformationGain
    ).unwrap();

    assert_eq!(Some(leaf_label(&tree)), plurality_value(&table, &subset));
    assert_eq!(leaf_label(&tree), "yes");
}


#[test]
fn plurality_tie_is_the_smallest_label() {
    let table = weather();
    let all = table.all_examples();
    for _ in 0..10 {
        assert_eq!(plurality_value(&table, &all), Some("no"));
    }
    assert_eq!(plurality_value(&table, &ExampleSubset::new()), None);
    assert_eq!(have_same_classification(&table, &all), None);
}


#[test]
fn value_missing_from_subset_gets_parent_plurality() {
    let table = ExampleTable::from_rows([
        ["a", "x", "yes"],
        ["a", "y", "yes"],
        ["b", "x", "no"],
        ["a", "y", "no"],
        ["b", "z", "no"],
    ]).unwrap();
    let subset = ExampleSubset::from(vec![0, 1, 3]);
    let attributes = [1].into_iter().collect::<AttributeSet>();

    let tree = decision_tree_learning(
        &table, &subset, &attributes, &subset, &InformationGain
    ).unwrap();

    let Node::Internal(root) = &tree else {
        panic!("expected an internal root, got {tree:?}");
    };
    assert_eq!(root.attribute(), 1);
    assert_eq!(root.plurality(), "yes");
    assert_eq!(leaf_label(&root.children()["x"]), "yes");
    // tie between `yes` and `no`
    assert_eq!(leaf_label(&root.children()["y"]), "no");
    // no example of `subset` takes `z`
    assert_eq!(leaf_label(&root.children()["z"]), "yes");
}


#[test]
fn injected_metric_decides_the_root() {
    let table = weather();
    let all = table.all_examples();

    // Prefers the attribute with the largest index.
    let by_index = |_: &ExampleTable, _: &ExampleSubset, attribute: usize| {
        attribute as f64
    };
    let tree = decision_tree_learning(
        &table, &all, &table.attributes(), &all, &by_index
    ).unwrap();
    let Node::Internal(root) = &tree else { panic!("expected a split"); };
    assert_eq!(root.attribute(), 1);

    // Ties go to the smallest attribute.
    let constant = |_: &ExampleTable, _: &ExampleSubset, _: usize| 0.5;
    let tree = decision_tree_learning(
        &table, &all, &table.attributes(), &all, &constant
    ).unwrap();
    let Node::Internal(root) = &tree else { panic!("expected a split"); };
    assert_eq!(root.attribute(), 0);
    assert_eq!(tree.depth(), 2);
}


#[test]
fn tennis_tree_fits_the_training_data() {
    let table = tennis();
    let f = DecisionTreeBuilder::new(&table)
        .build()
        .unwrap()
        .produce(&table)
        .unwrap();

    let Node::Internal(root) = f.root() else {
        panic!("expected an internal root");
    };
    assert_eq!(root.attribute(), 0);
    assert_eq!(leaf_label(&root.children()["overcast"]), "yes");
    assert_eq!(f.root().depth(), 2);
    assert_eq!(f.root().n_leaves(), 5);
    assert_eq!(f.root().n_nodes(), 8);

    let accuracy = test_for_accuracy(&f, &table).unwrap();
    assert_eq!(accuracy.error_rate(), 0.0);
    assert!(accuracy.misclassified().is_empty());
}


#[test]
fn random_baseline_is_reproducible_and_fits() {
    let table = tennis();
    let grow = |seed| {
        DecisionTreeBuilder::new(&table)
            .importance(RandomImportance::seeded(seed))
            .build()
            .unwrap()
            .produce(&table)
            .unwrap()
    };

    let f = grow(7);
    assert_eq!(f, grow(7));

    // The training data has no contradicting examples.
    let accuracy = test_for_accuracy(&f, &table).unwrap();
    assert_eq!(accuracy.error_rate(), 0.0);
}


#[test]
fn builder_rejects_unknown_attributes() {
    let table = weather();
    let attributes = [0, 5].into_iter().collect::<AttributeSet>();
    let result = DecisionTreeBuilder::new(&table)
        .attributes(attributes)
        .build();

    assert!(matches!(
        result,
        Err(Error::AttributeOutOfRange { attribute: 5, n_attributes: 2 })
    ));
}


#[test]
fn learner_reports_its_settings() {
    let table = weather();
    let learner = DecisionTreeBuilder::new(&table)
        .build()
        .unwrap();

    assert_eq!(learner.name(), "Decision Tree");
    let info = learner.info().unwrap();
    assert!(info.contains(&("Importance", "Information gain".to_string())));
    assert!(learner.to_string().contains("Attributes: {0, 1}"));
}
