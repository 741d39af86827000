use miniclassifiers::prelude::*;
use miniclassifiers::research::{write_accuracy, write_output, write_tree};

mod common;
use common::*;


#[test]
fn output_file_is_tree_then_accuracies() {
    let sample = tennis();
    let tree = DecisionTree::default().produce(&sample).unwrap();

    let dir = std::env::temp_dir()
        .join(format!("miniclassifiers-report-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let output = dir.join("output.txt");
    write_output(&output, &tree, &[1.0, 0.5, 0.86]).unwrap();
    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("|outlook=overcast:yes\n"));
    assert!(text.ends_with("\t|humidity=normal:yes\n1.00\t0.50\t0.86"));

    let tree_file = dir.join("tree.txt");
    write_tree(&tree_file, &tree).unwrap();
    assert_eq!(std::fs::read_to_string(&tree_file).unwrap(), tree.to_string());

    let accuracy = dir.join("accuracy.txt");
    write_accuracy(&accuracy, &[0.29, 0.3, 0.0]).unwrap();
    assert_eq!(std::fs::read_to_string(&accuracy).unwrap(), "0.29\t0.30\t0.00");

    std::fs::remove_dir_all(&dir).unwrap();
}


#[test]
fn single_leaf_tree_writes_only_accuracies() {
    let sample = sample(b"a\tclass\nx\tno\ny\tno\n");
    let tree = DecisionTree::default().produce(&sample).unwrap();

    let path = std::env::temp_dir()
        .join(format!("miniclassifiers-leaf-{}.txt", std::process::id()));
    write_output(&path, &tree, &[0.5, 0.5, 0.5]).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "0.50\t0.50\t0.50");
    std::fs::remove_file(&path).unwrap();
}
