//! Tests for shell line parsing and command dispatch

use clap::Parser;
use rstest::rstest;

use rsbst::cli::args::{ShellCommand, ShellLine, StrategyArg};
use rsbst::cli::commands::{dispatch, run_line, Outcome};
use rsbst::config::Settings;
use rsbst::util::testing::init_test_setup;
use rsbst::{DeleteStrategy, Tree, TreeError};

fn parse(line: &str) -> ShellCommand {
    ShellLine::try_parse_from(line.split_whitespace())
        .expect("line should parse")
        .command
}

fn seeded_tree(keys: &[i64]) -> Tree<i64> {
    let mut tree = Tree::new();
    for &key in keys {
        tree.insert(key).expect("insert distinct key");
    }
    tree
}

#[test]
fn given_insert_line_when_dispatching_then_done_and_tree_grows() {
    // Arrange
    init_test_setup();
    let settings = Settings::default();
    let mut tree = Tree::new();

    // Act
    let outcome = dispatch(&mut tree, &settings, &parse("insert 5")).unwrap();

    // Assert
    assert_eq!(outcome, Outcome::Done("inserted 5".to_string()));
    assert!(tree.contains(&5));
}

#[test]
fn given_duplicate_insert_when_dispatching_then_error_propagates() {
    // Arrange
    let settings = Settings::default();
    let mut tree = seeded_tree(&[5]);

    // Act
    let result = dispatch(&mut tree, &settings, &parse("insert 5"));

    // Assert
    assert_eq!(result, Err(TreeError::DuplicateKey(5)));
}

#[rstest]
#[case("search 5", "5 found")]
#[case("search 6", "6 not found")]
fn given_search_line_when_dispatching_then_membership_reported(
    #[case] line: &str,
    #[case] expected: &str,
) {
    // Arrange
    let settings = Settings::default();
    let mut tree = seeded_tree(&[5, 3, 8]);

    // Act
    let outcome = dispatch(&mut tree, &settings, &parse(line)).unwrap();

    // Assert
    assert_eq!(outcome, Outcome::Report(expected.to_string()));
}

#[test]
fn given_attach_line_when_dispatching_then_leaf_added() {
    // Arrange
    let settings = Settings::default();
    let mut tree = seeded_tree(&[10]);

    // Act
    let outcome = dispatch(&mut tree, &settings, &parse("attach 10 15")).unwrap();

    // Assert
    assert_eq!(outcome, Outcome::Done("attached 15 under 10".to_string()));
    assert_eq!(tree.children_of(&10), Some((None, Some(&15))));
}

#[test]
fn given_no_strategy_flag_when_deleting_then_configured_default_applies() {
    // Arrange: the stock default is predecessor, so 4 should take the root
    let settings = Settings::default();
    assert_eq!(settings.default_strategy, DeleteStrategy::Predecessor);
    let mut tree = seeded_tree(&[5, 3, 8, 1, 4, 7, 9]);

    // Act
    let outcome = dispatch(&mut tree, &settings, &parse("delete 5")).unwrap();

    // Assert
    assert_eq!(outcome, Outcome::Done("deleted 5".to_string()));
    assert_eq!(tree.root_key(), Some(&4));
}

#[test]
fn given_strategy_flag_when_deleting_then_flag_overrides_default() {
    // Arrange
    let settings = Settings::default();
    let mut tree = seeded_tree(&[5, 3, 8, 1, 4, 7, 9]);

    // Act
    dispatch(&mut tree, &settings, &parse("delete 5 --strategy successor")).unwrap();

    // Assert
    assert_eq!(tree.root_key(), Some(&7));
}

#[test]
fn given_traversal_lines_when_dispatching_then_keys_space_joined() {
    // Arrange
    let settings = Settings::default();
    let mut tree = seeded_tree(&[5, 3, 8]);

    // Act & Assert
    let orders = [
        ("preorder", "5 3 8"),
        ("inorder", "3 5 8"),
        ("postorder", "3 8 5"),
        ("levels", "5 3 8"),
    ];
    for (line, expected) in orders {
        let outcome = dispatch(&mut tree, &settings, &parse(line)).unwrap();
        assert_eq!(outcome, Outcome::Report(expected.to_string()));
    }
}

#[test]
fn given_empty_tree_when_traversing_then_placeholder_reported() {
    // Arrange
    let settings = Settings::default();
    let mut tree = Tree::new();

    // Act
    let outcome = dispatch(&mut tree, &settings, &parse("inorder")).unwrap();

    // Assert
    assert_eq!(outcome, Outcome::Report("(empty)".to_string()));
}

#[test]
fn given_measure_lines_when_dispatching_then_labelled_numbers() {
    // Arrange
    let settings = Settings::default();
    let mut tree = seeded_tree(&[10, 5, 15, 3, 7]);

    // Act & Assert
    let measures = [
        ("height", "height: 3"),
        ("nodes", "nodes: 5"),
        ("leaves", "leaves: 3"),
        ("complete", "complete"),
        ("full", "not full"),
    ];
    for (line, expected) in measures {
        let outcome = dispatch(&mut tree, &settings, &parse(line)).unwrap();
        assert_eq!(outcome, Outcome::Report(expected.to_string()));
    }
}

#[test]
fn given_show_line_on_empty_tree_when_dispatching_then_reports_empty() {
    // Arrange
    let settings = Settings::default();
    let mut tree: Tree<i64> = Tree::new();

    // Act
    let outcome = dispatch(&mut tree, &settings, &parse("show")).unwrap();

    // Assert
    assert_eq!(outcome, Outcome::Report("empty tree".to_string()));
}

#[test]
fn given_show_line_when_dispatching_then_root_on_first_line() {
    // Arrange
    let settings = Settings::default();
    let mut tree = seeded_tree(&[10, 5, 15]);

    // Act
    let outcome = dispatch(&mut tree, &settings, &parse("show")).unwrap();

    // Assert
    let Outcome::Report(drawing) = outcome else {
        panic!("show should report a drawing");
    };
    let mut lines = drawing.lines();
    assert_eq!(lines.next(), Some("10"));
    assert_eq!(drawing.lines().count(), 3);
    assert!(drawing.contains("5 (L)"));
    assert!(drawing.contains("15 (R)"));
}

#[test]
fn given_clear_line_when_dispatching_then_tree_emptied() {
    // Arrange
    let settings = Settings::default();
    let mut tree = seeded_tree(&[5, 3, 8]);

    // Act
    let outcome = dispatch(&mut tree, &settings, &parse("clear")).unwrap();

    // Assert
    assert_eq!(outcome, Outcome::Done("tree cleared".to_string()));
    assert!(tree.is_empty());
}

#[rstest]
#[case("quit")]
#[case("exit")]
fn given_quit_line_or_alias_when_dispatching_then_session_ends(#[case] line: &str) {
    // Arrange
    let settings = Settings::default();
    let mut tree: Tree<i64> = Tree::new();

    // Act
    let outcome = dispatch(&mut tree, &settings, &parse(line)).unwrap();

    // Assert
    assert_eq!(outcome, Outcome::Quit);
}

#[test]
fn given_strategy_token_when_parsing_then_value_enum_recognized() {
    // Act
    let command = parse("delete 5 --strategy successor");

    // Assert
    assert_eq!(
        command,
        ShellCommand::Delete {
            key: 5,
            strategy: Some(StrategyArg::Successor),
        }
    );
}

#[test]
fn given_negative_key_when_parsing_then_not_mistaken_for_flag() {
    // Act
    let command = parse("insert -5");

    // Assert
    assert_eq!(command, ShellCommand::Insert { key: -5 });
}

#[test]
fn given_unknown_word_when_parsing_then_clap_rejects_line() {
    // Act
    let result = ShellLine::try_parse_from(["frobnicate"]);

    // Assert
    assert!(result.is_err());
}

#[test]
fn given_interactive_lines_when_running_then_errors_keep_session_alive() {
    // Arrange
    let settings = Settings::default();
    let mut tree = Tree::new();

    // Act: a parse failure, a tree error, and a valid mutation in sequence
    assert!(!run_line(&mut tree, &settings, "bogus words").unwrap());
    assert!(!run_line(&mut tree, &settings, "delete 9").unwrap());
    assert!(!run_line(&mut tree, &settings, "insert 9").unwrap());

    // Assert
    assert!(tree.contains(&9));
}

#[test]
fn given_blank_line_when_running_then_nothing_happens() {
    // Arrange
    let settings = Settings::default();
    let mut tree: Tree<i64> = Tree::new();

    // Act
    let ended = run_line(&mut tree, &settings, "   \n").unwrap();

    // Assert
    assert!(!ended);
    assert!(tree.is_empty());
}

#[test]
fn given_quit_line_when_running_then_session_ends() {
    // Arrange
    let settings = Settings::default();
    let mut tree: Tree<i64> = Tree::new();

    // Act
    let ended = run_line(&mut tree, &settings, "quit").unwrap();

    // Assert
    assert!(ended);
}
