//! Integration tests for dirsize


use harness::{TestTree, parse_listing, run_dirsize};

#[test]
fn test_sum_exactly_one_megabyte() {
    let tree = TestTree::new();
    tree.add_file("a", 100);
    tree.add_file("b", 1_048_476);

    let (stdout, _stderr, success) = run_dirsize(tree.path(), &["--sum", "--align=false"]);
    assert!(success, "dirsize should succeed");
    assert_eq!(stdout, "1.00 MB\n");
}

#[test]
fn test_sum_aligned_by_default() {
    let tree = TestTree::new();
    tree.add_file("a", 100);
    tree.add_file("b", 1_048_476);

    let (stdout, _stderr, success) = run_dirsize(tree.path(), &["-s"]);
    assert!(success);
    assert_eq!(stdout, "    1.00 MB\n");
}

#[test]
fn test_listing_from_current_dir() {
    let tree = TestTree::new();
    tree.add_file("sub/big", 2_097_152);

    let (stdout, _stderr, success) = run_dirsize(tree.path(), &[]);
    assert!(success);
    assert_eq!(stdout, "sub  --     2.00 MB\n.    --     2.00 MB\n");
}

#[test]
fn test_listing_with_explicit_root() {
    let tree = TestTree::new();
    tree.add_file("root/sub/big", 2_097_152);
    tree.add_file("root/other/small", 1_048_576);

    let (stdout, _stderr, success) = run_dirsize(tree.path(), &["root", "--align=false"]);
    assert!(success);
    assert_eq!(
        stdout,
        "root/sub -- 2.00 MB\nroot/other -- 1.00 MB\nroot -- 3.00 MB\n"
    );
}

#[test]
fn test_listing_descending_order() {
    let tree = TestTree::new();
    tree.add_file("alpha/x", 10);
    tree.add_file("beta/y", 10);
    tree.add_file("beta/gamma/z", 10);
    tree.add_dir("Zeta");

    let (stdout, _stderr, success) = run_dirsize(tree.path(), &[]);
    assert!(success);
    let paths: Vec<String> = parse_listing(&stdout).into_iter().map(|(p, _)| p).collect();
    assert_eq!(
        paths,
        vec!["beta/gamma", "beta", "alpha", "Zeta", "."],
        "unexpected order: {}",
        stdout
    );
}

#[test]
fn test_listing_columns_aligned() {
    let tree = TestTree::new();
    tree.add_file("a/much/deeper/path/file", 1);
    tree.add_file("b/file", 1);

    let (stdout, _stderr, success) = run_dirsize(tree.path(), &[]);
    assert!(success);
    let positions: Vec<usize> = stdout.lines().map(|l| l.find(" -- ").unwrap()).collect();
    assert!(
        positions.windows(2).all(|w| w[0] == w[1]),
        "separator should line up: {}",
        stdout
    );
}

#[test]
fn test_ignore_dotfiles() {
    let tree = TestTree::new();
    tree.add_file(".hidden/secret", 500);
    tree.add_file(".env", 20);
    tree.add_file("visible", 1_048_576);

    let (stdout, _stderr, success) = run_dirsize(tree.path(), &["--ignore-dotfiles"]);
    assert!(success);
    assert!(!stdout.contains(".hidden"), "should skip dot dirs: {}", stdout);
    assert_eq!(parse_listing(&stdout), vec![(".".to_string(), "1.00 MB".to_string())]);
}

#[test]
fn test_dotfiles_counted_by_default() {
    let tree = TestTree::new();
    tree.add_file(".hidden/secret", 1_048_576);

    let (stdout, _stderr, success) = run_dirsize(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains(".hidden"), "should list dot dirs: {}", stdout);
}

#[test]
fn test_output_file() {
    let tree = TestTree::new();
    tree.add_file("data/f", 1_048_576);

    let (stdout, _stderr, success) = run_dirsize(tree.path(), &["data", "-o", "report.txt"]);
    assert!(success);
    assert!(stdout.is_empty(), "nothing should go to stdout: {}", stdout);

    let report = std::fs::read_to_string(tree.path().join("report.txt")).unwrap();
    assert_eq!(report, "data  --     1.00 MB\n");
}

#[test]
fn test_json_listing() {
    let tree = TestTree::new();
    tree.add_file("sub/f", 2_097_152);

    let (stdout, _stderr, success) = run_dirsize(tree.path(), &["--json"]);
    assert!(success);

    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    let entries = json.as_array().expect("listing should be an array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["path"], "sub");
    assert_eq!(entries[0]["bytes"], 2_097_152);
    assert_eq!(entries[1]["path"], ".");
    assert_eq!(entries[1]["size"], "2.00 MB");
}

#[test]
fn test_json_sum() {
    let tree = TestTree::new();
    tree.add_file("f", 1_048_576);

    let (stdout, _stderr, success) = run_dirsize(tree.path(), &["--json", "--sum"]);
    assert!(success);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["path"], ".");
    assert_eq!(json["bytes"], 1_048_576);
    assert_eq!(json["size"], "1.00 MB");
}

#[test]
fn test_rerun_is_identical() {
    let tree = TestTree::new();
    tree.add_file("a/b/c", 123_456);
    tree.add_file("d/e", 654_321);

    let (first, _, ok1) = run_dirsize(tree.path(), &[]);
    let (second, _, ok2) = run_dirsize(tree.path(), &[]);
    assert!(ok1 && ok2);
    assert_eq!(first, second);
}

#[test]
fn test_version_flag() {
    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_dirsize(tree.path(), &["--version"]);
    assert!(success);
    assert!(stdout.starts_with("dirsize "), "got: {}", stdout);
}
