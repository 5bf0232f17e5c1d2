#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stockroom(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("STOCKROOM_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_list_and_file_contents() {
    let temp = TempDir::new().unwrap();

    stockroom(&temp)
        .args(["add", "1", "Pen", "10", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added (1): Pen"));

    stockroom(&temp)
        .args(["add", "2", "Note, Big", "5", "250"])
        .assert()
        .success();

    let on_disk = fs::read_to_string(temp.path().join("inventory.csv")).unwrap();
    assert_eq!(
        on_disk,
        "id,name,quantity,price\n1,Pen,10,100\n2,\"Note, Big\",5,250\n"
    );

    stockroom(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pen"))
        .stdout(predicate::str::contains("Note, Big"));
}

#[test]
fn test_first_run_lists_nothing() {
    let temp = TempDir::new().unwrap();

    stockroom(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("No products registered."));

    assert!(!temp.path().join("inventory.csv").exists());
}

#[test]
fn test_duplicate_add_fails_and_keeps_file() {
    let temp = TempDir::new().unwrap();

    stockroom(&temp)
        .args(["add", "1", "Pen", "10", "100"])
        .assert()
        .success();
    let before = fs::read_to_string(temp.path().join("inventory.csv")).unwrap();

    stockroom(&temp)
        .args(["add", "1", "Ink", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let after = fs::read_to_string(temp.path().join("inventory.csv")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_update_and_remove() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("inventory.csv"),
        "id,name,quantity,price\n4,Tape,1,50\n5,Stapler,2,900\n6,Clips,100,5\n",
    )
    .unwrap();

    stockroom(&temp)
        .args(["update", "5", "--quantity", "3", "--price", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated (5): Stapler"));

    stockroom(&temp)
        .args(["rm", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product removed (4): Tape"));

    stockroom(&temp)
        .args(["update", "4", "--name", "Gone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No product with id 4"));

    let on_disk = fs::read_to_string(temp.path().join("inventory.csv")).unwrap();
    assert_eq!(
        on_disk,
        "id,name,quantity,price\n5,Stapler,3,1200\n6,Clips,100,5\n"
    );
}

#[test]
fn test_search_by_name_and_id() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("inventory.csv"),
        "id,name,quantity,price\n1,Blue Widget,10,100\n2,Glue Stick,5,250\n",
    )
    .unwrap();

    stockroom(&temp)
        .args(["search", "lue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blue Widget"))
        .stdout(predicate::str::contains("Glue Stick").not());

    stockroom(&temp)
        .args(["search", "lue", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Glue Stick"));

    stockroom(&temp)
        .args(["search", "--id", "2", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Glue Stick\""));

    stockroom(&temp)
        .args(["search", "--id", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching product found."));
}

#[test]
fn test_malformed_lines_are_reported_and_skipped() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("inventory.csv"),
        "id,name,quantity,price\n1,Pen,10,100\nx,Ink,1,5\n",
    )
    .unwrap();

    stockroom(&temp)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Pen\""))
        .stdout(predicate::str::contains("Ink").not())
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_file_flag_and_env_var() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("custom.csv");

    stockroom(&temp)
        .args(["--file", custom.to_str().unwrap(), "add", "7", "Ruler", "4", "150"])
        .assert()
        .success();
    assert!(custom.exists());
    assert!(!temp.path().join("inventory.csv").exists());

    stockroom(&temp)
        .env("STOCKROOM_FILE", &custom)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ruler"));
}

#[test]
fn test_config_sets_data_file() {
    let temp = TempDir::new().unwrap();

    stockroom(&temp)
        .args(["config", "data-file", "stock/items.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file set to stock/items.csv"));

    stockroom(&temp)
        .args(["add", "1", "Pen", "10", "100"])
        .assert()
        .success();
    assert!(temp.path().join("stock").join("items.csv").exists());

    stockroom(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = stock/items.csv"));
}

#[test]
fn test_unreadable_inventory_is_an_error() {
    let temp = TempDir::new().unwrap();
    // A directory where the file should be cannot be read as text.
    fs::create_dir(temp.path().join("inventory.csv")).unwrap();

    stockroom(&temp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read"));
}

#[test]
fn test_load_warnings_print_once_without_verbose() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("inventory.csv"),
        "id,name,quantity,price\n1,Pen,10,100\nx,Ink,1,5\n",
    )
    .unwrap();

    let output = stockroom(&temp).arg("list").output().unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(output.status.success());
    assert!(stderr.contains("Loaded 1 products, ignored 1 records"));
    assert!(!stderr.contains("Skipping malformed record"));

    stockroom(&temp)
        .args(["-v", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping malformed record"));
}

#[test]
fn test_clean_load_prints_nothing_on_stderr() {
    let temp = TempDir::new().unwrap();
    stockroom(&temp)
        .args(["add", "1", "Pen", "10", "100"])
        .assert()
        .success();

    stockroom(&temp)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_names_with_stray_quotes_survive_a_save() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("inventory.csv");
    fs::write(
        &file,
        "id,name,quantity,price\n1,\"Best\" pen,1,1\n2,\"Best pen,1,1\n3,Big\",5,250\n",
    )
    .unwrap();

    stockroom(&temp)
        .args(["add", "4", "Ruler", "4", "150"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "id,name,quantity,price\n\
         1,\"\"\"Best\"\" pen\",1,1\n\
         2,\"\"\"Best pen\",1,1\n\
         3,\"Big\"\"\",5,250\n\
         4,Ruler,4,150\n"
    );
}

#[test]
fn test_plain_list_uses_fixed_width_rows() {
    let temp = TempDir::new().unwrap();
    stockroom(&temp)
        .args(["add", "1", "Pen", "10", "100"])
        .assert()
        .success();

    stockroom(&temp)
        .args(["list", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1     Pen             10       100     "));
}

#[test]
fn test_bad_config_key_exits_with_error() {
    let temp = TempDir::new().unwrap();

    stockroom(&temp)
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));

    stockroom(&temp)
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
    assert!(!temp.path().join("stockroom.json").exists());
}
