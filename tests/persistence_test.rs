use std::fs;
use stockroom::api::StockApi;
use stockroom::model::{Product, ProductUpdate};
use stockroom::store::fs_backend::FsBackend;
use stockroom::store::{load_file, save_file, StorageBackend};
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("inventory.csv"));
    (dir, backend)
}

#[test]
fn test_reference_example_on_disk() {
    let (dir, _) = setup();
    let path = dir.path().join("inventory.csv");
    let products = vec![
        Product::new(1, "Pen", 10, 100),
        Product::new(2, "Note, Big", 5, 250),
    ];

    save_file(&path, &products).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "id,name,quantity,price\n1,Pen,10,100\n2,\"Note, Big\",5,250\n"
    );
    assert_eq!(load_file(&path).unwrap().products, products);
}

#[test]
fn test_api_session_round_trip() {
    let (_dir, backend) = setup();
    let location = backend.path().to_path_buf();

    let mut api = StockApi::open(backend).unwrap();
    api.add_product(Product::new(1, "Widget, \"Deluxe\"", 3, 1999))
        .unwrap();
    api.add_product(Product::new(2, "消しゴム", 40, 60)).unwrap();
    api.update_product(
        1,
        &ProductUpdate {
            quantity: Some(2),
            ..Default::default()
        },
    )
    .unwrap();
    api.save().unwrap();

    let reopened = StockApi::open(FsBackend::new(&location)).unwrap();
    assert_eq!(
        reopened.inventory().list_all(),
        &[
            Product::new(1, "Widget, \"Deluxe\"", 2, 1999),
            Product::new(2, "消しゴム", 40, 60),
        ]
    );
}

#[test]
fn test_duplicate_ids_in_file_keep_first_and_are_dropped_on_save() {
    let (_dir, backend) = setup();
    fs::write(
        backend.path(),
        "id,name,quantity,price\n1,First,1,1\n2,Other,2,2\n1,Second,3,3\n",
    )
    .unwrap();

    let api = StockApi::open(backend).unwrap();
    assert_eq!(api.load_summary().duplicates.len(), 1);
    api.save().unwrap();

    let text = api.backend().read().unwrap().unwrap();
    assert_eq!(text, "id,name,quantity,price\n1,First,1,1\n2,Other,2,2\n");
}

#[test]
fn test_save_leaves_no_temp_files() {
    let (dir, backend) = setup();
    let api = StockApi::open(backend).unwrap();
    api.save().unwrap();
    api.save().unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}
