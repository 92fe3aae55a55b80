//! Prints a sample session against the tree: bulk inserts, a rejected
//! duplicate, lookups of present and absent keys, and further growth.
//!
//! Run with `RUST_LOG=btree=trace` to watch individual splits.

use btree::{BTree, BTreeError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn print_tree(title: &str, tree: &BTree<i32, String>) {
    println!("{}", title);
    for (key, value) in tree.print() {
        println!("  {}: {}", key, value);
    }
}

fn main() -> Result<(), BTreeError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "btree=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Min 2, max 4 entries per node
    let mut tree = BTree::new(2)?;

    let values = [
        (50, "fifty"),
        (20, "twenty"),
        (70, "seventy"),
        (10, "ten"),
        (30, "thirty"),
        (60, "sixty"),
        (80, "eighty"),
        (5, "five"),
        (15, "fifteen"),
        (25, "twenty-five"),
        (35, "thirty-five"),
        (55, "fifty-five"),
        (65, "sixty-five"),
        (75, "seventy-five"),
        (85, "eighty-five"),
        (1, "one"),
        (7, "seven"),
        (12, "twelve"),
        (18, "eighteen"),
        (28, "twenty-eight"),
        (22, "twenty-two"),
        (33, "thirty-three"),
        (44, "forty-four"),
        (57, "fifty-seven"),
        (63, "sixty-three"),
        (77, "seventy-seven"),
        (90, "ninety"),
        (100, "hundred"),
    ];
    for (key, value) in values {
        tree.insert(key, value.to_string())?;
    }
    for key in (110..=400).step_by(10) {
        tree.insert(key, format!("number {}", key))?;
    }

    print_tree("After inserting values:", &tree);

    match tree.insert(1, "updated one".to_string()) {
        Ok(()) => println!("\nInserted key 1 again"),
        Err(e) => println!("\nCould not insert key 1: {}", e),
    }

    let key_to_find = 25;
    match tree.get(&key_to_find) {
        Ok(value) => println!("\nFound key {} with value: {}", key_to_find, value),
        Err(e) => println!("\nKey {} not found: {}", key_to_find, e),
    }

    let missing_key = 1000;
    if let Err(e) = tree.get(&missing_key) {
        println!("\nValue for non-existent key {}: Error: {}", missing_key, e);
    }

    for key in [500, 600, 700, 800, 900] {
        tree.insert(key, format!("number {}", key))?;
    }
    print_tree("\nAfter inserting more values:", &tree);

    tree.insert(1000, "thousand".to_string())?;
    print_tree("\nAfter inserting key 1000:", &tree);

    println!("\nStructure:\n{}", tree);
    Ok(())
}
