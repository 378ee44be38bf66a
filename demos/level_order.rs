//! Builds a literal tree, prints it level by level, validates it, deletes a
//! key with two children and repeats.
//!
//! Set `BST_DELETE_SEED` to make the delete reproducible and `RUST_LOG` to
//! see the tree's own events.

use search_structures::{Bst, IteratorStopped, Node, TreeConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "search_structures=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match TreeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let root = Node::new(
        20,
        "val20",
        Some(Node::new(10, "val10", None, Some(Node::leaf(15, "val15")))),
        Some(Node::new(
            30,
            "val30",
            Some(Node::leaf(25, "val25")),
            Some(Node::new(
                40,
                "val40",
                Some(Node::new(32, "val32", None, Some(Node::leaf(34, "val34")))),
                Some(Node::leaf(42, "val42")),
            )),
        )),
    );
    let mut tree = Bst::with_config(Some(root), &config);

    print_and_validate(&tree);
    println!("=======");

    if let Err(e) = tree.delete(30) {
        tracing::error!("delete failed: {e}");
        std::process::exit(1);
    }
    print_and_validate(&tree);
}

fn print_and_validate(tree: &Bst) {
    let mut walk = tree.iter();
    loop {
        match walk.next_node() {
            Ok(node) => println!("{node}"),
            Err(IteratorStopped) => break,
        }
    }

    match tree.validate() {
        Ok(true) => {}
        Ok(false) => {
            tracing::error!("tree not valid");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("validation failed: {e}");
            std::process::exit(1);
        }
    }
}
