//! Minimal stand-in for the editor side panel: one persisted list, a
//! redraw observer, a few focus events, one delete command, then a
//! "restart" that reloads the list from disk.

use recent::{FileUri, OpenDocument, RecentList, RecentListConfig};
use store::backend::rocks::RocksStore;

fn document(path: &str) -> OpenDocument {
    OpenDocument::new(FileUri::parse(&format!("file://{path}")), path)
}

fn print_panel<S: store::Store>(list: &RecentList<S>) {
    println!("recently opened:");
    for entry in list.entries() {
        println!("  {entry}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let dir = tempfile::tempdir()?;

    let mut list = RecentList::init(
        RocksStore::open_or_create_database(dir.path())?,
        RecentListConfig::recently_opened(),
    )?;
    list.subscribe(|| println!("(panel refresh)"));

    list.seed_open_documents(vec![document("/demo/main.rs"), document("/demo/lib.rs")])?;

    // focus events
    list.touch(&document("/demo/parser.rs"))?;
    list.touch(&document("/demo/main.rs"))?;

    // delete command on one entry
    list.remove(&FileUri::parse("file:///demo/lib.rs"))?;

    print_panel(&list);

    // session restart: a fresh manager over the same store
    drop(list);
    let list = RecentList::init(
        RocksStore::open_or_create_database(dir.path())?,
        RecentListConfig::recently_opened(),
    )?;

    println!("after restart:");
    print_panel(&list);

    Ok(())
}
