//! Console demo for todo lists.
//!
//! Builds "Today's Todos", walks through the list operations and prints the
//! rendered list after each step, then runs a few folds.
//!
//! Rendering honours `TODOLIST_DONE_MARKER`, `TODOLIST_UNDONE_MARKER` and
//! `TODOLIST_HEADER_RULE`; logging honours `RUST_LOG`.

use anyhow::Context;
use serde_json::json;
use todolist_core::{RenderConfig, SharedTodo, Todo, TodoList, reduce};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RenderConfig::from_env().context("invalid render configuration")?;

    println!("=== Todo List Demo ===\n");

    let milk = SharedTodo::new(Todo::new("Buy milk"));
    let room = SharedTodo::new(Todo::new("Clean room"));
    let gym = SharedTodo::new(Todo::new("Go to gym"));

    println!("---- Adding to the list -----");
    let mut list = TodoList::new("Today's Todos");
    list.add(milk.clone());
    let _ = &mut list << room.clone();
    list.add(gym.clone());

    if let Err(error) = list.try_add(json!(1)) {
        println!("rejected: {error}");
    }
    println!("{}\n", list.render_with(&config));

    println!("---- Interrogating the list -----");
    println!("size: {}", list.size());
    if let (Some(first), Some(last)) = (list.first(), list.last()) {
        println!("first: {first}");
        println!("last: {last}");
    }
    println!("done?: {}", list.is_done());
    println!("item at 1: {}", list.item_at(1)?);
    if let Err(error) = list.item_at(100) {
        println!("item at 100: {error}");
    }

    println!("\n---- Marking items in the list -----");
    list.mark_done_at(1)?;
    println!("{}\n", list.render_with(&config));
    list.mark_undone_at(1)?;
    println!("{}\n", list.render_with(&config));
    list.mark_all_done();
    println!("{}", list.render_with(&config));

    println!("\n---- Selecting from the list -----");
    list.mark_all_undone();
    milk.mark_done();
    gym.mark_done();
    println!("{}\n", list.all_done().render_with(&config));
    println!("{}\n", list.all_not_done().render_with(&config));
    list.mark_done_by_title("Clean room");
    println!("{}", list.render_with(&config));
    if let Some(found) = list.find_by_title("Buy milk") {
        println!("found: {found}");
    }

    println!("\n---- Deleting from the list -----");
    let removed = list.remove_at(1)?;
    println!("removed: {removed}");
    println!("{}", list.render_with(&config));
    tracing::info!(remaining = list.size(), "list demo finished");

    println!("\n=== Folds ===\n");
    let numbers = [1, 2, 3, 4, 5];
    println!("{:?}", reduce(numbers, Some(1), |acc, n| acc + n));
    println!("{:?}", reduce(numbers, Some(10), |acc, n| acc + n));
    println!(
        "{:?}",
        reduce(["a", "b", "c"].map(String::from), None, |acc, value| acc + &value)
    );
    println!(
        "{:?}",
        reduce([vec!["1", "2"], vec!["a", "b"]], None, |mut acc, value| {
            acc.extend(value);
            acc
        })
    );

    println!("\n=== Demo Complete ===");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_demo=info,todolist_core=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
