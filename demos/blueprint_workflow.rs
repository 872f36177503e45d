//! Blueprint Workflow
//!
//! This example describes the state table as JSON, binds it against a
//! registry of named callables, and walks it through the callback entry point.
//!
//! Run with: cargo run --example blueprint_workflow

use serde_json::json;
use statewalk::blueprint::{Blueprint, Registry};
use statewalk::StepError;
use stillwater::prelude::*;
use tracing_subscriber::EnvFilter;

const BLUEPRINT: &str = r#"{
    "start": {
        "work": "loadProblem",
        "params": ["problem-a"],
        "next": { "resolver": "pickStateAfterLoad" }
    },
    "loadImages": {
        "work": "findImages",
        "checkError": "onlyTimeouts",
        "next": "render"
    },
    "render": { "work": "render" }
}"#;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Blueprint Workflow Example ===\n");

    let registry: Registry<()> = Registry::new()
        .work("loadProblem", |args| {
            pure(vec![json!({ "id": args[0], "choices": [] })]).boxed()
        })
        .work("findImages", |_| fail(StepError::new("timeout")).boxed())
        .work("render", |_| pure(vec![json!("render value")]).boxed())
        .resolver("pickStateAfterLoad", |_| pure("loadImages".to_string()).boxed())
        .hook("onlyTimeouts", |error| match error {
            Some(error) if error.message() != "timeout" => fail(error).boxed(),
            _ => pure(()).boxed(),
        });

    let table = match Blueprint::from_json(BLUEPRINT).and_then(|b| b.bind(&registry)) {
        Ok(table) => table,
        Err(error) => {
            println!("Could not build table: {}", error);
            return;
        }
    };

    statewalk::walk(&table, &(), |result| match result {
        Ok(values) => println!("Done with {:?}", values),
        Err(error) => println!("Failed: {}", error),
    })
    .await;

    println!("\n=== Example Complete ===");
}
