//! Problem Workflow
//!
//! This example walks a small table that loads a problem, fetches images
//! only when the problem lacks them, and then renders it.
//!
//! Key concepts:
//! - Dynamic routing with a next resolver
//! - Work that reads from an injected environment
//! - Error hooks that decide whether a failure is fatal
//!
//! Run with: cargo run --example problem_workflow

use serde_json::{json, Value};
use statewalk::effects::{State, StateTable, StateWalker, StepError, START};
use statewalk::Values;
use std::collections::HashMap;
use stillwater::prelude::*;
use tracing_subscriber::EnvFilter;

const IMAGE_URL: &str = "http://smidgeo.com/images/smidgeo_on_the_move.png";
const IMAGE_HOST_DOWN: &str = "image host unreachable";

/// Environment the work reads from.
#[derive(Clone)]
struct ProblemStore {
    problems: HashMap<String, Value>,
    image_url: Option<String>,
}

impl ProblemStore {
    fn sample() -> Self {
        let mut problems = HashMap::new();
        problems.insert(
            "problem-a".to_string(),
            json!({
                "id": "problem-a",
                "text": "<Your problem goes here.>",
                "choices": [
                    { "id": "choice-a", "text": "This is choice A." },
                    { "id": "choice-b", "text": "This is choice B." },
                    { "id": "choice-c", "text": "This is choice C." }
                ]
            }),
        );
        Self {
            problems,
            image_url: Some(IMAGE_URL.to_string()),
        }
    }
}

fn has_images(problem: &Value) -> bool {
    problem["choices"]
        .as_array()
        .is_some_and(|choices| choices.iter().all(|c| c["presenterImageURL"].is_string()))
}

fn table() -> StateTable<ProblemStore> {
    StateTable::new()
        .state(
            START,
            State::new(|args: Values| {
                let id = args[0].as_str().unwrap_or_default().to_string();
                from_fn(move |store: &ProblemStore| {
                    store
                        .problems
                        .get(&id)
                        .cloned()
                        .map(|problem| vec![problem])
                        .ok_or_else(|| StepError::new(format!("no problem named {id}")))
                })
                .boxed()
            })
            .params([json!("problem-a")])
            .next_with(|values| {
                let next = if has_images(&values[0]) { "render" } else { "loadImages" };
                pure(next.to_string()).boxed()
            }),
        )
        .state(
            "loadImages",
            State::new(|args: Values| {
                from_fn(move |store: &ProblemStore| {
                    let mut args = args.clone();
                    let Some(url) = store.image_url.clone() else {
                        return Err(StepError::new(IMAGE_HOST_DOWN).with_values(args));
                    };
                    if let Some(choices) = args[0]["choices"].as_array_mut() {
                        for choice in choices {
                            choice["presenterImageURL"] = json!(url);
                        }
                    }
                    Ok(args)
                })
                .boxed()
            })
            // A missing image host still lets the problem render without images.
            .check_error(|error| match error {
                Some(error) if error.message() != IMAGE_HOST_DOWN => fail(error).boxed(),
                _ => pure(()).boxed(),
            })
            .next("render"),
        )
        .state(
            "render",
            State::new(|args: Values| {
                let problem = &args[0];
                let mut page = format!("{}\n", problem["text"].as_str().unwrap_or_default());
                for choice in problem["choices"].as_array().into_iter().flatten() {
                    page.push_str(&format!(
                        "  [{}] {}\n",
                        choice["presenterImageURL"].as_str().unwrap_or("-"),
                        choice["text"].as_str().unwrap_or_default()
                    ));
                }
                pure(vec![json!(page)]).boxed()
            }),
        )
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Problem Workflow Example ===\n");

    let table = table();
    let store = ProblemStore::sample();

    let offline = ProblemStore {
        image_url: None,
        ..store.clone()
    };

    for (label, env) in [("image host up", &store), ("image host down", &offline)] {
        println!("--- {label} ---");
        let report = StateWalker::new(&table).run(env).await;

        println!("Path: {}", report.history.get_path().join(" -> "));
        match report.result {
            Ok(values) => println!("\nRendered:\n{}", values[0].as_str().unwrap_or_default()),
            Err(error) => println!("\nWalk failed: {}", error),
        }
    }

    println!("=== Example Complete ===");
}
