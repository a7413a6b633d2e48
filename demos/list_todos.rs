//! List and create todos against a running backend.
//!
//! ```bash
//! API_URL=http://localhost:8000 RUST_LOG=api_fetch=debug cargo run --example list_todos
//! ```
//!
//! Set `SESSION_DIR` to a directory containing `auth_session.json` to send
//! the stored bearer token.

use std::sync::Arc;

use api_fetch::prelude::*;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Todo {
    id: serde_json::Value,
    title: String,
    #[serde(default)]
    completed: bool,
}

#[derive(Serialize)]
struct NewTodo<'a> {
    title: &'a str,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut builder = ApiClient::builder()
        .config(ClientConfig::from_env())
        .with_http_interceptor(Arc::new(LoggingInterceptor));
    if let Ok(dir) = std::env::var("SESSION_DIR") {
        builder = builder.session_store(FileSessionStore::new(dir));
    }
    let client = builder.build()?;

    let created = client
        .post::<Todo, _>("/todos", Some(&NewTodo { title: "try api-fetch" }), None)
        .await;
    if let Some(error) = &created.error {
        println!("create failed: {error}");
    }

    match client.get::<Vec<Todo>>("/todos", None).await.into_result() {
        Ok(todos) => {
            for todo in todos.unwrap_or_default() {
                let mark = if todo.completed { "x" } else { " " };
                println!("[{mark}] {} {}", todo.id, todo.title);
            }
        }
        Err(message) => println!("list failed: {message}"),
    }

    Ok(())
}
