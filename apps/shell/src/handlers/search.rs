use crate::models::args::SearchTarget;
use crate::services::{errors, render};
use anyhow::Result;
use gymhub::GymHub;
use gymhub::kernel::search::debounce_queries;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

const INPUT_BUFFER: usize = 64;

/// Search-as-you-type over stdin: every line is a keystroke-level query, only the
/// settled ones reach the backend.
pub async fn handle(hub: &GymHub, target: SearchTarget) -> Result<()> {
    let settings = &hub.config().search;
    let (tx, rx) = mpsc::channel(INPUT_BUFFER);
    let mut settled = debounce_queries(rx, Duration::from_millis(settings.debounce_ms));

    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).await.is_err() {
                break;
            }
        }
    });

    eprintln!("Type to search, Ctrl-D to finish.");
    while let Some(query) = settled.recv().await {
        if query.chars().count() < settings.min_chars {
            debug!(query = %query, min_chars = settings.min_chars, "Query too short, skipped");
            continue;
        }
        println!("\n🔎 {query}");
        if let Err(err) = run_query(hub, target, &query).await {
            eprintln!("✖ {}", errors::user_message(&err));
        }
    }

    reader.await?;
    Ok(())
}

async fn run_query(hub: &GymHub, target: SearchTarget, query: &str) -> Result<()> {
    match target {
        SearchTarget::Clients => render::people("clients", &hub.clients().search(query).await?),
        SearchTarget::Instructors => {
            render::people("instructors", &hub.instructors().search(query).await?);
        },
        SearchTarget::Receptionists => {
            render::people("receptionists", &hub.receptionists().search(query).await?);
        },
        SearchTarget::Administrators => {
            render::people("administrators", &hub.administrators().search(query).await?);
        },
        SearchTarget::Products => render::products(&hub.products().search(query).await?),
    }
    Ok(())
}
