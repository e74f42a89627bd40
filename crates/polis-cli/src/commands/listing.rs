// Shared list driving for the entity commands
//
// `list` runs a ListController: reset load, then load_more until the
// requested page count or the end of the result set. `search` runs the
// debouncer over stdin lines, one settled term per reload.

use anyhow::Result;
use polis_core::{Debouncer, Entity, EntityGateway, ListController, ListState};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::user_error;

/// Fetch up to `pages` pages through a controller and return the final state
pub async fn fetch_pages<E, G>(
    gateway: G,
    search: Option<String>,
    pages: u32,
    page_size: u32,
) -> Result<ListState<E>>
where
    E: Entity,
    G: EntityGateway<E>,
{
    let controller = ListController::with_page_size(gateway, page_size);
    match search {
        Some(text) => controller.search(text).await,
        None => controller.load(true).await,
    }
    .map_err(user_error)?;

    for _ in 1..pages {
        if !controller.state().has_next {
            break;
        }
        controller.load_more().await.map_err(user_error)?;
    }
    Ok(controller.state())
}

/// Debounced interactive search over stdin lines
///
/// Renders after the initial load and after every settled term; failures land
/// in the rendered state's error field rather than aborting the session.
pub async fn interactive_search<E, G, F>(gateway: G, page_size: u32, render: F) -> Result<()>
where
    E: Entity,
    G: EntityGateway<E>,
    F: Fn(&ListState<E>),
{
    let controller = ListController::with_page_size(gateway, page_size);
    let _ = controller.load(true).await;
    render(&controller.state());

    let (debouncer, mut terms) = Debouncer::with_default_window();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            debouncer.input(line.trim());
        }
    });

    while let Some(term) = terms.recv().await {
        let _ = controller.search(term).await;
        render(&controller.state());
    }
    controller.invalidate();
    Ok(())
}
