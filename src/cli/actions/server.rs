use crate::cli::actions::Action;
use crate::ensaluti::new;
use crate::store::Store;
use anyhow::Result;
use tracing::info;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port, store } => {
            info!("Using credential store {}", store.display());

            let store = Store::new(store);

            new(port, store).await?;
        }
    }

    Ok(())
}
