use crate::{
    config::Config,
    presenter::{ShelfPresenter, ShelfState},
    services::{BookshelfService, GoogleBooksClient},
};
use anyhow::{bail, Context, Result};
use std::sync::Arc;
use tracing::info;

pub struct Application {
    config: Config,
}

impl Application {
    /// Create a new application instance
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Wire the Google Books client into a presenter primed with the default query
    pub fn presenter(&self) -> Result<ShelfPresenter> {
        let client = GoogleBooksClient::new(&self.config)
            .context("Failed to initialize Google Books client")?;
        let service = BookshelfService::new(Arc::new(client));

        let initial_query = self.config.default_query().unwrap_or_default();
        Ok(ShelfPresenter::new(Arc::new(service), initial_query))
    }

    /// Run the initial search and log what came back
    pub async fn run(&self) -> Result<()> {
        let presenter = self.presenter()?;
        let mut updates = presenter.subscribe();

        info!(
            "Searching {} for '{}'",
            self.config.base_url,
            presenter.last_query()
        );
        presenter.retry();

        let state = updates
            .wait_for(|state| !state.is_loading())
            .await
            .context("Presenter closed before the search settled")?
            .clone();

        match state {
            ShelfState::Success(books) => {
                info!("Found {} books", books.len());
                for book in &books {
                    info!("{} ({})", book.title, book.thumbnail_url);
                }
                Ok(())
            }
            ShelfState::Error(message) => bail!("Search failed: {}", message),
            ShelfState::Loading => unreachable!("waited for a settled state"),
        }
    }
}
