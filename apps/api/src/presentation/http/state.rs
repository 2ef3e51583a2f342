use crate::{
    application::load_dataset::use_case::DatasetLoader,
    config::Config,
    domain::{
        dataset::source::DatasetSource, layer::registry::LayerRegistry,
        notice::channel::NoticeChannel,
    },
    infrastructure::{
        feed::{self, FeedSender},
        map::published_surface::PublishedMapSurface,
        notices::notice_board::NoticeBoard,
    },
};
use std::sync::Arc;

const FEED_CAPACITY: usize = 100;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registry: Arc<LayerRegistry>,
    pub loader: Arc<DatasetLoader>,
    pub surface: Arc<PublishedMapSurface>,
    pub notices: Arc<NoticeBoard>,
    pub feed: FeedSender,
}

impl AppState {
    /// Wires the registry, surface, notice board and loader around `source`.
    pub fn new(config: Config, source: Arc<dyn DatasetSource>) -> Self {
        let feed = feed::channel(FEED_CAPACITY);
        let surface = Arc::new(PublishedMapSurface::new(feed.clone()));
        let notices = Arc::new(NoticeBoard::new(config.notice_history_limit, feed.clone()));
        let registry = Arc::new(LayerRegistry::new(surface.clone()));
        let loader = Arc::new(DatasetLoader::new(
            source,
            registry.clone(),
            notices.clone() as Arc<dyn NoticeChannel>,
        ));

        Self {
            config,
            registry,
            loader,
            surface,
            notices,
            feed,
        }
    }
}
