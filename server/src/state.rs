use std::sync::Arc;

use crate::{
    config::Config,
    database::{init_redis, RedisStore},
    store::RecordStore,
};

pub struct State {
    pub config: Config,
    pub store: Arc<dyn RecordStore>,
}

impl State {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let connection = init_redis(&config.redis_url).await;
        let store = Arc::new(RedisStore::new(connection));

        Arc::new(Self { config, store })
    }

    /// State over an injected store, for tests and local runs without redis.
    pub fn with_store(config: Config, store: Arc<dyn RecordStore>) -> Arc<Self> {
        Arc::new(Self { config, store })
    }
}
