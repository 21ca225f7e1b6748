pub mod config;
pub mod history;
pub mod log;
pub mod muscles;
pub mod reset;
pub mod status;

use chrono::{DateTime, Utc};
use fatigueboard_core::{AppState, Config, SnapshotStore};

/// Loaded state for one command invocation.
///
/// Opening applies any decay owed since the last evaluation, so every
/// command sees an up-to-date state.
pub struct Workspace {
    pub config: Config,
    pub store: SnapshotStore,
    pub state: AppState,
    pub now: DateTime<Utc>,
    /// Days of decay applied while opening
    pub decayed_days: u32,
}

impl Workspace {
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::load()?;
        let store = SnapshotStore::open()?;
        let now = Utc::now();
        let mut state = store.load_or_initial(now)?;
        let decayed_days = state.catch_up(now, &config.model);
        if decayed_days > 0 {
            tracing::info!(days = decayed_days, "applied pending decay");
        }
        Ok(Self {
            config,
            store,
            state,
            now,
            decayed_days,
        })
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.store.save(&self.state)?;
        Ok(())
    }
}
