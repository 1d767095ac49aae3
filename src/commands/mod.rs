//! Command implementations

mod draft;
mod feedback;
mod guests;
mod init;
mod lookup;
mod pick;

pub use draft::draft;
pub use feedback::feedback;
pub use guests::{guests, tables};
pub use init::init;
pub use lookup::lookup;
pub use pick::pick;

use seatfinder::config::Config;
use seatfinder::core::ports::DraftStore;
use seatfinder::core::services::VenuePage;

/// Build the page from configuration with the given draft store
fn load_page(config: &Config, drafts: Box<dyn DraftStore>) -> anyhow::Result<VenuePage> {
    VenuePage::new(config.directory()?, config.trigger_policy(), config.timing(), drafts)
}
