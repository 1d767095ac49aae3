//! Feedback command - rate the evening and send feedback

use std::thread;
use std::time::Instant;

use log::info;
use seatfinder::config::Config;
use seatfinder::core::models::Notice;
use seatfinder::core::services::PageEvent;
use seatfinder::output::{FeedbackResult, OutputMode};

/// Fill in the form (falling back to saved drafts) and send it
pub fn feedback(
    name: Option<&str>,
    rating: u8,
    opinion: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let mut page = super::load_page(&config, config.draft_store())?;
    let now = Instant::now();

    if let Some(name) = name {
        page.name_input(name, now)?;
    }
    if let Some(opinion) = opinion {
        page.opinion_input(opinion)?;
    }
    if rating > 0 {
        page.stars().click(rating)?;
    }

    let ready_at = page.submit(now)?;
    info!("{}", page.submit_label());
    thread::sleep(ready_at.saturating_duration_since(Instant::now()));

    let sent = page
        .tick(Instant::now().max(ready_at))?
        .into_iter()
        .find_map(|event| match event {
            PageEvent::FeedbackSent { feedback } => Some(feedback),
            _ => None,
        })
        .ok_or_else(|| anyhow::anyhow!("feedback submission did not complete"))?;

    FeedbackResult {
        success: true,
        feedback: sent,
        message: Notice::FeedbackThanks.message(),
    }
    .render(mode);
    Ok(())
}
