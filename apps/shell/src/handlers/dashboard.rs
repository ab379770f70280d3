use crate::services::render;
use anyhow::Result;
use chrono::NaiveDate;
use gymhub::GymHub;

pub async fn handle(hub: &GymHub, today: NaiveDate) -> Result<()> {
    let window = hub.config().memberships.expiring_window_days;
    let stats = hub.dashboard().load(today, window).await?;
    render::dashboard(&stats);
    Ok(())
}
