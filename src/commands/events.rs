use anyhow::Result;
use formation_calendar_core::{BusinessProfile, REFERENCE_YEAR, derive, group_by_month};
use owo_colors::OwoColorize;

use crate::render::{Render, render_legend};

pub fn run(profile: &BusinessProfile) -> Result<()> {
    let events = derive(profile);
    let groups = group_by_month(&events);

    println!("{}", format!("Compliance Calendar {}", REFERENCE_YEAR).bold());
    if let Some(name) = &profile.business_name {
        println!("{}", name.dimmed());
    }
    println!("{}", render_legend());

    for group in &groups {
        println!();
        println!("{}", group.render());
    }

    if profile.state_name().is_none() || profile.formation_date.is_none() {
        println!();
        println!(
            "{}",
            "Add --state and --formation-date (or run `formation-calendar profile init`) \
             to include your state's annual report deadline."
                .dimmed()
        );
    }

    Ok(())
}
