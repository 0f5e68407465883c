//! TUI rendering traits for formation calendar types.
//!
//! Extension traits that add colored terminal rendering to core types using
//! owo_colors.

use formation_calendar_core::{BusinessProfile, Category, ComplianceEvent, MonthGroup};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text according to the event category
fn colorize(category: Category, text: &str) -> String {
    match category {
        Category::Tax => text.red().to_string(),
        Category::Compliance => text.blue().to_string(),
        Category::Planning => text.green().to_string(),
    }
}

impl Render for Category {
    fn render(&self) -> String {
        format!("{} {}", colorize(*self, "■"), self.label())
    }
}

impl Render for ComplianceEvent {
    fn render(&self) -> String {
        let date = colorize(self.category, &format!("{:<6}", self.short_date()));
        let mut line = format!("{} {}", date, colorize(self.category, &self.title).bold());

        line.push_str(&format!("\n         {}", self.description.dimmed()));

        if let Some(recurring) = self.recurring {
            let tag = format!("Recurring: {}", recurring);
            line.push_str(&format!("\n         {}", tag.dimmed()));
        }

        line
    }
}

impl Render for MonthGroup<'_> {
    fn render(&self) -> String {
        let mut lines = vec![self.label().bold().to_string()];
        lines.extend(self.events.iter().map(|e| format!("  {}", e.render())));
        lines.join("\n")
    }
}

impl Render for BusinessProfile {
    fn render(&self) -> String {
        if self.is_empty() {
            return "No saved profile".dimmed().to_string();
        }

        let fields = [
            ("Business name", self.business_name.clone()),
            ("Entity type", self.entity_type.clone()),
            ("Industry", self.industry.clone()),
            ("State", self.state.clone()),
            ("Formation date", self.formation_date.map(|d| d.to_string())),
        ];

        fields
            .into_iter()
            .map(|(label, value)| {
                let value = value.unwrap_or_else(|| "(none)".dimmed().to_string());
                format!("{} {}", format!("{}:", label).dimmed(), value)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Category legend, one swatch per category
pub fn render_legend() -> String {
    [Category::Tax, Category::Compliance, Category::Planning]
        .iter()
        .map(Render::render)
        .collect::<Vec<_>>()
        .join("   ")
}
