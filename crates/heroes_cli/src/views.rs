//! Text renderings of the list, detail and dashboard views.

use heroes_core::Hero;

const DASHBOARD_START: usize = 1;
const DASHBOARD_END: usize = 5;

/// Trims user input and rejects blank names before any request is made.
pub fn normalize_hero_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Top heroes shown on the dashboard: positions 1 through 4 of the list.
pub fn dashboard_heroes(heroes: &[Hero]) -> &[Hero] {
    let end = heroes.len().min(DASHBOARD_END);
    let start = DASHBOARD_START.min(end);
    &heroes[start..end]
}

pub fn render_list(title: &str, heroes: &[Hero]) -> String {
    let mut out = format!("{title}\n");
    if heroes.is_empty() {
        out.push_str("  (no heroes)\n");
    }
    for hero in heroes {
        out.push_str(&format!("  {hero}\n"));
    }
    out
}

pub fn render_detail(hero: Option<&Hero>) -> String {
    match hero {
        Some(hero) => format!(
            "{} Details\n  id: {}\n  name: {}\n",
            hero.name.to_uppercase(),
            hero.id,
            hero.name
        ),
        None => "  (no hero)\n".to_string(),
    }
}

pub fn render_messages(entries: &[String]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut out = "Messages\n".to_string();
    for entry in entries {
        out.push_str(&format!("  {entry}\n"));
    }
    out
}
