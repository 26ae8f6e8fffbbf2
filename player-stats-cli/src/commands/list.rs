use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use player_stats_catalog::{
    FilterSpec, Player, RatingTier, RosterStats, Selection, filter_roster, nation_options,
    position_options,
};

use super::render::rating_badge;
use crate::cli_types::FilterArgs;
use crate::client::ApiClient;
use crate::error::CliError;
use crate::spinner::with_spinner;

impl FilterArgs {
    pub(crate) fn to_spec(&self) -> FilterSpec {
        FilterSpec {
            search_text: self.search.clone(),
            position: Selection::parse(self.position.trim()),
            min_rating: self.min_rating,
            nation: Selection::parse(self.nation.trim()),
        }
    }
}

/// Fetch the roster, filter it locally and print stats plus a table.
pub(crate) fn run_list(client: &ApiClient, filter: &FilterArgs, quiet: bool) -> Result<(), CliError> {
    let roster = with_spinner("Fetching players...", quiet, || client.list_players())?;
    let spec = filter.to_spec();
    let shown = filter_roster(&roster, &spec);
    let stats = RosterStats::compute(&roster, &shown);

    print_stats(&stats);
    if !spec.is_identity() {
        log::info!(
            "  {}",
            describe_filters(&spec).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    if shown.is_empty() {
        if roster.is_empty() {
            log::info!("No players yet. Add one with `player-stats add`.");
        } else {
            log::info!("No players match the current filters.");
        }
        return Ok(());
    }

    print_table(&shown);
    Ok(())
}

/// Print the distinct positions and nations present in the roster.
pub(crate) fn run_options(client: &ApiClient, quiet: bool) -> Result<(), CliError> {
    let roster = with_spinner("Fetching players...", quiet, || client.list_players())?;

    let positions = position_options(&roster);
    let nations = nation_options(&roster);
    log::info!(
        "{} {}",
        "Positions:".if_supports_color(Stdout, |t| t.bold()),
        join_or_none(&positions),
    );
    log::info!(
        "{} {}",
        "Nations:  ".if_supports_color(Stdout, |t| t.bold()),
        join_or_none(&nations),
    );
    Ok(())
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}

fn print_stats(stats: &RosterStats) {
    log::info!(
        "{} {}   {} {:.1}   {} {}   {} {}",
        "Total Players:".if_supports_color(Stdout, |t| t.bold()),
        stats.total,
        "Average Rating:".if_supports_color(Stdout, |t| t.bold()),
        stats.average_rating,
        "Top Rating:".if_supports_color(Stdout, |t| t.bold()),
        stats.top_rating,
        "Showing:".if_supports_color(Stdout, |t| t.bold()),
        stats.filtered,
    );
}

fn describe_filters(spec: &FilterSpec) -> String {
    let mut parts = Vec::new();
    if !spec.search_text.is_empty() {
        parts.push(format!("search \"{}\"", spec.search_text));
    }
    if let Selection::Only(position) = &spec.position {
        parts.push(format!("position {position}"));
    }
    if spec.min_rating > 0 {
        parts.push(format!("rating >= {}", spec.min_rating));
    }
    if let Selection::Only(nation) = &spec.nation {
        parts.push(format!("nation {nation}"));
    }
    format!("Filters: {}", parts.join(", "))
}

fn print_table(players: &[Player]) {
    let width = |f: fn(&Player) -> usize, header: &str| {
        players.iter().map(f).max().unwrap_or(0).max(header.len())
    };
    let id_w = width(|p| p.id.to_string().len(), "ID");
    let name_w = width(|p| p.name.chars().count(), "Name");
    let pos_w = width(|p| p.position.chars().count(), "Pos");
    let club_w = width(|p| p.club.chars().count(), "Club");
    let nation_w = width(|p| p.nation.chars().count(), "Nation");

    let header = format!(
        "{:>id_w$}  {:<name_w$}  {:<pos_w$}  {:>3}  {:<club_w$}  {:<nation_w$}  Tier",
        "ID", "Name", "Pos", "Rtg", "Club", "Nation",
    );
    log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));

    for p in players {
        log::info!(
            "{:>id_w$}  {:<name_w$}  {:<pos_w$}   {}  {:<club_w$}  {:<nation_w$}  {}",
            p.id,
            p.name,
            p.position,
            rating_badge(p.rating),
            p.club,
            p.nation,
            RatingTier::from_rating(p.rating).as_str(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_are_identity() {
        let args = FilterArgs {
            search: String::new(),
            position: "all".into(),
            min_rating: 0,
            nation: "ALL".into(),
        };
        assert!(args.to_spec().is_identity());
    }

    #[test]
    fn args_map_to_spec() {
        let args = FilterArgs {
            search: "sil".into(),
            position: "ST".into(),
            min_rating: 85,
            nation: "Brazil".into(),
        };
        let spec = args.to_spec();
        assert_eq!(spec.search_text, "sil");
        assert_eq!(spec.position, Selection::Only("ST".into()));
        assert_eq!(spec.min_rating, 85);
        assert_eq!(spec.nation, Selection::Only("Brazil".into()));
    }

    #[test]
    fn filter_description_names_active_predicates() {
        let spec = FilterSpec::new().with_position("GK").with_min_rating(80);
        assert_eq!(describe_filters(&spec), "Filters: position GK, rating >= 80");
    }

    #[test]
    fn empty_options_render_as_none() {
        assert_eq!(join_or_none(&[]), "(none)");
        assert_eq!(join_or_none(&["ST".into(), "GK".into()]), "ST, GK");
    }
}
