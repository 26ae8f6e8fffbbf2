use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use player_stats_catalog::{Player, PlayerInput};

use super::render::{print_player_card, success, warn_unknown_position};
use crate::cli_types::{EditPlayerArgs, NewPlayerArgs};
use crate::client::ApiClient;
use crate::error::CliError;
use crate::spinner::with_spinner;

pub(crate) fn run_show(client: &ApiClient, id: i64, quiet: bool) -> Result<(), CliError> {
    let player = with_spinner("Fetching player...", quiet, || client.get_player(id))?;
    print_player_card(&player);
    Ok(())
}

pub(crate) fn run_add(client: &ApiClient, args: NewPlayerArgs, quiet: bool) -> Result<(), CliError> {
    warn_unknown_position(&args.position);
    let input = PlayerInput::new(args.name, args.position, args.rating, args.club, args.nation);

    let created = with_spinner("Saving player...", quiet, || client.create_player(&input))?;
    success(&created.message);
    print_player_card(&created.player);
    Ok(())
}

/// Fetch the current record, apply the requested changes and submit the
/// full replacement.
pub(crate) fn run_edit(
    client: &ApiClient,
    id: i64,
    changes: &EditPlayerArgs,
    quiet: bool,
) -> Result<(), CliError> {
    if changes.is_empty() {
        return Err(CliError::invalid_argument(
            "nothing to change; pass at least one of --name, --position, --rating, --club, --nation",
        ));
    }
    if let Some(position) = &changes.position {
        warn_unknown_position(position);
    }

    let current = with_spinner("Fetching player...", quiet, || client.get_player(id))?;
    let input = changes.overlay(&current);

    let updated = with_spinner("Saving player...", quiet, || client.update_player(id, &input))?;
    success(&updated.message);
    print_player_card(&updated.player);
    Ok(())
}

pub(crate) fn run_remove(client: &ApiClient, id: i64, yes: bool, quiet: bool) -> Result<(), CliError> {
    let player = with_spinner("Fetching player...", quiet, || client.get_player(id))?;

    if !yes {
        let prompt = format!(
            "Remove {} ({}, {})? [y/N] ",
            player.name.if_supports_color(Stdout, |t| t.bold()),
            player.position,
            player.club,
        );
        if !confirm(&prompt)? {
            return Err(CliError::Cancelled);
        }
    }

    let removed = with_spinner("Removing player...", quiet, || client.delete_player(id))?;
    success(&removed.message);
    Ok(())
}

impl EditPlayerArgs {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.rating.is_none()
            && self.club.is_none()
            && self.nation.is_none()
    }

    /// The full field set to submit: given flags win, the rest come from `current`.
    pub(crate) fn overlay(&self, current: &Player) -> PlayerInput {
        PlayerInput {
            name: Some(self.name.clone().unwrap_or_else(|| current.name.clone())),
            position: Some(
                self.position
                    .clone()
                    .unwrap_or_else(|| current.position.clone()),
            ),
            rating: Some(self.rating.unwrap_or(i64::from(current.rating))),
            club: Some(self.club.clone().unwrap_or_else(|| current.club.clone())),
            nation: Some(self.nation.clone().unwrap_or_else(|| current.nation.clone())),
        }
    }
}

fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silva() -> Player {
        Player {
            id: 4,
            name: "A. Silva".into(),
            position: "ST".into(),
            rating: 88,
            club: "X".into(),
            nation: "Brazil".into(),
        }
    }

    #[test]
    fn overlay_keeps_unchanged_fields() {
        let changes = EditPlayerArgs {
            rating: Some(91),
            club: Some("Y".into()),
            ..Default::default()
        };
        assert_eq!(
            changes.overlay(&silva()),
            PlayerInput::new("A. Silva", "ST", 91, "Y", "Brazil")
        );
    }

    #[test]
    fn overlay_passes_out_of_range_ratings_through() {
        let changes = EditPlayerArgs {
            rating: Some(150),
            ..Default::default()
        };
        assert_eq!(changes.overlay(&silva()).rating, Some(150));
    }

    #[test]
    fn no_flags_is_empty() {
        assert!(EditPlayerArgs::default().is_empty());
        assert!(
            !EditPlayerArgs {
                nation: Some("Italy".into()),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
