//! Shared formatting for player output.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use player_stats_catalog::{Player, RatingTier, is_known_position};

/// Rating padded to two columns and coloured by tier.
pub(super) fn rating_badge(rating: u8) -> String {
    let text = format!("{rating:>2}");
    match RatingTier::from_rating(rating) {
        RatingTier::Elite => text.if_supports_color(Stdout, |t| t.magenta()).to_string(),
        RatingTier::Excellent => text.if_supports_color(Stdout, |t| t.green()).to_string(),
        RatingTier::Good => text.if_supports_color(Stdout, |t| t.cyan()).to_string(),
        RatingTier::Standard => text,
    }
}

/// Multi-line detail view of one player.
pub(super) fn print_player_card(player: &Player) {
    log::info!(
        "{} {}",
        player.name.if_supports_color(Stdout, |t| t.bold()),
        format!("#{}", player.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("  Position: {}", player.position);
    log::info!(
        "  Rating:   {} ({})",
        rating_badge(player.rating),
        RatingTier::from_rating(player.rating).as_str(),
    );
    log::info!("  Club:     {}", player.club);
    log::info!("  Nation:   {}", player.nation);
}

pub(super) fn success(message: &str) {
    log::info!(
        "{} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        message,
    );
}

/// Positions outside the usual set are accepted but worth flagging.
pub(super) fn warn_unknown_position(position: &str) {
    if !is_known_position(position) {
        log::warn!(
            "{} '{}' is not a standard position code",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            position,
        );
    }
}
