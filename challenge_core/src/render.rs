//! Plain-text rendering of a challenge summary, used for console output.

use crate::controller::dto::ChallengeSummary;
use crate::helpers::format::{
    format_currency, format_number, format_percentage, format_token_price, vote_label,
};
use crate::portfolio::dto::{Leadership, Performance, Portfolio};

fn render_portfolio(lines: &mut Vec<String>, portfolio: &Portfolio, performance: &Performance) {
    lines.push(format!(
        "{} ({}): {}  24h {}  total {}",
        portfolio.name,
        portfolio.source,
        format_currency(performance.total_value),
        format_percentage(performance.change_24h),
        format_percentage(performance.change_from_initial),
    ));

    for holding in &portfolio.holdings {
        lines.push(format!(
            "  {:<11} {} tokens @ {}  = {}  ({} 24h)",
            holding.symbol,
            format_number(holding.amount),
            format_token_price(holding.current_price),
            format_currency(holding.value()),
            format_percentage(holding.change_24h.unwrap_or(0.0)),
        ));
    }
}

pub fn render_leadership(leadership: &Leadership) -> String {
    match leadership {
        Leadership::Leading { leader, margin } => format!(
            "{} Leading by {}",
            leader.display_name(),
            format_percentage(*margin)
        ),
        Leadership::Tied => "Tied 0%".to_string(),
    }
}

pub fn render_summary(summary: &ChallengeSummary) -> String {
    let mut lines = vec![
        format!(
            "Day {}/{} (started {})",
            summary.day,
            summary.challenge_days,
            summary.start_date.format("%-m/%-d/%Y")
        ),
        "-".repeat(60),
    ];

    render_portfolio(&mut lines, &summary.easy, &summary.standings.easy);
    render_portfolio(&mut lines, &summary.clemente, &summary.standings.clemente);

    lines.push("-".repeat(60));
    lines.push(render_leadership(&summary.standings.leadership));

    let voting = &summary.voting;
    lines.push(format!(
        "Votes: Easy {} ({}%), Clemente {} ({}%), Total Votes: {}",
        vote_label(voting.easy_votes),
        voting.shares.easy,
        vote_label(voting.clemente_votes),
        voting.shares.clemente,
        voting.total_votes
    ));

    lines.join("\n")
}
