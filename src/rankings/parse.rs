use scraper::{ElementRef, Html, Selector};

use super::types::{RankedPlayer, ScrapedRow};
use crate::error::LeagueError;

const ROW_SELECTOR: &str = "#official > tbody > tr";
const NAME_SELECTOR: &str = "td.whitespace-nowrap";
const POINTS_SELECTOR: &str = "td:nth-child(4)";

fn selector(css: &str) -> Result<Selector, LeagueError> {
    Selector::parse(css).map_err(|e| LeagueError::parse(format!("invalid selector '{}': {:?}", css, e)))
}

// First matching cell only; the name column is the one `whitespace-nowrap` cell per row.
fn cell_text(row: ElementRef, sel: &Selector) -> Option<String> {
    row.select(sel)
        .next()
        .map(|cell| cell.text().collect::<String>())
}

/// Extract `(name, points text)` rows from a ranking page.
///
/// The page must contain the `#official` ranking table with at least one row,
/// and every row must have both a name cell and a fourth (points) column.
pub fn parse_ranking_page(html: &str) -> Result<Vec<ScrapedRow>, LeagueError> {
    let document = Html::parse_document(html);
    let row_sel = selector(ROW_SELECTOR)?;
    let name_sel = selector(NAME_SELECTOR)?;
    let points_sel = selector(POINTS_SELECTOR)?;

    let mut rows = Vec::new();
    for (i, row) in document.select(&row_sel).enumerate() {
        let display_name = cell_text(row, &name_sel)
            .ok_or_else(|| LeagueError::parse(format!("row {} has no player name cell", i + 1)))?;
        let points_text = cell_text(row, &points_sel)
            .ok_or_else(|| LeagueError::parse(format!("row {} has no points column", i + 1)))?;
        rows.push(ScrapedRow {
            display_name,
            points_text,
        });
    }

    if rows.is_empty() {
        return Err(LeagueError::parse("no ranking table rows found (#official)"));
    }

    Ok(rows)
}

/// Parse a points cell as a non-negative finite decimal ("823.33", "12").
///
/// Signs, exponents, thousands separators, empty cells and digit strings too
/// long to fit an f64 are rejected.
pub fn parse_points(text: &str) -> Result<f64, LeagueError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LeagueError::parse("empty points value"));
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(LeagueError::parse(format!("invalid points value '{}'", trimmed)));
    }
    let points = trimmed
        .parse::<f64>()
        .map_err(|e| LeagueError::parse(format!("invalid points value '{}': {}", trimmed, e)))?;
    if !points.is_finite() {
        return Err(LeagueError::parse(format!("points value out of range '{}'", trimmed)));
    }
    Ok(points)
}

/// Validate every row's points. One bad row fails the whole page, rostered
/// player or not.
pub fn ranked_players(rows: Vec<ScrapedRow>) -> Result<Vec<RankedPlayer>, LeagueError> {
    rows.into_iter()
        .map(|row| {
            let points = parse_points(&row.points_text).map_err(|e| match e {
                LeagueError::Parse(msg) => LeagueError::Parse(format!(
                    "{} (player '{}')",
                    msg,
                    row.display_name.trim()
                )),
                other => other,
            })?;
            Ok(RankedPlayer {
                display_name: row.display_name,
                points,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &str) -> String {
        format!(
            r#"<html><body>
<table id="official">
  <thead><tr><th>Rank</th><th>Player</th><th>Events</th><th>Points</th></tr></thead>
  <tbody>{}</tbody>
</table>
</body></html>"#,
            rows
        )
    }

    fn row(rank: u32, name: &str, points: &str) -> String {
        format!(
            r#"<tr><td>{}</td><td class="whitespace-nowrap"><a href="/players/x">{}</a></td><td>7</td><td> {} </td></tr>"#,
            rank, name, points
        )
    }

    #[test]
    fn test_parse_rows() {
        let html = page(&[row(1, "Paul McBeth*", "823.33"), row(2, "Gannon Buhr", "790")].concat());
        let rows = parse_ranking_page(&html).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].display_name, "Paul McBeth*");
        assert_eq!(rows[0].points_text.trim(), "823.33");
        assert_eq!(rows[1].display_name, "Gannon Buhr");
    }

    #[test]
    fn test_header_row_not_included() {
        let html = page(&row(1, "Paul McBeth", "1"));
        assert_eq!(parse_ranking_page(&html).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_table_is_parse_error() {
        let err = parse_ranking_page("<html><body><p>Maintenance</p></body></html>").unwrap_err();
        assert!(matches!(err, LeagueError::Parse(_)));
    }

    #[test]
    fn test_empty_table_is_parse_error() {
        assert!(matches!(
            parse_ranking_page(&page("")),
            Err(LeagueError::Parse(_))
        ));
    }

    #[test]
    fn test_name_taken_from_first_nowrap_cell() {
        let html = page(
            r#"<tr><td>1</td><td class="whitespace-nowrap">Paul McBeth</td><td class="whitespace-nowrap">USA</td><td>823.33</td></tr>"#,
        );
        let rows = parse_ranking_page(&html).unwrap();
        assert_eq!(rows[0].display_name, "Paul McBeth");
        assert_eq!(rows[0].points_text, "823.33");
    }

    #[test]
    fn test_row_without_points_column() {
        let html = page(r#"<tr><td>1</td><td class="whitespace-nowrap">Paul McBeth</td><td>7</td></tr>"#);
        let err = parse_ranking_page(&html).unwrap_err();
        assert!(err.to_string().contains("no points column"));
    }

    #[test]
    fn test_parse_points_valid() {
        assert_eq!(parse_points("823.33").unwrap(), 823.33);
        assert_eq!(parse_points(" 12 \n").unwrap(), 12.0);
        assert_eq!(parse_points("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_points_rejects_malformed() {
        for bad in ["", "   ", "-5", "+5", "1e3", "1,234.5", "NaN", "inf", "12pts", "1.2.3"] {
            assert!(
                matches!(parse_points(bad), Err(LeagueError::Parse(_))),
                "expected parse error for {:?}",
                bad
            );
        }
        let overlong = "9".repeat(400);
        assert!(matches!(parse_points(&overlong), Err(LeagueError::Parse(_))));
    }

    #[test]
    fn test_ranked_players_fails_on_any_bad_row() {
        let rows = vec![
            ScrapedRow { display_name: "A".into(), points_text: "10".into() },
            ScrapedRow { display_name: " Not Rostered ".into(), points_text: "".into() },
        ];
        let err = ranked_players(rows).unwrap_err();
        assert!(err.to_string().contains("player 'Not Rostered'"));
    }

    #[test]
    fn test_ranked_players_keeps_display_name() {
        let rows = vec![ScrapedRow { display_name: "John Doe*".into(), points_text: "9.5".into() }];
        assert_eq!(ranked_players(rows).unwrap(), vec![RankedPlayer::new("John Doe*", 9.5)]);
    }
}
