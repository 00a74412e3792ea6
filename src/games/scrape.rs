//! Game-log table markup path.
//!
//! Data rows are recognized purely by width: a `tr` with exactly
//! [`DATA_ROW_CELLS`] `th`/`td` cells. Repeated header rows, month separators
//! and "did not play" rows all have a different cell count and are skipped.

use scraper::{ElementRef, Html};

use crate::core::{
    CsClient, CsError, GameLogSource, SourceFuture,
    html::{element_text, selector},
    net,
};

use super::{GameLogEntry, Rebounds, ShootingSplit};

pub const DATA_ROW_CELLS: usize = 26;

// Fixed column positions within a data row.
const DATE: usize = 1;
const AWAY_MARKER: usize = 2;
const OPPONENT: usize = 3;
const RESULT: usize = 4;
const MINUTES: usize = 5;
const FG: usize = 6;
const FG3: usize = 9;
const FT: usize = 12;
const ORB: usize = 15;
const DRB: usize = 16;
const TRB: usize = 17;
const AST: usize = 18;
const STL: usize = 19;
const BLK: usize = 20;
const TOV: usize = 21;
const PF: usize = 22;
const PTS: usize = 23;
const GAME_SCORE: usize = 24;
const PLUS_MINUS: usize = 25;

/// Reads the recent games from the HTML game-log table.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupGameLog;

impl GameLogSource for MarkupGameLog {
    fn name(&self) -> &'static str {
        "markup"
    }

    fn load_games<'a>(
        &'a self,
        client: &'a CsClient,
        limit: usize,
    ) -> SourceFuture<'a, Vec<GameLogEntry>> {
        Box::pin(async move {
            let url = client.gamelog_page().clone();
            let body = net::fetch_text(client, url, "gamelog_html", "html").await?;
            parse_game_log_html(&body, limit)
        })
    }
}

/// Collect up to `limit` data rows in document order.
///
/// # Errors
///
/// A data row with a non-numeric count cell fails the whole batch.
pub fn parse_game_log_html(body: &str, limit: usize) -> Result<Vec<GameLogEntry>, CsError> {
    let doc = Html::parse_document(body);
    let row_sel = selector("tr")?;
    let cell_sel = selector("th, td")?;

    let mut games = Vec::with_capacity(limit);
    for tr in doc.select(&row_sel) {
        if games.len() >= limit {
            break;
        }
        let cells: Vec<String> = tr
            .select(&cell_sel)
            .filter(|c| is_direct_child(c, &tr))
            .map(|c| element_text(&c))
            .collect();
        if cells.len() != DATA_ROW_CELLS {
            continue;
        }
        games.push(entry_from_cells(&cells)?);
    }
    tracing::debug!(count = games.len(), "parsed game-log rows");
    Ok(games)
}

fn is_direct_child(cell: &ElementRef<'_>, row: &ElementRef<'_>) -> bool {
    cell.parent().is_some_and(|p| p.id() == row.id())
}

fn entry_from_cells(cells: &[String]) -> Result<GameLogEntry, CsError> {
    let count = |idx: usize| parse_count(&cells[idx], idx);
    let split = |idx: usize| -> Result<ShootingSplit, CsError> {
        Ok(ShootingSplit {
            made: count(idx)?,
            attempted: count(idx + 1)?,
            percentage: parse_pct(&cells[idx + 2], idx + 2)?,
        })
    };

    Ok(GameLogEntry {
        date: cells[DATE].clone(),
        opponent: cells[OPPONENT].clone(),
        home: cells[AWAY_MARKER] != "@",
        result: cells[RESULT].clone(),
        minutes_played: cells[MINUTES].clone(),
        field_goals: split(FG)?,
        three_pointers: split(FG3)?,
        free_throws: split(FT)?,
        rebounds: Rebounds {
            offensive: count(ORB)?,
            defensive: count(DRB)?,
            total: count(TRB)?,
        },
        assists: count(AST)?,
        steals: count(STL)?,
        blocks: count(BLK)?,
        turnovers: count(TOV)?,
        fouls: count(PF)?,
        points: count(PTS)?,
        game_score: parse_decimal(&cells[GAME_SCORE], GAME_SCORE)?,
        plus_minus: parse_plus_minus(&cells[PLUS_MINUS])?,
    })
}

fn parse_count(text: &str, column: usize) -> Result<u32, CsError> {
    text.trim()
        .parse()
        .map_err(|_| CsError::Data(format!("column {column}: `{text}` is not a count")))
}

fn parse_decimal(text: &str, column: usize) -> Result<f64, CsError> {
    text.trim()
        .parse()
        .map_err(|_| CsError::Data(format!("column {column}: `{text}` is not a number")))
}

/// Empty cell means zero attempts.
fn parse_pct(text: &str, column: usize) -> Result<Option<f64>, CsError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_decimal(text, column).map(Some)
}

fn parse_plus_minus(text: &str) -> Result<Option<i32>, CsError> {
    let t = text.trim();
    if t.is_empty() {
        return Ok(None);
    }
    t.trim_start_matches('+')
        .parse()
        .map(Some)
        .map_err(|_| CsError::Data(format!("column {PLUS_MINUS}: `{text}` is not a margin")))
}
