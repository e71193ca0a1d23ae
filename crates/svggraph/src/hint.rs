//! Tooltip content for value and problem hints.

use std::fmt::Write as _;
use svggraph_core::geom::{Point, Size, point};
use svggraph_core::utils::sanitize_url;
use svggraph_core::{DataPoint, Problem};

/// Height of the band under the canvas where problem hints are shown.
pub const PROBLEM_BAND_HEIGHT: f64 = 15.0;

/// Vertical distance between the pointer and a tooltip placed below it.
pub const HINT_VERTICAL_OFFSET: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    Values,
    Problems,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueRow {
    pub color: String,
    pub metric: String,
    pub value: Option<String>,
}

/// "Displaying N of M found" footer of a truncated tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub shown: usize,
    pub total: usize,
}

impl std::fmt::Display for Paging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Displaying {} of {} found", self.shown, self.total)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HintBody {
    Values(Vec<ValueRow>),
    Problems(Vec<Problem>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HintContent {
    pub body: HintBody,
    pub paging: Option<Paging>,
}

fn paging(max_rows: usize, total: usize) -> Option<Paging> {
    (total > max_rows).then_some(Paging {
        shown: max_rows,
        total,
    })
}

/// Lists the problems under the pointer, or `None` when there are none.
pub fn problems_hint(problems: &[&Problem], max_rows: usize) -> Option<HintContent> {
    if problems.is_empty() {
        return None;
    }
    Some(HintContent {
        body: HintBody::Problems(problems.iter().take(max_rows).map(|p| (*p).clone()).collect()),
        paging: paging(max_rows, problems.len()),
    })
}

/// Lists series values at the pointer column.
///
/// When `focus` names a series the pointer is directly over, only that series is listed. Rows
/// are capped by series index, so a focused series beyond the cap yields an empty list. Returns
/// `None` when no series has a value.
pub fn values_hint(
    points: &[DataPoint<'_>],
    focus: Option<usize>,
    max_rows: usize,
) -> Option<HintContent> {
    if !points.iter().any(DataPoint::has_value) {
        return None;
    }
    let rows = points
        .iter()
        .enumerate()
        .filter(|(i, _)| focus.is_none_or(|f| f == *i) && *i < max_rows)
        .map(|(_, dp)| ValueRow {
            color: dp.data_set.color.clone(),
            metric: dp.data_set.metric.clone(),
            value: dp.value.map(str::to_string),
        })
        .collect();
    Some(HintContent {
        body: HintBody::Values(rows),
        paging: paging(max_rows, points.len()),
    })
}

/// Top-left corner for a tooltip anchored at `pointer`, flipped left and/or up when it would
/// leave the viewport.
pub fn place_hint(offset: Point, screen: Point, box_size: Size, viewport: Size) -> Point {
    let left = if viewport.width >= offset.x + box_size.width {
        offset.x
    } else {
        offset.x - box_size.width
    };
    let top = if viewport.height >= screen.y + box_size.height + HINT_VERTICAL_OFFSET {
        offset.y + HINT_VERTICAL_OFFSET
    } else {
        offset.y - box_size.height
    };
    point(left, top)
}

impl HintContent {
    pub fn kind(&self) -> HintKind {
        match self.body {
            HintBody::Values(_) => HintKind::Values,
            HintBody::Problems(_) => HintKind::Problems,
        }
    }

    pub fn row_count(&self) -> usize {
        match &self.body {
            HintBody::Values(rows) => rows.len(),
            HintBody::Problems(rows) => rows.len(),
        }
    }

    /// Markup for the dashboard's hintbox widget.
    pub fn to_html(&self) -> String {
        let mut out = String::from(r#"<div class="svg-graph-hintbox">"#);
        match &self.body {
            HintBody::Values(rows) => {
                out.push_str("<ul>");
                for row in rows {
                    let _ = write!(
                        &mut out,
                        r#"<li><span class="svg-graph-hintbox-item-color" style="background-color: {}"></span>{}: {}</li>"#,
                        htmlize::escape_attribute(row.color.as_str()),
                        htmlize::escape_text(row.metric.as_str()),
                        htmlize::escape_text(row.value.as_deref().unwrap_or_default()),
                    );
                }
                out.push_str("</ul>");
            }
            HintBody::Problems(rows) => {
                out.push_str(r#"<table class="list-table compact-view"><tbody>"#);
                for p in rows {
                    push_problem_row(&mut out, p);
                }
                out.push_str("</tbody></table>");
            }
        }
        if let Some(paging) = self.paging {
            let _ = write!(
                &mut out,
                r#"<div class="table-paging"><div class="paging-btn-container"><div class="table-stats">{paging}</div></div></div>"#
            );
        }
        out.push_str("</div>");
        out
    }
}

fn push_problem_row(out: &mut String, p: &Problem) {
    let href = sanitize_url(&p.url);
    let href = htmlize::escape_attribute(href.as_str());

    let _ = write!(
        out,
        r#"<tr><td><a href="{href}">{}</a></td><td>"#,
        htmlize::escape_text(p.clock.as_str())
    );
    if p.has_recovery_event() {
        let _ = write!(
            out,
            r#"<a href="{href}">{}</a>"#,
            htmlize::escape_text(p.r_clock.as_str())
        );
    } else {
        out.push_str(&htmlize::escape_text(p.r_clock.as_str()));
    }
    let _ = write!(
        out,
        r#"</td><td><span class="{}">{}</span></td><td class="{}">{}</td></tr>"#,
        htmlize::escape_attribute(p.status_color.as_str()),
        htmlize::escape_text(p.status.as_str()),
        htmlize::escape_attribute(p.severity.as_str()),
        htmlize::escape_text(p.name.as_str()),
    );
}
