//! Table rendering.

use artic_lib::Grid;
use artic_lib::model::Artwork;
use artic_lib::selection::Accumulation;
use artic_lib::selection::ExhaustReason;
use artic_lib::selection::Outcome;
use artic_lib::selection::SelectionSet;
use comfy_table::Cell;
use comfy_table::ContentArrangement;
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

const HEADERS: [&str; 8] = [
    "",
    "ID",
    "Title",
    "Origin",
    "Artist",
    "Inscriptions",
    "Start Date",
    "End Date",
];

/// Renders rows as a table, marking selected ones.
pub fn artworks_table(records: &[Artwork], selection: &SelectionSet) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADERS);

    for artwork in records {
        let mark = if selection.is_selected(artwork.id) { "[x]" } else { "[ ]" };
        table.add_row(vec![
            Cell::new(mark),
            Cell::new(artwork.id),
            Cell::new(text(&artwork.title)),
            Cell::new(text(&artwork.place_of_origin)),
            Cell::new(text(&artwork.artist_display)),
            Cell::new(text(&artwork.inscriptions)),
            Cell::new(year(artwork.date_start)),
            Cell::new(year(artwork.date_end)),
        ]);
    }

    table
}

/// Renders the grid's current page followed by the paginator line.
pub fn grid_view<F>(grid: &Grid<F>) -> String {
    format!(
        "{}\n{}",
        artworks_table(grid.records(), grid.selection()),
        paginator(grid)
    )
}

/// One-line paginator summary.
pub fn paginator<F>(grid: &Grid<F>) -> String {
    let first = grid.first_row_offset();
    let rows = if grid.records().is_empty() {
        "no rows".to_string()
    } else {
        format!("rows {}-{}", first + 1, first + grid.records().len())
    };

    format!(
        "Page {} of {} | {} of {} | {} selected",
        grid.page(),
        grid.page_count(),
        rows,
        grid.total_records(),
        grid.selection().selected_count()
    )
}

/// Describes the result of a cross-page selection.
pub fn accumulation_summary(accumulation: &Accumulation, select: bool) -> String {
    let verb = if select { "Selected" } else { "Deselected" };
    let count = accumulation.ids().len();

    match accumulation.outcome() {
        Outcome::Satisfied => format!("{} {} rows", verb, count),
        Outcome::Exhausted {
            reason: ExhaustReason::EmptyPage,
        } => format!("{} {} rows (end of catalog)", verb, count),
        Outcome::Exhausted {
            reason: ExhaustReason::FetchFailed { page },
        } => format!(
            "{} {} rows (stopped: page {} could not be fetched, {} rows short)",
            verb,
            count,
            page,
            accumulation.remaining()
        ),
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn year(value: Option<i32>) -> String {
    value.map(|y| y.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use artic_lib::model::ArtworkId;

    #[test]
    fn test_table_marks_selected() {
        let records = vec![
            Artwork::new(ArtworkId::new(1)).title("Nighthawks").dates(1942, 1942),
            Artwork::new(ArtworkId::new(2)).title("American Gothic"),
        ];
        let mut selection = SelectionSet::new();
        selection.flag(ArtworkId::new(2), true);

        let rendered = artworks_table(&records, &selection).to_string();
        let nighthawks = rendered.lines().find(|l| l.contains("Nighthawks")).unwrap();
        let gothic = rendered.lines().find(|l| l.contains("American Gothic")).unwrap();

        assert!(nighthawks.contains("[ ]"));
        assert!(nighthawks.contains("1942"));
        assert!(gothic.contains("[x]"));
    }
}
