use doc_core::grid::{Cell, Column, FooterRow, Grid, Row};
use doc_core::scene::Scene;
use doc_core::surface::TextAlign;

fn two_col_grid() -> Grid {
    Grid::new(vec![
        Column::new("Name", 234.0, TextAlign::Left),
        Column::new("Value", 234.0, TextAlign::Right),
    ])
}

fn data_row(a: &str, b: &str) -> Row {
    Row::new(vec![Cell::new(a), Cell::new(b)])
}

fn footer() -> FooterRow {
    FooterRow { label: "Total:".to_string(), value: "$300.00".to_string() }
}

// -------------------------------------------------------
// Continuous surfaces: no pagination
// -------------------------------------------------------

#[test]
fn continuous_surface_never_paginates() {
    let grid = two_col_grid();
    let rows: Vec<Row> = (0..100).map(|i| data_row(&format!("Row {}", i), "data")).collect();
    let mut scene = Scene::continuous(612.0);

    grid.render(&mut scene, 54.0, 54.0, &rows, Some(&footer()));

    assert_eq!(scene.page_count(), 1);
    assert_eq!(scene.count_text("Name"), 1, "header emitted once");
    assert_eq!(scene.count_text("Total:"), 1);
}

#[test]
fn returned_cursor_sits_below_last_row() {
    let grid = two_col_grid();
    let rows = vec![data_row("A", "1"), data_row("B", "2")];
    let mut scene = Scene::continuous(612.0);

    let bottom = grid.render(&mut scene, 54.0, 54.0, &rows, Some(&footer()));

    // header + footer are bold 9pt bands, body rows regular 10pt.
    let band = 9.0 * 1.2 + 2.0 * grid.padding;
    let row = 10.0 * 1.2 + 2.0 * grid.padding;
    let expected = 54.0 + band + 2.0 * row + band;
    assert!((bottom - expected).abs() < 1e-6, "got {}, expected {}", bottom, expected);
}

#[test]
fn empty_body_still_emits_header_and_footer() {
    let grid = two_col_grid();
    let mut scene = Scene::continuous(612.0);

    grid.render(&mut scene, 54.0, 54.0, &[], Some(&footer()));

    assert_eq!(scene.count_text("Name"), 1);
    assert_eq!(scene.count_text("Total:"), 1);
}

#[test]
fn footer_is_optional() {
    let grid = two_col_grid();
    let mut scene = Scene::continuous(612.0);

    grid.render(&mut scene, 54.0, 54.0, &[data_row("A", "1")], None);

    assert_eq!(scene.count_text("Total:"), 0);
}

// -------------------------------------------------------
// Pagination
// -------------------------------------------------------

#[test]
fn header_is_reemitted_on_every_page() {
    let grid = two_col_grid();
    // Page height 200 with 54pt margins leaves room for the header
    // plus two body rows per page.
    let rows: Vec<Row> = (0..7).map(|i| data_row(&format!("Row {}", i), "data")).collect();
    let mut scene = Scene::paged(612.0, 200.0);

    grid.render(&mut scene, 54.0, 54.0, &rows, Some(&footer()));

    assert!(scene.page_count() >= 2, "expected pagination, got {} pages", scene.page_count());
    assert_eq!(
        scene.count_text("Name"),
        scene.page_count(),
        "header should appear exactly once per page"
    );
}

#[test]
fn footer_appears_exactly_once_after_last_body_row() {
    let grid = two_col_grid();
    let rows: Vec<Row> = (0..7).map(|i| data_row(&format!("Row {}", i), "data")).collect();
    let mut scene = Scene::paged(612.0, 200.0);

    grid.render(&mut scene, 54.0, 54.0, &rows, Some(&footer()));

    assert_eq!(scene.count_text("Total:"), 1);

    // The footer lives on the final page, after the last body row.
    let last_page = scene.pages().last().unwrap();
    let texts: Vec<&str> = last_page
        .iter()
        .filter_map(|node| match node {
            doc_core::SceneNode::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    let last_row_pos = texts.iter().position(|t| *t == "Row 6").expect("last row on final page");
    let footer_pos = texts.iter().position(|t| *t == "Total:").expect("footer on final page");
    assert!(footer_pos > last_row_pos);
}

#[test]
fn all_body_rows_survive_pagination_in_order() {
    let grid = two_col_grid();
    let rows: Vec<Row> = (0..7).map(|i| data_row(&format!("Row {}", i), "data")).collect();
    let mut scene = Scene::paged(612.0, 200.0);

    grid.render(&mut scene, 54.0, 54.0, &rows, None);

    let labels: Vec<&str> =
        scene.texts().into_iter().filter(|t| t.starts_with("Row ")).collect();
    let expected: Vec<String> = (0..7).map(|i| format!("Row {}", i)).collect();
    assert_eq!(labels, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn oversized_row_is_placed_rather_than_looping() {
    let grid = two_col_grid();
    // A row with more lines than a page can hold.
    let lines: Vec<(String, doc_core::grid::CellStyle)> = (0..40)
        .map(|i| (format!("line {}", i), doc_core::grid::CellStyle::default()))
        .collect();
    let tall = Row::new(vec![Cell::multi(lines), Cell::new("x")]);
    let mut scene = Scene::paged(612.0, 200.0);

    grid.render(&mut scene, 54.0, 54.0, &[tall], Some(&footer()));

    assert!(scene.contains_text("line 39"));
    assert_eq!(scene.count_text("Total:"), 1);
}
