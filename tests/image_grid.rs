use loot::LootError;
use loot::image_grid::ImageGrid;

#[test]
fn cells_are_indexed_row_major_from_top_left() {
    let grid = ImageGrid::new(48, 96, 4, 3).unwrap();
    assert_eq!(grid.len(), 12);
    assert_eq!((grid.cell_w, grid.cell_h), (16, 24));

    let first = grid.cell(0).unwrap();
    assert_eq!((first.x, first.y), (0, 0));
    assert_eq!(first.uv_min, [0.0, 0.0]);

    // Frame 7 is the middle column of the third row.
    let cell = grid.cell(7).unwrap();
    assert_eq!((cell.x, cell.y), (16, 48));
    assert_eq!((cell.width, cell.height), (16, 24));
    assert_eq!(cell.uv_min, [16.0 / 48.0, 0.5]);
    assert_eq!(cell.uv_max, [32.0 / 48.0, 0.75]);
}

#[test]
fn index_past_end_has_no_cell() {
    let grid = ImageGrid::new(64, 64, 2, 2).unwrap();
    assert!(grid.cell(3).is_some());
    assert!(grid.cell(4).is_none());
}

#[test]
fn zero_rows_or_cols_are_rejected() {
    assert!(matches!(ImageGrid::new(64, 64, 0, 4), Err(LootError::InvalidGrid { .. })));
    assert!(matches!(ImageGrid::new(64, 64, 4, 0), Err(LootError::InvalidGrid { .. })));
}

#[test]
fn grid_finer_than_image_is_rejected() {
    let err = ImageGrid::new(8, 8, 16, 16).unwrap_err();
    assert_eq!(err.to_string(), "cannot slice a 8x8 image into 16 rows x 16 cols");
}
