use pretty_assertions::assert_eq;
use pure_table::grid::{from_rows, Grid, Scalar};
use pure_table::style::styled_render;
use pure_table::table::{Axis, HeaderExtent, Label, Lookup, Selector, Table, TableError};

fn quarterly() -> Grid {
    vec![
        vec!["".into(), "Q1".into(), "Q2".into()],
        vec!["R1".into(), 10.into(), 20.into()],
        vec!["R2".into(), 30.into(), 40.into()],
    ]
}

fn regional() -> Grid {
    from_rows([
        ["Region", "Channel", "2023", "2023", "2024"],
        ["", "", "H1", "H2", "H1"],
        ["North", "Retail", "1", "2", "3"],
        ["North", "Online", "4", "5", "6"],
        ["South", "Retail", "7", "8", "9"],
    ])
}

#[test]
fn raw_table_scenario() {
    let table = Table::new(quarterly(), 1, 1, false).unwrap();

    assert_eq!(table.search("R1", "Q2"), Some(&Scalar::Int(20)));
    assert_eq!(table.render(), &quarterly());
    assert_eq!(
        table.header_extent(),
        HeaderExtent {
            top_rows: 1,
            left_cols: 1
        }
    );
}

#[test]
fn pure_table_scenario() {
    let table = Table::new(quarterly(), 1, 1, true).unwrap();
    let rendered = table.render();

    assert_eq!(
        table.search(
            table.parse_selector(Axis::Row, "1"),
            table.parse_selector(Axis::Column, "A")
        ),
        Some(&Scalar::Int(10))
    );
    assert_eq!(rendered[0][2..], [Scalar::from("A"), Scalar::from("B")]);
    assert_eq!(rendered[2][..2], [Scalar::from("1"), Scalar::from("R1")]);
    assert_eq!(rendered[0][..2], [Scalar::from(""), Scalar::from("")]);
    assert_eq!(rendered[1][1], Scalar::from(""));
}

#[test]
fn headerless_scenario() {
    let table = Table::new(quarterly(), 0, 0, false).unwrap();

    assert!(table.corners().is_none());
    assert!(table.row_headers().is_none());
    assert!(table.column_headers().is_none());
    assert_eq!(table.render(), &quarterly());
    assert_eq!(table.render(), table.body());
    assert_eq!(table.search("R1", "Q1"), None);
}

#[test]
fn label_selectors_match_real_headers() {
    let table = Table::new(regional(), 2, 2, true).unwrap();

    let by_label = table.search(Selector::all([Label::Row(1)]), Selector::all([Label::Column(1)]));
    let by_value = table.search("North", "2023");
    assert_eq!(by_label, by_value);
    assert_eq!(by_label, Some(&Scalar::from("1")));
}

#[test]
fn full_header_tuple_selects_intersection() {
    let table = Table::new(regional(), 2, 2, false).unwrap();

    for (r, row_header) in table.row_headers().unwrap().iter().enumerate() {
        let columns = pure_table::grid::transpose(table.column_headers().unwrap());
        for (c, column_header) in columns.iter().enumerate() {
            let lookup = table.find(
                &Selector::all(row_header.iter().cloned()),
                &Selector::all(column_header.iter().cloned()),
            );
            match lookup {
                Lookup::Found { row, column, .. } => assert_eq!((row, column), (r, c)),
                Lookup::NotFound { .. } => panic!("tuple ({r}, {c}) did not resolve"),
            }
        }
    }

    let lookup = table.find(&Selector::all(["South", "Retail"]), &Selector::all(["2023", "H2"]));
    assert_eq!(lookup.value(), Some(&Scalar::from("8")));
}

#[test]
fn corner_expansion_in_pure_mode() {
    let table = Table::new(regional(), 2, 2, true).unwrap();
    let rendered = table.render();

    assert!(rendered[0][..3].iter().all(|cell| cell == &Scalar::from("")));
    assert!(rendered[..3].iter().all(|row| row[0] == Scalar::from("")));
    assert_eq!(rendered[1][1], Scalar::from("Region"));
    assert_eq!(rendered[1][2], Scalar::from("Channel"));

    let no_corner = Table::new(from_rows([["a", "b"]]), 0, 0, true).unwrap();
    assert_eq!(no_corner.render()[0][0], Scalar::from(""));
}

#[test]
fn label_monotonicity_over_many_columns() {
    let grid = vec![(0..40).map(Scalar::from).collect::<Vec<_>>(); 12];
    let table = Table::new(grid, 0, 0, true).unwrap();
    let rendered = table.render();

    let column_labels: Vec<String> = rendered[0][1..].iter().map(ToString::to_string).collect();
    let expected: Vec<String> = (0..40)
        .map(|j| if j < 26 { ((b'A' + j as u8) as char).to_string() } else { format!("Col{}", j + 1) })
        .collect();
    assert_eq!(column_labels, expected);

    let row_labels: Vec<String> = rendered[1..].iter().map(|row| row[0].to_string()).collect();
    let expected: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
    assert_eq!(row_labels, expected);
}

#[test]
fn construction_errors() {
    let ragged = vec![vec![Scalar::from(1)], vec![]];
    assert!(matches!(
        Table::new(ragged, 0, 0, false),
        Err(TableError::Ragged { row: 1, .. })
    ));
    assert!(matches!(
        Table::new(quarterly(), 4, 0, false),
        Err(TableError::RowHeaderDepth { depth: 4, columns: 3 })
    ));
    assert!(matches!(
        Table::new(quarterly(), 0, 4, true),
        Err(TableError::ColumnHeaderDepth { depth: 4, rows: 3 })
    ));
}

#[test]
fn styling_does_not_touch_the_grid() {
    let table = Table::new(quarterly(), 1, 1, true).unwrap();
    let before = table.render().clone();
    let styled = styled_render(table.render(), table.header_extent());

    assert_eq!(table.render(), &before);
    assert_eq!(styled.cells[3][3].text, "40");
    assert!(styled.cells[3][1].bold);
    assert!(!styled.cells[3][3].bold);
}
