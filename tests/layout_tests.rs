use disugrid::{GridDescription, GridError, Real, VertexLayout};
use std::collections::HashSet;

fn grid(nlay: usize, ncol: usize, delr: Real) -> GridDescription {
    let botm = (1..=nlay).map(|k| -(k as Real) * 2.0).collect();
    GridDescription::new(nlay, ncol, delr, 1.0, 0.0, botm).expect("valid grid")
}

#[test]
fn vertex_count_is_two_per_column_boundary() {
    for ncol in 1..8 {
        let layout = VertexLayout::build(&grid(2, ncol, 1.0)).unwrap();
        assert_eq!(layout.nvert(), (ncol + 1) * 2, "ncol = {ncol}");
    }
    let layout = VertexLayout::build(&grid(2, 3, 1.0)).unwrap();
    assert_eq!(layout.nvert(), 8);
}

#[test]
fn layout_is_deterministic() {
    let g = grid(4, 6, 0.25);
    let first = VertexLayout::build(&g).unwrap();
    let second = VertexLayout::build(&g).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.vertices(), second.vertices());
}

#[test]
fn no_duplicate_coordinates() {
    let layout = VertexLayout::build(&grid(3, 10, 0.1)).unwrap();
    let unique: HashSet<(u64, u64)> = layout
        .xv()
        .iter()
        .zip(layout.yv())
        .map(|(x, y)| (x.to_bits() as u64, y.to_bits() as u64))
        .collect();
    assert_eq!(unique.len(), layout.nvert());
    assert_eq!(
        layout.vertex_ids(),
        (0..layout.nvert()).collect::<Vec<_>>().as_slice()
    );
}

#[test]
fn every_footprint_has_four_distinct_valid_ids() {
    let g = grid(5, 7, 1.5);
    let layout = VertexLayout::build(&g).unwrap();
    assert_eq!(layout.cell_vertices().len(), g.ncells());
    for (n, ids) in layout.cell_vertices().iter().enumerate() {
        let distinct: HashSet<_> = ids.iter().collect();
        assert_eq!(distinct.len(), 4, "cell {n}");
        assert!(ids.iter().all(|&id| id < layout.xv().len()), "cell {n}");
    }
}

#[test]
fn footprint_corners_are_in_fixed_order() {
    let g = grid(1, 2, 2.0);
    let layout = VertexLayout::build(&g).unwrap();
    let [bl, br, fr, fl] = layout.vertices_of(1).unwrap();
    let (xv, yv) = (layout.xv(), layout.yv());
    assert_eq!((xv[bl], yv[bl]), (2.0, 1.0));
    assert_eq!((xv[br], yv[br]), (4.0, 1.0));
    assert_eq!((xv[fr], yv[fr]), (4.0, 0.0));
    assert_eq!((xv[fl], yv[fl]), (2.0, 0.0));
}

#[test]
fn every_layer_shares_the_top_layer_footprints() {
    let g = grid(4, 3, 1.0);
    let layout = VertexLayout::build(&g).unwrap();
    for lay in 1..4 {
        for col in 0..3 {
            assert_eq!(
                layout.vertices_of(g.node(lay, col).unwrap()).unwrap(),
                layout.vertices_of(col).unwrap()
            );
        }
    }
}

#[test]
fn mismatched_grid_is_rejected_by_cell2d() {
    let layout = VertexLayout::build(&grid(2, 3, 1.0)).unwrap();
    assert!(matches!(
        layout.cell2d(&grid(3, 3, 1.0)),
        Err(GridError::NodeOutOfRange { .. })
    ));
}
