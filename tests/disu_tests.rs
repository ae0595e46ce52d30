use disugrid::grid::{botm_from_thicknesses, geometric_botm};
use disugrid::{ConnectivityConfig, DisuGrid, GridDescription, GridError};

#[test]
fn course_like_grid_builds_end_to_end() {
    let mut botm = geometric_botm(100.0, 100.0, 100, 1.02).unwrap();
    botm.push(-10.0);
    let grid = GridDescription::new(101, 10, 1.0, 1.0, 100.0, botm).unwrap();
    let disu = DisuGrid::build(grid, ConnectivityConfig::default()).unwrap();

    assert_eq!(disu.nodes(), 1010);
    assert_eq!(disu.nvert(), 22);
    disu.table.validate().unwrap();

    // 10 top cells (2) + 990 overburden cells (3) + trimmed reservoir row (3 + 8*4 + 3)
    let expected_nja = 10 * 2 + 99 * 10 * 3 + (3 + 8 * 4 + 3);
    assert_eq!(disu.nja(), expected_nja);

    let faux = disu.faux_grid(1).unwrap();
    assert_eq!(faux.shape(), (101, 1, 10));
}

#[test]
fn build_fails_without_partial_output() {
    let grid = GridDescription::new(3, 1, 1.0, 1.0, 0.0, vec![-1.0, -2.0, -3.0]).unwrap();
    let config = ConnectivityConfig::new().with_reservoir_start_layer(1);
    assert!(matches!(
        DisuGrid::build(grid, config),
        Err(GridError::TierBoundary { .. })
    ));
}

#[test]
fn cell2d_records_match_layout() {
    let botm = botm_from_thicknesses(10.0, &[2.0, 2.0]).unwrap();
    let grid = GridDescription::new(2, 4, 0.5, 2.0, 10.0, botm).unwrap();
    let disu = DisuGrid::build(grid, ConnectivityConfig::default()).unwrap();
    for cell in &disu.cell2d {
        assert_eq!(cell.vertices, disu.layout.vertices_of(cell.node).unwrap());
        let col = cell.node % 4;
        assert_eq!(cell.xc, 0.25 + col as disugrid::Real * 0.5);
        assert_eq!(cell.yc, 1.0);
    }
}
