// main.rs
//
// Builds the layered column grid of the heat-transport course exercise: a thin
// top layer, 99 geometrically graded overburden layers and a horizontally
// connected reservoir layer, then prints a summary of the DISU description.

use disugrid::grid::geometric_botm;
use disugrid::{ConnectivityConfig, DisuGrid, GridDescription, GridError, Real};

const NCOL: usize = 20;
const DELR: Real = 1.0;
const DELC: Real = 1.0;
const TOP_OVERBURDEN: Real = 100.0;
const OVERBURDEN_THICKNESS: Real = 100.0;
const OVERBURDEN_LAYERS: usize = 100;
const LAYER_MULT: Real = 1.02;
const RESERVOIR_THICKNESS: Real = 10.0;

fn main() -> Result<(), GridError> {
    env_logger::init();

    let mut botm = geometric_botm(
        TOP_OVERBURDEN,
        OVERBURDEN_THICKNESS,
        OVERBURDEN_LAYERS,
        LAYER_MULT,
    )?;
    botm.push(TOP_OVERBURDEN - OVERBURDEN_THICKNESS - RESERVOIR_THICKNESS);

    let grid = GridDescription::new(botm.len(), NCOL, DELR, DELC, TOP_OVERBURDEN, botm)?;
    let disu = DisuGrid::build(grid, ConnectivityConfig::default())?;
    disu.table.validate()?;

    println!("nodes:    {}", disu.nodes());
    println!("nja:      {}", disu.nja());
    println!("vertices: {}", disu.nvert());

    let reservoir_layer = disu.grid.nlay() - 1;
    for col in [0, NCOL / 2, NCOL - 1] {
        let n = disu.grid.node(reservoir_layer, col)?;
        if let Some(row) = disu.table.row(n) {
            println!(
                "reservoir cell {n}: ja = {:?}, cl12 = {:?}, angldeg = {:?}",
                row.ja, row.cl12, row.angldeg
            );
        }
    }

    let faux = disu.faux_grid(1)?;
    let (xmin, xmax, _, _) = faux.extent();
    println!("faux grid shape {:?}, x extent {xmin}..{xmax}", faux.shape());
    Ok(())
}
