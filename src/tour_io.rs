use std::{error::Error, path::Path};

use tour_search::graph::{PointSet, Tour};

/// Writes the visited points as `name,x,y` records so the tour can be imported again.
pub fn export_tour<P: AsRef<Path>>(
    filename: P,
    tour: &Tour,
    points: &PointSet,
) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(filename)?;

    for point in tour.points(points) {
        writer.serialize(point)?;
    }
    writer.flush()?;

    Ok(())
}
