//! Legacy ASCII VTK polydata snapshot writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::SnapshotExporter;
use crate::errors::SimulationError;
use crate::physics::particles::ParticleStore;

/// Writes one `positions_<step>.vtk` file per step into a target directory.
///
/// The files carry only point positions, in the legacy ASCII polydata
/// layout ParaView and friends read directly:
///
/// ```text
/// # vtk DataFile Version 1.0
/// 3D triangulation data
/// ASCII
///
/// DATASET POLYDATA
/// POINTS <n> float
/// <x> <y> <z>
/// ...
/// ```
///
/// Two-dimensional runs keep the depth column at zero.
#[derive(Debug)]
pub struct VtkExporter {
    directory: PathBuf,
}

impl VtkExporter {
    /// Create the exporter, creating the output directory if needed.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let directory = directory.as_ref().to_path_buf();
        std::fs::create_dir_all(&directory).map_err(|e| {
            SimulationError::Export(format!("creating {}: {e}", directory.display()))
        })?;
        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn write_file(&self, path: &Path, store: &ParticleStore) -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);

        writeln!(out, "# vtk DataFile Version 1.0")?;
        writeln!(out, "3D triangulation data")?;
        writeln!(out, "ASCII")?;
        writeln!(out)?;
        writeln!(out, "DATASET POLYDATA")?;
        writeln!(out, "POINTS {} float", store.len())?;
        for p in store.positions() {
            writeln!(out, "{} {} {}", p.x, p.y, p.z)?;
        }

        out.flush()
    }
}

impl SnapshotExporter for VtkExporter {
    fn write_step(&mut self, step: usize, store: &ParticleStore) -> Result<(), SimulationError> {
        let path = self.directory.join(format!("positions_{step}.vtk"));
        self.write_file(&path, store)
            .map_err(|e| SimulationError::Export(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::math::Vector;

    fn temp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("particlebox-vtk-{tag}-{}", std::process::id()))
    }

    #[test]
    fn test_snapshot_layout() {
        let dir = temp_dir("layout");
        let mut exporter = VtkExporter::new(&dir).unwrap();

        let mut store = ParticleStore::allocate(2).unwrap();
        store.positions_mut()[0] = Vector::new(1.5, 2.0, 0.0);
        store.positions_mut()[1] = Vector::new(100.0, 200.0, 300.0);

        exporter.write_step(7, &store).unwrap();

        let contents = std::fs::read_to_string(dir.join("positions_7.vtk")).unwrap();
        assert_eq!(
            contents,
            "# vtk DataFile Version 1.0\n\
             3D triangulation data\n\
             ASCII\n\
             \n\
             DATASET POLYDATA\n\
             POINTS 2 float\n\
             1.5 2 0\n\
             100 200 300\n"
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_one_file_per_step() {
        let dir = temp_dir("steps");
        let mut exporter = VtkExporter::new(&dir).unwrap();
        let store = ParticleStore::allocate(1).unwrap();

        for step in 0..3 {
            exporter.write_step(step, &store).unwrap();
        }

        for step in 0..3 {
            assert!(dir.join(format!("positions_{step}.vtk")).exists());
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
