use anyhow::Context;
use icosphere::{
    model::{LineModel, TriangleModel},
    Settings,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut settings = Settings::default();
    if let Some(arg) = std::env::args().nth(1) {
        let level: i64 = arg
            .parse()
            .with_context(|| format!("invalid subdivision level {:?}", arg))?;
        settings.set_subdivisions(level);
    }

    let sphere = settings.build().context("failed to build icosphere")?;
    log::info!(
        "level {}: {} vertices, {} faces, {} edges",
        sphere.level,
        sphere.vertices.len(),
        sphere.faces.len(),
        sphere.edges.len()
    );

    let lines = LineModel::new(&sphere).context("failed to build line buffer")?;
    let tris =
        TriangleModel::with_computed_normals(&sphere).context("failed to build mesh buffer")?;
    log::info!(
        "line buffer: {} + {} bytes, mesh buffer: {} + {} bytes",
        lines.vertex_bytes().len(),
        lines.index_bytes().len(),
        tris.vertex_bytes().len(),
        tris.index_bytes().len()
    );

    Ok(())
}
