//! Radar chart demo: builds a five-axis chart with a centered outline and
//! ranked pointers, then logs the resulting mesh.
//!
//! ```text
//! cargo run --example radar
//! RUST_LOG=radar_mesh=trace cargo run --example radar
//! ```

use radar_mesh::chart::{ChartConfig, RadarChart, RectSize};
use radar_mesh::mesh::{Color32, MeshBuffer};
use radar_mesh::outline::{OutlineBuilder, OutlineMode, OutlineStyle};
use radar_mesh::pointer::{PointerController, RankEntry, RankedPointer};

const VALUES: [f32; 5] = [0.9, 0.35, 0.7, 0.05, 0.6];

fn main() -> radar_mesh::Result<()> {
    // Default: WARN for everything, INFO for the demo and the crate.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("radar=info".parse().unwrap_or_default())
        .add_directive("radar_mesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let rect = RectSize::new(200.0, 160.0);
    let mut chart = RadarChart::new(ChartConfig {
        corner_count: VALUES.len(),
        rect,
        fill_color: Color32::new(80, 160, 255, 200),
    });
    chart.update_values(&VALUES)?;

    chart.add_modifier(Box::new(OutlineBuilder::new(OutlineStyle::new(
        4.0,
        Color32::BLACK,
        OutlineMode::Center,
    ))));

    let mut pointers = PointerController::new();
    let mut ids = Vec::with_capacity(VALUES.len());
    for _ in VALUES {
        ids.push(pointers.add_pointer(Box::new(RankedPointer::new(vec![
            RankEntry::new(0.0, "rank_c"),
            RankEntry::new(0.5, "rank_b"),
            RankEntry::new(0.8, "rank_a"),
        ]))));
    }
    let pointers_id = chart.add_modifier(Box::new(pointers));

    let mut buffer = MeshBuffer::new();
    chart.rebuild(&mut buffer)?;
    tracing::info!(
        vertices = buffer.vertex_count(),
        triangles = buffer.triangle_count(),
        "mesh ready"
    );

    if let Some(pointers) = chart.modifier_mut::<PointerController>(pointers_id) {
        for (id, value) in ids.iter().zip(VALUES) {
            if let Some(pointer) = pointers.pointer_mut::<RankedPointer<&'static str>>(*id) {
                pointer.update_rank(f64::from(value));
                let at = pointer.position();
                tracing::info!(x = at.x, y = at.y, sprite = ?pointer.sprite(), "pointer");
            }
        }
    }

    for (i, v) in buffer.vertices().iter().enumerate() {
        tracing::debug!(i, x = v.position.x, y = v.position.y, "vertex");
    }
    Ok(())
}
