//! Voxel Editor main entry point

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vx_frontend=debug,vx_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Voxel Editor");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Voxel Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "vx",
        native_options,
        Box::new(|cc| Ok(Box::new(vx_frontend::VoxEditorApp::new(cc)))),
    )
}
