use clap::Parser;
use pulsefield_core::SimConfig;

mod viewer;

#[derive(Parser)]
#[command(name = "pulsefield")]
#[command(about = "Interactive bouncing-particle simulation", long_about = None)]
struct Cli {
    /// Number of moving particles around the anchor
    #[arg(long, default_value_t = 300)]
    particles: usize,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720.0)]
    height: f32,
}

fn main() {
    let cli = Cli::parse();

    let config = SimConfig {
        particle_count: cli.particles,
        ..SimConfig::default()
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "pulsefield",
        options,
        Box::new(move |cc| Ok(Box::new(viewer::ViewerApp::new(config, cc)))),
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
