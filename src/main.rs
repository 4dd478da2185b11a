use std::env;
use std::path::Path;
use std::process;

use stringart::cancel::CancelToken;
use stringart::config::load_config;
use stringart::image::{load_grayscale, save_edge_map_png, write_json_file};
use stringart::layout::CanvasSize;
use stringart::PatternGenerator;

fn main() {
    env_logger::init();
    let Some(config_path) = env::args().nth(1) else {
        eprintln!("usage: stringart <config.json>");
        process::exit(2);
    };
    if let Err(err) = run(Path::new(&config_path)) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(config_path: &Path) -> Result<(), String> {
    let config = load_config(config_path)?;
    let gray = load_grayscale(&config.input)?;

    // The canvas always follows the decoded image so the edge map and the
    // peg layout share one coordinate space.
    let mut params = config.params;
    params.layout.canvas = CanvasSize::new(gray.width() as f32, gray.height() as f32);

    let generator = PatternGenerator::new(params);
    let result = generator
        .process(Some(gray.as_view()), &CancelToken::new())
        .map_err(|e| e.to_string())?;

    if let (Some(png_path), Some(edge)) = (&config.output.edge_map_png, &result.edge_map) {
        save_edge_map_png(edge, png_path)?;
    }
    write_json_file(&config.output.pattern_json, &result)?;

    println!(
        "pegs={} lines={} score={:.2} degenerate={} latency_ms={:.3}",
        result.pegs.len(),
        result.path.len(),
        result.score,
        result.degenerate,
        result.latency_ms
    );
    Ok(())
}
