use edge_maps::config::{load_config, EdgeToolConfig};
use edge_maps::diagnostics::EdgeReport;
use edge_maps::error::ToolError;
use edge_maps::image::io::{load_luminance, write_json_file};
use edge_maps::GradientPipeline;
use log::info;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ToolError> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: EdgeToolConfig = load_config(Path::new(&config_path))?;

    let image = load_luminance(&config.input, config.normalize)?;
    info!(
        "loaded {} ({}x{}, normalize={})",
        config.input.display(),
        image.w,
        image.h,
        config.normalize
    );

    let pipeline = GradientPipeline::new(config.pipeline);
    let (_maps, report) = pipeline.compute_with_diagnostics(&image)?;

    print_text_summary(&report);

    match &config.output.report_json {
        Some(path) => {
            write_json_file(path, &report)?;
            println!("\nJSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("\nJSON report:\n{json}");
        }
    }

    Ok(())
}

fn usage() -> ToolError {
    ToolError::Usage("Usage: edge_maps <config.json>".to_string())
}

fn print_text_summary(report: &EdgeReport) {
    println!("Edge maps summary");
    println!(
        "  input: {}x{} strategy={:?}",
        report.input.width, report.input.height, report.input.strategy
    );
    for map in &report.maps {
        println!(
            "  {:<11} min={:>10.3} max={:>10.3} mean={:>10.3}",
            map.name, map.stats.min, map.stats.max, map.stats.mean
        );
    }
    let stages = report
        .timings
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "\nTimings (ms): {stages} total={:.3}",
        report.timings.total_ms
    );
}
