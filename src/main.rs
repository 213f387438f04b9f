// --- Normalizador de horarios - Archivo principal ---

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use timetable::{guardar_json, leer_horario_excel, Config};
use tracing::info;

#[derive(Parser)]
#[command(name = "timetable", about = "Convierte un libro de horarios Excel a JSON")]
struct Cli {
    /// Libro de entrada (.xlsx, .xls, .xlsb, .ods)
    input: PathBuf,
    /// Archivo JSON de salida (default: timetable_data.json)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.input, cli.output);
    info!("=== Normalizador de horarios: {:?} -> {:?} ===", config.input, config.output);

    let horario = leer_horario_excel(&config.input, config.skip_rows)
        .with_context(|| format!("no se pudo procesar {}", config.input.display()))?;
    guardar_json(&horario, &config.output)
        .with_context(|| format!("no se pudo escribir {}", config.output.display()))?;

    info!("{} hojas procesadas", horario.len());
    Ok(())
}
