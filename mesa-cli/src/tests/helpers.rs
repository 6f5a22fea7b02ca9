//! Test helpers for writing listing exports and invoking the rank command.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A small Tijuana export: one malformed row and one convenience store.
pub(super) const LISTINGS_CSV: &str = "\
Nombre,Categoría,Calificación,Número de Opiniones,Latitud,Longitud
Tacos El Franc,Taquería,4.7,\"2,500+\",32.5236,-117.0191
Mariscos Ruben,Mariscos,4.5,870,32.5297,-117.0277
OXXO Centro,Tienda,3.9,\"12,000+\",32.5320,-117.0370
Caesar's,Restaurante,4.6,\"1,900\",32.5337,-117.0369
Fila rota,Fonda,n/a,10,32.5000,-117.0000
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// Temporary workspace holding a listings export.
#[derive(Debug)]
pub(super) struct ListingExport {
    _dir: TempDir,
    root: Utf8PathBuf,
    csv: Utf8PathBuf,
}

impl ListingExport {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let csv = root.join("restaurantes_tijuana.csv");
        write_utf8(&csv, LISTINGS_CSV.as_bytes());
        Self {
            _dir: dir,
            root,
            csv,
        }
    }

    pub(super) fn csv(&self) -> &Utf8Path {
        &self.csv
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Parse `mesa rank <args>` and run it, capturing standard output.
pub(super) fn run_rank_args(args: &[String]) -> Result<Vec<u8>, CliError> {
    let mut invocation = vec!["mesa".to_owned(), "rank".to_owned()];
    invocation.extend(args.iter().cloned());
    let cli = Cli::try_parse_from(invocation).map_err(CliError::ArgumentParsing)?;
    let mut buffer = Vec::new();
    match cli.command {
        Command::Rank(rank_args) => run_rank_with(rank_args, &mut buffer)?,
    }
    Ok(buffer)
}

/// Names of the leaderboard rows in a JSON payload, best first.
pub(super) fn leaderboard_names(payload: &serde_json::Value) -> Vec<String> {
    payload
        .as_array()
        .expect("leaderboard array")
        .iter()
        .map(|row| row["name"].as_str().expect("name string").to_owned())
        .collect()
}
