//! HEXFORGE CLI - board file editing from the command line
//!
//! Commands:
//! - generate: create a board from generation settings
//! - info: print board dimensions, tags, and a terrain census
//! - validate: print structural problems
//! - flood, flatten, shift, resize, strip: bulk transforms

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use hexforge_core::{
    correct_exits, flatten, flood, generate, load_board, remove_terrains, resize_implant,
    save_board, shift_levels, terrain_id_to_index, validate, Board, BoardSettings, History,
    TerrainTypeId, TERRAIN_TYPES,
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "hexforge")]
#[command(about = "HEXFORGE hex map board editor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new board file
    Generate {
        #[arg(long, default_value = "16")]
        width: i32,
        #[arg(long, default_value = "17")]
        height: i32,
        #[arg(long, default_value = "0")]
        hilliness: u32,
        #[arg(long, default_value = "0")]
        woods: u32,
        #[arg(long, default_value = "0")]
        lakes: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        theme: Option<String>,
        output: PathBuf,
    },
    /// Print board summary
    Info { board: PathBuf },
    /// Print structural problems; exits non-zero if any
    Validate { board: PathBuf },
    /// Flood everything below a surface elevation
    Flood {
        #[arg(long)]
        surface: i32,
        /// Leave flooded terrain in place instead of clearing it
        #[arg(long)]
        keep_terrain: bool,
        board: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Set every elevation to zero
    Flatten {
        board: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Shift every elevation by a delta
    Shift {
        #[arg(long, allow_hyphen_values = true)]
        delta: i32,
        board: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Resize the board by edge deltas, implanting the old content
    Resize {
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        west: i32,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        north: i32,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        east: i32,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        south: i32,
        board: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Remove terrain types everywhere (comma-separated ids)
    Strip {
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,
        board: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            width,
            height,
            hilliness,
            woods,
            lakes,
            seed,
            theme,
            output,
        } => {
            if width <= 0 || height <= 0 {
                bail!("board dimensions must be positive, got {}x{}", width, height);
            }
            let settings = BoardSettings {
                width,
                height,
                theme,
                hilliness,
                woods,
                lakes,
                seed,
            };
            let board = generate(&settings);
            write_board(&board, &output)?;
            info!(path = %output.display(), "board generated");
        }

        Commands::Info { board } => {
            let board = read_board(&board)?;
            println!("Size: {}x{}", board.width(), board.height());
            println!("Auto exits: {}", board.roads_auto_exit);
            if !board.tags.is_empty() {
                let tags: Vec<&str> = board.tags.iter().map(String::as_str).collect();
                println!("Tags: {}", tags.join(", "));
            }
            for (idx, tt) in TERRAIN_TYPES.iter().enumerate() {
                let type_id = idx as TerrainTypeId;
                let count = board
                    .hexes()
                    .filter(|(_, h)| h.contains_terrain(type_id))
                    .count();
                if count > 0 {
                    println!("{}: {} hexes", tt.name, count);
                }
            }
        }

        Commands::Validate { board } => {
            let board = read_board(&board)?;
            let problems = validate(&board);
            for problem in &problems {
                println!("{}", problem);
            }
            if !problems.is_empty() {
                bail!("{} problem(s) found", problems.len());
            }
            println!("Board is valid");
        }

        Commands::Flood {
            surface,
            keep_terrain,
            board,
            output,
        } => {
            transform_file(&board, output.as_deref(), |b, history| {
                flood(b, history, surface, !keep_terrain);
            })?;
        }

        Commands::Flatten { board, output } => {
            transform_file(&board, output.as_deref(), flatten)?;
        }

        Commands::Shift {
            delta,
            board,
            output,
        } => {
            transform_file(&board, output.as_deref(), |b, history| {
                shift_levels(b, history, delta);
            })?;
        }

        Commands::Resize {
            west,
            north,
            east,
            south,
            board,
            output,
        } => {
            let path = board;
            let old = read_board(&path)?;
            let new_width = old.width() + west + east;
            let new_height = old.height() + north + south;
            if new_width <= 0 || new_height <= 0 {
                bail!(
                    "resize would produce a {}x{} board",
                    new_width,
                    new_height
                );
            }
            let mut board = resize_implant(&old, west, north, east, south, &BoardSettings::default());
            correct_exits(&mut board);
            write_board(&board, output.as_deref().unwrap_or(&path))?;
            info!(width = new_width, height = new_height, "board resized");
        }

        Commands::Strip {
            types,
            board,
            output,
        } => {
            let mut ids: Vec<TerrainTypeId> = Vec::new();
            for id in &types {
                match terrain_id_to_index(id) {
                    Some(idx) => ids.push(idx),
                    None => bail!("unknown terrain type '{}'", id),
                }
            }
            transform_file(&board, output.as_deref(), |b, history| {
                remove_terrains(b, history, &ids);
            })?;
        }
    }

    Ok(())
}

fn read_board(path: &Path) -> anyhow::Result<Board> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading board file {}", path.display()))?;
    let board = load_board(&bytes)
        .with_context(|| format!("loading board from {}", path.display()))?;
    Ok(board)
}

fn write_board(board: &Board, path: &Path) -> anyhow::Result<()> {
    let bytes = save_board(board)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("writing board file {}", path.display()))?;
    Ok(())
}

/// Load, transform, run exit correction, save
fn transform_file(
    path: &Path,
    output: Option<&Path>,
    apply: impl FnOnce(&mut Board, &mut History),
) -> anyhow::Result<()> {
    let mut board = read_board(path)?;
    let mut history = History::new();

    apply(&mut board, &mut history);
    correct_exits(&mut board);

    write_board(&board, output.unwrap_or(path))?;
    // the file write succeeded; the in-memory session is clean
    history.mark_saved();
    info!(steps = history.depth(), "transform applied");
    Ok(())
}
