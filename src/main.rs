use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use cifra::{import_song, render_document, ImportOptions, RenderOptions, Spelling};

/// Parse a chord chart, optionally transpose it, and print it aligned
#[derive(Parser, Debug)]
#[command(name = "cifra", version, about)]
struct Args {
    /// Chart file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Semitones to shift every chord (may be negative)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    transpose: i32,

    /// Target key; transposes from the song's key and picks its spelling
    #[arg(long, conflicts_with = "transpose")]
    to: Option<String>,

    /// Spell accidentals with flats
    #[arg(long)]
    flats: bool,

    /// Print the imported song as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Do not print section headings
    #[arg(long)]
    no_headings: bool,

    /// Song title (overrides front matter)
    #[arg(long)]
    title: Option<String>,

    /// Song artist (overrides front matter)
    #[arg(long)]
    artist: Option<String>,

    /// Song key (overrides front matter and inference)
    #[arg(long)]
    key: Option<String>,
}

fn read_source(input: Option<&PathBuf>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = match read_source(args.input.as_ref()) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            process::exit(1);
        }
    };

    let options = ImportOptions {
        title: args.title.clone(),
        artist: args.artist.clone(),
        key: args.key.clone(),
        tags: Vec::new(),
    };
    let song = match import_song(&source, &options) {
        Ok(song) => song,
        Err(e) => {
            eprintln!("Import error: {}", e);
            process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&song) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing song: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let mut render = RenderOptions {
        semitones: args.transpose,
        spelling: if args.flats { Spelling::Flat } else { Spelling::Sharp },
        headings: !args.no_headings,
    };

    if let Some(target) = &args.to {
        let from = match song.metadata.key.as_deref() {
            Some(key) => key,
            None => {
                eprintln!("Cannot transpose to {}: song has no key", target);
                process::exit(1);
            }
        };
        match cifra::transpose::semitones_between(from, target) {
            Some(n) => {
                render.semitones = n;
                if !args.flats {
                    render.spelling = Spelling::for_key(target);
                }
            }
            None => {
                eprintln!("Unknown key: {}", target);
                process::exit(1);
            }
        }
    }

    println!("{}", render_document(&song.document, &render));
}
