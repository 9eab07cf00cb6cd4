use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a synthetic tab-delimited meteorite dataset for trying out the filter.
#[derive(Debug, Parser)]
#[command(about)]
struct Args {
    /// Number of data rows (header not included).
    #[arg(long, default_value_t = 200)]
    rows: usize,

    /// PRNG seed; the same seed always produces the same file.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value = "sample_meteorites.txt")]
    output: PathBuf,
}

const HEADER: &str = "name\tid\tnametype\trecclass\tmass (g)\tfall\tyear\treclat\treclong\tGeoLocation\tStates\tCounties";

const PREFIXES: [&str; 6] = [
    "Northwest Africa",
    "Allan Hills",
    "Dhofar",
    "Sahara",
    "Yamato",
    "Queen Alexandra Range",
];
const CLASSES: [&str; 8] = ["L6", "H5", "LL5", "H4", "L5", "CM2", "EH4", "Iron, IIIAB"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

/// Mostly whole grams, with the odd decimal or unknown mass mixed in.
fn mass(rng: &mut SimpleRng) -> String {
    match rng.below(20) {
        0 => String::new(),
        1 => "Unknown".to_string(),
        2 => format!("{:.1}", rng.next_f64() * 5000.0),
        _ => {
            // Log-uniform from 1 g to ~60 t.
            let grams = 10f64.powf(rng.next_f64() * 7.8);
            format!("{}", grams.round() as u64)
        }
    }
}

fn year(rng: &mut SimpleRng) -> String {
    match rng.below(25) {
        0 => String::new(),
        _ => (1800 + rng.below(215)).to_string(),
    }
}

fn row(rng: &mut SimpleRng, id: usize) -> String {
    let name = format!("{} {}", rng.pick(&PREFIXES), rng.below(9000) + 1);
    let lat = rng.next_f64() * 180.0 - 90.0;
    let long = rng.next_f64() * 360.0 - 180.0;
    let fall = if rng.below(10) == 0 { "Fell" } else { "Found" };

    let fields = [
        name,
        id.to_string(),
        "Valid".to_string(),
        rng.pick(&CLASSES).to_string(),
        mass(rng),
        fall.to_string(),
        year(rng),
        format!("{lat:.5}"),
        format!("{long:.5}"),
        format!("({lat:.5}, {long:.5})"),
        String::new(),
        String::new(),
    ];

    // Some rows stop after the year, like entries without coordinates.
    let keep = if rng.below(8) == 0 { 7 } else { fields.len() };
    fields[..keep].join("\t")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{HEADER}")?;
    for id in 1..=args.rows {
        writeln!(out, "{}", row(&mut rng, id))?;
    }
    out.flush().context("flushing output")?;

    println!("Wrote {} meteorites to {}", args.rows, args.output.display());
    Ok(())
}
