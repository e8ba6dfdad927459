use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use pwd_wordlist::{
    analyze_file, default_special_chars, full_date_tokens, generate, write_report, year_tokens,
    BufferedSink, GenerationConfig, Report, Result, Sink, TokenSet, DEFAULT_MAX_OUTPUT_COUNT,
};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a wordlist from combinations of tokens
    Generate(GenerateArgs),
    /// Score every password of a wordlist and print a report
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Token file, one word per line
    #[arg(short, long)]
    input: PathBuf,

    /// Wordlist to write
    #[arg(short, long)]
    output: PathBuf,

    /// Maximum number of lines written
    #[arg(long, default_value_t = DEFAULT_MAX_OUTPUT_COUNT)]
    max_combinations: u64,

    /// Minimum number of tokens per combination
    #[arg(long, default_value_t = 1)]
    min_size: usize,

    /// Maximum number of tokens per combination (default: token count)
    #[arg(long)]
    max_size: Option<usize>,

    /// Placed between joined tokens
    #[arg(long, default_value = "")]
    separator: String,

    /// Add lowercase, capitalized and uppercase variants
    #[arg(long, default_value_t = false)]
    case_variants: bool,

    /// Special characters to prefix and suffix (default: $PWD_WORDLIST_SPECIALS or "!@#$%")
    #[arg(long, conflicts_with = "no_specials")]
    specials: Option<String>,

    /// Do not affix special characters
    #[arg(long, default_value_t = false)]
    no_specials: bool,

    /// Also combine the special characters as tokens
    #[arg(long, default_value_t = false)]
    specials_as_tokens: bool,

    /// Add every year of a range as a token, e.g. 1990-2005
    #[arg(long, value_parser = parse_year_range)]
    years: Option<(u32, u32)>,

    /// With --years, also add DD/MM/YYYY dates for those years
    #[arg(long, default_value_t = false, requires = "years")]
    full_dates: bool,

    /// Extra token (repeatable)
    #[arg(long = "extra", value_name = "WORD")]
    extras: Vec<String>,

    /// No effect: this tool never prompts, every choice is a flag
    #[arg(long, default_value_t = false)]
    no_interactive: bool,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Wordlist to analyze
    #[arg(short, long)]
    input: PathBuf,

    /// Also write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Analyze only the first N passwords
    #[arg(long)]
    sample: Option<usize>,
}

fn parse_year_range(value: &str) -> std::result::Result<(u32, u32), String> {
    let (start, end) = value
        .split_once('-')
        .ok_or_else(|| format!("expected START-END, got '{}'", value))?;
    let start = start.trim().parse().map_err(|_| format!("invalid year '{}'", start))?;
    let end = end.trim().parse().map_err(|_| format!("invalid year '{}'", end))?;
    Ok((start, end))
}

/// Counts written lines on a progress bar.
struct ProgressSink<S> {
    inner: S,
    bar: ProgressBar,
}

impl<S: Sink> Sink for ProgressSink<S> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_line(line)?;
        self.bar.inc(1);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Bar sized to the expected candidate count, bounded by the output cap.
fn progress_bar(config: &GenerationConfig) -> ProgressBar {
    let cap = config.max_output_count;
    let total = config
        .expected_candidates()
        .map_or(cap, |n| n.min(u128::from(cap)) as u64);

    let bar = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░  "));
    }
    bar.set_message("Generating candidates...");
    bar
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let started = Instant::now();
    if args.no_interactive {
        debug!("--no-interactive given; prompts are never shown");
    }

    let mut tokens = TokenSet::load(&args.input)?;
    info!("Loaded {} tokens from {}", tokens.len(), args.input.display());

    if let Some((start, end)) = args.years {
        tokens.extend(year_tokens(start, end)?);
        if args.full_dates {
            tokens.extend(full_date_tokens(start, end)?);
        }
    }
    tokens.extend(args.extras);

    let special_chars: Vec<char> = if args.no_specials {
        Vec::new()
    } else {
        match args.specials {
            Some(chars) => chars.chars().filter(|c| !c.is_whitespace()).collect(),
            None => default_special_chars(),
        }
    };
    if args.specials_as_tokens {
        tokens.extend(special_chars.iter().map(|c| c.to_string()));
    }

    let config = GenerationConfig {
        tokens,
        min_combination_size: args.min_size,
        max_combination_size: args.max_size,
        separator: args.separator,
        case_variants: args.case_variants,
        append_special: !special_chars.is_empty(),
        special_chars,
        max_output_count: args.max_combinations,
        ..GenerationConfig::default()
    };

    config.validate()?;
    let mut sink = ProgressSink {
        inner: BufferedSink::create(&args.output)?,
        bar: progress_bar(&config),
    };
    let outcome = generate(&config, &mut sink);
    sink.bar.finish_and_clear();
    let summary = outcome?;

    if summary.limit_reached {
        warn!("Limit of {} combinations reached", config.max_output_count);
    }

    let size_mb = std::fs::metadata(&args.output)
        .map(|m| m.len() as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0);
    println!("Wordlist created");
    println!(
        "Total: {} candidates (at least {} characters)",
        summary.written, config.min_output_length
    );
    println!("File: {} ({:.2} MB)", args.output.display(), size_mb);
    println!("Time: {:.2} seconds", started.elapsed().as_secs_f64());
    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let stats = analyze_file(&args.input, args.sample)?;
    print!("{}", Report::new(&stats));

    if let Some(path) = &args.output {
        write_report(&stats, path)?;
        println!("Report saved to {}", path.display());
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Analyze(args) => run_analyze(args),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
