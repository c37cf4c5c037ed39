use clap::{Parser, Subcommand};
use ganzhi_combinations::{
    ALL_GANZHIS, Dizhi, FormatCode, Ganzhi, GanzhiError, Tiangan, TianganOrDizhi,
};
use ganzhi_primitives::{ALL_DIZHIS, ALL_TIANGANS};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ganzhi", about = "Sexagenary (Ganzhi) cycle CLI")]
struct Cli {
    /// Output format: G (pinyin) or C (chinese)
    #[arg(long, global = true, default_value = "G")]
    format: FormatCode,
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ganzhi at a 1-based ordinal (wraps, may be negative)
    Ordinal {
        #[arg(allow_negative_numbers = true)]
        ordinal: i64,
    },
    /// Combine a tiangan and a dizhi
    Pair {
        /// Tiangan: pinyin, character, or 0-based index
        tiangan: String,
        /// Dizhi: pinyin, character, or 0-based index
        dizhi: String,
    },
    /// Step forward (or backward) from a 1-based ordinal
    Next {
        #[arg(allow_negative_numbers = true)]
        ordinal: i64,
        /// Number of steps, negative to go backward
        #[arg(long, allow_negative_numbers = true, default_value = "1")]
        steps: i64,
    },
    /// Forward distance from ordinal B to ordinal A
    Diff {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Step a single tiangan or dizhi within its own cycle
    Step {
        /// Pinyin or character; ambiguous pinyin (e.g. Wu) is read as a tiangan
        name: String,
        /// Number of steps, negative to go backward
        #[arg(long, allow_negative_numbers = true, default_value = "1")]
        steps: i64,
        /// Read the name as a dizhi
        #[arg(long)]
        dizhi: bool,
    },
    /// Print the full 60-element cycle
    Table,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "ganzhi_cli=debug"
    } else {
        "ganzhi_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let format = cli.format;
    debug!(format = format.code(), "parsed arguments");

    match cli.command {
        Commands::Ordinal { ordinal } => {
            let g = Ganzhi::from_ordinal(ordinal);
            debug!(ordinal, index = g.index(), "resolved ordinal");
            print_ganzhi(g, format);
        }

        Commands::Pair { tiangan, dizhi } => {
            let t = require_tiangan(&tiangan);
            let d = require_dizhi(&dizhi);
            let g = require_ok(Ganzhi::from_pair(t, d));
            print_ganzhi(g, format);
        }

        Commands::Next { ordinal, steps } => {
            let from = Ganzhi::from_ordinal(ordinal);
            let to = from.next(steps);
            debug!(from = from.ordinal(), steps, to = to.ordinal(), "stepped");
            println!(
                "{} -> {} ({} steps)",
                from.format(format),
                to.format(format),
                steps
            );
            print_ganzhi(to, format);
        }

        Commands::Diff { a, b } => {
            let ga = Ganzhi::from_ordinal(a);
            let gb = Ganzhi::from_ordinal(b);
            println!(
                "{} - {} = {}",
                ga.format(format),
                gb.format(format),
                ga - gb
            );
        }

        Commands::Step { name, steps, dizhi } => {
            let value = if dizhi {
                TianganOrDizhi::from(require_dizhi(&name))
            } else {
                require_tiangan_or_dizhi(&name)
            };
            let stepped = value.next(steps);
            debug!(
                kind = value.kind().name(),
                from = value.index(),
                to = stepped.index(),
                "stepped"
            );
            println!(
                "{} {} -> {}",
                value.kind().name(),
                value.format(format),
                stepped.format(format)
            );
        }

        Commands::Table => {
            for g in ALL_GANZHIS {
                let (t, d) = g.decompose();
                println!(
                    "{:>2}  {}  {}+{}  {}",
                    g.ordinal(),
                    g.format(format),
                    t.format(format),
                    d.format(format),
                    g.yinyang().name()
                );
            }
        }
    }
}

fn print_ganzhi(g: Ganzhi, format: FormatCode) {
    let (t, d) = g.decompose();
    println!(
        "{} (ordinal {}) - tiangan {} (index {}), dizhi {} (index {}), {}",
        g.format(format),
        g.ordinal(),
        t.format(format),
        t.index(),
        d.format(format),
        d.index(),
        g.yinyang().name()
    );
}

fn require_ok<T>(result: Result<T, GanzhiError>) -> T {
    result.unwrap_or_else(|e| {
        debug!(error = ?e, "operation failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

fn parse_tiangan(s: &str) -> Option<Tiangan> {
    if let Ok(i) = s.parse::<u8>() {
        return ALL_TIANGANS.get(i as usize).copied();
    }
    ALL_TIANGANS
        .iter()
        .copied()
        .find(|t| t.pinyin().eq_ignore_ascii_case(s) || t.chinese() == s)
}

fn parse_dizhi(s: &str) -> Option<Dizhi> {
    if let Ok(i) = s.parse::<u8>() {
        return ALL_DIZHIS.get(i as usize).copied();
    }
    ALL_DIZHIS
        .iter()
        .copied()
        .find(|d| d.pinyin().eq_ignore_ascii_case(s) || d.chinese() == s)
}

fn require_tiangan(s: &str) -> Tiangan {
    parse_tiangan(s).unwrap_or_else(|| {
        eprintln!("Invalid tiangan: {s} (pinyin, character, or index 0-9)");
        std::process::exit(1);
    })
}

fn require_dizhi(s: &str) -> Dizhi {
    parse_dizhi(s).unwrap_or_else(|| {
        eprintln!("Invalid dizhi: {s} (pinyin, character, or index 0-11)");
        std::process::exit(1);
    })
}

fn require_tiangan_or_dizhi(s: &str) -> TianganOrDizhi {
    if s.parse::<u8>().is_ok() {
        eprintln!("Ambiguous index: {s}; use a name, or --dizhi for a dizhi index");
        std::process::exit(1);
    }
    parse_tiangan(s)
        .map(TianganOrDizhi::from)
        .or_else(|| parse_dizhi(s).map(TianganOrDizhi::from))
        .unwrap_or_else(|| {
            eprintln!("Invalid tiangan or dizhi: {s}");
            std::process::exit(1);
        })
}
