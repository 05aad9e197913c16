use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use diskfit::cli::{Cli, Commands, DetectArgs, ValidateArgs};
use diskfit::config::SanityLimits;
use diskfit::ctx::Ctx;
use diskfit::io;
use diskfit::model::detect::detect;
use diskfit::pipeline::Pipeline;
use diskfit::schema::v1::{DataKind, Mode};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let mut ctx = Ctx::new(
                args.input,
                args.out,
                args.cutoffs.texts(),
                args.mode.into(),
                args.manual,
                args.strain,
                args.json,
                args.csv,
                env!("CARGO_PKG_VERSION"),
            );
            Pipeline::full().run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Detect(args) => handle_detect(args)?,
        Commands::Validate(args) => handle_validate(args)?,
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn handle_detect(args: DetectArgs) -> Result<()> {
    let dataset = io::dataset::read_dataset(&args.input)?;
    let kind = detect(&dataset.x_values())?;
    println!("samples: {}", dataset.len());
    println!("data: {}", kind_name(kind));
    Ok(())
}

fn handle_validate(args: ValidateArgs) -> Result<()> {
    let dataset = io::dataset::read_dataset(&args.input)?;
    let texts = args.cutoffs.texts();
    let limits = SanityLimits::default_v1();
    let mic = texts.parse_mic(&limits)?;
    let mode: Mode = args.mode.into();
    if mode == Mode::Disk {
        texts.parse_x()?;
    }
    let kind = detect(&dataset.x_values())?;

    println!("diskfit validate ok");
    println!("samples: {}", dataset.len());
    println!("data: {}", kind_name(kind));
    println!("mic breakpoints: S<={} R>={}", io::format_value(mic.s), io::format_value(mic.r));
    Ok(())
}

fn kind_name(kind: DataKind) -> &'static str {
    match kind {
        DataKind::Disk => "disk",
        DataKind::Mic => "mic",
    }
}
