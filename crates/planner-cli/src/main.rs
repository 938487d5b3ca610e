use anyhow::{Context, Result};
use chrono::Weekday;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pdf_planner::{ChronoCalendar, Handedness, PlannerOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "planner", about = "Hyperlinked calendar planner generator", version)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a planner PDF
    Generate {
        /// Output PDF file
        #[arg(short, long, default_value = "planner.pdf")]
        output: PathBuf,

        #[command(flatten)]
        planner: PlannerArgs,
    },

    /// Show page counts without generating anything
    Stats {
        #[command(flatten)]
        planner: PlannerArgs,
    },
}

/// Planner settings; any flag given overrides the config file
#[derive(Args)]
struct PlannerArgs {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// First year of the planner
    #[arg(long)]
    start_year: Option<i32>,

    /// Number of years
    #[arg(long)]
    years: Option<usize>,

    /// Page size preset
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Page orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Writing hand; left puts the margin and notes on the right
    #[arg(long, value_enum)]
    handedness: Option<HandednessArg>,

    /// First column of month grids
    #[arg(long, value_enum)]
    first_day: Option<WeekdayArg>,

    /// Margin line offset from the page edge in points
    #[arg(long)]
    margin: Option<f32>,

    /// Main page title
    #[arg(long)]
    title: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    Remarkable,
    RemarkablePro,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum HandednessArg {
    Left,
    Right,
}

#[derive(Clone, Copy, ValueEnum)]
enum WeekdayArg {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl From<PaperArg> for pdf_planner::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::Remarkable => Self::Remarkable,
            PaperArg::RemarkablePro => Self::RemarkablePro,
        }
    }
}

impl From<OrientationArg> for pdf_planner::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<HandednessArg> for Handedness {
    fn from(arg: HandednessArg) -> Self {
        match arg {
            HandednessArg::Left => Self::LeftHanded,
            HandednessArg::Right => Self::RightHanded,
        }
    }
}

impl From<WeekdayArg> for Weekday {
    fn from(arg: WeekdayArg) -> Self {
        match arg {
            WeekdayArg::Sunday => Weekday::Sun,
            WeekdayArg::Monday => Weekday::Mon,
            WeekdayArg::Tuesday => Weekday::Tue,
            WeekdayArg::Wednesday => Weekday::Wed,
            WeekdayArg::Thursday => Weekday::Thu,
            WeekdayArg::Friday => Weekday::Fri,
            WeekdayArg::Saturday => Weekday::Sat,
        }
    }
}

impl PlannerArgs {
    /// Load the config file, if any, and apply the flags on top of it
    async fn into_options(self) -> Result<PlannerOptions> {
        let mut options = match &self.config {
            Some(path) => PlannerOptions::load(path)
                .await
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => PlannerOptions::default(),
        };

        if let Some(start_year) = self.start_year {
            options.start_year = start_year;
        }
        if let Some(years) = self.years {
            options.num_years = years;
        }
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            options.orientation = orientation.into();
        }
        if let Some(handedness) = self.handedness {
            options.handedness = handedness.into();
        }
        if let Some(first_day) = self.first_day {
            options.first_day_of_week = first_day.into();
        }
        if let Some(margin) = self.margin {
            options.margin_pt = margin;
        }
        if let Some(title) = self.title {
            options.title = title;
        }

        options.validate()?;
        Ok(options)
    }
}

fn print_statistics(options: &PlannerOptions) -> Result<()> {
    let stats = pdf_planner::calculate_statistics(options, &ChronoCalendar)?;
    let (width, height) = options.page_dimensions();
    println!("Planner Statistics:");
    println!(
        "  Years: {} ({}-{})",
        stats.years,
        options.start_year,
        options.start_year + stats.years as i32 - 1
    );
    println!("  Months: {}", stats.months);
    println!("  Days: {}", stats.days);
    println!("  Total pages: {}", stats.total_pages);
    println!(
        "  Page size: {} {:.0} x {:.0} pt",
        options.paper_size.name(),
        width,
        height
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Generate { output, planner } => {
            let options = planner.into_options().await?;
            print_statistics(&options)?;

            log::info!("Building planner '{}'", options.title);
            let doc = pdf_planner::generate_planner(&options).await?;
            log::info!(
                "Writing {} pages to {}",
                doc.get_pages().len(),
                output.display()
            );
            pdf_planner::save_pdf(doc, &output)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Generated planner → {}", output.display());
        }

        Commands::Stats { planner } => {
            let options = planner.into_options().await?;
            print_statistics(&options)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn planner_args(args: &[&str]) -> PlannerArgs {
        let cli = Cli::try_parse_from(["planner", "stats"].iter().chain(args)).unwrap();
        match cli.command {
            Commands::Stats { planner } => planner,
            Commands::Generate { .. } => panic!("Expected stats command"),
        }
    }

    #[tokio::test]
    async fn test_flags_override_config_handedness() {
        let config = PlannerOptions {
            handedness: Handedness::LeftHanded,
            num_years: 2,
            ..Default::default()
        };
        let temp_file = NamedTempFile::new().unwrap();
        config.save(temp_file.path()).await.unwrap();
        let path = temp_file.path().to_str().unwrap();

        let options = planner_args(&["--config", path]).into_options().await.unwrap();
        assert_eq!(options.handedness, Handedness::LeftHanded);
        assert_eq!(options.num_years, 2);

        let options = planner_args(&["--config", path, "--handedness", "right"])
            .into_options()
            .await
            .unwrap();
        assert_eq!(options.handedness, Handedness::RightHanded);
        assert_eq!(options.num_years, 2);
    }

    #[tokio::test]
    async fn test_defaults_without_flags() {
        let options = planner_args(&[]).into_options().await.unwrap();
        assert_eq!(options, PlannerOptions::default());

        let options = planner_args(&["--handedness", "left", "--years", "3"])
            .into_options()
            .await
            .unwrap();
        assert_eq!(options.handedness, Handedness::LeftHanded);
        assert_eq!(options.num_years, 3);
    }

    #[tokio::test]
    async fn test_invalid_flags_rejected() {
        assert!(planner_args(&["--years", "0"]).into_options().await.is_err());
        assert!(Cli::try_parse_from(["planner", "stats", "--handedness", "both"]).is_err());
    }
}
