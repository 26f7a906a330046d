use clap::{Parser, Subcommand};
use rubber_grading_common::{DashboardTab, Role};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rubber-grade")]
#[command(about = "Rubber sheet grading demo: grade images, write reports, browse the mock dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Grade image files or folders
    Grade {
        /// Image files, or folders whose images are graded in name order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Write a report (and a copy of the image) per file into this folder
        #[arg(short, long)]
        report_dir: Option<PathBuf>,

        /// Print results as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Simulation tick in milliseconds (default: config, 200)
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Show the mock dashboard
    Dashboard {
        /// overview / history / analytics
        #[arg(short, long, default_value = "overview")]
        tab: DashboardTab,

        /// Log in with this name before opening the dashboard
        #[arg(short, long)]
        name: Option<String>,

        /// farmer / merchant / admin
        #[arg(short, long, default_value = "farmer")]
        role: Role,
    },

    /// Download the dashboard's static files (CSV, users JSON, sample images)
    Assets {
        /// Site base URL (default: config or RUBBER_GRADING_ASSET_URL)
        #[arg(long)]
        base_url: Option<String>,

        /// Output folder
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// List grade bands and the filename tokens that select them
    Grades,

    /// Show or edit settings
    Config {
        /// Set the asset base URL
        #[arg(long)]
        set_asset_url: Option<String>,

        /// Set the simulation tick in milliseconds
        #[arg(long)]
        set_interval_ms: Option<u64>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_grade() {
        let cli = Cli::parse_from(["rubber-grade", "-v", "grade", "a.jpg", "dir", "--json"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Grade { inputs, json, report_dir, .. } => {
                assert_eq!(inputs, vec![PathBuf::from("a.jpg"), PathBuf::from("dir")]);
                assert!(json);
                assert!(report_dir.is_none());
            }
            _ => panic!("expected grade"),
        }
    }

    #[test]
    fn test_parse_dashboard() {
        let cli = Cli::parse_from(["rubber-grade", "dashboard", "--tab", "analytics", "--role", "admin"]);
        match cli.command {
            Commands::Dashboard { tab, role, name } => {
                assert_eq!(tab, DashboardTab::Analytics);
                assert_eq!(role, Role::Admin);
                assert!(name.is_none());
            }
            _ => panic!("expected dashboard"),
        }
    }

    #[test]
    fn test_bad_tab_rejected() {
        assert!(Cli::try_parse_from(["rubber-grade", "dashboard", "--tab", "charts"]).is_err());
    }
}
