use std::path::PathBuf;

use clap::Parser;

use crate::services::{CourseScope, SyncPlan};

/// Load the NU course catalog into the local database
#[derive(Parser, Debug)]
#[command(name = "catalog-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sync courses for one term name, or `all` for every term
    #[arg(
        short = 'c',
        long,
        value_name = "TERM",
        conflicts_with_all = ["terms", "schools", "subjects", "instructors", "buildings", "rooms"]
    )]
    pub courses: Option<String>,

    /// Sync terms
    #[arg(short = 't', long)]
    pub terms: bool,

    /// Sync schools
    #[arg(short = 'S', long)]
    pub schools: bool,

    /// Sync subjects for every known term and school
    #[arg(short = 's', long)]
    pub subjects: bool,

    /// Sync instructors for every known subject
    #[arg(short = 'i', long)]
    pub instructors: bool,

    /// Sync buildings
    #[arg(short = 'b', long)]
    pub buildings: bool,

    /// Sync rooms for every known building
    #[arg(short = 'r', long)]
    pub rooms: bool,

    /// Config file (defaults to ~/.config/nuclasses/config.*)
    #[arg(long, env = "NUCLASSES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Apply the bundled schema before syncing
    #[arg(long)]
    pub migrate: bool,

    /// Run everything, then roll back instead of committing
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn plan(&self) -> SyncPlan {
        SyncPlan {
            courses: self.courses.as_deref().map(CourseScope::parse),
            terms: self.terms,
            schools: self.schools,
            subjects: self.subjects,
            instructors: self.instructors,
            buildings: self.buildings,
            rooms: self.rooms,
            dry_run: self.dry_run,
        }
    }
}
