use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotifierKind {
    #[value(name = "dry-run", alias = "dryrun", alias = "log")]
    DryRun,
    Pushbullet,
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DryRun => write!(f, "dry-run"),
            Self::Pushbullet => write!(f, "pushbullet"),
        }
    }
}
