use super::common::ViewModeArgs;
use clap::Subcommand;
use crashsig_types::BucketId;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List and manage signatures (crash buckets)")]
    Signature {
        #[command(subcommand)]
        command: SignatureCommand,
    },

    #[command(about = "List and submit crash entries")]
    Crash {
        #[command(subcommand)]
        command: CrashCommand,
    },

    #[command(about = "Manage external bug trackers")]
    Provider {
        #[command(subcommand)]
        command: ProviderCommand,
    },

    #[command(about = "Manage index database operations")]
    Index {
        #[command(subcommand)]
        command: IndexCommand,
    },

    #[command(about = "Serve signature and crash pages over HTTP")]
    Serve {
        #[arg(long, help = "IP address to bind the server to")]
        bind_address: Option<String>,

        #[arg(long, help = "Port on which the server will listen")]
        port: Option<u16>,
    },
}

#[derive(Subcommand)]
pub enum SignatureCommand {
    #[command(about = "List unreported signatures (or all / watched)")]
    List {
        #[arg(
            long,
            conflicts_with = "watched",
            help = "Include signatures with a bug"
        )]
        all: bool,

        #[arg(long, help = "Only signatures watched by the configured user")]
        watched: bool,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show a signature with its crash count")]
    Show {
        id: BucketId,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Create a signature")]
    New {
        #[arg(long, help = "Signature JSON, or @path to read it from a file")]
        signature: String,

        #[arg(long)]
        short_description: String,

        #[arg(long)]
        frequent: bool,

        #[arg(long)]
        permanent: bool,
    },

    #[command(about = "Edit a signature's text or description")]
    Edit {
        id: BucketId,

        #[arg(long, help = "Signature JSON, or @path to read it from a file")]
        signature: Option<String>,

        #[arg(long)]
        short_description: Option<String>,
    },

    #[command(about = "Delete a signature, keeping its crashes unbucketed")]
    Delete { id: BucketId },

    #[command(about = "Link an external bug to a signature")]
    LinkBug {
        id: BucketId,

        #[arg(long, help = "Hostname of a registered bug provider")]
        provider: String,

        #[arg(long)]
        external_id: String,

        #[arg(long)]
        closed: bool,
    },

    #[command(about = "Remove the bug linked to a signature")]
    UnlinkBug { id: BucketId },

    #[command(about = "Mark the bug linked to a signature as fixed")]
    CloseBug {
        id: BucketId,

        #[arg(long, help = "Mark the bug open again")]
        reopen: bool,
    },

    #[command(about = "Propose or clear an optimized signature")]
    Optimize {
        id: BucketId,

        #[arg(
            long,
            required_unless_present = "clear",
            help = "Proposed signature JSON, or @path"
        )]
        signature: Option<String>,

        #[arg(long, conflicts_with = "signature")]
        clear: bool,
    },

    #[command(about = "Watch a signature")]
    Watch { id: BucketId },

    #[command(about = "Stop watching a signature")]
    Unwatch { id: BucketId },
}

#[derive(Subcommand)]
pub enum CrashCommand {
    #[command(about = "List crashes not assigned to any signature")]
    List {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Submit a crash entry")]
    Add {
        #[arg(long)]
        product: String,

        #[arg(long)]
        product_version: Option<String>,

        #[arg(long)]
        platform: String,

        #[arg(long)]
        os: String,

        #[arg(long, help = "Testcase quality (lower is better)")]
        quality: Option<i64>,

        #[arg(long)]
        bucket: Option<BucketId>,

        #[arg(long)]
        short_signature: Option<String>,

        #[arg(long)]
        stdout_file: Option<PathBuf>,

        #[arg(long)]
        stderr_file: Option<PathBuf>,

        #[arg(long)]
        crashdata_file: Option<PathBuf>,
    },

    #[command(about = "Assign a crash to a signature, or unassign it")]
    Assign {
        crash_id: i64,

        #[arg(long, help = "Target signature; omit to unassign")]
        bucket: Option<BucketId>,
    },
}

#[derive(Subcommand)]
pub enum ProviderCommand {
    #[command(about = "Register (or update) a bug tracker")]
    Add {
        #[arg(long)]
        hostname: String,

        #[arg(long, help = "Bug URL containing %s for the external bug id")]
        url_template: String,

        #[arg(long, default_value = "BugzillaProvider")]
        classname: String,
    },

    #[command(about = "List registered bug trackers")]
    List,
}

#[derive(Subcommand)]
pub enum IndexCommand {
    #[command(about = "Compact the index database")]
    Vacuum,
}
