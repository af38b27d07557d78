use std::path::PathBuf;

use clap::Parser;

use skiff::infrastructure::ssh::DEFAULT_CONNECT_TIMEOUT;

/// skiff - release-directory deploys over SSH
#[derive(Parser, Debug)]
#[command(name = "skiff")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Values left out are prompted for when stdin is a terminal.")]
pub struct Cli {
    /// Application to deploy (reads <APP>.json)
    #[arg(short, long)]
    pub app: Option<String>,

    /// Server(s) to deploy to, comma-separated
    #[arg(long = "host", visible_alias = "hosts")]
    pub hosts: Option<String>,

    /// Branch, tag or revision to check out
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Directory holding <APP>.json
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,

    /// SSH port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// SSH private key
    #[arg(short, long)]
    pub identity: Option<PathBuf>,

    /// Seconds to wait for each SSH connection
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT)]
    pub connect_timeout: u64,

    /// Print the commands a deploy would run without connecting
    #[arg(long)]
    pub dry_run: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["skiff"]).unwrap();
        assert!(cli.app.is_none());
        assert!(cli.hosts.is_none());
        assert!(cli.branch.is_none());
        assert_eq!(cli.config_dir, PathBuf::from("."));
        assert_eq!(cli.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_parse_full() {
        let cli = Cli::try_parse_from([
            "skiff",
            "--app",
            "shop",
            "--host",
            "web1,web2",
            "--branch",
            "v1.2.3",
            "-p",
            "2222",
            "--dry-run",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.app.as_deref(), Some("shop"));
        assert_eq!(cli.hosts.as_deref(), Some("web1,web2"));
        assert_eq!(cli.branch.as_deref(), Some("v1.2.3"));
        assert_eq!(cli.port, Some(2222));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_hosts_alias() {
        let cli = Cli::try_parse_from(["skiff", "--hosts", "web1"]).unwrap();
        assert_eq!(cli.hosts.as_deref(), Some("web1"));
    }

    #[test]
    fn test_cli_rejects_bad_port() {
        assert!(Cli::try_parse_from(["skiff", "--port", "99999"]).is_err());
    }
}
