//! skiff CLI - release-directory deploys over SSH
//!
//! Usage: skiff [--app APP] [--host HOSTS] [--branch REV] [OPTIONS]

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use skiff::application::deploy::parse_hosts;
use skiff::config::{self, DeployConfig};
use skiff::domain::ports::{Clock, SessionConnector};
use skiff::infrastructure::{logging, SshOptions, TracingLog};
use skiff::presentation::output::{
    create_renderer, exit_code, HostOutcome, OutputFormat, EXIT_USAGE,
};
use skiff::presentation::prompt::DeployInputs;
use skiff::presentation::{create_deploy_use_case, create_dry_run_use_case};
use skiff::{DeployRequest, DeployUseCase};

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, std::io::stderr().is_terminal());

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let inputs = DeployInputs {
        app: cli.app.clone(),
        hosts: cli.hosts.clone(),
        branch: cli.branch.clone(),
    }
    .complete(std::io::stdin().is_terminal())?;

    let hosts = parse_hosts(&inputs.hosts);
    if hosts.is_empty() {
        anyhow::bail!("no servers given to deploy to");
    }

    let config = load_config(&cli.config_dir, &inputs.app)?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    if format == OutputFormat::Text {
        println!(
            "Preparing to deploy {} of {} to {} ...",
            inputs.branch,
            inputs.app,
            hosts.join(",")
        );
    }

    let outcomes = if cli.dry_run {
        deploy_hosts(&create_dry_run_use_case(), &hosts, &inputs.app, &inputs.branch, &config)
    } else {
        let options = SshOptions {
            port: cli.port,
            identity: cli.identity.clone(),
            connect_timeout: cli.connect_timeout,
            ..Default::default()
        }
        .with_env_overrides();
        deploy_hosts(
            &create_deploy_use_case(options),
            &hosts,
            &inputs.app,
            &inputs.branch,
            &config,
        )
    };

    let renderer = create_renderer(format, std::io::stdout().is_terminal(), cli.dry_run);
    print!("{}", renderer.render(&outcomes));

    Ok(exit_code(&outcomes))
}

fn load_config(dir: &Path, app: &str) -> Result<DeployConfig> {
    let path = dir.join(DeployConfig::file_name(app));
    let (config, warnings) = config::load_with_warnings(&path)?;

    for w in warnings {
        match (w.line, w.suggestion) {
            (Some(line), Some(suggestion)) => tracing::warn!(
                "unknown config key '{}' in {}:{} (did you mean '{}'?)",
                w.key,
                w.file.display(),
                line,
                suggestion
            ),
            (Some(line), None) => tracing::warn!(
                "unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            ),
            (None, _) => {
                tracing::warn!("unknown config key '{}' in {}", w.key, w.file.display())
            }
        }
    }

    Ok(config)
}

/// Deploy to each host in turn. Every host gets its own session and log;
/// an unreachable host does not stop the ones after it.
fn deploy_hosts<C, K>(
    use_case: &DeployUseCase<C, K>,
    hosts: &[String],
    app: &str,
    branch: &str,
    config: &DeployConfig,
) -> Vec<HostOutcome>
where
    C: SessionConnector,
    K: Clock,
{
    hosts
        .iter()
        .map(|host| {
            let request = DeployRequest::new(host.as_str(), app, branch);
            let log = Arc::new(TracingLog::new(host.as_str()));
            match use_case.execute(&request, config, log) {
                Ok(report) => HostOutcome::Deployed(report),
                Err(err) => {
                    tracing::error!(host = %host, "{}", err);
                    HostOutcome::unreachable(host, &err)
                }
            }
        })
        .collect()
}
