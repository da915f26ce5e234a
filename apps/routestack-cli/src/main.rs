//! RouteStack CLI - resolve S3-compatible endpoints from the command line.
//!
//! Parameters are loaded from the standard environment variables first
//! (`AWS_REGION`, `AWS_USE_FIPS_ENDPOINT`, ...) and then overridden by
//! flags. The resolved endpoint is printed as JSON on stdout; a resolution
//! failure prints the error on stderr and exits non-zero.
//!
//! # Usage
//!
//! ```text
//! routestack-cli --region us-west-2 --bucket my-bucket
//! routestack-cli --region us-east-1 --bucket mybucket--use1-az1--x-s3 --fips
//! AWS_REGION=eu-west-1 routestack-cli --bucket my-bucket --dual-stack
//! ```

use anyhow::{Context, Result, bail};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use routestack_s3::{EndpointParams, resolve_endpoint};

const USAGE: &str = "\
Usage: routestack-cli [OPTIONS]

Options:
      --region <REGION>              Region to resolve in
      --bucket <BUCKET>              Bucket name, alias, or ARN
      --endpoint <URL>               Custom endpoint URL
      --key <KEY>                    Object key
      --prefix <PREFIX>              Listing prefix
      --copy-source <SOURCE>         Copy source
      --fips                         Use FIPS endpoints
      --dual-stack                   Use dual-stack endpoints
      --accelerate                   Use transfer acceleration
      --force-path-style             Force path-style addressing
      --global-endpoint              Prefer the legacy global endpoint
      --disable-mrap                 Refuse Multi-Region Access Point ARNs
      --object-lambda                Use an Object Lambda endpoint
      --use-arn-region               Honor the region in a bucket ARN
      --express-control              Use the S3 Express control endpoint
      --disable-express-session-auth Sign S3 Express with plain SigV4
      --disable-access-points        Refuse access point ARNs
      --pretty                       Pretty-print the JSON output
  -h, --help                         Print this help
";

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `LOG_LEVEL` (default
/// `warn`, keeping stdout clean for the JSON output).
fn init_tracing() {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_owned());
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

/// Apply command-line flags on top of environment-derived parameters.
fn apply_args(
    mut params: EndpointParams,
    mut args: impl Iterator<Item = String>,
) -> Result<(EndpointParams, bool)> {
    let mut pretty = false;

    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next().with_context(|| format!("{name} requires a value"))
        };
        match arg.as_str() {
            "--region" => params.region = Some(value("--region")?.into()),
            "--bucket" => params.bucket = Some(value("--bucket")?),
            "--endpoint" => params.endpoint = Some(value("--endpoint")?),
            "--key" => params.key = Some(value("--key")?),
            "--prefix" => params.prefix = Some(value("--prefix")?),
            "--copy-source" => params.copy_source = Some(value("--copy-source")?),
            "--fips" => params.use_fips = Some(true),
            "--dual-stack" => params.use_dual_stack = Some(true),
            "--accelerate" => params.accelerate = Some(true),
            "--force-path-style" => params.force_path_style = Some(true),
            "--global-endpoint" => params.use_global_endpoint = Some(true),
            "--disable-mrap" => params.disable_multi_region_access_points = Some(true),
            "--object-lambda" => params.use_object_lambda_endpoint = Some(true),
            "--use-arn-region" => params.use_arn_region = Some(true),
            "--express-control" => params.use_s3_express_control_endpoint = Some(true),
            "--disable-express-session-auth" => {
                params.disable_s3_express_session_auth = Some(true);
            }
            "--disable-access-points" => params.disable_access_points = Some(true),
            "--pretty" => pretty = true,
            "-h" | "--help" => {
                print!("{USAGE}");
                std::process::exit(0);
            }
            other => bail!("unrecognized argument `{other}`\n\n{USAGE}"),
        }
    }

    Ok((params, pretty))
}

fn main() -> Result<()> {
    init_tracing();

    let (params, pretty) = apply_args(EndpointParams::from_env(), std::env::args().skip(1))?;
    debug!(?params, "resolving");

    match resolve_endpoint(&params) {
        Ok(endpoint) => {
            let json = if pretty {
                serde_json::to_string_pretty(&endpoint)?
            } else {
                serde_json::to_string(&endpoint)?
            };
            println!("{json}");
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", serde_json::json!({ "error": err.to_string() }));
            std::process::exit(1);
        }
    }
}
