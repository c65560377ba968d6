// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Thetis CLI entrypoint.
//!
//! By default this serves the diagram viewer over MCP streamable HTTP at
//! `http://127.0.0.1:<port>/mcp`, backed by a graph folder on disk.
//!
//! Use `--mcp` to serve MCP over stdio instead (intended for tool integrations), and `--demo`
//! for the built-in demo diagrams.

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};

use thetis::panel::DiagramPanel;
use thetis::service::{DiagramService, FixtureService};
use thetis::store::GraphFolder;

const DEFAULT_MCP_HTTP_PORT: u16 = 27461;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<graph-dir>] [--mcp-http-port <port>]\n  {program} --demo [--mcp-http-port <port>]\n  {program} [<graph-dir>] --mcp\n  {program} --demo --mcp\n\nDefault mode serves MCP over streamable HTTP at `http://127.0.0.1:<port>/mcp`.\n--mcp-http-port selects the port (0 = ephemeral; default {DEFAULT_MCP_HTTP_PORT}).\n\nIf graph-dir is omitted, the current working directory is used.\n--demo uses the built-in demo diagrams and cannot be combined with a graph dir.\n--mcp serves MCP over stdio instead (intended for tool integrations)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    mcp: bool,
    demo: bool,
    graph_dir: Option<String>,
    mcp_http_port: Option<u16>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mcp" => {
                if options.mcp {
                    return Err(());
                }
                options.mcp = true;
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--mcp-http-port" => {
                if options.mcp_http_port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.mcp_http_port = Some(port);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.graph_dir.is_some() {
                    return Err(());
                }
                options.graph_dir = Some(arg);
            }
        }
    }

    if options.demo && options.graph_dir.is_some() {
        return Err(());
    }

    if options.mcp && options.mcp_http_port.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "thetis".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let service: Arc<dyn DiagramService> = if options.demo {
            Arc::new(FixtureService::demo())
        } else {
            let dir = options.graph_dir.unwrap_or_else(|| ".".to_owned());
            Arc::new(GraphFolder::new(dir))
        };
        let mcp = thetis::mcp::ThetisMcp::new(DiagramPanel::new(service));

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        if options.mcp {
            runtime.block_on(mcp.serve_stdio())?;
            return Ok(());
        }

        let mcp_http_port = options.mcp_http_port.unwrap_or(DEFAULT_MCP_HTTP_PORT);
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", mcp_http_port)).await?;

            let config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..StreamableHttpServerConfig::default()
            };
            let shutdown_token = config.cancellation_token.clone();

            let session_manager = Arc::new(LocalSessionManager::default());
            let mcp_service = {
                let mcp = mcp.clone();
                StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config)
            };

            let router = Router::new().nest_service("/mcp", mcp_service);
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = tokio::signal::ctrl_c().await;
                    shutdown_token.cancel();
                })
                .await?;

            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("thetis: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(["--demo".to_owned()].into_iter()).expect("parse options");
        assert!(options.demo);
        assert!(!options.mcp);
        assert!(options.graph_dir.is_none());
        assert_eq!(options.mcp_http_port, None);
    }

    #[test]
    fn parses_mcp_flag() {
        let options = parse_options(["--mcp".to_owned()].into_iter()).expect("parse options");
        assert!(options.mcp);
        assert!(!options.demo);
        assert!(options.graph_dir.is_none());
        assert_eq!(options.mcp_http_port, None);
    }

    #[test]
    fn parses_positional_graph_dir() {
        let options = parse_options(["some/dir".to_owned()].into_iter()).expect("parse options");
        assert_eq!(options.graph_dir.as_deref(), Some("some/dir"));
        assert!(!options.mcp);
        assert!(!options.demo);
    }

    #[test]
    fn parses_positional_graph_dir_with_mcp() {
        let options = parse_options(["some/dir".to_owned(), "--mcp".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.graph_dir.as_deref(), Some("some/dir"));
        assert!(options.mcp);
        assert!(!options.demo);
    }

    #[test]
    fn parses_mcp_http_port() {
        let options = parse_options(["--mcp-http-port".to_owned(), "1234".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.mcp_http_port, Some(1234));
        assert!(!options.mcp);
    }

    #[test]
    fn rejects_mcp_http_port_with_stdio_mcp_mode() {
        parse_options(
            ["--mcp".to_owned(), "--mcp-http-port".to_owned(), "0".to_owned()].into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn parses_demo_and_mcp_in_any_order() {
        let options = parse_options(["--demo".to_owned(), "--mcp".to_owned()].into_iter())
            .expect("parse options");
        assert!(options.demo);
        assert!(options.mcp);

        let options = parse_options(["--mcp".to_owned(), "--demo".to_owned()].into_iter())
            .expect("parse options");
        assert!(options.demo);
        assert!(options.mcp);
    }

    #[test]
    fn rejects_demo_with_graph_dir() {
        parse_options(["--demo".to_owned(), "graphs".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(["--nope".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(["--demo".to_owned(), "--demo".to_owned()].into_iter()).unwrap_err();

        parse_options(["--mcp".to_owned(), "--mcp".to_owned()].into_iter()).unwrap_err();

        parse_options(
            [
                "--mcp-http-port".to_owned(),
                "1".to_owned(),
                "--mcp-http-port".to_owned(),
                "2".to_owned(),
            ]
            .into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_multiple_positional_graph_dirs() {
        parse_options(["one".to_owned(), "two".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_missing_port_value() {
        parse_options(["--mcp-http-port".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_non_numeric_port() {
        parse_options(["--mcp-http-port".to_owned(), "http".to_owned()].into_iter()).unwrap_err();
    }
}
