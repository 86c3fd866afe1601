//! rsbrowscap 命令行工具
//! 加载 browscap CSV，解析参数或标准输入中的 User-Agent，逐行输出 JSON
//!
//! 运行命令：
//! cargo run --features cli --bin rsbrowscap -- --rules browscap.csv "Mozilla/5.0 ..."

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env, Target};
use rsbrowscap::{
    BrowscapParser, Capabilities, CustomConfigBuilder, FieldLayout, RsbResult, SchemaTier,
};
use serde::Serialize;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

/// browscap User-Agent parser.
#[derive(Parser)]
#[clap(version)]
struct Opt {
    /// Path to the browscap CSV file.
    #[arg(short, long, env = "RSBROWSCAP_RULES")]
    rules: PathBuf,

    /// Attribute set to read from the CSV.
    #[arg(long, value_enum, default_value = "basic")]
    tier: TierOption,

    /// JSON field layout file, overrides --tier.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(short, long)]
    pretty: bool,

    /// User agents to parse; read from stdin (one per line) when omitted.
    user_agents: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TierOption {
    Basic,
    Standard,
    Extended,
}

impl From<TierOption> for SchemaTier {
    fn from(tier: TierOption) -> Self {
        match tier {
            TierOption::Basic => SchemaTier::Basic,
            TierOption::Standard => SchemaTier::Standard,
            TierOption::Extended => SchemaTier::Extended,
        }
    }
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    user_agent: &'a str,
    matched: &'a str,
    is_default: bool,
    capabilities: &'a Capabilities,
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();

    if let Err(e) = run(Opt::parse()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(opt: Opt) -> RsbResult<()> {
    let layout = match &opt.layout {
        Some(path) => FieldLayout::from_json_file(path)?,
        None => FieldLayout::with_tier(opt.tier.into()),
    };
    let config = CustomConfigBuilder::new().layout(layout).build();

    let started = Instant::now();
    let parser = BrowscapParser::from_file_with_config(&opt.rules, config)?;
    log::info!(
        "已加载 {} 条规则，耗时{:?}",
        parser.catalog().len(),
        started.elapsed()
    );

    let mut out = stdout().lock();
    if opt.user_agents.is_empty() {
        for line in stdin().lock().lines() {
            let line = line?;
            print_one(&mut out, &parser, line.trim_end(), opt.pretty)?;
        }
    } else {
        for ua in &opt.user_agents {
            print_one(&mut out, &parser, ua, opt.pretty)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn print_one(
    out: &mut impl Write,
    parser: &BrowscapParser,
    user_agent: &str,
    pretty: bool,
) -> RsbResult<()> {
    let rule = parser.lookup(user_agent);
    let output = ParseOutput {
        user_agent,
        matched: rule.pattern(),
        is_default: rule.is_wildcard(),
        capabilities: rule.capabilities(),
    };
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &output)?;
    } else {
        serde_json::to_writer(&mut *out, &output)?;
    }
    writeln!(out)?;
    Ok(())
}
