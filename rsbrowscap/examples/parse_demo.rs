//! rsbrowscap User-Agent 解析演示程序
//! 功能说明：
//! 1. 演示从 CSV 文本构建规则目录
//! 2. 多线程共享同一解析器并发查询
//! 3. 输出结构化 JSON 结果与耗时统计
//!
//! 运行命令：
//! cargo run --example parse_demo

use env_logger::{Builder, Env, Target};
use rsbrowscap::{BrowscapParser, CustomConfigBuilder, RuleLoader, SchemaTier, UserAgentParser};
use serde_json::to_string_pretty;
use std::{error::Error, sync::Arc, thread, time::Instant};

/// 演示用规则（browscap 完整版 CSV 的 48 列布局，仅填充关键列）
fn demo_csv() -> String {
    let rows: [&[(usize, &str)]; 4] = [
        &[(0, "*")],
        &[
            (0, "Mozilla/5.0 (*Windows NT 10.0*)*Gecko*Firefox/*"),
            (5, "Firefox"),
            (6, "Browser"),
            (13, "Win10"),
            (14, "10.0"),
            (43, "Desktop"),
        ],
        &[
            (0, "Mozilla/5.0 (iPhone*CPU iPhone OS 17?0* like Mac OS X)*Version/17.0*Safari/*"),
            (5, "Safari"),
            (6, "Browser"),
            (11, "17"),
            (13, "iOS"),
            (41, "iPhone"),
            (43, "Mobile Phone"),
            (46, "Apple"),
        ],
        &[(0, "*Googlebot/2.1*"), (5, "Google Bot"), (6, "Bot/Crawler")],
    ];

    rows.iter()
        .map(|pairs| {
            let mut fields = vec![String::new(); 48];
            for (col, value) in pairs.iter() {
                fields[*col] = format!("\"{}\"", value);
            }
            fields.join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Stdout)
        .init();

    // ========== 2. 构建规则目录 ==========
    let config = CustomConfigBuilder::new().tier(SchemaTier::Standard).build();
    let start_instant = Instant::now();
    let catalog = RuleLoader::new(config)?.load_str(&demo_csv())?;
    let parser = Arc::new(BrowscapParser::new(catalog));
    println!(
        "✅ 规则目录构建完成 | 规则数: {} | 耗时: {:.3} 毫秒",
        parser.rules().len(),
        start_instant.elapsed().as_secs_f64() * 1000.0
    );

    // ========== 3. 并发解析 ==========
    let user_agents = [
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:120.0) Gecko/20100101 Firefox/120.0",
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
        "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
        "curl/8.4.0",
    ];

    let handles: Vec<_> = user_agents
        .iter()
        .map(|&ua| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || (ua, parser.parse(ua)))
        })
        .collect();

    // ========== 4. 输出结构化结果 ==========
    for handle in handles {
        let (ua, caps) = handle.join().map_err(|_| "解析线程异常退出")?;
        println!("\n📊 {}\n   {}", ua, caps);
        println!("{}", to_string_pretty(&*caps)?);
    }

    Ok(())
}
